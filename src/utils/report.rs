use super::{Error, Result};
use crate::scan::ScanResult;
use itertools::Itertools;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Renders one result as its labelled block, blank line included.
pub fn format_result(result: &ScanResult, motif: &str) -> String {
    let positions = result.positions.iter().join(", ");
    let contexts = result
        .contexts
        .iter()
        .map(|context| format!("'{}'", String::from_utf8_lossy(context)))
        .join(", ");
    format!(
        "name: {}\nsearch string: {}\nnumber of times found: {}\npositions of {}: [{}]\nsequence contexts found: [{}]\n\n",
        result.id,
        motif,
        result.count(),
        motif,
        positions,
        contexts
    )
}

/// Destination for the report: a file when a path is given, otherwise stdout.
pub struct ReportWriter {
    writer: BufWriter<Box<dyn Write>>,
    path: Option<PathBuf>,
}

impl ReportWriter {
    pub fn new(output: Option<&Path>) -> Result<Self> {
        let writer: Box<dyn Write> = match output {
            Some(path) => {
                let file = File::create(path).map_err(|source| Error::OutputUnwritable {
                    path: path.to_path_buf(),
                    source,
                })?;
                Box::new(file)
            }
            None => Box::new(io::stdout()),
        };
        log::debug!(
            "Writing report to {}",
            output.map_or("stdout".to_string(), |p| p.display().to_string())
        );
        Ok(ReportWriter {
            writer: BufWriter::new(writer),
            path: output.map(Path::to_path_buf),
        })
    }

    pub fn write_results(&mut self, results: &[ScanResult], motif: &str) -> Result<()> {
        for result in results {
            self.writer
                .write_all(format_result(result, motif).as_bytes())
                .map_err(|e| self.write_error(e))?;
        }
        self.writer.flush().map_err(|e| self.write_error(e))
    }

    fn write_error(&self, source: io::Error) -> Error {
        match &self.path {
            Some(path) => Error::OutputUnwritable {
                path: path.clone(),
                source,
            },
            None => Error::Stdout(source),
        }
    }
}

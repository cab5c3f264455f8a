use super::{Error, Result};
use crate::scan::SequenceRecord;
use flate2::read::MultiGzDecoder;
use seq_io::fasta::{self, Record};
use std::fs::File;
use std::io::Read as ioRead;
use std::path::Path;

/// Anything that yields sequence records in order. The scanner never sees
/// the file format behind it.
pub trait SequenceSource: Iterator<Item = Result<SequenceRecord>> {}

impl<T> SequenceSource for T where T: Iterator<Item = Result<SequenceRecord>> {}

/// FASTA records read lazily from a plain or gzipped file. A bare `>` line
/// is a record with an empty id and no bases, not the end of input.
struct FastaSource {
    reader: fasta::Reader<Box<dyn ioRead>>,
}

impl Iterator for FastaSource {
    type Item = Result<SequenceRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.next().map(|result| -> Result<SequenceRecord> {
            let record = result.map_err(|e| Error::Fasta(e.to_string()))?;
            let id = record.id().map_err(|e| Error::Fasta(e.to_string()))?;
            Ok(SequenceRecord::new(id, record.owned_seq()))
        })
    }
}

/// Opens `path` for reading; fails with [`Error::InputNotFound`] when the
/// path is not an existing file.
pub fn open_fasta_source(path: &Path) -> Result<impl SequenceSource> {
    if !path.is_file() {
        return Err(Error::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    let reader = open_fasta_reader(path)?;
    Ok(FastaSource {
        reader: fasta::Reader::new(reader),
    })
}

fn open_fasta_reader(path: &Path) -> Result<Box<dyn ioRead>> {
    fn is_gzipped(path: &Path) -> bool {
        let path_str = path.to_string_lossy().to_lowercase();
        path_str.ends_with(".gz") || path_str.ends_with(".gzip")
    }
    let file = File::open(path).map_err(|source| Error::InputUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    if is_gzipped(path) {
        let gz_decoder = MultiGzDecoder::new(file);
        if gz_decoder.header().is_some() {
            Ok(Box::new(gz_decoder))
        } else {
            Err(Error::InvalidGzip {
                path: path.to_path_buf(),
            })
        }
    } else {
        Ok(Box::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::{write::GzEncoder, Compression};
    use std::io::Write;

    fn collect(path: &Path) -> Vec<SequenceRecord> {
        open_fasta_source(path)
            .unwrap()
            .collect::<Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn reads_multiline_records_and_drops_descriptions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("two.fasta");
        std::fs::write(
            &path,
            ">sequence1 first test record\nATCGATT\nGGCCGCATCGATGCC\n>sequence2\ngggatcgatt\n",
        )
        .unwrap();

        let records = collect(&path);
        assert_eq!(
            records,
            vec![
                SequenceRecord::new("sequence1", "ATCGATTGGCCGCATCGATGCC"),
                SequenceRecord::new("sequence2", "gggatcgatt"),
            ]
        );
    }

    #[test]
    fn bare_header_is_an_empty_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bare.fasta");
        std::fs::write(&path, ">a\nGATC\n>\n>b\nGATC\n").unwrap();

        assert_eq!(
            collect(&path),
            vec![
                SequenceRecord::new("a", "GATC"),
                SequenceRecord::new("", ""),
                SequenceRecord::new("b", "GATC"),
            ]
        );
    }

    #[test]
    fn reads_gzipped_fasta() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("one.fa.gz");
        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        encoder.write_all(b">gz\nGATC\n").unwrap();
        encoder.finish().unwrap();

        assert_eq!(collect(&path), vec![SequenceRecord::new("gz", "GATC")]);
    }

    #[test]
    fn empty_file_yields_no_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.fasta");
        File::create(&path).unwrap();
        assert!(collect(&path).is_empty());
    }

    #[test]
    fn missing_path_is_input_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("positive_ctrl.fasta");
        assert!(matches!(
            open_fasta_source(&missing),
            Err(Error::InputNotFound { .. })
        ));
        assert!(matches!(
            open_fasta_source(dir.path()),
            Err(Error::InputNotFound { .. })
        ));
    }

    #[test]
    fn text_without_header_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.fasta");
        std::fs::write(&path, "GATCGATC\n").unwrap();
        let first = open_fasta_source(&path).unwrap().next();
        assert!(matches!(first, Some(Err(Error::Fasta(_)))));
    }
}

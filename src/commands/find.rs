use crate::cli::FindArgs;
use crate::scan::{process, ScanParameters};
use crate::utils::{open_fasta_source, ReportWriter, Result};

pub fn find(args: FindArgs) -> Result<()> {
    let params = ScanParameters::new(&args.motif, args.num_bases)?;
    let source = open_fasta_source(&args.input_path)?;
    log::debug!(
        "Searching {} for {} with {} flanking bases",
        args.input_path.display(),
        params.motif,
        params.context_radius
    );

    let results = process(source, &params)?;

    let mut writer = ReportWriter::new(args.output_path.as_deref())?;
    writer.write_results(&results, &params.motif)?;
    Ok(())
}

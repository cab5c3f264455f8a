pub mod error;
pub mod readers;
pub mod report;

pub use error::{handle_error_and_exit, Error, Result};
pub use readers::{open_fasta_source, SequenceSource};
pub use report::{format_result, ReportWriter};

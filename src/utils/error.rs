use std::{io, path::PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The input path does not name an existing file. The message is fixed.
    #[error("The input file was not found.")]
    InputNotFound { path: PathBuf },

    #[error("Unable to open the input file '{}': {source}", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid gzip header: {}", path.display())]
    InvalidGzip { path: PathBuf },

    #[error("Malformed FASTA input: {0}")]
    Fasta(String),

    #[error("Unable to create or write to the output file '{}': {source}", path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unable to write to standard output: {0}")]
    Stdout(#[source] io::Error),

    #[error("Search string cannot be empty")]
    EmptyMotif,
}

pub fn handle_error_and_exit(err: Error) -> ! {
    log::error!("{}", err);
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_not_found_message_is_fixed() {
        let err = Error::InputNotFound {
            path: PathBuf::from("fasta_file/positive_ctrl.fasta"),
        };
        assert_eq!(err.to_string(), "The input file was not found.");
    }

    #[test]
    fn output_unwritable_names_path_and_cause() {
        let err = Error::OutputUnwritable {
            path: PathBuf::from("/nope/out.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "Unable to create or write to the output file '/nope/out.txt': denied"
        );
    }
}

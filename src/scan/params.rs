use crate::utils::{Error, Result};

/// Motif and flank width shared by every record of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanParameters {
    pub motif: String,
    pub context_radius: usize,
}

impl ScanParameters {
    /// Uppercases `motif`; a blank motif is rejected.
    pub fn new(motif: impl AsRef<str>, context_radius: usize) -> Result<Self> {
        let motif = motif.as_ref().trim().to_ascii_uppercase();
        if motif.is_empty() {
            return Err(Error::EmptyMotif);
        }
        Ok(Self {
            motif,
            context_radius,
        })
    }
}

use super::{scan, ScanParameters};
use crate::utils::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    pub id: String,
    pub bases: Vec<u8>,
}

impl SequenceRecord {
    pub fn new(id: impl Into<String>, bases: impl Into<Vec<u8>>) -> Self {
        Self {
            id: id.into(),
            bases: bases.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub id: String,
    pub positions: Vec<usize>,
    pub contexts: Vec<Vec<u8>>,
}

impl ScanResult {
    pub fn count(&self) -> usize {
        self.positions.len()
    }
}

/// Scans every record in source order, one result per record.
///
/// Duplicate identifiers are kept as separate results. The first read error
/// from `records` stops the batch.
pub fn process<I>(records: I, params: &ScanParameters) -> Result<Vec<ScanResult>>
where
    I: IntoIterator<Item = Result<SequenceRecord>>,
{
    let motif = params.motif.as_bytes();
    let mut results = Vec::new();
    let mut total_sites = 0;

    for record in records {
        let SequenceRecord { id, mut bases } = record?;
        log::info!("Processing sequence: {}", id);
        bases.make_ascii_uppercase();

        let hits = scan(&bases, motif, params.context_radius);
        log::debug!("{}: {} sites in {} bases", id, hits.count(), bases.len());
        total_sites += hits.count();

        results.push(ScanResult {
            id,
            positions: hits.positions,
            contexts: hits.contexts,
        });
    }

    log::info!(
        "Scanned {} records, found {} {} sites",
        results.len(),
        total_sites,
        params.motif
    );
    Ok(results)
}

use memchr::memmem;

/// Sites found in one sequence. `positions[i]` is the 0-based start of the
/// i-th site and `contexts[i]` the bases around it, byte for byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanHits {
    pub positions: Vec<usize>,
    pub contexts: Vec<Vec<u8>>,
}

impl ScanHits {
    pub fn count(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Scans `sequence` left to right for non-overlapping copies of `motif`.
///
/// After a hit at `p` the search resumes at `p + motif.len()`, so a
/// self-overlapping motif is counted once per consumed region (`AA` occurs
/// once in `AAA`). Each context spans `context_radius` bases either side of
/// the hit, truncated at the sequence ends. Both inputs are expected to be
/// in the same case; an empty motif yields no hits.
pub fn scan(sequence: &[u8], motif: &[u8], context_radius: usize) -> ScanHits {
    let mut hits = ScanHits::default();
    if motif.is_empty() || motif.len() > sequence.len() {
        return hits;
    }

    let finder = memmem::Finder::new(motif);
    let mut cursor = 0;
    while cursor < sequence.len() {
        let Some(offset) = finder.find(&sequence[cursor..]) else {
            break;
        };
        let pos = cursor + offset;
        hits.positions.push(pos);
        hits.contexts
            .push(extract_context(sequence, pos, motif.len(), context_radius));
        cursor = pos + motif.len();
    }
    hits
}

fn extract_context(sequence: &[u8], pos: usize, motif_len: usize, radius: usize) -> Vec<u8> {
    let start = pos.saturating_sub(radius);
    let end = pos
        .saturating_add(motif_len)
        .saturating_add(radius)
        .min(sequence.len());
    sequence[start..end].to_vec()
}

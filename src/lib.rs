//! # methfinder
//! Locates exact occurrences of a methyltransferase recognition site in the
//! records of a FASTA file and reports, per record, how many sites were found,
//! where they start (0-based), and the bases flanking each site.
//!
//! ```bash
//!  ./methfinder --input plasmids.fasta --find GATC --numbases 3
//! ```

pub mod cli;
pub mod commands;
pub mod scan;
pub mod utils;

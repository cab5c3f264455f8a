pub mod batch;
pub mod params;
pub mod scanner;

pub use batch::{process, ScanResult, SequenceRecord};
pub use params::ScanParameters;
pub use scanner::{scan, ScanHits};

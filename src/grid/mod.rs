pub mod knowledge;
pub mod perception;

pub use knowledge::KnowledgeGrid;
pub use perception::{apply_scan, ScanReport};

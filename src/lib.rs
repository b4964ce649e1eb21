pub mod engine;
pub mod matcher;
pub mod normalizer;
pub mod reader;
pub mod report;
pub mod splitter;

// Re-export main types for convenient access
pub use engine::{calculate_similarity, MatchRecord, SimilarityReport, FLAGGED};
pub use matcher::AlgorithmKind;
pub use report::{AlgorithmRun, RunStats};

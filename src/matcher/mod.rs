// Two interchangeable exact-substring scanners behind one contract.
// The engine runs them over identical inputs so their timings and match
// sets stay comparable.

use clap::ValueEnum;
use serde::Serialize;

pub mod last_occurrence;
pub mod prefix_scan;

/// Selects which exact-substring scanner the engine dispatches to.
///
/// Both variants answer the same question with the same result for any
/// (pattern, text) pair; only their scanning strategy differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmKind {
    /// Linear scan driven by a precomputed failure table.
    PrefixFunction,
    /// Right-to-left scan driven by a bad-character table.
    LastOccurrence,
}

impl AlgorithmKind {
    /// Dispatch to the selected scanner.
    pub fn contains_exact(self, pattern: &str, text: &str) -> bool {
        match self {
            AlgorithmKind::PrefixFunction => prefix_scan::contains_exact(pattern, text),
            AlgorithmKind::LastOccurrence => last_occurrence::contains_exact(pattern, text),
        }
    }

    /// Human-readable name used in console output and run stats.
    pub fn label(self) -> &'static str {
        match self {
            AlgorithmKind::PrefixFunction => "prefix-function",
            AlgorithmKind::LastOccurrence => "last-occurrence",
        }
    }
}

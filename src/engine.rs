// Orchestrates one similarity pass: normalize the reference once, split
// the suspect into candidate sentences, and dispatch each surviving
// sentence to the selected scanner. Wall-clock timing covers the whole
// pass so runs of different algorithms stay comparable.

use std::time::Instant;

use serde::Serialize;

use crate::matcher::AlgorithmKind;
use crate::normalizer;
use crate::splitter::split_sentences;

/// Minimum sentence length, in chars, applied to both the raw and the
/// normalized form. Shorter fragments carry no signal worth flagging.
const MIN_PATTERN_CHARS: usize = 3;

/// Status label attached to every flagged sentence.
pub const FLAGGED: &str = "flagged";

/// A suspect sentence found verbatim (after normalization) in the reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    /// Original sentence text, before normalization.
    pub sentence: String,
    pub status: &'static str,
}

impl MatchRecord {
    fn flagged(sentence: &str) -> Self {
        Self {
            sentence: sentence.to_string(),
            status: FLAGGED,
        }
    }
}

/// Result of one similarity pass with one algorithm.
#[derive(Debug, Clone, Serialize)]
pub struct SimilarityReport {
    /// Share of candidate sentences found in the reference, in [0, 100].
    pub percentage: f64,
    /// Wall-clock duration of the pass, in seconds.
    pub elapsed_seconds: f64,
    /// Flagged sentences, in suspect-document order.
    pub matches: Vec<MatchRecord>,
}

impl SimilarityReport {
    fn empty() -> Self {
        Self {
            percentage: 0.0,
            elapsed_seconds: 0.0,
            matches: Vec::new(),
        }
    }
}

/// Measure how much of `suspect` appears verbatim inside `reference`,
/// sentence by sentence, using the selected scanning algorithm.
///
/// The reference is normalized once up front; each candidate sentence is
/// normalized independently at match time. That asymmetry is intentional:
/// it is part of what the per-algorithm timing measures.
pub fn calculate_similarity(
    suspect: &str,
    reference: &str,
    algorithm: AlgorithmKind,
) -> SimilarityReport {
    let start = Instant::now();

    let clean_reference = normalizer::normalize(reference);

    let candidates: Vec<&str> = split_sentences(suspect)
        .into_iter()
        .filter(|sentence| sentence.chars().count() >= MIN_PATTERN_CHARS)
        .collect();

    if candidates.is_empty() {
        return SimilarityReport::empty();
    }

    let mut matches = Vec::new();
    let mut pattern = String::new();

    for sentence in &candidates {
        normalizer::normalize_into(sentence, &mut pattern);

        // Shrunk below the gate by normalization: stays in the
        // denominator but is never scanned and can never match.
        if pattern.chars().count() < MIN_PATTERN_CHARS {
            continue;
        }

        if algorithm.contains_exact(&pattern, &clean_reference) {
            matches.push(MatchRecord::flagged(sentence));
        }
    }

    let elapsed_seconds = start.elapsed().as_secs_f64();
    let percentage = 100.0 * matches.len() as f64 / candidates.len() as f64;

    SimilarityReport {
        percentage,
        elapsed_seconds,
        matches,
    }
}

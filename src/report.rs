// Run-level statistics for the comparative view: one entry per algorithm
// run, which run was fastest, and whether the runs agreed on the match
// set. Serialized to JSON when the CLI is given --stats-out.

use serde::Serialize;

use crate::engine::SimilarityReport;
use crate::matcher::AlgorithmKind;

/// Summary of one algorithm's pass over the document pair.
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmRun {
    pub algorithm: &'static str,
    pub percentage: f64,
    pub elapsed_seconds: f64,
    pub match_count: usize,
}

impl AlgorithmRun {
    fn summarize(algorithm: AlgorithmKind, report: &SimilarityReport) -> Self {
        Self {
            algorithm: algorithm.label(),
            percentage: report.percentage,
            elapsed_seconds: report.elapsed_seconds,
            match_count: report.matches.len(),
        }
    }
}

/// Comparative stats across all algorithm runs of one invocation.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub runs: Vec<AlgorithmRun>,
    /// Whether every run produced the identical match set. Absent when
    /// fewer than two algorithms ran.
    pub agreement: Option<bool>,
    /// Label of the run with the smallest elapsed time. Absent when
    /// fewer than two algorithms ran.
    pub fastest: Option<&'static str>,
}

impl RunStats {
    pub fn from_runs(runs: &[(AlgorithmKind, SimilarityReport)]) -> Self {
        let summaries = runs
            .iter()
            .map(|(algorithm, report)| AlgorithmRun::summarize(*algorithm, report))
            .collect();

        let (agreement, fastest) = if runs.len() > 1 {
            let first = &runs[0].1;
            let agree = runs[1..].iter().all(|(_, report)| report.matches == first.matches);
            let fastest = runs
                .iter()
                .min_by(|a, b| a.1.elapsed_seconds.total_cmp(&b.1.elapsed_seconds))
                .map(|(algorithm, _)| algorithm.label());
            (Some(agree), fastest)
        } else {
            (None, None)
        };

        Self {
            runs: summaries,
            agreement,
            fastest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::calculate_similarity;

    fn run_both(suspect: &str, reference: &str) -> Vec<(AlgorithmKind, SimilarityReport)> {
        [AlgorithmKind::PrefixFunction, AlgorithmKind::LastOccurrence]
            .into_iter()
            .map(|algorithm| (algorithm, calculate_similarity(suspect, reference, algorithm)))
            .collect()
    }

    #[test]
    fn test_stats_from_two_agreeing_runs() {
        let runs = run_both("The cat sat. A dog ran far.", "the cat sat on the mat");
        let stats = RunStats::from_runs(&runs);

        assert_eq!(stats.runs.len(), 2);
        assert_eq!(stats.agreement, Some(true));
        assert!(stats.fastest.is_some());
        assert_eq!(stats.runs[0].algorithm, "prefix-function");
        assert_eq!(stats.runs[0].percentage, 50.0);
        assert_eq!(stats.runs[0].match_count, 1);
    }

    #[test]
    fn test_single_run_has_no_comparison_fields() {
        let runs = run_both("The cat sat.", "the cat sat");
        let stats = RunStats::from_runs(&runs[..1]);

        assert_eq!(stats.runs.len(), 1);
        assert_eq!(stats.agreement, None);
        assert_eq!(stats.fastest, None);
    }

    #[test]
    fn test_stats_serialize_to_json() {
        let runs = run_both("The cat sat.", "the cat sat");
        let stats = RunStats::from_runs(&runs);

        let json = serde_json::to_value(&stats).expect("stats should serialize");
        assert_eq!(json["runs"].as_array().unwrap().len(), 2);
        assert_eq!(json["agreement"], serde_json::json!(true));
        assert!(json["fastest"].is_string());
    }
}

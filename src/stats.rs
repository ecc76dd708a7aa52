use crate::diff::EditType;
use crate::runs::EditRun;
use itertools::Itertools;
use serde::Serialize;

/// How much of two documents falls into runs they share.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchStats {
    /// Longest common run, in characters.
    pub max_match_len: usize,
    pub avg_match_len: f64,
    /// Total characters in common runs.
    pub tot_match_len: usize,
    /// Number of deleted and inserted runs.
    pub num_edits: usize,
    /// Common characters as a percentage of the mean document length.
    pub pct_matching: f64,
}

/// Summarize `runs` computed from documents `a` and `b`.
///
/// Returns `None` when the documents have no run in common.
pub fn summarize(runs: &[EditRun], a: &str, b: &str) -> Option<MatchStats> {
    let matches = runs
        .iter()
        .filter(|run| run.tag == EditType::Eql)
        .map(EditRun::char_len)
        .collect_vec();

    let max_match_len = *matches.iter().max()?;
    let tot_match_len: usize = matches.iter().sum();
    let mean_len = (a.chars().count() + b.chars().count()) as f64 / 2.0;

    Some(MatchStats {
        max_match_len,
        avg_match_len: tot_match_len as f64 / matches.len() as f64,
        tot_match_len,
        num_edits: runs.len() - matches.len(),
        pct_matching: 100.0 * tot_match_len as f64 / mean_len,
    })
}

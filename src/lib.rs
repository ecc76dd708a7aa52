//! Word-level comparison of two versions of a text.
//!
//! Both documents are split into words, aligned with a shortest edit script,
//! and the script is merged into runs of common, deleted and inserted text.
//! The runs give a similarity summary in [`MatchStats`].

pub mod cli;
pub mod diff;
pub mod errors;
pub mod runs;
pub mod stats;
pub mod tokens;

use diff::{diff_with, Aligner, Myers};
pub use diff::EditType;
pub use runs::EditRun;
pub use stats::MatchStats;

/// Compare `a` with `b` word by word and merge the edits into runs.
pub fn compare_edits(a: &str, b: &str) -> Vec<EditRun> {
    compare_edits_with(&Myers, a, b)
}

pub fn compare_edits_with<A: Aligner + ?Sized>(aligner: &A, a: &str, b: &str) -> Vec<EditRun> {
    runs::merge_runs(&diff_with(aligner, a, b))
}

/// Summarize the runs shared by `a` and `b`, or `None` if there are none.
pub fn matching_segment_stats(a: &str, b: &str) -> Option<MatchStats> {
    matching_segment_stats_with(&Myers, a, b)
}

pub fn matching_segment_stats_with<A: Aligner + ?Sized>(
    aligner: &A,
    a: &str,
    b: &str,
) -> Option<MatchStats> {
    stats::summarize(&compare_edits_with(aligner, a, b), a, b)
}

// Building comparison results from two measurement runs
//
// The classification model in `comparison` and `report` only tags results
// that already exist. This module produces them: it pairs baseline and
// current entries by test name, computes the diffs (`current - baseline`
// and `diff / baseline`) and assigns a duration status from plain
// thresholds in `CompareConfig`.
//
// Thresholds are cut-offs on the mean duration diff. No p-values or
// confidence intervals are computed.

mod comparator;
mod config;

pub use comparator::{classify_duration, compare_entries, compare_runs};
pub use config::CompareConfig;

// Pairing baseline and current entries into comparison results
//
// Every test name seen on either side yields exactly one comparison:
// current entries first in their own order (full or added), then the
// baseline-only entries in baseline order (removed).

use crate::compare::config::CompareConfig;
use crate::comparison::{AddedComparison, Comparison, FullComparison, RemovedComparison};
use crate::error::{ReportError, Result};
use crate::model::{DurationStatus, Entry};
use crate::report::Report;
use std::collections::HashMap;

/// Classify a duration change against the configured thresholds
///
/// A NaN percentage (zero baseline with zero diff) never passes the
/// significance cut-off.
pub fn classify_duration(diff: f64, diff_percent: f64, config: &CompareConfig) -> DurationStatus {
    if diff.abs() < config.meaningless_duration {
        DurationStatus::Meaningless
    } else if diff.abs() >= config.significant_duration
        && diff_percent.abs() >= config.significant_percent
    {
        DurationStatus::Significant
    } else {
        DurationStatus::Insignificant
    }
}

impl FullComparison {
    /// Compare two entries for the same test and assign a duration status
    ///
    /// When the duration change is meaningless but the render count moved,
    /// no status is assigned so the result is reported as a count change.
    pub fn from_entries(baseline: Entry, current: Entry, config: &CompareConfig) -> Self {
        let mut full = FullComparison::with_status(baseline, current, None);
        let status = classify_duration(full.duration_diff, full.duration_diff_percent, config);
        full.duration_diff_status = match status {
            DurationStatus::Meaningless if full.count_diff != 0.0 => None,
            status => Some(status),
        };
        full
    }
}

/// Compare baseline and current entries, one result per test name
///
/// # Example
/// ```
/// use render_regress::compare::{compare_entries, CompareConfig};
/// use render_regress::Entry;
///
/// let entry = |name: &str, duration: f64| Entry {
///     name: name.to_string(),
///     mean_duration: duration,
///     stdev_duration: 0.5,
///     mean_count: 1.0,
///     stdev_count: 0.0,
///     runs: 10,
/// };
///
/// let baseline = vec![entry("Btn", 20.0), entry("Old", 5.0)];
/// let current = vec![entry("Btn", 30.0), entry("New", 5.0)];
///
/// let comparisons = compare_entries(&baseline, &current, &CompareConfig::default()).unwrap();
/// assert!(comparisons[0].is_significant());
/// assert!(comparisons[1].is_added());
/// assert!(comparisons[2].is_removed());
/// ```
pub fn compare_entries(
    baseline: &[Entry],
    current: &[Entry],
    config: &CompareConfig,
) -> Result<Vec<Comparison>> {
    config.validate().map_err(ReportError::InvalidConfig)?;

    let baseline_by_name = index_entries(baseline, "baseline")?;
    let current_by_name = index_entries(current, "current")?;

    let mut comparisons = Vec::with_capacity(baseline.len().max(current.len()));

    for entry in current {
        let comparison = match baseline_by_name.get(entry.name.as_str()) {
            Some(base) => {
                let full = FullComparison::from_entries((*base).clone(), entry.clone(), config);
                tracing::debug!(
                    "{}: duration {:+.2} ms, count {:+.2}, status {:?}",
                    full.name,
                    full.duration_diff,
                    full.count_diff,
                    full.duration_diff_status
                );
                Comparison::Full(full)
            }
            None => {
                tracing::debug!("{}: added", entry.name);
                Comparison::Added(AddedComparison {
                    name: entry.name.clone(),
                    current: entry.clone(),
                })
            }
        };
        comparisons.push(comparison);
    }

    for entry in baseline {
        if !current_by_name.contains_key(entry.name.as_str()) {
            tracing::debug!("{}: removed", entry.name);
            comparisons.push(Comparison::Removed(RemovedComparison {
                name: entry.name.clone(),
                baseline: entry.clone(),
            }));
        }
    }

    Ok(comparisons)
}

/// Compare two runs and bucket the results into a report
pub fn compare_runs(baseline: &[Entry], current: &[Entry], config: &CompareConfig) -> Result<Report> {
    let comparisons = compare_entries(baseline, current, config)?;
    Ok(Report::from_comparisons(comparisons))
}

fn index_entries<'a>(
    entries: &'a [Entry],
    side: &'static str,
) -> Result<HashMap<&'a str, &'a Entry>> {
    let mut by_name = HashMap::with_capacity(entries.len());
    for entry in entries {
        entry.validate()?;
        if by_name.insert(entry.name.as_str(), entry).is_some() {
            return Err(ReportError::DuplicateEntry {
                name: entry.name.clone(),
                side,
            });
        }
    }
    Ok(by_name)
}

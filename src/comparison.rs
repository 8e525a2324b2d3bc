//! Comparison results and their classification predicates
//!
//! Pairing a baseline [`Entry`] with a current one (or finding only one side)
//! yields exactly one [`Comparison`] per test name. The predicates here are
//! pure, total classifiers over already-built comparisons: they allocate
//! nothing, mutate nothing and never fail.
//!
//! On the wire a comparison is a flat camelCase object whose shape tells the
//! variant apart: `current` only (added), `baseline` only (removed), or both
//! plus the four diff fields (full).

use crate::error::{ReportError, Result};
use crate::model::{Category, DurationStatus, Entry};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Test that exists only in the current run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedComparison {
    pub name: String,
    pub current: Entry,
}

/// Test that exists only in the baseline run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovedComparison {
    pub name: String,
    pub baseline: Entry,
}

/// Test present in both runs, with the derived diffs
///
/// Diffs are `current - baseline`; percentages are relative to the baseline
/// mean (`diff / baseline`, a fraction, not scaled by 100). A zero baseline
/// mean yields an infinite or NaN percentage, and far-apart means can
/// overflow a diff to infinity. Non-finite values serialize as `null` and
/// read back as NaN.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FullComparison {
    pub name: String,
    /// Absent when duration classification does not apply (count-only change)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_diff_status: Option<DurationStatus>,
    pub baseline: Entry,
    pub current: Entry,
    pub duration_diff: f64,
    pub duration_diff_percent: f64,
    pub count_diff: f64,
    pub count_diff_percent: f64,
}

impl FullComparison {
    /// Build a full comparison from paired entries and a caller-assigned status
    ///
    /// The name is taken from `current`; callers pair entries by name.
    pub fn with_status(baseline: Entry, current: Entry, status: Option<DurationStatus>) -> Self {
        let duration_diff = current.mean_duration - baseline.mean_duration;
        let count_diff = current.mean_count - baseline.mean_count;
        Self {
            name: current.name.clone(),
            duration_diff_status: status,
            duration_diff,
            duration_diff_percent: duration_diff / baseline.mean_duration,
            count_diff,
            count_diff_percent: count_diff / baseline.mean_count,
            baseline,
            current,
        }
    }
}

/// Outcome of comparing one test between the baseline and current runs
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawComparison")]
pub enum Comparison {
    Added(AddedComparison),
    Removed(RemovedComparison),
    Full(FullComparison),
}

impl Comparison {
    /// Test name shared by both runs
    pub fn name(&self) -> &str {
        match self {
            Comparison::Added(added) => &added.name,
            Comparison::Removed(removed) => &removed.name,
            Comparison::Full(full) => &full.name,
        }
    }

    /// Duration status; always `None` for added and removed tests
    pub fn duration_diff_status(&self) -> Option<DurationStatus> {
        match self {
            Comparison::Full(full) => full.duration_diff_status,
            Comparison::Added(_) | Comparison::Removed(_) => None,
        }
    }

    /// Baseline entry, when the comparison carries one
    pub fn baseline(&self) -> Option<&Entry> {
        match self {
            Comparison::Removed(removed) => Some(&removed.baseline),
            Comparison::Full(full) => Some(&full.baseline),
            Comparison::Added(_) => None,
        }
    }

    /// Current entry, when the comparison carries one
    pub fn current(&self) -> Option<&Entry> {
        match self {
            Comparison::Added(added) => Some(&added.current),
            Comparison::Full(full) => Some(&full.current),
            Comparison::Removed(_) => None,
        }
    }

    /// Render-count diff; only full comparisons have one
    pub fn count_diff(&self) -> Option<f64> {
        match self {
            Comparison::Full(full) => Some(full.count_diff),
            Comparison::Added(_) | Comparison::Removed(_) => None,
        }
    }

    /// Duration change was classified as SIGNIFICANT
    pub fn is_significant(&self) -> bool {
        self.duration_diff_status() == Some(DurationStatus::Significant)
    }

    /// Duration change was classified as INSIGNIFICANT
    pub fn is_insignificant(&self) -> bool {
        self.duration_diff_status() == Some(DurationStatus::Insignificant)
    }

    /// Duration change was classified as MEANINGLESS
    pub fn is_meaningless(&self) -> bool {
        self.duration_diff_status() == Some(DurationStatus::Meaningless)
    }

    /// True only for tests missing from the baseline run
    ///
    /// A full comparison also carries a current entry but is not "added".
    pub fn is_added(&self) -> bool {
        matches!(self, Comparison::Added(_))
    }

    /// True only for tests missing from the current run
    pub fn is_removed(&self) -> bool {
        matches!(self, Comparison::Removed(_))
    }

    /// No duration status was assigned, yet the render count moved
    pub fn is_count_changed(&self) -> bool {
        self.duration_diff_status().is_none()
            && self.count_diff().is_some_and(|diff| diff != 0.0)
    }

    /// Full comparison view, when [`Comparison::is_significant`] holds
    pub fn as_significant(&self) -> Option<&FullComparison> {
        self.full_with_status(DurationStatus::Significant)
    }

    /// Full comparison view, when [`Comparison::is_insignificant`] holds
    pub fn as_insignificant(&self) -> Option<&FullComparison> {
        self.full_with_status(DurationStatus::Insignificant)
    }

    /// Full comparison view, when [`Comparison::is_meaningless`] holds
    pub fn as_meaningless(&self) -> Option<&FullComparison> {
        self.full_with_status(DurationStatus::Meaningless)
    }

    /// Full comparison view, when [`Comparison::is_count_changed`] holds
    pub fn as_count_changed(&self) -> Option<&FullComparison> {
        match self {
            Comparison::Full(full) if self.is_count_changed() => Some(full),
            _ => None,
        }
    }

    /// Added payload, when [`Comparison::is_added`] holds
    pub fn as_added(&self) -> Option<&AddedComparison> {
        match self {
            Comparison::Added(added) => Some(added),
            _ => None,
        }
    }

    /// Removed payload, when [`Comparison::is_removed`] holds
    pub fn as_removed(&self) -> Option<&RemovedComparison> {
        match self {
            Comparison::Removed(removed) => Some(removed),
            _ => None,
        }
    }

    /// Report bucket this comparison belongs to
    ///
    /// `None` for a full comparison with no duration status and an unchanged
    /// render count; such results belong to no bucket.
    pub fn category(&self) -> Option<Category> {
        match self {
            Comparison::Added(_) => Some(Category::Added),
            Comparison::Removed(_) => Some(Category::Removed),
            Comparison::Full(full) => match full.duration_diff_status {
                Some(status) => Some(status.category()),
                None if full.count_diff != 0.0 => Some(Category::CountChanged),
                None => None,
            },
        }
    }

    fn full_with_status(&self, status: DurationStatus) -> Option<&FullComparison> {
        match self {
            Comparison::Full(full) if full.duration_diff_status == Some(status) => Some(full),
            _ => None,
        }
    }
}

impl From<AddedComparison> for Comparison {
    fn from(added: AddedComparison) -> Self {
        Comparison::Added(added)
    }
}

impl From<RemovedComparison> for Comparison {
    fn from(removed: RemovedComparison) -> Self {
        Comparison::Removed(removed)
    }
}

impl From<FullComparison> for Comparison {
    fn from(full: FullComparison) -> Self {
        Comparison::Full(full)
    }
}

impl Serialize for Comparison {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Comparison::Added(added) => added.serialize(serializer),
            Comparison::Removed(removed) => removed.serialize(serializer),
            Comparison::Full(full) => full.serialize(serializer),
        }
    }
}

/// Loosely-shaped comparison as it appears on the wire
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawComparison {
    name: String,
    #[serde(default)]
    duration_diff_status: Option<DurationStatus>,
    #[serde(default)]
    baseline: Option<Entry>,
    #[serde(default)]
    current: Option<Entry>,
    #[serde(default, deserialize_with = "present_or_null")]
    duration_diff: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present_or_null")]
    duration_diff_percent: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present_or_null")]
    count_diff: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present_or_null")]
    count_diff_percent: Option<Option<f64>>,
}

impl RawComparison {
    fn has_diffs(&self) -> bool {
        self.duration_diff.is_some()
            || self.duration_diff_percent.is_some()
            || self.count_diff.is_some()
            || self.count_diff_percent.is_some()
    }
}

impl TryFrom<RawComparison> for Comparison {
    type Error = ReportError;

    fn try_from(raw: RawComparison) -> Result<Self> {
        if raw.name.is_empty() {
            return Err(ReportError::malformed("", "name must not be empty"));
        }
        let partial = raw.duration_diff_status.is_some() || raw.has_diffs();
        match (raw.baseline, raw.current) {
            (Some(baseline), Some(current)) => {
                let baseline = paired_entry(&raw.name, baseline)?;
                let current = paired_entry(&raw.name, current)?;
                let diff = |value: Option<Option<f64>>, field: &str| {
                    value
                        .map(|v| v.unwrap_or(f64::NAN))
                        .ok_or_else(|| ReportError::malformed(&raw.name, format!("missing {field}")))
                };
                Ok(Comparison::Full(FullComparison {
                    duration_diff: diff(raw.duration_diff, "durationDiff")?,
                    duration_diff_percent: diff(raw.duration_diff_percent, "durationDiffPercent")?,
                    count_diff: diff(raw.count_diff, "countDiff")?,
                    count_diff_percent: diff(raw.count_diff_percent, "countDiffPercent")?,
                    name: raw.name,
                    duration_diff_status: raw.duration_diff_status,
                    baseline,
                    current,
                }))
            }
            (None, Some(_)) | (Some(_), None) if partial => Err(ReportError::malformed(
                &raw.name,
                "diff fields require both baseline and current",
            )),
            (None, Some(current)) => Ok(Comparison::Added(AddedComparison {
                current: paired_entry(&raw.name, current)?,
                name: raw.name,
            })),
            (Some(baseline), None) => Ok(Comparison::Removed(RemovedComparison {
                baseline: paired_entry(&raw.name, baseline)?,
                name: raw.name,
            })),
            (None, None) => Err(ReportError::malformed(
                &raw.name,
                "neither baseline nor current present",
            )),
        }
    }
}

/// Entries inside a comparison must be valid and belong to the same test
fn paired_entry(name: &str, entry: Entry) -> Result<Entry> {
    entry.validate()?;
    if entry.name != name {
        return Err(ReportError::malformed(
            name,
            format!("entry name '{}' does not match", entry.name),
        ));
    }
    Ok(entry)
}

/// Distinguish an explicit `null` (non-finite value) from a missing field
fn present_or_null<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<Option<f64>>, D::Error> {
    Option::<f64>::deserialize(deserializer).map(Some)
}

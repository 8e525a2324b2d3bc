//! Measurement entries and the fixed status/category enumerations
//!
//! An [`Entry`] is one test's statistics for one run (baseline or current),
//! as produced by the render-measuring harness. Entries are never mutated
//! after loading.

use crate::error::{ReportError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Measured render statistics of a single test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Test name, used to pair baseline and current entries
    pub name: String,
    /// Average render duration (ms)
    pub mean_duration: f64,
    /// Standard deviation of render duration (ms)
    pub stdev_duration: f64,
    /// Average render count
    pub mean_count: f64,
    /// Standard deviation of render count
    pub stdev_count: f64,
    /// Number of sampled runs
    pub runs: u32,
}

impl Entry {
    /// Check the invariants the harness is expected to uphold
    ///
    /// # Example
    /// ```
    /// use render_regress::Entry;
    ///
    /// let entry = Entry {
    ///     name: "Button".to_string(),
    ///     mean_duration: 12.5,
    ///     stdev_duration: 0.8,
    ///     mean_count: 2.0,
    ///     stdev_count: 0.0,
    ///     runs: 10,
    /// };
    /// assert!(entry.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(ReportError::invalid_entry("", "name must not be empty"));
        }
        if !self.mean_duration.is_finite() || !self.mean_count.is_finite() {
            return Err(ReportError::invalid_entry(
                &self.name,
                format!(
                    "means must be finite, got duration={} count={}",
                    self.mean_duration, self.mean_count
                ),
            ));
        }
        if !(self.stdev_duration >= 0.0 && self.stdev_duration.is_finite()) {
            return Err(ReportError::invalid_entry(
                &self.name,
                format!(
                    "stdevDuration must be non-negative, got {}",
                    self.stdev_duration
                ),
            ));
        }
        if !(self.stdev_count >= 0.0 && self.stdev_count.is_finite()) {
            return Err(ReportError::invalid_entry(
                &self.name,
                format!("stdevCount must be non-negative, got {}", self.stdev_count),
            ));
        }
        if self.runs == 0 {
            return Err(ReportError::invalid_entry(
                &self.name,
                "runs must be positive",
            ));
        }
        Ok(())
    }
}

/// How a test's duration change was classified against the baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DurationStatus {
    Significant,
    Insignificant,
    Meaningless,
}

/// All duration statuses, in report order
pub const DURATION_STATUSES: [DurationStatus; 3] = [
    DurationStatus::Significant,
    DurationStatus::Insignificant,
    DurationStatus::Meaningless,
];

impl DurationStatus {
    /// Wire name (`SIGNIFICANT`, `INSIGNIFICANT`, `MEANINGLESS`)
    pub fn as_str(self) -> &'static str {
        match self {
            DurationStatus::Significant => "SIGNIFICANT",
            DurationStatus::Insignificant => "INSIGNIFICANT",
            DurationStatus::Meaningless => "MEANINGLESS",
        }
    }

    /// Report bucket a Full comparison with this status belongs to
    pub fn category(self) -> Category {
        match self {
            DurationStatus::Significant => Category::Significant,
            DurationStatus::Insignificant => Category::Insignificant,
            DurationStatus::Meaningless => Category::Meaningless,
        }
    }
}

impl fmt::Display for DurationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Report bucket keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Significant,
    Insignificant,
    Meaningless,
    CountChanged,
    Added,
    Removed,
}

/// All report categories, in report order
pub const CATEGORIES: [Category; 6] = [
    Category::Significant,
    Category::Insignificant,
    Category::Meaningless,
    Category::CountChanged,
    Category::Added,
    Category::Removed,
];

impl Category {
    /// Report key, e.g. `countChanged`
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Significant => "significant",
            Category::Insignificant => "insignificant",
            Category::Meaningless => "meaningless",
            Category::CountChanged => "countChanged",
            Category::Added => "added",
            Category::Removed => "removed",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> Entry {
        Entry {
            name: "Button".to_string(),
            mean_duration: 10.0,
            stdev_duration: 1.0,
            mean_count: 1.0,
            stdev_count: 0.0,
            runs: 10,
        }
    }

    #[test]
    fn test_entry_serializes_camel_case() {
        let json = serde_json::to_value(entry()).unwrap();
        assert_eq!(json["meanDuration"], 10.0);
        assert_eq!(json["stdevDuration"], 1.0);
        assert_eq!(json["meanCount"], 1.0);
        assert_eq!(json["stdevCount"], 0.0);
        assert_eq!(json["runs"], 10);
    }

    #[test]
    fn test_entry_validate_ok() {
        assert!(entry().validate().is_ok());
    }

    #[test]
    fn test_entry_validate_empty_name() {
        let mut e = entry();
        e.name.clear();
        assert!(e.validate().is_err());
    }

    #[test]
    fn test_entry_validate_negative_stdev() {
        let mut e = entry();
        e.stdev_duration = -0.1;
        assert!(e.validate().is_err());

        let mut e = entry();
        e.stdev_count = -1.0;
        assert!(e.validate().is_err());
    }

    #[test]
    fn test_entry_validate_nan_stdev() {
        let mut e = entry();
        e.stdev_duration = f64::NAN;
        assert!(e.validate().is_err());
    }

    #[test]
    fn test_entry_validate_zero_runs() {
        let mut e = entry();
        e.runs = 0;
        assert!(e.validate().is_err());
    }

    #[test]
    fn test_duration_status_wire_names() {
        let names: Vec<String> = DURATION_STATUSES
            .iter()
            .map(|s| serde_json::to_string(s).unwrap())
            .collect();
        assert_eq!(
            names,
            vec!["\"SIGNIFICANT\"", "\"INSIGNIFICANT\"", "\"MEANINGLESS\""]
        );
        for status in DURATION_STATUSES {
            assert_eq!(
                serde_json::to_string(&status).unwrap(),
                format!("\"{}\"", status)
            );
        }
    }

    #[test]
    fn test_category_wire_names() {
        let names: Vec<&str> = CATEGORIES.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "significant",
                "insignificant",
                "meaningless",
                "countChanged",
                "added",
                "removed"
            ]
        );
        assert_eq!(
            serde_json::to_string(&Category::CountChanged).unwrap(),
            "\"countChanged\""
        );
    }

    #[test]
    fn test_status_maps_to_duration_category() {
        assert_eq!(DurationStatus::Significant.category(), Category::Significant);
        assert_eq!(
            DurationStatus::Insignificant.category(),
            Category::Insignificant
        );
        assert_eq!(DurationStatus::Meaningless.category(), Category::Meaningless);
    }
}

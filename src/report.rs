//! Category-bucketed regression report
//!
//! Comparisons are bucketed in the order they are supplied; nothing here
//! reorders. A full comparison lands in at most one of the duration buckets
//! or `countChanged`.

use crate::comparison::{AddedComparison, Comparison, FullComparison, RemovedComparison};
use crate::error::ReportError;
use crate::model::{Category, CATEGORIES};
use serde::{Deserialize, Serialize};

/// Regression report keyed by the six fixed categories
///
/// Reading a report back from JSON re-checks every item: each must be a
/// well-formed comparison whose own category matches the bucket it is
/// listed under.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawReport")]
pub struct Report {
    pub significant: Vec<FullComparison>,
    pub insignificant: Vec<FullComparison>,
    pub meaningless: Vec<FullComparison>,
    pub count_changed: Vec<FullComparison>,
    pub added: Vec<AddedComparison>,
    pub removed: Vec<RemovedComparison>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bucket every comparison, keeping input order within each bucket
    ///
    /// # Example
    /// ```
    /// use render_regress::{AddedComparison, Comparison, Entry, Report};
    ///
    /// let current = Entry {
    ///     name: "NewWidget".to_string(),
    ///     mean_duration: 4.0,
    ///     stdev_duration: 0.2,
    ///     mean_count: 1.0,
    ///     stdev_count: 0.0,
    ///     runs: 10,
    /// };
    /// let added = Comparison::Added(AddedComparison {
    ///     name: "NewWidget".to_string(),
    ///     current,
    /// });
    ///
    /// let report = Report::from_comparisons(vec![added]);
    /// assert_eq!(report.added.len(), 1);
    /// assert_eq!(report.total(), 1);
    /// ```
    pub fn from_comparisons<I>(comparisons: I) -> Self
    where
        I: IntoIterator<Item = Comparison>,
    {
        let mut report = Self::new();
        for comparison in comparisons {
            report.push(comparison);
        }
        report
    }

    /// Add one comparison to its bucket
    ///
    /// Returns the bucket used, or `None` when the comparison matches no
    /// category (full comparison, no duration status, unchanged count).
    pub fn push(&mut self, comparison: Comparison) -> Option<Category> {
        let category = comparison.category();
        match comparison {
            Comparison::Added(added) => self.added.push(added),
            Comparison::Removed(removed) => self.removed.push(removed),
            Comparison::Full(full) => match category {
                Some(Category::Significant) => self.significant.push(full),
                Some(Category::Insignificant) => self.insignificant.push(full),
                Some(Category::Meaningless) => self.meaningless.push(full),
                Some(Category::CountChanged) => self.count_changed.push(full),
                _ => tracing::debug!("'{}' matches no report category, skipping", full.name),
            },
        }
        category
    }

    /// Number of comparisons in one bucket
    pub fn len(&self, category: Category) -> usize {
        match category {
            Category::Significant => self.significant.len(),
            Category::Insignificant => self.insignificant.len(),
            Category::Meaningless => self.meaningless.len(),
            Category::CountChanged => self.count_changed.len(),
            Category::Added => self.added.len(),
            Category::Removed => self.removed.len(),
        }
    }

    /// Test names in one bucket, in insertion order
    pub fn names(&self, category: Category) -> Vec<&str> {
        fn full_names(items: &[FullComparison]) -> Vec<&str> {
            items.iter().map(|c| c.name.as_str()).collect()
        }
        match category {
            Category::Significant => full_names(&self.significant),
            Category::Insignificant => full_names(&self.insignificant),
            Category::Meaningless => full_names(&self.meaningless),
            Category::CountChanged => full_names(&self.count_changed),
            Category::Added => self.added.iter().map(|c| c.name.as_str()).collect(),
            Category::Removed => self.removed.iter().map(|c| c.name.as_str()).collect(),
        }
    }

    /// Number of comparisons across all buckets
    pub fn total(&self) -> usize {
        CATEGORIES.iter().map(|c| self.len(*c)).sum()
    }

    /// No comparison landed in any bucket
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// At least one test changed duration significantly
    pub fn has_significant_changes(&self) -> bool {
        !self.significant.is_empty()
    }

    /// Generate human-readable report
    pub fn to_report_string(&self) -> String {
        let mut report = String::new();

        if self.has_significant_changes() {
            report.push_str(&format!(
                "❌ SIGNIFICANT RENDER CHANGES ({} tests)\n\n",
                self.significant.len()
            ));
        } else {
            report.push_str("✅ NO SIGNIFICANT RENDER CHANGES\n\n");
        }

        for category in CATEGORIES {
            report.push_str(&format!("{:<14} {}\n", category, self.len(category)));
        }

        let sections = [
            ("🔥 Significant changes", &self.significant),
            ("📊 Insignificant changes", &self.insignificant),
            ("🔇 Meaningless changes", &self.meaningless),
            ("🔁 Render count changes", &self.count_changed),
        ];
        for (title, items) in sections {
            if items.is_empty() {
                continue;
            }
            report.push_str(&format!("\n{} ({}):\n", title, items.len()));
            for full in items {
                report.push_str(&format!("  {}\n", format_full(full)));
            }
        }

        if !self.added.is_empty() {
            report.push_str(&format!("\n➕ Added tests ({}):\n", self.added.len()));
            for added in &self.added {
                report.push_str(&format!(
                    "  {}: {:.1} ms, count {:.1}\n",
                    added.name, added.current.mean_duration, added.current.mean_count
                ));
            }
        }

        if !self.removed.is_empty() {
            report.push_str(&format!("\n➖ Removed tests ({}):\n", self.removed.len()));
            for removed in &self.removed {
                report.push_str(&format!(
                    "  {}: {:.1} ms, count {:.1}\n",
                    removed.name, removed.baseline.mean_duration, removed.baseline.mean_count
                ));
            }
        }

        report
    }
}

/// Report as it appears on the wire, before bucket membership is checked
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawReport {
    significant: Vec<Comparison>,
    insignificant: Vec<Comparison>,
    meaningless: Vec<Comparison>,
    count_changed: Vec<Comparison>,
    added: Vec<Comparison>,
    removed: Vec<Comparison>,
}

impl TryFrom<RawReport> for Report {
    type Error = ReportError;

    fn try_from(raw: RawReport) -> Result<Self, Self::Error> {
        let buckets = [
            (Category::Significant, raw.significant),
            (Category::Insignificant, raw.insignificant),
            (Category::Meaningless, raw.meaningless),
            (Category::CountChanged, raw.count_changed),
            (Category::Added, raw.added),
            (Category::Removed, raw.removed),
        ];
        let mut report = Report::new();
        for (bucket, items) in buckets {
            for comparison in items {
                let category = comparison.category();
                if category != Some(bucket) {
                    return Err(ReportError::malformed(
                        comparison.name(),
                        format!(
                            "listed under '{}' but classifies as '{}'",
                            bucket,
                            category.map_or("no category", Category::as_str)
                        ),
                    ));
                }
                report.push(comparison);
            }
        }
        Ok(report)
    }
}

fn format_full(full: &FullComparison) -> String {
    format!(
        "{}: {:.1} ms → {:.1} ms ({:+.1} ms, {:+.1}%) | count {:.1} → {:.1} ({:+.1})",
        full.name,
        full.baseline.mean_duration,
        full.current.mean_duration,
        full.duration_diff,
        full.duration_diff_percent * 100.0,
        full.baseline.mean_count,
        full.current.mean_count,
        full.count_diff
    )
}

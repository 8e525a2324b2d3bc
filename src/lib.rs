//! render-regress - render-performance regression reports
//!
//! This library classifies how each measured test changed between a
//! baseline run and a current run: significant, insignificant or
//! meaningless duration change, render count change, added or removed.
//! The classification model lives in [`comparison`] and [`report`]; the
//! [`compare`] module builds comparisons from measurement [`entries`].

pub mod cli;
pub mod compare;
pub mod comparison;
pub mod entries;
pub mod error;
pub mod model;
pub mod report;

pub use comparison::{AddedComparison, Comparison, FullComparison, RemovedComparison};
pub use error::{ReportError, Result};
pub use model::{Category, DurationStatus, Entry, CATEGORIES, DURATION_STATUSES};
pub use report::Report;

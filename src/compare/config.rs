// Thresholds used to assign a duration status to paired measurements
//
// These are plain cut-offs over the mean duration diff; no hypothesis
// testing happens here.

use serde::{Deserialize, Serialize};

/// Configuration for duration change classification
///
/// A change is:
/// - MEANINGLESS when `|durationDiff| < meaningless_duration`
/// - SIGNIFICANT when `|durationDiff| >= significant_duration` and
///   `|durationDiffPercent| >= significant_percent`
/// - INSIGNIFICANT otherwise
///
/// # Example
/// ```
/// use render_regress::compare::CompareConfig;
///
/// let config = CompareConfig::default();
/// assert_eq!(config.significant_percent, 0.1); // 10% slower or faster
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareConfig {
    /// Minimum relative duration change (fraction of the baseline mean)
    ///
    /// Default: 0.1 (10%)
    pub significant_percent: f64,

    /// Minimum absolute duration change in milliseconds
    ///
    /// Keeps tiny components from flagging large relative swings that are
    /// a fraction of a frame.
    ///
    /// Default: 4.0 ms
    pub significant_duration: f64,

    /// Absolute duration change (ms) below which the change is noise
    ///
    /// Default: 1.0 ms
    pub meaningless_duration: f64,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            significant_percent: 0.1,
            significant_duration: 4.0,
            meaningless_duration: 1.0,
        }
    }
}

impl CompareConfig {
    /// Create a strict configuration (flags smaller changes as significant)
    ///
    /// Use on quiet CI machines where run-to-run jitter is low.
    pub fn strict() -> Self {
        Self {
            significant_percent: 0.05,
            significant_duration: 2.0,
            meaningless_duration: 0.5,
        }
    }

    /// Create a permissive configuration (only large changes are significant)
    ///
    /// Use on shared or emulated devices with noisy timings.
    pub fn permissive() -> Self {
        Self {
            significant_percent: 0.25,
            significant_duration: 8.0,
            meaningless_duration: 2.0,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            ("significant_percent", self.significant_percent),
            ("significant_duration", self.significant_duration),
            ("meaningless_duration", self.meaningless_duration),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(format!(
                    "{} must be finite and non-negative, got {}",
                    name, value
                ));
            }
        }

        if self.meaningless_duration > self.significant_duration {
            return Err(format!(
                "meaningless_duration ({}) must not exceed significant_duration ({})",
                self.meaningless_duration, self.significant_duration
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CompareConfig::default();
        assert_eq!(config.significant_percent, 0.1);
        assert_eq!(config.significant_duration, 4.0);
        assert_eq!(config.meaningless_duration, 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_strict_config() {
        let config = CompareConfig::strict();
        assert_eq!(config.significant_percent, 0.05);
        assert_eq!(config.significant_duration, 2.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_permissive_config() {
        let config = CompareConfig::permissive();
        assert_eq!(config.significant_percent, 0.25);
        assert_eq!(config.meaningless_duration, 2.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[allow(clippy::field_reassign_with_default)]
    fn test_invalid_negative_percent() {
        let mut config = CompareConfig::default();
        config.significant_percent = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    #[allow(clippy::field_reassign_with_default)]
    fn test_invalid_nan_duration() {
        let mut config = CompareConfig::default();
        config.significant_duration = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    #[allow(clippy::field_reassign_with_default)]
    fn test_invalid_meaningless_above_significant() {
        let mut config = CompareConfig::default();
        config.meaningless_duration = 10.0;
        let err = config.validate().unwrap_err();
        assert!(err.contains("must not exceed"));
    }
}

//! Kernel-level parameter limits building on the shared `config` crate.
//!
//! The module wraps the workspace session configuration so the validation
//! code can stay decoupled from literal constants.

use config::constants::{ConfigError, SessionConfig, MAX_PARAMETER_MAGNITUDE};

/// Bounds applied to `(m, n, k)` before any arithmetic.
///
/// # Examples
/// ```
/// use box_kernel::limits::ParameterLimits;
/// let limits = ParameterLimits::default();
/// assert!(limits.max_magnitude() > 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterLimits {
    // Never above MAX_PARAMETER_MAGNITUDE, so squares and sums fit i64.
    max_magnitude: i64,
}

impl ParameterLimits {
    /// Creates limits from an explicit magnitude.
    ///
    /// # Examples
    /// ```
    /// use box_kernel::limits::ParameterLimits;
    /// let limits = ParameterLimits::new(100).unwrap();
    /// assert_eq!(limits.max_magnitude(), 100);
    /// ```
    pub fn new(max_magnitude: i64) -> Result<Self, ParameterLimitsError> {
        SessionConfig::new(max_magnitude)
            .map(Self::from)
            .map_err(ParameterLimitsError)
    }

    /// Largest accepted magnitude for each parameter.
    pub fn max_magnitude(&self) -> i64 {
        self.max_magnitude
    }

    /// Returns true when `value` lies within `-max_magnitude..=max_magnitude`.
    #[inline]
    pub fn admits(&self, value: i64) -> bool {
        value.unsigned_abs() <= self.max_magnitude.unsigned_abs()
    }
}

impl Default for ParameterLimits {
    fn default() -> Self {
        Self {
            max_magnitude: MAX_PARAMETER_MAGNITUDE,
        }
    }
}

/// Clamps the configured magnitude into `1..=MAX_PARAMETER_MAGNITUDE`.
///
/// `SessionConfig` fields are public, so a hand-built value may carry a limit
/// that [`SessionConfig::new`] would have refused.
///
/// # Examples
/// ```
/// use box_kernel::limits::ParameterLimits;
/// use config::constants::{SessionConfig, MAX_PARAMETER_MAGNITUDE};
///
/// let unbounded = SessionConfig { max_parameter_magnitude: i64::MAX };
/// assert_eq!(ParameterLimits::from(unbounded).max_magnitude(), MAX_PARAMETER_MAGNITUDE);
/// ```
impl From<SessionConfig> for ParameterLimits {
    fn from(cfg: SessionConfig) -> Self {
        Self {
            max_magnitude: cfg.max_parameter_magnitude.clamp(1, MAX_PARAMETER_MAGNITUDE),
        }
    }
}

/// Error wrapper for invalid limit configuration.
#[derive(Debug, PartialEq, Eq)]
pub struct ParameterLimitsError(ConfigError);

impl std::fmt::Display for ParameterLimitsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ParameterLimitsError {}

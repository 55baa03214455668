//! Centralized configuration values shared across the workbench crates.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PARAMETER CONSTANTS
// =============================================================================

/// Initial value of `m` offered by input forms.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_M;
/// assert_eq!(DEFAULT_M, 1);
/// ```
pub const DEFAULT_M: i64 = 1;

/// Initial value of `n` offered by input forms.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_N;
/// assert_eq!(DEFAULT_N, 1);
/// ```
pub const DEFAULT_N: i64 = 1;

/// Initial value of `k` offered by input forms.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_K;
/// assert_ne!(DEFAULT_K, 0);
/// ```
pub const DEFAULT_K: i64 = 1;

/// Largest accepted magnitude for any of `m`, `n`, `k`.
///
/// At this bound `m² + n² + k²` stays far below `i64::MAX`, and the
/// quadruple identity `d² = a² + b² + c²` fits in `i128`.
///
/// # Examples
/// ```
/// use config::constants::MAX_PARAMETER_MAGNITUDE;
/// let worst = 3 * MAX_PARAMETER_MAGNITUDE * MAX_PARAMETER_MAGNITUDE;
/// assert!(worst < i64::MAX);
/// ```
pub const MAX_PARAMETER_MAGNITUDE: i64 = 1_000_000;

// =============================================================================
// COLOR CONSTANTS
// =============================================================================

/// Wireframe color for primitive boxes (blue).
///
/// RGBA values in range [0.0, 1.0].
pub const PRIMITIVE_EDGE_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

/// Wireframe color for derived (non-primitive) boxes (gray).
///
/// RGBA values in range [0.0, 1.0].
pub const DERIVED_EDGE_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 1.0];

/// Color of the dashed space diagonal (red).
///
/// RGBA values in range [0.0, 1.0].
pub const DIAGONAL_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

// =============================================================================
// LABEL CONSTANTS
// =============================================================================

/// Verdict label shown for primitive boxes.
///
/// Non-primitive boxes are labelled `No (GCD=g)`.
pub const PRIMITIVE_LABEL: &str = "Yes";

/// Legend label of the space diagonal in plots.
pub const DIAGONAL_LABEL: &str = "Diagonal";

/// Title prefix for primitive boxes.
pub const PRIMITIVE_TITLE: &str = "PRIMITIVE";

/// Title prefix for derived boxes.
pub const DERIVED_TITLE: &str = "DERIVED";

// =============================================================================
// SESSION CONFIG
// =============================================================================

/// Immutable snapshot of session settings that can be shared between crates.
///
/// # Examples
/// ```
/// use config::constants::SessionConfig;
/// let config = SessionConfig::default();
/// assert!(config.max_parameter_magnitude > 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Largest accepted magnitude for each of `m`, `n`, `k`.
    pub max_parameter_magnitude: i64,
}

impl SessionConfig {
    /// Builds a configuration, rejecting limits that are non-positive or
    /// large enough to overflow the squared sums.
    ///
    /// # Examples
    /// ```
    /// use config::constants::SessionConfig;
    /// let cfg = SessionConfig::new(500).expect("valid config");
    /// assert_eq!(cfg.max_parameter_magnitude, 500);
    /// assert!(SessionConfig::new(0).is_err());
    /// ```
    pub fn new(max_parameter_magnitude: i64) -> Result<Self, ConfigError> {
        if max_parameter_magnitude <= 0 || max_parameter_magnitude > MAX_PARAMETER_MAGNITUDE {
            return Err(ConfigError::InvalidMagnitude(max_parameter_magnitude));
        }
        Ok(Self {
            max_parameter_magnitude,
        })
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_parameter_magnitude: MAX_PARAMETER_MAGNITUDE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when the magnitude limit is not in `1..=MAX_PARAMETER_MAGNITUDE`.
    InvalidMagnitude(i64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMagnitude(value) => write!(
                f,
                "max_parameter_magnitude must be in 1..={MAX_PARAMETER_MAGNITUDE}: {value}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

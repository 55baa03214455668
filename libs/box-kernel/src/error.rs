//! # Error Types
//!
//! Error types for box requests. All errors are explicit and provide
//! the computed values that caused the rejection.
//!
//! ## Error Policy
//!
//! - Every variant is an "invalid parameters" rejection
//! - Rejections are never fatal; the caller may resubmit
//! - The generator and the primitivity checker raise no errors of their own

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Reasons a parameter triple is rejected before computation.
///
/// ## Example
///
/// ```rust
/// use box_kernel::{compute_box, BoxError, ParameterLimits, ParameterTriple};
///
/// match compute_box(ParameterTriple::new(2, 1, 0), &ParameterLimits::default()) {
///     Ok(result) => println!("Box: {:?}", result.dimensions),
///     Err(BoxError::ZeroK) => eprintln!("k must be nonzero"),
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoxError {
    /// `k` was zero, which collapses two edges to zero.
    #[error("Invalid parameters: the value of 'k' must be nonzero")]
    ZeroK,

    /// `m² + n² <= k²`, which makes the third edge non-positive.
    #[error(
        "Invalid parameters: m² + n² ({sum_of_squares}) must be greater than k² ({k_squared}) for 'c' to be positive"
    )]
    NonPositiveC {
        /// Computed `m² + n²`
        sum_of_squares: i64,
        /// Computed `k²`
        k_squared: i64,
    },

    /// A parameter is too large for exact 64-bit arithmetic.
    #[error("Invalid parameters: |{name}| = {value} exceeds the supported magnitude {limit}")]
    ParameterOutOfRange {
        /// Parameter name (`m`, `n` or `k`)
        name: char,
        /// Offending value
        value: i64,
        /// Configured limit
        limit: i64,
    },
}

impl BoxError {
    /// Every rejection belongs to the single "invalid parameters" kind.
    pub fn is_invalid_parameters(&self) -> bool {
        matches!(
            self,
            BoxError::ZeroK | BoxError::NonPositiveC { .. } | BoxError::ParameterOutOfRange { .. }
        )
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for box requests.
///
/// ## Example
///
/// ```rust
/// use box_kernel::error::BoxResult;
/// use box_kernel::{generate_box, PythagoreanBox};
///
/// fn unit_box() -> BoxResult<PythagoreanBox> {
///     Ok(generate_box(1, 1, 1))
/// }
/// # assert_eq!(unit_box().unwrap().d, 3);
/// ```
pub type BoxResult<T> = Result<T, BoxError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages carry the computed values.
    #[test]
    fn test_error_display() {
        let zero = BoxError::ZeroK;
        assert!(zero.to_string().contains("'k'"));

        let inverted = BoxError::NonPositiveC {
            sum_of_squares: 2,
            k_squared: 4,
        };
        let message = inverted.to_string();
        assert!(message.contains("(2)"));
        assert!(message.contains("(4)"));

        let range = BoxError::ParameterOutOfRange {
            name: 'm',
            value: 5_000_000,
            limit: 1_000_000,
        };
        assert!(range.to_string().contains("|m| = 5000000"));
    }

    #[test]
    fn test_all_variants_are_invalid_parameters() {
        assert!(BoxError::ZeroK.is_invalid_parameters());
        assert!(BoxError::NonPositiveC {
            sum_of_squares: 0,
            k_squared: 1
        }
        .is_invalid_parameters());
    }

    /// Test error types are Send + Sync for async compatibility.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BoxError>();
    }
}

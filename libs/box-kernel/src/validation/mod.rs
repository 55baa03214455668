//! Parameter validation.
//!
//! Gates the generator: a triple is rejected when any parameter exceeds the
//! configured magnitude, when `k = 0`, or when `m² + n² <= k²` (which would
//! give a non-positive third edge and an inverted box).

use crate::error::{BoxError, BoxResult};
use crate::generator::ParameterTriple;
use crate::limits::ParameterLimits;

/// Validates a parameter triple before generation.
///
/// The magnitude check runs first so that the squares computed for the
/// `m² + n² > k²` rule cannot overflow.
///
/// # Errors
/// - [`BoxError::ParameterOutOfRange`] for the first parameter beyond `limits`
/// - [`BoxError::ZeroK`] when `k = 0`
/// - [`BoxError::NonPositiveC`] when `m² + n² <= k²`
///
/// # Examples
/// ```
/// use box_kernel::{validate_parameters, BoxError, ParameterLimits, ParameterTriple};
///
/// let limits = ParameterLimits::default();
/// assert!(validate_parameters(&ParameterTriple::new(2, 1, 1), &limits).is_ok());
/// assert_eq!(
///     validate_parameters(&ParameterTriple::new(2, 1, 0), &limits),
///     Err(BoxError::ZeroK)
/// );
/// ```
pub fn validate_parameters(triple: &ParameterTriple, limits: &ParameterLimits) -> BoxResult<()> {
    for (name, value) in [('m', triple.m), ('n', triple.n), ('k', triple.k)] {
        if !limits.admits(value) {
            return Err(BoxError::ParameterOutOfRange {
                name,
                value,
                limit: limits.max_magnitude(),
            });
        }
    }

    if triple.k == 0 {
        return Err(BoxError::ZeroK);
    }

    let sum_of_squares = triple.m * triple.m + triple.n * triple.n;
    let k_squared = triple.k * triple.k;
    if sum_of_squares <= k_squared {
        return Err(BoxError::NonPositiveC {
            sum_of_squares,
            k_squared,
        });
    }

    Ok(())
}

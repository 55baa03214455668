//! Primitivity checker.
//!
//! A box is primitive when its three edges share no common factor greater
//! than one, i.e. `gcd(a, gcd(b, c)) = 1`.

use num_integer::Integer;
use serde::{Deserialize, Serialize};

/// Primitivity of a box together with the gcd that decided it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrimitivityVerdict {
    /// True iff `gcd == 1`
    pub is_primitive: bool,
    /// `gcd(|a|, gcd(|b|, |c|))`, up to 2⁶³ for `i64::MIN` edges
    pub gcd: u64,
}

/// Checks whether `(a, b, c)` is primitive.
///
/// Uses the Euclidean algorithm with the usual zero conventions:
/// `gcd(0, x) = |x|` and `gcd(0, 0) = 0`, so all-zero edges give
/// `(false, 0)`. Signs never matter, and every `i64` input is accepted.
///
/// # Examples
/// ```
/// use box_kernel::check_primitivity;
///
/// let verdict = check_primitivity(4, 2, 4);
/// assert!(!verdict.is_primitive);
/// assert_eq!(verdict.gcd, 2);
///
/// assert!(check_primitivity(2, 2, 1).is_primitive);
/// ```
pub fn check_primitivity(a: i64, b: i64, c: i64) -> PrimitivityVerdict {
    let gcd = a
        .unsigned_abs()
        .gcd(&b.unsigned_abs().gcd(&c.unsigned_abs()));
    PrimitivityVerdict {
        is_primitive: gcd == 1,
        gcd,
    }
}

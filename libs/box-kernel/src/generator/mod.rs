//! Box generator.
//!
//! Maps a parameter triple `(m, n, k)` to the edges and space diagonal of a
//! Pythagorean box:
//!
//! ```text
//! a = 2mk    b = 2nk    c = m² + n² − k²    d = m² + n² + k²
//! ```
//!
//! so that `a² + b² + c² = d²` for every input.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::geometry::{build_box_geometry, BoxGeometry};

/// Parameters `(m, n, k)` supplied by the caller.
///
/// Immutable once submitted; no relationship between the three values is
/// enforced here (see [`crate::validate_parameters`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterTriple {
    /// First parameter
    pub m: i64,
    /// Second parameter
    pub n: i64,
    /// Third parameter, must be nonzero for a valid box
    pub k: i64,
}

impl ParameterTriple {
    /// Creates a parameter triple.
    pub fn new(m: i64, n: i64, k: i64) -> Self {
        Self { m, n, k }
    }
}

impl Default for ParameterTriple {
    fn default() -> Self {
        use config::constants::{DEFAULT_K, DEFAULT_M, DEFAULT_N};
        Self::new(DEFAULT_M, DEFAULT_N, DEFAULT_K)
    }
}

impl fmt::Display for ParameterTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(m={}, n={}, k={})", self.m, self.n, self.k)
    }
}

/// Edges `a`, `b`, `c` and space diagonal `d` of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PythagoreanBox {
    /// Edge along x, `2mk`
    pub a: i64,
    /// Edge along y, `2nk`
    pub b: i64,
    /// Edge along z, `m² + n² − k²`
    pub c: i64,
    /// Space diagonal, `m² + n² + k²`
    pub d: i64,
}

impl PythagoreanBox {
    /// The three edge lengths `(a, b, c)`.
    pub fn edges(&self) -> (i64, i64, i64) {
        (self.a, self.b, self.c)
    }

    /// Checks `d² = a² + b² + c²` exactly, in 128-bit arithmetic.
    ///
    /// # Examples
    /// ```
    /// use box_kernel::generate_box;
    /// assert!(generate_box(3, 2, 1).satisfies_identity());
    /// ```
    pub fn satisfies_identity(&self) -> bool {
        let sq = |v: i64| i128::from(v) * i128::from(v);
        sq(self.d) == sq(self.a) + sq(self.b) + sq(self.c)
    }

    /// Largest edge, used to size cubic plot axes.
    pub fn max_edge(&self) -> i64 {
        self.a.max(self.b).max(self.c)
    }

    /// Wireframe of this box with one corner at the origin.
    pub fn geometry(&self) -> BoxGeometry {
        build_box_geometry(self.a as f64, self.b as f64, self.c as f64)
    }
}

impl fmt::Display for PythagoreanBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{} (d={})", self.a, self.b, self.c, self.d)
    }
}

/// Generates the box for `(m, n, k)`.
///
/// Pure and total: any integers are accepted, including zero and negative
/// values. Callers screen parameters with [`crate::validate_parameters`]
/// first; magnitudes beyond the configured limit may overflow `i64`.
///
/// # Examples
/// ```
/// use box_kernel::generate_box;
///
/// let pbox = generate_box(2, 1, 1);
/// assert_eq!((pbox.a, pbox.b, pbox.c, pbox.d), (4, 2, 4, 6));
/// ```
pub fn generate_box(m: i64, n: i64, k: i64) -> PythagoreanBox {
    let m2 = m * m;
    let n2 = n * n;
    let k2 = k * k;
    PythagoreanBox {
        a: 2 * m * k,
        b: 2 * n * k,
        c: m2 + n2 - k2,
        d: m2 + n2 + k2,
    }
}

//! Computational core of the Pythagorean box workbench.
//!
//! Three pure operations make up the kernel:
//!
//! - [`generate_box`] maps `(m, n, k)` to the edges `(a, b, c)` and the
//!   space diagonal `d` of a box with `a² + b² + c² = d²`;
//! - [`check_primitivity`] computes `gcd(a, gcd(b, c))`;
//! - [`build_box_geometry`] lays out the wireframe of a box with one corner
//!   at the origin.
//!
//! [`compute_box`] chains validation, generation and the primitivity check
//! the way a front end needs them.
//!
//! ```
//! use box_kernel::{compute_box, ParameterLimits, ParameterTriple};
//!
//! let result = compute_box(ParameterTriple::new(2, 1, 1), &ParameterLimits::default()).unwrap();
//! assert_eq!((result.dimensions.a, result.dimensions.b, result.dimensions.c), (4, 2, 4));
//! assert_eq!(result.dimensions.d, 6);
//! assert!(!result.verdict.is_primitive);
//! ```

pub mod error;
pub mod export;
pub mod generator;
pub mod geometry;
pub mod limits;
pub mod primitivity;
pub mod validation;
pub mod vec3;

pub use error::{BoxError, BoxResult};
pub use export::WireframeBuffers;
pub use generator::{generate_box, ParameterTriple, PythagoreanBox};
pub use geometry::{build_box_geometry, BoxGeometry, Segment};
pub use limits::{ParameterLimits, ParameterLimitsError};
pub use primitivity::{check_primitivity, PrimitivityVerdict};
pub use validation::validate_parameters;
pub use vec3::Vec3;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Result of one accepted generation request.
///
/// Created fresh per request and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoxComputation {
    /// Parameters the box was generated from.
    pub parameters: ParameterTriple,
    /// Edges and space diagonal.
    pub dimensions: PythagoreanBox,
    /// Primitivity of the edges.
    pub verdict: PrimitivityVerdict,
}

impl BoxComputation {
    /// Wireframe of the computed box.
    pub fn geometry(&self) -> BoxGeometry {
        self.dimensions.geometry()
    }
}

/// Validates `parameters`, then generates the box and checks its primitivity.
///
/// # Errors
/// Returns a [`BoxError`] when the parameters are rejected by
/// [`validate_parameters`]. Nothing is computed in that case.
///
/// # Examples
/// ```
/// use box_kernel::{compute_box, BoxError, ParameterLimits, ParameterTriple};
///
/// let err = compute_box(ParameterTriple::new(1, 1, 2), &ParameterLimits::default()).unwrap_err();
/// assert!(matches!(err, BoxError::NonPositiveC { sum_of_squares: 2, k_squared: 4 }));
/// ```
pub fn compute_box(parameters: ParameterTriple, limits: &ParameterLimits) -> BoxResult<BoxComputation> {
    if let Err(err) = validate_parameters(&parameters, limits) {
        warn!(m = parameters.m, n = parameters.n, k = parameters.k, %err, "rejected box parameters");
        return Err(err);
    }

    let dimensions = generate_box(parameters.m, parameters.n, parameters.k);
    let verdict = check_primitivity(dimensions.a, dimensions.b, dimensions.c);
    debug!(
        a = dimensions.a,
        b = dimensions.b,
        c = dimensions.c,
        d = dimensions.d,
        gcd = verdict.gcd,
        "computed box"
    );

    Ok(BoxComputation {
        parameters,
        dimensions,
        verdict,
    })
}

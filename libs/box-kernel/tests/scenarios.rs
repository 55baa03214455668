//! End-to-end kernel scenarios
//!
//! Tests parameters → validation → box → verdict → wireframe

use box_kernel::*;

fn compute(m: i64, n: i64, k: i64) -> BoxResult<BoxComputation> {
    compute_box(ParameterTriple::new(m, n, k), &ParameterLimits::default())
}

#[test]
fn test_derived_box_2_1_1() {
    let result = compute(2, 1, 1).expect("valid parameters");

    assert_eq!(result.parameters, ParameterTriple::new(2, 1, 1));
    assert_eq!(result.dimensions, PythagoreanBox { a: 4, b: 2, c: 4, d: 6 });
    assert_eq!(
        result.verdict,
        PrimitivityVerdict {
            is_primitive: false,
            gcd: 2
        }
    );

    let geometry = result.geometry();
    assert_eq!(geometry.vertices[0], Vec3::ZERO);
    assert_eq!(geometry.far_corner(), Vec3::new(4.0, 2.0, 4.0));
    assert_eq!(geometry.diagonal().end, Vec3::new(4.0, 2.0, 4.0));
}

#[test]
fn test_primitive_box_1_1_1() {
    let result = compute(1, 1, 1).expect("valid parameters");
    assert_eq!(result.dimensions.edges(), (2, 2, 1));
    assert!(result.verdict.is_primitive);
}

#[test]
fn test_rejects_zero_k() {
    assert_eq!(compute(2, 1, 0).unwrap_err(), BoxError::ZeroK);
}

#[test]
fn test_rejects_1_1_2() {
    let err = compute(1, 1, 2).unwrap_err();
    assert_eq!(
        err,
        BoxError::NonPositiveC {
            sum_of_squares: 2,
            k_squared: 4
        }
    );
    let message = err.to_string();
    assert!(message.contains('2') && message.contains('4'));
}

#[test]
fn test_rejects_beyond_custom_limit() {
    let limits = ParameterLimits::new(5).expect("valid limit");
    let err = compute_box(ParameterTriple::new(6, 1, 1), &limits).unwrap_err();
    assert!(matches!(err, BoxError::ParameterOutOfRange { name: 'm', value: 6, limit: 5 }));
}

#[test]
fn test_mirrored_box_is_accepted() {
    let result = compute(-2, 1, 1).expect("negative m is accepted");
    assert_eq!(result.dimensions.a, -4);
    assert_eq!(result.verdict.gcd, 2);
}

#[test]
fn test_computation_serializes() {
    let result = compute(2, 1, 1).expect("valid parameters");
    let json = serde_json::to_string(&result).expect("serializes");
    assert!(json.contains("\"gcd\":2"));

    let back: BoxComputation = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(back, result);
}

/// Limits built from an unchecked, unbounded config still reject huge
/// parameters instead of overflowing.
#[test]
fn test_unbounded_config_rejects_huge_parameters() {
    use config::constants::{SessionConfig, MAX_PARAMETER_MAGNITUDE};

    let limits = ParameterLimits::from(SessionConfig {
        max_parameter_magnitude: i64::MAX,
    });
    let err = compute_box(ParameterTriple::new(4_000_000_000, 0, 1), &limits).unwrap_err();
    assert_eq!(
        err,
        BoxError::ParameterOutOfRange {
            name: 'm',
            value: 4_000_000_000,
            limit: MAX_PARAMETER_MAGNITUDE
        }
    );
    assert!(compute_box(ParameterTriple::new(i64::MIN, i64::MIN, i64::MIN), &limits).is_err());
}

/// m = 0 is accepted and gives a flat box: a = 0, so the four x-edges
/// collapse to points.
#[test]
fn test_zero_m_gives_flat_box() {
    let result = compute(0, 2, 1).expect("m = 0 is accepted");
    assert_eq!(result.dimensions, PythagoreanBox { a: 0, b: 4, c: 3, d: 5 });
    assert!(result.verdict.is_primitive);

    let geometry = result.geometry();
    let degenerate: Vec<(usize, usize)> = geometry
        .edges
        .iter()
        .copied()
        .zip(geometry.segments())
        .filter(|(_, segment)| segment.length() == 0.0)
        .map(|(edge, _)| edge)
        .collect();
    assert_eq!(degenerate, vec![(0, 1), (2, 3), (4, 5), (6, 7)]);
}

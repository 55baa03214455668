//! Tests for the box geometry builder.
//!
//! These tests verify that the builder:
//! - Creates exactly 8 vertices and 12 edges
//! - Places one corner at the origin and the opposite one at (a, b, c)
//! - Only connects corners that differ along a single axis
//! - Is deterministic

use super::*;
use crate::vec3::differing_axes;
use approx::assert_relative_eq;

/// Test the (4, 2, 4) box from the workbench walkthrough.
#[test]
fn test_box_4_2_4() {
    let g = build_box_geometry(4.0, 2.0, 4.0);

    assert_eq!(g.vertices.len(), VERTEX_COUNT);
    assert_eq!(g.edges.len(), EDGE_COUNT);
    assert_eq!(g.vertices[0], Vec3::new(0.0, 0.0, 0.0));
    assert_eq!(g.far_corner(), Vec3::new(4.0, 2.0, 4.0));

    let diagonal = g.diagonal();
    assert_eq!(diagonal.start, Vec3::ZERO);
    assert_eq!(diagonal.end, Vec3::new(4.0, 2.0, 4.0));
    assert_relative_eq!(diagonal.length(), 6.0);
}

/// Every edge is axis-aligned: its endpoints differ in exactly one coordinate.
#[test]
fn test_edges_are_axis_aligned() {
    let g = build_box_geometry(3.0, 5.0, 7.0);
    for &(i, j) in g.edges.iter() {
        assert!(i < VERTEX_COUNT && j < VERTEX_COUNT);
        assert_eq!(
            differing_axes(g.vertices[i], g.vertices[j]),
            1,
            "edge ({i}, {j}) is not axis-aligned"
        );
    }
}

/// Each axis carries four edges, one per parallel pair of faces.
#[test]
fn test_four_edges_per_axis() {
    let g = build_box_geometry(1.0, 2.0, 3.0);
    let mut per_axis = [0usize; 3];
    for segment in g.segments() {
        let delta = (segment.end - segment.start).abs();
        let axis = delta
            .to_array()
            .iter()
            .position(|&v| v > 0.0)
            .unwrap();
        per_axis[axis] += 1;
    }
    assert_eq!(per_axis, [4, 4, 4]);
}

/// Every corner touches exactly three edges.
#[test]
fn test_each_vertex_has_degree_three() {
    let g = build_box_geometry(1.0, 1.0, 1.0);
    let mut degree = [0usize; VERTEX_COUNT];
    for &(i, j) in g.edges.iter() {
        degree[i] += 1;
        degree[j] += 1;
    }
    assert_eq!(degree, [3; VERTEX_COUNT]);
}

#[test]
fn test_edge_lengths_match_dimensions() {
    let g = build_box_geometry(4.0, 2.0, 4.0);
    let lengths: Vec<f64> = g.segments().map(|s| s.length()).collect();
    assert_eq!(lengths.len(), 12);
    assert_eq!(&lengths[0..4], &[4.0, 2.0, 4.0, 2.0]);
    assert!(lengths[8..].iter().all(|&l| l == 4.0));
}

#[test]
fn test_deterministic() {
    assert_eq!(build_box_geometry(6.0, 4.0, 12.0), build_box_geometry(6.0, 4.0, 12.0));
}

/// A mirrored box keeps its layout but the bounds flip along x.
#[test]
fn test_mirrored_box_bounds() {
    let g = build_box_geometry(-4.0, 2.0, 4.0);
    assert_eq!(g.far_corner(), Vec3::new(-4.0, 2.0, 4.0));

    let (min, max) = g.bounding_box();
    assert_eq!(min, Vec3::new(-4.0, 0.0, 0.0));
    assert_eq!(max, Vec3::new(0.0, 2.0, 4.0));
}

#[test]
fn test_pythagorean_box_geometry() {
    let g = crate::generate_box(2, 1, 1).geometry();
    assert_eq!(g.far_corner(), Vec3::new(4.0, 2.0, 4.0));
}

/// A zero extent keeps the 8/12 layout; edges along that axis collapse to
/// points and every other edge stays axis-aligned.
#[test]
fn test_flat_box_keeps_layout() {
    let g = build_box_geometry(0.0, 4.0, 3.0);
    assert_eq!(g.vertices.len(), VERTEX_COUNT);
    assert_eq!(g.edges.len(), EDGE_COUNT);

    let axes: Vec<usize> = g
        .edges
        .iter()
        .map(|&(i, j)| differing_axes(g.vertices[i], g.vertices[j]))
        .collect();
    assert_eq!(axes, vec![0, 1, 0, 1, 0, 1, 0, 1, 1, 1, 1, 1]);
    assert_relative_eq!(g.diagonal().length(), 5.0);
}

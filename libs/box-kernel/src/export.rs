//! Wireframe buffer export for GPU rendering.
//!
//! This module provides functionality to export box geometry to
//! GPU-friendly line buffers using `f32` precision.

use crate::geometry::{BoxGeometry, EDGE_COUNT, VERTEX_COUNT};

/// Line-list buffers suitable for GPU rendering.
///
/// Contains vertex positions and edge indices in formats
/// compatible with WebGL/WebGPU line primitives.
///
/// # Examples
/// ```
/// use box_kernel::build_box_geometry;
///
/// let buffers = build_box_geometry(4.0, 2.0, 4.0).to_wireframe_buffers();
///
/// assert_eq!(buffers.vertices.len(), 8 * 3); // 8 vertices * 3 components
/// assert_eq!(buffers.indices.len(), 12 * 2); // 12 edges * 2 indices
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WireframeBuffers {
    /// Vertex positions as flat array [x, y, z, x, y, z, ...].
    /// Uses `f32` for GPU compatibility.
    pub vertices: Vec<f32>,

    /// Edge indices as flat array [i0, j0, i1, j1, ...].
    pub indices: Vec<u32>,
}

impl WireframeBuffers {
    /// Creates empty buffers.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Returns the number of lines.
    pub fn line_count(&self) -> usize {
        self.indices.len() / 2
    }
}

impl Default for WireframeBuffers {
    fn default() -> Self {
        Self::new()
    }
}

impl BoxGeometry {
    /// Exports the wireframe to GPU-friendly line buffers.
    ///
    /// Converts internal `f64` precision to `f32` for GPU rendering.
    pub fn to_wireframe_buffers(&self) -> WireframeBuffers {
        let mut buffers = WireframeBuffers {
            vertices: Vec::with_capacity(VERTEX_COUNT * 3),
            indices: Vec::with_capacity(EDGE_COUNT * 2),
        };

        for vertex in &self.vertices {
            buffers.vertices.push(vertex.x as f32);
            buffers.vertices.push(vertex.y as f32);
            buffers.vertices.push(vertex.z as f32);
        }

        for &(i, j) in &self.edges {
            buffers.indices.push(i as u32);
            buffers.indices.push(j as u32);
        }

        buffers
    }
}

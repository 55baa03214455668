//! # Wireframe Handle
//!
//! WASM-friendly wrapper for box line data that can be transferred to JavaScript.

use box_session::Scene;
use wasm_bindgen::prelude::*;

/// Line buffers and colors of one box plot.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const wire = session.latest_wireframe();
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(wire.vertices(), 3));
/// geometry.setIndex(new THREE.BufferAttribute(wire.indices(), 1));
/// const edges = new THREE.LineSegments(geometry, new THREE.LineBasicMaterial({
///   color: new THREE.Color(...wire.edge_color().slice(0, 3)),
/// }));
///
/// // Dashed diagonal from the origin to (a, b, c)
/// const [x0, y0, z0, x1, y1, z1] = wire.diagonal();
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct WireframeHandle {
    /// Corner positions as [x, y, z, x, y, z, ...]
    vertices: Vec<f32>,
    /// Edge indices as [i0, i1, i0, i1, ...]
    indices: Vec<u32>,
    /// Diagonal endpoints as [x0, y0, z0, x1, y1, z1]
    diagonal: Vec<f32>,
    /// RGBA edge color
    edge_color: [f32; 4],
    /// RGBA diagonal color
    diagonal_color: [f32; 4],
    /// Upper bound of every axis
    axis_max: f64,
}

#[wasm_bindgen]
impl WireframeHandle {
    /// Returns the number of corners.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        (self.vertices.len() / 3) as u32
    }

    /// Returns the number of edges.
    #[wasm_bindgen(getter)]
    pub fn line_count(&self) -> u32 {
        (self.indices.len() / 2) as u32
    }

    /// Returns the corner positions as a Float32Array.
    ///
    /// Length: vertex_count * 3
    pub fn vertices(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.vertices[..])
    }

    /// Returns the edge indices as a Uint32Array.
    ///
    /// Length: line_count * 2
    pub fn indices(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(&self.indices[..])
    }

    /// Returns the diagonal endpoints as a Float32Array of length 6.
    pub fn diagonal(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.diagonal[..])
    }

    /// Returns the RGBA edge color as a Float32Array.
    pub fn edge_color(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.edge_color[..])
    }

    /// Returns the RGBA diagonal color as a Float32Array.
    pub fn diagonal_color(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.diagonal_color[..])
    }

    /// Upper bound of every axis; the lower bound is 0.
    #[wasm_bindgen(getter)]
    pub fn axis_max(&self) -> f64 {
        self.axis_max
    }
}

impl WireframeHandle {
    /// Creates a handle from a plot scene.
    pub fn from_scene(scene: &Scene) -> Self {
        let buffers = scene.wireframe_buffers();
        let (start, end) = (scene.diagonal.start, scene.diagonal.end);
        let diagonal = [start.x, start.y, start.z, end.x, end.y, end.z]
            .into_iter()
            .map(|v| v as f32)
            .collect();

        Self {
            vertices: buffers.vertices,
            indices: buffers.indices,
            diagonal,
            edge_color: scene.edge_color,
            diagonal_color: scene.diagonal_color,
            axis_max: scene.axis_range.1,
        }
    }

    /// Corner positions, for host-side inspection.
    pub fn vertex_buffer(&self) -> &[f32] {
        &self.vertices
    }

    /// Edge indices, for host-side inspection.
    pub fn index_buffer(&self) -> &[u32] {
        &self.indices
    }

    /// Diagonal endpoints, for host-side inspection.
    pub fn diagonal_buffer(&self) -> &[f32] {
        &self.diagonal
    }

    /// RGBA edge color, for host-side inspection.
    pub fn edge_rgba(&self) -> [f32; 4] {
        self.edge_color
    }
}

//! Plot scene for the newest box.
//!
//! Describes what a 3-D plotting collaborator should draw: the 12 wireframe
//! edges in the verdict color, the dashed space diagonal, a title, and equal
//! axis ranges so the box is not distorted.

use box_kernel::{BoxGeometry, Segment, WireframeBuffers};
use config::constants::{
    DERIVED_EDGE_COLOR, DERIVED_TITLE, DIAGONAL_COLOR, DIAGONAL_LABEL, PRIMITIVE_EDGE_COLOR,
    PRIMITIVE_TITLE,
};
use serde::{Deserialize, Serialize};

use crate::error::SessionResult;
use crate::history::HistoryEntry;

/// Renderer-agnostic description of one box plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// e.g. `PRIMITIVE Box: 2x2x1`
    pub title: String,
    /// Corners and edges of the box
    pub geometry: BoxGeometry,
    /// RGBA color of the 12 edges
    pub edge_color: [f32; 4],
    /// Space diagonal from the origin to `(a, b, c)`
    pub diagonal: Segment,
    /// RGBA color of the diagonal
    pub diagonal_color: [f32; 4],
    /// Legend label of the diagonal
    pub diagonal_label: String,
    /// The diagonal is drawn dashed
    pub diagonal_dashed: bool,
    /// `(min, max)` applied to all three axes
    pub axis_range: (f64, f64),
    /// Axis titles
    pub axis_labels: [String; 3],
}

impl Scene {
    /// Builds the scene for a recorded entry.
    ///
    /// # Examples
    /// ```
    /// use box_session::{ParameterTriple, Scene, Session};
    ///
    /// let mut session = Session::default();
    /// let entry = session.submit(ParameterTriple::new(1, 1, 1)).unwrap().clone();
    ///
    /// let scene = Scene::from_entry(&entry);
    /// assert_eq!(scene.title, "PRIMITIVE Box: 2x2x1");
    /// assert_eq!(scene.axis_range, (0.0, 2.0));
    /// ```
    pub fn from_entry(entry: &HistoryEntry) -> Self {
        let dims = entry.dimensions;
        let primitive = entry.verdict.is_primitive;
        let geometry = dims.geometry();

        let (prefix, edge_color) = if primitive {
            (PRIMITIVE_TITLE, PRIMITIVE_EDGE_COLOR)
        } else {
            (DERIVED_TITLE, DERIVED_EDGE_COLOR)
        };

        Self {
            title: format!("{prefix} Box: {}x{}x{}", dims.a, dims.b, dims.c),
            diagonal: geometry.diagonal(),
            geometry,
            edge_color,
            diagonal_color: DIAGONAL_COLOR,
            diagonal_label: DIAGONAL_LABEL.to_string(),
            diagonal_dashed: true,
            axis_range: (0.0, dims.max_edge() as f64),
            axis_labels: ["x", "y", "z"].map(String::from),
        }
    }

    /// The 12 edges as coordinate segments.
    pub fn edges(&self) -> Vec<Segment> {
        self.geometry.segments().collect()
    }

    /// Line buffers for GPU renderers.
    pub fn wireframe_buffers(&self) -> WireframeBuffers {
        self.geometry.to_wireframe_buffers()
    }

    /// Serializes the scene as JSON.
    ///
    /// # Errors
    /// [`crate::SessionError::Export`] if serialization fails.
    pub fn to_json(&self) -> SessionResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

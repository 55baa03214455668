//! # Box Session
//!
//! Session model behind the workbench front ends: every accepted request
//! becomes a [`HistoryEntry`] at the front of a caller-owned [`History`], and
//! the newest entry can be turned into a renderer-agnostic [`Scene`].
//!
//! ## Example
//!
//! ```rust
//! use box_session::{ParameterTriple, Session};
//!
//! let mut session = Session::default();
//! let entry = session.submit(ParameterTriple::new(2, 1, 1)).unwrap();
//! assert_eq!(entry.label, "No (GCD=2)");
//!
//! // Rejected requests leave the history untouched
//! assert!(session.submit(ParameterTriple::new(1, 1, 2)).is_err());
//! assert_eq!(session.history().len(), 1);
//!
//! let scene = session.latest_scene().unwrap();
//! assert_eq!(scene.title, "DERIVED Box: 4x2x4");
//! ```

pub mod error;
pub mod history;
pub mod scene;
pub mod table;

pub use box_kernel::{BoxError, ParameterTriple};
pub use error::{SessionError, SessionResult};
pub use history::{handle_generate, verdict_label, History, HistoryEntry};
pub use scene::Scene;
pub use table::{render_table, TableRow, COLUMNS};

use config::constants::SessionConfig;

/// One interactive session: its configuration and its history.
///
/// Front ends that prefer to hold the history themselves can call
/// [`handle_generate`] directly instead.
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: SessionConfig,
    history: History,
}

impl Session {
    /// Creates an empty session.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            history: History::new(),
        }
    }

    /// Validates and computes a box, recording it as the newest entry.
    ///
    /// # Errors
    /// [`SessionError::Rejected`] when the parameters are invalid; the
    /// history is not modified in that case.
    pub fn submit(&mut self, parameters: ParameterTriple) -> SessionResult<&HistoryEntry> {
        Ok(handle_generate(&mut self.history, parameters, &self.config)?)
    }

    /// Entries recorded so far, newest first.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Scene for the newest entry, if any.
    pub fn latest_scene(&self) -> Option<Scene> {
        self.history.latest().map(Scene::from_entry)
    }

    /// Forgets all entries.
    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// Configuration the session validates against.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}

//! Session history.
//!
//! The history is an ordered, append-at-front record of accepted requests.
//! It lives for one interactive session and is owned by whoever handles
//! requests; the kernel never sees it.

use std::collections::VecDeque;

use box_kernel::{
    compute_box, BoxComputation, BoxResult, ParameterLimits, ParameterTriple, PrimitivityVerdict,
    PythagoreanBox,
};
use config::constants::{SessionConfig, PRIMITIVE_LABEL};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::SessionResult;
use crate::table::TableRow;

/// One accepted request: parameters, box, verdict and its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Submitted parameters
    pub parameters: ParameterTriple,
    /// Generated edges and diagonal
    pub dimensions: PythagoreanBox,
    /// Primitivity of the edges
    pub verdict: PrimitivityVerdict,
    /// Human-readable verdict, see [`verdict_label`]
    pub label: String,
}

impl From<BoxComputation> for HistoryEntry {
    fn from(computation: BoxComputation) -> Self {
        Self {
            parameters: computation.parameters,
            dimensions: computation.dimensions,
            verdict: computation.verdict,
            label: verdict_label(&computation.verdict),
        }
    }
}

/// Label shown in the "Primitive?" column.
///
/// # Examples
/// ```
/// use box_kernel::check_primitivity;
/// use box_session::verdict_label;
///
/// assert_eq!(verdict_label(&check_primitivity(2, 2, 1)), "Yes");
/// assert_eq!(verdict_label(&check_primitivity(4, 2, 4)), "No (GCD=2)");
/// ```
pub fn verdict_label(verdict: &PrimitivityVerdict) -> String {
    if verdict.is_primitive {
        PRIMITIVE_LABEL.to_string()
    } else {
        format!("No (GCD={})", verdict.gcd)
    }
}

/// Accepted requests, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Newest entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// Entries from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> + '_ {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forgets all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Table rows, newest first.
    pub fn rows(&self) -> Vec<TableRow> {
        self.entries.iter().map(TableRow::from).collect()
    }

    /// Table rows as a JSON array of objects keyed by column title.
    ///
    /// # Errors
    /// [`crate::SessionError::Export`] if serialization fails.
    pub fn to_json(&self) -> SessionResult<String> {
        Ok(serde_json::to_string_pretty(&self.rows())?)
    }

    fn record(&mut self, entry: HistoryEntry) -> &HistoryEntry {
        self.entries.push_front(entry);
        &self.entries[0]
    }
}

/// Handles one generation request against a caller-owned history.
///
/// On success the new entry is placed at the front of `history` and
/// returned. On rejection `history` is left exactly as it was.
///
/// # Errors
/// Any [`box_kernel::BoxError`] from parameter validation.
///
/// # Examples
/// ```
/// use box_session::{handle_generate, History, ParameterTriple};
/// use config::constants::SessionConfig;
///
/// let mut history = History::new();
/// let config = SessionConfig::default();
///
/// handle_generate(&mut history, ParameterTriple::new(1, 1, 1), &config).unwrap();
/// handle_generate(&mut history, ParameterTriple::new(2, 1, 1), &config).unwrap();
/// assert!(handle_generate(&mut history, ParameterTriple::new(2, 1, 0), &config).is_err());
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.latest().unwrap().parameters.m, 2);
/// ```
pub fn handle_generate<'h>(
    history: &'h mut History,
    parameters: ParameterTriple,
    config: &SessionConfig,
) -> BoxResult<&'h HistoryEntry> {
    let limits = ParameterLimits::from(*config);
    let computation = compute_box(parameters, &limits)?;

    let entry = history.record(HistoryEntry::from(computation));
    info!(
        parameters = %entry.parameters,
        dimensions = %entry.dimensions,
        verdict = %entry.label,
        "recorded box"
    );
    Ok(entry)
}

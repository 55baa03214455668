//! WASM-facing entry points for the Pythagorean box workbench.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests interact with the `_internal` helpers to
//! avoid depending on a JS host.
//!
//! ```
//! let mut session = box_wasm::WasmSession::new();
//! let handle = session.generate_internal(2, 1, 1).unwrap();
//! assert_eq!(handle.label(), "No (GCD=2)");
//! ```

use box_session::{HistoryEntry, ParameterTriple, Scene, Session, SessionResult};
use config::constants::{SessionConfig, DEFAULT_K, DEFAULT_M, DEFAULT_N};
use wasm_bindgen::prelude::*;

mod wireframe_handle;

pub use wireframe_handle::WireframeHandle;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "box-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Initial `[m, n, k]` for parameter inputs.
///
/// # Examples
/// ```
/// assert_eq!(box_wasm::default_parameters(), vec![1, 1, 1]);
/// ```
#[wasm_bindgen]
pub fn default_parameters() -> Vec<i32> {
    [DEFAULT_M, DEFAULT_N, DEFAULT_K]
        .into_iter()
        .map(|value| i32::try_from(value).unwrap_or(1))
        .collect()
}

/// One accepted box, as seen from JavaScript.
///
/// Integer values are exposed as `f64`; every value admitted by the
/// parameter limit stays below 2^53 and is therefore exact.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct BoxHandle {
    entry: HistoryEntry,
    title: String,
}

#[wasm_bindgen]
impl BoxHandle {
    /// Parameter m.
    #[wasm_bindgen(getter)]
    pub fn m(&self) -> f64 {
        self.entry.parameters.m as f64
    }

    /// Parameter n.
    #[wasm_bindgen(getter)]
    pub fn n(&self) -> f64 {
        self.entry.parameters.n as f64
    }

    /// Parameter k.
    #[wasm_bindgen(getter)]
    pub fn k(&self) -> f64 {
        self.entry.parameters.k as f64
    }

    /// Edge along x.
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> f64 {
        self.entry.dimensions.a as f64
    }

    /// Edge along y.
    #[wasm_bindgen(getter)]
    pub fn b(&self) -> f64 {
        self.entry.dimensions.b as f64
    }

    /// Edge along z.
    #[wasm_bindgen(getter)]
    pub fn c(&self) -> f64 {
        self.entry.dimensions.c as f64
    }

    /// Space diagonal.
    #[wasm_bindgen(getter)]
    pub fn d(&self) -> f64 {
        self.entry.dimensions.d as f64
    }

    /// True when gcd(a, b, c) is 1.
    #[wasm_bindgen(getter)]
    pub fn is_primitive(&self) -> bool {
        self.entry.verdict.is_primitive
    }

    /// gcd(a, b, c).
    #[wasm_bindgen(getter)]
    pub fn gcd(&self) -> f64 {
        self.entry.verdict.gcd as f64
    }

    /// "Yes" or "No (GCD=g)".
    #[wasm_bindgen(getter)]
    pub fn label(&self) -> String {
        self.entry.label.clone()
    }

    /// Plot title, e.g. "PRIMITIVE Box: 2x2x1".
    #[wasm_bindgen(getter)]
    pub fn title(&self) -> String {
        self.title.clone()
    }
}

impl From<&HistoryEntry> for BoxHandle {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            title: Scene::from_entry(entry).title,
            entry: entry.clone(),
        }
    }
}

/// Browser-side session: validation, history, and plot data.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const session = new WasmSession();
/// // try {
/// //   const box = session.generate(2, 1, 1);
/// //   console.log(box.title, box.label);
/// //   const wire = session.latest_wireframe();
/// //   geometry.setAttribute('position', new THREE.BufferAttribute(wire.vertices(), 3));
/// // } catch (error) {
/// //   console.error(error);
/// // }
/// ```
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct WasmSession {
    inner: Session,
}

#[wasm_bindgen]
impl WasmSession {
    /// Creates a session with the default parameter limit.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session that rejects parameters above `limit` in magnitude.
    ///
    /// # Errors
    /// Returns a JavaScript error string when `limit` is not accepted.
    pub fn with_limit(limit: i32) -> Result<WasmSession, JsValue> {
        Self::with_limit_internal(limit).map_err(|err| JsValue::from_str(&err))
    }

    /// Validates and records a box.
    ///
    /// # Errors
    /// Returns a JavaScript error string such as
    /// "Invalid parameters: the value of 'k' must be nonzero". The history is
    /// unchanged in that case.
    pub fn generate(&mut self, m: i32, n: i32, k: i32) -> Result<BoxHandle, JsValue> {
        self.generate_internal(m, n, k)
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// History rows as a JSON array, newest first.
    ///
    /// # Errors
    /// Returns a JavaScript error string if serialization fails.
    pub fn history_json(&self) -> Result<String, JsValue> {
        self.inner
            .history()
            .to_json()
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// Scene of the newest box as JSON, or `undefined` before the first box.
    ///
    /// # Errors
    /// Returns a JavaScript error string if serialization fails.
    pub fn latest_scene_json(&self) -> Result<Option<String>, JsValue> {
        self.latest_scene_json_internal()
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// Line buffers of the newest box, or `undefined` before the first box.
    pub fn latest_wireframe(&self) -> Option<WireframeHandle> {
        self.inner
            .latest_scene()
            .map(|scene| WireframeHandle::from_scene(&scene))
    }

    /// Number of recorded boxes.
    #[wasm_bindgen(getter)]
    pub fn history_len(&self) -> usize {
        self.inner.history().len()
    }

    /// Forgets all recorded boxes.
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl WasmSession {
    /// Host-only variant of [`WasmSession::with_limit`].
    ///
    /// # Errors
    /// The configuration error message when `limit` is not accepted.
    pub fn with_limit_internal(limit: i32) -> Result<Self, String> {
        let config = SessionConfig::new(i64::from(limit)).map_err(|err| err.to_string())?;
        Ok(Self {
            inner: Session::new(config),
        })
    }

    /// Host-only variant of [`WasmSession::generate`] that keeps Rust errors.
    ///
    /// # Errors
    /// [`box_session::SessionError::Rejected`] for invalid parameters.
    ///
    /// # Examples
    /// ```
    /// let mut session = box_wasm::WasmSession::new();
    /// let err = session.generate_internal(1, 1, 2).unwrap_err();
    /// assert!(err.to_string().starts_with("Invalid parameters"));
    /// assert_eq!(session.history_len(), 0);
    /// ```
    pub fn generate_internal(&mut self, m: i32, n: i32, k: i32) -> SessionResult<BoxHandle> {
        let parameters = ParameterTriple::new(i64::from(m), i64::from(n), i64::from(k));
        self.inner.submit(parameters).map(BoxHandle::from)
    }

    /// Host-only variant of [`WasmSession::latest_scene_json`].
    ///
    /// # Errors
    /// [`box_session::SessionError::Export`] if serialization fails.
    pub fn latest_scene_json_internal(&self) -> SessionResult<Option<String>> {
        self.inner.latest_scene().map(|scene| scene.to_json()).transpose()
    }

    /// The underlying session.
    pub fn session(&self) -> &Session {
        &self.inner
    }
}

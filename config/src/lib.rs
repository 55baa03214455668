//! # Config Crate
//!
//! Centralized configuration constants for the Pythagorean box workbench.
//! Default parameters, safety limits, plot colors and table labels are
//! defined here so the kernel, the session layer and the front ends agree.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_K, DEFAULT_M, DEFAULT_N, MAX_PARAMETER_MAGNITUDE};
//!
//! // The input form starts from the unit triple
//! assert_eq!((DEFAULT_M, DEFAULT_N, DEFAULT_K), (1, 1, 1));
//!
//! // Parameters beyond the limit are rejected before any squaring happens
//! let m: i64 = 2_000_000;
//! assert!(m.abs() > MAX_PARAMETER_MAGNITUDE);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

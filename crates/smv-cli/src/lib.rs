//! # smv-cli — SMART Manifest Verifier Command-Line Interface
//!
//! Locates manifest files, decodes them, hands them to `smv-schema`, and
//! turns the results into output and an exit code.
//!
//! ```bash
//! smv validate --kind app manifests/cardio-risk.json
//! smv validate --kind container --format json sandbox.yaml
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers.
//! - Handlers delegate to domain crates — no validation logic here.

pub mod validate;

/// Every manifest passed.
pub const EXIT_OK: u8 = 0;
/// At least one manifest has violations.
pub const EXIT_VIOLATIONS: u8 = 1;
/// At least one manifest could not be loaded.
pub const EXIT_LOAD_ERROR: u8 = 2;

//! # smv-core — Foundational Types for the SMART Manifest Verifier
//!
//! Shared by every other crate in the workspace; depends on nothing
//! internal.
//!
//! - [`ManifestKind`] — the two manifest kinds (`app`, `container`).
//! - [`SmvError`] — errors for everything outside the validation core.
//! - [`document`] — decoding manifest files (JSON or YAML) into
//!   `serde_json::Value` trees.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `smv-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod document;
pub mod error;
pub mod kind;

pub use document::{load_manifest, parse_manifest, DocumentFormat};
pub use error::SmvError;
pub use kind::ManifestKind;

//! # smv-schema — Manifest Validation
//!
//! Validates decoded app and container manifests and reports every
//! violation found, not just the first.
//!
//! ## Structure
//!
//! - [`node`] — the schema tree as data: a [`SchemaNode`] enum tagged by
//!   JSON type, with kind-specific constraints.
//! - [`pattern`] — compiled URL and version patterns shared by the schemas.
//! - [`engine`] — the structural validator: one recursive walk, then
//!   deduplication and sorting by message text.
//! - [`app`], [`container`] — the two fixed root schemas; [`app`] also
//!   holds the mode-dependent semantic rules.
//! - [`validate`] — entry points combining both passes.
//!
//! ```
//! use serde_json::json;
//! use smv_schema::validate_app_manifest;
//!
//! let result = validate_app_manifest(&json!({
//!     "description": "Nightly sync",
//!     "id": "sync@example.org",
//!     "mode": "background",
//!     "name": "Sync"
//! }));
//! assert!(result.is_valid());
//! ```
//!
//! ## Crate Policy
//!
//! - Validation never fails: violations are data, returned in the result.
//! - Schema trees are immutable statics, safe to share across threads.
//! - Semantic rules run only on structurally valid manifests.

pub mod app;
pub mod capability;
pub mod container;
pub mod engine;
pub mod node;
pub mod pattern;
pub mod validate;
pub mod violation;

pub use app::APP_MANIFEST_SCHEMA;
pub use container::CONTAINER_MANIFEST_SCHEMA;
pub use engine::validate_structure;
pub use node::SchemaNode;
pub use validate::{
    schema_for, validate_app_manifest, validate_container_manifest, validate_manifest,
};
pub use violation::{ValidationResult, Violation, ViolationKind};

//! # Manifest Validation
//!
//! Entry points that run the full check for one manifest: the structural
//! pass against the kind's schema, then (only if that pass is clean) the
//! kind's semantic rules.
//!
//! Results list structural violations first, sorted by message, followed
//! by semantic violations in rule order. Every call is a pure function of
//! its input; the schema trees are shared read-only statics.

use serde_json::Value;
use smv_core::ManifestKind;

use crate::app::{check_app_rules, APP_MANIFEST_SCHEMA};
use crate::container::CONTAINER_MANIFEST_SCHEMA;
use crate::engine::validate_structure;
use crate::node::SchemaNode;
use crate::violation::{ValidationResult, Violation};

/// Validate an app manifest.
pub fn validate_app_manifest(manifest: &Value) -> ValidationResult {
    validate_manifest(ManifestKind::App, manifest)
}

/// Validate a container manifest.
pub fn validate_container_manifest(manifest: &Value) -> ValidationResult {
    validate_manifest(ManifestKind::Container, manifest)
}

/// The root schema for a manifest kind.
pub fn schema_for(kind: ManifestKind) -> &'static SchemaNode {
    match kind {
        ManifestKind::App => &APP_MANIFEST_SCHEMA,
        ManifestKind::Container => &CONTAINER_MANIFEST_SCHEMA,
    }
}

fn semantic_rules(kind: ManifestKind, manifest: &Value) -> Vec<Violation> {
    match kind {
        ManifestKind::App => check_app_rules(manifest),
        ManifestKind::Container => Vec::new(),
    }
}

/// Validate a manifest of the given kind.
pub fn validate_manifest(kind: ManifestKind, manifest: &Value) -> ValidationResult {
    tracing::debug!(%kind, "validating manifest");

    let mut result = ValidationResult::from(validate_structure(schema_for(kind), manifest));
    if !result.is_empty() {
        tracing::debug!(%kind, violations = result.len(), "structural violations found");
        tracing::trace!(%kind, "skipping semantic rules");
        return result;
    }

    let semantic = semantic_rules(kind, manifest);
    tracing::debug!(%kind, violations = semantic.len(), "semantic rules evaluated");
    result.extend(semantic);
    result
}

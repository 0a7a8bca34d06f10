//! # App Manifest
//!
//! Schema and cross-field rules for application manifests.
//!
//! The schema fixes the accepted shape: required identity fields, a launch
//! `mode`, optional URLs for the icon, launch page and OAuth callback, the
//! browser environments the app targets, and the data capabilities it
//! `requires`. Undeclared top-level keys are rejected.
//!
//! Two rules depend on `mode` and cannot be expressed in the schema tree;
//! they live in [`APP_RULES`] and only run on structurally valid manifests.

use once_cell::sync::Lazy;
use serde_json::{Map, Value};

use crate::capability::capability_map;
use crate::node::SchemaNode;
use crate::pattern::{URL_PATTERN, VERSION_PATTERN};
use crate::violation::{Violation, ViolationKind};

/// Launch modes an app may declare.
pub const APP_MODES: &[&str] = &["ui", "background", "frame_ui"];

/// Browser environments an app may list as optimal or supported.
pub const BROWSER_ENVIRONMENTS: &[&str] = &["desktop", "tablet", "mobile"];

/// Keys a `background` app must not declare.
pub const BACKGROUND_EXCLUDED_KEYS: &[&str] = &[
    "index",
    "oauth_callback",
    "optimalBrowserEnvironments",
    "supportedBrowserEnvironments",
];

/// Root schema for app manifests.
pub static APP_MANIFEST_SCHEMA: Lazy<SchemaNode> = Lazy::new(|| {
    SchemaNode::object()
        .optional("author", SchemaNode::string())
        .required("description", SchemaNode::string())
        .optional("icon", SchemaNode::string().matching(&URL_PATTERN))
        .required("id", SchemaNode::string())
        .optional("index", SchemaNode::string().matching(&URL_PATTERN))
        .optional("oauth_callback", SchemaNode::string().matching(&URL_PATTERN))
        .required("mode", SchemaNode::string().one_of(APP_MODES))
        .required("name", SchemaNode::string())
        .optional("optimalBrowserEnvironments", browser_environments())
        .optional("requires", capability_map())
        .optional("scope", SchemaNode::string().one_of(&["record"]))
        .optional("smart_version", SchemaNode::string().matching(&VERSION_PATTERN))
        .optional("supportedBrowserEnvironments", browser_environments())
        .optional("version", SchemaNode::string())
        .deny_additional()
        .into()
});

fn browser_environments() -> SchemaNode {
    SchemaNode::array_of(SchemaNode::string().one_of(BROWSER_ENVIRONMENTS))
        .unique()
        .into()
}

/// A cross-field rule over a structurally valid manifest object.
pub type SemanticRule = fn(&Map<String, Value>, &mut Vec<Violation>);

/// App rules, in evaluation order. At most one of them fires for a given
/// `mode`.
pub const APP_RULES: &[SemanticRule] = &[
    foreground_requires_icon_and_index,
    background_excludes_page_fields,
];

/// Run [`APP_RULES`] in order. Violations are returned in rule order and
/// are not sorted.
pub fn check_app_rules(manifest: &Value) -> Vec<Violation> {
    let mut violations = Vec::new();
    if let Some(fields) = manifest.as_object() {
        for rule in APP_RULES {
            rule(fields, &mut violations);
        }
    }
    violations
}

/// `ui` and `frame_ui` apps need an `icon` and an `index`. Each absence is
/// reported separately, icon first.
fn foreground_requires_icon_and_index(fields: &Map<String, Value>, out: &mut Vec<Violation>) {
    if !matches!(mode(fields), Some("ui") | Some("frame_ui")) {
        return;
    }
    for key in ["icon", "index"] {
        if !fields.contains_key(key) {
            out.push(Violation::new(
                "",
                ViolationKind::Conditional,
                format!("non-background apps must declare an \"{key}\" property"),
            ));
        }
    }
}

/// `background` apps have no page to load, so none of the page-related
/// keys may appear. One message covers all of them.
fn background_excludes_page_fields(fields: &Map<String, Value>, out: &mut Vec<Violation>) {
    if mode(fields) != Some("background") {
        return;
    }
    if BACKGROUND_EXCLUDED_KEYS.iter().any(|key| fields.contains_key(*key)) {
        out.push(Violation::new(
            "",
            ViolationKind::Conditional,
            "background apps must not declare \"index\", \"oauth_callback\", \
             \"optimalBrowserEnvironments\" or \"supportedBrowserEnvironments\" properties",
        ));
    }
}

fn mode(fields: &Map<String, Value>) -> Option<&str> {
    fields.get("mode").and_then(Value::as_str)
}

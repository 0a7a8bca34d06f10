//! # Container Manifest
//!
//! Schema for container manifests. Every top-level field is required:
//! the administrator contact, the API base URL, the data capabilities
//! the container offers, and the three OAuth launch endpoints.
//!
//! Containers have no cross-field rules; structural validation is the
//! whole check.

use once_cell::sync::Lazy;

use crate::capability::capability_map;
use crate::node::SchemaNode;
use crate::pattern::{URL_PATTERN, VERSION_PATTERN};

/// Root schema for container manifests.
pub static CONTAINER_MANIFEST_SCHEMA: Lazy<SchemaNode> = Lazy::new(|| {
    SchemaNode::object()
        .required("admin", SchemaNode::string())
        .required("api_base", SchemaNode::string().matching(&URL_PATTERN))
        .required("capabilities", capability_map())
        .required("description", SchemaNode::string())
        .required(
            "launch_urls",
            SchemaNode::object()
                .required("authorize_token", SchemaNode::string().matching(&URL_PATTERN))
                .required("exchange_token", SchemaNode::string().matching(&URL_PATTERN))
                .required("request_token", SchemaNode::string().matching(&URL_PATTERN))
                .deny_additional(),
        )
        .required("name", SchemaNode::string())
        .required("smart_version", SchemaNode::string().matching(&VERSION_PATTERN))
        .deny_additional()
        .into()
});

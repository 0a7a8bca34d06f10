//! # Capability Maps
//!
//! Shared shape of the app manifest's `requires` object and the container
//! manifest's `capabilities` object: keys are URLs naming a data
//! capability, values list the code-system URLs and HTTP methods used
//! with it.

use crate::node::{ObjectNode, SchemaNode};
use crate::pattern::URL_PATTERN;

/// HTTP methods a capability may declare.
pub const HTTP_METHODS: &[&str] = &["GET", "PUT", "POST", "DELETE"];

/// `{ "<url>": { "codes": [<url>...], "methods": [<method>...] } }`,
/// closed at both levels.
pub fn capability_map() -> ObjectNode {
    SchemaNode::object()
        .pattern_property(&URL_PATTERN, capability())
        .deny_additional()
}

fn capability() -> ObjectNode {
    SchemaNode::object()
        .optional(
            "codes",
            SchemaNode::array_of(SchemaNode::string().matching(&URL_PATTERN)).unique(),
        )
        .optional(
            "methods",
            SchemaNode::array_of(SchemaNode::string().one_of(HTTP_METHODS)).unique(),
        )
        .deny_additional()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::validate_structure;
    use serde_json::json;

    #[test]
    fn accepts_codes_and_methods() {
        let schema = SchemaNode::from(capability_map());
        let instance = json!({
            "http://smartplatforms.org/terms#Problem": {
                "codes": ["http://purl.bioontology.org/ontology/SNOMEDCT/"],
                "methods": ["GET", "POST"]
            },
            "http://smartplatforms.org/terms#Demographics": {}
        });
        assert!(validate_structure(&schema, &instance).is_empty());
    }

    #[test]
    fn rejects_unknown_method_and_extra_keys() {
        let schema = SchemaNode::from(capability_map());
        let instance = json!({
            "http://smartplatforms.org/terms#Problem": {
                "methods": ["GET", "PATCH"],
                "scopes": []
            }
        });
        let messages: Vec<String> = validate_structure(&schema, &instance)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            messages,
            [
                r#"/http:~1~1smartplatforms.org~1terms#Problem/methods/1: "PATCH" is not one of ["GET","PUT","POST","DELETE"]"#,
                r#"/http:~1~1smartplatforms.org~1terms#Problem: additional property "scopes" is not allowed"#,
            ]
        );
    }

    #[test]
    fn rejects_non_url_keys_and_duplicate_codes() {
        let schema = SchemaNode::from(capability_map());
        let instance = json!({
            "Problem": {},
            "http://x.org/p": {"codes": ["http://c.org/a", "http://c.org/a"]}
        });
        let violations = validate_structure(&schema, &instance);
        assert_eq!(violations.len(), 2);
    }
}

//! # Manifest Documents
//!
//! Reads manifest files and decodes them into `serde_json::Value` trees,
//! the only input shape the validation core accepts. JSON is the native
//! format; YAML documents are converted to the equivalent JSON tree so a
//! manifest authored in either format validates identically.
//!
//! Loading never inspects the decoded shape. A document that decodes to
//! an array or a scalar is returned as-is and reported by the validator
//! as a root type violation.

use std::path::Path;

use serde_json::Value;

use crate::error::SmvError;

/// Text encoding of a manifest document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// JSON text.
    Json,
    /// YAML text (JSON-compatible subset).
    Yaml,
}

impl DocumentFormat {
    /// Pick the format from a file extension: `.yaml`/`.yml` are YAML,
    /// everything else is treated as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Load a manifest file into a JSON value.
///
/// # Errors
///
/// Returns `SmvError::DocumentLoad` if the file cannot be read or its
/// contents are not valid JSON/YAML.
pub fn load_manifest(path: &Path) -> Result<Value, SmvError> {
    let content = std::fs::read_to_string(path).map_err(|e| SmvError::DocumentLoad {
        path: path.display().to_string(),
        reason: format!("cannot read file: {e}"),
    })?;

    let format = DocumentFormat::from_path(path);
    tracing::debug!(path = %path.display(), ?format, "loading manifest document");

    parse_manifest(&content, format, &path.display().to_string())
}

/// Decode manifest text in the given format.
///
/// `label` names the document in error messages (usually its path).
pub fn parse_manifest(text: &str, format: DocumentFormat, label: &str) -> Result<Value, SmvError> {
    match format {
        DocumentFormat::Json => serde_json::from_str(text).map_err(|e| SmvError::DocumentLoad {
            path: label.to_string(),
            reason: format!("invalid JSON: {e}"),
        }),
        DocumentFormat::Yaml => {
            let yaml_value: serde_yaml::Value =
                serde_yaml::from_str(text).map_err(|e| SmvError::DocumentLoad {
                    path: label.to_string(),
                    reason: format!("invalid YAML: {e}"),
                })?;
            yaml_to_json_value(&yaml_value).map_err(|e| SmvError::DocumentLoad {
                path: label.to_string(),
                reason: format!("YAML-to-JSON conversion failed: {e}"),
            })
        }
    }
}

/// Convert a `serde_yaml::Value` tree into the equivalent `serde_json::Value`.
///
/// Tags are dropped. Scalar map keys are stringified; sequence or mapping
/// keys have no JSON equivalent and are rejected.
fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value, String> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::from(i))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::from(u))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| format!("cannot represent float {f} in JSON"))
            } else {
                Err(format!("unsupported YAML number: {n:?}"))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => seq
            .iter()
            .map(yaml_to_json_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        serde_yaml::Value::Mapping(map) => {
            let mut json_map = serde_json::Map::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => return Err(format!("unsupported YAML map key type: {other:?}")),
                };
                json_map.insert(key, yaml_to_json_value(v)?);
            }
            Ok(Value::Object(json_map))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json_value(&tagged.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn format_from_extension() {
        assert_eq!(DocumentFormat::from_path(Path::new("m.yaml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("m.yml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("m.json")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("manifest")), DocumentFormat::Json);
    }

    #[test]
    fn parse_json_manifest() {
        let value = parse_manifest(
            r#"{"id": "my-app@example.org", "mode": "ui"}"#,
            DocumentFormat::Json,
            "inline",
        )
        .unwrap();
        assert_eq!(value, json!({"id": "my-app@example.org", "mode": "ui"}));
    }

    #[test]
    fn parse_invalid_json_reports_label() {
        let err = parse_manifest("{\"id\": ", DocumentFormat::Json, "broken.json").unwrap_err();
        match err {
            SmvError::DocumentLoad { path, reason } => {
                assert_eq!(path, "broken.json");
                assert!(reason.starts_with("invalid JSON"), "got: {reason}");
            }
            other => panic!("Expected DocumentLoad, got: {other}"),
        }
    }

    #[test]
    fn parse_yaml_manifest_matches_json_tree() {
        let yaml = r#"
name: Cardio Risk
mode: background
optimalBrowserEnvironments:
  - desktop
  - tablet
requires:
  "http://smartplatforms.org/terms#Demographics":
    methods: [GET]
"#;
        let value = parse_manifest(yaml, DocumentFormat::Yaml, "inline.yaml").unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Cardio Risk",
                "mode": "background",
                "optimalBrowserEnvironments": ["desktop", "tablet"],
                "requires": {
                    "http://smartplatforms.org/terms#Demographics": {"methods": ["GET"]}
                }
            })
        );
    }

    #[test]
    fn yaml_scalar_keys_are_stringified() {
        let yaml: serde_yaml::Value = serde_yaml::from_str("1: one\ntrue: yes\n").unwrap();
        let value = yaml_to_json_value(&yaml).unwrap();
        assert_eq!(value["1"], "one");
        assert_eq!(value["true"], "yes");
    }

    #[test]
    fn non_object_documents_load_unchanged() {
        let value = parse_manifest("[1, 2, 3]", DocumentFormat::Json, "list.json").unwrap();
        assert_eq!(value, json!([1, 2, 3]));
    }

    #[test]
    fn load_manifest_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.yml");
        std::fs::write(&path, "admin: admin@example.org\n").unwrap();

        let value = load_manifest(&path).unwrap();
        assert_eq!(value, json!({"admin": "admin@example.org"}));
    }

    #[test]
    fn load_missing_file_is_document_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_manifest(&dir.path().join("absent.json")).unwrap_err();
        assert!(
            matches!(err, SmvError::DocumentLoad { ref reason, .. } if reason.starts_with("cannot read file")),
            "got: {err}"
        );
    }
}

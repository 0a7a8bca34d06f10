//! # Validate Subcommand
//!
//! Validates one or more manifest files of a single kind. Every file is
//! checked even after a failure, so one run lists all problems.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use serde::Serialize;
use smv_core::{load_manifest, ManifestKind};
use smv_schema::{validate_manifest, ValidationResult};

use crate::{EXIT_LOAD_ERROR, EXIT_OK, EXIT_VIOLATIONS};

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Manifest kind: `app` or `container`.
    #[arg(long)]
    pub kind: ManifestKind,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Manifest files (`.json`, `.yaml` or `.yml`).
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One status line per file, violations indented beneath it.
    Text,
    /// One JSON report object per line.
    Json,
}

/// Machine-readable report for one manifest file.
#[derive(Debug, Serialize)]
pub struct ManifestReport<'a> {
    pub path: String,
    pub kind: ManifestKind,
    pub valid: bool,
    pub violations: &'a ValidationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Run the validate subcommand, writing results to `out`.
///
/// Returns the process exit code: [`EXIT_OK`] if every manifest is valid,
/// [`EXIT_VIOLATIONS`] if any has violations, [`EXIT_LOAD_ERROR`] if any
/// file could not be loaded (takes precedence).
pub fn run_validate(args: &ValidateArgs, out: &mut dyn Write) -> anyhow::Result<u8> {
    let mut exit = EXIT_OK;

    for path in &args.paths {
        let (result, error) = match load_manifest(path) {
            Ok(manifest) => (validate_manifest(args.kind, &manifest), None),
            Err(e) => {
                tracing::warn!(path = %path.display(), "{e}");
                (ValidationResult::default(), Some(e.to_string()))
            }
        };

        let code = match (&error, result.is_valid()) {
            (Some(_), _) => EXIT_LOAD_ERROR,
            (None, false) => EXIT_VIOLATIONS,
            (None, true) => EXIT_OK,
        };
        exit = exit.max(code);
        tracing::info!(path = %path.display(), kind = %args.kind, violations = result.len(), "validated");

        match args.format {
            OutputFormat::Text => write_text(out, path, &result, error.as_deref())?,
            OutputFormat::Json => {
                let report = ManifestReport {
                    path: path.display().to_string(),
                    kind: args.kind,
                    valid: error.is_none() && result.is_valid(),
                    violations: &result,
                    error,
                };
                writeln!(out, "{}", serde_json::to_string(&report)?)?;
            }
        }
    }

    Ok(exit)
}

fn write_text(
    out: &mut dyn Write,
    path: &Path,
    result: &ValidationResult,
    error: Option<&str>,
) -> std::io::Result<()> {
    let path = path.display();
    if let Some(error) = error {
        return writeln!(out, "{path}: ERROR {error}");
    }
    if result.is_valid() {
        return writeln!(out, "{path}: OK");
    }
    let noun = if result.len() == 1 { "violation" } else { "violations" };
    writeln!(out, "{path}: {} {noun}", result.len())?;
    writeln!(out, "{result}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    const VALID_APP: &str = r#"{
        "description": "Nightly sync",
        "id": "sync@example.org",
        "mode": "background",
        "name": "Sync"
    }"#;

    const UI_APP_WITHOUT_PAGES: &str = r#"{
        "description": "Risk score",
        "id": "risk@example.org",
        "mode": "ui",
        "name": "Risk"
    }"#;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn run(kind: ManifestKind, format: OutputFormat, paths: Vec<PathBuf>) -> (u8, String) {
        let args = ValidateArgs { kind, format, paths };
        let mut out = Vec::new();
        let code = run_validate(&args, &mut out).unwrap();
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn valid_manifest_prints_ok() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "sync.json", VALID_APP);
        let (code, out) = run(ManifestKind::App, OutputFormat::Text, vec![path.clone()]);
        assert_eq!(code, EXIT_OK);
        assert_eq!(out, format!("{}: OK\n", path.display()));
    }

    #[test]
    fn violations_are_listed_under_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "risk.json", UI_APP_WITHOUT_PAGES);
        let (code, out) = run(ManifestKind::App, OutputFormat::Text, vec![path.clone()]);
        assert_eq!(code, EXIT_VIOLATIONS);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], format!("{}: 2 violations", path.display()));
        assert_eq!(lines[1], r#"  (root): non-background apps must declare an "icon" property"#);
        assert_eq!(lines[2], r#"  (root): non-background apps must declare an "index" property"#);
    }

    #[test]
    fn yaml_manifests_are_supported() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "sync.yaml",
            "description: Nightly sync\nid: sync@example.org\nmode: background\nname: Sync\n",
        );
        let (code, _) = run(ManifestKind::App, OutputFormat::Text, vec![path]);
        assert_eq!(code, EXIT_OK);
    }

    #[test]
    fn load_errors_take_precedence_and_do_not_stop_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let broken = write(dir.path(), "broken.json", "{ not json");
        let invalid = write(dir.path(), "risk.json", UI_APP_WITHOUT_PAGES);
        let (code, out) = run(ManifestKind::App, OutputFormat::Text, vec![broken.clone(), invalid]);
        assert_eq!(code, EXIT_LOAD_ERROR);
        assert!(out.starts_with(&format!("{}: ERROR ", broken.display())));
        assert!(out.contains("2 violations"));
    }

    #[test]
    fn json_format_emits_one_report_per_file() {
        let dir = tempfile::tempdir().unwrap();
        let valid = write(dir.path(), "sync.json", VALID_APP);
        let missing = dir.path().join("absent.json");
        let (code, out) = run(ManifestKind::App, OutputFormat::Json, vec![valid, missing]);
        assert_eq!(code, EXIT_LOAD_ERROR);

        let reports: Vec<Value> = out
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0]["valid"], true);
        assert_eq!(reports[0]["kind"], "app");
        assert_eq!(reports[0]["violations"], serde_json::json!([]));
        assert!(reports[0].get("error").is_none());
        assert_eq!(reports[1]["valid"], false);
        assert!(reports[1]["error"].as_str().unwrap().contains("cannot read file"));
    }

    #[test]
    fn json_report_carries_violation_kinds() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "risk.json", UI_APP_WITHOUT_PAGES);
        let (_, out) = run(ManifestKind::App, OutputFormat::Json, vec![path]);
        let report: Value = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(report["violations"][0]["kind"], "conditional");
        assert_eq!(report["violations"][0]["instance_path"], "");
    }

    #[test]
    fn container_kind_rejects_app_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "sync.json", VALID_APP);
        let (code, out) = run(ManifestKind::Container, OutputFormat::Text, vec![path]);
        assert_eq!(code, EXIT_VIOLATIONS);
        assert!(out.contains(r#""api_base" is a required property"#));
    }
}

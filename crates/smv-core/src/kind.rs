//! # Manifest Kinds
//!
//! The two kinds of declarative artifact a manifest can describe. Every
//! `match` on `ManifestKind` is exhaustive, so adding a kind forces each
//! entry point to decide how it is validated.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::SmvError;

/// The kind of manifest being verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManifestKind {
    /// An application manifest (launch mode, icon, index, required scopes).
    App,
    /// A container manifest (API base, capabilities, OAuth launch URLs).
    Container,
}

impl ManifestKind {
    /// All supported kinds, in declaration order.
    pub fn all() -> &'static [ManifestKind] {
        &[Self::App, Self::Container]
    }

    /// The lowercase name used in CLI flags and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::App => "app",
            Self::Container => "container",
        }
    }
}

impl std::fmt::Display for ManifestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ManifestKind {
    type Err = SmvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "app" => Ok(Self::App),
            "container" => Ok(Self::Container),
            other => Err(SmvError::UnknownManifestKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_from_str_agree() {
        for kind in ManifestKind::all() {
            let parsed: ManifestKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, *kind);
        }
    }

    #[test]
    fn from_str_rejects_unknown() {
        let err = "App".parse::<ManifestKind>().unwrap_err();
        assert!(matches!(err, SmvError::UnknownManifestKind(ref s) if s == "App"));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(
            serde_json::to_string(&ManifestKind::Container).unwrap(),
            "\"container\""
        );
        let kind: ManifestKind = serde_json::from_str("\"app\"").unwrap();
        assert_eq!(kind, ManifestKind::App);
    }
}

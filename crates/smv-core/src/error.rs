//! # Error Types
//!
//! Errors raised outside the validation core: resolving a manifest kind
//! by name and loading a manifest document from disk or text. Conformance
//! problems inside a decoded manifest are never errors; they are reported
//! as violations by `smv-schema`.

use thiserror::Error;

/// Top-level error type for the verifier.
#[derive(Error, Debug)]
pub enum SmvError {
    /// The manifest kind name is not one of the supported kinds.
    #[error("unknown manifest kind: {0:?} (expected \"app\" or \"container\")")]
    UnknownManifestKind(String),

    /// The document could not be read or decoded into a tree value.
    #[error("document load error for '{path}': {reason}")]
    DocumentLoad {
        /// Path (or label) of the document that failed to load.
        path: String,
        /// Reason the document could not be loaded.
        reason: String,
    },

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

//! # Violations and Results
//!
//! A [`Violation`] is one conformance problem found in a manifest: where it
//! is (a JSON Pointer into the manifest), what class of problem it is, and
//! a human-readable description. Its `Display` form is the validation
//! message handed to callers.
//!
//! A [`ValidationResult`] is the ordered sequence of violations for one
//! validation call. An empty result is the only success signal.

use std::fmt;

use serde::Serialize;

/// Machine-readable class of a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// The value's JSON type differs from the declared type.
    Type,
    /// A required property is absent.
    Required,
    /// A property is present but not declared, and the object is closed.
    AdditionalProperty,
    /// A string does not match its format pattern.
    Pattern,
    /// A value is not among the allowed literals.
    Enum,
    /// An array that must hold distinct items contains duplicates.
    UniqueItems,
    /// A combination of fields breaks a mode-dependent rule.
    Conditional,
}

impl ViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Required => "required",
            Self::AdditionalProperty => "additional_property",
            Self::Pattern => "pattern",
            Self::Enum => "enum",
            Self::UniqueItems => "unique_items",
            Self::Conditional => "conditional",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single violation with structured context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// JSON Pointer path to the violating value; empty for the document root.
    pub instance_path: String,
    /// Class of violation.
    pub kind: ViolationKind,
    /// Human-readable description of the violation.
    pub message: String,
}

impl Violation {
    pub fn new(instance_path: impl Into<String>, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            instance_path: instance_path.into(),
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.instance_path, self.message)
        }
    }
}

/// Ordered violations from one validation call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationResult {
    violations: Vec<Violation>,
}

impl ValidationResult {
    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Same as [`is_empty`](Self::is_empty); reads better at call sites
    /// that accept or reject a manifest.
    pub fn is_valid(&self) -> bool {
        self.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Iterate over the violations in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    /// The validation messages, in order.
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }

    /// Consumes self and returns the validation messages.
    pub fn into_messages(self) -> Vec<String> {
        self.messages()
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }

    /// Append violations after the ones already collected, preserving
    /// their order.
    pub(crate) fn extend(&mut self, violations: impl IntoIterator<Item = Violation>) {
        self.violations.extend(violations);
    }
}

impl From<Vec<Violation>> for ValidationResult {
    fn from(violations: Vec<Violation>) -> Self {
        Self { violations }
    }
}

impl<'a> IntoIterator for &'a ValidationResult {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {v}")?;
        }
        Ok(())
    }
}

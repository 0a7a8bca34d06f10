//! # Value Patterns
//!
//! Compiled regular expressions used as string-format constraints by the
//! manifest schemas. Each pattern is compiled once on first use and shared
//! by reference from every schema node that applies it.

use once_cell::sync::Lazy;
use regex::Regex;

/// A named, compiled string-format constraint.
///
/// The name is what violation messages report ("does not match the URL
/// pattern"), so the raw expression never leaks into user-facing output.
#[derive(Debug)]
pub struct ValuePattern {
    name: &'static str,
    regex: Regex,
}

impl ValuePattern {
    fn compile(name: &'static str, expr: &str) -> Self {
        Self {
            name,
            regex: Regex::new(expr).expect("value pattern must compile"),
        }
    }

    /// Human-readable pattern name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether `value` satisfies the pattern.
    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }

    /// The source expression.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// `scheme://[host[:port]][/path-and-query]`, where the last character is
/// not whitespace, `.`, `,`, `)` or `(`.
///
/// Scheme characters are ASCII word characters plus `-`. The path class
/// keeps the literal `&amp;` members the published manifest schema has
/// always carried, so `a`, `m`, `p` and `;` are accepted there as well.
pub static URL_PATTERN: Lazy<ValuePattern> = Lazy::new(|| {
    ValuePattern::compile(
        "URL",
        r"^[A-Za-z0-9_\-]+://([a-zA-Z0-9\-.]+(:[a-zA-Z0-9]*)?)?/?([a-zA-Z0-9\-._?,'/\\+&amp;%$#=~])*[^.,)(\s]$",
    )
});

/// One to three dot-separated numeric components: `1`, `0.4`, `1.2.3`.
pub static VERSION_PATTERN: Lazy<ValuePattern> =
    Lazy::new(|| ValuePattern::compile("version", r"^[0-9]+(?:\.[0-9]+){0,2}$"));

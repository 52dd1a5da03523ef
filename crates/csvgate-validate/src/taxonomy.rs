//! The ordered pattern taxonomy used for type inference.
//!
//! The taxonomy is a priority list, not a set: candidates are evaluated
//! top-to-bottom and the first match wins. More restrictive patterns come
//! before more permissive ones (timestamps before numerics, digits-only
//! before alphanumeric before the catch-all), so the source order below is
//! the disambiguation policy and must not be reordered.

use regex::Regex;

/// Header/string name pattern: a word character followed by word, space, or
/// dot characters, anchored start to end.
pub const NAME_PATTERN: &str = r"^\w+[\w .]*$";

/// Ordered `(pattern, label)` candidates. The terminal `^.*$` entry is the
/// explicit catch-all; it is handled as a default branch in [`Taxonomy::classify`]
/// so every sample is guaranteed exactly one matched type.
pub const PATTERNS: &[(&str, &str)] = &[
    (r"^\d{2}-\d{2}-\d{4} \d{2}:\d{2}:\d{2}(\.\d+)?$", "timestamp"),
    (r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}(\.\d+)?$", "timestamp"),
    (r"^\d{2}:\d{2}:\d{2}(\.\d+)?$", "timestamp"),
    (r"^\d{2}-\d{2}-\d{4}$", "timestamp"),
    (r"^\d{4}-\d{2}-\d{2}$", "timestamp"),
    (r"^\d+(\.\d+)$", "float"),
    (r"^\d{10}$", "phone"),
    (r"^\d+$", "integer"),
    (r"^[\w\d]+$", "alphanumeric"),
    (NAME_PATTERN, "string"),
    (r"^.*$", "text"),
];

/// One compiled taxonomy candidate.
#[derive(Debug)]
pub struct TaxonomyRule {
    pub pattern: &'static str,
    pub label: &'static str,
    regex: Regex,
}

impl TaxonomyRule {
    fn new(pattern: &'static str, label: &'static str) -> Self {
        let regex = Regex::new(pattern).expect("taxonomy patterns are fixed and valid");
        Self {
            pattern,
            label,
            regex,
        }
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

/// The compiled taxonomy plus the header name matcher.
#[derive(Debug)]
pub struct Taxonomy {
    head: Vec<TaxonomyRule>,
    terminal: TaxonomyRule,
    name: Regex,
}

impl Taxonomy {
    pub fn new() -> Self {
        let mut rules: Vec<TaxonomyRule> = PATTERNS
            .iter()
            .copied()
            .map(|(pattern, label)| TaxonomyRule::new(pattern, label))
            .collect();
        let terminal = rules.pop().expect("taxonomy has a terminal catch-all");
        let name = Regex::new(NAME_PATTERN).expect("name pattern is fixed and valid");
        Self {
            head: rules,
            terminal,
            name,
        }
    }

    /// First matching rule in taxonomy order. The catch-all is an explicit
    /// default branch, so classification never fails.
    pub fn classify(&self, value: &str) -> &TaxonomyRule {
        self.head
            .iter()
            .find(|rule| rule.is_match(value))
            .unwrap_or(&self.terminal)
    }

    /// Whether a header field name is string-like.
    pub fn is_valid_name(&self, value: &str) -> bool {
        self.name.is_match(value)
    }

    pub fn rules(&self) -> impl Iterator<Item = &TaxonomyRule> + '_ {
        self.head.iter().chain(std::iter::once(&self.terminal))
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::new()
    }
}

// Regex patterns used by the built-in and named checks

use crate::{ConfigurationError, Result};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

pub(crate) static ALPHA_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z]+$").unwrap());

pub(crate) static ALPHANUMERIC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9]+$").unwrap());

pub(crate) static URI_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9\-/_]+$").unwrap());

// ASCII whitespace only: space, \t, \n, \x0B, \f, \r
pub(crate) static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?-u:\s)").unwrap());

pub(crate) static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$").unwrap()
});

/// Name reserved by `match_pattern` for the collection check.
pub const ARRAY_PATTERN: &str = "array";

/// Fragments registered on every new validator.
pub const BUILTIN_PATTERNS: [(&str, &str); 5] = [
    ("words", r"[\p{L}\s]+"),
    ("tel", r"[0-9+\s()\-]+"),
    (
        "filename",
        r"[\p{L}\s0-9\-_!%&()=\[\]#@,.;+]+\.[A-Za-z0-9]{2,4}",
    ),
    ("folder", r"[\p{L}\s0-9\-_!%&()=\[\]#@,.;+]+"),
    ("address", r"[\p{L}0-9\s.,()°\-]+"),
];

static BUILTIN_SET: Lazy<PatternSet> = Lazy::new(|| {
    let mut set = PatternSet::empty();
    for (name, fragment) in BUILTIN_PATTERNS {
        set.insert(name, fragment).unwrap();
    }
    set
});

/// Wrap a fragment so it must match the whole value.
pub fn anchor(fragment: &str) -> String {
    format!("^({})$", fragment)
}

/// Compile an anchored fragment.
pub fn compile(fragment: &str) -> std::result::Result<Regex, regex::Error> {
    Regex::new(&anchor(fragment))
}

/// A registered fragment together with its compiled, anchored form.
#[derive(Debug, Clone)]
pub struct NamedPattern {
    fragment: String,
    regex: Regex,
}

impl NamedPattern {
    /// The fragment as registered.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Full-string match against the anchored fragment.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Named regex fragments available to `match_pattern`.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: IndexMap<String, NamedPattern>,
}

impl PatternSet {
    fn empty() -> Self {
        Self {
            patterns: IndexMap::new(),
        }
    }

    /// The built-in `words`, `tel`, `filename`, `folder` and `address` set.
    pub fn builtin() -> Self {
        BUILTIN_SET.clone()
    }

    /// Register or replace a fragment. Fails if the fragment does not compile.
    pub fn insert(&mut self, name: impl Into<String>, fragment: impl Into<String>) -> Result<()> {
        let name = name.into();
        let fragment = fragment.into();
        let regex = compile(&fragment).map_err(|e| ConfigurationError::InvalidPattern {
            name: name.clone(),
            reason: e.to_string(),
        })?;
        self.patterns.insert(name, NamedPattern { fragment, regex });
        Ok(())
    }

    /// Look up a pattern by name.
    pub fn get(&self, name: &str) -> Option<&NamedPattern> {
        self.patterns.get(name)
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.patterns.keys().map(String::as_str)
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::builtin()
    }
}

// Error kinds and message templates

use crate::{ConfigurationError, Result};
use std::collections::HashMap;
use std::fmt;

/// Placeholder replaced by the capitalized field name.
pub const FIELD_PLACEHOLDER: &str = "{{field}}";
/// Placeholder replaced by the lower length bound.
pub const LEN_MIN_PLACEHOLDER: &str = "{{lenMin}}";
/// Placeholder replaced by the upper length bound.
pub const LEN_MAX_PLACEHOLDER: &str = "{{lenMax}}";
/// Placeholder replaced by the lower numeric bound.
pub const NUM_MIN_PLACEHOLDER: &str = "{{numMin}}";
/// Placeholder replaced by the upper numeric bound.
pub const NUM_MAX_PLACEHOLDER: &str = "{{numMax}}";

/// The kinds of validation failure a [`Validator`](crate::Validator) can record.
///
/// Each kind maps to a template key. [`ErrorKind::Array`] is the odd one out:
/// it has no default template, so it is not part of [`ErrorKind::RECOGNIZED`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Empty,
    BadFormat,
    Length,
    MinMax,
    Int,
    Float,
    Alpha,
    Alphanum,
    WhiteSpace,
    Url,
    Uri,
    Bool,
    Email,
    Array,
}

impl ErrorKind {
    /// Kinds that every template set must provide.
    pub const RECOGNIZED: [ErrorKind; 13] = [
        ErrorKind::Empty,
        ErrorKind::BadFormat,
        ErrorKind::Length,
        ErrorKind::MinMax,
        ErrorKind::Int,
        ErrorKind::Float,
        ErrorKind::Alpha,
        ErrorKind::Alphanum,
        ErrorKind::WhiteSpace,
        ErrorKind::Url,
        ErrorKind::Uri,
        ErrorKind::Bool,
        ErrorKind::Email,
    ];

    /// Template key for this kind.
    pub fn key(&self) -> &'static str {
        match self {
            ErrorKind::Empty => "empty",
            ErrorKind::BadFormat => "badFormat",
            ErrorKind::Length => "length",
            ErrorKind::MinMax => "minMax",
            ErrorKind::Int => "int",
            ErrorKind::Float => "float",
            ErrorKind::Alpha => "alpha",
            ErrorKind::Alphanum => "alphanum",
            ErrorKind::WhiteSpace => "whiteSpace",
            ErrorKind::Url => "url",
            ErrorKind::Uri => "uri",
            ErrorKind::Bool => "bool",
            ErrorKind::Email => "email",
            ErrorKind::Array => "array",
        }
    }

    /// Look a kind up by its template key.
    pub fn from_key(key: &str) -> Option<Self> {
        ErrorKind::RECOGNIZED
            .iter()
            .chain(std::iter::once(&ErrorKind::Array))
            .find(|kind| kind.key() == key)
            .copied()
    }

    fn default_template(&self) -> Option<&'static str> {
        let template = match self {
            ErrorKind::Empty => "{{field}} must not be empty",
            ErrorKind::BadFormat => "{{field}} is invalid",
            ErrorKind::Length => {
                "{{field}} must be between {{lenMin}} and {{lenMax}} characters long"
            }
            ErrorKind::MinMax => "{{field}} must be between {{numMin}} and {{numMax}}",
            ErrorKind::Int => "{{field}} must be an integer",
            ErrorKind::Float => "{{field}} must be a float",
            ErrorKind::Alpha => "{{field}} must only contain letters (a-z)",
            ErrorKind::Alphanum => "{{field}} must only contain letters (a-z) and numbers (0-9)",
            ErrorKind::WhiteSpace => "{{field}} cannot contain spaces",
            ErrorKind::Url => "{{field}} must be an URL",
            ErrorKind::Uri => "{{field}} must be an URI",
            ErrorKind::Bool => "{{field}} must be a boolean (true-false)",
            ErrorKind::Email => "{{field}} must be a valid email",
            ErrorKind::Array => return None,
        };
        Some(template)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Values substituted into a template at finalize time.
#[derive(Debug, Clone, Copy)]
pub struct Substitution<'a> {
    pub field: &'a str,
    pub len_min: usize,
    pub len_max: usize,
    pub num_min: f64,
    pub num_max: f64,
}

/// Flat mapping from template key to message template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplates {
    templates: HashMap<String, String>,
}

impl MessageTemplates {
    /// The built-in English templates.
    pub fn defaults() -> Self {
        let templates = ErrorKind::RECOGNIZED
            .iter()
            .filter_map(|kind| {
                kind.default_template()
                    .map(|template| (kind.key().to_string(), template.to_string()))
            })
            .collect();
        Self { templates }
    }

    /// Build a replacement set. Every recognized key must be present; extra
    /// keys are kept as-is.
    pub fn from_overrides<I, K, V>(overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let templates: HashMap<String, String> = overrides
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();

        let missing: Vec<String> = ErrorKind::RECOGNIZED
            .iter()
            .map(ErrorKind::key)
            .filter(|key| !templates.contains_key(*key))
            .map(str::to_string)
            .collect();

        if !missing.is_empty() {
            return Err(ConfigurationError::MissingTemplates(missing));
        }

        Ok(Self { templates })
    }

    /// Template for a kind, if the set has one.
    pub fn get(&self, kind: ErrorKind) -> Option<&str> {
        self.templates.get(kind.key()).map(String::as_str)
    }

    /// Check if the set has a template for a kind.
    pub fn has(&self, kind: ErrorKind) -> bool {
        self.templates.contains_key(kind.key())
    }

    /// All template keys.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.templates.keys()
    }

    /// Replace every placeholder in `message`.
    pub fn render(message: &str, subst: &Substitution<'_>) -> String {
        message
            .replace(FIELD_PLACEHOLDER, &capitalize(subst.field))
            .replace(LEN_MIN_PLACEHOLDER, &subst.len_min.to_string())
            .replace(LEN_MAX_PLACEHOLDER, &subst.len_max.to_string())
            .replace(NUM_MIN_PLACEHOLDER, &subst.num_min.to_string())
            .replace(NUM_MAX_PLACEHOLDER, &subst.num_max.to_string())
    }
}

impl Default for MessageTemplates {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Uppercase the first character, leaving the rest untouched.
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

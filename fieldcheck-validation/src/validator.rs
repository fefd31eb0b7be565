// Chainable field validator

use crate::patterns::{
    self, ALPHA_REGEX, ALPHANUMERIC_REGEX, ARRAY_PATTERN, EMAIL_REGEX, URI_REGEX,
    WHITESPACE_REGEX,
};
use crate::value;
use crate::{
    ConfigurationError, ErrorKind, MessageTemplates, PatternSet, Result, Substitution,
    ValidatorConfig,
};
use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace, warn};

/// Field name to messages, in the order fields first failed.
pub type ErrorMap = IndexMap<String, Vec<String>>;

/// Inclusive lower and upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Bounds<T> {
    pub min: T,
    pub max: T,
}

/// Numeric types accepted as [`min_max`](Validator::min_max) bounds.
///
/// Bounds are compared as `f64`; 64-bit integers beyond 2^53 lose precision.
pub trait NumericBound: Copy {
    fn to_f64(self) -> f64;
}

macro_rules! impl_numeric_bound {
    ($($t:ty),*) => {
        $(
            impl NumericBound for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_numeric_bound!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<T: PartialOrd> Bounds<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Check if `value` lies within the bounds, both ends included.
    pub fn contains(&self, value: &T) -> bool {
        *value >= self.min && *value <= self.max
    }
}

/// Accumulates validation failures for a sequence of fields.
///
/// Set a field with [`set_name`](Validator::set_name) and
/// [`set_value`](Validator::set_value), chain checks, then read the result with
/// [`get_errors`](Validator::get_errors). Failed checks store their template
/// unrendered; placeholders are filled in by [`finalize`](Validator::finalize),
/// which every reporting method runs first.
///
/// The bounds used to render `{{lenMin}}`/`{{lenMax}}` and
/// `{{numMin}}`/`{{numMax}}` are the ones passed to the most recent
/// [`length`](Validator::length) or [`min_max`](Validator::min_max) call on
/// this validator, whichever field that was. Messages recorded for an earlier
/// field and not yet finalized are rendered with those later bounds.
///
/// A `Validator` is not meant to be shared between concurrent validation
/// sessions; use one instance per session.
#[derive(Debug, Clone)]
pub struct Validator {
    name: String,
    value: Value,
    last_length_bounds: Bounds<usize>,
    last_range_bounds: Bounds<f64>,
    patterns: PatternSet,
    templates: MessageTemplates,
    config: ValidatorConfig,
    errors: ErrorMap,
    /// (field index, message index) of messages still holding placeholders
    pending: Vec<(usize, usize)>,
}

impl Validator {
    /// Create a validator with the default templates and config.
    pub fn new() -> Self {
        Self::with_config(ValidatorConfig::default())
    }

    /// Create a validator with a custom config.
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self {
            name: String::new(),
            value: Value::Null,
            last_length_bounds: Bounds::default(),
            last_range_bounds: Bounds::default(),
            patterns: PatternSet::builtin(),
            templates: MessageTemplates::defaults(),
            config,
            errors: IndexMap::new(),
            pending: Vec::new(),
        }
    }

    /// Create a validator whose templates are replaced by `overrides`.
    ///
    /// Fails with [`ConfigurationError::MissingTemplates`] unless every
    /// recognized error kind has a template.
    pub fn with_templates<I, K, V>(overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::with_config_and_templates(ValidatorConfig::default(), overrides)
    }

    /// Create a validator with both a custom config and custom templates.
    pub fn with_config_and_templates<I, K, V>(config: ValidatorConfig, overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let templates = MessageTemplates::from_overrides(overrides)?;
        Ok(Self {
            templates,
            ..Self::with_config(config)
        })
    }

    // ------------------------------------------------------------------
    // Context
    // ------------------------------------------------------------------

    /// Set the name of the field under test.
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    /// Set the value under test.
    pub fn set_value(&mut self, value: impl Into<Value>) -> &mut Self {
        self.value = value.into();
        self
    }

    /// Register an extra named pattern for [`match_pattern`](Validator::match_pattern).
    pub fn add_pattern(
        &mut self,
        name: impl Into<String>,
        fragment: impl Into<String>,
    ) -> Result<&mut Self> {
        self.patterns.insert(name, fragment)?;
        Ok(self)
    }

    // ------------------------------------------------------------------
    // Checks
    // ------------------------------------------------------------------

    /// Fails on null, `""`, `0`, `[]` and `{}`. Booleans are never empty.
    pub fn not_empty(&mut self) -> &mut Self {
        let passed = !value::is_empty(&self.value);
        self.check(passed, ErrorKind::Empty)
    }

    /// Fails if the value contains any whitespace.
    pub fn no_white_space(&mut self) -> &mut Self {
        let passed =
            value::text_form(&self.value).is_none_or(|text| !WHITESPACE_REGEX.is_match(&text));
        self.check(passed, ErrorKind::WhiteSpace)
    }

    /// Fails unless the value is between `min` and `max` bytes long.
    pub fn length(&mut self, min: usize, max: usize) -> &mut Self {
        self.last_length_bounds = Bounds::new(min, max);

        let bounds = self.last_length_bounds;
        let passed = value::text_form(&self.value).is_some_and(|text| bounds.contains(&text.len()));
        self.check(passed, ErrorKind::Length)
    }

    /// Fails unless the value is a number between `min` and `max`.
    ///
    /// Any primitive integer or float type works as a bound.
    pub fn min_max(&mut self, min: impl NumericBound, max: impl NumericBound) -> &mut Self {
        self.last_range_bounds = Bounds::new(min.to_f64(), max.to_f64());

        let bounds = self.last_range_bounds;
        let passed = value::as_number(&self.value).is_some_and(|n| bounds.contains(&n));
        self.check(passed, ErrorKind::MinMax)
    }

    pub fn int(&mut self) -> &mut Self {
        let passed = value::is_int(&self.value);
        self.check(passed, ErrorKind::Int)
    }

    pub fn float(&mut self) -> &mut Self {
        let passed = value::is_float(&self.value);
        self.check(passed, ErrorKind::Float)
    }

    /// ASCII letters only.
    pub fn alpha(&mut self) -> &mut Self {
        let passed = self.text_matches(&ALPHA_REGEX);
        self.check(passed, ErrorKind::Alpha)
    }

    /// ASCII letters and digits only.
    pub fn alphanum(&mut self) -> &mut Self {
        let passed = self.text_matches(&ALPHANUMERIC_REGEX);
        self.check(passed, ErrorKind::Alphanum)
    }

    /// Same character class as [`alphanum`](Validator::alphanum); reports
    /// under the `url` template.
    // TODO: match real URLs once callers no longer depend on the alphanumeric rule.
    pub fn url(&mut self) -> &mut Self {
        let passed = self.text_matches(&ALPHANUMERIC_REGEX);
        self.check(passed, ErrorKind::Url)
    }

    /// Letters, digits, `-`, `/` and `_`.
    pub fn uri(&mut self) -> &mut Self {
        let passed = self.text_matches(&URI_REGEX);
        self.check(passed, ErrorKind::Uri)
    }

    /// Accepts booleans, 0/1 and `true/false/yes/no/on/off`.
    ///
    /// Failures are reported with the `uri` template, not `bool`.
    pub fn bool(&mut self) -> &mut Self {
        let passed = value::is_bool(&self.value);
        self.check(passed, ErrorKind::Uri)
    }

    pub fn email(&mut self) -> &mut Self {
        let passed = self.text_matches(&EMAIL_REGEX);
        self.check(passed, ErrorKind::Email)
    }

    /// Check the value against a named pattern.
    ///
    /// `"array"` requires an array or object and reports under the `array`
    /// template, which the default set does not define (the recorded message
    /// is then empty). Any other name must be registered; null and empty
    /// values pass, other mismatches report `badFormat`.
    pub fn match_pattern(&mut self, name: &str) -> Result<&mut Self> {
        if name == ARRAY_PATTERN {
            let passed = value::is_collection(&self.value);
            return Ok(self.check(passed, ErrorKind::Array));
        }

        let pattern = self
            .patterns
            .get(name)
            .ok_or_else(|| ConfigurationError::UnknownPattern(name.to_string()))?;

        let passed = value::is_blank(&self.value)
            || value::text_form(&self.value).is_some_and(|text| pattern.is_match(&text));
        Ok(self.check(passed, ErrorKind::BadFormat))
    }

    /// Check the value against a caller-supplied fragment, anchored as
    /// `^(fragment)$`.
    ///
    /// A mismatch never records a validation failure. With diagnostics enabled
    /// it is returned as [`ConfigurationError::InvalidCustomPattern`]; without,
    /// it is ignored. A fragment that does not compile counts as a mismatch.
    pub fn custom_pattern(&mut self, fragment: &str) -> Result<&mut Self> {
        if value::is_blank(&self.value) {
            return Ok(self);
        }

        let matched = match patterns::compile(fragment) {
            Ok(regex) => self.text_matches(&regex),
            Err(e) => {
                warn!(pattern = fragment, error = %e, "custom pattern does not compile");
                false
            }
        };

        if !matched {
            if self.config.diagnostics {
                return Err(ConfigurationError::InvalidCustomPattern(
                    fragment.to_string(),
                ));
            }
            debug!(
                field = %self.name,
                pattern = fragment,
                "custom pattern rejected value, diagnostics disabled"
            );
        }

        Ok(self)
    }

    // ------------------------------------------------------------------
    // Finalization and reporting
    // ------------------------------------------------------------------

    /// Render placeholders in every message recorded since the last call.
    pub fn finalize(&mut self) -> &mut Self {
        if self.pending.is_empty() {
            return self;
        }

        let len = self.last_length_bounds;
        let range = self.last_range_bounds;
        let count = self.pending.len();

        for (field_index, message_index) in self.pending.drain(..) {
            let Some((field, messages)) = self.errors.get_index_mut(field_index) else {
                continue;
            };
            let subst = Substitution {
                field,
                len_min: len.min,
                len_max: len.max,
                num_min: range.min,
                num_max: range.max,
            };
            if let Some(message) = messages.get_mut(message_index) {
                *message = MessageTemplates::render(message, &subst);
            }
        }

        trace!(count = count, "rendered validation messages");
        self
    }

    /// Alias for [`finalize`](Validator::finalize).
    pub fn validate(&mut self) -> &mut Self {
        self.finalize()
    }

    /// Check if every recorded message has been rendered.
    pub fn is_finalized(&self) -> bool {
        self.pending.is_empty()
    }

    /// Finalize and return all errors.
    pub fn get_errors(&mut self) -> &ErrorMap {
        self.finalize();
        &self.errors
    }

    /// Finalize and hand all errors to `callback`, returning its result.
    pub fn get_errors_with<F, R>(&mut self, callback: F) -> R
    where
        F: FnOnce(&ErrorMap) -> R,
    {
        callback(self.get_errors())
    }

    /// Check if any check has failed.
    pub fn has_failed(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Finalize and return the first message of the first failed field, or `""`.
    pub fn get_first_error(&mut self) -> &str {
        self.finalize();
        self.errors
            .first()
            .and_then(|(_, messages)| messages.first())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Finalize and convert the errors to JSON.
    pub fn errors_json(&mut self) -> Value {
        serde_json::json!({ "errors": self.get_errors() })
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Bounds of the most recent `length` call.
    pub fn last_length_bounds(&self) -> Bounds<usize> {
        self.last_length_bounds
    }

    /// Bounds of the most recent `min_max` call.
    pub fn last_range_bounds(&self) -> Bounds<f64> {
        self.last_range_bounds
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    pub fn templates(&self) -> &MessageTemplates {
        &self.templates
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn text_matches(&self, regex: &Regex) -> bool {
        value::text_form(&self.value).is_some_and(|text| regex.is_match(&text))
    }

    fn check(&mut self, passed: bool, kind: ErrorKind) -> &mut Self {
        if !passed {
            self.record(kind);
        }
        self
    }

    fn record(&mut self, kind: ErrorKind) {
        let message = match self.templates.get(kind) {
            Some(template) => template.to_string(),
            None => {
                warn!(field = %self.name, kind = %kind, "no message template for error kind");
                String::new()
            }
        };
        debug!(field = %self.name, kind = %kind, "validation check failed");

        let entry = self.errors.entry(self.name.clone());
        let field_index = entry.index();
        let messages = entry.or_default();
        messages.push(message);
        let message_index = messages.len() - 1;
        self.pending.push((field_index, message_index));
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn failures(v: &mut Validator, field: &str) -> usize {
        v.get_errors().get(field).map_or(0, Vec::len)
    }

    #[test]
    fn test_set_name_and_value() {
        let mut v = Validator::new();
        v.set_name("age").set_value(42);
        assert_eq!(v.name(), "age");
        assert_eq!(v.value(), &json!(42));
        assert!(!v.has_failed());
    }

    #[test]
    fn test_not_empty() {
        let mut v = Validator::new();
        v.set_name("a").set_value("x").not_empty();
        v.set_name("b").set_value("").not_empty();
        v.set_name("c").set_value(0).not_empty();
        v.set_name("d").set_value(Vec::<String>::new()).not_empty();
        v.set_name("e").set_value(Value::Null).not_empty();

        assert_eq!(failures(&mut v, "a"), 0);
        assert_eq!(failures(&mut v, "b"), 1);
        assert_eq!(failures(&mut v, "c"), 1);
        assert_eq!(failures(&mut v, "d"), 1);
        assert_eq!(failures(&mut v, "e"), 1);
        assert_eq!(v.get_errors()["b"][0], "B must not be empty");
    }

    #[test]
    fn test_no_white_space() {
        let mut v = Validator::new();
        v.set_name("user").set_value("john_doe").no_white_space();
        assert!(!v.has_failed());

        v.set_value("john doe").no_white_space();
        v.set_value("tab\there").no_white_space();
        assert_eq!(failures(&mut v, "user"), 2);
        assert_eq!(v.get_first_error(), "User cannot contain spaces");
    }

    #[test]
    fn test_length_is_inclusive() {
        let mut v = Validator::new();
        v.set_name("code").set_value("ab").length(2, 4);
        v.set_value("abcd").length(2, 4);
        assert!(!v.has_failed());

        v.set_value("a").length(2, 4);
        v.set_value("abcde").length(2, 4);
        assert_eq!(failures(&mut v, "code"), 2);
        assert_eq!(
            v.get_first_error(),
            "Code must be between 2 and 4 characters long"
        );
    }

    #[test]
    fn test_length_records_bounds_on_pass() {
        let mut v = Validator::new();
        v.set_name("code").set_value("abc").length(1, 9);
        assert!(!v.has_failed());
        assert_eq!(v.last_length_bounds(), Bounds::new(1, 9));
    }

    #[test]
    fn test_length_counts_numbers_and_rejects_collections() {
        let mut v = Validator::new();
        v.set_name("pin").set_value(1234).length(4, 4);
        assert!(!v.has_failed());

        v.set_name("tags").set_value(json!(["a", "b"])).length(0, 10);
        assert_eq!(failures(&mut v, "tags"), 1);
    }

    #[test]
    fn test_min_max_is_inclusive() {
        let mut v = Validator::new();
        v.set_name("age").set_value(18).min_max(18, 65);
        v.set_value(65).min_max(18, 65);
        v.set_value("40").min_max(18, 65);
        assert!(!v.has_failed());

        v.set_value(17).min_max(18, 65);
        v.set_value(65.5).min_max(18, 65);
        v.set_value("old").min_max(18, 65);
        assert_eq!(failures(&mut v, "age"), 3);
        assert_eq!(v.last_range_bounds(), Bounds::new(18.0, 65.0));
    }

    #[test]
    fn test_min_max_accepts_wide_integer_bounds() {
        let limit: u64 = 10;
        let floor: i64 = -5;
        let mut v = Validator::new();
        v.set_name("n").set_value(3).min_max(floor, limit);
        v.set_value(7).min_max(0usize, 8usize);
        v.set_value(0.5).min_max(0.0f32, 1.0f32);
        assert!(!v.has_failed());

        v.set_value(11).min_max(floor, limit);
        assert_eq!(v.get_first_error(), "N must be between -5 and 10");
    }

    #[test]
    fn test_not_empty_accepts_booleans() {
        let mut v = Validator::new();
        v.set_name("agree").set_value(false).not_empty();
        v.set_value(true).not_empty();
        assert!(!v.has_failed());
        assert_eq!(v.get_first_error(), "");
    }

    #[test]
    fn test_float_rejects_overflow() {
        let mut v = Validator::new();
        v.set_name("ratio").set_value("1e300").float();
        assert!(!v.has_failed());

        v.set_value("1e400").float();
        v.set_value("1e400").min_max(0, 1);
        assert_eq!(
            v.get_errors()["ratio"],
            ["Ratio must be a float", "Ratio must be between 0 and 1"]
        );
    }

    #[test]
    fn test_int_rejects_numbers_beyond_i64() {
        let mut v = Validator::new();
        v.set_name("s").set_value(u64::MAX).int();
        v.set_value("18446744073709551615").int();
        assert_eq!(
            v.get_errors()["s"],
            ["S must be an integer", "S must be an integer"]
        );
    }

    #[test]
    fn test_no_white_space_is_ascii_only() {
        let mut v = Validator::new();
        v.set_name("code").set_value("a\u{00A0}b").no_white_space();
        v.set_value("a\u{2003}b").no_white_space();
        assert!(!v.has_failed());

        v.set_value("a\r\nb").no_white_space();
        assert_eq!(v.get_first_error(), "Code cannot contain spaces");
    }

    #[test]
    fn test_int_and_float() {
        let mut v = Validator::new();
        v.set_name("n").set_value("42").int().float();
        v.set_value(7).int();
        v.set_value("2.5").float();
        assert!(!v.has_failed());

        v.set_value("2.5").int();
        v.set_value(true).int();
        v.set_value("").float();
        v.set_value("abc").float();
        assert_eq!(
            v.get_errors()["n"],
            [
                "N must be an integer",
                "N must be an integer",
                "N must be a float",
                "N must be a float",
            ]
        );
    }

    #[test]
    fn test_alpha_and_alphanum() {
        let mut v = Validator::new();
        v.set_name("s").set_value("abcXYZ").alpha().alphanum();
        v.set_value("abc123").alphanum();
        assert!(!v.has_failed());

        v.set_value("abc123").alpha();
        v.set_value("abc-123").alphanum();
        v.set_value("").alpha();
        assert_eq!(failures(&mut v, "s"), 3);
    }

    #[test]
    fn test_url_uses_alphanumeric_rule() {
        let mut v = Validator::new();
        v.set_name("site").set_value("example").url();
        assert!(!v.has_failed());

        v.set_value("https://example.com").url();
        assert_eq!(v.get_first_error(), "Site must be an URL");
    }

    #[test]
    fn test_uri() {
        let mut v = Validator::new();
        v.set_name("path").set_value("api/v1/user_list-all").uri();
        assert!(!v.has_failed());

        v.set_value("api/v1?x=1").uri();
        assert_eq!(v.get_first_error(), "Path must be an URI");
    }

    #[test]
    fn test_bool_reports_under_uri_template() {
        let mut v = Validator::new();
        for accepted in [json!(true), json!(false), json!("yes"), json!("0"), json!(1)] {
            v.set_name("flag").set_value(accepted).bool();
        }
        assert!(!v.has_failed());

        v.set_value("maybe").bool();
        assert_eq!(v.get_first_error(), "Flag must be an URI");
    }

    #[test]
    fn test_email() {
        let mut v = Validator::new();
        v.set_name("email").set_value("user@example.com").email();
        assert!(!v.has_failed());

        v.set_value("not-an-email").email();
        assert_eq!(v.get_errors()["email"], ["Email must be a valid email"]);
    }

    #[test]
    fn test_match_pattern_named() {
        let mut v = Validator::new();
        v.set_name("phone").set_value("+1 (555) 010-0199");
        v.match_pattern("tel").unwrap();
        v.set_value("").match_pattern("tel").unwrap();
        assert!(!v.has_failed());

        v.set_value("call me").match_pattern("tel").unwrap();
        assert_eq!(v.get_first_error(), "Phone is invalid");
    }

    #[test]
    fn test_match_pattern_unknown_name() {
        let mut v = Validator::new();
        let err = v.set_value("x").match_pattern("zipcode").unwrap_err();
        assert_eq!(err, ConfigurationError::UnknownPattern("zipcode".into()));
        assert!(!v.has_failed());
    }

    #[test]
    fn test_match_pattern_array_has_no_default_template() {
        let mut v = Validator::new();
        v.set_name("tags").set_value(json!(["a"]));
        v.match_pattern("array").unwrap();
        assert!(!v.has_failed());

        v.set_value("a,b").match_pattern("array").unwrap();
        assert!(v.has_failed());
        assert_eq!(v.get_errors()["tags"], [""]);
    }

    #[test]
    fn test_add_pattern() {
        let mut v = Validator::new();
        v.add_pattern("zip", r"[0-9]{5}").unwrap();
        v.set_name("zip").set_value("1234").match_pattern("zip").unwrap();
        assert_eq!(failures(&mut v, "zip"), 1);

        assert!(v.add_pattern("bad", "(").is_err());
    }

    #[test]
    fn test_custom_pattern_without_diagnostics() {
        let mut v = Validator::new();
        v.set_name("code").set_value("abc");
        assert!(v.custom_pattern("[0-9]+").is_ok());
        assert!(v.custom_pattern("(").is_ok());
        assert!(!v.has_failed());
    }

    #[test]
    fn test_custom_pattern_with_diagnostics() {
        let mut v = Validator::with_config(ValidatorConfig::new().with_diagnostics(true));
        v.set_name("code").set_value("123");
        assert!(v.custom_pattern("[0-9]+").is_ok());

        v.set_value("");
        assert!(v.custom_pattern("[0-9]+").is_ok());

        v.set_value("abc");
        let err = v.custom_pattern("[0-9]+").unwrap_err();
        assert_eq!(err, ConfigurationError::InvalidCustomPattern("[0-9]+".into()));
        assert!(!v.has_failed());
    }

    #[test]
    fn test_finalize_is_idempotent() {
        let mut v = Validator::new();
        v.set_name("age").set_value(5).min_max(18, 65);
        v.finalize();
        let once = v.get_errors().clone();
        v.finalize().finalize();
        assert_eq!(v.get_errors(), &once);
        assert!(v.is_finalized());
    }

    #[test]
    fn test_checks_after_finalize_are_rendered() {
        let mut v = Validator::new();
        v.set_name("first").set_value("").not_empty();
        v.finalize();

        v.set_name("second").set_value("").not_empty();
        assert!(!v.is_finalized());
        let errors = v.get_errors();
        assert_eq!(errors["first"], ["First must not be empty"]);
        assert_eq!(errors["second"], ["Second must not be empty"]);
    }

    #[test]
    fn test_get_errors_with_callback() {
        let mut v = Validator::new();
        v.set_name("a").set_value("").not_empty().alpha();
        v.set_name("b").set_value("1 2").no_white_space();

        let total = v.get_errors_with(|errors| errors.values().map(Vec::len).sum::<usize>());
        assert_eq!(total, 3);
    }

    #[test]
    fn test_errors_json() {
        let mut v = Validator::new();
        v.set_name("name").set_value("").not_empty();
        assert_eq!(
            v.errors_json(),
            json!({ "errors": { "name": ["Name must not be empty"] } })
        );
    }
}

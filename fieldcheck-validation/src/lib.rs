//! Chainable field validation for fieldcheck
//!
//! A [`Validator`] checks one named field at a time and accumulates failures
//! as templated messages, keyed by field name.
//!
//! # Examples
//!
//! ## Basic Validation
//!
//! ```
//! use fieldcheck_validation::Validator;
//!
//! let mut validator = Validator::new();
//!
//! validator.set_name("username").set_value("john doe").not_empty().no_white_space();
//! validator.set_name("age").set_value(15).min_max(18, 65);
//!
//! assert!(validator.has_failed());
//! assert_eq!(validator.get_first_error(), "Username cannot contain spaces");
//! assert_eq!(validator.get_errors()["age"], ["Age must be between 18 and 65"]);
//! ```
//!
//! ## Custom Templates
//!
//! Templates are replaced all at once; a set that misses a kind is rejected.
//!
//! ```
//! use fieldcheck_validation::{ConfigurationError, ErrorKind, Validator};
//!
//! let partial = [("empty", "{{field}} darf nicht leer sein")];
//! let err = Validator::with_templates(partial).unwrap_err();
//! assert!(matches!(err, ConfigurationError::MissingTemplates(_)));
//!
//! let full = ErrorKind::RECOGNIZED
//!     .iter()
//!     .map(|kind| (kind.key(), "{{field}} ist ungültig"));
//! let mut validator = Validator::with_templates(full).unwrap();
//! validator.set_name("email").set_value("nope").email();
//! assert_eq!(validator.get_first_error(), "Email ist ungültig");
//! ```
//!
//! ## Patterns
//!
//! ```
//! use fieldcheck_validation::{Validator, ValidatorConfig};
//!
//! let mut validator = Validator::new();
//! validator.set_name("city").set_value("São Paulo");
//! validator.match_pattern("words").unwrap();
//! assert!(!validator.has_failed());
//!
//! // Custom patterns only report mismatches when diagnostics are on.
//! let mut strict = Validator::with_config(ValidatorConfig::new().with_diagnostics(true));
//! strict.set_name("zip").set_value("ABC");
//! assert!(strict.custom_pattern("[0-9]{5}").is_err());
//! ```

mod config;
mod errors;
mod patterns;
mod templates;
mod validator;
pub mod value;

pub use config::*;
pub use errors::*;
pub use patterns::{ARRAY_PATTERN, BUILTIN_PATTERNS, NamedPattern, PatternSet};
pub use templates::*;
pub use validator::*;

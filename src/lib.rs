// fieldcheck - fluent field validation for request input
//
// This library re-exports the validation crate and a prelude of the types
// needed to validate fields and read back their errors.

// Re-export core functionality
pub use fieldcheck_validation::*;

// Re-export the value type fields are validated as
pub use serde_json::{Value, json};

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        ConfigurationError,
        ErrorKind,
        ErrorMap,
        MessageTemplates,
        Validator,
        ValidatorConfig,
        Value,
    };
}

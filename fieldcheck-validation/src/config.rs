// Validator configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable read by [`ValidatorConfig::from_env`].
pub const DISPLAY_ERRORS_ENV: &str = "FIELDCHECK_DISPLAY_ERRORS";

/// Settings that change how a [`Validator`](crate::Validator) reacts to misuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// When enabled, a custom pattern that rejects a value is reported as a
    /// [`ConfigurationError`](crate::ConfigurationError) instead of being ignored.
    pub diagnostics: bool,
}

impl ValidatorConfig {
    /// Create a config with diagnostics disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create config from environment variables.
    ///
    /// `FIELDCHECK_DISPLAY_ERRORS=1|true|on|yes` enables diagnostics.
    pub fn from_env() -> Self {
        let diagnostics = env::var(DISPLAY_ERRORS_ENV)
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Self { diagnostics }
    }

    /// Enable or disable diagnostics.
    pub fn with_diagnostics(mut self, enabled: bool) -> Self {
        self.diagnostics = enabled;
        self
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "on" | "yes"
    )
}

// ============================
// passguard-lib/src/config.rs
// ============================
//! Configuration management.
use crate::error::PassguardError;
use crate::generator::DEFAULT_GENERATED_LENGTH;
use crate::policy::{PasswordPolicy, MIN_PASSWORD_LENGTH};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Log level filter for the tracing subscriber
    pub log_level: String,
    /// Length of generated passwords when the caller does not specify one
    pub generated_length: usize,
    /// Password policy overrides
    pub policy: PolicySettings,
}

/// Password policy knobs exposed to configuration.
///
/// The symbol alphabet is deliberately not configurable; one canonical
/// alphabet is shared by the evaluator and the generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicySettings {
    pub min_length: usize,
    pub require_uppercase: bool,
    pub require_lowercase: bool,
    pub require_digit: bool,
    pub require_symbol: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            generated_length: DEFAULT_GENERATED_LENGTH,
            policy: PolicySettings::default(),
        }
    }
}

impl Default for PolicySettings {
    fn default() -> Self {
        Self {
            min_length: MIN_PASSWORD_LENGTH,
            require_uppercase: true,
            require_lowercase: true,
            require_digit: true,
            require_symbol: true,
        }
    }
}

impl From<PolicySettings> for PasswordPolicy {
    fn from(settings: PolicySettings) -> Self {
        Self {
            min_length: settings.min_length,
            require_uppercase: settings.require_uppercase,
            require_lowercase: settings.require_lowercase,
            require_digit: settings.require_digit,
            require_symbol: settings.require_symbol,
        }
    }
}

impl Settings {
    /// Load settings from `passguard.toml` and `PASSGUARD_`-prefixed
    /// environment variables, over built-in defaults. A missing file is
    /// not an error.
    pub fn load() -> Result<Self, PassguardError> {
        Self::load_from("passguard.toml")
    }

    /// Load settings with an explicit config file path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, PassguardError> {
        tracing::debug!(path = %path.as_ref().display(), "loading settings");
        let settings = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("PASSGUARD_").split("__"))
            .extract()?;
        Ok(settings)
    }

    /// The policy value derived from these settings
    pub fn policy(&self) -> PasswordPolicy {
        self.policy.clone().into()
    }
}

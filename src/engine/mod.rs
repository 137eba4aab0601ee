pub mod default;
pub mod diacritics;
pub mod filter;

use serde_json::Value;
use tracing::debug;

use crate::config::{ConfigurationError, EssenceConfig, EssenceOptions};
use crate::types::EssenceInput;

pub use default::{default_engine, essence, essential_hash, identical};

/// Reduces text to its essence: Unicode letters and numbers only, lower-cased,
/// optionally without diacritical marks.
///
/// An engine holds nothing but its immutable configuration, so a single
/// instance can be shared freely between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    config: EssenceConfig,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EssenceConfig::default())
    }
}

impl Engine {
    pub fn new(config: EssenceConfig) -> Self {
        debug!(
            remove_diacritical_marks = config.remove_diacritical_marks(),
            hash_algorithm = %config.hash_algorithm(),
            "essence_engine_created"
        );
        Self { config }
    }

    pub fn with_options(options: &EssenceOptions) -> Result<Self, ConfigurationError> {
        Ok(Self::new(EssenceConfig::from_options(options)?))
    }

    /// Build from loosely typed options; `null` means all defaults.
    pub fn from_value(options: &Value) -> Result<Self, ConfigurationError> {
        Ok(Self::new(EssenceConfig::from_value(options)?))
    }

    pub fn from_json(options: &str) -> Result<Self, ConfigurationError> {
        Ok(Self::new(EssenceConfig::from_json(options)?))
    }

    pub fn config(&self) -> &EssenceConfig {
        &self.config
    }

    /// The essence of `input`. Absent input yields `""`.
    pub fn essence(&self, input: impl EssenceInput) -> String {
        let Some(text) = input.as_text() else {
            return String::new();
        };

        let filtered = filter::letters_and_numbers(&text);
        if self.config.remove_diacritical_marks() {
            filter::fold_case(&diacritics::strip_diacritics(&filtered))
        } else {
            filter::fold_case(&filtered)
        }
    }

    /// Whether `a` and `b` share the same essence.
    pub fn identical(&self, a: impl EssenceInput, b: impl EssenceInput) -> bool {
        self.essence(a) == self.essence(b)
    }

    /// Lower-case hex digest of the essence under the configured algorithm.
    pub fn essential_hash(&self, input: impl EssenceInput) -> String {
        let essence = self.essence(input);
        self.config.hash_algorithm().hex_digest(essence.as_bytes())
    }
}

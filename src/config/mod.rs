pub mod error;
pub mod options;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::hash::HashAlgorithm;

pub use error::ConfigurationError;
pub use options::EssenceOptions;

// Key point:
// Immutable once built
// Explicit defaults
// Serializable, so it can be recorded next to the hashes it produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EssenceConfig {
    remove_diacritical_marks: bool,
    hash_algorithm: HashAlgorithm,
}

impl EssenceConfig {
    pub fn new(remove_diacritical_marks: bool, hash_algorithm: HashAlgorithm) -> Self {
        Self {
            remove_diacritical_marks,
            hash_algorithm,
        }
    }

    /// Validate options, filling anything missing with its default.
    pub fn from_options(options: &EssenceOptions) -> Result<Self, ConfigurationError> {
        let hash_algorithm = match options.hash_algorithm.as_deref() {
            Some(name) => HashAlgorithm::from_name(name).map_err(|e| {
                warn!(hash_algorithm = %e.0, "essence_options_rejected");
                ConfigurationError::UnsupportedHashAlgorithm(format!("{:?}", e.0))
            })?,
            None => HashAlgorithm::default(),
        };

        Ok(Self {
            remove_diacritical_marks: options.remove_diacritical_marks.unwrap_or(false),
            hash_algorithm,
        })
    }

    /// Build from a loosely typed options value. See [`EssenceOptions::from_value`].
    pub fn from_value(value: &Value) -> Result<Self, ConfigurationError> {
        Self::from_options(&EssenceOptions::from_value(value)?)
    }

    /// Parse JSON options text, then build as [`EssenceConfig::from_value`] does.
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    pub fn remove_diacritical_marks(&self) -> bool {
        self.remove_diacritical_marks
    }

    pub fn hash_algorithm(&self) -> HashAlgorithm {
        self.hash_algorithm
    }
}

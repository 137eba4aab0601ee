use thiserror::Error;

/// Raised while turning options into an [`EssenceConfig`](super::EssenceConfig).
///
/// Every variant is a construction-time error; a built engine never fails.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Invalid options - expected an object, got: {0}")]
    InvalidOptions(String),
    #[error("Hash algorithm not supported: {0}")]
    UnsupportedHashAlgorithm(String),
    #[error("Options are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

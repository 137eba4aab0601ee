//! Canonical "essence" of text, for comparing strings regardless of
//! punctuation, whitespace, case or accents.
//!
//! `text-essence` keeps only the Unicode letters and numbers of a string,
//! lower-cases them, and optionally strips diacritical marks. Two strings are
//! essentially equal when their essences match, and the essence can be hashed
//! with a configurable digest. All operations are pure: identical input and
//! configuration always produce identical output.
//!
//! ```
//! use text_essence::{essence, essential_hash, identical, Engine};
//! use serde_json::json;
//!
//! assert_eq!(essence("Hello, World!"), "helloworld");
//! assert!(identical("Bb, 1", "bb 1 &"));
//! assert_eq!(essential_hash("x").len(), 64);
//!
//! let engine = Engine::from_value(&json!({ "removeDiacriticalMarks": true })).unwrap();
//! assert_eq!(engine.essence("Éé"), "ee");
//! ```

pub mod config;
pub mod engine;
pub mod hash;
pub mod types;

pub use config::{ConfigurationError, EssenceConfig, EssenceOptions};
pub use engine::{default_engine, essence, essential_hash, identical, Engine};
pub use hash::{HashAlgorithm, UnknownAlgorithm};
pub use types::EssenceInput;

use once_cell::sync::Lazy;

use super::Engine;
use crate::types::EssenceInput;

static DEFAULT_ENGINE: Lazy<Engine> = Lazy::new(Engine::default);

/// The shared engine behind the free functions. Built on first use, never reconfigured.
pub fn default_engine() -> &'static Engine {
    &DEFAULT_ENGINE
}

/// [`Engine::essence`] with the default configuration.
pub fn essence(input: impl EssenceInput) -> String {
    DEFAULT_ENGINE.essence(input)
}

/// [`Engine::identical`] with the default configuration.
pub fn identical(a: impl EssenceInput, b: impl EssenceInput) -> bool {
    DEFAULT_ENGINE.identical(a, b)
}

/// [`Engine::essential_hash`] with the default configuration.
pub fn essential_hash(input: impl EssenceInput) -> String {
    DEFAULT_ENGINE.essential_hash(input)
}

pub mod algorithm;

pub use algorithm::{HashAlgorithm, UnknownAlgorithm};

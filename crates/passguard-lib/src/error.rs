// crates/passguard-lib/src/error.rs

//! Central error type.
use thiserror::Error;

/// Errors surfaced by the hashing and generation entry points.
///
/// Policy evaluation is total and never produces this type, and
/// verification fails closed instead of erroring.
#[derive(Error, Debug)]
pub enum PassguardError {
    #[error("secure random source unavailable: {0}")]
    Entropy(#[from] rand::Error),

    #[error("requested length {requested} is below the minimum of {minimum}")]
    LengthTooShort { requested: usize, minimum: usize },

    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),
}

//! Tendigit-specific errors
//!
//! Nothing in the pipeline is expected to fail on internally generated input,
//! the variants below cover the few conversions that are fallible in theory.
use thiserror::Error;

/// An error that the pipeline could end up producing.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TenDigitError {
    /// `digest` is the hexadecimal prefix that could not be read back.
    #[error("could not parse `{digest}` as a base 16 integer: {source}")]
    InvalidHexDigest {
        digest: String,
        source: std::num::ParseIntError,
    },
    /// `{0}` explains why the seed was rejected.
    #[error("invalid seed: {0}")]
    InvalidSeed(String),
    /// `{0}` is a custom error message.
    #[error("Another error: {0}")]
    Other(String),
}

//! choose where the randomness of the pipeline comes from
use rand::{
    rngs::{OsRng, SmallRng, StdRng},
    RngCore, SeedableRng,
};

use crate::error::TenDigitError;

/// the random source the string and salt generators draw from
///
/// the choice is security-relevant and is therefore always made explicitly by
/// the caller, [`RandomSource::Secure`] being the default.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RandomSource {
    /// the CSPRNG of the operating system
    #[default]
    Secure,
    /// a fast, non-cryptographic generator seeded from entropy
    Insecure,
    /// a deterministic generator, to replay a run
    Seeded([u8; 32]),
}

impl RandomSource {
    pub fn rng(&self) -> Box<dyn RngCore> {
        match self {
            RandomSource::Secure => Box::new(OsRng),
            RandomSource::Insecure => Box::new(SmallRng::from_entropy()),
            RandomSource::Seeded(seed) => Box::new(StdRng::from_seed(*seed)),
        }
    }

    pub fn is_cryptographically_secure(&self) -> bool {
        matches!(self, RandomSource::Secure)
    }
}

impl std::fmt::Display for RandomSource {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RandomSource::Secure => write!(f, "secure"),
            RandomSource::Insecure => write!(f, "insecure"),
            RandomSource::Seeded(seed) => write!(f, "seeded({})", hex::encode(seed)),
        }
    }
}

/// parse a seed given as exactly 64 hexadecimal characters
pub fn parse_hex_seed(s: &str) -> Result<[u8; 32], TenDigitError> {
    if s.len() != 64 {
        return Err(TenDigitError::InvalidSeed(format!(
            "expected 64 hexadecimal characters, found {}",
            s.len()
        )));
    }

    let bytes = hex::decode(s).map_err(|e| TenDigitError::InvalidSeed(e.to_string()))?;
    bytes
        .try_into()
        .map_err(|_| TenDigitError::InvalidSeed("seed should be 32 bytes".to_string()))
}

//! Tendigit: pseudo-unique ten-digit numbers from salted SHA-512 digests
//!
//! A number is obtained by chaining the following steps:
//! 1. draw a random alphanumeric string, see [`alphabet`]
//! 2. hash it with SHA-512 and wrap the digest with two salts, see [`hash`]
//! 3. hash the salted digest once more
//! 4. sum the values of the characters of that last digest and reduce the sum
//!    to ten digits, see [`reduce`]
//!
//! The randomness of steps 1 and 2 is drawn from a [`source::RandomSource`]
//! chosen by the caller.
use num_bigint::BigUint;
use rand::RngCore;
use tracing::{debug, info};

pub mod alphabet;
pub mod error;
pub mod hash;
pub mod reduce;
pub mod source;

use crate::error::TenDigitError;

/// a number in `[0, 9_999_999_999]`
///
/// it is always displayed with exactly ten digits, padded with leading zeros.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TenDigitNumber(u64);

impl TenDigitNumber {
    pub const MODULUS: u64 = 10_000_000_000;

    /// keep the last ten decimal digits of `value`
    pub fn from_u64_mod(value: u64) -> Self {
        Self(value % Self::MODULUS)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for TenDigitNumber {
    type Error = TenDigitError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if value >= Self::MODULUS {
            return Err(TenDigitError::Other(format!(
                "{} has more than ten digits",
                value
            )));
        }
        Ok(Self(value))
    }
}

impl std::fmt::Display for TenDigitNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:010}", self.0)
    }
}

/// the sizes of the random values drawn by the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub string_length: usize,
    pub salt_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            string_length: alphabet::DEFAULT_STRING_LENGTH,
            salt_length: alphabet::DEFAULT_SALT_LENGTH,
        }
    }
}

/// every intermediate value of a single run of [`generate`]
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub random_string: String,
    pub salted_hash: String,
    pub double_hash: String,
    pub character_sum: BigUint,
    pub number: TenDigitNumber,
}

/// run the whole pipeline once
pub fn generate(config: &Config, rng: &mut impl RngCore) -> Result<Trace, TenDigitError> {
    debug!("drawing a random string of length {}", config.string_length);
    let random_string = alphabet::generate_random_string(config.string_length, rng);
    info!("random string: {}", random_string);

    debug!("salting with salts of length {}", config.salt_length);
    let salted_hash = hash::hash_with_salt(&random_string, config.salt_length, rng);
    info!("salted hash: {}", salted_hash);

    let double_hash = hash::double_hash_base64(&salted_hash);
    info!("double hashed: {}", double_hash);

    let character_sum = reduce::calculate_character_sum(&double_hash);
    debug!("character sum: {}", character_sum);

    let number = reduce::reduce_to_ten_digits(&character_sum)?;

    Ok(Trace {
        random_string,
        salted_hash,
        double_hash,
        character_sum,
        number,
    })
}

/// run the whole pipeline once with the default [`Config`] and only keep the
/// final number
///
/// > **Note**
/// > this is a wrapper around [`generate`].
pub fn generate_ten_digit_number(rng: &mut impl RngCore) -> Result<TenDigitNumber, TenDigitError> {
    Ok(generate(&Config::default(), rng)?.number)
}

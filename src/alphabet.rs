//! draw random strings over the 62 alphanumeric symbols
use rand::{Rng, RngCore};

/// uppercase letters, then lowercase letters, then decimal digits
pub const ALPHABET: &[u8; 62] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

pub const DEFAULT_STRING_LENGTH: usize = 25;
pub const DEFAULT_SALT_LENGTH: usize = 6;

/// draw `length` symbols of [`ALPHABET`] independently and uniformly
///
/// a length of `0` gives the empty string.
pub fn generate_random_string(length: usize, rng: &mut impl RngCore) -> String {
    (0..length)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// draw a salt, i.e. a short random string
///
/// > **Note**
/// > this is a wrapper around [`generate_random_string`], kept separate so
/// > that salts and inputs can be sized independently.
pub fn generate_salt(length: usize, rng: &mut impl RngCore) -> String {
    generate_random_string(length, rng)
}

//! hexadecimal digests, salted or not
use rand::RngCore;
use rs_merkle::{algorithms::Sha256, Hasher};
use sha2::{Digest, Sha512};

use crate::alphabet::generate_salt;

/// the lowercase hexadecimal SHA-512 of the UTF-8 bytes of `input`, 128 characters long
pub fn sha512_hex(input: &str) -> String {
    hex::encode(Sha512::digest(input.as_bytes()))
}

/// the lowercase hexadecimal SHA-256 of the UTF-8 bytes of `input`, 64 characters long
pub fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::hash(input.as_bytes()))
}

/// hash `input` and wrap the digest with a front and a back salt
///
/// both salts are independent draws of length `salt_length`, so the output
/// is `2 * salt_length + 128` characters long.
pub fn hash_with_salt(input: &str, salt_length: usize, rng: &mut impl RngCore) -> String {
    let digest = sha512_hex(input);
    let front_salt = generate_salt(salt_length, rng);
    let back_salt = generate_salt(salt_length, rng);

    let mut salted = String::with_capacity(digest.len() + 2 * salt_length);
    salted.push_str(&front_salt);
    salted.push_str(&digest);
    salted.push_str(&back_salt);
    salted
}

/// hash an already salted hash once more
///
/// despite the name, the output is hexadecimal: this is exactly
/// [`sha512_hex`].
pub fn double_hash_base64(input: &str) -> String {
    sha512_hex(input)
}

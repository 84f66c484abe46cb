//! turn a string into a ten-digit number
//!
//! this is done in two steps:
//! 1. every character is mapped to a positive integer and the values are summed
//!    with [`calculate_character_sum`]
//! 2. the decimal representation of the sum is hashed and truncated by
//!    [`reduce_to_ten_digits`]
use std::collections::HashMap;

use num_bigint::BigUint;
use tracing::debug;

use crate::{error::TenDigitError, hash::sha256_hex, TenDigitNumber};

const LOWERCASE_START: u32 = 1;
const UPPERCASE_START: u32 = 28;
const DIGITS_START: u32 = 55;
/// added to the code point of characters outside of the alphanumeric alphabet
const SPECIAL_CHARACTER_OFFSET: u32 = 66;
/// number of hexadecimal characters of the SHA-256 digest to keep
const HEX_PREFIX_LENGTH: usize = 10;

/// build the fixed character map
///
/// - `a..=z` map to `1..=26`
/// - `A..=Z` map to `28..=53`
/// - `0..=9` map to `55..=64`
///
/// 27 and 54 are never used.
pub fn char_to_number_mapping() -> HashMap<char, u32> {
    let mut mapping = HashMap::with_capacity(62);
    for (i, c) in ('a'..='z').enumerate() {
        mapping.insert(c, LOWERCASE_START + i as u32);
    }
    for (i, c) in ('A'..='Z').enumerate() {
        mapping.insert(c, UPPERCASE_START + i as u32);
    }
    for (i, c) in ('0'..='9').enumerate() {
        mapping.insert(c, DIGITS_START + i as u32);
    }

    mapping
}

/// the value of a single character, falling back to its code point plus 66
/// when it is not in the map
pub fn character_value(c: char, mapping: &HashMap<char, u32>) -> u32 {
    match mapping.get(&c) {
        Some(&value) => value,
        None => c as u32 + SPECIAL_CHARACTER_OFFSET,
    }
}

/// sum the values of all the characters of `input`
pub fn calculate_character_sum(input: &str) -> BigUint {
    let mapping = char_to_number_mapping();

    let mut sum = BigUint::default();
    for c in input.chars() {
        sum += character_value(c, &mapping);
    }

    sum
}

/// hash the decimal representation of `sum` with SHA-256, read the first 10
/// hexadecimal characters as an integer and keep its last ten decimal digits
pub fn reduce_to_ten_digits(sum: &BigUint) -> Result<TenDigitNumber, TenDigitError> {
    let digest = sha256_hex(&sum.to_string());
    let prefix = &digest[..HEX_PREFIX_LENGTH];
    debug!("reducing sum {} with digest prefix {}", sum, prefix);

    let value = u64::from_str_radix(prefix, 16).map_err(|source| {
        TenDigitError::InvalidHexDigest {
            digest: prefix.to_string(),
            source,
        }
    })?;

    Ok(TenDigitNumber::from_u64_mod(value))
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;

    use super::{calculate_character_sum, char_to_number_mapping, reduce_to_ten_digits};
    use crate::{hash::double_hash_base64, TenDigitNumber};

    #[test]
    fn mapping() {
        let mapping = char_to_number_mapping();

        assert_eq!(mapping.len(), 62);
        assert_eq!(mapping[&'a'], 1);
        assert_eq!(mapping[&'z'], 26);
        assert_eq!(mapping[&'A'], 28);
        assert_eq!(mapping[&'Z'], 53);
        assert_eq!(mapping[&'0'], 55);
        assert_eq!(mapping[&'9'], 64);

        assert!(
            !mapping.values().any(|&v| v == 27 || v == 54),
            "27 and 54 should be skipped"
        );
        assert_eq!(mapping, char_to_number_mapping());
    }

    fn sum_template(input: &str, expected: u32) {
        assert_eq!(
            calculate_character_sum(input),
            BigUint::from(expected),
            "TEST | input: {:?}",
            input
        );
    }

    #[test]
    fn character_sum() {
        sum_template("", 0);
        sum_template("a", 1);
        sum_template("aZ9", 1 + 53 + 64);
        // '-' is 45, 'é' is 233
        sum_template("-", 45 + 66);
        sum_template("é", 233 + 66);
        sum_template("a-Z9", 1 + 111 + 53 + 64);
    }

    #[test]
    fn character_sum_is_unbounded() {
        let input = "9".repeat(100_000);
        assert_eq!(calculate_character_sum(&input), BigUint::from(6_400_000u32));
    }

    #[test]
    fn reduce_range() {
        let long = "z".repeat(10_000);
        for input in ["", "a", "test", "éàü ✓", long.as_str()] {
            let n = reduce_to_ten_digits(&calculate_character_sum(input)).unwrap();
            assert!(n.value() < TenDigitNumber::MODULUS, "TEST | input: {:?}", input);
            assert_eq!(n.to_string().len(), 10, "TEST | input: {:?}", input);
        }
    }

    #[test]
    fn reduce_empty_sum() {
        // sha256("0") starts with 5feceb66ff
        let n = reduce_to_ten_digits(&BigUint::default()).unwrap();
        assert_eq!(n.value(), 0x5feceb66ff % TenDigitNumber::MODULUS);
    }

    #[test]
    fn golden_value() {
        let digest = double_hash_base64("test");
        let sum = calculate_character_sum(&digest);
        assert_eq!(sum, BigUint::from(4853u32));

        // sha256("4853") starts with fb420d1701, i.e. 1079144945409
        let n = reduce_to_ten_digits(&sum).unwrap();
        assert_eq!(n.value(), 9_144_945_409);
        assert_eq!(n.to_string(), "9144945409");

        for _ in 0..4 {
            assert_eq!(
                reduce_to_ten_digits(&calculate_character_sum(&double_hash_base64("test")))
                    .unwrap(),
                n
            );
        }
    }
}

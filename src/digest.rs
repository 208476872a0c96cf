// src/digest.rs

//! Digest computation over the canonical identifier string.
//!
//! The identifier is treated as an opaque string: `"1"` and `"01"` are
//! distinct inputs and hash to distinct digests. Any canonicalization is
//! the caller's responsibility.

use md5::{Digest, Md5};

/// Length of the rendered digest in hexadecimal characters (128 bits).
pub const DIGEST_LEN: usize = 32;

/// Computes the MD5 digest of the identifier's UTF-8 bytes, rendered as a
/// 32-character lowercase hexadecimal string.
///
/// Total over all string inputs, including the empty string. No side
/// effects.
pub fn digest(identifier: &str) -> String {
    hex::encode(Md5::digest(identifier.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_identifier_digest() {
        // The well-known MD5 of the empty input.
        assert_eq!(digest(""), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn digest_is_lowercase_hex_of_fixed_length() {
        let d = digest("583231");
        assert_eq!(d.len(), DIGEST_LEN);
        assert!(d.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn no_numeric_normalization() {
        // Leading zeros matter: the identifier is a string, not a number.
        assert_ne!(digest("1"), digest("01"));
        assert_eq!(digest("1"), "c4ca4238a0b923820dcc509a6f75849b");
    }

    #[test]
    fn digest_is_deterministic() {
        assert_eq!(digest("170270"), digest("170270"));
    }
}

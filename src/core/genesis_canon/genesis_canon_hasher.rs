// src/core/genesis_canon/genesis_canon_hasher.rs

use sha2::{Digest, Sha256};

/// Inhalts-Hash über beliebige Bytes, als Hex-String in Kleinbuchstaben.
pub trait ContentHasher: Sync {
    fn digest_hex(&self, bytes: &[u8]) -> String;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256Hasher;

impl ContentHasher for Sha256Hasher {
    #[inline]
    fn digest_hex(&self, bytes: &[u8]) -> String {
        sha256_hex(bytes)
    }
}

#[inline]
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vectors() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            Sha256Hasher.digest_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_digest_is_lowercase_hex() {
        let digest = sha256_hex(b"genesis");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}

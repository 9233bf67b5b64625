//! # Password digesting
//!
//! Provides the two functions used by the email + password authentication path:
//!
//! - [`digest_password`] — hashes the plaintext password with SHA-256 and returns
//!   the digest as a lowercase hex string. This string is stored in the
//!   `password_digest` column of the `users` table at registration.
//!
//! - [`verify_password`] — digests the submitted plaintext and compares it to the
//!   stored digest. Login succeeds exactly when the two digests are equal.
//!
//! The digest is deterministic: the same input always produces the same output,
//! so the stored value can be matched directly in a lookup query.

use sha2::{Digest, Sha256};

/// Digest a password with SHA-256. Returns a lowercase hex string.
pub fn digest_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Check a plaintext password against a stored digest.
pub fn verify_password(password: &str, digest: &str) -> bool {
    digest_password(password) == digest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_deterministic() {
        assert_eq!(digest_password("abc"), digest_password("abc"));
        assert_ne!(digest_password("abc"), digest_password("abd"));
    }

    #[test]
    fn test_known_digest() {
        // SHA-256("abc"), hex-encoded.
        assert_eq!(
            digest_password("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_verify_round_trip() {
        let digest = digest_password("P@ssw0rd!");
        assert!(verify_password("P@ssw0rd!", &digest));
        assert!(!verify_password("p@ssw0rd!", &digest));
        assert!(!verify_password("", &digest));
    }
}

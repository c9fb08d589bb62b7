//! Password hashing

use crate::error::Result;

/// bcrypt work factor
const HASH_COST: u32 = 10;

/// One-way salted hash of a plaintext password
pub fn hash_password(plaintext: &str) -> Result<String> {
    Ok(bcrypt::hash(plaintext, HASH_COST)?)
}

/// Constant-time comparison of a plaintext against a stored hash.
/// A malformed stored hash verifies false rather than erroring; the caller
/// returns the generic credentials rejection either way.
pub fn verify_password(plaintext: &str, hash: &str) -> bool {
    bcrypt::verify(plaintext, hash).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("secret1").expect("Failed to hash");
        assert!(verify_password("secret1", &hash));
    }

    #[test]
    fn test_wrong_password_fails() {
        let hash = hash_password("secret1").expect("Failed to hash");
        assert!(!verify_password("secret2", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("secret1").expect("Failed to hash");
        let b = hash_password("secret1").expect("Failed to hash");
        assert_ne!(a, b);
        assert!(verify_password("secret1", &a));
        assert!(verify_password("secret1", &b));
    }

    #[test]
    fn test_malformed_hash_verifies_false() {
        assert!(!verify_password("secret1", "not-a-bcrypt-hash"));
    }
}

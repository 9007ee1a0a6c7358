// ============================
// passguard-lib/src/credential.rs
// ============================
//! Salted credential hashing and verification.
//!
//! Stored credentials serialize as `<salt_hex>:<digest_hex>` where
//! `digest = SHA-256(salt_hex || plaintext)`. Callers persist and
//! retrieve the serialized form verbatim as an opaque string.

use crate::error::PassguardError;
use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha256};
use std::fmt;
use zeroize::Zeroize;

/// Salt length in bytes (32 hex characters once encoded)
pub const SALT_LEN: usize = 16;

/// Delimiter between the salt and digest halves of a stored credential
const DELIMITER: char = ':';

/// A serialized salt-plus-digest pair.
///
/// Created only by [`hash_password`]; never mutated. Verification accepts
/// any string so that malformed stored values fail closed rather than
/// needing a parse step at the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCredential(String);

impl StoredCredential {
    /// The serialized `salt:digest` form
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the credential, yielding the serialized form
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for StoredCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn digest_hex(salt_hex: &str, plain: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt_hex.as_bytes());
    hasher.update(plain.as_bytes());
    hex::encode(hasher.finalize())
}

/// Compare two byte strings without short-circuiting on the first
/// mismatch. Length is not secret here; both sides are hex digests.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Hash a password with a fresh random salt.
///
/// A new 16-byte salt is drawn from the OS secure random source on every
/// call, so hashing the same plaintext twice yields distinct stored
/// credentials. Fails only if that source is unavailable; there is no
/// fallback to a weaker generator.
pub fn hash_password(plain: &str) -> Result<StoredCredential, PassguardError> {
    let mut salt = [0u8; SALT_LEN];
    OsRng.try_fill_bytes(&mut salt)?;
    let salt_hex = hex::encode(salt);
    let digest = digest_hex(&salt_hex, plain);
    Ok(StoredCredential(format!("{salt_hex}{DELIMITER}{digest}")))
}

/// Verify a password against a previously stored credential.
///
/// Malformed input (empty string, missing delimiter, empty halves) is
/// treated as "does not match" rather than an error, so a corrupt or
/// absent stored value can never authenticate and never aborts the
/// caller.
pub fn verify_password(plain: &str, stored: &str) -> bool {
    let Some((salt_hex, expected)) = stored.split_once(DELIMITER) else {
        return false;
    };
    if salt_hex.is_empty() || expected.is_empty() {
        return false;
    }
    let computed = digest_hex(salt_hex, plain);
    constant_time_eq(computed.as_bytes(), expected.as_bytes())
}

/// Hash a password and zeroize the plaintext buffer
pub fn hash_password_secure(plain: &mut String) -> Result<StoredCredential, PassguardError> {
    let credential = hash_password(plain)?;
    plain.zeroize();
    Ok(credential)
}

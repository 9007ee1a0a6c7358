// ============================
// passguard-lib/src/generator.rs
// ============================
//! Random password generation.
//!
//! Draws from the same canonical character classes the policy evaluator
//! checks, so generated passwords always evaluate as valid under the
//! policy they were generated for.

use crate::error::PassguardError;
use crate::policy::{PasswordPolicy, DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};
use rand::{rngs::OsRng, seq::SliceRandom, Rng};

/// Default generated password length
pub const DEFAULT_GENERATED_LENGTH: usize = 12;

/// Character classes the policy makes mandatory, in rule order
fn mandatory_classes(policy: &PasswordPolicy) -> Vec<&'static str> {
    let mut classes = Vec::new();
    if policy.require_uppercase {
        classes.push(UPPERCASE);
    }
    if policy.require_lowercase {
        classes.push(LOWERCASE);
    }
    if policy.require_digit {
        classes.push(DIGITS);
    }
    if policy.require_symbol {
        classes.push(SYMBOLS);
    }
    classes
}

// All class alphabets are ASCII, so byte indexing is safe.
fn pick<R: Rng>(rng: &mut R, alphabet: &str) -> char {
    let bytes = alphabet.as_bytes();
    bytes[rng.gen_range(0..bytes.len())] as char
}

/// Generate a random password satisfying every rule of `policy`.
///
/// `length` must accommodate both the policy's minimum length and one
/// character from each mandatory class; shorter requests are rejected
/// with [`PassguardError::LengthTooShort`] rather than silently clamped.
///
/// One character is drawn from each mandatory class first, the remainder
/// from the union of all classes, and the whole sequence is shuffled with
/// the OS secure random source so the mandatory characters are not
/// predictably positioned.
pub fn generate_password(
    policy: &PasswordPolicy,
    length: usize,
) -> Result<String, PassguardError> {
    let classes = mandatory_classes(policy);
    let minimum = policy.min_length.max(classes.len());
    if length < minimum {
        return Err(PassguardError::LengthTooShort {
            requested: length,
            minimum,
        });
    }

    let mut rng = OsRng;
    let mut chars: Vec<char> = classes.iter().map(|c| pick(&mut rng, c)).collect();

    let pool = [UPPERCASE, LOWERCASE, DIGITS, SYMBOLS].concat();
    while chars.len() < length {
        chars.push(pick(&mut rng, &pool));
    }

    chars.shuffle(&mut rng);
    Ok(chars.into_iter().collect())
}

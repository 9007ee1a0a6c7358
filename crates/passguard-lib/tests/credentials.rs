// crates/passguard-lib/tests/credentials.rs
use passguard_lib::{hash_password, verify_password};

#[test]
fn test_password_hashing_and_verification() {
    let plain_password = "test123";

    // Hash the password
    let stored = hash_password(plain_password).unwrap();

    // Verify the password
    assert!(verify_password(plain_password, stored.as_str()));

    // Verify an incorrect password
    assert!(!verify_password("wrong_password", stored.as_str()));
}

#[test]
fn test_repeated_hashing_yields_distinct_credentials() {
    let first = hash_password("test123").unwrap();
    let second = hash_password("test123").unwrap();

    // distinct salts, distinct serialized forms
    assert_ne!(first.as_str(), second.as_str());

    // both still verify against the original plaintext
    assert!(verify_password("test123", first.as_str()));
    assert!(verify_password("test123", second.as_str()));
}

#[test]
fn test_stored_form_round_trips_through_a_plain_string() {
    // A storage collaborator persists and returns the serialized form
    // verbatim; verification only ever sees a plain string.
    let stored = hash_password("Round!Tr1p").unwrap().into_string();
    assert!(verify_password("Round!Tr1p", &stored));
}

#[test]
fn test_malformed_stored_credentials_never_match() {
    assert!(!verify_password("pw", ""));
    assert!(!verify_password("pw", "no-colon-here"));
    assert!(!verify_password("pw", "only:one:of:these:has:two:colons"));
    assert!(!verify_password("pw", ":"));
}

#[test]
fn test_empty_plaintext_still_hashes_and_verifies() {
    let stored = hash_password("").unwrap();
    assert!(verify_password("", stored.as_str()));
    assert!(!verify_password("not-empty", stored.as_str()));
}

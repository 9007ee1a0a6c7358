// ============================
// passguard-lib/src/lib.rs
// ============================
//! Core `passguard` functionality: password policy evaluation, salted
//! credential hashing/verification, and policy-conforming password
//! generation.
//!
//! All operations are synchronous and stateless; the only shared
//! dependency is the OS secure random source. Persistence of stored
//! credentials is left to the caller, which treats the serialized
//! `salt:digest` string as opaque.

pub mod config;
pub mod credential;
pub mod error;
pub mod generator;
pub mod policy;

pub use config::{PolicySettings, Settings};
pub use credential::{hash_password, hash_password_secure, verify_password, StoredCredential};
pub use error::PassguardError;
pub use generator::{generate_password, DEFAULT_GENERATED_LENGTH};
pub use policy::{PasswordPolicy, Rule, RuleCheck, Strength, ValidationReport};

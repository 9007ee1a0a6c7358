// ============================
// passguard-lib/src/policy.rs
// ============================
//! Canonical password policy and strength evaluation.
//!
//! Exactly one policy definition exists; the generator draws from the
//! same character classes the evaluator checks against.

use serde::Serialize;
use std::fmt;

/// Minimum password length required by the default policy
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Canonical symbol alphabet shared by the evaluator and the generator
pub const SYMBOLS: &str = "!@#$%^&*()-_=+.,?";

pub(crate) const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub(crate) const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub(crate) const DIGITS: &str = "0123456789";

/// Scores at or above this are labelled strong
pub const STRONG_MIN_SCORE: u8 = 80;
/// Scores at or above this (and below strong) are labelled medium
pub const MEDIUM_MIN_SCORE: u8 = 60;

/// Password complexity requirements
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub require_uppercase: bool,
    pub require_lowercase: bool,
    pub require_digit: bool,
    pub require_symbol: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: MIN_PASSWORD_LENGTH,
            require_uppercase: true,
            require_lowercase: true,
            require_digit: true,
            require_symbol: true,
        }
    }
}

/// A single policy rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rule {
    Length,
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl Rule {
    /// Stable lowercase name used in reports
    pub fn name(self) -> &'static str {
        match self {
            Rule::Length => "length",
            Rule::Uppercase => "uppercase",
            Rule::Lowercase => "lowercase",
            Rule::Digit => "digit",
            Rule::Symbol => "symbol",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Coarse strength bucket derived from the score, for display only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    /// Map a 0-100 score onto a strength label
    pub fn from_score(score: u8) -> Self {
        if score >= STRONG_MIN_SCORE {
            Strength::Strong
        } else if score >= MEDIUM_MIN_SCORE {
            Strength::Medium
        } else {
            Strength::Weak
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strength::Weak => "weak",
            Strength::Medium => "medium",
            Strength::Strong => "strong",
        })
    }
}

/// Outcome of evaluating one rule against a candidate
#[derive(Debug, Clone, Serialize)]
pub struct RuleCheck {
    pub rule: Rule,
    pub satisfied: bool,
}

/// Structured feedback for a candidate password.
///
/// Created fresh per [`PasswordPolicy::evaluate`] call; immutable once
/// returned.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub score: u8,
    pub strength: Strength,
    pub checks: Vec<RuleCheck>,
    pub requirements: Vec<String>,
    pub missing: Vec<String>,
}

impl PasswordPolicy {
    /// Rules enabled by this policy, in report order
    pub fn rules(&self) -> Vec<Rule> {
        let mut rules = vec![Rule::Length];
        if self.require_uppercase {
            rules.push(Rule::Uppercase);
        }
        if self.require_lowercase {
            rules.push(Rule::Lowercase);
        }
        if self.require_digit {
            rules.push(Rule::Digit);
        }
        if self.require_symbol {
            rules.push(Rule::Symbol);
        }
        rules
    }

    /// Human-readable description of a rule under this policy
    pub fn description(&self, rule: Rule) -> String {
        match rule {
            Rule::Length => format!("At least {} characters", self.min_length),
            Rule::Uppercase => "At least one uppercase letter (A-Z)".to_string(),
            Rule::Lowercase => "At least one lowercase letter (a-z)".to_string(),
            Rule::Digit => "At least one number (0-9)".to_string(),
            Rule::Symbol => format!("At least one symbol ({SYMBOLS})"),
        }
    }

    fn satisfies(&self, rule: Rule, candidate: &str) -> bool {
        match rule {
            Rule::Length => candidate.chars().count() >= self.min_length,
            Rule::Uppercase => candidate.chars().any(|c| c.is_ascii_uppercase()),
            Rule::Lowercase => candidate.chars().any(|c| c.is_ascii_lowercase()),
            Rule::Digit => candidate.chars().any(|c| c.is_ascii_digit()),
            Rule::Symbol => candidate.chars().any(|c| SYMBOLS.contains(c)),
        }
    }

    /// Evaluate a candidate password against every enabled rule.
    ///
    /// Total function: every input, including the empty string, yields a
    /// well-formed report. The score is `satisfied * 100 / total` using
    /// integer (floor) division, so with the default five rules each
    /// satisfied rule contributes exactly 20 points.
    pub fn evaluate(&self, candidate: &str) -> ValidationReport {
        let rules = self.rules();
        let mut checks = Vec::with_capacity(rules.len());
        let mut requirements = Vec::with_capacity(rules.len());
        let mut missing = Vec::new();

        for rule in rules {
            let satisfied = self.satisfies(rule, candidate);
            requirements.push(self.description(rule));
            if !satisfied {
                missing.push(self.description(rule));
            }
            checks.push(RuleCheck { rule, satisfied });
        }

        let satisfied_count = checks.iter().filter(|c| c.satisfied).count();
        let score = (satisfied_count * 100 / checks.len()) as u8;

        ValidationReport {
            valid: missing.is_empty(),
            score,
            strength: Strength::from_score(score),
            checks,
            requirements,
            missing,
        }
    }
}

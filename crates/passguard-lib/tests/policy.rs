// crates/passguard-lib/tests/policy.rs
use passguard_lib::{PasswordPolicy, Rule, Strength};

#[test]
fn test_valid_password_passes_every_rule() {
    let policy = PasswordPolicy::default();

    // At least 8 characters, one of each class
    let report = policy.evaluate("Str0ng!Pass");
    assert!(report.valid);
    assert_eq!(report.score, 100);
    assert_eq!(report.strength, Strength::Strong);
    assert!(report.missing.is_empty());
    assert!(report.checks.iter().all(|c| c.satisfied));
}

#[test]
fn test_short_password_reports_length_as_missing() {
    let policy = PasswordPolicy::default();

    let report = policy.evaluate("Ab1!");
    assert!(!report.valid);
    let length = report
        .checks
        .iter()
        .find(|c| c.rule == Rule::Length)
        .unwrap();
    assert!(!length.satisfied);
    assert!(report
        .missing
        .iter()
        .any(|m| m == &policy.description(Rule::Length)));
}

#[test]
fn test_lowercase_only_password() {
    let policy = PasswordPolicy::default();

    // "abc" satisfies exactly one of the five rules
    let report = policy.evaluate("abc");
    assert!(!report.valid);
    assert_eq!(report.score, 20);
    assert_eq!(report.strength, Strength::Weak);

    let satisfied: Vec<Rule> = report
        .checks
        .iter()
        .filter(|c| c.satisfied)
        .map(|c| c.rule)
        .collect();
    assert_eq!(satisfied, vec![Rule::Lowercase]);
    assert_eq!(report.missing.len(), 4);
}

#[test]
fn test_empty_password() {
    let report = PasswordPolicy::default().evaluate("");
    assert!(!report.valid);
    assert_eq!(report.score, 0);
    assert_eq!(report.strength, Strength::Weak);
    assert_eq!(report.missing, report.requirements);
}

#[test]
fn test_each_missing_class_is_reported() {
    let policy = PasswordPolicy::default();

    // missing uppercase
    let report = policy.evaluate("str0ng!pass");
    assert!(!report.valid);
    assert!(report
        .checks
        .iter()
        .any(|c| c.rule == Rule::Uppercase && !c.satisfied));

    // missing digit
    let report = policy.evaluate("Strong!Pass");
    assert!(!report.valid);
    assert!(report
        .checks
        .iter()
        .any(|c| c.rule == Rule::Digit && !c.satisfied));

    // missing symbol
    let report = policy.evaluate("Str0ngPass");
    assert!(!report.valid);
    assert!(report
        .checks
        .iter()
        .any(|c| c.rule == Rule::Symbol && !c.satisfied));
}

#[test]
fn test_requirements_are_ordered_and_complete() {
    let policy = PasswordPolicy::default();
    let report = policy.evaluate("whatever");
    assert_eq!(
        report.requirements,
        vec![
            policy.description(Rule::Length),
            policy.description(Rule::Uppercase),
            policy.description(Rule::Lowercase),
            policy.description(Rule::Digit),
            policy.description(Rule::Symbol),
        ]
    );
}

#[test]
fn test_relaxed_policy_skips_disabled_rules() {
    let policy = PasswordPolicy {
        min_length: 8,
        require_uppercase: false,
        require_lowercase: true,
        require_digit: true,
        require_symbol: false,
    };

    let report = policy.evaluate("securepassw0rd");
    assert!(report.valid);
    assert_eq!(report.score, 100);
    assert_eq!(report.checks.len(), 3);
}

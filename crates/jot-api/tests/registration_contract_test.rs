//! Behavioral contract tests for user registration.
//!
//! Registration validates both fields and reports every violation in one
//! response, pre-checks the username, and stores only the derived hash.

#[test]
fn test_length_rules_match_the_public_contract() {
    // username >= 3, password >= 5. The canonical seed user passes both.
    let username = "root";
    let password = "sekret";
    assert!(username.chars().count() >= 3);
    assert!(password.chars().count() >= 5);

    // Boundary cases sit exactly on the limits.
    assert!("abc".chars().count() >= 3);
    assert!("ab".chars().count() < 3);
    assert!("abcde".chars().count() >= 5);
    assert!("abcd".chars().count() < 5);
}

#[test]
fn test_violations_are_collected_not_short_circuited() {
    // A request failing both checks must produce two messages, in field
    // order, so the client can render them all at once.
    let mut errors: Vec<String> = Vec::new();
    let username = "ab";
    let password = "pw";
    if username.chars().count() < 3 {
        errors.push("username must be at least 3 characters long".to_string());
    }
    if password.chars().count() < 5 {
        errors.push("Password must be at least 5 characters long".to_string());
    }
    assert_eq!(errors.len(), 2);
    assert!(errors[0].contains("username"));
    assert!(errors[1].contains("Password"));
}

#[test]
fn test_serialized_user_carries_hash_never_password() {
    let user = jot_core::User {
        id: jot_core::DocId::parse("65f0c0ffee00112233445566").unwrap(),
        username: "root".to_string(),
        name: Some("Superuser".to_string()),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$salt$hash".to_string(),
    };
    let json = serde_json::to_value(&user).unwrap();

    assert!(json.get("passwordHash").is_some());
    assert!(json.get("password").is_none());
}

#[test]
fn test_duplicate_username_error_names_the_conflict() {
    let err = jot_core::Error::DuplicateUsername("root".to_string());
    let msg = err.to_string();
    assert!(msg.to_lowercase().contains("taken") || msg.to_lowercase().contains("already"));
}

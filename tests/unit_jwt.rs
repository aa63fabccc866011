mod common;

use coachden::config::jwt::JwtConfig;
use coachden::utils::jwt::{create_access_token, verify_token};
use common::test_jwt_config;

#[test]
fn create_access_token_success() {
    let jwt_config = test_jwt_config();

    let token = create_access_token("test@example.com", None, &jwt_config).unwrap();
    assert!(!token.is_empty());
}

#[test]
fn verify_round_trips_identity() {
    let jwt_config = test_jwt_config();

    let token = create_access_token("test@example.com", Some("Test User"), &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.sub, "test@example.com");
    assert_eq!(claims.name.as_deref(), Some("Test User"));
}

#[test]
fn verify_round_trips_without_name() {
    let jwt_config = test_jwt_config();

    let token = create_access_token("test@example.com", None, &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.sub, "test@example.com");
    assert_eq!(claims.name, None);
}

#[test]
fn expiry_is_issued_at_plus_configured_lifetime() {
    let jwt_config = test_jwt_config();

    let token = create_access_token("test@example.com", None, &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(
        claims.exp - claims.iat,
        jwt_config.access_token_expiry as usize
    );
}

#[test]
fn expired_token_is_rejected() {
    let expired_config = JwtConfig {
        access_token_expiry: -3600,
        ..test_jwt_config()
    };

    let token = create_access_token("test@example.com", None, &expired_config).unwrap();
    assert!(verify_token(&token, &test_jwt_config()).is_err());
}

#[test]
fn wrong_secret_is_rejected() {
    let jwt_config = test_jwt_config();
    let token = create_access_token("test@example.com", None, &jwt_config).unwrap();

    let other_config = JwtConfig {
        secret: "a_completely_different_secret".to_string(),
        ..test_jwt_config()
    };
    assert!(verify_token(&token, &other_config).is_err());
}

#[test]
fn garbage_tokens_are_rejected() {
    let jwt_config = test_jwt_config();

    for token in [
        "",
        "invalid.token.here",
        "not.enough",
        "too.many.parts.here.extra",
        "!!!.invalid.chars",
        "header.payload.",
    ] {
        assert!(verify_token(token, &jwt_config).is_err(), "token: {token:?}");
    }
}

#[test]
fn special_characters_in_email_survive() {
    let jwt_config = test_jwt_config();

    let token =
        create_access_token("test+special@example.co.uk", None, &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.sub, "test+special@example.co.uk");
}

#[test]
fn different_identities_produce_different_tokens() {
    let jwt_config = test_jwt_config();

    let token1 = create_access_token("one@example.com", None, &jwt_config).unwrap();
    let token2 = create_access_token("two@example.com", None, &jwt_config).unwrap();
    assert_ne!(token1, token2);

    let claims1 = verify_token(&token1, &jwt_config).unwrap();
    let claims2 = verify_token(&token2, &jwt_config).unwrap();
    assert_eq!(claims1.sub, "one@example.com");
    assert_eq!(claims2.sub, "two@example.com");
}

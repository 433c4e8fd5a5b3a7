use chrono::Utc;
use gshop_auth::*;
use gshop_domain::{ErrorKind, ShopState};

fn form<'a>(username: &'a str, email: &'a str, password: &'a str) -> Registration<'a> {
    Registration { username, email, password, confirm_password: password }
}

fn with_alice() -> ShopState {
    let mut state = ShopState::default();
    register(&mut state, &form("alice", "alice@example.com", "hunter22"), Utc::now()).unwrap();
    state
}

#[test]
fn register_stores_a_salted_hash() {
    let state = with_alice();

    let alice = &state.users[0];
    assert_eq!(alice.username, "alice");
    assert!(!alice.is_admin);
    assert_ne!(alice.password_hash, "hunter22");
    assert!(alice.password_hash.starts_with("$argon2"));
}

#[test]
fn register_rejects_mismatched_confirmation() {
    let mut state = ShopState::default();
    let mismatched = Registration { confirm_password: "other", ..form("bob", "bob@x.io", "secret") };

    let err = register(&mut state, &mismatched, Utc::now()).unwrap_err();

    assert!(matches!(err, AuthError::PasswordMismatch { .. }));
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(state.users.is_empty());
}

#[test]
fn register_rejects_duplicates_case_sensitively() {
    let mut state = with_alice();

    let err = register(&mut state, &form("alice", "new@example.com", "pw"), Utc::now()).unwrap_err();
    assert!(matches!(err, AuthError::DuplicateUsername { .. }));

    let err =
        register(&mut state, &form("alice2", "alice@example.com", "pw"), Utc::now()).unwrap_err();
    assert!(matches!(err, AuthError::DuplicateEmail { .. }));

    register(&mut state, &form("Alice", "ALICE@example.com", "pw"), Utc::now()).unwrap();
    assert_eq!(state.users.len(), 2);
}

#[test]
fn register_rejects_blank_fields() {
    let mut state = ShopState::default();

    let err = register(&mut state, &form(" ", "", "pw"), Utc::now()).unwrap_err();

    match err {
        AuthError::MissingFields { message, .. } => assert_eq!(message, "username, email"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn login_opens_a_session() {
    let mut state = with_alice();

    let actor = login(&mut state, "alice", "hunter22", Utc::now()).unwrap();

    assert_eq!(actor.username, "alice");
    assert_eq!(state.session.as_ref().map(|s| s.user_id), Some(state.users[0].id));
    assert_eq!(current_actor(&state), Some(actor));
    assert!(!is_admin(&state));
}

#[test]
fn login_failures_are_indistinguishable() {
    let mut state = with_alice();

    let wrong_password = login(&mut state, "alice", "nope", Utc::now()).unwrap_err();
    let unknown_user = login(&mut state, "mallory", "hunter22", Utc::now()).unwrap_err();

    assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    assert_eq!(wrong_password.kind(), ErrorKind::Authorization);
    assert!(state.session.is_none());
}

#[test]
fn logout_clears_and_is_idempotent() {
    let mut state = with_alice();
    login(&mut state, "alice", "hunter22", Utc::now()).unwrap();

    let closed = logout(&mut state);

    assert_eq!(closed.map(|s| s.username), Some("alice".to_owned()));
    assert!(current_user(&state).is_none());
    assert!(logout(&mut state).is_none());
}

#[test]
fn admin_flag_follows_the_session_user() {
    let mut state = with_alice();
    state.users[0].is_admin = true;
    assert!(!is_admin(&state), "nobody logged in");

    login(&mut state, "alice", "hunter22", Utc::now()).unwrap();
    assert!(is_admin(&state));

    state.users.clear();
    assert!(!is_admin(&state), "dangling session resolves to nobody");
}

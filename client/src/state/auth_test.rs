use super::*;

fn record(user: &str, token: &str) -> AuthRecord {
    AuthRecord { user: user.to_owned(), token: token.to_owned() }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_record() {
    let state = AuthState::default();
    assert!(state.record.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_default_is_loading() {
    assert!(AuthState::default().loading);
}

// =============================================================
// Record completeness
// =============================================================

#[test]
fn loaded_keeps_complete_record() {
    let state = AuthState::loaded(Some(record("qa@thanqa.dev", "tok")));
    assert!(!state.loading);
    assert!(state.is_authenticated());
    assert_eq!(state.token().as_deref(), Some("tok"));
    assert_eq!(state.user_email(), Some("qa@thanqa.dev"));
}

#[test]
fn loaded_drops_partial_record() {
    assert!(!AuthState::loaded(Some(record("qa@thanqa.dev", ""))).is_authenticated());
    assert!(!AuthState::loaded(Some(record("  ", "tok"))).is_authenticated());
}

#[test]
fn record_serializes_with_user_and_token_keys() {
    let raw = serde_json::to_string(&record("a@b.c", "t")).unwrap();
    assert_eq!(raw, r#"{"user":"a@b.c","token":"t"}"#);
}

use crate::{OFFLINE_TOKEN, ProfileSummary, SessionMode, SessionState};

fn summary() -> ProfileSummary {
    ProfileSummary {
        id: 3,
        display_name: "Emma Wong".into(),
        avatar_uri: "https://img.example.com/3.png".into(),
    }
}

#[test]
fn given_default_state_when_checked_then_logged_out() {
    let state = SessionState::default();

    assert!(!state.is_authenticated());
    assert_eq!(state.mode(), None);
}

#[test]
fn given_remote_token_when_checked_then_online() {
    let state = SessionState::new("QpwL5tke4Pnpja7X4".into(), "emma@example.com".into(), summary());

    assert!(state.is_authenticated());
    assert_eq!(state.mode(), Some(SessionMode::Online));
}

#[test]
fn given_offline_session_when_checked_then_sentinel_token() {
    let state = SessionState::offline("emma@example.com".into(), summary());

    assert_eq!(state.token.as_deref(), Some(OFFLINE_TOKEN));
    assert_eq!(state.mode(), Some(SessionMode::Offline));
}

#[test]
fn given_empty_token_when_checked_then_not_authenticated() {
    let state = SessionState {
        token: Some(String::new()),
        ..SessionState::default()
    };

    assert!(!state.is_authenticated());
}

#[test]
fn given_session_when_serialize_roundtrip_then_preserves_fields() {
    let original = SessionState::new("abc".into(), "emma@example.com".into(), summary());

    let json = serde_json::to_string(&original).unwrap();
    let restored: SessionState = serde_json::from_str(&json).unwrap();

    assert_eq!(original, restored);
}

use crate::{PLACEHOLDER_AVATAR, UserRecord};

#[test]
fn test_user_record_new() {
    let user = UserRecord::new("Ada", "Lovelace", "ada@example.com", "12345678");

    assert_eq!(user.id, None);
    assert_eq!(user.first_name, "Ada");
    assert_eq!(user.email, "ada@example.com");
    assert!(user.active);
    assert!(user.avatar_uri.is_none());
}

#[test]
fn test_display_name_joins_names() {
    let user = UserRecord::new("Ada", "Lovelace", "ada@example.com", "1");
    assert_eq!(user.display_name(), "Ada Lovelace");
}

#[test]
fn test_avatar_falls_back_to_placeholder() {
    let mut user = UserRecord::new("Ada", "Lovelace", "ada@example.com", "1");
    assert_eq!(user.avatar_or_placeholder(), PLACEHOLDER_AVATAR);

    user.avatar_uri = Some(String::new());
    assert_eq!(user.avatar_or_placeholder(), PLACEHOLDER_AVATAR);

    user.avatar_uri = Some("https://img.example.com/ada.png".into());
    assert_eq!(user.avatar_or_placeholder(), "https://img.example.com/ada.png");
}

#[test]
fn test_profile_summary_uses_record_identity() {
    let user = UserRecord::new("Ada", "Lovelace", "ada@example.com", "1")
        .with_id(7)
        .with_avatar("https://img.example.com/ada.png");

    let summary = user.profile_summary();

    assert_eq!(summary.id, 7);
    assert_eq!(summary.display_name, "Ada Lovelace");
    assert_eq!(summary.avatar_uri, "https://img.example.com/ada.png");
}

#[test]
fn test_profile_summary_without_id_is_zero() {
    let user = UserRecord::new("Ada", "Lovelace", "ada@example.com", "1");
    assert_eq!(user.profile_summary().id, 0);
}

use crate::{ClientError, HttpDirectoryClient};

use std::time::Duration;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = HttpDirectoryClient::new("https://reqres.in/api/", None);
    assert_eq!(client.base_url, "https://reqres.in/api");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = HttpDirectoryClient::new("https://reqres.in/api", None);
    assert_eq!(client.base_url, "https://reqres.in/api");
}

#[test]
fn test_api_key_stored() {
    let client = HttpDirectoryClient::new("https://reqres.in/api", Some("reqres-free-v1"));
    assert_eq!(client.api_key, Some("reqres-free-v1".to_string()));
}

#[test]
fn test_empty_api_key_ignored() {
    let client = HttpDirectoryClient::new("https://reqres.in/api", Some(""));
    assert!(client.api_key.is_none());
}

#[test]
fn test_with_timeout_builds() {
    let client =
        HttpDirectoryClient::with_timeout("https://reqres.in/api", None, Duration::from_secs(5));
    assert!(client.is_ok());
}

#[test]
fn test_error_message_from_string_payload() {
    let message = HttpDirectoryClient::error_message(r#"{"error":"user not found"}"#);
    assert_eq!(message.as_deref(), Some("user not found"));
}

#[test]
fn test_error_message_from_object_payload() {
    let message = HttpDirectoryClient::error_message(
        r#"{"error":{"code":"UNAUTHORIZED","message":"Missing API key"}}"#,
    );
    assert_eq!(message.as_deref(), Some("Missing API key"));
}

#[test]
fn test_error_message_absent() {
    assert!(HttpDirectoryClient::error_message("{}").is_none());
    assert!(HttpDirectoryClient::error_message("<html>Bad Gateway</html>").is_none());
}

#[test]
fn test_api_error_exposes_remote_message() {
    let err = ClientError::api_error(400, Some("Missing password".into()));

    assert_eq!(err.remote_message(), Some("Missing password"));
    assert!(!err.is_unreachable());
    assert!(err.to_string().contains("Missing password"));
}

#[test]
fn test_api_error_without_message_displays_placeholder() {
    let err = ClientError::api_error(500, None);

    assert!(err.remote_message().is_none());
    assert!(err.to_string().contains("no details"));
}

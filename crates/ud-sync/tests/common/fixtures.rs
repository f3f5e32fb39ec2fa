#![allow(dead_code)]

use crate::common::FakeRemote;

use ud_client::RemoteUser;
use ud_core::{ProfileForm, RegistrationForm};
use ud_db::UserRepository;
use ud_sync::{Authenticator, MemoryKeyStore, SessionManager};

use std::sync::Arc;

pub async fn create_test_repository() -> UserRepository {
    UserRepository::new(
        ud_db::open_in_memory()
            .await
            .expect("Failed to create test pool"),
    )
}

pub fn remote_user(id: i64, first_name: &str, last_name: &str) -> RemoteUser {
    RemoteUser {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: format!(
            "{}.{}@reqres.in",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        avatar: Some(format!("https://reqres.in/img/faces/{}-image.jpg", id)),
    }
}

/// The first page of the public directory.
pub fn directory_page() -> Vec<RemoteUser> {
    vec![
        remote_user(1, "George", "Bluth"),
        remote_user(2, "Janet", "Weaver"),
        remote_user(3, "Emma", "Wong"),
    ]
}

pub fn registration_form(email: &str) -> RegistrationForm {
    RegistrationForm {
        first_name: "Eve".to_string(),
        last_name: "Holt".to_string(),
        email: email.to_string(),
        national_id: "12345678".to_string(),
        password: "pistol".to_string(),
        password_confirmation: "pistol".to_string(),
    }
}

pub fn profile_form(email: &str) -> ProfileForm {
    ProfileForm {
        first_name: "Tracey".to_string(),
        last_name: "Ramos".to_string(),
        email: email.to_string(),
        national_id: "87654321".to_string(),
        ..ProfileForm::default()
    }
}

pub struct AuthHarness {
    pub users: UserRepository,
    pub remote: Arc<FakeRemote>,
    pub store: Arc<MemoryKeyStore>,
    pub authenticator: Authenticator,
}

pub async fn create_auth_harness(remote_users: Vec<RemoteUser>) -> AuthHarness {
    let users = create_test_repository().await;
    let remote = Arc::new(FakeRemote::new(remote_users));
    let store = Arc::new(MemoryKeyStore::new());
    let session = Arc::new(SessionManager::new(store.clone()));
    let authenticator = Authenticator::new(users.clone(), remote.clone(), session);

    AuthHarness {
        users,
        remote,
        store,
        authenticator,
    }
}

#![allow(dead_code)]

use ud_core::UserRecord;

/// Creates a test UserRecord as the remote directory would describe it
pub fn create_test_user(id: i64, email: &str) -> UserRecord {
    UserRecord::new("George", "Bluth", email, "00000000")
        .with_id(id)
        .with_avatar(format!("https://reqres.in/img/faces/{}-image.jpg", id))
}

/// Creates a test UserRecord with no identity, as a local form would
pub fn create_local_user(email: &str) -> UserRecord {
    UserRecord::new("Janet", "Weaver", email, "73798984")
}

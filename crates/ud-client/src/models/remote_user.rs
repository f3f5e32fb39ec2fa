use ud_core::{PLACEHOLDER_NATIONAL_ID, UserRecord};

use serde::{Deserialize, Serialize};

/// A user as the remote directory describes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteUser {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl RemoteUser {
    /// Local record for a user first seen remotely: keeps the remote identity,
    /// starts active, and carries the placeholder national id.
    pub fn to_record(&self) -> UserRecord {
        let mut record = UserRecord::new(
            self.first_name.clone(),
            self.last_name.clone(),
            self.email.clone(),
            PLACEHOLDER_NATIONAL_ID,
        )
        .with_id(self.id);
        record.avatar_uri = self.avatar.clone().filter(|a| !a.is_empty());
        record
    }
}

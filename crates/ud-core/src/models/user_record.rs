//! User record - the single entity cached on the device.

use crate::{PLACEHOLDER_AVATAR, ProfileSummary};

use serde::{Deserialize, Serialize};

/// A user as held in the local store.
///
/// `id` is `None` until the record has been inserted, at which point the store
/// either keeps the remote-assigned identity or allocates one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    /// Secondary natural key used for login matching and merge de-duplication
    pub email: String,
    /// Free-form national identifier, never format-checked
    pub national_id: String,
    pub active: bool,
    pub avatar_uri: Option<String>,
}

impl UserRecord {
    /// Create an active record without an identity.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        national_id: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            national_id: national_id.into(),
            active: true,
            avatar_uri: None,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_avatar(mut self, avatar_uri: impl Into<String>) -> Self {
        self.avatar_uri = Some(avatar_uri.into());
        self
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Avatar URI, or the placeholder when none (or an empty one) is stored.
    pub fn avatar_or_placeholder(&self) -> &str {
        match self.avatar_uri.as_deref() {
            Some(uri) if !uri.is_empty() => uri,
            _ => PLACEHOLDER_AVATAR,
        }
    }

    /// Denormalized header data cached in the session at login.
    pub fn profile_summary(&self) -> ProfileSummary {
        ProfileSummary {
            id: self.id.unwrap_or(0),
            display_name: self.display_name(),
            avatar_uri: self.avatar_or_placeholder().to_string(),
        }
    }
}

//! Session state - who is signed in and how.

use crate::{OFFLINE_TOKEN, ProfileSummary};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionMode {
    /// Token issued by the remote directory
    Online,
    /// Established from the local cache with the sentinel token
    Offline,
}

/// Current authentication state. The default value is the logged-out state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub token: Option<String>,
    pub email: Option<String>,
    pub profile_summary: Option<ProfileSummary>,
}

impl SessionState {
    pub fn new(token: String, email: String, profile_summary: ProfileSummary) -> Self {
        Self {
            token: Some(token),
            email: Some(email),
            profile_summary: Some(profile_summary),
        }
    }

    /// An offline session bound to a cached profile.
    pub fn offline(email: String, profile_summary: ProfileSummary) -> Self {
        Self::new(OFFLINE_TOKEN.to_string(), email, profile_summary)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// `None` when logged out.
    pub fn mode(&self) -> Option<SessionMode> {
        if !self.is_authenticated() {
            return None;
        }
        match self.token.as_deref() {
            Some(OFFLINE_TOKEN) => Some(SessionMode::Offline),
            _ => Some(SessionMode::Online),
        }
    }
}

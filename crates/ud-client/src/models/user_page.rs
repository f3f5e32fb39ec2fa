use crate::RemoteUser;

use serde::Deserialize;

/// One page of `GET /users`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserPage {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub total_pages: u32,
    pub data: Vec<RemoteUser>,
}

impl UserPage {
    /// True when the server reports no page after this one.
    pub fn is_last(&self) -> bool {
        self.data.is_empty() || self.page >= self.total_pages
    }
}

/// Body of `GET /users/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserEnvelope {
    pub data: RemoteUser,
}

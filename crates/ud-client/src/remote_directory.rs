use crate::{ClientResult, LoginResponse, RegisterResponse, RemoteUser, UserPage};

use async_trait::async_trait;

/// Remote user directory as seen by the sync layer.
#[async_trait]
pub trait RemoteDirectory: Send + Sync {
    /// `POST /login`
    async fn login(&self, email: &str, password: &str) -> ClientResult<LoginResponse>;

    /// `POST /register`
    async fn register(&self, email: &str, password: &str) -> ClientResult<RegisterResponse>;

    /// `GET /users?page=N` (pages start at 1)
    async fn list_users(&self, page: u32) -> ClientResult<UserPage>;

    /// `GET /users/{id}`
    async fn get_user(&self, id: i64) -> ClientResult<RemoteUser>;
}

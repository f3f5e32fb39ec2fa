//! HTTP collaborator for the remote user directory.
//!
//! [`RemoteDirectory`] is the seam the sync layer depends on;
//! [`HttpDirectoryClient`] is the reqwest implementation of it.

pub(crate) mod client;
pub(crate) mod error;
pub mod models;
pub(crate) mod remote_directory;

#[cfg(test)]
mod tests;

pub use client::{API_KEY_HEADER, HttpDirectoryClient};
pub use error::{ClientError, Result as ClientResult};
pub use models::auth::{LoginResponse, RegisterResponse};
pub use models::remote_user::RemoteUser;
pub use models::user_page::{UserEnvelope, UserPage};
pub use remote_directory::RemoteDirectory;

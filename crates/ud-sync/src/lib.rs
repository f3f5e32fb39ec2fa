//! Cache synchronization, login and registration for the user directory.
//!
//! Every component takes its collaborators explicitly: a [`UserRepository`]
//! for the local cache, an `Arc<dyn RemoteDirectory>` for the remote API and,
//! for authentication, a shared [`SessionManager`].
//!
//! [`UserRepository`]: ud_db::UserRepository
//! [`RemoteDirectory`]: ud_client::RemoteDirectory

pub mod authenticator;
pub mod error;
pub mod key_store;
pub mod reconciler;
pub mod session;

#[cfg(test)]
mod tests;

pub use authenticator::Authenticator;
pub use error::{AuthError, AuthResult, SessionError, SessionResult, SyncError, SyncResult};
pub use key_store::{FileKeyStore, KeyValueStore, MemoryKeyStore};
pub use reconciler::{ReconcileOrigin, Reconciled, SyncReconciler};
pub use session::SessionManager;

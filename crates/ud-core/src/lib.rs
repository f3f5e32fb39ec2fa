pub mod error;
pub mod models;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::profile_form::ProfileForm;
pub use models::profile_summary::ProfileSummary;
pub use models::registration_form::RegistrationForm;
pub use models::session_state::{SessionMode, SessionState};
pub use models::user_record::UserRecord;

/// Token stored for sessions established from cached data while the remote is unreachable.
pub const OFFLINE_TOKEN: &str = "offline-token";
/// Avatar shown for users that never supplied one.
pub const PLACEHOLDER_AVATAR: &str = "https://via.placeholder.com/100";
/// National id assigned to records that arrive from the remote directory.
pub const PLACEHOLDER_NATIONAL_ID: &str = "00000000";

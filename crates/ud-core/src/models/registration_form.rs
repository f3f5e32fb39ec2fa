use crate::validation::{require_matching_passwords, require_non_empty};
use crate::{PLACEHOLDER_AVATAR, Result as CoreResult, UserRecord};

use serde::Deserialize;

/// Fields collected by the sign-up form.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub national_id: String,
    pub password: String,
    pub password_confirmation: String,
}

impl RegistrationForm {
    /// Every field is required and the password must be confirmed.
    pub fn validate(&self) -> CoreResult<()> {
        require_non_empty(&self.first_name, "first_name")?;
        require_non_empty(&self.last_name, "last_name")?;
        require_non_empty(&self.email, "email")?;
        require_non_empty(&self.national_id, "national_id")?;
        require_non_empty(&self.password, "password")?;
        require_non_empty(&self.password_confirmation, "password_confirmation")?;
        require_matching_passwords(&self.password, &self.password_confirmation)
    }

    /// The local record for a registration the remote accepted under `id`.
    pub fn to_record(&self, id: i64) -> UserRecord {
        UserRecord::new(
            self.first_name.trim(),
            self.last_name.trim(),
            self.email.trim(),
            self.national_id.trim(),
        )
        .with_id(id)
        .with_avatar(PLACEHOLDER_AVATAR)
    }
}

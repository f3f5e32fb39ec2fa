use crate::validation::{require_matching_passwords, require_non_empty};
use crate::{Result as CoreResult, UserRecord};

use serde::Deserialize;

/// Fields of the create/edit user form.
///
/// The password pair is optional; it is only checked when a password is given.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub national_id: String,
    #[serde(default)]
    pub avatar_uri: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub password_confirmation: Option<String>,
}

impl ProfileForm {
    pub fn validate(&self) -> CoreResult<()> {
        require_non_empty(&self.first_name, "first_name")?;
        require_non_empty(&self.last_name, "last_name")?;
        require_non_empty(&self.email, "email")?;
        require_non_empty(&self.national_id, "national_id")?;

        match self.password.as_deref() {
            Some(password) if !password.is_empty() => require_matching_passwords(
                password,
                self.password_confirmation.as_deref().unwrap_or_default(),
            ),
            _ => Ok(()),
        }
    }

    /// Overwrite the editable fields of an existing record.
    /// The identity and status flag are left untouched.
    pub fn apply_to(&self, record: &mut UserRecord) {
        record.first_name = self.first_name.trim().to_string();
        record.last_name = self.last_name.trim().to_string();
        record.email = self.email.trim().to_string();
        record.national_id = self.national_id.trim().to_string();
        if let Some(avatar) = &self.avatar_uri {
            record.avatar_uri = Some(avatar.clone());
        }
    }

    pub fn to_record(&self) -> UserRecord {
        let mut record = UserRecord::new("", "", "", "");
        self.apply_to(&mut record);
        record
    }
}

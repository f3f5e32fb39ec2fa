//! Field checks shared by the registration and profile forms.

use crate::{CoreError, Result as CoreResult};

/// Rejects empty or whitespace-only values.
#[track_caller]
pub fn require_non_empty(value: &str, field: &str) -> CoreResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(field, format!("{field} is required")));
    }
    Ok(())
}

#[track_caller]
pub fn require_matching_passwords(password: &str, confirmation: &str) -> CoreResult<()> {
    if password != confirmation {
        return Err(CoreError::validation(
            "password_confirmation",
            "Passwords do not match",
        ));
    }
    Ok(())
}

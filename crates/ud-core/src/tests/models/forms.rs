use crate::{PLACEHOLDER_AVATAR, ProfileForm, RegistrationForm, UserRecord};

use googletest::prelude::*;

fn registration() -> RegistrationForm {
    RegistrationForm {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: "ada@example.com".into(),
        national_id: "12345678".into(),
        password: "secret".into(),
        password_confirmation: "secret".into(),
    }
}

fn profile() -> ProfileForm {
    ProfileForm {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: "ada@example.com".into(),
        national_id: "12345678".into(),
        ..ProfileForm::default()
    }
}

#[test]
fn given_complete_registration_when_validate_then_ok() {
    assert_that!(registration().validate(), ok(anything()));
}

#[test]
fn given_blank_field_when_validate_then_names_field() {
    let mut form = registration();
    form.national_id = "   ".into();

    let err = form.validate().unwrap_err();

    assert_eq!(err.field(), Some("national_id"));
}

#[test]
fn given_mismatched_passwords_when_validate_then_error() {
    let mut form = registration();
    form.password_confirmation = "different".into();

    let err = form.validate().unwrap_err();

    assert_eq!(err.field(), Some("password_confirmation"));
    assert_eq!(err.message(), "Passwords do not match");
}

#[test]
fn given_registration_when_to_record_then_uses_remote_id_and_placeholder() {
    let record = registration().to_record(42);

    assert_eq!(record.id, Some(42));
    assert_that!(record.active, eq(true));
    assert_eq!(record.avatar_uri.as_deref(), Some(PLACEHOLDER_AVATAR));
}

#[test]
fn given_profile_without_password_when_validate_then_ok() {
    assert_that!(profile().validate(), ok(anything()));
}

#[test]
fn given_profile_password_without_confirmation_when_validate_then_error() {
    let mut form = profile();
    form.password = Some("secret".into());

    assert_that!(form.validate(), err(anything()));
}

#[test]
fn given_profile_missing_email_when_validate_then_error() {
    let mut form = profile();
    form.email = String::new();

    assert_that!(form.validate(), err(anything()));
}

#[test]
fn given_existing_record_when_apply_then_keeps_identity_and_status() {
    let mut record = UserRecord::new("Old", "Name", "old@example.com", "1").with_id(9);
    record.active = false;

    let mut form = profile();
    form.avatar_uri = Some("file:///photo.jpg".into());
    form.apply_to(&mut record);

    assert_eq!(record.id, Some(9));
    assert_that!(record.active, eq(false));
    assert_eq!(record.first_name, "Ada");
    assert_eq!(record.avatar_uri.as_deref(), Some("file:///photo.jpg"));
}

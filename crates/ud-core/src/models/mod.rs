pub mod profile_form;
pub mod profile_summary;
pub mod registration_form;
pub mod session_state;
pub mod user_record;

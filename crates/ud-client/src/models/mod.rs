pub mod auth;
pub mod remote_user;
pub mod user_page;

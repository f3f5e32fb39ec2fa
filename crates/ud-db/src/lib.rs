pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::store_connection::{open, open_in_memory};
pub use error::{DbError, Result};
pub use repositories::user_repository::UserRepository;

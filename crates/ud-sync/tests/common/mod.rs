pub mod fake_remote;
pub mod fixtures;

pub use fake_remote::*;
pub use fixtures::*;

// Shared errors
pub mod admin_error;
pub mod auth_error;

pub use admin_error::*;
pub use auth_error::*;

// Auth domain models
pub mod auth;
pub mod jwt;
pub mod oauth;
pub mod refresh_token;

pub use auth::*;
pub use jwt::*;
pub use oauth::*;
pub use refresh_token::*;

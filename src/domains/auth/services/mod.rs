// Auth domain services
pub mod jwt_service;
pub mod oauth_service;
pub mod refresh_token_service;
pub mod state;

pub use jwt_service::JwtService;
pub use oauth_service::OAuthService;
pub use refresh_token_service::RefreshTokenService;
pub use state::AuthState;

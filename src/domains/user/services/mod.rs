// User domain services
pub mod state;
pub mod user_service;

pub use state::UserState;
pub use user_service::UserService;

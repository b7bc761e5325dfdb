// All repositories module
pub mod auth;
pub mod seatmap;
pub mod show;

// Re-export all repositories for convenience
pub use auth::*;
pub use seatmap::*;
pub use show::*;

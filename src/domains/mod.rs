// Domain modules
pub mod auth;
pub mod seatmap;
pub mod show;
pub mod user;

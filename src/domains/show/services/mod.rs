// Show domain services
pub mod show_service;
pub mod state;
pub mod venue_service;

pub use show_service::ShowService;
pub use state::ShowState;
pub use venue_service::VenueService;

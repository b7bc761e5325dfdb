// SeatMap domain services
pub mod seat_map_service;
pub mod state;

pub use seat_map_service::SeatMapService;
pub use state::SeatMapState;

// SeatMap domain models
pub mod seat_map;

pub use seat_map::*;

pub mod seat_map_repository;

pub use seat_map_repository::SeatMapRepository;

pub mod reservation_repository;
pub mod schedule_repository;
pub mod show_repository;
pub mod venue_repository;

pub use reservation_repository::ReservationRepository;
pub use schedule_repository::ScheduleRepository;
pub use show_repository::ShowRepository;
pub use venue_repository::VenueRepository;

pub mod seat_map_handler;

// SeatMap domain routes
// 좌석배치도 관리 라우터
use axum::{
    routing::{get, post},
    Router,
};

use crate::domains::seatmap::handlers::seat_map_handler;
use crate::shared::services::AppState;

/// Create admin seat map router
/// 좌석배치도 관리 라우터 생성
pub fn create_seat_map_router() -> Router<AppState> {
    Router::new()
        .route("/", get(seat_map_handler::get_seat_map_list))
        .route("/", post(seat_map_handler::create_seat_map))
        .route("/check-duplicate", post(seat_map_handler::check_duplicate))
        .route("/:id", get(seat_map_handler::get_seat_map))
}

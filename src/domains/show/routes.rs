// Show domain routes
// 공연/장소 관리 라우터
use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::domains::show::handlers::{show_handler, venue_handler};
use crate::shared::services::AppState;

/// Create admin show router
/// 공연 관리 라우터 생성
pub fn create_show_router() -> Router<AppState> {
    Router::new()
        .route("/", get(show_handler::get_show_list))
        .route("/", post(show_handler::create_show))
        .route("/:id", get(show_handler::get_show_detail))
        .route("/:id", put(show_handler::update_show))
        .route("/:id", delete(show_handler::delete_show))
        .route("/:id/sale-status", patch(show_handler::update_sale_status))
}

/// Create admin venue router
/// 장소 관리 라우터 생성
pub fn create_venue_router() -> Router<AppState> {
    Router::new()
        .route("/", get(venue_handler::get_venue_list))
        .route("/", post(venue_handler::create_venue))
}

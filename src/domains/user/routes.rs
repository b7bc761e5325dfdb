// User domain routes
// 회원 관리 라우터
use axum::{
    routing::{get, patch},
    Router,
};

use crate::domains::user::handlers::user_handler;
use crate::shared::services::AppState;

/// Create admin user router
/// 회원 관리 라우터 생성
pub fn create_user_router() -> Router<AppState> {
    Router::new()
        .route("/", get(user_handler::get_user_list))
        .route("/:id/status", patch(user_handler::change_user_status))
}

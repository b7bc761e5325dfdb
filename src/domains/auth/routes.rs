// Auth domain routes
// 인증 도메인 라우터
use axum::{
    routing::{get, post},
    Router,
};

use crate::domains::auth::handlers::auth_handler;
use crate::shared::services::AppState;

/// Create authentication router
/// 인증 라우터 생성
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/:provider/authorize", get(auth_handler::authorize))
        .route("/:provider/callback", get(auth_handler::callback))
        .route("/refresh", post(auth_handler::refresh))
        .route("/logout", post(auth_handler::logout))
        .route("/user", get(auth_handler::get_current_user))
        .route("/verify", get(auth_handler::verify_token))
}

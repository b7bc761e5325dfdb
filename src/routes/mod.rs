// Routes module: 라우팅 설정
// 역할: 모든 도메인의 라우터를 조합
// Routes module: combines all domain routers

use axum::Router;

use crate::shared::services::AppState;

// 각 도메인의 routes import
use crate::domains::auth::routes::create_auth_router;
use crate::domains::seatmap::routes::create_seat_map_router;
use crate::domains::show::routes::{create_show_router, create_venue_router};
use crate::domains::user::routes::create_user_router;

/// Create main router (combines all domain routers)
/// 메인 라우터 생성 (모든 도메인 라우터 조합)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api/auth", create_auth_router())
        .nest("/api/admin/shows", create_show_router())
        .nest("/api/admin/venues", create_venue_router())
        .nest("/api/admin/seat-maps", create_seat_map_router())
        .nest("/api/admin/users", create_user_router())
}

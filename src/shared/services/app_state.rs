use crate::domains::auth::services::AuthState;
use crate::domains::seatmap::services::SeatMapState;
use crate::domains::show::services::ShowState;
use crate::domains::user::services::UserState;
use crate::shared::config::Config;
use crate::shared::database::Database;

/// Application state (combines all domain states)
/// 애플리케이션 상태 (모든 도메인 상태를 조합)
///
/// 각 도메인의 State를 조합하여 전체 애플리케이션 상태를 관리
#[derive(Clone)]
pub struct AppState {
    /// 데이터베이스 연결 (공유)
    /// Database connection (shared)
    pub db: Database,
    pub auth_state: AuthState,
    pub show_state: ShowState,
    pub seatmap_state: SeatMapState,
    pub user_state: UserState,
}

impl AppState {
    /// Create AppState with database and configuration
    /// 모든 도메인 State를 초기화하고 조합
    pub fn new(db: Database, config: &Config) -> Self {
        Self {
            auth_state: AuthState::new(db.clone(), config),
            show_state: ShowState::new(db.clone()),
            seatmap_state: SeatMapState::new(db.clone()),
            user_state: UserState::new(db.clone()),
            db,
        }
    }
}

// User domain state
// 회원 관리 도메인 상태
use crate::domains::user::services::UserService;
use crate::shared::database::Database;

#[derive(Clone)]
pub struct UserState {
    pub user_service: UserService,
}

impl UserState {
    pub fn new(db: Database) -> Self {
        Self {
            user_service: UserService::new(db),
        }
    }
}

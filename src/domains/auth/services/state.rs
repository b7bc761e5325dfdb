// Auth domain state
// 인증 도메인 상태
use crate::domains::auth::services::{JwtService, OAuthService, RefreshTokenService};
use crate::shared::config::Config;
use crate::shared::database::Database;

/// Auth domain state
/// 인증 도메인에서 필요한 서비스들을 포함하는 상태
#[derive(Clone)]
pub struct AuthState {
    pub jwt_service: JwtService,
    pub oauth_service: OAuthService,
    pub refresh_token_service: RefreshTokenService,
}

impl AuthState {
    /// AuthState 생성 (데이터베이스와 설정 필요)
    /// Create AuthState from the database handle and configuration
    pub fn new(db: Database, config: &Config) -> Self {
        let jwt_service = JwtService::from_config(config);

        Self {
            oauth_service: OAuthService::new(db.clone(), config),
            refresh_token_service: RefreshTokenService::new(db, jwt_service.clone()),
            jwt_service,
        }
    }
}

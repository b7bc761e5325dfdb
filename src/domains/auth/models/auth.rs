use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domains::user::models::User;
use crate::shared::models::{SocialProvider, UserRole};

/// 토큰 응답 모델
/// Access Token과 Refresh Token을 함께 반환
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = TokenResponse)]
pub struct TokenResponse {
    /// Access Token (API 인증에 사용)
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,

    /// Refresh Token (Access Token 갱신에 사용)
    pub refresh_token: String,

    /// Access Token 만료 시간 (밀리초)
    pub access_token_expires_in: i64,

    /// Refresh Token 만료 시간 (밀리초)
    pub refresh_token_expires_in: i64,

    /// 사용자 이메일
    #[schema(example = "user@example.com")]
    pub email: String,
}

/// 토큰 갱신 요청 모델
#[derive(Debug, Deserialize, ToSchema)]
#[schema(as = RefreshTokenRequest)]
pub struct RefreshTokenRequest {
    /// Refresh Token
    /// 리프레시 토큰
    pub refresh_token: String,
}

/// 로그아웃 요청 모델
#[derive(Debug, Deserialize, ToSchema)]
#[schema(as = LogoutRequest)]
pub struct LogoutRequest {
    /// Refresh Token
    /// 리프레시 토큰
    pub refresh_token: String,
}

/// 사용자 정보 응답 모델
/// Current user info (token holder)
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = UserInfoResponse)]
pub struct UserInfoResponse {
    pub email: String,
    pub name: String,
    pub picture: Option<String>,
    pub provider: SocialProvider,
    pub role: UserRole,
}

impl From<User> for UserInfoResponse {
    fn from(user: User) -> Self {
        Self {
            email: user.email,
            name: user.name,
            picture: user.picture,
            provider: user.social_provider,
            role: user.role,
        }
    }
}

/// 토큰 검증 응답 모델
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = VerifyTokenResponse)]
pub struct VerifyTokenResponse {
    pub valid: bool,
    pub user: Option<UserInfoResponse>,
}

/// OAuth2 인가 요청 쿼리 (콜백)
/// OAuth2 callback query
#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct OAuthCallbackQuery {
    /// 제공자가 발급한 인가 코드
    pub code: String,

    /// CSRF 방지용 state 값
    pub state: Option<String>,
}

/// 토큰 검증 요청 쿼리
#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct VerifyTokenQuery {
    /// 검증할 Access Token
    pub token: String,
}

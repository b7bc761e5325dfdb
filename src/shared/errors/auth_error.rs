use axum::{http::StatusCode, Json};
use serde_json::json;
use thiserror::Error;

/// 인증 관련 에러
/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// 잘못된 또는 만료된 토큰
    /// Invalid or expired token
    #[error("유효하지 않은 토큰입니다.")]
    InvalidToken,

    /// 토큰이 제공되지 않음
    /// Token not provided
    #[error("인증 토큰이 제공되지 않았습니다.")]
    MissingToken,

    /// Refresh Token을 저장소에서 찾을 수 없음
    /// Refresh token missing from the store
    #[error("Refresh Token을 찾을 수 없습니다.")]
    RefreshTokenNotFound,

    /// 저장된 Refresh Token이 만료됨
    /// Stored refresh token past its expiry
    #[error("Refresh Token이 만료되었습니다. 다시 로그인해주세요.")]
    RefreshTokenExpired,

    /// 유효하지 않은 Refresh Token 형식/서명
    /// Refresh token failed cryptographic validation
    #[error("유효하지 않은 Refresh Token 형식입니다. 다시 로그인해주세요.")]
    InvalidGrant,

    /// 지원하지 않는 OAuth2 제공자
    /// Unsupported OAuth2 provider
    #[error("지원하지 않는 제공자입니다: {0}")]
    UnsupportedProvider(String),

    /// OAuth2 제공자 응답이 기대한 형식이 아님
    /// Provider payload missing a required attribute
    #[error("OAuth2 응답 형식이 올바르지 않습니다: {0}")]
    InvalidProviderResponse(String),

    /// OAuth2 제공자 호출 실패 (토큰 교환, 사용자 정보 조회)
    /// Provider call failed (token exchange, userinfo)
    #[error("OAuth2 제공자 호출 중 오류가 발생했습니다: {0}")]
    ProviderCallFailed(String),

    /// 사용자를 찾을 수 없음
    /// User not found
    #[error("사용자를 찾을 수 없습니다: {email}")]
    UserNotFound { email: String },

    /// 데이터베이스 에러
    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러
    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// AuthError를 HTTP 응답으로 변환
impl From<AuthError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: AuthError) -> Self {
        let status = match &err {
            AuthError::InvalidToken
            | AuthError::MissingToken
            | AuthError::RefreshTokenNotFound
            | AuthError::RefreshTokenExpired
            | AuthError::InvalidGrant => StatusCode::UNAUTHORIZED,
            AuthError::UnsupportedProvider(_) | AuthError::InvalidProviderResponse(_) => {
                StatusCode::BAD_REQUEST
            }
            AuthError::ProviderCallFailed(_) => StatusCode::BAD_GATEWAY,
            AuthError::UserNotFound { .. } => StatusCode::NOT_FOUND,
            AuthError::DatabaseError(_) | AuthError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": err.to_string() })))
    }
}

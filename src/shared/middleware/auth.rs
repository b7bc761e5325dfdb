use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use serde_json::json;

use crate::shared::errors::AuthError;
use crate::shared::services::AppState;

/// 인증된 사용자 정보 (JWT 토큰에서 추출)
/// Authenticated user information (extracted from JWT token)
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub email: String,
}

/// AuthenticatedUser를 Axum Extractor로 구현
///
/// 사용법:
/// ```rust,ignore
/// pub async fn get_current_user(
///     State(app_state): State<AppState>,
///     authenticated_user: AuthenticatedUser,
/// ) -> Result<...> {
///     let email = authenticated_user.email;
///     // ...
/// }
/// ```
#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = (StatusCode, axum::Json<serde_json::Value>);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // 1. Authorization 헤더에서 토큰 추출
        let auth_header = parts
            .headers
            .get("Authorization")
            .ok_or_else(|| {
                (
                    StatusCode::UNAUTHORIZED,
                    axum::Json(json!({ "error": "Missing authorization header" })),
                )
            })?
            .to_str()
            .map_err(|_| {
                (
                    StatusCode::UNAUTHORIZED,
                    axum::Json(json!({ "error": "Invalid authorization header" })),
                )
            })?;

        // 2. "Bearer <token>" 형식 파싱
        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            (
                StatusCode::UNAUTHORIZED,
                axum::Json(json!({
                    "error": "Invalid authorization format. Expected: 'Bearer <token>'"
                })),
            )
        })?;

        // 3. Access Token 검증
        let claims = state
            .auth_state
            .jwt_service
            .verify_access_token(token)
            .map_err(|e: AuthError| {
                let (status, body): (StatusCode, axum::Json<serde_json::Value>) = e.into();
                (status, body)
            })?;

        Ok(AuthenticatedUser { email: claims.sub })
    }
}

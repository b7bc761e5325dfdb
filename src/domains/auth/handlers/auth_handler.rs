use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Redirect,
    Json,
};
use serde_json::json;

use crate::domains::auth::models::{
    LogoutRequest, OAuthCallbackQuery, RefreshTokenRequest, TokenResponse, UserInfoResponse,
    VerifyTokenQuery, VerifyTokenResponse,
};
use crate::shared::database::UserRepository;
use crate::shared::errors::AuthError;
use crate::shared::middleware::auth::AuthenticatedUser;
use crate::shared::models::SocialProvider;
use crate::shared::services::AppState;

/// URL 경로의 제공자 이름 파싱 ("google", "naver")
fn parse_provider(raw: &str) -> Result<SocialProvider, AuthError> {
    match raw {
        "google" => Ok(SocialProvider::Google),
        "naver" => Ok(SocialProvider::Naver),
        other => Err(AuthError::UnsupportedProvider(other.to_string())),
    }
}

/// OAuth2 인가 시작 핸들러 (제공자 로그인 페이지로 리다이렉트)
/// Start the OAuth2 flow by redirecting to the provider
#[utoipa::path(
    get,
    path = "/api/auth/{provider}/authorize",
    params(
        ("provider" = String, Path, description = "OAuth2 제공자 (google, naver)")
    ),
    responses(
        (status = 307, description = "Redirect to the provider authorization page"),
        (status = 400, description = "Unsupported provider")
    ),
    tag = "Auth"
)]
pub async fn authorize(
    State(app_state): State<AppState>,
    Path(provider): Path<String>,
) -> Result<Redirect, (StatusCode, Json<serde_json::Value>)> {
    let provider = parse_provider(&provider)
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    let url = app_state
        .auth_state
        .oauth_service
        .authorize_url(provider)
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Redirect::temporary(&url))
}

/// OAuth2 콜백 핸들러
/// 인가 코드로 로그인을 완료하고 토큰 쌍을 반환
/// Complete the OAuth2 login and return the token pair
#[utoipa::path(
    get,
    path = "/api/auth/{provider}/callback",
    params(
        ("provider" = String, Path, description = "OAuth2 제공자 (google, naver)"),
        OAuthCallbackQuery
    ),
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Unsupported provider or malformed provider response"),
        (status = 502, description = "Provider call failed")
    ),
    tag = "Auth"
)]
pub async fn callback(
    State(app_state): State<AppState>,
    Path(provider): Path<String>,
    Query(query): Query<OAuthCallbackQuery>,
) -> Result<Json<TokenResponse>, (StatusCode, Json<serde_json::Value>)> {
    let provider = parse_provider(&provider)
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    let user = app_state
        .auth_state
        .oauth_service
        .login(provider, &query.code, query.state.as_deref())
        .await
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    let tokens = app_state
        .auth_state
        .refresh_token_service
        .issue_token_pair(&user.email)
        .await
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(tokens))
}

/// 토큰 갱신 핸들러
/// Refresh token handler
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    request_body = RefreshTokenRequest,
    responses(
        (status = 200, description = "Token refreshed successfully", body = TokenResponse),
        (status = 401, description = "Invalid, unknown or expired refresh token"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn refresh(
    State(app_state): State<AppState>,
    Json(request): Json<RefreshTokenRequest>,
) -> Result<Json<TokenResponse>, (StatusCode, Json<serde_json::Value>)> {
    let tokens = app_state
        .auth_state
        .refresh_token_service
        .refresh_access_token(&request.refresh_token)
        .await
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(tokens))
}

/// 로그아웃 핸들러 (Refresh Token 삭제)
/// Logout handler — drops the stored refresh token
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    request_body = LogoutRequest,
    responses(
        (status = 200, description = "Logout successful"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn logout(
    State(app_state): State<AppState>,
    Json(request): Json<LogoutRequest>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    app_state
        .auth_state
        .refresh_token_service
        .delete_by_token(&request.refresh_token)
        .await
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(json!({ "message": "Logout successful" })))
}

/// 현재 로그인한 사용자 정보 조회
/// Current token holder info
#[utoipa::path(
    get,
    path = "/api/auth/user",
    responses(
        (status = 200, description = "User info retrieved successfully", body = UserInfoResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Auth"
)]
pub async fn get_current_user(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
) -> Result<Json<UserInfoResponse>, (StatusCode, Json<serde_json::Value>)> {
    let user_repo = UserRepository::new(app_state.db.pool().clone());

    let user = user_repo
        .get_user_by_email(&authenticated_user.email)
        .await
        .map_err(|e| -> (StatusCode, Json<serde_json::Value>) {
            AuthError::DatabaseError(format!("Failed to fetch user: {}", e)).into()
        })?
        .ok_or_else(|| -> (StatusCode, Json<serde_json::Value>) {
            AuthError::UserNotFound { email: authenticated_user.email.clone() }.into()
        })?;

    Ok(Json(user.into()))
}

/// JWT 토큰 검증 및 사용자 정보 반환
/// Validate an access token and return the user behind it
#[utoipa::path(
    get,
    path = "/api/auth/verify",
    params(VerifyTokenQuery),
    responses(
        (status = 200, description = "Token is valid", body = VerifyTokenResponse),
        (status = 401, description = "Token is invalid or expired"),
        (status = 404, description = "User behind the token no longer exists")
    ),
    tag = "Auth"
)]
pub async fn verify_token(
    State(app_state): State<AppState>,
    Query(query): Query<VerifyTokenQuery>,
) -> Result<Json<VerifyTokenResponse>, (StatusCode, Json<serde_json::Value>)> {
    let claims = app_state
        .auth_state
        .jwt_service
        .verify_access_token(&query.token)
        .map_err(|e| {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "valid": false, "error": e.to_string() })),
            )
        })?;

    let user_repo = UserRepository::new(app_state.db.pool().clone());
    let user = user_repo
        .get_user_by_email(&claims.sub)
        .await
        .map_err(|e| -> (StatusCode, Json<serde_json::Value>) {
            AuthError::DatabaseError(format!("Failed to fetch user: {}", e)).into()
        })?
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "valid": false, "error": "사용자를 찾을 수 없습니다." })),
            )
        })?;

    Ok(Json(VerifyTokenResponse {
        valid: true,
        user: Some(user.into()),
    }))
}

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::domains::user::models::{
    UserListRequest, UserListResponse, UserStatusChangeRequest, UserStatusResponse,
};
use crate::shared::errors::AdminError;
use crate::shared::middleware::auth::AuthenticatedUser;
use crate::shared::models::{PageRequest, PageResponse, UserPage};
use crate::shared::services::AppState;

/// 회원 목록 조회 핸들러
#[utoipa::path(
    get,
    path = "/api/admin/users",
    params(UserListRequest, PageRequest),
    responses(
        (status = 200, description = "User list retrieved", body = UserPage),
        (status = 401, description = "Unauthorized")
    ),
    security(("BearerAuth" = [])),
    tag = "Admin Users"
)]
pub async fn get_user_list(
    State(app_state): State<AppState>,
    _authenticated_user: AuthenticatedUser,
    Query(request): Query<UserListRequest>,
    Query(page): Query<PageRequest>,
) -> Result<Json<PageResponse<UserListResponse>>, (StatusCode, Json<serde_json::Value>)> {
    let result = app_state
        .user_state
        .user_service
        .get_user_list(request, page)
        .await
        .map_err(|e: AdminError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(result))
}

/// 회원 상태 변경 핸들러 (정지/활성화)
#[utoipa::path(
    patch,
    path = "/api/admin/users/{id}/status",
    params(("id" = i64, Path, description = "회원 ID")),
    request_body = UserStatusChangeRequest,
    responses(
        (status = 200, description = "User status changed", body = UserStatusResponse),
        (status = 400, description = "Missing suspension reason or unsupported status"),
        (status = 404, description = "User not found")
    ),
    security(("BearerAuth" = [])),
    tag = "Admin Users"
)]
pub async fn change_user_status(
    State(app_state): State<AppState>,
    _authenticated_user: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(request): Json<UserStatusChangeRequest>,
) -> Result<Json<UserStatusResponse>, (StatusCode, Json<serde_json::Value>)> {
    let result = app_state
        .user_state
        .user_service
        .change_user_status(id, request)
        .await
        .map_err(|e: AdminError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(result))
}

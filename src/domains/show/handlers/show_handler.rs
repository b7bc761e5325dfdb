use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::domains::show::models::{
    ShowCreateRequest, ShowCreateResponse, ShowDeleteResponse, ShowDetailResponse,
    ShowListRequest, ShowListResponse, ShowSaleStatusUpdateRequest, ShowSaleStatusUpdateResponse,
    ShowUpdateRequest, ShowUpdateResponse,
};
use crate::shared::errors::AdminError;
use crate::shared::middleware::auth::AuthenticatedUser;
use crate::shared::models::{PageRequest, PageResponse, ShowPage};
use crate::shared::services::AppState;

/// 공연 목록 조회 핸들러
#[utoipa::path(
    get,
    path = "/api/admin/shows",
    params(ShowListRequest, PageRequest),
    responses(
        (status = 200, description = "Show list retrieved", body = ShowPage),
        (status = 401, description = "Unauthorized")
    ),
    security(("BearerAuth" = [])),
    tag = "Admin Shows"
)]
pub async fn get_show_list(
    State(app_state): State<AppState>,
    _authenticated_user: AuthenticatedUser,
    Query(filters): Query<ShowListRequest>,
    Query(page): Query<PageRequest>,
) -> Result<Json<PageResponse<ShowListResponse>>, (StatusCode, Json<serde_json::Value>)> {
    let result = app_state
        .show_state
        .show_service
        .get_show_list(filters, page)
        .await
        .map_err(|e: AdminError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(result))
}

/// 공연 상세 조회 핸들러
#[utoipa::path(
    get,
    path = "/api/admin/shows/{id}",
    params(("id" = i64, Path, description = "공연 ID")),
    responses(
        (status = 200, description = "Show detail retrieved", body = ShowDetailResponse),
        (status = 404, description = "Show not found")
    ),
    security(("BearerAuth" = [])),
    tag = "Admin Shows"
)]
pub async fn get_show_detail(
    State(app_state): State<AppState>,
    _authenticated_user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<Json<ShowDetailResponse>, (StatusCode, Json<serde_json::Value>)> {
    let result = app_state
        .show_state
        .show_service
        .get_show_detail(id)
        .await
        .map_err(|e: AdminError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(result))
}

/// 공연 등록 핸들러
#[utoipa::path(
    post,
    path = "/api/admin/shows",
    request_body = ShowCreateRequest,
    responses(
        (status = 200, description = "Show created", body = ShowCreateResponse),
        (status = 400, description = "Invalid request (region, genre, schedules)"),
        (status = 404, description = "Venue not found")
    ),
    security(("BearerAuth" = [])),
    tag = "Admin Shows"
)]
pub async fn create_show(
    State(app_state): State<AppState>,
    _authenticated_user: AuthenticatedUser,
    Json(request): Json<ShowCreateRequest>,
) -> Result<Json<ShowCreateResponse>, (StatusCode, Json<serde_json::Value>)> {
    let result = app_state
        .show_state
        .show_service
        .create_show(request)
        .await
        .map_err(|e: AdminError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(result))
}

/// 공연 수정 핸들러
///
/// WAITING 상태에서는 전체 수정 가능.
/// 판매 시작 이후에는 장르/장소/판매 시작일이 잠기고,
/// 예매가 존재하는 일정은 수정/삭제할 수 없다.
#[utoipa::path(
    put,
    path = "/api/admin/shows/{id}",
    params(("id" = i64, Path, description = "공연 ID")),
    request_body = ShowUpdateRequest,
    responses(
        (status = 200, description = "Show updated", body = ShowUpdateResponse),
        (status = 400, description = "Locked field edited or schedule has reservations"),
        (status = 404, description = "Show not found")
    ),
    security(("BearerAuth" = [])),
    tag = "Admin Shows"
)]
pub async fn update_show(
    State(app_state): State<AppState>,
    _authenticated_user: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(request): Json<ShowUpdateRequest>,
) -> Result<Json<ShowUpdateResponse>, (StatusCode, Json<serde_json::Value>)> {
    let result = app_state
        .show_state
        .show_service
        .update_show(id, request)
        .await
        .map_err(|e: AdminError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(result))
}

/// 공연 삭제 핸들러 (WAITING 상태에서만)
#[utoipa::path(
    delete,
    path = "/api/admin/shows/{id}",
    params(("id" = i64, Path, description = "공연 ID")),
    responses(
        (status = 200, description = "Show deleted", body = ShowDeleteResponse),
        (status = 400, description = "Show is past WAITING"),
        (status = 404, description = "Show not found")
    ),
    security(("BearerAuth" = [])),
    tag = "Admin Shows"
)]
pub async fn delete_show(
    State(app_state): State<AppState>,
    _authenticated_user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<Json<ShowDeleteResponse>, (StatusCode, Json<serde_json::Value>)> {
    let result = app_state
        .show_state
        .show_service
        .delete_show(id)
        .await
        .map_err(|e: AdminError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(result))
}

/// 판매 상태 변경 핸들러
#[utoipa::path(
    patch,
    path = "/api/admin/shows/{id}/sale-status",
    params(("id" = i64, Path, description = "공연 ID")),
    request_body = ShowSaleStatusUpdateRequest,
    responses(
        (status = 200, description = "Sale status updated", body = ShowSaleStatusUpdateResponse),
        (status = 404, description = "Show not found")
    ),
    security(("BearerAuth" = [])),
    tag = "Admin Shows"
)]
pub async fn update_sale_status(
    State(app_state): State<AppState>,
    _authenticated_user: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(request): Json<ShowSaleStatusUpdateRequest>,
) -> Result<Json<ShowSaleStatusUpdateResponse>, (StatusCode, Json<serde_json::Value>)> {
    let result = app_state
        .show_state
        .show_service
        .update_sale_status(id, request)
        .await
        .map_err(|e: AdminError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(result))
}

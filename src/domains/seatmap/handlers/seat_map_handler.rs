use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::domains::seatmap::models::{
    SeatMapCreateRequest, SeatMapCreateResponse, SeatMapDetailResponse,
    SeatMapDuplicateCheckRequest, SeatMapDuplicateCheckResponse, SeatMapListRequest,
    SeatMapListResponse,
};
use crate::shared::errors::AdminError;
use crate::shared::middleware::auth::AuthenticatedUser;
use crate::shared::models::{PageRequest, PageResponse, SeatMapPage};
use crate::shared::services::AppState;

/// 좌석배치도 목록 조회 핸들러
#[utoipa::path(
    get,
    path = "/api/admin/seat-maps",
    params(SeatMapListRequest, PageRequest),
    responses(
        (status = 200, description = "Seat map list retrieved", body = SeatMapPage),
        (status = 400, description = "Unsupported region filter")
    ),
    security(("BearerAuth" = [])),
    tag = "Admin SeatMaps"
)]
pub async fn get_seat_map_list(
    State(app_state): State<AppState>,
    _authenticated_user: AuthenticatedUser,
    Query(filters): Query<SeatMapListRequest>,
    Query(page): Query<PageRequest>,
) -> Result<Json<PageResponse<SeatMapListResponse>>, (StatusCode, Json<serde_json::Value>)> {
    let result = app_state
        .seatmap_state
        .seat_map_service
        .get_seat_map_list(filters, page)
        .await
        .map_err(|e: AdminError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(result))
}

/// 좌석배치도 상세 조회 핸들러 ("SM001" 형식의 ID)
#[utoipa::path(
    get,
    path = "/api/admin/seat-maps/{id}",
    params(("id" = String, Path, description = "좌석배치도 ID (SM001 형식)")),
    responses(
        (status = 200, description = "Seat map detail retrieved", body = SeatMapDetailResponse),
        (status = 400, description = "Malformed seat map id"),
        (status = 404, description = "Seat map not found")
    ),
    security(("BearerAuth" = [])),
    tag = "Admin SeatMaps"
)]
pub async fn get_seat_map(
    State(app_state): State<AppState>,
    _authenticated_user: AuthenticatedUser,
    Path(id): Path<String>,
) -> Result<Json<SeatMapDetailResponse>, (StatusCode, Json<serde_json::Value>)> {
    let result = app_state
        .seatmap_state
        .seat_map_service
        .get_seat_map(&id)
        .await
        .map_err(|e: AdminError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(result))
}

/// 좌석배치도 중복 검사 핸들러
#[utoipa::path(
    post,
    path = "/api/admin/seat-maps/check-duplicate",
    request_body = SeatMapDuplicateCheckRequest,
    responses(
        (status = 200, description = "Duplicate check result", body = SeatMapDuplicateCheckResponse),
        (status = 400, description = "Unsupported region")
    ),
    security(("BearerAuth" = [])),
    tag = "Admin SeatMaps"
)]
pub async fn check_duplicate(
    State(app_state): State<AppState>,
    _authenticated_user: AuthenticatedUser,
    Json(request): Json<SeatMapDuplicateCheckRequest>,
) -> Result<Json<SeatMapDuplicateCheckResponse>, (StatusCode, Json<serde_json::Value>)> {
    let result = app_state
        .seatmap_state
        .seat_map_service
        .check_duplicate(request)
        .await
        .map_err(|e: AdminError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(result))
}

/// 좌석배치도 등록 핸들러
#[utoipa::path(
    post,
    path = "/api/admin/seat-maps",
    request_body = SeatMapCreateRequest,
    responses(
        (status = 200, description = "Seat map created", body = SeatMapCreateResponse),
        (status = 400, description = "Duplicate seat map or unsupported region")
    ),
    security(("BearerAuth" = [])),
    tag = "Admin SeatMaps"
)]
pub async fn create_seat_map(
    State(app_state): State<AppState>,
    _authenticated_user: AuthenticatedUser,
    Json(request): Json<SeatMapCreateRequest>,
) -> Result<Json<SeatMapCreateResponse>, (StatusCode, Json<serde_json::Value>)> {
    let result = app_state
        .seatmap_state
        .seat_map_service
        .create_seat_map(request)
        .await
        .map_err(|e: AdminError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(result))
}

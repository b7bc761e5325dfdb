use axum::{extract::State, http::StatusCode, Json};

use crate::domains::show::models::{VenueCreateRequest, VenueCreateResponse, VenueListResponse};
use crate::shared::errors::AdminError;
use crate::shared::middleware::auth::AuthenticatedUser;
use crate::shared::services::AppState;

/// 장소 목록 조회 핸들러
#[utoipa::path(
    get,
    path = "/api/admin/venues",
    responses(
        (status = 200, description = "Venue list retrieved", body = [VenueListResponse]),
        (status = 401, description = "Unauthorized")
    ),
    security(("BearerAuth" = [])),
    tag = "Admin Venues"
)]
pub async fn get_venue_list(
    State(app_state): State<AppState>,
    _authenticated_user: AuthenticatedUser,
) -> Result<Json<Vec<VenueListResponse>>, (StatusCode, Json<serde_json::Value>)> {
    let venues = app_state
        .show_state
        .venue_service
        .get_venue_list()
        .await
        .map_err(|e: AdminError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(venues))
}

/// 장소 등록 핸들러
#[utoipa::path(
    post,
    path = "/api/admin/venues",
    request_body = VenueCreateRequest,
    responses(
        (status = 200, description = "Venue created", body = VenueCreateResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(("BearerAuth" = [])),
    tag = "Admin Venues"
)]
pub async fn create_venue(
    State(app_state): State<AppState>,
    _authenticated_user: AuthenticatedUser,
    Json(request): Json<VenueCreateRequest>,
) -> Result<Json<VenueCreateResponse>, (StatusCode, Json<serde_json::Value>)> {
    let result = app_state
        .show_state
        .venue_service
        .create_venue(request)
        .await
        .map_err(|e: AdminError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(result))
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::models::Region;

/// 공연장 엔티티
/// Venue entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub hall_name: String,
    pub region: Region,
    pub address: Option<String>,
    pub total_seats: Option<i32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub seat_layout_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 장소 등록 요청
#[derive(Debug, Deserialize, ToSchema)]
#[schema(as = VenueCreateRequest)]
pub struct VenueCreateRequest {
    #[schema(example = "예술의전당")]
    pub name: String,

    #[schema(example = "오페라극장")]
    pub hall_name: String,

    pub region: Region,

    pub address: Option<String>,

    pub total_seats: Option<i32>,

    pub latitude: Option<f64>,

    pub longitude: Option<f64>,

    pub seat_layout_image_url: Option<String>,
}

/// 장소 등록 응답
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = VenueCreateResponse)]
pub struct VenueCreateResponse {
    pub venue_id: i64,
    pub message: String,
}

/// 장소 목록 행
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = VenueListResponse)]
pub struct VenueListResponse {
    pub id: i64,
    pub name: String,
    pub hall_name: String,
}

impl From<Venue> for VenueListResponse {
    fn from(venue: Venue) -> Self {
        Self {
            id: venue.id,
            name: venue.name,
            hall_name: venue.hall_name,
        }
    }
}

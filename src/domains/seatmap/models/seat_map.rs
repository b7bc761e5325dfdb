use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::models::Region;

/// 좌석배치도 엔티티
/// canvas/sections/seats는 JSONB 문서로 저장
/// Seat map entity — layout document stored as JSONB
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatMap {
    pub id: i64,
    pub region: Region,
    pub venue_name: String,
    pub hall_name: String,
    pub canvas: serde_json::Value,
    pub sections: serde_json::Value,
    pub seats: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SeatMap {
    /// "SM001" 형식의 표시용 ID
    /// Display id in the `SM%03d` format
    pub fn display_id(&self) -> String {
        format!("SM{:03}", self.id)
    }

    /// 표시용 ID를 내부 ID로 파싱 ("SM001" 또는 "1")
    /// Parse a display id (or a bare number) back into the row id
    pub fn parse_display_id(raw: &str) -> Option<i64> {
        let digits = raw.strip_prefix("SM").unwrap_or(raw);
        digits.parse::<i64>().ok()
    }
}

/// 캔버스 정보
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = SeatMapCanvas)]
pub struct SeatMapCanvas {
    pub width: i32,
    pub height: i32,
    pub seat_radius: i32,
}

/// 구역 정보
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = SeatMapSection)]
pub struct SeatMapSection {
    pub section_id: String,
    pub name: String,
    pub color: String,
    /// 구역 기본 가격
    pub price: i32,
}

/// 좌석 정보
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = SeatMapSeat)]
pub struct SeatMapSeat {
    pub seat_id: String,
    pub section_id: String,
    pub row: String,
    pub number: i32,
    pub x: f64,
    pub y: f64,
}

/// 좌석배치도 목록 조회 필터 (지역은 한글 지역명)
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct SeatMapListRequest {
    /// 지역 (한글, 예: "서울")
    pub region: Option<String>,

    /// 공연장명 (부분 일치)
    pub venue_name: Option<String>,

    /// 홀명 (부분 일치)
    pub hall_name: Option<String>,
}

/// 좌석배치도 목록 행
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = SeatMapListResponse)]
pub struct SeatMapListResponse {
    /// "SM001" 형식
    #[schema(example = "SM001")]
    pub seat_map_id: String,

    /// 지역 (한글)
    #[schema(example = "서울")]
    pub region: String,

    pub venue_name: String,

    pub hall_name: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl From<SeatMap> for SeatMapListResponse {
    fn from(seat_map: SeatMap) -> Self {
        Self {
            seat_map_id: seat_map.display_id(),
            region: seat_map.region.label().to_string(),
            venue_name: seat_map.venue_name,
            hall_name: seat_map.hall_name,
            created_at: seat_map.created_at,
            updated_at: seat_map.updated_at,
        }
    }
}

/// 좌석배치도 상세 응답 (저장된 배치도 문서 포함)
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = SeatMapDetailResponse)]
pub struct SeatMapDetailResponse {
    /// "SM001" 형식
    pub seat_map_id: String,

    /// 지역 (한글)
    pub region: String,

    pub venue_name: String,

    pub hall_name: String,

    #[schema(value_type = Object)]
    pub canvas: serde_json::Value,

    #[schema(value_type = Object)]
    pub sections: serde_json::Value,

    #[schema(value_type = Object)]
    pub seats: serde_json::Value,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl From<SeatMap> for SeatMapDetailResponse {
    fn from(seat_map: SeatMap) -> Self {
        Self {
            seat_map_id: seat_map.display_id(),
            region: seat_map.region.label().to_string(),
            venue_name: seat_map.venue_name,
            hall_name: seat_map.hall_name,
            canvas: seat_map.canvas,
            sections: seat_map.sections,
            seats: seat_map.seats,
            created_at: seat_map.created_at,
            updated_at: seat_map.updated_at,
        }
    }
}

/// 중복 검사 요청
#[derive(Debug, Deserialize, ToSchema)]
#[schema(as = SeatMapDuplicateCheckRequest)]
pub struct SeatMapDuplicateCheckRequest {
    /// 지역 (한글)
    pub region: Option<String>,
    pub venue_name: Option<String>,
    pub hall_name: Option<String>,
}

/// 중복 검사 응답
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = SeatMapDuplicateCheckResponse)]
pub struct SeatMapDuplicateCheckResponse {
    pub is_duplicate: bool,
}

/// 좌석배치도 등록 요청
#[derive(Debug, Deserialize, ToSchema)]
#[schema(as = SeatMapCreateRequest)]
pub struct SeatMapCreateRequest {
    /// 지역 (한글)
    #[schema(example = "서울")]
    pub region: String,

    #[schema(example = "예술의전당")]
    pub venue_name: String,

    #[schema(example = "오페라극장")]
    pub hall_name: String,

    pub canvas: SeatMapCanvas,

    pub sections: Vec<SeatMapSection>,

    pub seats: Vec<SeatMapSeat>,
}

/// 좌석배치도 등록 응답
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = SeatMapCreateResponse)]
pub struct SeatMapCreateResponse {
    /// "SM001" 형식
    pub seat_map_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_id_format() {
        let seat_map = SeatMap {
            id: 7,
            region: Region::Seoul,
            venue_name: "예술의전당".to_string(),
            hall_name: "오페라극장".to_string(),
            canvas: serde_json::json!({}),
            sections: serde_json::json!([]),
            seats: serde_json::json!([]),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(seat_map.display_id(), "SM007");
    }

    #[test]
    fn test_parse_display_id() {
        assert_eq!(SeatMap::parse_display_id("SM012"), Some(12));
        assert_eq!(SeatMap::parse_display_id("34"), Some(34));
        assert_eq!(SeatMap::parse_display_id("SM-x"), None);
    }
}

use crate::domains::seatmap::models::{
    SeatMap, SeatMapCreateRequest, SeatMapCreateResponse, SeatMapDetailResponse,
    SeatMapDuplicateCheckRequest, SeatMapDuplicateCheckResponse, SeatMapListRequest,
    SeatMapListResponse,
};
use crate::domains::show::models::VenueCreateRequest;
use crate::shared::database::{Database, SeatMapRepository, VenueRepository};
use crate::shared::errors::AdminError;
use crate::shared::models::{PageRequest, PageResponse, Region};

/// 좌석배치도 관리 서비스
/// Admin seat map service
///
/// 배치도 문서(canvas/sections/seats)는 JSONB로 저장되고
/// (지역, 공연장명, 홀명) 트리플이 유일키가 된다.
#[derive(Clone)]
pub struct SeatMapService {
    db: Database,
}

impl SeatMapService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// 좌석배치도 목록 조회 (필터링 및 페이징)
    pub async fn get_seat_map_list(
        &self,
        filters: SeatMapListRequest,
        page: PageRequest,
    ) -> Result<PageResponse<SeatMapListResponse>, AdminError> {
        let repo = SeatMapRepository::new(self.db.pool().clone());

        // 한글 지역명을 Region으로 변환
        let region = match filters.region.as_deref().map(str::trim) {
            Some(label) if !label.is_empty() => Some(convert_region_from_korean(label)?),
            _ => None,
        };

        let venue_name = filters.venue_name.as_deref();
        let hall_name = filters.hall_name.as_deref();

        let seat_maps = repo
            .list(region, venue_name, hall_name, page.limit(), page.offset())
            .await
            .map_err(|e| AdminError::DatabaseError(format!("Failed to list seat maps: {}", e)))?;

        let total = repo
            .count(region, venue_name, hall_name)
            .await
            .map_err(|e| AdminError::DatabaseError(format!("Failed to count seat maps: {}", e)))?;

        let content = seat_maps
            .into_iter()
            .map(SeatMapListResponse::from)
            .collect();

        Ok(PageResponse::new(content, page, total))
    }

    /// 좌석배치도 상세 조회 ("SM001" 형식의 표시용 ID 사용)
    pub async fn get_seat_map(&self, display_id: &str) -> Result<SeatMapDetailResponse, AdminError> {
        let repo = SeatMapRepository::new(self.db.pool().clone());

        let id = SeatMap::parse_display_id(display_id).ok_or(AdminError::InvalidSeatMapId)?;

        let seat_map = repo
            .find_by_id(id)
            .await
            .map_err(|e| AdminError::DatabaseError(format!("Failed to fetch seat map: {}", e)))?
            .ok_or(AdminError::SeatMapNotFound)?;

        Ok(seat_map.into())
    }

    /// 중복 검사
    /// 모든 필드가 제공되어야 중복 검사 가능 (아니면 false)
    pub async fn check_duplicate(
        &self,
        request: SeatMapDuplicateCheckRequest,
    ) -> Result<SeatMapDuplicateCheckResponse, AdminError> {
        let (Some(region), Some(venue_name), Some(hall_name)) =
            (&request.region, &request.venue_name, &request.hall_name)
        else {
            return Ok(SeatMapDuplicateCheckResponse { is_duplicate: false });
        };

        let repo = SeatMapRepository::new(self.db.pool().clone());
        let region = convert_region_from_korean(region)?;

        let is_duplicate = repo
            .find_by_region_venue_hall(region, venue_name, hall_name)
            .await
            .map_err(|e| AdminError::DatabaseError(format!("Failed to check duplicate: {}", e)))?
            .is_some();

        Ok(SeatMapDuplicateCheckResponse { is_duplicate })
    }

    /// 좌석배치도 등록
    /// 중복을 거부하고, 일치하는 장소가 없으면 새로 만든다
    pub async fn create_seat_map(
        &self,
        request: SeatMapCreateRequest,
    ) -> Result<SeatMapCreateResponse, AdminError> {
        let seat_map_repo = SeatMapRepository::new(self.db.pool().clone());
        let venue_repo = VenueRepository::new(self.db.pool().clone());

        let region = convert_region_from_korean(&request.region)?;

        // 중복 검사
        let existing = seat_map_repo
            .find_by_region_venue_hall(region, &request.venue_name, &request.hall_name)
            .await
            .map_err(|e| AdminError::DatabaseError(format!("Failed to check duplicate: {}", e)))?;

        if existing.is_some() {
            return Err(AdminError::DuplicateSeatMap {
                region: request.region.clone(),
                venue_name: request.venue_name.clone(),
                hall_name: request.hall_name.clone(),
            });
        }

        // Venue 찾기 또는 생성
        let venue = venue_repo
            .find_by_name_hall_region(&request.venue_name, &request.hall_name, region)
            .await
            .map_err(|e| AdminError::DatabaseError(format!("Failed to fetch venue: {}", e)))?;

        if venue.is_none() {
            tracing::info!(
                "Venue를 찾을 수 없어 새로 생성: name={}, hall_name={}, region={}",
                request.venue_name,
                request.hall_name,
                region.as_str()
            );

            venue_repo
                .create(&VenueCreateRequest {
                    name: request.venue_name.clone(),
                    hall_name: request.hall_name.clone(),
                    region,
                    address: None,
                    total_seats: Some(request.seats.len() as i32),
                    latitude: None,
                    longitude: None,
                    seat_layout_image_url: None,
                })
                .await
                .map_err(|e| AdminError::DatabaseError(format!("Failed to create venue: {}", e)))?;
        }

        let canvas = serde_json::to_value(&request.canvas)
            .map_err(|e| AdminError::DatabaseError(format!("Failed to encode canvas: {}", e)))?;
        let sections = serde_json::to_value(&request.sections)
            .map_err(|e| AdminError::DatabaseError(format!("Failed to encode sections: {}", e)))?;
        let seats = serde_json::to_value(&request.seats)
            .map_err(|e| AdminError::DatabaseError(format!("Failed to encode seats: {}", e)))?;

        let seat_map = seat_map_repo
            .create(
                region,
                &request.venue_name,
                &request.hall_name,
                canvas,
                sections,
                seats,
            )
            .await
            .map_err(|e| AdminError::DatabaseError(format!("Failed to create seat map: {}", e)))?;

        tracing::info!(
            "좌석배치도 등록: {} ({}, {}, {})",
            seat_map.display_id(),
            request.region,
            request.venue_name,
            request.hall_name
        );

        Ok(SeatMapCreateResponse {
            seat_map_id: seat_map.display_id(),
        })
    }
}

/// 한글 지역명을 Region으로 변환
fn convert_region_from_korean(label: &str) -> Result<Region, AdminError> {
    Region::from_label(label).ok_or_else(|| AdminError::UnsupportedRegion(label.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_region_from_korean() {
        assert_eq!(
            convert_region_from_korean("서울").expect("known region"),
            Region::Seoul
        );
        assert!(matches!(
            convert_region_from_korean("달나라"),
            Err(AdminError::UnsupportedRegion(_))
        ));
    }
}

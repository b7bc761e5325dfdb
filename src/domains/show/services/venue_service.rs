use crate::domains::show::models::{VenueCreateRequest, VenueCreateResponse, VenueListResponse};
use crate::shared::database::{Database, VenueRepository};
use crate::shared::errors::AdminError;

/// 장소 관리 서비스
/// Admin venue service
#[derive(Clone)]
pub struct VenueService {
    db: Database,
}

impl VenueService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// 장소 목록 조회
    pub async fn get_venue_list(&self) -> Result<Vec<VenueListResponse>, AdminError> {
        let venue_repo = VenueRepository::new(self.db.pool().clone());

        let venues = venue_repo
            .find_all()
            .await
            .map_err(|e| AdminError::DatabaseError(format!("Failed to list venues: {}", e)))?;

        Ok(venues.into_iter().map(VenueListResponse::from).collect())
    }

    /// 장소 등록
    pub async fn create_venue(
        &self,
        request: VenueCreateRequest,
    ) -> Result<VenueCreateResponse, AdminError> {
        let venue_repo = VenueRepository::new(self.db.pool().clone());

        let venue = venue_repo
            .create(&request)
            .await
            .map_err(|e| AdminError::DatabaseError(format!("Failed to create venue: {}", e)))?;

        tracing::info!("장소 등록: id={}, name={}", venue.id, venue.name);

        Ok(VenueCreateResponse {
            venue_id: venue.id,
            message: "장소가 성공적으로 등록되었습니다".to_string(),
        })
    }
}

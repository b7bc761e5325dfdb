// Show domain state
// 공연 도메인 상태
use crate::domains::show::services::{ShowService, VenueService};
use crate::shared::database::Database;

/// Show domain state
/// 공연 도메인에서 필요한 서비스들을 포함하는 상태
#[derive(Clone)]
pub struct ShowState {
    pub show_service: ShowService,
    pub venue_service: VenueService,
}

impl ShowState {
    pub fn new(db: Database) -> Self {
        Self {
            show_service: ShowService::new(db.clone()),
            venue_service: VenueService::new(db),
        }
    }
}

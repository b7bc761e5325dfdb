// SeatMap domain state
// 좌석배치도 도메인 상태
use crate::domains::seatmap::services::SeatMapService;
use crate::shared::database::Database;

#[derive(Clone)]
pub struct SeatMapState {
    pub seat_map_service: SeatMapService,
}

impl SeatMapState {
    pub fn new(db: Database) -> Self {
        Self {
            seat_map_service: SeatMapService::new(db),
        }
    }
}

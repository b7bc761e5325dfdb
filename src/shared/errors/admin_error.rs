use axum::{http::StatusCode, Json};
use serde_json::json;
use thiserror::Error;

/// 관리자 API 에러 (공연/장소/좌석배치도/회원 관리)
/// Admin API errors (shows, venues, seat maps, user management)
#[derive(Error, Debug)]
pub enum AdminError {
    #[error("공연을 찾을 수 없습니다")]
    ShowNotFound,

    #[error("공연 일정을 찾을 수 없습니다: {id}")]
    ScheduleNotFound { id: i64 },

    #[error("좌석배치도를 찾을 수 없습니다")]
    SeatMapNotFound,

    #[error("좌석배치도 ID 형식이 올바르지 않습니다")]
    InvalidSeatMapId,

    #[error("공연장 정보를 찾을 수 없습니다")]
    VenueNotFound,

    #[error("회원을 찾을 수 없습니다: {id}")]
    UserNotFound { id: i64 },

    /// 판매 시작 이후 잠기는 필드 수정 시도
    /// Edit of a field locked once sales started
    #[error("판매 시작 후에는 {field}을(를) 수정할 수 없습니다")]
    ImmutableField { field: &'static str },

    /// 예매가 참조하는 일정 수정/삭제 시도
    /// Mutation of a schedule that reservations reference
    #[error("예매가 존재하는 일정은 수정하거나 삭제할 수 없습니다: {id}")]
    ScheduleHasReservations { id: i64 },

    #[error("WAITING 상태의 공연만 삭제할 수 있습니다")]
    DeleteRequiresWaiting,

    #[error("이미 등록된 좌석배치도입니다: {region}, {venue_name}, {hall_name}")]
    DuplicateSeatMap {
        region: String,
        venue_name: String,
        hall_name: String,
    },

    #[error("지원하지 않는 지역입니다: {0}")]
    UnsupportedRegion(String),

    #[error("지원하지 않는 장르입니다: {0}")]
    UnsupportedGenre(String),

    #[error("공연 시간 형식이 올바르지 않습니다: {0}")]
    InvalidShowTime(String),

    #[error("스케줄은 최소 1개 이상 필요합니다")]
    SchedulesRequired,

    #[error("정지 사유는 필수입니다")]
    SuspensionReasonRequired,

    #[error("지원하지 않는 상태입니다: {0}")]
    UnsupportedStatus(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// AdminError를 HTTP 응답으로 변환
/// "찾을 수 없습니다" 계열은 404, 규칙 위반은 400, 저장소 실패는 500
impl From<AdminError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: AdminError) -> Self {
        let status = match &err {
            AdminError::ShowNotFound
            | AdminError::ScheduleNotFound { .. }
            | AdminError::SeatMapNotFound
            | AdminError::VenueNotFound
            | AdminError::UserNotFound { .. } => StatusCode::NOT_FOUND,
            AdminError::ImmutableField { .. }
            | AdminError::ScheduleHasReservations { .. }
            | AdminError::DeleteRequiresWaiting
            | AdminError::DuplicateSeatMap { .. }
            | AdminError::UnsupportedRegion(_)
            | AdminError::UnsupportedGenre(_)
            | AdminError::InvalidShowTime(_)
            | AdminError::SchedulesRequired
            | AdminError::SuspensionReasonRequired
            | AdminError::UnsupportedStatus(_)
            | AdminError::InvalidSeatMapId => StatusCode::BAD_REQUEST,
            AdminError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": err.to_string() })))
    }
}

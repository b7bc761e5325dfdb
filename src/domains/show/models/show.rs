use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::models::{Genre, SaleStatus, ShowStatus};

/// 공연 엔티티
/// Show entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Show {
    pub id: i64,
    pub venue_id: i64,
    pub title: String,
    pub genre: Genre,
    /// 상영 시간 (분)
    pub running_time: i32,
    pub poster_url: Option<String>,
    /// 출연진 정보 (단순 문자열)
    pub cast_members: Option<String>,
    pub detail_image_urls: Vec<String>,
    /// 첫 공연일
    pub start_date: NaiveDate,
    /// 마지막 공연일
    pub end_date: NaiveDate,
    pub status: ShowStatus,
    pub sale_status: SaleStatus,
    /// 판매 시작일시
    pub sale_start_date: DateTime<Utc>,
    /// 판매 종료일시
    pub sale_end_date: DateTime<Utc>,
    /// 연결된 좌석배치도 (없을 수 있음)
    pub seat_map_id: Option<i64>,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Show {
    /// WAITING 상태에서만 모든 필드를 수정할 수 있다.
    /// 판매 시작 이후에는 장르/장소/판매 시작일이 잠긴다.
    /// Whether the status-gated fields are still editable
    pub fn gated_fields_editable(&self) -> bool {
        self.status == ShowStatus::Waiting
    }
}

/// 공연 생성 데이터 (저장소 입력)
/// Show insert data (repository input)
#[derive(Debug)]
pub struct ShowCreate {
    pub venue_id: i64,
    pub title: String,
    pub genre: Genre,
    pub running_time: i32,
    pub cast_members: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub sale_start_date: DateTime<Utc>,
    pub sale_end_date: DateTime<Utc>,
    pub seat_map_id: Option<i64>,
}

/// 공연 목록 조회 필터
/// Show list filters (paging arrives separately)
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct ShowListRequest {
    /// 공연 상태 필터
    pub show_status: Option<ShowStatus>,

    /// 판매 상태 필터
    pub sale_status: Option<SaleStatus>,

    /// 제목 검색 키워드
    pub keyword: Option<String>,

    /// 일정 범위 시작일
    pub start_date: Option<NaiveDate>,

    /// 일정 범위 종료일
    pub end_date: Option<NaiveDate>,
}

/// 공연 목록 행
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = ShowListResponse)]
pub struct ShowListResponse {
    pub id: i64,
    pub title: String,
    pub genre: Genre,
    pub status: ShowStatus,
    pub sale_status: SaleStatus,
    /// 공연장명
    pub venue: Option<String>,
    pub region: Option<crate::shared::models::Region>,
    /// 첫 번째 일정 일시
    pub first_schedule_date: Option<DateTime<Utc>>,
    pub sale_start_date: DateTime<Utc>,
    pub sale_end_date: DateTime<Utc>,
}

/// 장소 정보 (지역은 한글 지역명)
/// Location triple (region carried as its Korean label)
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[schema(as = LocationRequest)]
pub struct LocationRequest {
    /// 지역 (한글)
    #[schema(example = "서울")]
    pub region: String,

    /// 공연장명
    #[schema(example = "예술의전당")]
    pub venue_name: String,

    /// 홀명
    #[schema(example = "오페라극장")]
    pub hall_name: String,
}

/// 예약 가능 기간
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[schema(as = BookingPeriodRequest)]
pub struct BookingPeriodRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// 공연 일정 요청 (등록 시)
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[schema(as = ScheduleRequest)]
pub struct ScheduleRequest {
    pub show_date: NaiveDate,

    /// 공연 시간 ("19:00" 형식)
    #[schema(example = "19:00")]
    pub show_time: String,

    pub ticket_open_time: DateTime<Utc>,
}

/// 공연 등록 요청
#[derive(Debug, Deserialize, ToSchema)]
#[schema(as = ShowCreateRequest)]
pub struct ShowCreateRequest {
    #[schema(example = "레미제라블")]
    pub title: String,

    #[schema(example = "MUSICAL")]
    pub genre: String,

    pub location: LocationRequest,

    /// 상영 시간 (분)
    #[schema(example = 150)]
    pub running_time: i32,

    /// 출연진 정보 (문자열)
    #[schema(example = "김철수, 이영희, 박민수")]
    pub cast: Option<String>,

    pub booking_period: BookingPeriodRequest,

    /// 공연 일정 (최소 1개)
    pub schedules: Vec<ScheduleRequest>,
}

/// 공연 등록 응답
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = ShowCreateResponse)]
pub struct ShowCreateResponse {
    pub show_id: i64,
    pub message: String,
}

/// 공연 일정 수정 항목
/// schedule_id가 있으면 수정, 없으면 추가
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[schema(as = ScheduleUpdateRequest)]
pub struct ScheduleUpdateRequest {
    /// 스케줄 ID (수정 시 필수, 추가 시 null)
    pub schedule_id: Option<i64>,

    pub show_date: NaiveDate,

    /// 공연 시간 ("19:00" 형식)
    #[schema(example = "19:00")]
    pub show_time: String,

    pub ticket_open_time: DateTime<Utc>,
}

/// 공연 수정 요청
/// WAITING 상태에서는 전체 수정 가능, 판매 시작 후에는
/// 장르/장소/판매 시작일이 잠기고 예매가 있는 일정은 수정/삭제 불가
#[derive(Debug, Default, Deserialize, ToSchema)]
#[schema(as = ShowUpdateRequest)]
pub struct ShowUpdateRequest {
    pub title: Option<String>,

    /// 장르 (판매 시작 후 수정 불가)
    pub genre: Option<String>,

    /// 장소 정보 (판매 시작 후 수정 불가)
    pub location: Option<LocationRequest>,

    /// 상영 시간 (분)
    pub running_time: Option<i32>,

    /// 출연진 정보 (문자열)
    pub cast: Option<String>,

    pub poster_url: Option<String>,

    pub detail_image_urls: Option<Vec<String>>,

    /// 판매 시작일시 (판매 시작 후 수정 불가)
    pub sale_start_date: Option<DateTime<Utc>>,

    /// 일정 목록 (추가/수정 모두 포함)
    pub schedules: Option<Vec<ScheduleUpdateRequest>>,

    /// 삭제할 일정 ID 목록
    pub deleted_schedule_ids: Option<Vec<i64>>,
}

/// 공연 수정 응답
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = ShowUpdateResponse)]
pub struct ShowUpdateResponse {
    pub show_id: i64,
    pub message: String,
}

/// 공연 삭제 응답
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = ShowDeleteResponse)]
pub struct ShowDeleteResponse {
    pub message: String,
}

/// 판매 상태 변경 요청
#[derive(Debug, Deserialize, ToSchema)]
#[schema(as = ShowSaleStatusUpdateRequest)]
pub struct ShowSaleStatusUpdateRequest {
    pub sale_status: SaleStatus,
}

/// 판매 상태 변경 응답
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = ShowSaleStatusUpdateResponse)]
pub struct ShowSaleStatusUpdateResponse {
    pub show_id: i64,
    pub sale_status: SaleStatus,
    pub message: String,
}

/// 공연 상세의 일정 정보
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = ScheduleInfo)]
pub struct ScheduleInfo {
    pub schedule_id: i64,
    pub show_date: NaiveDate,
    pub show_time: chrono::NaiveTime,
    pub ticket_open_time: DateTime<Utc>,
    pub remaining_seats: i64,
    pub total_seats: i64,
    pub reservation_count: i64,
}

/// 공연 상세의 좌석 가격 정보 (좌석배치도 구역에서 파생)
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = SeatPriceInfo)]
pub struct SeatPriceInfo {
    pub section_id: String,
    pub section_name: String,
    pub price: i32,
}

/// 공연 상세 응답
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = ShowDetailResponse)]
pub struct ShowDetailResponse {
    pub id: i64,
    pub title: String,
    pub genre: Genre,
    pub venue_name: Option<String>,
    pub hall_name: Option<String>,
    pub region: Option<crate::shared::models::Region>,
    pub running_time: i32,
    pub poster_url: Option<String>,
    pub detail_image_urls: Vec<String>,
    pub cast: Option<String>,
    pub status: ShowStatus,
    pub sale_status: SaleStatus,
    pub sale_start_date: DateTime<Utc>,
    pub sale_end_date: DateTime<Utc>,
    pub schedules: Vec<ScheduleInfo>,
    pub seat_prices: Vec<SeatPriceInfo>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

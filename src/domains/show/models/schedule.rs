use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::models::ScheduleStatus;

/// 공연 일정 엔티티
/// A single date/time instance of a show
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowSchedule {
    pub id: i64,
    pub show_id: i64,
    pub show_date: NaiveDate,
    pub show_time: NaiveTime,
    /// 티켓 오픈 시간
    pub ticket_open_time: DateTime<Utc>,
    pub status: ScheduleStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 공연 일정 생성 데이터
#[derive(Debug)]
pub struct ShowScheduleCreate {
    pub show_id: i64,
    pub show_date: NaiveDate,
    pub show_time: NaiveTime,
    pub ticket_open_time: DateTime<Utc>,
    pub status: ScheduleStatus,
}

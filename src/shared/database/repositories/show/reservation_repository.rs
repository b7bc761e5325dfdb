use anyhow::{Context, Result};
use sqlx::{PgPool, Row};

/// 예매 저장소
/// 예매 도메인은 골격만 존재한다. 일정 수정/삭제 가드를 위한
/// 건수 조회만 제공하고, 취소된 예매는 세지 않는다.
/// Reservation store — skeletal; only the counts the schedule guard needs.
pub struct ReservationRepository {
    pool: PgPool,
}

impl ReservationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 일정을 참조하는 예매 수 (취소 제외)
    /// Count reservations referencing a schedule (cancelled excluded)
    pub async fn count_by_schedule_id(&self, schedule_id: i64) -> Result<i64> {
        let row = sqlx::query(
            r#"
            SELECT COUNT(*) AS count
            FROM reservations
            WHERE schedule_id = $1 AND status <> 'CANCELLED'
            "#,
        )
        .bind(schedule_id)
        .fetch_one(&self.pool)
        .await
        .context("Failed to count reservations for schedule")?;

        Ok(row.get("count"))
    }

    /// 일정에 예매가 존재하는지 확인
    pub async fn exists_for_schedule(&self, schedule_id: i64) -> Result<bool> {
        Ok(self.count_by_schedule_id(schedule_id).await? > 0)
    }
}

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domains::show::models::{ShowSchedule, ShowScheduleCreate};
use crate::shared::models::ScheduleStatus;

pub struct ScheduleRepository {
    pool: PgPool,
}

impl ScheduleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 공연 일정 생성
    pub async fn create(&self, data: ShowScheduleCreate) -> Result<ShowSchedule> {
        let row = sqlx::query(
            r#"
            INSERT INTO show_schedules
                (show_id, show_date, show_time, ticket_open_time, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            RETURNING id, show_id, show_date, show_time, ticket_open_time, status,
                      created_at, updated_at
            "#,
        )
        .bind(data.show_id)
        .bind(data.show_date)
        .bind(data.show_time)
        .bind(data.ticket_open_time)
        .bind(data.status.as_str())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .context("Failed to create show schedule")?;

        row_to_schedule(&row)
    }

    /// ID로 일정 조회
    pub async fn find_by_id(&self, id: i64) -> Result<Option<ShowSchedule>> {
        let row = sqlx::query(
            r#"
            SELECT id, show_id, show_date, show_time, ticket_open_time, status,
                   created_at, updated_at
            FROM show_schedules
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch schedule by id")?;

        row.as_ref().map(row_to_schedule).transpose()
    }

    /// 공연의 일정 목록 (날짜/시간 순 정렬)
    /// Schedules of a show, ordered by date then time
    pub async fn find_by_show_id_ordered(&self, show_id: i64) -> Result<Vec<ShowSchedule>> {
        let rows = sqlx::query(
            r#"
            SELECT id, show_id, show_date, show_time, ticket_open_time, status,
                   created_at, updated_at
            FROM show_schedules
            WHERE show_id = $1
            ORDER BY show_date ASC, show_time ASC
            "#,
        )
        .bind(show_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch schedules for show")?;

        rows.iter().map(row_to_schedule).collect()
    }

    /// 일정 수정 (일자/시간/티켓 오픈 시간)
    pub async fn update_times(
        &self,
        id: i64,
        show_date: NaiveDate,
        show_time: NaiveTime,
        ticket_open_time: DateTime<Utc>,
    ) -> Result<ShowSchedule> {
        let row = sqlx::query(
            r#"
            UPDATE show_schedules
            SET show_date = $2, show_time = $3, ticket_open_time = $4, updated_at = $5
            WHERE id = $1
            RETURNING id, show_id, show_date, show_time, ticket_open_time, status,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(show_date)
        .bind(show_time)
        .bind(ticket_open_time)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .context("Failed to update schedule")?;

        row_to_schedule(&row)
    }

    /// 일정 삭제
    pub async fn delete(&self, id: i64) -> Result<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM show_schedules
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .context("Failed to delete schedule")?;

        Ok(result.rows_affected())
    }
}

fn row_to_schedule(row: &PgRow) -> Result<ShowSchedule> {
    let status: String = row.get("status");

    Ok(ShowSchedule {
        id: row.get("id"),
        show_id: row.get("show_id"),
        show_date: row.get("show_date"),
        show_time: row.get("show_time"),
        ticket_open_time: row.get("ticket_open_time"),
        status: ScheduleStatus::from_str(&status)
            .ok_or_else(|| anyhow!("Unknown schedule status: {}", status))?,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

use anyhow::{anyhow, Context, Result};
use chrono::{NaiveDate, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domains::show::models::{Show, ShowCreate};
use crate::shared::models::{Genre, SaleStatus, ShowStatus};

const SHOW_COLUMNS: &str = "id, venue_id, title, genre, running_time, poster_url, cast_members, \
     detail_image_urls, start_date, end_date, status, sale_status, sale_start_date, \
     sale_end_date, seat_map_id, view_count, created_at, updated_at";

pub struct ShowRepository {
    pool: PgPool,
}

impl ShowRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 공연 생성 (초기 상태 WAITING / 판매 ALLOWED)
    /// Insert a show in its initial WAITING / ALLOWED state
    pub async fn create(&self, data: ShowCreate) -> Result<Show> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO shows
                (venue_id, title, genre, running_time, cast_members, detail_image_urls,
                 start_date, end_date, status, sale_status, sale_start_date, sale_end_date,
                 seat_map_id, view_count, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, '{{}}', $6, $7, 'WAITING', 'ALLOWED', $8, $9, $10, 0, $11, $11)
            RETURNING {SHOW_COLUMNS}
            "#,
        ))
        .bind(data.venue_id)
        .bind(&data.title)
        .bind(data.genre.as_str())
        .bind(data.running_time)
        .bind(data.cast_members.as_deref())
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(data.sale_start_date)
        .bind(data.sale_end_date)
        .bind(data.seat_map_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .context("Failed to create show")?;

        row_to_show(&row)
    }

    /// 삭제되지 않은 공연 조회
    /// 논리 삭제는 SUSPENDED 상태로 표시된다
    /// Fetch a show that has not been soft-deleted
    pub async fn find_by_id_and_not_deleted(&self, id: i64) -> Result<Option<Show>> {
        let row = sqlx::query(&format!(
            r#"
            SELECT {SHOW_COLUMNS}
            FROM shows
            WHERE id = $1 AND status <> 'SUSPENDED'
            "#,
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch show by id")?;

        row.as_ref().map(row_to_show).transpose()
    }

    /// 공연 목록 조회 (상태/판매 상태/키워드/기간 필터)
    /// List shows under the optional filters
    pub async fn list(
        &self,
        status: Option<ShowStatus>,
        sale_status: Option<SaleStatus>,
        keyword: Option<&str>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Show>> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {SHOW_COLUMNS}
            FROM shows
            WHERE ($1::text IS NULL OR status = $1)
              AND ($2::text IS NULL OR sale_status = $2)
              AND ($3::text IS NULL OR title ILIKE '%' || $3 || '%')
              AND ($4::date IS NULL OR end_date >= $4)
              AND ($5::date IS NULL OR start_date <= $5)
            ORDER BY created_at DESC
            LIMIT $6 OFFSET $7
            "#,
        ))
        .bind(status.map(|s| s.as_str()))
        .bind(sale_status.map(|s| s.as_str()))
        .bind(keyword)
        .bind(start_date)
        .bind(end_date)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list shows")?;

        rows.iter().map(row_to_show).collect()
    }

    /// 공연 수 조회 (목록과 동일한 필터)
    /// Count shows under the same filters
    pub async fn count(
        &self,
        status: Option<ShowStatus>,
        sale_status: Option<SaleStatus>,
        keyword: Option<&str>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<i64> {
        let row = sqlx::query(
            r#"
            SELECT COUNT(*) AS count
            FROM shows
            WHERE ($1::text IS NULL OR status = $1)
              AND ($2::text IS NULL OR sale_status = $2)
              AND ($3::text IS NULL OR title ILIKE '%' || $3 || '%')
              AND ($4::date IS NULL OR end_date >= $4)
              AND ($5::date IS NULL OR start_date <= $5)
            "#,
        )
        .bind(status.map(|s| s.as_str()))
        .bind(sale_status.map(|s| s.as_str()))
        .bind(keyword)
        .bind(start_date)
        .bind(end_date)
        .fetch_one(&self.pool)
        .await
        .context("Failed to count shows")?;

        Ok(row.get("count"))
    }

    /// 공연 저장 (전체 필드 업데이트)
    /// Persist every mutable field of the show
    pub async fn update(&self, show: &Show) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE shows
            SET venue_id = $2, title = $3, genre = $4, running_time = $5, poster_url = $6,
                cast_members = $7, detail_image_urls = $8, start_date = $9, end_date = $10,
                status = $11, sale_status = $12, sale_start_date = $13, sale_end_date = $14,
                seat_map_id = $15, updated_at = $16
            WHERE id = $1
            "#,
        )
        .bind(show.id)
        .bind(show.venue_id)
        .bind(&show.title)
        .bind(show.genre.as_str())
        .bind(show.running_time)
        .bind(show.poster_url.as_deref())
        .bind(show.cast_members.as_deref())
        .bind(&show.detail_image_urls)
        .bind(show.start_date)
        .bind(show.end_date)
        .bind(show.status.as_str())
        .bind(show.sale_status.as_str())
        .bind(show.sale_start_date)
        .bind(show.sale_end_date)
        .bind(show.seat_map_id)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .context("Failed to update show")?;

        Ok(())
    }
}

fn row_to_show(row: &PgRow) -> Result<Show> {
    let genre: String = row.get("genre");
    let status: String = row.get("status");
    let sale_status: String = row.get("sale_status");

    Ok(Show {
        id: row.get("id"),
        venue_id: row.get("venue_id"),
        title: row.get("title"),
        genre: Genre::from_str(&genre).ok_or_else(|| anyhow!("Unknown genre: {}", genre))?,
        running_time: row.get("running_time"),
        poster_url: row.get("poster_url"),
        cast_members: row.get("cast_members"),
        detail_image_urls: row.get("detail_image_urls"),
        start_date: row.get("start_date"),
        end_date: row.get("end_date"),
        status: ShowStatus::from_str(&status)
            .ok_or_else(|| anyhow!("Unknown show status: {}", status))?,
        sale_status: SaleStatus::from_str(&sale_status)
            .ok_or_else(|| anyhow!("Unknown sale status: {}", sale_status))?,
        sale_start_date: row.get("sale_start_date"),
        sale_end_date: row.get("sale_end_date"),
        seat_map_id: row.get("seat_map_id"),
        view_count: row.get("view_count"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

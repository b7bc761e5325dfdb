use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domains::seatmap::models::SeatMap;
use crate::shared::models::Region;

const SEAT_MAP_COLUMNS: &str =
    "id, region, venue_name, hall_name, canvas, sections, seats, created_at, updated_at";

/// 좌석배치도 저장소
/// canvas/sections/seats는 JSONB 문서로 저장된다
pub struct SeatMapRepository {
    pool: PgPool,
}

impl SeatMapRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 좌석배치도 등록
    pub async fn create(
        &self,
        region: Region,
        venue_name: &str,
        hall_name: &str,
        canvas: serde_json::Value,
        sections: serde_json::Value,
        seats: serde_json::Value,
    ) -> Result<SeatMap> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO seat_maps
                (region, venue_name, hall_name, canvas, sections, seats, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            RETURNING {SEAT_MAP_COLUMNS}
            "#,
        ))
        .bind(region.as_str())
        .bind(venue_name)
        .bind(hall_name)
        .bind(canvas)
        .bind(sections)
        .bind(seats)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .context("Failed to create seat map")?;

        row_to_seat_map(&row)
    }

    /// ID로 좌석배치도 조회
    pub async fn find_by_id(&self, id: i64) -> Result<Option<SeatMap>> {
        let row = sqlx::query(&format!(
            r#"
            SELECT {SEAT_MAP_COLUMNS}
            FROM seat_maps
            WHERE id = $1
            "#,
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch seat map by id")?;

        row.as_ref().map(row_to_seat_map).transpose()
    }

    /// (지역, 공연장명, 홀명)으로 좌석배치도 조회 (중복 검사용)
    /// Exact lookup on the uniqueness triple
    pub async fn find_by_region_venue_hall(
        &self,
        region: Region,
        venue_name: &str,
        hall_name: &str,
    ) -> Result<Option<SeatMap>> {
        let row = sqlx::query(&format!(
            r#"
            SELECT {SEAT_MAP_COLUMNS}
            FROM seat_maps
            WHERE region = $1 AND venue_name = $2 AND hall_name = $3
            "#,
        ))
        .bind(region.as_str())
        .bind(venue_name)
        .bind(hall_name)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch seat map by region/venue/hall")?;

        row.as_ref().map(row_to_seat_map).transpose()
    }

    /// 좌석배치도 목록 조회 (필터는 부분 일치, 지역은 일치)
    /// Filtered list (region exact, names contains-match)
    pub async fn list(
        &self,
        region: Option<Region>,
        venue_name: Option<&str>,
        hall_name: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<SeatMap>> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {SEAT_MAP_COLUMNS}
            FROM seat_maps
            WHERE ($1::text IS NULL OR region = $1)
              AND ($2::text IS NULL OR venue_name ILIKE '%' || $2 || '%')
              AND ($3::text IS NULL OR hall_name ILIKE '%' || $3 || '%')
            ORDER BY created_at DESC
            LIMIT $4 OFFSET $5
            "#,
        ))
        .bind(region.map(|r| r.as_str()))
        .bind(venue_name)
        .bind(hall_name)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list seat maps")?;

        rows.iter().map(row_to_seat_map).collect()
    }

    /// 좌석배치도 수 조회 (목록과 동일한 필터)
    pub async fn count(
        &self,
        region: Option<Region>,
        venue_name: Option<&str>,
        hall_name: Option<&str>,
    ) -> Result<i64> {
        let row = sqlx::query(
            r#"
            SELECT COUNT(*) AS count
            FROM seat_maps
            WHERE ($1::text IS NULL OR region = $1)
              AND ($2::text IS NULL OR venue_name ILIKE '%' || $2 || '%')
              AND ($3::text IS NULL OR hall_name ILIKE '%' || $3 || '%')
            "#,
        )
        .bind(region.map(|r| r.as_str()))
        .bind(venue_name)
        .bind(hall_name)
        .fetch_one(&self.pool)
        .await
        .context("Failed to count seat maps")?;

        Ok(row.get("count"))
    }
}

fn row_to_seat_map(row: &PgRow) -> Result<SeatMap> {
    let region: String = row.get("region");

    Ok(SeatMap {
        id: row.get("id"),
        region: Region::from_str(&region).ok_or_else(|| anyhow!("Unknown region: {}", region))?,
        venue_name: row.get("venue_name"),
        hall_name: row.get("hall_name"),
        canvas: row.get("canvas"),
        sections: row.get("sections"),
        seats: row.get("seats"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

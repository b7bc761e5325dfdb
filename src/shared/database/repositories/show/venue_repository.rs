use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domains::show::models::{Venue, VenueCreateRequest};
use crate::shared::models::Region;

const VENUE_COLUMNS: &str = "id, name, hall_name, region, address, total_seats, latitude, \
     longitude, seat_layout_image_url, created_at, updated_at";

pub struct VenueRepository {
    pool: PgPool,
}

impl VenueRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 장소 등록
    pub async fn create(&self, request: &VenueCreateRequest) -> Result<Venue> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO venues
                (name, hall_name, region, address, total_seats, latitude, longitude,
                 seat_layout_image_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
            RETURNING {VENUE_COLUMNS}
            "#,
        ))
        .bind(&request.name)
        .bind(&request.hall_name)
        .bind(request.region.as_str())
        .bind(request.address.as_deref())
        .bind(request.total_seats)
        .bind(request.latitude)
        .bind(request.longitude)
        .bind(request.seat_layout_image_url.as_deref())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .context("Failed to create venue")?;

        row_to_venue(&row)
    }

    /// 전체 장소 목록
    pub async fn find_all(&self) -> Result<Vec<Venue>> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {VENUE_COLUMNS}
            FROM venues
            ORDER BY id ASC
            "#,
        ))
        .fetch_all(&self.pool)
        .await
        .context("Failed to list venues")?;

        rows.iter().map(row_to_venue).collect()
    }

    /// ID로 장소 조회
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Venue>> {
        let row = sqlx::query(&format!(
            r#"
            SELECT {VENUE_COLUMNS}
            FROM venues
            WHERE id = $1
            "#,
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch venue by id")?;

        row.as_ref().map(row_to_venue).transpose()
    }

    /// 이름 + 홀명 + 지역으로 장소 조회
    /// Look up a venue by its (name, hall, region) triple
    pub async fn find_by_name_hall_region(
        &self,
        name: &str,
        hall_name: &str,
        region: Region,
    ) -> Result<Option<Venue>> {
        let row = sqlx::query(&format!(
            r#"
            SELECT {VENUE_COLUMNS}
            FROM venues
            WHERE name = $1 AND hall_name = $2 AND region = $3
            "#,
        ))
        .bind(name)
        .bind(hall_name)
        .bind(region.as_str())
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch venue by name/hall/region")?;

        row.as_ref().map(row_to_venue).transpose()
    }
}

fn row_to_venue(row: &PgRow) -> Result<Venue> {
    let region: String = row.get("region");

    Ok(Venue {
        id: row.get("id"),
        name: row.get("name"),
        hall_name: row.get("hall_name"),
        region: Region::from_str(&region).ok_or_else(|| anyhow!("Unknown region: {}", region))?,
        address: row.get("address"),
        total_seats: row.get("total_seats"),
        latitude: row.get("latitude"),
        longitude: row.get("longitude"),
        seat_layout_image_url: row.get("seat_layout_image_url"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

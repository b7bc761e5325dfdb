use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domains::user::models::User;
use crate::shared::models::{Gender, SocialProvider, UserRole, UserStatus};

const USER_COLUMNS: &str = "id, email, social_provider, provider_id, name, picture, phone, \
     gender, birth_date, role, is_verified, status, suspension_reason, suspended_at, \
     created_at, updated_at, deleted_at";

/// 회원 목록 정렬 기준 (화이트리스트)
/// User list sort order (whitelisted columns only)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSort {
    CreatedAtDesc,
    CreatedAtAsc,
    NameDesc,
    NameAsc,
    EmailDesc,
    EmailAsc,
}

impl UserSort {
    fn order_clause(&self) -> &'static str {
        match self {
            UserSort::CreatedAtDesc => "created_at DESC",
            UserSort::CreatedAtAsc => "created_at ASC",
            UserSort::NameDesc => "name DESC",
            UserSort::NameAsc => "name ASC",
            UserSort::EmailDesc => "email DESC",
            UserSort::EmailAsc => "email ASC",
        }
    }
}

pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// OAuth 로그인으로 신규 사용자 생성
    /// Create a user from normalized OAuth attributes
    pub async fn create_user(
        &self,
        email: &str,
        provider: SocialProvider,
        provider_id: &str,
        name: &str,
        picture: Option<&str>,
        phone: Option<&str>,
    ) -> Result<User> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO users
                (email, social_provider, provider_id, name, picture, phone,
                 role, is_verified, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, 'USER', FALSE, 'ACTIVE', $7, $7)
            RETURNING {USER_COLUMNS}
            "#,
        ))
        .bind(email)
        .bind(provider.as_str())
        .bind(provider_id)
        .bind(name)
        .bind(picture)
        .bind(phone)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .context("Failed to create user")?;

        row_to_user(&row)
    }

    /// 제공자 + 제공자 ID로 사용자 조회 (OAuth 로그인용)
    /// Get user by provider identity (for OAuth login)
    pub async fn get_user_by_provider(
        &self,
        provider: SocialProvider,
        provider_id: &str,
    ) -> Result<Option<User>> {
        let row = sqlx::query(&format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM users
            WHERE social_provider = $1 AND provider_id = $2
            "#,
        ))
        .bind(provider.as_str())
        .bind(provider_id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch user by provider")?;

        row.as_ref().map(row_to_user).transpose()
    }

    // 이메일로 사용자 조회
    // Get user by email
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query(&format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM users
            WHERE email = $1
            "#,
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch user by email")?;

        row.as_ref().map(row_to_user).transpose()
    }

    // ID로 사용자 조회
    // Get user by ID
    pub async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        let row = sqlx::query(&format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM users
            WHERE id = $1
            "#,
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch user by id")?;

        row.as_ref().map(row_to_user).transpose()
    }

    /// OAuth 로그인 시 프로필 갱신 (이름/사진/전화번호)
    /// Refresh profile fields on OAuth login
    pub async fn update_oauth_profile(
        &self,
        id: i64,
        name: &str,
        picture: Option<&str>,
        phone: Option<&str>,
    ) -> Result<User> {
        let row = sqlx::query(&format!(
            r#"
            UPDATE users
            SET name = $2, picture = $3, phone = $4, updated_at = $5
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#,
        ))
        .bind(id)
        .bind(name)
        .bind(picture)
        .bind(phone)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .context("Failed to update user profile")?;

        row_to_user(&row)
    }

    /// 상태 필드 저장 (정지/활성화/탈퇴 후)
    /// Persist status fields after suspend/activate/withdraw
    pub async fn update_status(&self, user: &User) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET status = $2, suspension_reason = $3, suspended_at = $4,
                deleted_at = $5, updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(user.id)
        .bind(user.status.as_str())
        .bind(user.suspension_reason.as_deref())
        .bind(user.suspended_at)
        .bind(user.deleted_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .context("Failed to update user status")?;

        Ok(())
    }

    /// 회원 목록 조회 (키워드는 이름/이메일 부분 일치)
    /// List users, keyword matching name or email
    pub async fn list(
        &self,
        keyword: Option<&str>,
        sort: UserSort,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<User>> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM users
            WHERE ($1::text IS NULL OR name ILIKE '%' || $1 || '%' OR email ILIKE '%' || $1 || '%')
            ORDER BY {order}
            LIMIT $2 OFFSET $3
            "#,
            order = sort.order_clause(),
        ))
        .bind(keyword)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list users")?;

        rows.iter().map(row_to_user).collect()
    }

    /// 회원 수 조회 (목록과 동일한 필터)
    /// Count users under the same filter
    pub async fn count(&self, keyword: Option<&str>) -> Result<i64> {
        let row = sqlx::query(
            r#"
            SELECT COUNT(*) AS count
            FROM users
            WHERE ($1::text IS NULL OR name ILIKE '%' || $1 || '%' OR email ILIKE '%' || $1 || '%')
            "#,
        )
        .bind(keyword)
        .fetch_one(&self.pool)
        .await
        .context("Failed to count users")?;

        Ok(row.get("count"))
    }
}

fn row_to_user(row: &PgRow) -> Result<User> {
    let provider: String = row.get("social_provider");
    let role: String = row.get("role");
    let status: String = row.get("status");
    let gender: Option<String> = row.get("gender");

    Ok(User {
        id: row.get("id"),
        email: row.get("email"),
        social_provider: SocialProvider::from_str(&provider)
            .ok_or_else(|| anyhow!("Unknown social provider: {}", provider))?,
        provider_id: row.get("provider_id"),
        name: row.get("name"),
        picture: row.get("picture"),
        phone: row.get("phone"),
        gender: gender
            .map(|g| Gender::from_str(&g).ok_or_else(|| anyhow!("Unknown gender: {}", g)))
            .transpose()?,
        birth_date: row.get("birth_date"),
        role: UserRole::from_str(&role).ok_or_else(|| anyhow!("Unknown role: {}", role))?,
        is_verified: row.get("is_verified"),
        status: UserStatus::from_str(&status)
            .ok_or_else(|| anyhow!("Unknown user status: {}", status))?,
        suspension_reason: row.get("suspension_reason"),
        suspended_at: row.get("suspended_at"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
        deleted_at: row.get("deleted_at"),
    })
}

use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domains::auth::models::refresh_token::{RefreshToken, RefreshTokenCreate};

/// Refresh Token Repository
/// Refresh Token 다이제스트 저장소 (사용자당 토큰 1개)
pub struct RefreshTokenRepository {
    pool: PgPool,
}

impl RefreshTokenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Refresh Token 저장
    /// 기존 토큰이 있으면 삭제 후 저장 (One Token Per User)
    /// Store a refresh token, replacing any prior token of the same user
    pub async fn create(&self, data: RefreshTokenCreate) -> Result<RefreshToken> {
        sqlx::query(
            r#"
            DELETE FROM refresh_tokens
            WHERE user_email = $1
            "#,
        )
        .bind(&data.user_email)
        .execute(&self.pool)
        .await
        .context("Failed to delete previous refresh token")?;

        let row = sqlx::query(
            r#"
            INSERT INTO refresh_tokens (token_hash, user_email, expires_at, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, token_hash, user_email, expires_at, created_at
            "#,
        )
        .bind(&data.token_hash)
        .bind(&data.user_email)
        .bind(data.expires_at)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .context("Failed to create refresh token")?;

        Ok(row_to_token(&row))
    }

    /// 다이제스트로 Refresh Token 조회
    /// Find refresh token by its digest
    pub async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<RefreshToken>> {
        let row = sqlx::query(
            r#"
            SELECT id, token_hash, user_email, expires_at, created_at
            FROM refresh_tokens
            WHERE token_hash = $1
            "#,
        )
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to find refresh token")?;

        Ok(row.as_ref().map(row_to_token))
    }

    /// 다이제스트로 Refresh Token 삭제 (로그아웃/만료 시)
    /// Delete by digest (logout, expiry)
    pub async fn delete_by_token_hash(&self, token_hash: &str) -> Result<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM refresh_tokens
            WHERE token_hash = $1
            "#,
        )
        .bind(token_hash)
        .execute(&self.pool)
        .await
        .context("Failed to delete refresh token")?;

        Ok(result.rows_affected())
    }

    /// 사용자 이메일로 Refresh Token 삭제 (로그아웃 시)
    /// Delete all tokens of a user (logout)
    pub async fn delete_by_user_email(&self, email: &str) -> Result<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM refresh_tokens
            WHERE user_email = $1
            "#,
        )
        .bind(email)
        .execute(&self.pool)
        .await
        .context("Failed to delete refresh tokens for user")?;

        Ok(result.rows_affected())
    }

    /// 만료된 토큰 삭제 (정리 작업)
    /// Delete expired tokens (cleanup)
    pub async fn delete_expired(&self) -> Result<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM refresh_tokens
            WHERE expires_at < NOW()
            "#,
        )
        .execute(&self.pool)
        .await
        .context("Failed to delete expired refresh tokens")?;

        Ok(result.rows_affected())
    }
}

fn row_to_token(row: &PgRow) -> RefreshToken {
    RefreshToken {
        id: row.get("id"),
        token_hash: row.get("token_hash"),
        user_email: row.get("user_email"),
        expires_at: row.get("expires_at"),
        created_at: row.get("created_at"),
    }
}

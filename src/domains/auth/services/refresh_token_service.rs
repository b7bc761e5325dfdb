use chrono::{Duration, Utc};

use crate::domains::auth::models::{RefreshTokenCreate, TokenResponse};
use crate::domains::auth::services::JwtService;
use crate::shared::database::{Database, RefreshTokenRepository};
use crate::shared::errors::AuthError;
use crate::shared::utils::masking;

/// Refresh Token 관리 서비스
/// DB에 저장된 Refresh Token을 관리하고 Access Token 갱신 처리
/// Refresh token store management + access token renewal
#[derive(Clone)]
pub struct RefreshTokenService {
    db: Database,
    jwt_service: JwtService,
}

impl RefreshTokenService {
    pub fn new(db: Database, jwt_service: JwtService) -> Self {
        Self { db, jwt_service }
    }

    /// 로그인 성공 시 토큰 쌍 발급
    /// Refresh Token은 다이제스트로 저장된다 (One Token Per User)
    /// Issue an access/refresh pair and store the refresh digest
    pub async fn issue_token_pair(&self, email: &str) -> Result<TokenResponse, AuthError> {
        let access_token = self.jwt_service.create_access_token(email)?;
        let refresh_token = self.jwt_service.create_refresh_token(email)?;

        let repo = RefreshTokenRepository::new(self.db.pool().clone());
        let expires_at =
            Utc::now() + Duration::milliseconds(self.jwt_service.refresh_expiration_ms());

        repo.create(RefreshTokenCreate {
            token_hash: self.jwt_service.hash_refresh_token(&refresh_token),
            user_email: email.to_string(),
            expires_at,
        })
        .await
        .map_err(|e| AuthError::DatabaseError(format!("Failed to store refresh token: {}", e)))?;

        tracing::info!("Refresh Token 저장 완료: {}", masking::mask_email(email));

        Ok(TokenResponse {
            access_token,
            refresh_token,
            access_token_expires_in: self.jwt_service.access_expiration_ms(),
            refresh_token_expires_in: self.jwt_service.refresh_expiration_ms(),
            email: email.to_string(),
        })
    }

    /// Refresh Token으로 새로운 Access Token 발급
    ///
    /// 1. 서명 검증 (JWT)
    /// 2. DB 조회 (다이제스트)
    /// 3. 저장된 만료 시간 확인 (만료 시 해당 행 삭제)
    /// 4. 새 Access Token 발급 — Refresh Token은 그대로 유지
    ///
    /// Renew the access token; the refresh token itself is left unchanged.
    pub async fn refresh_access_token(&self, refresh_token: &str) -> Result<TokenResponse, AuthError> {
        // 1. Refresh Token 검증 (JWT 서명 검증)
        let claims = self.jwt_service.verify_refresh_token(refresh_token).map_err(|e| {
            tracing::warn!(
                "유효하지 않은 Refresh Token 서명 또는 형식: {}",
                masking::mask_token(refresh_token)
            );
            e
        })?;

        let repo = RefreshTokenRepository::new(self.db.pool().clone());
        let token_hash = self.jwt_service.hash_refresh_token(refresh_token);

        // 2. DB에서 Refresh Token 조회
        let stored = repo
            .find_by_token_hash(&token_hash)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to find refresh token: {}", e)))?
            .ok_or_else(|| {
                tracing::warn!("DB에서 Refresh Token을 찾을 수 없음");
                AuthError::RefreshTokenNotFound
            })?;

        // 3. 만료 확인 (만료된 토큰은 삭제)
        if stored.is_expired() {
            tracing::warn!(
                "Refresh Token이 만료됨: {}",
                masking::mask_email(&stored.user_email)
            );
            repo.delete_by_token_hash(&token_hash).await.map_err(|e| {
                AuthError::DatabaseError(format!("Failed to delete expired refresh token: {}", e))
            })?;
            return Err(AuthError::RefreshTokenExpired);
        }

        // 4. 새 Access Token 생성 (Refresh Token은 교체하지 않음)
        let access_token = self.jwt_service.create_access_token(&claims.sub)?;

        tracing::info!("Access Token 갱신 완료: {}", masking::mask_email(&claims.sub));

        Ok(TokenResponse {
            access_token,
            refresh_token: refresh_token.to_string(),
            access_token_expires_in: self.jwt_service.access_expiration_ms(),
            refresh_token_expires_in: self.jwt_service.refresh_expiration_ms(),
            email: claims.sub,
        })
    }

    /// 토큰으로 Refresh Token 삭제 (로그아웃)
    /// Delete the stored token behind a raw refresh token (logout)
    pub async fn delete_by_token(&self, refresh_token: &str) -> Result<(), AuthError> {
        let repo = RefreshTokenRepository::new(self.db.pool().clone());
        let token_hash = self.jwt_service.hash_refresh_token(refresh_token);

        repo.delete_by_token_hash(&token_hash)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to delete refresh token: {}", e)))?;

        tracing::info!("Refresh Token 삭제 완료");
        Ok(())
    }

    /// 사용자 이메일로 Refresh Token 삭제 (로그아웃 시)
    /// Delete all stored tokens of a user (logout)
    pub async fn delete_by_user_email(&self, email: &str) -> Result<(), AuthError> {
        let repo = RefreshTokenRepository::new(self.db.pool().clone());

        repo.delete_by_user_email(email).await.map_err(|e| {
            AuthError::DatabaseError(format!("Failed to delete refresh tokens: {}", e))
        })?;

        tracing::info!("Refresh Token 삭제 완료: {}", masking::mask_email(email));
        Ok(())
    }

    /// 만료된 토큰 정리
    /// Drop expired rows
    pub async fn delete_expired(&self) -> Result<u64, AuthError> {
        let repo = RefreshTokenRepository::new(self.db.pool().clone());

        repo.delete_expired().await.map_err(|e| {
            AuthError::DatabaseError(format!("Failed to delete expired refresh tokens: {}", e))
        })
    }
}

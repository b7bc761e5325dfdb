// src/domains/auth/services/jwt_service.rs
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use sha2::{Digest, Sha256};

use crate::domains::auth::models::jwt::Claims;
use crate::shared::config::Config;
use crate::shared::errors::AuthError;

/// JWT 서비스
/// Access Token과 Refresh Token을 별도의 시크릿 키로 관리
/// JWT Service — separate secrets and lifetimes for access and refresh tokens
#[derive(Clone)]
pub struct JwtService {
    access_encoding_key: EncodingKey,
    access_decoding_key: DecodingKey,
    access_expiration_ms: i64,
    refresh_encoding_key: EncodingKey,
    refresh_decoding_key: DecodingKey,
    refresh_expiration_ms: i64,
}

impl JwtService {
    /// JWT Service 생성
    /// Create JWT Service
    pub fn new(
        access_secret: &str,
        access_expiration_ms: i64,
        refresh_secret: &str,
        refresh_expiration_ms: i64,
    ) -> Self {
        Self {
            access_encoding_key: EncodingKey::from_secret(access_secret.as_ref()),
            access_decoding_key: DecodingKey::from_secret(access_secret.as_ref()),
            access_expiration_ms,
            refresh_encoding_key: EncodingKey::from_secret(refresh_secret.as_ref()),
            refresh_decoding_key: DecodingKey::from_secret(refresh_secret.as_ref()),
            refresh_expiration_ms,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.jwt_access_secret,
            config.jwt_access_expiration_ms,
            &config.jwt_refresh_secret,
            config.jwt_refresh_expiration_ms,
        )
    }

    /// Access Token 발급 (짧은 수명)
    /// Issue an Access Token (short lifetime)
    pub fn create_access_token(&self, email: &str) -> Result<String, AuthError> {
        let claims = Claims::new(email.to_string(), self.access_expiration_ms);

        encode(&Header::default(), &claims, &self.access_encoding_key)
            .map_err(|e| AuthError::Internal(format!("Failed to generate access token: {}", e)))
    }

    /// Refresh Token 발급 (긴 수명, 별도 시크릿)
    /// Issue a Refresh Token (long lifetime, its own secret)
    pub fn create_refresh_token(&self, email: &str) -> Result<String, AuthError> {
        let claims = Claims::new(email.to_string(), self.refresh_expiration_ms);

        encode(&Header::default(), &claims, &self.refresh_encoding_key)
            .map_err(|e| AuthError::Internal(format!("Failed to generate refresh token: {}", e)))
    }

    /// Access Token 검증
    /// Verify an Access Token
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, AuthError> {
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &self.access_decoding_key, &validation)
            .map_err(|_| AuthError::InvalidToken)?;

        Ok(token_data.claims)
    }

    /// Refresh Token 검증 (서명/만료)
    /// Verify a Refresh Token cryptographically
    pub fn verify_refresh_token(&self, token: &str) -> Result<Claims, AuthError> {
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &self.refresh_decoding_key, &validation)
            .map_err(|_| AuthError::InvalidGrant)?;

        Ok(token_data.claims)
    }

    /// Refresh Token 해싱 (DB 저장용)
    /// Digest a refresh token for at-rest storage
    pub fn hash_refresh_token(&self, token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Access Token 만료 시간 (밀리초)
    pub fn access_expiration_ms(&self) -> i64 {
        self.access_expiration_ms
    }

    /// Refresh Token 만료 시간 (밀리초)
    pub fn refresh_expiration_ms(&self) -> i64 {
        self.refresh_expiration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtService {
        JwtService::new("access-secret", 3_600_000, "refresh-secret", 7_200_000)
    }

    #[test]
    fn test_access_token_round_trip() {
        let jwt = service();
        let token = jwt.create_access_token("user@example.com").expect("issue");
        let claims = jwt.verify_access_token(&token).expect("verify");
        assert_eq!(claims.sub, "user@example.com");
    }

    #[test]
    fn test_secrets_are_not_interchangeable() {
        let jwt = service();

        // Access 토큰은 Refresh 키로 검증되지 않아야 한다
        let access = jwt.create_access_token("user@example.com").expect("issue");
        assert!(jwt.verify_refresh_token(&access).is_err());

        let refresh = jwt.create_refresh_token("user@example.com").expect("issue");
        assert!(jwt.verify_access_token(&refresh).is_err());
    }

    #[test]
    fn test_tampered_token_rejected() {
        let jwt = service();
        let mut token = jwt.create_refresh_token("user@example.com").expect("issue");
        token.push('x');
        assert!(jwt.verify_refresh_token(&token).is_err());
    }

    #[test]
    fn test_digest_is_stable_hex() {
        let jwt = service();
        let a = jwt.hash_refresh_token("token");
        let b = jwt.hash_refresh_token("token");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert_ne!(a, jwt.hash_refresh_token("other"));
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Refresh Token 모델 (DB 저장용)
/// 원문 대신 SHA-256 다이제스트가 저장된다
/// Refresh Token row — holds the SHA-256 digest, never the raw token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshToken {
    pub id: i64,
    pub token_hash: String,
    pub user_email: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl RefreshToken {
    /// 만료 여부 확인
    /// Whether the stored expiry has passed
    pub fn is_expired(&self) -> bool {
        self.expires_at < Utc::now()
    }
}

/// Refresh Token 생성 요청 (새 토큰 발급 시)
/// Refresh Token creation request (when issuing a new token)
#[derive(Debug)]
pub struct RefreshTokenCreate {
    pub token_hash: String,
    pub user_email: String,
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_is_expired() {
        let mut token = RefreshToken {
            id: 1,
            token_hash: "digest".to_string(),
            user_email: "user@example.com".to_string(),
            expires_at: Utc::now() + Duration::days(7),
            created_at: Utc::now(),
        };
        assert!(!token.is_expired());

        token.expires_at = Utc::now() - Duration::seconds(1);
        assert!(token.is_expired());
    }
}

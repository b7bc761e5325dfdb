use serde::{Deserialize, Serialize};

/// JWT Claims (토큰에 포함될 데이터)
/// JWT Claims (data to be included in token)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// 사용자 이메일 (subject)
    /// User email (subject)
    pub sub: String,

    /// 발급 시간 (Unix timestamp)
    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// 만료 시간 (Unix timestamp)
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// 새 Claims 생성 (만료 시간 자동 계산)
    /// Create new Claims (expiration computed from a millisecond lifetime)
    pub fn new(email: String, expiration_ms: i64) -> Self {
        let now = chrono::Utc::now().timestamp();

        Self {
            sub: email,
            iat: now,
            exp: now + expiration_ms / 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiration_is_seconds_from_now() {
        let claims = Claims::new("user@example.com".to_string(), 86_400_000);
        assert_eq!(claims.exp - claims.iat, 86_400);
        assert_eq!(claims.sub, "user@example.com");
    }
}

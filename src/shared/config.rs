// 환경 변수 기반 설정
// Environment-backed configuration, read once at startup
use anyhow::{Context, Result};

/// OAuth2 제공자 클라이언트 설정
/// OAuth2 provider client credentials
#[derive(Debug, Clone)]
pub struct OAuthClientConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

/// 애플리케이션 설정
/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// 서버 바인드 주소 (예: "0.0.0.0:8081")
    pub bind_addr: String,

    /// PostgreSQL 연결 문자열
    pub database_url: String,

    /// CORS 허용 Origin
    pub cors_origin: String,

    /// Access Token 시크릿
    pub jwt_access_secret: String,

    /// Access Token 만료 (밀리초, 기본 24시간)
    pub jwt_access_expiration_ms: i64,

    /// Refresh Token 시크릿 (Access와 별도 키)
    pub jwt_refresh_secret: String,

    /// Refresh Token 만료 (밀리초, 기본 7일)
    pub jwt_refresh_expiration_ms: i64,

    pub google: OAuthClientConfig,
    pub naver: OAuthClientConfig,
}

impl Config {
    /// 환경 변수에서 설정 로드
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8081".to_string());

        let database_url = std::env::var("DATABASE_URL")
            .context("DATABASE_URL is not set")?;

        let cors_origin = std::env::var("CORS_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        let jwt_access_secret = std::env::var("JWT_ACCESS_SECRET")
            .unwrap_or_else(|_| "access-secret-change-in-production".to_string());
        let jwt_refresh_secret = std::env::var("JWT_REFRESH_SECRET")
            .unwrap_or_else(|_| "refresh-secret-change-in-production".to_string());

        let jwt_access_expiration_ms = parse_ms("JWT_ACCESS_EXPIRATION_MS", 86_400_000)?;
        let jwt_refresh_expiration_ms = parse_ms("JWT_REFRESH_EXPIRATION_MS", 604_800_000)?;

        Ok(Self {
            bind_addr,
            database_url,
            cors_origin,
            jwt_access_secret,
            jwt_access_expiration_ms,
            jwt_refresh_secret,
            jwt_refresh_expiration_ms,
            google: OAuthClientConfig {
                client_id: std::env::var("GOOGLE_CLIENT_ID").unwrap_or_default(),
                client_secret: std::env::var("GOOGLE_CLIENT_SECRET").unwrap_or_default(),
                redirect_uri: std::env::var("GOOGLE_REDIRECT_URI").unwrap_or_else(|_| {
                    "http://localhost:8081/api/auth/google/callback".to_string()
                }),
            },
            naver: OAuthClientConfig {
                client_id: std::env::var("NAVER_CLIENT_ID").unwrap_or_default(),
                client_secret: std::env::var("NAVER_CLIENT_SECRET").unwrap_or_default(),
                redirect_uri: std::env::var("NAVER_REDIRECT_URI").unwrap_or_else(|_| {
                    "http://localhost:8081/api/auth/naver/callback".to_string()
                }),
            },
        })
    }
}

fn parse_ms(key: &str, default: i64) -> Result<i64> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<i64>()
            .with_context(|| format!("{} must be an integer (milliseconds)", key)),
        Err(_) => Ok(default),
    }
}

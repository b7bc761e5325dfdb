use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::domains::auth::models::{GoogleTokenResponse, NaverTokenResponse, OAuthAttributes};
use crate::domains::user::models::User;
use crate::shared::config::{Config, OAuthClientConfig};
use crate::shared::database::{Database, UserRepository};
use crate::shared::errors::AuthError;
use crate::shared::models::SocialProvider;
use crate::shared::utils::masking;

const GOOGLE_AUTHORIZE_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v3/userinfo";

const NAVER_AUTHORIZE_URL: &str = "https://nid.naver.com/oauth2.0/authorize";
const NAVER_TOKEN_URL: &str = "https://nid.naver.com/oauth2.0/token";
const NAVER_USERINFO_URL: &str = "https://openapi.naver.com/v1/nid/me";

/// OAuth2 로그인 서비스
/// 인가 코드 교환, 사용자 정보 조회, 사용자 저장/업데이트를 담당
/// OAuth2 login service — code exchange, userinfo fetch, user save-or-update
#[derive(Clone)]
pub struct OAuthService {
    db: Database,
    http: reqwest::Client,
    google: OAuthClientConfig,
    naver: OAuthClientConfig,
}

impl OAuthService {
    pub fn new(db: Database, config: &Config) -> Self {
        Self {
            db,
            http: reqwest::Client::new(),
            google: config.google.clone(),
            naver: config.naver.clone(),
        }
    }

    fn client(&self, provider: SocialProvider) -> Result<&OAuthClientConfig, AuthError> {
        match provider {
            SocialProvider::Google => Ok(&self.google),
            SocialProvider::Naver => Ok(&self.naver),
            other => Err(AuthError::UnsupportedProvider(other.as_str().to_string())),
        }
    }

    /// 제공자 인가 페이지 URL 생성 (CSRF 방지용 state 포함)
    /// Build the provider authorization URL with a CSRF state nonce
    pub fn authorize_url(&self, provider: SocialProvider) -> Result<String, AuthError> {
        let client = self.client(provider)?;
        let state = generate_state();

        let url = match provider {
            SocialProvider::Google => reqwest::Url::parse_with_params(
                GOOGLE_AUTHORIZE_URL,
                &[
                    ("client_id", client.client_id.as_str()),
                    ("redirect_uri", client.redirect_uri.as_str()),
                    ("response_type", "code"),
                    ("scope", "openid email profile"),
                    ("state", state.as_str()),
                ],
            ),
            SocialProvider::Naver => reqwest::Url::parse_with_params(
                NAVER_AUTHORIZE_URL,
                &[
                    ("response_type", "code"),
                    ("client_id", client.client_id.as_str()),
                    ("redirect_uri", client.redirect_uri.as_str()),
                    ("state", state.as_str()),
                ],
            ),
            other => return Err(AuthError::UnsupportedProvider(other.as_str().to_string())),
        }
        .map_err(|e| AuthError::Internal(format!("Failed to build authorize url: {}", e)))?;

        Ok(url.into())
    }

    /// OAuth2 로그인 처리
    /// 인가 코드 → 제공자 토큰 → 사용자 정보 → 정규화 → 저장/업데이트
    /// Full login: code → provider token → userinfo → normalize → save-or-update
    pub async fn login(
        &self,
        provider: SocialProvider,
        code: &str,
        state: Option<&str>,
    ) -> Result<User, AuthError> {
        let provider_token = self.exchange_code(provider, code, state).await?;
        let payload = self.fetch_user_info(provider, &provider_token).await?;
        let attributes = OAuthAttributes::of(provider, &payload)?;

        let user = self.save_or_update(attributes).await?;

        tracing::info!(
            "OAuth2 로그인 성공: {} ({})",
            masking::mask_email(&user.email),
            user.social_provider.as_str()
        );

        Ok(user)
    }

    /// 인가 코드를 제공자 Access Token으로 교환
    /// Exchange the authorization code for a provider access token
    async fn exchange_code(
        &self,
        provider: SocialProvider,
        code: &str,
        state: Option<&str>,
    ) -> Result<String, AuthError> {
        let client = self.client(provider)?;

        match provider {
            SocialProvider::Google => {
                let response = self
                    .http
                    .post(GOOGLE_TOKEN_URL)
                    .form(&[
                        ("grant_type", "authorization_code"),
                        ("code", code),
                        ("client_id", client.client_id.as_str()),
                        ("client_secret", client.client_secret.as_str()),
                        ("redirect_uri", client.redirect_uri.as_str()),
                    ])
                    .send()
                    .await
                    .map_err(|e| AuthError::ProviderCallFailed(e.to_string()))?
                    .error_for_status()
                    .map_err(|e| AuthError::ProviderCallFailed(e.to_string()))?;

                let token: GoogleTokenResponse = response
                    .json()
                    .await
                    .map_err(|e| AuthError::ProviderCallFailed(e.to_string()))?;

                Ok(token.access_token)
            }
            SocialProvider::Naver => {
                let response = self
                    .http
                    .post(NAVER_TOKEN_URL)
                    .form(&[
                        ("grant_type", "authorization_code"),
                        ("client_id", client.client_id.as_str()),
                        ("client_secret", client.client_secret.as_str()),
                        ("code", code),
                        ("state", state.unwrap_or_default()),
                    ])
                    .send()
                    .await
                    .map_err(|e| AuthError::ProviderCallFailed(e.to_string()))?
                    .error_for_status()
                    .map_err(|e| AuthError::ProviderCallFailed(e.to_string()))?;

                let token: NaverTokenResponse = response
                    .json()
                    .await
                    .map_err(|e| AuthError::ProviderCallFailed(e.to_string()))?;

                Ok(token.access_token)
            }
            other => Err(AuthError::UnsupportedProvider(other.as_str().to_string())),
        }
    }

    /// 제공자 사용자 정보 조회
    /// Fetch the raw userinfo payload
    async fn fetch_user_info(
        &self,
        provider: SocialProvider,
        provider_token: &str,
    ) -> Result<serde_json::Value, AuthError> {
        let url = match provider {
            SocialProvider::Google => GOOGLE_USERINFO_URL,
            SocialProvider::Naver => NAVER_USERINFO_URL,
            other => return Err(AuthError::UnsupportedProvider(other.as_str().to_string())),
        };

        self.http
            .get(url)
            .bearer_auth(provider_token)
            .send()
            .await
            .map_err(|e| AuthError::ProviderCallFailed(e.to_string()))?
            .error_for_status()
            .map_err(|e| AuthError::ProviderCallFailed(e.to_string()))?
            .json()
            .await
            .map_err(|e| AuthError::ProviderCallFailed(e.to_string()))
    }

    /// 사용자를 DB에 저장하거나 업데이트
    ///
    /// - 이름: DB에 값이 있으면 유지, 없으면 OAuth 정보 사용
    /// - 프로필 이미지: OAuth 정보로 항상 업데이트
    /// - 전화번호: DB에 값이 없을 때만 OAuth 정보 사용
    ///
    /// Save a new user, or merge OAuth attributes into the existing row
    async fn save_or_update(&self, attributes: OAuthAttributes) -> Result<User, AuthError> {
        let repo = UserRepository::new(self.db.pool().clone());

        let existing = repo
            .get_user_by_provider(attributes.provider, &attributes.provider_id)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to fetch user: {}", e)))?;

        let Some(user) = existing else {
            // 신규 사용자 저장
            let user = repo
                .create_user(
                    &attributes.email,
                    attributes.provider,
                    &attributes.provider_id,
                    &attributes.name,
                    attributes.picture.as_deref(),
                    attributes.phone.as_deref(),
                )
                .await
                .map_err(|e| AuthError::DatabaseError(format!("Failed to create user: {}", e)))?;

            tracing::info!("신규 사용자 등록: {}", masking::mask_email(&user.email));
            return Ok(user);
        };

        let new_name = if user.name.trim().is_empty() {
            attributes.name.clone()
        } else {
            user.name.clone()
        };

        let new_picture = attributes.picture.clone();

        let new_phone = match (&user.phone, &attributes.phone) {
            (Some(old), _) if !old.trim().is_empty() => Some(old.clone()),
            (_, Some(new)) if !new.trim().is_empty() => Some(new.clone()),
            (old, _) => old.clone(),
        };

        let changed = new_name != user.name
            || new_picture != user.picture
            || new_phone != user.phone;

        if !changed {
            return Ok(user);
        }

        let updated = repo
            .update_oauth_profile(
                user.id,
                &new_name,
                new_picture.as_deref(),
                new_phone.as_deref(),
            )
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to update user: {}", e)))?;

        tracing::info!(
            "기존 사용자 정보 업데이트: {}",
            masking::mask_email(&updated.email)
        );

        Ok(updated)
    }
}

/// CSRF 방지용 state 값 생성 (32자 랜덤 문자열)
fn generate_state() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

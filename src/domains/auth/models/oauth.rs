use serde::Deserialize;
use serde_json::Value;

use crate::shared::errors::AuthError;
use crate::shared::models::SocialProvider;

/// OAuth2 제공자로부터 받은 사용자 정보를 정규화한 모델
/// Normalized user attributes from an OAuth2 provider
#[derive(Debug, Clone)]
pub struct OAuthAttributes {
    pub name: String,
    pub email: String,
    pub picture: Option<String>,
    pub phone: Option<String>,
    pub provider_id: String,
    pub provider: SocialProvider,
}

impl OAuthAttributes {
    /// 제공자별 응답을 OAuthAttributes로 변환
    /// Normalize a provider userinfo payload
    pub fn of(provider: SocialProvider, attributes: &Value) -> Result<Self, AuthError> {
        match provider {
            SocialProvider::Google => Self::of_google(attributes),
            SocialProvider::Naver => Self::of_naver(attributes),
            other => Err(AuthError::UnsupportedProvider(other.as_str().to_string())),
        }
    }

    /// Google OAuth2 응답 파싱
    /// name / email / picture / sub 는 최상위 키
    fn of_google(attributes: &Value) -> Result<Self, AuthError> {
        let provider_id = required_str(attributes, "sub")?;
        let email = required_str(attributes, "email")?;
        let name = required_str(attributes, "name")?;

        Ok(Self {
            name,
            email,
            picture: optional_str(attributes, "picture"),
            phone: None,
            provider_id,
            provider: SocialProvider::Google,
        })
    }

    /// Naver OAuth2 응답 파싱
    /// 네이버는 response 키 안에 실제 사용자 정보가 있음
    /// email/name/profile_image/mobile은 선택적 (사용자가 제공 거부 가능)
    fn of_naver(attributes: &Value) -> Result<Self, AuthError> {
        let response = attributes.get("response").ok_or_else(|| {
            AuthError::InvalidProviderResponse("네이버 응답에 response 키가 없습니다".to_string())
        })?;

        // id는 필수값
        let provider_id = optional_str(response, "id")
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| {
                AuthError::InvalidProviderResponse("네이버 응답에 id가 없습니다".to_string())
            })?;

        // email이 없으면 기본값 설정
        let email = optional_str(response, "email")
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| format!("no-email-{}@naver.local", provider_id));

        // name이 없으면 기본값 설정
        let name = optional_str(response, "name")
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| "네이버 사용자".to_string());

        Ok(Self {
            name,
            email,
            picture: optional_str(response, "profile_image"),
            // 네이버는 mobile 필드로 전화번호 제공
            phone: optional_str(response, "mobile"),
            provider_id,
            provider: SocialProvider::Naver,
        })
    }
}

fn required_str(value: &Value, key: &str) -> Result<String, AuthError> {
    optional_str(value, key).ok_or_else(|| {
        AuthError::InvalidProviderResponse(format!("응답에 {} 값이 없습니다", key))
    })
}

fn optional_str(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Google 토큰 교환 응답
/// Google token endpoint response
#[derive(Debug, Deserialize)]
pub struct GoogleTokenResponse {
    pub access_token: String,
    pub expires_in: Option<i64>,
    pub refresh_token: Option<String>,
    pub scope: Option<String>,
    pub token_type: Option<String>,
    pub id_token: Option<String>,
}

/// Naver 토큰 교환 응답
/// 네이버는 expires_in을 문자열로 내려준다
#[derive(Debug, Deserialize)]
pub struct NaverTokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub token_type: Option<String>,
    pub expires_in: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_of_google_reads_top_level_attributes() {
        let payload = json!({
            "sub": "109876543210",
            "email": "tester@gmail.com",
            "name": "Tester",
            "picture": "https://lh3.googleusercontent.com/a/photo"
        });

        let attrs = OAuthAttributes::of(SocialProvider::Google, &payload).expect("google payload");
        assert_eq!(attrs.provider, SocialProvider::Google);
        assert_eq!(attrs.provider_id, "109876543210");
        assert_eq!(attrs.email, "tester@gmail.com");
        assert_eq!(attrs.name, "Tester");
        assert_eq!(attrs.picture.as_deref(), Some("https://lh3.googleusercontent.com/a/photo"));
        assert!(attrs.phone.is_none());
    }

    #[test]
    fn test_of_google_requires_email() {
        let payload = json!({ "sub": "1", "name": "Tester" });
        let err = OAuthAttributes::of(SocialProvider::Google, &payload).unwrap_err();
        assert!(matches!(err, AuthError::InvalidProviderResponse(_)));
    }

    #[test]
    fn test_of_naver_reads_nested_response() {
        let payload = json!({
            "resultcode": "00",
            "message": "success",
            "response": {
                "id": "naver-abc",
                "email": "tester@naver.com",
                "name": "테스터",
                "profile_image": "https://phinf.pstatic.net/photo.png",
                "mobile": "010-1234-5678"
            }
        });

        let attrs = OAuthAttributes::of(SocialProvider::Naver, &payload).expect("naver payload");
        assert_eq!(attrs.provider, SocialProvider::Naver);
        assert_eq!(attrs.provider_id, "naver-abc");
        assert_eq!(attrs.email, "tester@naver.com");
        assert_eq!(attrs.phone.as_deref(), Some("010-1234-5678"));
    }

    #[test]
    fn test_of_naver_applies_fallbacks() {
        // email과 name을 제공 거부한 사용자
        let payload = json!({ "response": { "id": "naver-xyz" } });

        let attrs = OAuthAttributes::of(SocialProvider::Naver, &payload).expect("naver payload");
        assert_eq!(attrs.email, "no-email-naver-xyz@naver.local");
        assert_eq!(attrs.name, "네이버 사용자");
    }

    #[test]
    fn test_of_naver_requires_id() {
        let payload = json!({ "response": { "email": "tester@naver.com" } });
        assert!(OAuthAttributes::of(SocialProvider::Naver, &payload).is_err());

        let payload = json!({ "email": "tester@naver.com" });
        assert!(OAuthAttributes::of(SocialProvider::Naver, &payload).is_err());
    }

    #[test]
    fn test_of_rejects_unwired_provider() {
        let payload = json!({});
        let err = OAuthAttributes::of(SocialProvider::Kakao, &payload).unwrap_err();
        assert!(matches!(err, AuthError::UnsupportedProvider(_)));
    }
}

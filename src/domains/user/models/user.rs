use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::models::{Gender, SocialProvider, UserRole, UserStatus};

/// 사용자 엔티티
/// User entity — one row per (email, social_provider)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub social_provider: SocialProvider,
    pub provider_id: Option<String>,
    pub name: String,
    pub picture: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<Gender>,
    pub birth_date: Option<NaiveDate>,
    pub role: UserRole,
    /// 본인인증 여부
    pub is_verified: bool,
    pub status: UserStatus,
    pub suspension_reason: Option<String>,
    pub suspended_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    // 계정 정지
    pub fn suspend(&mut self, reason: String) {
        self.status = UserStatus::Suspended;
        self.suspension_reason = Some(reason);
        self.suspended_at = Some(Utc::now());
        self.updated_at = Utc::now();
    }

    // 계정 활성화
    pub fn activate(&mut self) {
        self.status = UserStatus::Active;
        self.suspension_reason = None;
        self.suspended_at = None;
        self.updated_at = Utc::now();
    }

    // 회원 탈퇴 (Soft Delete)
    pub fn withdraw(&mut self) {
        self.status = UserStatus::Deleted;
        self.deleted_at = Some(Utc::now());
        self.updated_at = Utc::now();
    }

    // 본인 인증 성공 시 정보 업데이트
    pub fn verify(&mut self, name: String, phone: String, birth_date: NaiveDate, gender: Gender) {
        self.name = name;
        self.phone = Some(phone);
        self.birth_date = Some(birth_date);
        self.gender = Some(gender);
        self.is_verified = true;
        self.updated_at = Utc::now();
    }
}

/// 회원 목록 행
/// Admin user list row
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = UserListResponse)]
pub struct UserListResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// 전화번호 (null 가능)
    pub phone: Option<String>,
    pub gender: Option<Gender>,
    pub social_provider: SocialProvider,
    pub status: UserStatus,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserListResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            gender: user.gender,
            social_provider: user.social_provider,
            status: user.status,
            is_verified: user.is_verified,
            created_at: user.created_at,
        }
    }
}

/// 회원 목록 조회 쿼리
/// Admin user list query parameters
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct UserListRequest {
    /// 검색 키워드 (이름/이메일)
    pub keyword: Option<String>,

    /// 정렬 기준 ("field,direction" 형식, 예: "createdAt,desc")
    pub sort: Option<String>,
}

/// 회원 상태 변경 요청
#[derive(Debug, Deserialize, ToSchema)]
#[schema(as = UserStatusChangeRequest)]
pub struct UserStatusChangeRequest {
    /// 변경할 상태 (ACTIVE 또는 SUSPENDED)
    #[schema(example = "SUSPENDED")]
    pub status: UserStatus,

    /// 정지 사유 (SUSPENDED일 때만 필요)
    /// Suspension reason (required when suspending)
    #[schema(example = "부적절한 행위로 인한 정지")]
    pub reason: Option<String>,
}

/// 회원 상태 변경 응답
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = UserStatusResponse)]
pub struct UserStatusResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub status: UserStatus,
    /// 정지 사유 (null 가능)
    pub suspension_reason: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserStatusResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            status: user.status,
            suspension_reason: user.suspension_reason,
            updated_at: user.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 1,
            email: "tester@example.com".to_string(),
            social_provider: SocialProvider::Google,
            provider_id: Some("sub-123".to_string()),
            name: "테스터".to_string(),
            picture: None,
            phone: None,
            gender: None,
            birth_date: None,
            role: UserRole::User,
            is_verified: false,
            status: UserStatus::Active,
            suspension_reason: None,
            suspended_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        }
    }

    #[test]
    fn test_suspend_sets_reason_and_timestamp() {
        let mut user = sample_user();
        user.suspend("사유".to_string());

        assert_eq!(user.status, UserStatus::Suspended);
        assert_eq!(user.suspension_reason.as_deref(), Some("사유"));
        assert!(user.suspended_at.is_some());
    }

    #[test]
    fn test_activate_clears_suspension() {
        let mut user = sample_user();
        user.suspend("사유".to_string());
        user.activate();

        assert_eq!(user.status, UserStatus::Active);
        assert!(user.suspension_reason.is_none());
        assert!(user.suspended_at.is_none());
    }

    #[test]
    fn test_verify_fills_identity_fields() {
        let mut user = sample_user();
        user.verify(
            "김철수".to_string(),
            "010-1234-5678".to_string(),
            NaiveDate::from_ymd_opt(1990, 3, 14).expect("valid date"),
            Gender::Male,
        );

        assert!(user.is_verified);
        assert_eq!(user.name, "김철수");
        assert_eq!(user.phone.as_deref(), Some("010-1234-5678"));
        assert_eq!(user.gender, Some(Gender::Male));
    }

    #[test]
    fn test_withdraw_is_soft_delete() {
        let mut user = sample_user();
        user.withdraw();

        assert_eq!(user.status, UserStatus::Deleted);
        assert!(user.deleted_at.is_some());
    }
}

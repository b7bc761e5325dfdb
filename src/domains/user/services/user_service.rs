use crate::domains::user::models::{
    UserListRequest, UserListResponse, UserStatusChangeRequest, UserStatusResponse,
};
use crate::shared::database::{Database, UserRepository, UserSort};
use crate::shared::errors::AdminError;
use crate::shared::models::{PageRequest, PageResponse, UserStatus};
use crate::shared::utils::masking;

/// 회원 관리 서비스
/// Admin user service
#[derive(Clone)]
pub struct UserService {
    db: Database,
}

impl UserService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// 회원 목록 조회 (키워드 검색 + 정렬 + 페이징)
    /// List users with keyword search, sorting and pagination
    pub async fn get_user_list(
        &self,
        request: UserListRequest,
        page: PageRequest,
    ) -> Result<PageResponse<UserListResponse>, AdminError> {
        let repo = UserRepository::new(self.db.pool().clone());

        let keyword = request
            .keyword
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty());
        let sort = parse_sort(request.sort.as_deref());

        let users = repo
            .list(keyword, sort, page.limit(), page.offset())
            .await
            .map_err(|e| AdminError::DatabaseError(format!("Failed to list users: {}", e)))?;

        let total = repo
            .count(keyword)
            .await
            .map_err(|e| AdminError::DatabaseError(format!("Failed to count users: {}", e)))?;

        let content = users.into_iter().map(UserListResponse::from).collect();

        Ok(PageResponse::new(content, page, total))
    }

    /// 회원 상태 변경
    /// SUSPENDED는 사유가 필수, ACTIVE는 정지 해제,
    /// DELETED는 직접 변경 불가 (탈퇴 흐름 사용)
    pub async fn change_user_status(
        &self,
        user_id: i64,
        request: UserStatusChangeRequest,
    ) -> Result<UserStatusResponse, AdminError> {
        let repo = UserRepository::new(self.db.pool().clone());

        let mut user = repo
            .get_user_by_id(user_id)
            .await
            .map_err(|e| AdminError::DatabaseError(format!("Failed to fetch user: {}", e)))?
            .ok_or(AdminError::UserNotFound { id: user_id })?;

        match request.status {
            UserStatus::Suspended => {
                let reason = request
                    .reason
                    .as_deref()
                    .map(str::trim)
                    .filter(|r| !r.is_empty())
                    .ok_or(AdminError::SuspensionReasonRequired)?;

                user.suspend(reason.to_string());
                tracing::info!(
                    "회원 정지: {} (사유: {})",
                    masking::mask_email(&user.email),
                    reason
                );
            }
            UserStatus::Active => {
                user.activate();
                tracing::info!("회원 활성화: {}", masking::mask_email(&user.email));
            }
            other => {
                return Err(AdminError::UnsupportedStatus(other.as_str().to_string()));
            }
        }

        repo.update_status(&user)
            .await
            .map_err(|e| AdminError::DatabaseError(format!("Failed to update user status: {}", e)))?;

        Ok(user.into())
    }
}

/// sort 파라미터 파싱 ("field,direction" 형식)
/// 형식이 맞지 않거나 허용되지 않은 필드면 기본값(createdAt,desc)으로 대체
/// Parse the "field,direction" sort parameter against the column whitelist
fn parse_sort(raw: Option<&str>) -> UserSort {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return UserSort::CreatedAtDesc;
    };

    let mut parts = raw.split(',');
    let (Some(field), Some(direction), None) = (parts.next(), parts.next(), parts.next()) else {
        tracing::warn!("잘못된 sort 형식: {}. 기본값(createdAt,desc) 사용", raw);
        return UserSort::CreatedAtDesc;
    };

    let ascending = direction.trim().eq_ignore_ascii_case("asc");

    match field.trim() {
        "createdAt" => {
            if ascending {
                UserSort::CreatedAtAsc
            } else {
                UserSort::CreatedAtDesc
            }
        }
        "name" => {
            if ascending {
                UserSort::NameAsc
            } else {
                UserSort::NameDesc
            }
        }
        "email" => {
            if ascending {
                UserSort::EmailAsc
            } else {
                UserSort::EmailDesc
            }
        }
        other => {
            tracing::warn!("허용되지 않은 정렬 필드: {}. 기본값(createdAt,desc) 사용", other);
            UserSort::CreatedAtDesc
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort_known_fields() {
        assert_eq!(parse_sort(Some("createdAt,desc")), UserSort::CreatedAtDesc);
        assert_eq!(parse_sort(Some("createdAt,asc")), UserSort::CreatedAtAsc);
        assert_eq!(parse_sort(Some("name,asc")), UserSort::NameAsc);
        assert_eq!(parse_sort(Some("email,desc")), UserSort::EmailDesc);
    }

    #[test]
    fn test_parse_sort_falls_back_to_default() {
        // 형식 오류
        assert_eq!(parse_sort(Some("createdAt")), UserSort::CreatedAtDesc);
        assert_eq!(parse_sort(Some("a,b,c")), UserSort::CreatedAtDesc);
        // 화이트리스트 밖의 필드 (SQL로 흘러가면 안 됨)
        assert_eq!(
            parse_sort(Some("suspension_reason; DROP TABLE users,asc")),
            UserSort::CreatedAtDesc
        );
        assert_eq!(parse_sort(None), UserSort::CreatedAtDesc);
        assert_eq!(parse_sort(Some("")), UserSort::CreatedAtDesc);
    }

    #[test]
    fn test_parse_sort_unknown_direction_is_desc() {
        assert_eq!(parse_sort(Some("name,sideways")), UserSort::NameDesc);
    }
}

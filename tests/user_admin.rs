// =====================================================
// 회원 관리 통합 테스트
// =====================================================

mod common;
use common::*;

use ticket_api_server::domains::user::models::{UserListRequest, UserStatusChangeRequest};
use ticket_api_server::shared::errors::AdminError;
use ticket_api_server::shared::models::{PageRequest, UserStatus};

/// 테스트: 정지는 사유가 필수다
#[tokio::test]
async fn test_suspend_requires_reason() {
    let ctx = setup_test().await;
    let user = seed_user(&ctx.db, "tester@example.com", "테스터").await;
    let service = &ctx.state.user_state.user_service;

    let result = service
        .change_user_status(
            user.id,
            UserStatusChangeRequest { status: UserStatus::Suspended, reason: None },
        )
        .await;
    assert!(matches!(result, Err(AdminError::SuspensionReasonRequired)));

    // 공백 문자열도 사유로 인정하지 않는다
    let result = service
        .change_user_status(
            user.id,
            UserStatusChangeRequest {
                status: UserStatus::Suspended,
                reason: Some("   ".to_string()),
            },
        )
        .await;
    assert!(matches!(result, Err(AdminError::SuspensionReasonRequired)));

    teardown_test(&ctx.db).await;
}

/// 테스트: 정지 후 활성화하면 사유와 정지 시각이 지워진다
#[tokio::test]
async fn test_suspend_then_activate() {
    let ctx = setup_test().await;
    let user = seed_user(&ctx.db, "tester@example.com", "테스터").await;
    let service = &ctx.state.user_state.user_service;

    let suspended = service
        .change_user_status(
            user.id,
            UserStatusChangeRequest {
                status: UserStatus::Suspended,
                reason: Some("부적절한 행위로 인한 정지".to_string()),
            },
        )
        .await
        .expect("Failed to suspend user");
    assert_eq!(suspended.status, UserStatus::Suspended);
    assert_eq!(
        suspended.suspension_reason.as_deref(),
        Some("부적절한 행위로 인한 정지")
    );

    let activated = service
        .change_user_status(
            user.id,
            UserStatusChangeRequest { status: UserStatus::Active, reason: None },
        )
        .await
        .expect("Failed to activate user");
    assert_eq!(activated.status, UserStatus::Active);
    assert!(activated.suspension_reason.is_none());

    teardown_test(&ctx.db).await;
}

/// 테스트: DELETED는 직접 변경 불가 (탈퇴 흐름 사용)
#[tokio::test]
async fn test_deleted_status_is_rejected() {
    let ctx = setup_test().await;
    let user = seed_user(&ctx.db, "tester@example.com", "테스터").await;

    let result = ctx
        .state
        .user_state
        .user_service
        .change_user_status(
            user.id,
            UserStatusChangeRequest { status: UserStatus::Deleted, reason: None },
        )
        .await;
    assert!(matches!(result, Err(AdminError::UnsupportedStatus(_))));

    teardown_test(&ctx.db).await;
}

/// 테스트: 존재하지 않는 회원은 404 계열 에러
#[tokio::test]
async fn test_unknown_user_not_found() {
    let ctx = setup_test().await;

    let result = ctx
        .state
        .user_state
        .user_service
        .change_user_status(
            9999,
            UserStatusChangeRequest { status: UserStatus::Active, reason: None },
        )
        .await;
    assert!(matches!(result, Err(AdminError::UserNotFound { id: 9999 })));

    teardown_test(&ctx.db).await;
}

/// 테스트: 키워드는 이름과 이메일 양쪽을 검색한다
#[tokio::test]
async fn test_list_keyword_search() {
    let ctx = setup_test().await;
    seed_user(&ctx.db, "kim@example.com", "김철수").await;
    seed_user(&ctx.db, "lee@example.com", "이영희").await;
    seed_user(&ctx.db, "park@example.com", "박민수").await;

    let service = &ctx.state.user_state.user_service;

    // 이름으로 검색
    let page = service
        .get_user_list(
            UserListRequest { keyword: Some("김철수".to_string()), sort: None },
            PageRequest::default(),
        )
        .await
        .expect("Failed to list users");
    assert_eq!(page.total_elements, 1);
    assert_eq!(page.content[0].email, "kim@example.com");

    // 이메일로 검색
    let page = service
        .get_user_list(
            UserListRequest { keyword: Some("lee@".to_string()), sort: None },
            PageRequest::default(),
        )
        .await
        .expect("Failed to list users");
    assert_eq!(page.total_elements, 1);
    assert_eq!(page.content[0].name, "이영희");

    teardown_test(&ctx.db).await;
}

/// 테스트: 정렬과 페이징 (잘못된 sort는 기본값으로 대체)
#[tokio::test]
async fn test_list_sort_and_paging() {
    let ctx = setup_test().await;
    seed_user(&ctx.db, "a@example.com", "가나다").await;
    seed_user(&ctx.db, "b@example.com", "나다라").await;
    seed_user(&ctx.db, "c@example.com", "다라마").await;

    let service = &ctx.state.user_state.user_service;

    // 이메일 오름차순
    let page = service
        .get_user_list(
            UserListRequest { keyword: None, sort: Some("email,asc".to_string()) },
            PageRequest { page: 0, size: 2 },
        )
        .await
        .expect("Failed to list users");
    assert_eq!(page.total_elements, 3);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.content.len(), 2);
    assert_eq!(page.content[0].email, "a@example.com");

    // 두 번째 페이지
    let page = service
        .get_user_list(
            UserListRequest { keyword: None, sort: Some("email,asc".to_string()) },
            PageRequest { page: 1, size: 2 },
        )
        .await
        .expect("Failed to list users");
    assert_eq!(page.content.len(), 1);
    assert_eq!(page.content[0].email, "c@example.com");

    // 잘못된 sort 형식은 기본값(createdAt,desc)으로 대체되어 정상 동작
    let page = service
        .get_user_list(
            UserListRequest { keyword: None, sort: Some("not-a-sort".to_string()) },
            PageRequest::default(),
        )
        .await
        .expect("Malformed sort should fall back to default");
    assert_eq!(page.total_elements, 3);

    teardown_test(&ctx.db).await;
}

// =====================================================
// 공연 수정 규칙 통합 테스트
// =====================================================
// WAITING 상태에서는 전체 수정 가능, 판매 시작 이후에는
// 장르/장소/판매 시작일이 잠기고 예매가 있는 일정은 수정/삭제 불가.

mod common;
use common::*;

use chrono::{Timelike, Utc};
use ticket_api_server::domains::show::models::{
    LocationRequest, ScheduleUpdateRequest, ShowSaleStatusUpdateRequest, ShowUpdateRequest,
};
use ticket_api_server::shared::errors::AdminError;
use ticket_api_server::shared::models::{Genre, SaleStatus, ShowStatus};

/// 공연 하나를 만들고 show_id를 돌려준다
async fn create_show(ctx: &TestContext) -> i64 {
    seed_venue(&ctx.db).await;

    ctx.state
        .show_state
        .show_service
        .create_show(sample_show_request())
        .await
        .expect("Failed to create show")
        .show_id
}

/// 테스트: 등록된 공연은 WAITING 상태이고 날짜가 일정에서 파생된다
#[tokio::test]
async fn test_create_show_derives_dates() {
    let ctx = setup_test().await;
    let show_id = create_show(&ctx).await;

    let detail = ctx
        .state
        .show_state
        .show_service
        .get_show_detail(show_id)
        .await
        .expect("Failed to fetch detail");

    assert_eq!(detail.status, ShowStatus::Waiting);
    assert_eq!(detail.sale_status, SaleStatus::Allowed);
    assert_eq!(detail.schedules.len(), 2);
    // 일정은 날짜/시간 순으로 정렬된다
    assert_eq!(detail.schedules[0].show_date, date(2026, 10, 1));
    assert_eq!(detail.schedules[1].show_date, date(2026, 10, 2));
    // 판매 종료는 마지막 공연일 23:59:59
    assert_eq!(detail.sale_end_date.date_naive(), date(2026, 10, 2));
    assert_eq!(detail.sale_end_date.hour(), 23);
    assert_eq!(detail.sale_end_date.minute(), 59);

    teardown_test(&ctx.db).await;
}

/// 테스트: WAITING 상태에서는 장르/장소/판매 시작일 모두 수정 가능
#[tokio::test]
async fn test_all_fields_editable_while_waiting() {
    let ctx = setup_test().await;
    let show_id = create_show(&ctx).await;

    let request = ShowUpdateRequest {
        title: Some("오페라의 유령".to_string()),
        genre: Some("THEATER".to_string()),
        location: Some(LocationRequest {
            region: "서울".to_string(),
            venue_name: "예술의전당".to_string(),
            hall_name: "오페라극장".to_string(),
        }),
        sale_start_date: Some(Utc::now()),
        ..Default::default()
    };

    ctx.state
        .show_state
        .show_service
        .update_show(show_id, request)
        .await
        .expect("Update should succeed while WAITING");

    let detail = ctx
        .state
        .show_state
        .show_service
        .get_show_detail(show_id)
        .await
        .expect("Failed to fetch detail");
    assert_eq!(detail.title, "오페라의 유령");
    assert_eq!(detail.genre, Genre::Theater);

    teardown_test(&ctx.db).await;
}

/// 테스트: 판매 시작 이후에는 장르/장소/판매 시작일 수정이 거부된다
#[tokio::test]
async fn test_gated_fields_locked_after_waiting() {
    let ctx = setup_test().await;
    let show_id = create_show(&ctx).await;
    set_show_status(&ctx.db, show_id, "ON_SALE").await;

    let service = &ctx.state.show_state.show_service;

    let result = service
        .update_show(
            show_id,
            ShowUpdateRequest { genre: Some("THEATER".to_string()), ..Default::default() },
        )
        .await;
    assert!(matches!(result, Err(AdminError::ImmutableField { field: "장르" })));

    let result = service
        .update_show(
            show_id,
            ShowUpdateRequest {
                location: Some(LocationRequest {
                    region: "서울".to_string(),
                    venue_name: "예술의전당".to_string(),
                    hall_name: "오페라극장".to_string(),
                }),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(AdminError::ImmutableField { field: "장소" })));

    let result = service
        .update_show(
            show_id,
            ShowUpdateRequest { sale_start_date: Some(Utc::now()), ..Default::default() },
        )
        .await;
    assert!(matches!(result, Err(AdminError::ImmutableField { field: "판매 시작일" })));

    // 잠기지 않은 필드는 계속 수정 가능
    service
        .update_show(
            show_id,
            ShowUpdateRequest {
                title: Some("캣츠".to_string()),
                running_time: Some(160),
                cast: Some("박민수".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("Unlocked fields should stay editable");

    teardown_test(&ctx.db).await;
}

/// 테스트: 판매 시작 이후 예매가 있는 일정은 수정/삭제할 수 없다
#[tokio::test]
async fn test_schedule_guard_blocks_reserved_schedules() {
    let ctx = setup_test().await;
    let show_id = create_show(&ctx).await;

    let detail = ctx
        .state
        .show_state
        .show_service
        .get_show_detail(show_id)
        .await
        .expect("Failed to fetch detail");
    let reserved_id = detail.schedules[0].schedule_id;
    let free_id = detail.schedules[1].schedule_id;

    let user = seed_user(&ctx.db, "buyer@example.com", "구매자").await;
    seed_reservation(&ctx.db, user.id, reserved_id, "CONFIRMED").await;

    set_show_status(&ctx.db, show_id, "ON_SALE").await;
    let service = &ctx.state.show_state.show_service;

    // 예매가 있는 일정 삭제 → 거부
    let result = service
        .update_show(
            show_id,
            ShowUpdateRequest {
                deleted_schedule_ids: Some(vec![reserved_id]),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(AdminError::ScheduleHasReservations { .. })));

    // 예매가 있는 일정 수정 → 거부
    let result = service
        .update_show(
            show_id,
            ShowUpdateRequest {
                schedules: Some(vec![ScheduleUpdateRequest {
                    schedule_id: Some(reserved_id),
                    show_date: date(2026, 10, 5),
                    show_time: "20:00".to_string(),
                    ticket_open_time: Utc::now(),
                }]),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(AdminError::ScheduleHasReservations { .. })));

    // 예매가 없는 일정 수정과 새 일정 추가는 허용
    service
        .update_show(
            show_id,
            ShowUpdateRequest {
                schedules: Some(vec![
                    ScheduleUpdateRequest {
                        schedule_id: Some(free_id),
                        show_date: date(2026, 10, 3),
                        show_time: "15:00".to_string(),
                        ticket_open_time: Utc::now(),
                    },
                    ScheduleUpdateRequest {
                        schedule_id: None,
                        show_date: date(2026, 10, 4),
                        show_time: "19:30".to_string(),
                        ticket_open_time: Utc::now(),
                    },
                ]),
                ..Default::default()
            },
        )
        .await
        .expect("Unreserved schedule edits and additions should pass");

    let detail = ctx
        .state
        .show_state
        .show_service
        .get_show_detail(show_id)
        .await
        .expect("Failed to fetch detail");
    assert_eq!(detail.schedules.len(), 3);

    teardown_test(&ctx.db).await;
}

/// 테스트: 취소된 예매만 있는 일정은 수정할 수 있다
#[tokio::test]
async fn test_cancelled_reservations_do_not_block() {
    let ctx = setup_test().await;
    let show_id = create_show(&ctx).await;

    let detail = ctx
        .state
        .show_state
        .show_service
        .get_show_detail(show_id)
        .await
        .expect("Failed to fetch detail");
    let schedule_id = detail.schedules[0].schedule_id;

    let user = seed_user(&ctx.db, "buyer@example.com", "구매자").await;
    seed_reservation(&ctx.db, user.id, schedule_id, "CANCELLED").await;

    set_show_status(&ctx.db, show_id, "ON_SALE").await;

    ctx.state
        .show_state
        .show_service
        .update_show(
            show_id,
            ShowUpdateRequest {
                schedules: Some(vec![ScheduleUpdateRequest {
                    schedule_id: Some(schedule_id),
                    show_date: date(2026, 10, 6),
                    show_time: "18:00".to_string(),
                    ticket_open_time: Utc::now(),
                }]),
                ..Default::default()
            },
        )
        .await
        .expect("Cancelled reservations should not block edits");

    teardown_test(&ctx.db).await;
}

/// 테스트: WAITING 상태의 공연만 삭제할 수 있다 (논리 삭제)
#[tokio::test]
async fn test_delete_requires_waiting() {
    let ctx = setup_test().await;
    let show_id = create_show(&ctx).await;
    let service = &ctx.state.show_state.show_service;

    set_show_status(&ctx.db, show_id, "ON_SALE").await;
    let result = service.delete_show(show_id).await;
    assert!(matches!(result, Err(AdminError::DeleteRequiresWaiting)));

    set_show_status(&ctx.db, show_id, "WAITING").await;
    service.delete_show(show_id).await.expect("Delete should succeed while WAITING");

    // 논리 삭제 후에는 조회되지 않는다
    let result = service.get_show_detail(show_id).await;
    assert!(matches!(result, Err(AdminError::ShowNotFound)));

    teardown_test(&ctx.db).await;
}

/// 테스트: 판매 상태 변경은 라이프사이클 상태와 무관하게 허용된다
#[tokio::test]
async fn test_sale_status_update_is_unconditional() {
    let ctx = setup_test().await;
    let show_id = create_show(&ctx).await;
    let service = &ctx.state.show_state.show_service;

    set_show_status(&ctx.db, show_id, "ON_SALE").await;

    let response = service
        .update_sale_status(
            show_id,
            ShowSaleStatusUpdateRequest { sale_status: SaleStatus::Suspended },
        )
        .await
        .expect("Sale status update should succeed");
    assert_eq!(response.sale_status, SaleStatus::Suspended);

    teardown_test(&ctx.db).await;
}

/// 테스트: 목록 조회 필터 (상태, 키워드)
#[tokio::test]
async fn test_show_list_filters() {
    let ctx = setup_test().await;
    let show_id = create_show(&ctx).await;

    let service = &ctx.state.show_state.show_service;

    let page = service
        .get_show_list(
            ticket_api_server::domains::show::models::ShowListRequest {
                show_status: Some(ShowStatus::Waiting),
                keyword: Some("레미".to_string()),
                ..Default::default()
            },
            Default::default(),
        )
        .await
        .expect("Failed to list shows");
    assert_eq!(page.total_elements, 1);
    assert_eq!(page.content[0].id, show_id);

    let page = service
        .get_show_list(
            ticket_api_server::domains::show::models::ShowListRequest {
                show_status: Some(ShowStatus::OnSale),
                ..Default::default()
            },
            Default::default(),
        )
        .await
        .expect("Failed to list shows");
    assert_eq!(page.total_elements, 0);

    teardown_test(&ctx.db).await;
}

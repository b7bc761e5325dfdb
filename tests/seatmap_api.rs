// =====================================================
// 좌석배치도 관리 통합 테스트
// =====================================================

mod common;
use common::*;

use ticket_api_server::domains::seatmap::models::{
    SeatMapCanvas, SeatMapCreateRequest, SeatMapDuplicateCheckRequest, SeatMapListRequest,
    SeatMapSeat, SeatMapSection,
};
use ticket_api_server::shared::errors::AdminError;
use ticket_api_server::shared::database::VenueRepository;
use ticket_api_server::shared::models::Region;

fn sample_request(region: &str, venue_name: &str, hall_name: &str) -> SeatMapCreateRequest {
    SeatMapCreateRequest {
        region: region.to_string(),
        venue_name: venue_name.to_string(),
        hall_name: hall_name.to_string(),
        canvas: SeatMapCanvas { width: 800, height: 600, seat_radius: 8 },
        sections: vec![
            SeatMapSection {
                section_id: "S1".to_string(),
                name: "VIP".to_string(),
                color: "#ff0000".to_string(),
                price: 150_000,
            },
            SeatMapSection {
                section_id: "S2".to_string(),
                name: "R석".to_string(),
                color: "#00ff00".to_string(),
                price: 120_000,
            },
        ],
        seats: vec![
            SeatMapSeat {
                seat_id: "A1".to_string(),
                section_id: "S1".to_string(),
                row: "A".to_string(),
                number: 1,
                x: 10.0,
                y: 20.0,
            },
            SeatMapSeat {
                seat_id: "A2".to_string(),
                section_id: "S1".to_string(),
                row: "A".to_string(),
                number: 2,
                x: 30.0,
                y: 20.0,
            },
        ],
    }
}

/// 테스트: 등록 후 표시용 ID는 SM%03d 형식이고 중복 등록은 거부된다
#[tokio::test]
async fn test_create_and_reject_duplicate() {
    let ctx = setup_test().await;
    let service = &ctx.state.seatmap_state.seat_map_service;

    let created = service
        .create_seat_map(sample_request("서울", "예술의전당", "오페라극장"))
        .await
        .expect("Failed to create seat map");
    assert_eq!(created.seat_map_id, "SM001");

    let result = service
        .create_seat_map(sample_request("서울", "예술의전당", "오페라극장"))
        .await;
    assert!(matches!(result, Err(AdminError::DuplicateSeatMap { .. })));

    teardown_test(&ctx.db).await;
}

/// 테스트: 등록 시 일치하는 장소가 없으면 새로 만든다
#[tokio::test]
async fn test_create_seat_map_creates_missing_venue() {
    let ctx = setup_test().await;

    ctx.state
        .seatmap_state
        .seat_map_service
        .create_seat_map(sample_request("부산", "부산문화회관", "대극장"))
        .await
        .expect("Failed to create seat map");

    let venue_repo = VenueRepository::new(ctx.db.pool().clone());
    let venue = venue_repo
        .find_by_name_hall_region("부산문화회관", "대극장", Region::Busan)
        .await
        .expect("Failed to look up venue")
        .expect("Venue should have been created");
    // 좌석 수는 배치도의 좌석 개수에서 파생
    assert_eq!(venue.total_seats, Some(2));

    teardown_test(&ctx.db).await;
}

/// 테스트: 상세 조회는 표시용 ID를 받고 저장된 배치도 문서를 돌려준다
#[tokio::test]
async fn test_get_seat_map_by_display_id() {
    let ctx = setup_test().await;
    let service = &ctx.state.seatmap_state.seat_map_service;

    let created = service
        .create_seat_map(sample_request("서울", "예술의전당", "오페라극장"))
        .await
        .expect("Failed to create seat map");

    let detail = service
        .get_seat_map(&created.seat_map_id)
        .await
        .expect("Failed to fetch seat map detail");
    assert_eq!(detail.seat_map_id, created.seat_map_id);
    assert_eq!(detail.region, "서울");
    assert_eq!(detail.sections.as_array().map(Vec::len), Some(2));
    assert_eq!(detail.seats.as_array().map(Vec::len), Some(2));

    // 잘못된 ID 형식
    let result = service.get_seat_map("SM-abc").await;
    assert!(matches!(result, Err(AdminError::InvalidSeatMapId)));

    // 존재하지 않는 ID
    let result = service.get_seat_map("SM999").await;
    assert!(matches!(result, Err(AdminError::SeatMapNotFound)));

    teardown_test(&ctx.db).await;
}

/// 테스트: 중복 검사 (세 필드가 모두 있어야 검사, 아니면 false)
#[tokio::test]
async fn test_duplicate_check() {
    let ctx = setup_test().await;
    let service = &ctx.state.seatmap_state.seat_map_service;

    service
        .create_seat_map(sample_request("서울", "예술의전당", "오페라극장"))
        .await
        .expect("Failed to create seat map");

    let result = service
        .check_duplicate(SeatMapDuplicateCheckRequest {
            region: Some("서울".to_string()),
            venue_name: Some("예술의전당".to_string()),
            hall_name: Some("오페라극장".to_string()),
        })
        .await
        .expect("Failed to check duplicate");
    assert!(result.is_duplicate);

    let result = service
        .check_duplicate(SeatMapDuplicateCheckRequest {
            region: Some("서울".to_string()),
            venue_name: Some("예술의전당".to_string()),
            hall_name: Some("콘서트홀".to_string()),
        })
        .await
        .expect("Failed to check duplicate");
    assert!(!result.is_duplicate);

    // 필드가 빠지면 중복 검사 불가 → false
    let result = service
        .check_duplicate(SeatMapDuplicateCheckRequest {
            region: Some("서울".to_string()),
            venue_name: None,
            hall_name: None,
        })
        .await
        .expect("Failed to check duplicate");
    assert!(!result.is_duplicate);

    teardown_test(&ctx.db).await;
}

/// 테스트: 목록 조회 필터 (한글 지역명, 부분 일치)
#[tokio::test]
async fn test_list_filters() {
    let ctx = setup_test().await;
    let service = &ctx.state.seatmap_state.seat_map_service;

    service
        .create_seat_map(sample_request("서울", "예술의전당", "오페라극장"))
        .await
        .expect("Failed to create seat map");
    service
        .create_seat_map(sample_request("부산", "부산문화회관", "대극장"))
        .await
        .expect("Failed to create seat map");

    let page = service
        .get_seat_map_list(
            SeatMapListRequest { region: Some("서울".to_string()), ..Default::default() },
            Default::default(),
        )
        .await
        .expect("Failed to list seat maps");
    assert_eq!(page.total_elements, 1);
    assert_eq!(page.content[0].region, "서울");

    let page = service
        .get_seat_map_list(
            SeatMapListRequest { venue_name: Some("문화회관".to_string()), ..Default::default() },
            Default::default(),
        )
        .await
        .expect("Failed to list seat maps");
    assert_eq!(page.total_elements, 1);
    assert_eq!(page.content[0].venue_name, "부산문화회관");

    // 지원하지 않는 지역명은 400 계열 에러
    let result = service
        .get_seat_map_list(
            SeatMapListRequest { region: Some("달나라".to_string()), ..Default::default() },
            Default::default(),
        )
        .await;
    assert!(matches!(result, Err(AdminError::UnsupportedRegion(_))));

    teardown_test(&ctx.db).await;
}

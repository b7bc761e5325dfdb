// =====================================================
// 토큰 라이프사이클 통합 테스트
// =====================================================

mod common;
use common::*;

use chrono::{Duration, Utc};
use sqlx::Row;
use ticket_api_server::shared::errors::AuthError;

/// 테스트: 토큰 갱신은 새 Access Token을 발급하고 Refresh Token은 유지한다
#[tokio::test]
async fn test_refresh_returns_new_access_and_same_refresh() {
    let ctx = setup_test().await;
    let auth = &ctx.state.auth_state;

    let issued = auth
        .refresh_token_service
        .issue_token_pair("user@example.com")
        .await
        .expect("Failed to issue token pair");

    let refreshed = auth
        .refresh_token_service
        .refresh_access_token(&issued.refresh_token)
        .await
        .expect("Failed to refresh access token");

    // Refresh Token은 교체되지 않는다
    assert_eq!(refreshed.refresh_token, issued.refresh_token);
    assert_eq!(refreshed.email, "user@example.com");

    // 새 Access Token은 Access 키로 검증 가능해야 한다
    let claims = auth
        .jwt_service
        .verify_access_token(&refreshed.access_token)
        .expect("New access token should validate");
    assert_eq!(claims.sub, "user@example.com");

    // 갱신 후에도 같은 Refresh Token으로 다시 갱신 가능
    auth.refresh_token_service
        .refresh_access_token(&issued.refresh_token)
        .await
        .expect("Refresh token should remain usable");

    teardown_test(&ctx.db).await;
}

/// 테스트: Access 키와 Refresh 키는 서로 호환되지 않는다
#[tokio::test]
async fn test_access_token_is_not_a_valid_refresh_token() {
    let ctx = setup_test().await;
    let auth = &ctx.state.auth_state;

    let issued = auth
        .refresh_token_service
        .issue_token_pair("user@example.com")
        .await
        .expect("Failed to issue token pair");

    let result = auth
        .refresh_token_service
        .refresh_access_token(&issued.access_token)
        .await;

    assert!(matches!(result, Err(AuthError::InvalidGrant)));

    teardown_test(&ctx.db).await;
}

/// 테스트: 서명은 유효하지만 저장소에 없는 Refresh Token은 거부된다
#[tokio::test]
async fn test_refresh_rejects_unknown_token() {
    let ctx = setup_test().await;
    let auth = &ctx.state.auth_state;

    // 저장하지 않고 토큰만 발급
    let ghost_token = auth
        .jwt_service
        .create_refresh_token("ghost@example.com")
        .expect("Failed to create token");

    let result = auth
        .refresh_token_service
        .refresh_access_token(&ghost_token)
        .await;

    assert!(matches!(result, Err(AuthError::RefreshTokenNotFound)));

    teardown_test(&ctx.db).await;
}

/// 테스트: 형식이 깨진 토큰은 서명 검증 단계에서 거부된다
#[tokio::test]
async fn test_refresh_rejects_malformed_token() {
    let ctx = setup_test().await;

    let result = ctx
        .state
        .auth_state
        .refresh_token_service
        .refresh_access_token("not-a-jwt")
        .await;

    assert!(matches!(result, Err(AuthError::InvalidGrant)));

    teardown_test(&ctx.db).await;
}

/// 테스트: 저장된 만료 시간이 지난 토큰은 거부되고 행이 삭제된다
#[tokio::test]
async fn test_refresh_rejects_expired_stored_token() {
    let ctx = setup_test().await;
    let auth = &ctx.state.auth_state;

    let issued = auth
        .refresh_token_service
        .issue_token_pair("user@example.com")
        .await
        .expect("Failed to issue token pair");

    // 저장된 만료 시간을 과거로 이동
    sqlx::query("UPDATE refresh_tokens SET expires_at = $1 WHERE user_email = $2")
        .bind(Utc::now() - Duration::hours(1))
        .bind("user@example.com")
        .execute(ctx.db.pool())
        .await
        .expect("Failed to expire stored token");

    let result = auth
        .refresh_token_service
        .refresh_access_token(&issued.refresh_token)
        .await;
    assert!(matches!(result, Err(AuthError::RefreshTokenExpired)));

    // 만료 감지 시 해당 행은 삭제된다
    let row = sqlx::query("SELECT COUNT(*) AS count FROM refresh_tokens WHERE user_email = $1")
        .bind("user@example.com")
        .fetch_one(ctx.db.pool())
        .await
        .expect("Failed to count tokens");
    let count: i64 = row.get("count");
    assert_eq!(count, 0);

    teardown_test(&ctx.db).await;
}

/// 테스트: 사용자당 Refresh Token은 하나만 유지된다
#[tokio::test]
async fn test_one_refresh_token_per_user() {
    let ctx = setup_test().await;
    let auth = &ctx.state.auth_state;

    let first = auth
        .refresh_token_service
        .issue_token_pair("user@example.com")
        .await
        .expect("Failed to issue first pair");

    // iat가 달라지도록 1초 이상 대기 후 재로그인
    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;

    let second = auth
        .refresh_token_service
        .issue_token_pair("user@example.com")
        .await
        .expect("Failed to issue second pair");
    assert_ne!(first.refresh_token, second.refresh_token);

    // 이전 토큰은 더 이상 저장소에 없다
    let result = auth
        .refresh_token_service
        .refresh_access_token(&first.refresh_token)
        .await;
    assert!(matches!(result, Err(AuthError::RefreshTokenNotFound)));

    // 새 토큰은 유효하다
    auth.refresh_token_service
        .refresh_access_token(&second.refresh_token)
        .await
        .expect("Second refresh token should work");

    let row = sqlx::query("SELECT COUNT(*) AS count FROM refresh_tokens WHERE user_email = $1")
        .bind("user@example.com")
        .fetch_one(ctx.db.pool())
        .await
        .expect("Failed to count tokens");
    let count: i64 = row.get("count");
    assert_eq!(count, 1);

    teardown_test(&ctx.db).await;
}

/// 테스트: 로그아웃하면 Refresh Token이 저장소에서 삭제된다
#[tokio::test]
async fn test_logout_deletes_refresh_token() {
    let ctx = setup_test().await;
    let auth = &ctx.state.auth_state;

    let issued = auth
        .refresh_token_service
        .issue_token_pair("user@example.com")
        .await
        .expect("Failed to issue token pair");

    auth.refresh_token_service
        .delete_by_token(&issued.refresh_token)
        .await
        .expect("Failed to logout");

    let result = auth
        .refresh_token_service
        .refresh_access_token(&issued.refresh_token)
        .await;
    assert!(matches!(result, Err(AuthError::RefreshTokenNotFound)));

    teardown_test(&ctx.db).await;
}

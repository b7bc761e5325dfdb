use axum::http::{HeaderValue, Method};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use ticket_api_server::routes::create_router;
use ticket_api_server::shared::config::Config;
use ticket_api_server::shared::database::Database;
use ticket_api_server::shared::services::AppState;

// Import models for OpenAPI schema
use ticket_api_server::domains::auth::models::*;
use ticket_api_server::domains::seatmap::models::*;
use ticket_api_server::domains::show::models::*;
use ticket_api_server::domains::user::models::*;
use ticket_api_server::shared::models::*;

// OpenAPI 스키마 정의: Swagger 문서 자동 생성
#[derive(OpenApi)]
#[openapi(
    paths(
        ticket_api_server::domains::auth::handlers::auth_handler::authorize,
        ticket_api_server::domains::auth::handlers::auth_handler::callback,
        ticket_api_server::domains::auth::handlers::auth_handler::refresh,
        ticket_api_server::domains::auth::handlers::auth_handler::logout,
        ticket_api_server::domains::auth::handlers::auth_handler::get_current_user,
        ticket_api_server::domains::auth::handlers::auth_handler::verify_token,
        ticket_api_server::domains::show::handlers::show_handler::get_show_list,
        ticket_api_server::domains::show::handlers::show_handler::get_show_detail,
        ticket_api_server::domains::show::handlers::show_handler::create_show,
        ticket_api_server::domains::show::handlers::show_handler::update_show,
        ticket_api_server::domains::show::handlers::show_handler::delete_show,
        ticket_api_server::domains::show::handlers::show_handler::update_sale_status,
        ticket_api_server::domains::show::handlers::venue_handler::get_venue_list,
        ticket_api_server::domains::show::handlers::venue_handler::create_venue,
        ticket_api_server::domains::seatmap::handlers::seat_map_handler::get_seat_map_list,
        ticket_api_server::domains::seatmap::handlers::seat_map_handler::get_seat_map,
        ticket_api_server::domains::seatmap::handlers::seat_map_handler::check_duplicate,
        ticket_api_server::domains::seatmap::handlers::seat_map_handler::create_seat_map,
        ticket_api_server::domains::user::handlers::user_handler::get_user_list,
        ticket_api_server::domains::user::handlers::user_handler::change_user_status
    ),
    components(schemas(
        TokenResponse,
        RefreshTokenRequest,
        LogoutRequest,
        UserInfoResponse,
        VerifyTokenResponse,
        ShowListResponse,
        ShowDetailResponse,
        ShowCreateRequest,
        ShowCreateResponse,
        ShowUpdateRequest,
        ShowUpdateResponse,
        ShowDeleteResponse,
        ShowSaleStatusUpdateRequest,
        ShowSaleStatusUpdateResponse,
        LocationRequest,
        BookingPeriodRequest,
        ScheduleRequest,
        ScheduleUpdateRequest,
        ScheduleInfo,
        SeatPriceInfo,
        VenueCreateRequest,
        VenueCreateResponse,
        VenueListResponse,
        SeatMapCanvas,
        SeatMapSection,
        SeatMapSeat,
        SeatMapListResponse,
        SeatMapDetailResponse,
        SeatMapDuplicateCheckRequest,
        SeatMapDuplicateCheckResponse,
        SeatMapCreateRequest,
        SeatMapCreateResponse,
        UserListResponse,
        UserStatusChangeRequest,
        UserStatusResponse,
        ShowPage,
        SeatMapPage,
        UserPage,
        Genre,
        Region,
        ShowStatus,
        SaleStatus,
        ScheduleStatus,
        UserStatus,
        UserRole,
        SocialProvider,
        Gender
    )),
    modifiers(
        &SecurityAddon
    ),
    tags(
        (name = "Auth", description = "OAuth2/JWT authentication endpoints"),
        (name = "Admin Shows", description = "Show management endpoints"),
        (name = "Admin Venues", description = "Venue management endpoints"),
        (name = "Admin SeatMaps", description = "Seat map management endpoints"),
        (name = "Admin Users", description = "User management endpoints")
    ),
    info(
        title = "Ticketing Admin API Server",
        description = "Admin backend for the ticketing platform",
        version = "1.0.0"
    )
)]
struct ApiDoc;

// Security scheme 정의: Swagger UI에서 "Authorize" 버튼 추가
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() {
    // .env 로드 + 로깅 초기화
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().expect("Failed to load configuration");

    // DB 연결
    let db = Database::new(&config.database_url)
        .await
        .expect("Failed to connect to database");

    db.initialize()
        .await
        .expect("Failed to initialize database");

    // AppState 생성 (모든 Service 초기화)
    let app_state = AppState::new(db, &config);

    // 만료된 Refresh Token 주기적 정리
    let cleanup_service = app_state.auth_state.refresh_token_service.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(3600));
        loop {
            interval.tick().await;
            match cleanup_service.delete_expired().await {
                Ok(count) if count > 0 => {
                    tracing::info!("만료된 Refresh Token {}건 삭제", count);
                }
                Ok(_) => {}
                Err(e) => tracing::warn!("Refresh Token 정리 실패: {}", e),
            }
        }
    });

    // CORS 설정
    let cors = CorsLayer::new()
        .allow_origin(
            config
                .cors_origin
                .parse::<HeaderValue>()
                .expect("Invalid CORS origin"),
        )
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
            axum::http::header::ACCEPT,
        ])
        .allow_credentials(true);

    // Router 생성
    let app = Router::new()
        .merge(create_router())
        .merge(SwaggerUi::new("/api").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(app_state);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind server address");

    tracing::info!("Server running on http://{}", config.bind_addr);
    tracing::info!("Swagger UI available at http://{}/api", config.bind_addr);

    // 서버 실행
    axum::serve(listener, app)
        .await
        .expect("Server error");
}

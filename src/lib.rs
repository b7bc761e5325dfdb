// 공연 예매 플랫폼 관리자 백엔드
// Ticketing platform admin backend
//
// 공연/장소/좌석배치도 CRUD, 회원 관리, OAuth2/JWT 인증을 제공한다.
pub mod domains;
pub mod routes;
pub mod shared;

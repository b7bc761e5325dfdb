/// 공유 유틸리티 모듈
/// Shared Utilities Module
///
/// 역할:
/// - 로그 마스킹 (이메일, 토큰 등 민감정보)
pub mod masking;

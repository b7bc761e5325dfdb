// 공용 도메인 enum 모음
// Shared domain enums (stored as TEXT in PostgreSQL)
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 공연 장르
/// Show genre
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Genre {
    Musical,
    Concert,
    Theater,
    Classic,
    Dance,
}

impl Genre {
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Musical => "MUSICAL",
            Genre::Concert => "CONCERT",
            Genre::Theater => "THEATER",
            Genre::Classic => "CLASSIC",
            Genre::Dance => "DANCE",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "MUSICAL" => Some(Genre::Musical),
            "CONCERT" => Some(Genre::Concert),
            "THEATER" => Some(Genre::Theater),
            "CLASSIC" => Some(Genre::Classic),
            "DANCE" => Some(Genre::Dance),
            _ => None,
        }
    }
}

/// 공연 상태
/// Show lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShowStatus {
    /// 대기 (모든 필드 수정 가능)
    Waiting,
    /// 판매중
    OnSale,
    /// 매진
    SoldOut,
    /// 종료
    Ended,
    /// 중단
    Suspended,
}

impl ShowStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShowStatus::Waiting => "WAITING",
            ShowStatus::OnSale => "ON_SALE",
            ShowStatus::SoldOut => "SOLD_OUT",
            ShowStatus::Ended => "ENDED",
            ShowStatus::Suspended => "SUSPENDED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "WAITING" => Some(ShowStatus::Waiting),
            "ON_SALE" => Some(ShowStatus::OnSale),
            "SOLD_OUT" => Some(ShowStatus::SoldOut),
            "ENDED" => Some(ShowStatus::Ended),
            "SUSPENDED" => Some(ShowStatus::Suspended),
            _ => None,
        }
    }
}

/// 판매 상태
/// Sale status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SaleStatus {
    Allowed,
    Suspended,
}

impl SaleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaleStatus::Allowed => "ALLOWED",
            SaleStatus::Suspended => "SUSPENDED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "ALLOWED" => Some(SaleStatus::Allowed),
            "SUSPENDED" => Some(SaleStatus::Suspended),
            _ => None,
        }
    }
}

/// 공연 일정 상태
/// Schedule status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleStatus {
    BeforeOpen,
    Open,
    SoldOut,
    Cancelled,
}

impl ScheduleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleStatus::BeforeOpen => "BEFORE_OPEN",
            ScheduleStatus::Open => "OPEN",
            ScheduleStatus::SoldOut => "SOLD_OUT",
            ScheduleStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "BEFORE_OPEN" => Some(ScheduleStatus::BeforeOpen),
            "OPEN" => Some(ScheduleStatus::Open),
            "SOLD_OUT" => Some(ScheduleStatus::SoldOut),
            "CANCELLED" => Some(ScheduleStatus::Cancelled),
            _ => None,
        }
    }
}

/// 지역
/// Region (Korean display label attached)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Region {
    Seoul,
    Gyeonggi,
    Incheon,
    Busan,
    Daegu,
    Daejeon,
    Gwangju,
    Ulsan,
    Sejong,
    Gangwon,
    Chungbuk,
    Chungnam,
    Jeonbuk,
    Jeonnam,
    Gyeongbuk,
    Gyeongnam,
    Jeju,
}

impl Region {
    pub const ALL: [Region; 17] = [
        Region::Seoul,
        Region::Gyeonggi,
        Region::Incheon,
        Region::Busan,
        Region::Daegu,
        Region::Daejeon,
        Region::Gwangju,
        Region::Ulsan,
        Region::Sejong,
        Region::Gangwon,
        Region::Chungbuk,
        Region::Chungnam,
        Region::Jeonbuk,
        Region::Jeonnam,
        Region::Gyeongbuk,
        Region::Gyeongnam,
        Region::Jeju,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Seoul => "SEOUL",
            Region::Gyeonggi => "GYEONGGI",
            Region::Incheon => "INCHEON",
            Region::Busan => "BUSAN",
            Region::Daegu => "DAEGU",
            Region::Daejeon => "DAEJEON",
            Region::Gwangju => "GWANGJU",
            Region::Ulsan => "ULSAN",
            Region::Sejong => "SEJONG",
            Region::Gangwon => "GANGWON",
            Region::Chungbuk => "CHUNGBUK",
            Region::Chungnam => "CHUNGNAM",
            Region::Jeonbuk => "JEONBUK",
            Region::Jeonnam => "JEONNAM",
            Region::Gyeongbuk => "GYEONGBUK",
            Region::Gyeongnam => "GYEONGNAM",
            Region::Jeju => "JEJU",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.as_str() == s)
    }

    /// 한글 지역명
    /// Korean display label
    pub fn label(&self) -> &'static str {
        match self {
            Region::Seoul => "서울",
            Region::Gyeonggi => "경기",
            Region::Incheon => "인천",
            Region::Busan => "부산",
            Region::Daegu => "대구",
            Region::Daejeon => "대전",
            Region::Gwangju => "광주",
            Region::Ulsan => "울산",
            Region::Sejong => "세종",
            Region::Gangwon => "강원",
            Region::Chungbuk => "충북",
            Region::Chungnam => "충남",
            Region::Jeonbuk => "전북",
            Region::Jeonnam => "전남",
            Region::Gyeongbuk => "경북",
            Region::Gyeongnam => "경남",
            Region::Jeju => "제주",
        }
    }

    /// 한글 지역명으로 Region 찾기 (좌석배치도 요청은 한글 지역명을 사용)
    /// Look up a region by its Korean label (seat map requests carry the label)
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.label() == label)
    }
}

/// 사용자 상태
/// User account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Active,
    Deleted,
    Suspended,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "ACTIVE",
            UserStatus::Deleted => "DELETED",
            UserStatus::Suspended => "SUSPENDED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "ACTIVE" => Some(UserStatus::Active),
            "DELETED" => Some(UserStatus::Deleted),
            "SUSPENDED" => Some(UserStatus::Suspended),
            _ => None,
        }
    }
}

/// 사용자 권한
/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "USER",
            UserRole::Admin => "ADMIN",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "USER" => Some(UserRole::User),
            "ADMIN" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

/// 소셜 로그인 제공자
/// Social login provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SocialProvider {
    Kakao,
    Naver,
    Google,
}

impl SocialProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialProvider::Kakao => "KAKAO",
            SocialProvider::Naver => "NAVER",
            SocialProvider::Google => "GOOGLE",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "KAKAO" => Some(SocialProvider::Kakao),
            "NAVER" => Some(SocialProvider::Naver),
            "GOOGLE" => Some(SocialProvider::Google),
            _ => None,
        }
    }
}

/// 성별
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Other => "OTHER",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "MALE" => Some(Gender::Male),
            "FEMALE" => Some(Gender::Female),
            "OTHER" => Some(Gender::Other),
            _ => None,
        }
    }
}

/// 예매 상태
/// Reservation status (record label only; no reservation engine exists)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    /// 결제 대기
    Pending,
    /// 예매 확정
    Confirmed,
    /// 예매 취소
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "PENDING",
            ReservationStatus::Confirmed => "CONFIRMED",
            ReservationStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(ReservationStatus::Pending),
            "CONFIRMED" => Some(ReservationStatus::Confirmed),
            "CANCELLED" => Some(ReservationStatus::Cancelled),
            _ => None,
        }
    }
}

/// 좌석 상태 (라벨만 존재)
/// Seat status (label only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatStatus {
    Available,
    Locked,
    Reserved,
    Sold,
}

/// 대기열 상태 (라벨만 존재)
/// Queue status (label only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueueStatus {
    Waiting,
    Ready,
    Expired,
    Completed,
}

/// 결제 상태 (라벨만 존재)
/// Payment status (label only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Cancelled,
}

/// 결제 수단 (라벨만 존재)
/// Payment method (label only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Card,
    VirtualAccount,
    EasyPay,
    Transfer,
    Toss,
}

/// 관리자 작업 유형
/// Admin action kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdminAction {
    Create,
    Update,
    Delete,
    ForceCancel,
    ForceWithdrawal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_status_round_trip() {
        for s in ["WAITING", "ON_SALE", "SOLD_OUT", "ENDED", "SUSPENDED"] {
            let parsed = ShowStatus::from_str(s).expect("known status");
            assert_eq!(parsed.as_str(), s);
        }
        assert!(ShowStatus::from_str("CANCELLED").is_none());
    }

    #[test]
    fn test_region_label_lookup() {
        assert_eq!(Region::from_label("서울"), Some(Region::Seoul));
        assert_eq!(Region::from_label("경기"), Some(Region::Gyeonggi));
        assert_eq!(Region::from_label("제주"), Some(Region::Jeju));
        assert_eq!(Region::from_label("화성"), None);
    }

    #[test]
    fn test_region_serde_uses_code_not_label() {
        let json = serde_json::to_string(&Region::Seoul).expect("serialize");
        assert_eq!(json, "\"SEOUL\"");
    }

    #[test]
    fn test_social_provider_from_str() {
        assert_eq!(SocialProvider::from_str("GOOGLE"), Some(SocialProvider::Google));
        assert_eq!(SocialProvider::from_str("NAVER"), Some(SocialProvider::Naver));
        assert_eq!(SocialProvider::from_str("APPLE"), None);
    }
}

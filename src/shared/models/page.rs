// 페이징 공통 모델
// Shared pagination models
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// 페이징 요청 (쿼리 파라미터)
/// Pagination query parameters (0-based page index)
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
pub struct PageRequest {
    /// 페이지 번호 (0부터 시작)
    /// Page index, starting at 0
    #[serde(default)]
    pub page: i64,

    /// 페이지 크기
    /// Page size
    #[serde(default = "default_page_size")]
    pub size: i64,
}

fn default_page_size() -> i64 {
    10
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 0, size: default_page_size() }
    }
}

impl PageRequest {
    /// SQL OFFSET 계산 (음수 입력은 0으로 클램프)
    pub fn offset(&self) -> i64 {
        self.page.max(0) * self.limit()
    }

    /// SQL LIMIT 계산
    pub fn limit(&self) -> i64 {
        if self.size <= 0 { default_page_size() } else { self.size }
    }
}

/// 페이징 응답 모델
/// Pagination response wrapper
#[derive(Debug, Serialize, ToSchema)]
#[aliases(
    ShowPage = PageResponse<crate::domains::show::models::ShowListResponse>,
    SeatMapPage = PageResponse<crate::domains::seatmap::models::SeatMapListResponse>,
    UserPage = PageResponse<crate::domains::user::models::UserListResponse>
)]
pub struct PageResponse<T> {
    /// 페이지 내용
    pub content: Vec<T>,

    /// 페이지 번호 (0부터 시작)
    pub page: i64,

    /// 페이지 크기
    pub size: i64,

    /// 전체 항목 수
    pub total_elements: i64,

    /// 전체 페이지 수
    pub total_pages: i64,
}

impl<T> PageResponse<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: i64) -> Self {
        let size = request.limit();
        let total_pages = if total_elements == 0 {
            0
        } else {
            (total_elements + size - 1) / size
        };

        Self {
            content,
            page: request.page.max(0),
            size,
            total_elements,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        let req = PageRequest { page: 0, size: 10 };
        let page: PageResponse<i32> = PageResponse::new(vec![], req, 31);
        assert_eq!(page.total_pages, 4);

        let page: PageResponse<i32> = PageResponse::new(vec![], req, 30);
        assert_eq!(page.total_pages, 3);

        let page: PageResponse<i32> = PageResponse::new(vec![], req, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_offset_and_limit_defaults() {
        let req = PageRequest { page: 3, size: 20 };
        assert_eq!(req.offset(), 60);

        // 잘못된 크기는 기본값으로 대체
        let req = PageRequest { page: 2, size: 0 };
        assert_eq!(req.limit(), 10);
        assert_eq!(req.offset(), 20);

        let req = PageRequest { page: -1, size: 10 };
        assert_eq!(req.offset(), 0);
    }
}

//! Response bodies.
//!
//! Doctors serialize directly from [`Doctor`]; list responses wrap a page of
//! them with the pagination echo.

use clinic_persistence::types::{Doctor, ListFilter, Page};
use serde::Serialize;

/// Body of a list response.
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    /// Doctors on the requested page.
    pub data: Vec<Doctor>,
    /// The requested page and the unpaged total.
    pub pagination: PaginationInfo,
}

/// Pagination echo for a list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    /// 1-based page number.
    pub page: u64,
    /// Rows per page.
    pub page_size: u32,
    /// Rows matching the filter.
    pub total: u64,
}

impl ListResponse {
    /// Builds the response for a page fetched with `filter`.
    pub fn new(page: Page<Doctor>, filter: &ListFilter) -> Self {
        Self {
            pagination: PaginationInfo {
                page: filter.page,
                page_size: filter.page_size,
                total: page.total,
            },
            data: page.items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_uses_camel_case() {
        let filter = ListFilter::new(2, 5);
        let response = ListResponse::new(Page::new(Vec::new(), 7), &filter);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["data"], serde_json::json!([]));
        assert_eq!(json["pagination"]["page"], 2);
        assert_eq!(json["pagination"]["pageSize"], 5);
        assert_eq!(json["pagination"]["total"], 7);
    }
}

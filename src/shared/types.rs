use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::shared::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub meta: Option<Meta>,
    pub errors: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Meta {
    pub total: i64,
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Standard pagination query parameters for list endpoints.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// Page number (1-indexed, default: 1)
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,

    /// Number of items per page (default: 10, max: 100)
    #[serde(default = "default_page_size")]
    #[param(minimum = 1, maximum = 100)]
    pub page_size: i64,
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationQuery {
    /// Calculate SQL OFFSET from page number. Saturates instead of
    /// overflowing on absurd page numbers; such pages are simply empty.
    pub fn offset(&self) -> i64 {
        (self.page.max(1) - 1).saturating_mul(self.limit())
    }

    /// Get clamped page_size (respects MAX_PAGE_SIZE)
    pub fn limit(&self) -> i64 {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>, meta: Option<Meta>) -> Self {
        Self {
            success: true,
            data,
            message,
            meta,
            errors: None,
        }
    }

    pub fn error(message: Option<String>, errors: Option<Vec<String>>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message,
            meta: None,
            errors,
        }
    }
}

/// Envelope for delete endpoints, which carry only a message
pub fn deleted(entity: &str) -> ApiResponse<()> {
    ApiResponse::success(None, Some(format!("{} deleted", entity)), None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_offset_and_limit() {
        let query = PaginationQuery {
            page: 3,
            page_size: 20,
        };
        assert_eq!(query.limit(), 20);
        assert_eq!(query.offset(), 40);
    }

    #[test]
    fn test_pagination_clamps_bad_values() {
        let query = PaginationQuery {
            page: 0,
            page_size: 1000,
        };
        assert_eq!(query.limit(), MAX_PAGE_SIZE);
        assert_eq!(query.offset(), 0);

        let query = PaginationQuery {
            page: 2,
            page_size: 0,
        };
        assert_eq!(query.limit(), 1);
        assert_eq!(query.offset(), 1);
    }

    #[test]
    fn test_pagination_offset_saturates_on_huge_page() {
        let query = PaginationQuery {
            page: i64::MAX / 2,
            page_size: 100,
        };
        assert_eq!(query.offset(), i64::MAX);

        let query = PaginationQuery {
            page: i64::MAX,
            page_size: 1,
        };
        assert_eq!(query.offset(), i64::MAX - 1);
    }

    #[test]
    fn test_pagination_reads_camel_case() {
        let query: PaginationQuery =
            serde_json::from_value(serde_json::json!({ "page": 2, "pageSize": 5 })).unwrap();
        assert_eq!(query.page, 2);
        assert_eq!(query.page_size, 5);

        let defaults: PaginationQuery = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(defaults.page, 1);
        assert_eq!(defaults.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_error_envelope() {
        let body = ApiResponse::<()>::error(Some("Club not found".into()), None);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Club not found");
        assert!(json["data"].is_null());
    }
}

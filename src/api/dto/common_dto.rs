//! Shared DTO types used across multiple endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Pagination query parameters for list endpoints.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    /// Page number (1-indexed). Defaults to 1.
    #[serde(default = "default_page")]
    pub page: u32,
    /// Items per page. Falls back to the configured default when absent.
    #[serde(default)]
    pub per_page: Option<u32>,
}

/// Pagination metadata included in list responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Current page number.
    pub page: u32,
    /// Items per page.
    pub per_page: u32,
    /// Total number of items.
    pub total: u32,
    /// Total number of pages.
    pub total_pages: u32,
}

fn default_page() -> u32 {
    1
}

impl PaginationParams {
    /// Resolves `(page, per_page)`: page at least 1, missing `per_page`
    /// falls back to `default_per_page`, and the result is clamped to
    /// `[1, max_per_page]`.
    #[must_use]
    pub fn resolve(&self, default_per_page: u32, max_per_page: u32) -> (u32, u32) {
        let page = self.page.max(1);
        let per_page = self
            .per_page
            .unwrap_or(default_per_page)
            .clamp(1, max_per_page);
        (page, per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_enforces_bounds() {
        let params = PaginationParams {
            page: 0,
            per_page: Some(500),
        };
        assert_eq!(params.resolve(20, 100), (1, 100));
    }

    #[test]
    fn resolve_falls_back_to_default_per_page() {
        let params = PaginationParams {
            page: 3,
            per_page: None,
        };
        assert_eq!(params.resolve(20, 100), (3, 20));
    }
}

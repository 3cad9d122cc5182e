//! Application Configuration

use crate::domain::value_objects::Pagination;
use chrono::Duration;

/// Ledger application configuration
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Page size when none is requested
    pub default_per_page: i64,
    /// Upper bound on the page size
    pub max_per_page: i64,
    /// Look-back window for the "recent" count in statistics
    pub recent_window: Duration,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            default_per_page: 20,
            max_per_page: 100,
            recent_window: Duration::hours(24),
        }
    }
}

impl LedgerConfig {
    /// Page at least 1, page size clamped into `1..=max_per_page`
    pub fn pagination(&self, page: Option<i64>, per_page: Option<i64>) -> Pagination {
        Pagination {
            page: page.unwrap_or(1).max(1),
            per_page: per_page
                .unwrap_or(self.default_per_page)
                .clamp(1, self.max_per_page),
        }
    }
}

//! Value Objects

/// Page position, 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub per_page: i64,
}

impl Pagination {
    /// Rows to skip; saturates for pages past any real history
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page)
    }
}

/// Which records an address history covers
#[derive(Debug, Clone)]
pub struct HistoryFilter {
    /// Matched against sender and receiver
    pub address: String,
    /// Exact transaction type, all types when None
    pub transaction_type: Option<String>,
    pub pagination: Pagination,
}

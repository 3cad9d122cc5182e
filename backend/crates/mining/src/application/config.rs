//! Application Configuration
//!
//! Configuration for the mining application layer.

use crate::domain::value_objects::NetworkModel;

/// Mining application configuration
#[derive(Debug, Clone)]
pub struct MiningConfig {
    /// Constants used by the profitability calculator
    pub network: NetworkModel,
    /// History page size when none is requested
    pub history_default_limit: i64,
    /// Upper bound on the history page size
    pub history_max_limit: i64,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            network: NetworkModel::default(),
            history_default_limit: 20,
            history_max_limit: 100,
        }
    }
}

impl MiningConfig {
    /// Clamp a requested history size into `1..=history_max_limit`
    pub fn history_limit(&self, requested: Option<i64>) -> i64 {
        requested
            .unwrap_or(self.history_default_limit)
            .clamp(1, self.history_max_limit)
    }
}

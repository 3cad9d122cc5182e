//! Application Configuration

/// Staking application configuration
#[derive(Debug, Clone)]
pub struct StakingConfig {
    /// Ceiling on the displayed APR, percent
    pub apr_cap: f64,
    /// History length when none is requested
    pub history_default_days: i64,
    pub history_max_days: i64,
}

impl Default for StakingConfig {
    fn default() -> Self {
        Self {
            apr_cap: 80.0,
            history_default_days: 30,
            history_max_days: 365,
        }
    }
}

impl StakingConfig {
    /// Clamp a requested history length into `1..=history_max_days`
    pub fn history_days(&self, requested: Option<i64>) -> u32 {
        requested
            .unwrap_or(self.history_default_days)
            .clamp(1, self.history_max_days) as u32
    }
}

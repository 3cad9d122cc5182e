//! Domain Services

use crate::domain::entities::{HistoryPoint, StakingStats};
use chrono::{Datelike, Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// APR shown to visitors: rewards over stake, capped
///
/// Falls back to the stored APR when nothing is staked. Never persisted.
pub fn display_apr(stats: &StakingStats, cap: f64) -> f64 {
    if stats.total_staked > 0.0 {
        (stats.total_rewards * 100.0 / stats.total_staked).min(cap)
    } else {
        stats.current_apr
    }
}

/// Figures for a single calendar day, identical on every call
pub fn history_point(date: NaiveDate) -> HistoryPoint {
    let mut rng = StdRng::seed_from_u64(date.num_days_from_ce() as u64);
    HistoryPoint {
        date: date.format("%Y-%m-%d").to_string(),
        total_staked: 1_200_000 + rng.random_range(-50_000..=50_000),
        total_rewards: 850_000 + rng.random_range(-20_000..=20_000),
        active_stakers: 2_800 + rng.random_range(-100..=100),
        apr: 65 + rng.random_range(-5..=10),
    }
}

/// `days` consecutive days ending at `today`, oldest first
pub fn pool_history(today: NaiveDate, days: u32) -> Vec<HistoryPoint> {
    (0..days as u64)
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(back)))
        .map(history_point)
        .collect()
}

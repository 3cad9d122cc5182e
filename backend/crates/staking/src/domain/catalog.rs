//! Static showcase tables

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub address: &'static str,
    pub amount_staked: &'static str,
    pub rewards_earned: &'static str,
    pub apr: &'static str,
}

pub const LEADERBOARD: &[LeaderboardEntry] = &[
    LeaderboardEntry {
        rank: 1,
        address: "0x1234...5678",
        amount_staked: "500000",
        rewards_earned: "75000",
        apr: "65%",
    },
    LeaderboardEntry {
        rank: 2,
        address: "0x2345...6789",
        amount_staked: "350000",
        rewards_earned: "52500",
        apr: "65%",
    },
    LeaderboardEntry {
        rank: 3,
        address: "0x3456...7890",
        amount_staked: "250000",
        rewards_earned: "37500",
        apr: "65%",
    },
    LeaderboardEntry {
        rank: 4,
        address: "0x4567...8901",
        amount_staked: "200000",
        rewards_earned: "30000",
        apr: "65%",
    },
    LeaderboardEntry {
        rank: 5,
        address: "0x5678...9012",
        amount_staked: "150000",
        rewards_earned: "22500",
        apr: "65%",
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct UserStake {
    pub pool_id: u32,
    pub amount: &'static str,
    pub reward_debt: &'static str,
    pub deposit_time: &'static str,
    pub lock_end_time: &'static str,
    pub pending_rewards: &'static str,
}

/// Stakes shown for every address
pub const USER_STAKES: &[UserStake] = &[UserStake {
    pool_id: 1,
    amount: "15000",
    reward_debt: "2500",
    deposit_time: "2024-01-15T10:30:00",
    lock_end_time: "2024-01-22T10:30:00",
    pending_rewards: "3200",
}];

/// Sum of a decimal-string column; unparsable entries count as zero
pub fn sum_amounts<'a>(values: impl IntoIterator<Item = &'a str>) -> f64 {
    values
        .into_iter()
        .map(|v| v.parse::<f64>().unwrap_or(0.0))
        .sum()
}

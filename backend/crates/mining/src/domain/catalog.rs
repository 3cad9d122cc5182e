//! Static catalogs served as-is: mining hardware and network difficulty.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Equipment {
    pub id: &'static str,
    pub name: &'static str,
    /// TH/s
    pub hashrate: u32,
    /// Watts
    pub power_consumption: u32,
    /// USD
    pub price: u32,
    /// J/TH
    pub efficiency: f64,
    pub algorithm: &'static str,
    /// Estimated USD per day
    pub profitability: f64,
    pub availability: &'static str,
}

pub const EQUIPMENT: &[Equipment] = &[
    Equipment {
        id: "antminer_s19",
        name: "Antminer S19 Pro",
        hashrate: 110,
        power_consumption: 3250,
        price: 2500,
        efficiency: 29.5,
        algorithm: "SHA-256",
        profitability: 15.5,
        availability: "In Stock",
    },
    Equipment {
        id: "whatsminer_m30s",
        name: "WhatsMiner M30S++",
        hashrate: 112,
        power_consumption: 3472,
        price: 2200,
        efficiency: 31.0,
        algorithm: "SHA-256",
        profitability: 14.8,
        availability: "In Stock",
    },
    Equipment {
        id: "antminer_s9",
        name: "Antminer S9",
        hashrate: 14,
        power_consumption: 1372,
        price: 300,
        efficiency: 98.0,
        algorithm: "SHA-256",
        profitability: 1.2,
        availability: "Used",
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct NetworkDifficulty {
    pub difficulty: f64,
    /// Percent
    pub difficulty_change: f64,
    pub next_difficulty_estimate: f64,
    pub blocks_until_adjustment: u32,
    /// Seconds
    pub estimated_adjustment_time: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DifficultyTable {
    pub bitcoin: NetworkDifficulty,
    pub greenhash: NetworkDifficulty,
}

pub const DIFFICULTY: DifficultyTable = DifficultyTable {
    bitcoin: NetworkDifficulty {
        difficulty: 25_000_000_000_000.0,
        difficulty_change: -2.5,
        next_difficulty_estimate: 24_375_000_000_000.0,
        blocks_until_adjustment: 150,
        estimated_adjustment_time: 1_080_000,
    },
    greenhash: NetworkDifficulty {
        difficulty: 1.0,
        difficulty_change: 0.0,
        next_difficulty_estimate: 1.0,
        blocks_until_adjustment: 0,
        estimated_adjustment_time: 0,
    },
};

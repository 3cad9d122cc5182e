//! Unit tests for staking crate

#[cfg(test)]
mod support {
    use crate::domain::entities::{StakingStats, StatsDefaults, StatsUpdate};
    use crate::domain::repository::StakingStatsRepository;
    use crate::error::{StakingError, StakingResult};
    use std::sync::{Arc, Mutex};

    /// In-memory singleton
    #[derive(Clone, Default)]
    pub struct MemoryStakingStatsRepository {
        pub row: Arc<Mutex<Option<StakingStats>>>,
        pub creates: Arc<Mutex<usize>>,
        pub fail: bool,
    }

    impl MemoryStakingStatsRepository {
        fn ensure(&self, defaults: &StatsDefaults) -> StakingResult<StakingStats> {
            if self.fail {
                return Err(StakingError::Database(sqlx::Error::PoolTimedOut));
            }
            let mut row = self.row.lock().unwrap();
            let stats = row.get_or_insert_with(|| {
                *self.creates.lock().unwrap() += 1;
                defaults.into_stats(chrono::Utc::now())
            });
            Ok(stats.clone())
        }
    }

    impl StakingStatsRepository for MemoryStakingStatsRepository {
        async fn get_or_create(&self, defaults: &StatsDefaults) -> StakingResult<StakingStats> {
            self.ensure(defaults)
        }

        async fn update(
            &self,
            update: &StatsUpdate,
            defaults: &StatsDefaults,
        ) -> StakingResult<StakingStats> {
            let mut stats = self.ensure(defaults)?;
            update.apply(&mut stats, chrono::Utc::now());
            *self.row.lock().unwrap() = Some(stats.clone());
            Ok(stats)
        }
    }
}

#[cfg(test)]
mod config_tests {
    use crate::application::config::StakingConfig;

    #[test]
    fn test_history_days_clamped() {
        let config = StakingConfig::default();
        assert_eq!(config.apr_cap, 80.0);
        assert_eq!(config.history_days(None), 30);
        assert_eq!(config.history_days(Some(-4)), 1);
        assert_eq!(config.history_days(Some(7)), 7);
        assert_eq!(config.history_days(Some(5000)), 365);
    }
}

#[cfg(test)]
mod domain_tests {
    use crate::domain::catalog::{LEADERBOARD, sum_amounts};
    use crate::domain::entities::{StatsDefaults, StatsUpdate};
    use chrono::{Duration, Utc};

    #[test]
    fn test_update_applies_only_present_fields() {
        let before = Utc::now() - Duration::hours(1);
        let mut stats = StatsDefaults::EMPTY.into_stats(before);
        let update = StatsUpdate {
            total_staked: Some(10.0),
            active_stakers: Some(3),
            ..Default::default()
        };

        let now = Utc::now();
        update.apply(&mut stats, now);

        assert_eq!(stats.total_staked, 10.0);
        assert_eq!(stats.total_rewards, 0.0);
        assert_eq!(stats.active_stakers, 3);
        assert_eq!(stats.current_apr, 65.0);
        assert_eq!(stats.last_updated, now);
    }

    #[test]
    fn test_catalog_tables() {
        assert_eq!(LEADERBOARD.len(), 5);
        assert!(LEADERBOARD.windows(2).all(|w| w[0].rank < w[1].rank));
        assert_eq!(sum_amounts(["1.5", "2", "oops"]), 3.5);
    }
}

#[cfg(test)]
mod http_tests {
    use super::support::MemoryStakingStatsRepository;
    use crate::application::config::StakingConfig;
    use crate::presentation::router::staking_router_generic;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app(repo: MemoryStakingStatsRepository) -> Router {
        staking_router_generic(repo, StakingConfig::default())
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    fn put_json(uri: &str, body: Value) -> Request<Body> {
        Request::put(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_stats_creates_showcase_singleton_once() {
        let repo = MemoryStakingStatsRepository::default();

        let (status, first) = send(app(repo.clone()), get("/stats")).await;
        assert_eq!(status, StatusCode::OK);
        let data = &first["data"];
        assert_eq!(data["total_staked"], "1250000");
        assert_eq!(data["total_rewards"], "890000");
        assert_eq!(data["active_stakers"], 2847);
        assert!((data["current_apr"].as_f64().unwrap() - 71.2).abs() < 1e-9);

        let (_, second) = send(app(repo.clone()), get("/stats")).await;
        assert_eq!(second["data"]["last_updated"], first["data"]["last_updated"]);
        assert_eq!(*repo.creates.lock().unwrap(), 1);

        // display APR is not written back
        assert_eq!(repo.row.lock().unwrap().as_ref().unwrap().current_apr, 65.0);
    }

    #[tokio::test]
    async fn test_update_stats_on_empty_store_uses_zero_defaults() {
        let repo = MemoryStakingStatsRepository::default();

        let (status, body) = send(
            app(repo.clone()),
            put_json("/update_stats", json!({"total_staked": "1000", "active_stakers": 4})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);

        let row = repo.row.lock().unwrap().clone().unwrap();
        assert_eq!(row.total_staked, 1000.0);
        assert_eq!(row.total_rewards, 0.0);
        assert_eq!(row.active_stakers, 4);
        assert_eq!(row.current_apr, 65.0);
    }

    #[tokio::test]
    async fn test_stats_apr_capped_after_update() {
        let repo = MemoryStakingStatsRepository::default();
        send(
            app(repo.clone()),
            put_json("/update_stats", json!({"total_staked": 100, "total_rewards": 500})),
        )
        .await;

        let (_, body) = send(app(repo), get("/stats")).await;
        assert_eq!(body["data"]["current_apr"], 80.0);
    }

    #[tokio::test]
    async fn test_update_stats_rejects_non_numeric() {
        let repo = MemoryStakingStatsRepository::default();
        let (status, body) = send(
            app(repo.clone()),
            put_json("/update_stats", json!({"total_rewards": "lots"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid numeric value for total_rewards");
        assert!(repo.row.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_store_failure_is_generic_500() {
        let repo = MemoryStakingStatsRepository {
            fail: true,
            ..Default::default()
        };
        let (status, body) = send(app(repo), get("/stats")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to process pool statistics");
    }

    #[tokio::test]
    async fn test_history() {
        let repo = MemoryStakingStatsRepository::default();

        let (status, body) = send(app(repo.clone()), get("/history")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["history"].as_array().unwrap().len(), 30);
        assert_eq!(body["data"]["period"], "30 days");

        let (_, body) = send(app(repo.clone()), get("/history?days=3")).await;
        let history = body["data"]["history"].as_array().unwrap();
        assert_eq!(history.len(), 3);
        let today = chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string();
        assert_eq!(history[2]["date"], today.as_str());
        assert!(history[0]["date"].as_str().unwrap() < history[2]["date"].as_str().unwrap());

        let (status, _) = send(app(repo), get("/history?days=many")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_showcase_tables() {
        let repo = MemoryStakingStatsRepository::default();

        let (status, body) = send(app(repo.clone()), get("/leaderboard")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["leaderboard"][0]["rank"], 1);
        assert_eq!(body["data"]["leaderboard"][0]["amount_staked"], "500000");

        let (status, body) = send(app(repo), get("/user_stakes/0xabc")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["address"], "0xabc");
        assert_eq!(body["data"]["stakes"][0]["pool_id"], 1);
        assert_eq!(body["data"]["total_staked"], "15000");
        assert_eq!(body["data"]["total_pending_rewards"], "3200");
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use kernel::error::app_error::AppError;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(StakingError, StatusCode)> = vec![
            (
                StakingError::Rejected(AppError::bad_request("bad")),
                StatusCode::BAD_REQUEST,
            ),
            (
                StakingError::Database(sqlx::Error::RowNotFound),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            assert_eq!(error.status_code(), expected_status);
            assert_eq!(error.into_response().status(), expected_status);
        }
    }
}

//! Unit tests for ledger crate

#[cfg(test)]
mod support {
    use crate::domain::entities::{
        NewTransaction, TRACKED_TYPES, Transaction, TransactionPage, TransactionStats,
        is_integer_amount,
    };
    use crate::domain::repository::TransactionRepository;
    use crate::domain::value_objects::HistoryFilter;
    use crate::error::{LedgerError, LedgerResult};
    use chrono::{DateTime, Utc};
    use std::sync::{Arc, Mutex};

    /// In-memory repository enforcing hash uniqueness like the unique index
    #[derive(Clone, Default)]
    pub struct MemoryTransactionRepository {
        pub rows: Arc<Mutex<Vec<Transaction>>>,
        pub fail: bool,
        /// Pre-check never sees existing rows (simulates a concurrent insert)
        pub stale_reads: bool,
    }

    impl MemoryTransactionRepository {
        pub fn push(&self, tx: Transaction) {
            self.rows.lock().unwrap().push(tx);
        }
    }

    pub fn transaction(id: i64, hash: &str, from: &str, to: &str) -> Transaction {
        Transaction {
            id,
            hash: hash.to_string(),
            from_address: from.to_string(),
            to_address: to.to_string(),
            value: "100".to_string(),
            gas_price: "5".to_string(),
            gas_used: "21000".to_string(),
            block_number: 1,
            timestamp: Utc::now(),
            transaction_type: "swap".to_string(),
            status: "pending".to_string(),
        }
    }

    impl TransactionRepository for MemoryTransactionRepository {
        async fn exists_by_hash(&self, hash: &str) -> LedgerResult<bool> {
            if self.fail {
                return Err(LedgerError::Database(sqlx::Error::PoolTimedOut));
            }
            if self.stale_reads {
                return Ok(false);
            }
            Ok(self.rows.lock().unwrap().iter().any(|t| t.hash == hash))
        }

        async fn insert(&self, tx: &NewTransaction) -> LedgerResult<Transaction> {
            if self.fail {
                return Err(LedgerError::Database(sqlx::Error::PoolTimedOut));
            }
            let mut rows = self.rows.lock().unwrap();
            if rows.iter().any(|t| t.hash == tx.hash) {
                return Err(LedgerError::AlreadyRecorded);
            }
            let stored = Transaction {
                id: rows.len() as i64 + 1,
                hash: tx.hash.clone(),
                from_address: tx.from_address.clone(),
                to_address: tx.to_address.clone(),
                value: tx.value.clone(),
                gas_price: tx.gas_price.clone(),
                gas_used: tx.gas_used.clone(),
                block_number: tx.block_number,
                timestamp: Utc::now(),
                transaction_type: tx.transaction_type.clone(),
                status: tx.status.clone(),
            };
            rows.push(stored.clone());
            Ok(stored)
        }

        async fn list_by_address(&self, filter: &HistoryFilter) -> LedgerResult<TransactionPage> {
            let rows = self.rows.lock().unwrap();
            let mut matching: Vec<Transaction> = rows
                .iter()
                .filter(|t| t.involves(&filter.address))
                .filter(|t| {
                    filter
                        .transaction_type
                        .as_ref()
                        .is_none_or(|ty| &t.transaction_type == ty)
                })
                .cloned()
                .collect();
            matching.sort_by(|a, b| (b.timestamp, b.id).cmp(&(a.timestamp, a.id)));

            let p = filter.pagination;
            Ok(TransactionPage {
                total: matching.len() as i64,
                transactions: matching
                    .into_iter()
                    .skip(p.offset() as usize)
                    .take(p.per_page as usize)
                    .collect(),
                page: p.page,
                per_page: p.per_page,
            })
        }

        async fn stats(&self, since: DateTime<Utc>) -> LedgerResult<TransactionStats> {
            let rows = self.rows.lock().unwrap();
            let count_type = |ty: &str| rows.iter().filter(|t| t.transaction_type == ty).count() as i64;
            let volume: u128 = rows
                .iter()
                .filter(|t| is_integer_amount(&t.value))
                .filter_map(|t| t.value.parse::<u128>().ok())
                .sum();
            let [staking, swap, investment] = TRACKED_TYPES.map(count_type);

            Ok(TransactionStats {
                total: rows.len() as i64,
                recent: rows.iter().filter(|t| t.timestamp >= since).count() as i64,
                total_volume: volume.to_string(),
                staking,
                swap,
                investment,
            })
        }

        async fn update_status(&self, hash: &str, status: &str) -> LedgerResult<bool> {
            let mut rows = self.rows.lock().unwrap();
            match rows.iter_mut().find(|t| t.hash == hash) {
                Some(tx) => {
                    tx.status = status.to_string();
                    Ok(true)
                }
                None => Ok(false),
            }
        }
    }
}

#[cfg(test)]
mod config_tests {
    use crate::application::config::LedgerConfig;

    #[test]
    fn test_pagination_defaults_and_caps() {
        let config = LedgerConfig::default();

        let p = config.pagination(None, None);
        assert_eq!((p.page, p.per_page), (1, 20));

        let p = config.pagination(Some(0), Some(500));
        assert_eq!((p.page, p.per_page), (1, 100));

        let p = config.pagination(Some(3), Some(0));
        assert_eq!((p.page, p.per_page), (3, 1));
    }
}

#[cfg(test)]
mod use_case_tests {
    use super::support::{MemoryTransactionRepository, transaction};
    use crate::application::log::LogTransactionUseCase;
    use crate::application::status::UpdateStatusUseCase;
    use crate::domain::entities::NewTransaction;
    use crate::error::LedgerError;
    use std::sync::Arc;
    use tokio_test::{assert_err, assert_ok};

    fn new_transaction(hash: &str) -> NewTransaction {
        NewTransaction {
            hash: hash.to_string(),
            from_address: "0xa".to_string(),
            to_address: "0xb".to_string(),
            value: "1".to_string(),
            gas_price: "1".to_string(),
            gas_used: "1".to_string(),
            block_number: 7,
            transaction_type: "staking".to_string(),
            status: "pending".to_string(),
        }
    }

    #[tokio::test]
    async fn test_unique_index_catches_race_past_precheck() {
        let repo = MemoryTransactionRepository {
            stale_reads: true,
            ..Default::default()
        };
        repo.push(transaction(1, "0xdup", "0xa", "0xb"));

        let use_case = LogTransactionUseCase::new(Arc::new(repo.clone()));
        let result = use_case.execute(new_transaction("0xdup")).await;

        assert!(matches!(result, Err(LedgerError::AlreadyRecorded)));
        assert_eq!(repo.rows.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_status() {
        let repo = MemoryTransactionRepository::default();
        repo.push(transaction(1, "0x1", "0xa", "0xb"));
        let use_case = UpdateStatusUseCase::new(Arc::new(repo.clone()));

        assert_ok!(use_case.execute("0x1", "confirmed").await);
        assert_eq!(repo.rows.lock().unwrap()[0].status, "confirmed");

        let err = assert_err!(use_case.execute("0xmissing", "confirmed").await);
        assert!(matches!(err, LedgerError::NotFound));
    }
}

#[cfg(test)]
mod http_tests {
    use super::support::{MemoryTransactionRepository, transaction};
    use crate::application::config::LedgerConfig;
    use crate::presentation::router::ledger_router_generic;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app(repo: MemoryTransactionRepository) -> Router {
        ledger_router_generic(repo, LedgerConfig::default())
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    fn log_body(hash: &str) -> Value {
        json!({
            "hash": hash,
            "from_address": "0xsender",
            "to_address": "0xreceiver",
            "value": 1500,
            "gas_price": "20000000000",
            "gas_used": 21000,
            "block_number": "123456",
            "transaction_type": "swap"
        })
    }

    #[tokio::test]
    async fn test_log_transaction() {
        let repo = MemoryTransactionRepository::default();
        let (status, body) = send(app(repo.clone()), json_request("POST", "/log", log_body("0x1"))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["id"], 1);
        assert_eq!(body["data"]["hash"], "0x1");
        assert!(body["data"]["timestamp"].is_string());

        let rows = repo.rows.lock().unwrap();
        assert_eq!(rows[0].value, "1500");
        assert_eq!(rows[0].gas_used, "21000");
        assert_eq!(rows[0].block_number, 123456);
        assert_eq!(rows[0].status, "pending");
    }

    #[tokio::test]
    async fn test_duplicate_hash_is_rejected() {
        let repo = MemoryTransactionRepository::default();
        let (status, _) = send(app(repo.clone()), json_request("POST", "/log", log_body("0xdup"))).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) =
            send(app(repo.clone()), json_request("POST", "/log", log_body("0xdup"))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Transaction already recorded");
        assert_eq!(repo.rows.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_log_missing_field() {
        let mut request = log_body("0x1");
        request.as_object_mut().unwrap().remove("gas_price");

        let (status, body) = send(
            app(MemoryTransactionRepository::default()),
            json_request("POST", "/log", request),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing field: gas_price");
    }

    #[tokio::test]
    async fn test_log_bad_block_number() {
        let mut request = log_body("0x1");
        request["block_number"] = json!("latest");

        let (status, body) = send(
            app(MemoryTransactionRepository::default()),
            json_request("POST", "/log", request),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid integer value for block_number");
    }

    #[tokio::test]
    async fn test_log_store_failure_is_generic_500() {
        let repo = MemoryTransactionRepository {
            fail: true,
            ..Default::default()
        };
        let (status, body) = send(app(repo), json_request("POST", "/log", log_body("0x1"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to process transaction");
    }

    #[tokio::test]
    async fn test_history_pagination() {
        let repo = MemoryTransactionRepository::default();
        for i in 1..=25 {
            repo.push(transaction(i, &format!("0x{i}"), "0xme", "0xother"));
        }
        repo.push(transaction(26, "0xunrelated", "0xa", "0xb"));

        let (status, body) = send(app(repo.clone()), get("/history/0xme?page=2")).await;
        assert_eq!(status, StatusCode::OK);
        let data = &body["data"];
        assert_eq!(data["transactions"].as_array().unwrap().len(), 5);
        assert_eq!(data["total_transactions"], 25);
        assert_eq!(data["total_pages"], 2);
        assert_eq!(data["current_page"], 2);
        assert_eq!(data["has_next"], false);
        assert_eq!(data["has_prev"], true);

        let (_, body) = send(app(repo), get("/history/0xother?per_page=500")).await;
        assert_eq!(body["data"]["transactions"].as_array().unwrap().len(), 25);
        assert_eq!(body["data"]["total_pages"], 1);
    }

    #[tokio::test]
    async fn test_history_page_past_the_end() {
        let repo = MemoryTransactionRepository::default();
        repo.push(transaction(1, "0x1", "0xme", "0xother"));

        let uri = format!("/history/0xme?page={}&per_page=100", i64::MAX);
        let (status, body) = send(app(repo), get(&uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["data"]["transactions"].as_array().unwrap().is_empty());
        assert_eq!(body["data"]["total_transactions"], 1);
        assert_eq!(body["data"]["has_next"], false);
    }

    #[tokio::test]
    async fn test_history_newest_first_with_type_filter() {
        let repo = MemoryTransactionRepository::default();
        let mut staking = transaction(1, "0xs", "0xme", "0xpool");
        staking.transaction_type = "staking".into();
        staking.timestamp -= chrono::Duration::hours(1);
        repo.push(staking);
        repo.push(transaction(2, "0xw", "0xdex", "0xme"));

        let (_, body) = send(app(repo.clone()), get("/history/0xme")).await;
        assert_eq!(body["data"]["transactions"][0]["hash"], "0xw");
        assert_eq!(body["data"]["transactions"][1]["hash"], "0xs");

        let (_, body) = send(app(repo), get("/history/0xme?type=staking")).await;
        let transactions = body["data"]["transactions"].as_array().unwrap();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0]["transaction_type"], "staking");
    }

    #[tokio::test]
    async fn test_stats() {
        let repo = MemoryTransactionRepository::default();
        let rows = [
            ("0x1", "100", "staking"),
            ("0x2", "250", "swap"),
            ("0x3", "1.5", "swap"),
            ("0x4", "abc", "investment"),
        ];
        for (hash, value, ty) in rows {
            let mut tx = transaction(0, hash, "0xa", "0xb");
            tx.value = value.into();
            tx.transaction_type = ty.into();
            repo.push(tx);
        }
        let mut old = transaction(0, "0xold", "0xa", "0xb");
        old.timestamp -= chrono::Duration::days(2);
        old.transaction_type = "transfer".into();
        repo.push(old);

        let (status, body) = send(app(repo), get("/stats")).await;
        assert_eq!(status, StatusCode::OK);
        let data = &body["data"];
        assert_eq!(data["total_transactions"], 5);
        assert_eq!(data["transactions_24h"], 4);
        assert_eq!(data["total_volume"], "450");
        assert_eq!(data["by_type"]["staking"], 1);
        assert_eq!(data["by_type"]["swap"], 2);
        assert_eq!(data["by_type"]["investment"], 1);
    }

    #[tokio::test]
    async fn test_update_status_endpoint() {
        let repo = MemoryTransactionRepository::default();
        repo.push(transaction(1, "0x1", "0xa", "0xb"));

        let (status, body) = send(
            app(repo.clone()),
            json_request("PUT", "/update_status", json!({"hash": "0x1", "status": "confirmed"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert!(body["message"].is_string());
        assert_eq!(repo.rows.lock().unwrap()[0].status, "confirmed");

        let (status, body) = send(
            app(repo.clone()),
            json_request("PUT", "/update_status", json!({"hash": "0x1"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Hash and status are required");

        let (status, body) = send(
            app(repo),
            json_request("PUT", "/update_status", json!({"hash": "0x9", "status": "failed"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Transaction not found");
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
        let test_cases: Vec<(LedgerError, StatusCode)> = vec![
            (LedgerError::AlreadyRecorded, StatusCode::BAD_REQUEST),
            (LedgerError::MissingStatusFields, StatusCode::BAD_REQUEST),
            (LedgerError::NotFound, StatusCode::NOT_FOUND),
            (
                LedgerError::Rejected(AppError::bad_request("Missing field: hash")),
                StatusCode::BAD_REQUEST,
            ),
            (
                LedgerError::Database(sqlx::Error::PoolClosed),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            assert_eq!(error.status_code(), expected_status);
            assert_eq!(error.into_response().status(), expected_status);
        }
    }
}

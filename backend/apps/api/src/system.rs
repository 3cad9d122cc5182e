//! Service Banner, Health and Component Status

use axum::extract::State;
use axum::{Router, routing::get};
use kernel::envelope::ApiResponse;
use platform::cache::TtlCache;
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

pub const API_VERSION: &str = "1.0.0";
const STATUS_CACHE_KEY: &str = "system_status";

#[derive(Clone)]
pub struct SystemState {
    pub pool: PgPool,
    pub status_cache: Arc<TtlCache<&'static str, ServicesStatus>>,
}

impl SystemState {
    pub fn new(pool: PgPool, status_ttl: Duration) -> Self {
        Self {
            pool,
            status_cache: Arc::new(TtlCache::new(status_ttl)),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Banner {
    pub message: &'static str,
    pub version: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComponentStatus {
    pub status: &'static str,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<&'static str>,
}

impl ComponentStatus {
    fn new(status: &'static str) -> Self {
        Self {
            status,
            kind: None,
            version: None,
        }
    }

    fn kind(mut self, kind: &'static str) -> Self {
        self.kind = Some(kind);
        self
    }

    fn version(mut self, version: &'static str) -> Self {
        self.version = Some(version);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ServicesStatus {
    pub api: ComponentStatus,
    pub database: ComponentStatus,
    pub cache: ComponentStatus,
    pub jwt: ComponentStatus,
}

#[derive(Debug, Serialize)]
pub struct SystemStatus {
    pub services: ServicesStatus,
}

pub fn system_router(state: SystemState) -> Router {
    Router::new()
        .route("/", get(banner))
        .route("/api/health", get(health))
        .route("/api/system/status", get(status))
        .with_state(state)
}

/// GET /
async fn banner() -> ApiResponse<Banner> {
    ApiResponse::ok(Banner {
        message: "GreenHash Maroc API",
        version: API_VERSION,
        status: "running",
    })
}

/// GET /api/health
async fn health() -> ApiResponse<Health> {
    ApiResponse::ok(Health { status: "ok" }).with_timestamp()
}

/// GET /api/system/status
async fn status(State(state): State<SystemState>) -> ApiResponse<SystemStatus> {
    let services = match state.status_cache.get(&STATUS_CACHE_KEY).await {
        Some(services) => services,
        None => {
            let services = probe(&state.pool).await;
            state
                .status_cache
                .insert(STATUS_CACHE_KEY, services.clone())
                .await;
            services
        }
    };

    ApiResponse::ok(SystemStatus { services }).with_timestamp()
}

async fn probe(pool: &PgPool) -> ServicesStatus {
    let database = match sqlx::query("SELECT 1").execute(pool).await {
        Ok(_) => ComponentStatus::new("connected").kind("postgresql"),
        Err(e) => {
            tracing::error!(error = %e, "Database health check failed");
            ComponentStatus::new("error").kind("postgresql")
        }
    };

    ServicesStatus {
        api: ComponentStatus::new("healthy").version(API_VERSION),
        database,
        cache: ComponentStatus::new("in_process").kind("memory"),
        jwt: ComponentStatus::new("configured").kind("HS256"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    fn state() -> SystemState {
        // Nothing listens on port 1; every probe fails fast
        let pool = PgPoolOptions::new()
            .acquire_timeout(Duration::from_millis(500))
            .connect_lazy("postgres://greenhash@127.0.0.1:1/greenhash")
            .unwrap();
        SystemState::new(pool, Duration::from_secs(30))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_banner_and_health() {
        let app = system_router(state());

        let (status, body) = get(app.clone(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["version"], "1.0.0");

        let (status, body) = get(app, "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["status"], "ok");
        assert!(body["timestamp"].is_i64());
    }

    #[tokio::test]
    async fn test_status_reports_unreachable_database_and_is_cached() {
        let state = state();
        let app = system_router(state.clone());

        let (status, body) = get(app, "/api/system/status").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["services"]["api"]["status"], "healthy");
        assert_eq!(body["data"]["services"]["database"]["status"], "error");
        assert_eq!(body["data"]["services"]["jwt"]["type"], "HS256");

        assert!(state.status_cache.get(&STATUS_CACHE_KEY).await.is_some());
    }
}

//! Rate Limiting Infrastructure
//!
//! Fixed-window counters keyed by client, plus an axum middleware that
//! enforces a set of limits (e.g. 200/day and 50/hour) per client IP.

use axum::extract::{ConnectInfo, Request, State};
use axum::http::{HeaderValue, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::client::extract_client_ip;

/// Rate limit configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests allowed in the window
    pub max_requests: u32,
    /// Time window duration
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 10,
            window: Duration::from_secs(60),
        }
    }
}

impl RateLimitConfig {
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window: Duration::from_secs(window_secs),
        }
    }

    pub fn per_minute(max_requests: u32) -> Self {
        Self::new(max_requests, 60)
    }

    pub fn per_hour(max_requests: u32) -> Self {
        Self::new(max_requests, 60 * 60)
    }

    pub fn per_day(max_requests: u32) -> Self {
        Self::new(max_requests, 24 * 60 * 60)
    }

    pub fn window_ms(&self) -> i64 {
        self.window.as_millis() as i64
    }
}

/// Rate limit check result
#[derive(Debug, Clone)]
pub struct RateLimitResult {
    pub allowed: bool,
    pub remaining: u32,
    pub reset_at_ms: i64,
}

/// Trait for rate limit storage backends
#[trait_variant::make(RateLimitStore: Send)]
pub trait LocalRateLimitStore {
    /// Check and increment rate limit counter
    async fn check_and_increment(
        &self,
        key: &str,
        config: &RateLimitConfig,
    ) -> Result<RateLimitResult, Box<dyn std::error::Error + Send + Sync>>;
}

// ============================================================================
// In-memory store
// ============================================================================

/// Entries above this count trigger a sweep of expired windows
const SWEEP_THRESHOLD: usize = 10_000;

#[derive(Debug, Clone, Copy)]
struct Window {
    start_ms: i64,
    count: u32,
}

/// Process-local fixed-window counters
///
/// Windows are aligned to multiples of the window length, so every client
/// shares the same boundaries.
#[derive(Debug, Default)]
pub struct MemoryRateLimitStore {
    windows: Mutex<HashMap<(String, i64), Window>>,
}

impl MemoryRateLimitStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one request for `key` at `now_ms`
    pub fn hit(&self, key: &str, config: &RateLimitConfig, now_ms: i64) -> RateLimitResult {
        let window_ms = config.window_ms().max(1);
        let window_start = (now_ms / window_ms) * window_ms;

        let mut windows = self.windows.lock().unwrap_or_else(|e| e.into_inner());

        if windows.len() > SWEEP_THRESHOLD {
            windows.retain(|(_, len), w| w.start_ms + len > now_ms);
        }

        let entry = windows
            .entry((key.to_string(), window_ms))
            .or_insert(Window {
                start_ms: window_start,
                count: 0,
            });
        if entry.start_ms != window_start {
            *entry = Window {
                start_ms: window_start,
                count: 0,
            };
        }
        entry.count = entry.count.saturating_add(1);

        RateLimitResult {
            allowed: entry.count <= config.max_requests,
            remaining: config.max_requests.saturating_sub(entry.count),
            reset_at_ms: window_start + window_ms,
        }
    }
}

impl RateLimitStore for MemoryRateLimitStore {
    async fn check_and_increment(
        &self,
        key: &str,
        config: &RateLimitConfig,
    ) -> Result<RateLimitResult, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.hit(key, config, chrono::Utc::now().timestamp_millis()))
    }
}

// ============================================================================
// Middleware
// ============================================================================

/// Middleware state: a store, a scope prefix and the limits to enforce
#[derive(Debug)]
pub struct RateLimiter<S> {
    pub store: Arc<S>,
    pub scope: &'static str,
    pub limits: Arc<[RateLimitConfig]>,
    /// Key on forwarding headers instead of the socket peer
    pub trust_forwarded: bool,
}

impl<S> Clone for RateLimiter<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            scope: self.scope,
            limits: self.limits.clone(),
            trust_forwarded: self.trust_forwarded,
        }
    }
}

impl<S> RateLimiter<S> {
    pub fn new(store: Arc<S>, scope: &'static str, limits: Vec<RateLimitConfig>) -> Self {
        Self {
            store,
            scope,
            limits: limits.into(),
            trust_forwarded: false,
        }
    }

    /// Only enable behind a reverse proxy that overwrites `X-Forwarded-For`
    pub fn trust_forwarded(mut self, trust: bool) -> Self {
        self.trust_forwarded = trust;
        self
    }

    /// Limiter with no limits (every request passes)
    pub fn disabled(store: Arc<S>, scope: &'static str) -> Self {
        Self::new(store, scope, Vec::new())
    }
}

/// Reject clients that exceed any configured limit with 429
///
/// Use with `axum::middleware::from_fn_with_state`. Store failures are
/// logged and the request is let through.
pub async fn enforce_rate_limit<S>(
    State(limiter): State<RateLimiter<S>>,
    req: Request,
    next: Next,
) -> Response
where
    S: RateLimitStore + Send + Sync + 'static,
{
    if limiter.limits.is_empty() {
        return next.run(req).await;
    }

    let direct_ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip());
    let client = extract_client_ip(req.headers(), direct_ip, limiter.trust_forwarded)
        .map(|ip| ip.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    let key = format!("{}:{}", limiter.scope, client);

    for limit in limiter.limits.iter() {
        match limiter.store.check_and_increment(&key, limit).await {
            Ok(result) if !result.allowed => {
                tracing::warn!(
                    scope = limiter.scope,
                    client = %client,
                    max = limit.max_requests,
                    window_secs = limit.window.as_secs(),
                    "Rate limit exceeded"
                );
                let retry_after =
                    ((result.reset_at_ms - chrono::Utc::now().timestamp_millis()) / 1000).max(1);
                let mut response = AppError::too_many_requests("Rate limit exceeded")
                    .with_code("rate_limited")
                    .into_response();
                if let Ok(value) = HeaderValue::from_str(&retry_after.to_string()) {
                    response.headers_mut().insert(header::RETRY_AFTER, value);
                }
                return response;
            }
            Ok(_) => {}
            Err(e) => {
                tracing::error!(error = %e, scope = limiter.scope, "Rate limit store failed");
            }
        }
    }

    next.run(req).await
}

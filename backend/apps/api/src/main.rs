//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod config;
mod system;

use auth::{PgUserRepository, auth_router};
use axum::middleware::from_fn_with_state;
use axum::{
    Router, http,
    http::{Method, header},
};
use contact::{SmtpMailer, contact_router};
use ledger::{LedgerConfig, PgTransactionRepository, ledger_router};
use market::{CoinGeckoClient, dex_router, prices_router};
use mining::{MiningConfig, PgCalculationRepository, mining_router};
use platform::rate_limit::{MemoryRateLimitStore, RateLimiter, enforce_rate_limit};
use sqlx::postgres::PgPoolOptions;
use staking::{PgStakingStatsRepository, StakingConfig, staking_router};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::system::{SystemState, system_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "greenhash_api=info,mining=info,market=info,ledger=info,staking=info,auth=info,contact=info,tower_http=info"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(profile = ?config.profile, "Configuration loaded");

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Price API client
    let price_source = CoinGeckoClient::new(
        config.market.price_api_url.clone(),
        config.market.request_timeout,
    )?;

    // SMTP relay is optional; the contact form answers 500 without it
    let mailer = config
        .contact
        .smtp
        .as_ref()
        .map(SmtpMailer::new)
        .transpose()?;
    if mailer.is_none() {
        tracing::warn!("SMTP not configured, contact form disabled");
    }

    // CORS configuration
    let allowed_origins: Vec<http::HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Global per-client limits
    let global_limiter = RateLimiter::new(
        Arc::new(MemoryRateLimitStore::new()),
        "global",
        config.global_rate_limits.clone(),
    )
    .trust_forwarded(config.trust_proxy);

    // Build router
    let app = Router::new()
        .merge(system_router(SystemState::new(
            pool.clone(),
            Duration::from_secs(30),
        )))
        .nest(
            "/api/prices",
            prices_router(price_source, config.market.clone()),
        )
        .nest("/api/dex", dex_router())
        .nest(
            "/api/mining",
            mining_router(
                PgCalculationRepository::new(pool.clone()),
                MiningConfig::default(),
            ),
        )
        .nest(
            "/api/transactions",
            ledger_router(
                PgTransactionRepository::new(pool.clone()),
                LedgerConfig::default(),
            ),
        )
        .nest(
            "/api/pool",
            staking_router(
                PgStakingStatsRepository::new(pool.clone()),
                StakingConfig::default(),
            ),
        )
        .nest(
            "/api/auth",
            auth_router(PgUserRepository::new(pool.clone()), config.auth.clone()),
        )
        .merge(contact_router(mailer, config.contact.clone()))
        .layer(from_fn_with_state(
            global_limiter,
            enforce_rate_limit::<MemoryRateLimitStore>,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

//! Process Configuration
//!
//! Read once at startup from the environment (after `.env` is loaded).
//! `APP_ENV` picks a profile; individual variables override its defaults.

use anyhow::{Context, bail};
use auth::AuthConfig;
use chrono::Duration;
use contact::{ContactConfig, SmtpSettings};
use market::MarketConfig;
use platform::rate_limit::RateLimitConfig;
use std::env;

const DEV_CORS_ORIGINS: &str =
    "http://localhost:3000,http://127.0.0.1:3000,http://localhost:5173,http://127.0.0.1:5173";
const PROD_CORS_ORIGINS: &str = "https://greenhashmaroc.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Development,
    Production,
    Testing,
}

impl Profile {
    fn parse(value: Option<&str>) -> anyhow::Result<Self> {
        match value.map(str::trim) {
            None | Some("") | Some("development") | Some("default") => Ok(Self::Development),
            Some("production") => Ok(Self::Production),
            Some("testing") => Ok(Self::Testing),
            Some(other) => bail!("Unknown APP_ENV: {other}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub profile: Profile,
    pub database_url: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    /// Limits applied to every route, per client
    pub global_rate_limits: Vec<RateLimitConfig>,
    /// Key rate limits on `X-Forwarded-For`; set only behind a reverse proxy
    pub trust_proxy: bool,
    pub auth: AuthConfig,
    pub market: MarketConfig,
    pub contact: ContactConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let profile = Profile::parse(lookup("APP_ENV").as_deref())?;

        let database_url = var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

        let port = match var("PORT") {
            Some(port) => port.trim().parse().context("PORT must be a port number")?,
            None => 5000,
        };

        let cors_origins = var("CORS_ORIGINS")
            .unwrap_or_else(|| match profile {
                Profile::Production => PROD_CORS_ORIGINS.to_string(),
                _ => DEV_CORS_ORIGINS.to_string(),
            })
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect::<Vec<String>>();
        // tower-http refuses a wildcard origin alongside credentials
        if cors_origins.iter().any(|origin| origin == "*") {
            bail!("CORS_ORIGINS cannot contain '*' when credentials are allowed");
        }

        let trust_proxy = match var("TRUST_PROXY").as_deref().map(str::trim) {
            None | Some("0") | Some("false") => false,
            Some("1") | Some("true") => true,
            Some(other) => bail!("TRUST_PROXY must be true or false, got {other}"),
        };

        let global_rate_limits = match profile {
            Profile::Development => vec![
                RateLimitConfig::per_day(200),
                RateLimitConfig::per_hour(50),
            ],
            Profile::Production => vec![
                RateLimitConfig::per_day(100),
                RateLimitConfig::per_hour(50),
            ],
            Profile::Testing => Vec::new(),
        };

        let mut auth = match var("JWT_SECRET_KEY") {
            Some(secret) => AuthConfig::with_secret(secret.into_bytes()),
            None if profile == Profile::Production => {
                bail!("JWT_SECRET_KEY must be set in production")
            }
            None => {
                tracing::warn!("JWT_SECRET_KEY not set, using a random secret");
                AuthConfig::with_random_secret()
            }
        };
        match profile {
            Profile::Production => {
                auth.access_token_ttl = Duration::minutes(30);
                auth.refresh_token_ttl = Duration::days(7);
            }
            Profile::Testing => auth.rate_limits.clear(),
            Profile::Development => {}
        }
        auth.trust_forwarded = trust_proxy;

        let mut market = MarketConfig::default();
        if let Some(url) = var("PRICE_API_URL") {
            market.price_api_url = url;
        }

        let smtp = match (var("SMTP_HOST"), var("SMTP_USER"), var("SMTP_PASS")) {
            (Some(host), Some(user), Some(pass)) => {
                let mut settings = SmtpSettings::new(host, user, pass);
                if let Some(port) = var("SMTP_PORT") {
                    settings.port = port.trim().parse().context("SMTP_PORT must be a port number")?;
                }
                if let Some(receiver) = var("CONTACT_RECEIVER") {
                    settings.receiver = receiver;
                }
                Some(settings)
            }
            _ => None,
        };
        let contact = ContactConfig {
            smtp,
            ..Default::default()
        };

        Ok(Self {
            profile,
            database_url,
            port,
            cors_origins,
            global_rate_limits,
            trust_proxy,
            auth,
            market,
            contact,
        })
    }
}

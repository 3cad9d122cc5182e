//! Contact Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::ContactConfig;
use crate::domain::mailer::Mailer;
use crate::infra::smtp::SmtpMailer;
use crate::presentation::handlers::{self, ContactAppState};

/// Create the contact router with the SMTP mailer
///
/// `mailer` is `None` when no SMTP settings were configured.
pub fn contact_router(mailer: Option<SmtpMailer>, config: ContactConfig) -> Router {
    contact_router_generic(mailer, config)
}

/// Create a generic contact router for any mailer
///
/// Routes carry their full path so the router is merged, not nested;
/// a nested `/` would not answer `/api/contact/`.
pub fn contact_router_generic<M>(mailer: Option<M>, config: ContactConfig) -> Router
where
    M: Mailer + Send + Sync + 'static,
{
    let state = ContactAppState {
        mailer: mailer.map(Arc::new),
        config: Arc::new(config),
    };

    Router::new()
        .route("/api/contact/", post(handlers::send_message::<M>))
        .route("/api/contact", post(handlers::send_message::<M>))
        .with_state(state)
}

//! Auth Middleware
//!
//! Bearer token checks for protected routes.

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use platform::client::extract_bearer;
use platform::token::{Claims, TokenSigner, TokenType};
use std::sync::Arc;

use crate::error::{AuthError, AuthResult};

/// Middleware state: the signer and the token type the route accepts
#[derive(Clone)]
pub struct BearerAuthState {
    pub signer: Arc<TokenSigner>,
    pub expected: TokenType,
}

impl BearerAuthState {
    pub fn new(signer: Arc<TokenSigner>, expected: TokenType) -> Self {
        Self { signer, expected }
    }
}

/// Verified token subject, stored in request extensions
#[derive(Debug, Clone)]
pub struct Identity {
    pub subject: String,
}

/// Verify the bearer token in `headers`
pub fn authenticate(
    headers: &HeaderMap,
    signer: &TokenSigner,
    expected: TokenType,
) -> AuthResult<Claims> {
    let token = extract_bearer(headers).ok_or(AuthError::TokenRequired)?;
    Ok(signer.verify(token, expected, Utc::now())?)
}

/// Middleware that requires a valid bearer token of the expected type
///
/// Use with `axum::middleware::from_fn_with_state`.
pub async fn require_bearer(
    State(state): State<BearerAuthState>,
    mut req: Request,
    next: Next,
) -> Response {
    match authenticate(req.headers(), &state.signer, state.expected) {
        Ok(claims) => {
            req.extensions_mut().insert(Identity {
                subject: claims.sub,
            });
            next.run(req).await
        }
        Err(e) => e.into_response(),
    }
}

//! Unit tests for auth crate

#[cfg(test)]
mod support {
    use crate::domain::entity::User;
    use crate::domain::repository::UserRepository;
    use crate::domain::value_object::WalletAddress;
    use crate::error::{AuthError, AuthResult};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    pub struct MemoryUserRepository {
        pub users: Arc<Mutex<Vec<User>>>,
        pub fail: bool,
    }

    impl UserRepository for MemoryUserRepository {
        async fn get_or_create(&self, wallet_address: &WalletAddress) -> AuthResult<User> {
            if self.fail {
                return Err(AuthError::Database(sqlx::Error::PoolTimedOut));
            }
            let mut users = self.users.lock().unwrap();
            if let Some(user) = users.iter().find(|u| &u.wallet_address == wallet_address) {
                return Ok(user.clone());
            }
            let user = User {
                id: users.len() as i64 + 1,
                wallet_address: wallet_address.clone(),
                created_at: chrono::Utc::now(),
            };
            users.push(user.clone());
            Ok(user)
        }

        async fn find_by_wallet(&self, wallet_address: &WalletAddress) -> AuthResult<Option<User>> {
            if self.fail {
                return Err(AuthError::Database(sqlx::Error::PoolTimedOut));
            }
            let users = self.users.lock().unwrap();
            Ok(users
                .iter()
                .find(|u| &u.wallet_address == wallet_address)
                .cloned())
        }
    }
}

#[cfg(test)]
mod use_case_tests {
    use super::support::MemoryUserRepository;
    use crate::application::config::AuthConfig;
    use crate::application::{CurrentUserUseCase, LoginInput, LoginUseCase};
    use crate::error::AuthError;
    use platform::token::TokenType;
    use std::sync::Arc;
    use tokio_test::{assert_err, assert_ok};

    const ADDRESS: &str = "0xAbCdEf0123456789aBcDeF0123456789AbCdEf01";

    fn input(address: &str) -> LoginInput {
        LoginInput {
            wallet_address: address.to_string(),
            signature: "0xsig".to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_creates_user_once() {
        let repo = Arc::new(MemoryUserRepository::default());
        let config = Arc::new(AuthConfig::with_secret("secret"));
        let use_case = LoginUseCase::new(repo.clone(), config.clone());

        let first = assert_ok!(use_case.execute(input(ADDRESS)).await);
        assert_ok!(use_case.execute(input(&ADDRESS.to_lowercase())).await);
        assert_eq!(repo.users.lock().unwrap().len(), 1);

        let claims = assert_ok!(config.signer().verify(
            &first.refresh_token,
            TokenType::Refresh,
            chrono::Utc::now()
        ));
        assert_eq!(claims.sub, ADDRESS.to_lowercase());
    }

    #[tokio::test]
    async fn test_login_rejects_bad_address() {
        let repo = Arc::new(MemoryUserRepository::default());
        let use_case = LoginUseCase::new(repo.clone(), Arc::new(AuthConfig::default()));

        let err = assert_err!(use_case.execute(input("0x1234")).await);
        assert!(matches!(err, AuthError::Rejected(_)));
        assert!(repo.users.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_current_user_missing() {
        let repo = Arc::new(MemoryUserRepository::default());
        let err = assert_err!(
            CurrentUserUseCase::new(repo)
                .execute(&ADDRESS.to_lowercase())
                .await
        );
        assert!(matches!(err, AuthError::UserNotFound));
    }
}

#[cfg(test)]
mod http_tests {
    use super::support::MemoryUserRepository;
    use crate::application::config::AuthConfig;
    use crate::presentation::router::auth_router_generic;
    use axum::Router;
    use axum::body::Body;
    use axum::extract::ConnectInfo;
    use axum::http::{Request, StatusCode};
    use chrono::{Duration, Utc};
    use std::net::SocketAddr;
    use platform::token::{TokenSigner, TokenType};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    const SECRET: &str = "test-secret";
    const ADDRESS: &str = "0x52908400098527886e0f7030069857d2e4169ee7";

    fn app(repo: MemoryUserRepository) -> Router {
        auth_router_generic(repo, AuthConfig::with_secret(SECRET))
    }

    fn signer() -> TokenSigner {
        TokenSigner::new(SECRET)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn login_request(body: Value) -> Request<Body> {
        Request::post("/login")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn with_bearer(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_login_issues_tokens() {
        let repo = MemoryUserRepository::default();
        let (status, body) = send(
            app(repo.clone()),
            login_request(json!({
                "wallet_address": ADDRESS.to_uppercase().replace("0X", "0x"),
                "signature": "0xdeadbeef"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["token_type"], "bearer");

        let access = body["data"]["access_token"].as_str().unwrap();
        let claims = signer()
            .verify(access, TokenType::Access, Utc::now())
            .unwrap();
        assert_eq!(claims.sub, ADDRESS);
        assert_eq!(claims.exp - claims.iat, 3600);

        let refresh = body["data"]["refresh_token"].as_str().unwrap();
        let claims = signer()
            .verify(refresh, TokenType::Refresh, Utc::now())
            .unwrap();
        assert_eq!(claims.exp - claims.iat, 30 * 24 * 3600);

        let users = repo.users.lock().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].wallet_address.as_str(), ADDRESS);
    }

    #[tokio::test]
    async fn test_login_missing_or_invalid_fields() {
        let repo = MemoryUserRepository::default();

        let (status, body) = send(
            app(repo.clone()),
            login_request(json!({"wallet_address": ADDRESS})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing signature or wallet address");

        let (status, body) = send(
            app(repo.clone()),
            login_request(json!({"wallet_address": "not-an-address", "signature": "x"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid wallet address");
        assert!(repo.users.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_login_rate_limited() {
        let app = app(MemoryUserRepository::default());
        let body = json!({"wallet_address": ADDRESS, "signature": "0x01"});

        for _ in 0..5 {
            let (status, _) = send(app.clone(), login_request(body.clone())).await;
            assert_eq!(status, StatusCode::OK);
        }

        let (status, body) = send(app, login_request(body)).await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body["code"], "rate_limited");
    }

    #[tokio::test]
    async fn test_login_limit_keyed_on_socket_peer() {
        let app = app(MemoryUserRepository::default());
        let peer: SocketAddr = "203.0.113.7:50000".parse().unwrap();
        let body = json!({"wallet_address": ADDRESS, "signature": "0x01"});

        let mut statuses = Vec::new();
        for i in 0..6 {
            let mut request = login_request(body.clone());
            request.headers_mut().insert(
                "x-forwarded-for",
                format!("198.51.100.{i}").parse().unwrap(),
            );
            request.extensions_mut().insert(ConnectInfo(peer));
            let (status, _) = send(app.clone(), request).await;
            statuses.push(status);
        }

        assert!(statuses[..5].iter().all(|s| *s == StatusCode::OK));
        assert_eq!(statuses[5], StatusCode::TOO_MANY_REQUESTS);
    }

    #[tokio::test]
    async fn test_me_is_not_rate_limited() {
        let repo = MemoryUserRepository::default();
        let app = app(repo.clone());
        send(
            app.clone(),
            login_request(json!({"wallet_address": ADDRESS, "signature": "0x01"})),
        )
        .await;

        let token = signer().issue(ADDRESS, TokenType::Access, Duration::hours(1), Utc::now());
        for _ in 0..6 {
            let (status, _) = send(app.clone(), with_bearer("GET", "/me", Some(&token))).await;
            assert_eq!(status, StatusCode::OK);
        }
    }

    #[tokio::test]
    async fn test_refresh() {
        let repo = MemoryUserRepository::default();

        let refresh = signer().issue(ADDRESS, TokenType::Refresh, Duration::days(30), Utc::now());
        let (status, body) = send(
            app(repo.clone()),
            with_bearer("POST", "/refresh", Some(&refresh)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let access = body["data"]["access_token"].as_str().unwrap();
        let claims = signer()
            .verify(access, TokenType::Access, Utc::now())
            .unwrap();
        assert_eq!(claims.sub, ADDRESS);
        assert!(body["data"].get("refresh_token").is_none());

        // access tokens are not refresh tokens
        let access = signer().issue(ADDRESS, TokenType::Access, Duration::hours(1), Utc::now());
        let (status, body) = send(
            app(repo.clone()),
            with_bearer("POST", "/refresh", Some(&access)),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], "invalid_token");

        let (status, body) = send(app(repo), with_bearer("POST", "/refresh", None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], "token_required");
        assert_eq!(body["error"], "Authorization token required");
    }

    #[tokio::test]
    async fn test_expired_and_forged_tokens() {
        let repo = MemoryUserRepository::default();

        let expired = signer().issue(
            ADDRESS,
            TokenType::Access,
            Duration::hours(1),
            Utc::now() - Duration::hours(2),
        );
        let (status, body) = send(app(repo.clone()), with_bearer("GET", "/me", Some(&expired))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], "token_expired");

        let forged = TokenSigner::new("other-secret").issue(
            ADDRESS,
            TokenType::Access,
            Duration::hours(1),
            Utc::now(),
        );
        let (status, body) = send(app(repo), with_bearer("GET", "/me", Some(&forged))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], "invalid_token");
    }

    #[tokio::test]
    async fn test_me() {
        let repo = MemoryUserRepository::default();
        let app = app(repo.clone());
        let (_, login) = send(
            app.clone(),
            login_request(json!({"wallet_address": ADDRESS, "signature": "0x01"})),
        )
        .await;
        let access = login["data"]["access_token"].as_str().unwrap().to_string();

        let (status, body) = send(app.clone(), with_bearer("GET", "/me", Some(&access))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["user"]["wallet_address"], ADDRESS);
        assert!(body["data"]["user"]["created_at"].is_string());

        repo.users.lock().unwrap().clear();
        let (status, body) = send(app, with_bearer("GET", "/me", Some(&access))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "User not found");
    }

    #[tokio::test]
    async fn test_store_failure_is_generic_500() {
        let repo = MemoryUserRepository {
            fail: true,
            ..Default::default()
        };
        let (status, body) = send(
            app(repo),
            login_request(json!({"wallet_address": ADDRESS, "signature": "0x01"})),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to process authentication");
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use kernel::error::app_error::AppError;
    use platform::token::TokenError;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(AuthError, StatusCode)> = vec![
            (AuthError::MissingCredentials, StatusCode::BAD_REQUEST),
            (AuthError::TokenRequired, StatusCode::UNAUTHORIZED),
            (AuthError::Token(TokenError::Expired), StatusCode::UNAUTHORIZED),
            (AuthError::UserNotFound, StatusCode::NOT_FOUND),
            (
                AuthError::Rejected(AppError::bad_request("bad")),
                StatusCode::BAD_REQUEST,
            ),
            (
                AuthError::Database(sqlx::Error::RowNotFound),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            assert_eq!(error.status_code(), expected_status);
            assert_eq!(error.into_response().status(), expected_status);
        }
    }

    #[test]
    fn test_token_errors_carry_codes() {
        let app_err = AppError::from(AuthError::Token(TokenError::Invalid));
        assert_eq!(app_err.code(), Some("invalid_token"));
        assert_eq!(AuthError::MissingCredentials.code(), None);
    }
}

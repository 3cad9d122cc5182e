//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::WalletAddress;
use crate::error::AuthResult;

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgUserRepository {
    async fn get_or_create(&self, wallet_address: &WalletAddress) -> AuthResult<User> {
        // Concurrent first logins for one address both land on the same row
        sqlx::query(
            r#"
            INSERT INTO users (wallet_address)
            VALUES ($1)
            ON CONFLICT (wallet_address) DO NOTHING
            "#,
        )
        .bind(wallet_address.as_str())
        .execute(&self.pool)
        .await?;

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, wallet_address, created_at
            FROM users
            WHERE wallet_address = $1
            "#,
        )
        .bind(wallet_address.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_user())
    }

    async fn find_by_wallet(&self, wallet_address: &WalletAddress) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, wallet_address, created_at
            FROM users
            WHERE wallet_address = $1
            "#,
        )
        .bind(wallet_address.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }
}

// Internal row types for sqlx mapping
#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    wallet_address: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            id: self.id,
            wallet_address: WalletAddress::from_db(self.wallet_address),
            created_at: self.created_at,
        }
    }
}

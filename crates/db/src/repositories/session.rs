//! Session repository for database operations.
//!
//! Tokens are never stored in clear: the table is keyed by their SHA-256
//! digest.

use chrono::{DateTime, Utc};
use rxerp_shared::{Role, SessionContext};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Set,
};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::entities::sessions;

/// Error types for session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The token is empty.
    #[error("Session token is empty")]
    EmptyToken,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Session repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    db: DatabaseConnection,
}

impl SessionRepository {
    /// Creates a new session repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Hashes a session token for storage.
    #[must_use]
    pub fn hash_token(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Records a session for the given identity.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is empty or the database insert fails.
    pub async fn create(
        &self,
        token: &str,
        context: &SessionContext,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<sessions::Model, SessionError> {
        if token.is_empty() {
            return Err(SessionError::EmptyToken);
        }

        let session = sessions::ActiveModel {
            token_hash: Set(Self::hash_token(token)),
            email: Set(context.email.clone()),
            role: Set(context.role.as_str().to_string()),
            expires_at: Set(expires_at.map(Into::into)),
            revoked_at: Set(None),
            created_at: Set(Utc::now().into()),
        };

        Ok(session.insert(&self.db).await?)
    }

    /// Resolves a live session token to its identity.
    ///
    /// Revoked and expired sessions resolve to `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn resolve(&self, token: &str) -> Result<Option<SessionContext>, SessionError> {
        let session = sessions::Entity::find_by_id(Self::hash_token(token))
            .filter(sessions::Column::RevokedAt.is_null())
            .filter(
                Condition::any()
                    .add(sessions::Column::ExpiresAt.is_null())
                    .add(sessions::Column::ExpiresAt.gt(Utc::now())),
            )
            .one(&self.db)
            .await?;

        if session.is_none() {
            debug!("Session token did not resolve");
        }

        Ok(session.map(|s| SessionContext::new(s.email, Role::parse(&s.role))))
    }

    /// Revokes a session by token.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn revoke(&self, token: &str) -> Result<bool, SessionError> {
        let result = sessions::Entity::update_many()
            .col_expr(
                sessions::Column::RevokedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .filter(sessions::Column::TokenHash.eq(Self::hash_token(token)))
            .filter(sessions::Column::RevokedAt.is_null())
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes expired sessions (for maintenance).
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn cleanup_expired(&self) -> Result<u64, SessionError> {
        let result = sessions::Entity::delete_many()
            .filter(sessions::Column::ExpiresAt.lt(Utc::now()))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_token_is_hex_sha256() {
        let hash = SessionRepository::hash_token("demo-token");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(hash, SessionRepository::hash_token("demo-token"));
        assert_ne!(hash, SessionRepository::hash_token("other-token"));
    }
}

//! Session token lookup.
//!
//! Issuing sessions is the sign-in flow's job; the API only resolves a token
//! to `{email, role}`.

use async_trait::async_trait;
use dashmap::DashMap;
use rxerp_db::SessionRepository;
use rxerp_shared::{AppError, SessionContext};
use tracing::error;

/// Resolves session tokens.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the identity behind a live token, or `None` if it is unknown.
    async fn resolve(&self, token: &str) -> Result<Option<SessionContext>, AppError>;
}

/// Process-local sessions keyed by token.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: DashMap<String, SessionContext>,
}

impl MemorySessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a session.
    pub fn insert(&self, token: impl Into<String>, context: SessionContext) {
        self.sessions.insert(token.into(), context);
    }

    /// Forgets a session. Returns true if it existed.
    pub fn remove(&self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn resolve(&self, token: &str) -> Result<Option<SessionContext>, AppError> {
        Ok(self.sessions.get(token).map(|entry| entry.value().clone()))
    }
}

#[async_trait]
impl SessionStore for SessionRepository {
    async fn resolve(&self, token: &str) -> Result<Option<SessionContext>, AppError> {
        Self::resolve(self, token).await.map_err(|e| {
            error!(error = %e, "Failed to resolve session");
            AppError::Database("Session lookup failed".to_string())
        })
    }
}

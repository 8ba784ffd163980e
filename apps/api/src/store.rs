//! Session storage, keyed by the caller-supplied user id.
//!
//! Reads hand out snapshots. Changes to an existing session go through
//! `update`, which runs the mutation while the store holds that session
//! exclusively, so two replies for one user cannot overwrite each other.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::AppError;
use crate::models::session::Session;

/// Mutation applied to a stored session by `SessionStore::update`.
pub type SessionUpdate<'a> = Box<dyn FnOnce(&mut Session) + Send + 'a>;

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, user_id: &str) -> Result<Option<Session>, AppError>;

    /// Inserts or replaces the session for `user_id`.
    async fn put(&self, user_id: &str, session: Session) -> Result<(), AppError>;

    /// Applies `f` to the stored session atomically.
    /// Returns `false` without calling `f` when no session exists.
    async fn update(&self, user_id: &str, f: SessionUpdate<'_>) -> Result<bool, AppError>;

    /// Returns whether a session was removed.
    async fn delete(&self, user_id: &str) -> Result<bool, AppError>;
}

/// Process-lifetime store. Sessions are lost on restart.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, user_id: &str) -> Result<Option<Session>, AppError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(user_id).cloned())
    }

    async fn put(&self, user_id: &str, session: Session) -> Result<(), AppError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(user_id.to_string(), session);
        Ok(())
    }

    async fn update(&self, user_id: &str, f: SessionUpdate<'_>) -> Result<bool, AppError> {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(user_id) {
            Some(session) => {
                f(session);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, user_id: &str) -> Result<bool, AppError> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions.remove(user_id).is_some())
    }
}

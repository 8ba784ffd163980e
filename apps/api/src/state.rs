use std::sync::Arc;

use crate::config::Config;
use crate::interview::progression::InterviewEngine;
use crate::store::{InMemorySessionStore, SessionStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub engine: InterviewEngine,
    /// Pluggable session store. Default: InMemorySessionStore.
    pub sessions: Arc<dyn SessionStore>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let engine = InterviewEngine::new(config.max_follow_ups_per_question);
        Self {
            config,
            engine,
            sessions: Arc::new(InMemorySessionStore::new()),
        }
    }
}

//! Per-session queue ownership.

use std::collections::HashMap;

use tracing::info;

use super::{PatientQueueService, QueueConfig, QueueError, QueueResult};

/// Session identifier (UUID v4).
pub type SessionId = String;

/// Independent queue pairs keyed by session.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    config: QueueConfig,
    sessions: HashMap<SessionId, PatientQueueService>,
}

impl SessionRegistry {
    /// Create a registry on the default triage scale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry whose sessions all use `config`.
    pub fn with_config(config: QueueConfig) -> QueueResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            sessions: HashMap::new(),
        })
    }

    /// Start a session with empty queues.
    pub fn open_session(&mut self) -> SessionId {
        let id = uuid::Uuid::new_v4().to_string();
        self.sessions.insert(
            id.clone(),
            PatientQueueService::with_validated_config(self.config.clone()),
        );
        info!(session_id = %id, "session opened");
        id
    }

    /// Run `f` against one session's queues.
    pub fn with_session<F, R>(&mut self, id: &str, f: F) -> QueueResult<R>
    where
        F: FnOnce(&mut PatientQueueService) -> R,
    {
        self.sessions
            .get_mut(id)
            .map(f)
            .ok_or_else(|| QueueError::UnknownSession(id.to_string()))
    }

    /// Drop a session and its queues.
    pub fn close_session(&mut self, id: &str) -> bool {
        let closed = self.sessions.remove(id).is_some();
        if closed {
            info!(session_id = %id, "session closed");
        }
        closed
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

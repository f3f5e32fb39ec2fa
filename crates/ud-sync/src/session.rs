//! Session state persisted through a [`KeyValueStore`].

use crate::{KeyValueStore, SessionResult};

use ud_core::{ProfileSummary, SessionState};

use std::sync::{Arc, RwLock};

use log::{info, warn};

pub const TOKEN_KEY: &str = "userToken";
pub const EMAIL_KEY: &str = "userEmail";
pub const PROFILE_KEY: &str = "userProfile";

/// Owns the in-memory session and mirrors every change to the key store.
pub struct SessionManager {
    store: Arc<dyn KeyValueStore>,
    state: RwLock<SessionState>,
}

impl SessionManager {
    /// A logged-out session backed by `store`; nothing is read.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            state: RwLock::new(SessionState::default()),
        }
    }

    /// Restore the session persisted by a previous process.
    ///
    /// A profile that no longer parses is dropped with a warning; the token
    /// and email are still restored.
    pub fn load(store: Arc<dyn KeyValueStore>) -> SessionResult<Self> {
        let token = store.get(TOKEN_KEY)?.filter(|t| !t.is_empty());
        let email = store.get(EMAIL_KEY)?;
        let profile_summary = match store.get(PROFILE_KEY)? {
            Some(json) => match serde_json::from_str::<ProfileSummary>(&json) {
                Ok(profile) => Some(profile),
                Err(e) => {
                    warn!("Ignoring unreadable cached profile: {}", e);
                    None
                }
            },
            None => None,
        };

        let state = SessionState {
            token,
            email,
            profile_summary,
        };

        if state.is_authenticated() {
            info!(
                "Restored session for {}",
                state.email.as_deref().unwrap_or("unknown user")
            );
        }

        Ok(Self {
            store,
            state: RwLock::new(state),
        })
    }

    pub fn current(&self) -> SessionState {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Persist `state` and make it current.
    pub fn establish(&self, state: SessionState) -> SessionResult<()> {
        match &state.token {
            Some(token) => self.store.set(TOKEN_KEY, token)?,
            None => self.store.remove(TOKEN_KEY)?,
        }
        match &state.email {
            Some(email) => self.store.set(EMAIL_KEY, email)?,
            None => self.store.remove(EMAIL_KEY)?,
        }
        match &state.profile_summary {
            Some(profile) => self
                .store
                .set(PROFILE_KEY, &serde_json::to_string(profile)?)?,
            None => self.store.remove(PROFILE_KEY)?,
        }

        *self.state.write().unwrap_or_else(|e| e.into_inner()) = state;
        Ok(())
    }

    /// Forget the session both in memory and in the key store.
    pub fn clear(&self) -> SessionResult<()> {
        self.store.remove(TOKEN_KEY)?;
        self.store.remove(EMAIL_KEY)?;
        self.store.remove(PROFILE_KEY)?;

        *self.state.write().unwrap_or_else(|e| e.into_inner()) = SessionState::default();
        Ok(())
    }
}

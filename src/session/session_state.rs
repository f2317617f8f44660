use crate::http_handler::User;
use std::sync::Arc;
use strum_macros::Display;

/// Lifecycle phase of the console's single session.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Unauthenticated,
    Restoring,
    Authenticated,
    AuthenticatingIn,
    AuthenticatingOut,
}

impl SessionPhase {
    /// Returns `true` while a transition is waiting for the service.
    pub fn is_pending(self) -> bool {
        matches!(
            self,
            SessionPhase::Restoring | SessionPhase::AuthenticatingIn | SessionPhase::AuthenticatingOut
        )
    }
}

/// A credential token together with the user it was issued for.
///
/// Both halves are always set and cleared together.
#[derive(Debug, PartialEq)]
pub struct Session {
    token: String,
    user: User,
}

impl Session {
    pub(crate) fn new(token: String, user: User) -> Self { Self { token, user } }
    pub fn token(&self) -> &str { &self.token }
    pub fn user(&self) -> &User { &self.user }
}

/// Snapshot broadcast by the [`SessionStore`](super::SessionStore) after every transition.
#[derive(Debug, Clone)]
pub struct SessionState {
    phase: SessionPhase,
    session: Option<Arc<Session>>,
    /// Set once the startup restore has run to completion.
    restored: bool,
}

impl SessionState {
    pub(super) fn initial() -> Self {
        Self { phase: SessionPhase::Unauthenticated, session: None, restored: false }
    }

    pub(super) fn with(phase: SessionPhase, session: Option<Arc<Session>>, restored: bool) -> Self {
        Self { phase, session, restored }
    }

    pub fn phase(&self) -> SessionPhase { self.phase }
    pub fn session(&self) -> Option<&Arc<Session>> { self.session.as_ref() }
    pub fn token(&self) -> Option<&str> { self.session.as_deref().map(Session::token) }
    pub fn user(&self) -> Option<&User> { self.session.as_deref().map(Session::user) }
    pub fn is_restored(&self) -> bool { self.restored }
    pub fn is_loading(&self) -> bool { self.phase.is_pending() }
}

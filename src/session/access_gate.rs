use super::session_state::{Session, SessionState};
use std::sync::Arc;
use tokio::sync::watch;

/// What a protected view should show for the current session.
#[derive(Debug, Clone, PartialEq)]
pub enum Admission {
    /// The startup restore or a login/logout is still in flight.
    Loading,
    Admit(Arc<Session>),
    RedirectToLogin,
}

/// Decides whether protected content may render, based solely on the
/// session state published by the [`SessionStore`](super::SessionStore).
#[derive(Debug, Clone)]
pub struct AccessGate {
    rx: watch::Receiver<SessionState>,
}

impl AccessGate {
    pub fn new(rx: watch::Receiver<SessionState>) -> Self { Self { rx } }

    pub fn decide(state: &SessionState) -> Admission {
        if !state.is_restored() || state.is_loading() {
            return Admission::Loading;
        }
        match state.session() {
            Some(session) => Admission::Admit(Arc::clone(session)),
            None => Admission::RedirectToLogin,
        }
    }

    /// The admission for the latest published state.
    pub fn admission(&self) -> Admission { Self::decide(&self.rx.borrow()) }

    /// Waits until the admission is no longer [`Admission::Loading`].
    pub async fn resolved(&mut self) -> Admission {
        match self.rx.wait_for(|state| Self::decide(state) != Admission::Loading).await {
            Ok(state) => Self::decide(&state),
            // store is gone, nothing will ever be admitted again
            Err(_) => Admission::RedirectToLogin,
        }
    }

    /// Waits for the next published transition and returns its admission.
    ///
    /// Returns `None` once the session store has been dropped.
    pub async fn changed(&mut self) -> Option<Admission> {
        self.rx.changed().await.ok()?;
        Some(self.admission())
    }
}

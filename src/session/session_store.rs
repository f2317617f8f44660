use super::session_state::{Session, SessionPhase, SessionState};
use super::token_store::TokenStore;
use crate::error::{ConsoleError, ValidationFailure};
use crate::http_handler::{AirlineService, Registration};
use crate::{event, info, warn};
use std::sync::Arc;
use tokio::sync::{Mutex, watch};

/// Owner of the authentication lifecycle and the persisted credential token.
///
/// Every transition is published on a [`watch`] channel; dependents only ever
/// observe the session through [`SessionStore::subscribe`]. Transitions are
/// serialized, a second call waits until the running one has settled.
pub struct SessionStore {
    service: Arc<dyn AirlineService>,
    tokens: Arc<dyn TokenStore>,
    state_tx: watch::Sender<SessionState>,
    transition: Mutex<()>,
}

impl SessionStore {
    pub(crate) fn new(service: Arc<dyn AirlineService>, tokens: Arc<dyn TokenStore>) -> Self {
        let (state_tx, _) = watch::channel(SessionState::initial());
        Self { service, tokens, state_tx, transition: Mutex::new(()) }
    }

    /// Returns a snapshot of the current session state.
    pub fn state(&self) -> SessionState { self.state_tx.borrow().clone() }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> { self.state_tx.subscribe() }

    fn publish(&self, phase: SessionPhase, session: Option<Arc<Session>>) {
        self.state_tx.send_modify(|state| {
            *state = SessionState::with(phase, session, state.is_restored());
        });
        event!("Session phase: {phase}");
    }

    fn finish_restore(&self, phase: SessionPhase, session: Option<Arc<Session>>) {
        self.state_tx.send_replace(SessionState::with(phase, session, true));
        event!("Session restore resolved: {phase}");
    }

    fn discard_token(&self) {
        self.service.set_credential(None);
        if let Err(e) = self.tokens.clear() {
            warn!("Failed to remove persisted token: {e}");
        }
    }

    /// Re-establishes the session from a persisted token, once per process.
    ///
    /// Any failure to resolve the user discards the token and ends
    /// `Unauthenticated`; the failure itself is not surfaced.
    pub async fn restore(&self) -> SessionPhase {
        let _guard = self.transition.lock().await;
        let current = self.state();
        if current.is_restored() {
            return current.phase();
        }
        let token = self.tokens.load().unwrap_or_else(|e| {
            warn!("Failed to read persisted token: {e}");
            None
        });
        let Some(token) = token else {
            self.finish_restore(SessionPhase::Unauthenticated, None);
            return SessionPhase::Unauthenticated;
        };

        self.publish(SessionPhase::Restoring, None);
        self.service.set_credential(Some(token.clone()));
        match self.service.current_user().await {
            Ok(user) => {
                info!("Restored session for {}", user.email());
                let session = Arc::new(Session::new(token, user));
                self.finish_restore(SessionPhase::Authenticated, Some(session));
                SessionPhase::Authenticated
            }
            Err(e) => {
                if e.is_unauthorized() {
                    info!("Persisted token was rejected, signing out");
                } else {
                    warn!("Could not restore session: {e}");
                }
                self.discard_token();
                self.finish_restore(SessionPhase::Unauthenticated, None);
                SessionPhase::Unauthenticated
            }
        }
    }

    /// Opens a session with the given credentials.
    ///
    /// The token is only persisted once the service has returned the user it
    /// belongs to.
    pub async fn login(&self, email: &str, password: &str) -> Result<Arc<Session>, ConsoleError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(ValidationFailure::MissingCredentials.into());
        }
        let _guard = self.transition.lock().await;
        if self.state().session().is_some() {
            return Err(ValidationFailure::AlreadyAuthenticated.into());
        }

        self.publish(SessionPhase::AuthenticatingIn, None);
        match self.service.login(email.trim(), password).await {
            Ok(grant) => {
                self.service.set_credential(Some(grant.token.clone()));
                if let Err(e) = self.tokens.save(&grant.token) {
                    warn!("Failed to persist token, session will not survive a restart: {e}");
                }
                info!("Logged in as {}", grant.user.email());
                let session = Arc::new(Session::new(grant.token, grant.user));
                self.publish(SessionPhase::Authenticated, Some(Arc::clone(&session)));
                Ok(session)
            }
            Err(e) => {
                self.service.set_credential(None);
                self.publish(SessionPhase::Unauthenticated, None);
                Err(e.into())
            }
        }
    }

    /// Creates an account and airline. Leaves the session untouched.
    pub async fn register(&self, registration: &Registration) -> Result<(), ConsoleError> {
        let incomplete = [
            &registration.email,
            &registration.password,
            &registration.airline_name,
            &registration.hub_airport_code,
        ]
        .iter()
        .any(|field| field.trim().is_empty());
        if incomplete {
            return Err(ValidationFailure::IncompleteRegistration.into());
        }
        self.service.register(registration).await?;
        info!("Registered airline {}", registration.airline_name);
        Ok(())
    }

    /// Closes the session.
    ///
    /// The service is notified on a best-effort basis; token and user are
    /// discarded whether or not the notification succeeds. A failed
    /// notification is still returned to the caller.
    pub async fn logout(&self) -> Result<(), ConsoleError> {
        let _guard = self.transition.lock().await;
        let Some(session) = self.state().session().cloned() else {
            self.discard_token();
            self.publish(SessionPhase::Unauthenticated, None);
            return Ok(());
        };

        self.publish(SessionPhase::AuthenticatingOut, Some(Arc::clone(&session)));
        let notified = self.service.logout().await;
        self.discard_token();
        self.publish(SessionPhase::Unauthenticated, None);
        info!("Logged out {}", session.user().email());
        notified.map_err(|e| {
            warn!("Service was not notified of logout: {e}");
            e.into()
        })
    }
}

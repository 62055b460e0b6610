//! Session state
//!
//! Global authentication state for the dashboard: the signed-in user
//! and the venue bound to them. Transitions go through a pure
//! `(state, action) -> state` reducer; side effects (token
//! persistence, toasts) happen in [`Session::dispatch`] around it.

use qcut_client::HttpClient;
use shared::{User, Venue};

use crate::notify::Notifier;
use crate::token_store::TokenStore;

/// Application session state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub user: Option<User>,
    /// Only meaningful while `user` is set; fetched with the user's token
    pub venue: Option<Venue>,
}

/// Session transitions
#[derive(Debug, Clone)]
pub enum Action {
    SetUser(User),
    UnsetUser,
    SetVenue(Venue),
}

/// Pure reducer over the session state
///
/// `UnsetUser` is a full session reset: it clears the venue binding
/// too. `SetVenue` performs no validation against the current user.
pub fn reduce(state: &AppState, action: &Action) -> AppState {
    let mut next = state.clone();

    match action {
        Action::SetUser(user) => {
            next.user = Some(user.clone());
        }
        Action::UnsetUser => {
            next.user = None;
            next.venue = None;
        }
        Action::SetVenue(venue) => {
            next.venue = Some(venue.clone());
        }
    }

    next
}

/// Startup restore progress
///
/// Protected content must treat the session as loading while
/// `Restoring`; it is never "unauthenticated" before the restore
/// attempt resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Restoring,
    Ready,
}

/// Access tag of a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRole {
    /// Inaccessible once a user is present (e.g. the login page)
    Public,
    /// Requires a signed-in user
    User,
}

impl RouteRole {
    /// Whether a route with this tag must redirect away
    pub fn redirect_needed(&self, state: &AppState) -> bool {
        match self {
            RouteRole::Public => state.user.is_some(),
            RouteRole::User => state.user.is_none(),
        }
    }
}

/// Venue binding outcome
///
/// `NoVenue` is a valid terminal state, not a failure: the account is
/// simply not attached to any venue and the UI explains that instead
/// of showing an empty dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VenueBinding {
    Bound,
    NoVenue,
    Failed,
}

/// Session store: state plus the persistence and notification seams
#[derive(Debug)]
pub struct Session {
    state: AppState,
    phase: SessionPhase,
    tokens: TokenStore,
}

impl Session {
    pub fn new(tokens: TokenStore) -> Self {
        Self {
            state: AppState::default(),
            phase: SessionPhase::Restoring,
            tokens,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Bearer token of the signed-in user
    pub fn access_token(&self) -> Option<&str> {
        self.state.user.as_ref().map(|u| u.access_token.as_str())
    }

    /// Apply a transition and its side effects
    ///
    /// Cannot fail: token persistence errors are logged and the state
    /// transition still applies.
    pub fn dispatch(&mut self, action: Action, notifier: &dyn Notifier) {
        match &action {
            Action::SetUser(user) => {
                if let Err(e) = self.tokens.save(&user.access_token) {
                    tracing::warn!(error = %e, "Failed to persist session token");
                }
                notifier.success(&format!("Welcome {}!", user.name));
            }
            Action::UnsetUser => {
                if let Err(e) = self.tokens.clear() {
                    tracing::warn!(error = %e, "Failed to clear session token");
                }
                notifier.success("You've been logged out!");
            }
            Action::SetVenue(_) => {}
        }

        self.state = reduce(&self.state, &action);
    }

    /// Restore the session from the persisted token at startup
    ///
    /// On any failure (no token, network, invalid token) the session
    /// is left unauthenticated and only a log line is emitted; the
    /// phase becomes `Ready` either way.
    pub async fn restore(&mut self, client: &HttpClient, notifier: &dyn Notifier) {
        let token = match self.tokens.load() {
            Ok(Some(token)) => token,
            Ok(None) => {
                self.phase = SessionPhase::Ready;
                return;
            }
            Err(e) => {
                tracing::debug!(error = %e, "Could not read persisted token");
                self.phase = SessionPhase::Ready;
                return;
            }
        };

        match client.clone().with_token(token).me().await {
            Ok(user) => self.dispatch(Action::SetUser(user), notifier),
            Err(e) => tracing::debug!(error = %e, "Session restore failed"),
        }

        self.phase = SessionPhase::Ready;
    }

    /// Resolve and bind the venue attached to the signed-in user
    ///
    /// Fetch failures are surfaced through the notifier; an empty
    /// result is the distinct `NoVenue` state.
    pub async fn bind_venue(&mut self, client: &HttpClient, notifier: &dyn Notifier) -> VenueBinding {
        match client.venue_me().await {
            Ok(Some(venue)) => {
                self.dispatch(Action::SetVenue(venue), notifier);
                VenueBinding::Bound
            }
            Ok(None) => VenueBinding::NoVenue,
            Err(e) => {
                for message in e.user_messages() {
                    notifier.error(&message);
                }
                VenueBinding::Failed
            }
        }
    }
}

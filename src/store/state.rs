//! Client state and its reducer

use serde::Serialize;

use crate::client::models::{ConnectionRequest, Role, User, Worker};
use crate::session::TokenClaims;

/// Authentication slice of the state
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AuthState {
    /// Identity decoded from the session token
    pub user: Option<TokenClaims>,
    /// Account record, when the server sent one with the token
    pub account: Option<User>,
    pub role: Option<Role>,
    pub token_valid: bool,
}

/// Everything the client keeps between dispatches
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AppState {
    pub auth: AuthState,
    pub workers: Vec<Worker>,
    /// Connection requests involving the current user
    pub notifications: Vec<ConnectionRequest>,
    /// Thunks that dispatched `Pending` and have not yet `Settled`
    pub in_flight: usize,
    /// Normalized message of the last failed action
    pub error: Option<String>,
}

/// A discrete state transition
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Pending,
    Rejected(String),
    LoggedIn {
        claims: TokenClaims,
        account: Option<User>,
    },
    LoggedOut,
    SessionExpired,
    WorkersLoaded(Vec<Worker>),
    WorkerUpdated(Worker),
    NotificationsLoaded(Vec<ConnectionRequest>),
    NotificationUpdated(ConnectionRequest),
    ConnectionSent(ConnectionRequest),
    DashboardLoaded {
        workers: Vec<Worker>,
        notifications: Vec<ConnectionRequest>,
    },
    /// A thunk finished, successfully or not
    Settled,
}

/// Apply one action.
///
/// Only `Pending` and `Settled` move the in-flight count, so overlapping
/// thunks keep the state loading until the last one settles.
pub fn reduce(mut state: AppState, action: Action) -> AppState {
    match action {
        Action::Pending => {
            state.in_flight += 1;
            state.error = None;
        }
        Action::Settled => {
            state.in_flight = state.in_flight.saturating_sub(1);
        }
        Action::Rejected(message) => {
            state.error = Some(message);
        }
        Action::LoggedIn { claims, account } => {
            state.auth = AuthState {
                role: Some(claims.role),
                token_valid: claims.is_valid(),
                user: Some(claims),
                account,
            };
            state.error = None;
        }
        Action::LoggedOut => {
            return AppState {
                in_flight: state.in_flight,
                ..Default::default()
            };
        }
        Action::SessionExpired => {
            state.auth.token_valid = false;
        }
        Action::WorkersLoaded(workers) => {
            state.workers = workers;
            state.error = None;
        }
        Action::WorkerUpdated(worker) => {
            match state.workers.iter_mut().find(|w| w.id == worker.id) {
                Some(existing) => *existing = worker,
                None => state.workers.push(worker),
            }
            state.error = None;
        }
        Action::NotificationsLoaded(requests) => {
            state.notifications = requests;
            state.error = None;
        }
        Action::DashboardLoaded {
            workers,
            notifications,
        } => {
            state.workers = workers;
            state.notifications = notifications;
            state.error = None;
        }
        Action::NotificationUpdated(request) | Action::ConnectionSent(request) => {
            match state.notifications.iter_mut().find(|n| n.id == request.id) {
                Some(existing) => *existing = request,
                None => state.notifications.push(request),
            }
            state.error = None;
        }
    }
    state
}

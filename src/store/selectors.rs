//! Read-only views over [`AppState`]

use super::state::AppState;
use crate::client::models::{ConnectionRequest, ConnectionStatus, Role, Worker};
use crate::session::TokenClaims;

pub fn current_user(state: &AppState) -> Option<&TokenClaims> {
    state.auth.user.as_ref()
}

pub fn current_role(state: &AppState) -> Option<Role> {
    state.auth.role
}

pub fn is_authenticated(state: &AppState) -> bool {
    state.auth.user.is_some() && state.auth.token_valid
}

pub fn workers(state: &AppState) -> &[Worker] {
    &state.workers
}

pub fn available_workers(state: &AppState) -> Vec<&Worker> {
    state.workers.iter().filter(|w| w.is_available).collect()
}

pub fn notifications(state: &AppState) -> &[ConnectionRequest] {
    &state.notifications
}

/// Pending requests addressed to the current user
pub fn pending_notifications(state: &AppState) -> Vec<&ConnectionRequest> {
    let me = current_user(state).map(|u| u.id);
    state
        .notifications
        .iter()
        .filter(|n| n.status == ConnectionStatus::Pending)
        .filter(|n| me.is_none_or(|id| n.receiver_id == id))
        .collect()
}

/// Whether any thunk is still waiting on the server
pub fn is_loading(state: &AppState) -> bool {
    state.in_flight > 0
}

pub fn last_error(state: &AppState) -> Option<&str> {
    state.error.as_deref()
}

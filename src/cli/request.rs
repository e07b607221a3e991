//! Connection request commands

use colored::Colorize;

use crate::cli::{AppContext, GlobalOptions};
use crate::client::models::{ConnectionRequest, ConnectionStatus, CreateConnectionRequest};
use crate::error::Result;
use crate::models::ConnectionRequestDisplay;
use crate::output::{print_item, print_list};
use crate::store::selectors;

/// List requests, or only the pending ones addressed to the current user
pub async fn list(opts: &GlobalOptions, pending_only: bool) -> Result<()> {
    let ctx = AppContext::new(opts).await?;
    ctx.require_user().await?;
    ctx.store.fetch_notifications().await?;

    let state = ctx.store.state().await;
    let requests: Vec<&ConnectionRequest> = if pending_only {
        selectors::pending_notifications(&state)
    } else {
        selectors::notifications(&state).iter().collect()
    };
    print_list::<_, ConnectionRequestDisplay>(requests, ctx.format)
}

pub async fn send(opts: &GlobalOptions, receiver_id: i64, message: Option<String>) -> Result<()> {
    let ctx = AppContext::new(opts).await?;
    ctx.require_user().await?;

    let request = CreateConnectionRequest {
        receiver_id,
        message,
    };
    let sent = ctx.store.send_connection_request(&request).await?;
    print_item::<_, ConnectionRequestDisplay>(sent, ctx.format)
}

pub async fn respond(opts: &GlobalOptions, id: i64, status: ConnectionStatus) -> Result<()> {
    let ctx = AppContext::new(opts).await?;
    ctx.require_user().await?;
    let updated = ctx.store.respond_to_connection_request(id, status).await?;

    println!(
        "{} Request {} {}",
        "✓".green(),
        updated.id,
        updated.status.to_string().to_lowercase().bold()
    );
    Ok(())
}

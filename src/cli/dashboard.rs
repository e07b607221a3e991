//! Dashboard command: available workers and pending requests at a glance

use colored::Colorize;
use serde::Serialize;

use crate::cli::{AppContext, GlobalOptions, OutputFormat};
use crate::client::models::{ConnectionRequest, Worker};
use crate::error::Result;
use crate::models::{ConnectionRequestDisplay, WorkerDisplay};
use crate::output::{Formattable, json, table};
use crate::store::selectors;

/// What the dashboard shows, taken from the store after a refresh
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardView {
    available_workers: Vec<Worker>,
    pending_requests: Vec<ConnectionRequest>,
    total_workers: usize,
}

impl Formattable for DashboardView {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(json::format_json(self)?),
            OutputFormat::Table => {
                let workers: Vec<WorkerDisplay> =
                    self.available_workers.iter().map(WorkerDisplay::from).collect();
                let requests: Vec<ConnectionRequestDisplay> = self
                    .pending_requests
                    .iter()
                    .map(ConnectionRequestDisplay::from)
                    .collect();

                Ok(format!(
                    "{} ({} of {})\n{}\n\n{} ({})\n{}",
                    "Available workers".bold(),
                    self.available_workers.len(),
                    self.total_workers,
                    table::format_table(&workers),
                    "Pending requests".bold(),
                    self.pending_requests.len(),
                    table::format_table(&requests),
                ))
            }
        }
    }
}

/// Refresh workers and requests together, then print the summary
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = AppContext::new(opts).await?;
    ctx.require_user().await?;
    ctx.store.fetch_dashboard().await?;

    let state = ctx.store.state().await;
    let view = DashboardView {
        available_workers: selectors::available_workers(&state)
            .into_iter()
            .cloned()
            .collect(),
        pending_requests: selectors::pending_notifications(&state)
            .into_iter()
            .cloned()
            .collect(),
        total_workers: selectors::workers(&state).len(),
    };
    view.print(ctx.format)
}

//! Work assignment commands

use colored::Colorize;

use crate::cli::{AppContext, GlobalOptions};
use crate::client::AssignmentsApi;
use crate::client::models::AssignmentStatus;
use crate::error::Result;
use crate::models::AssignmentDisplay;
use crate::output::print_list;

/// Whose assignments to list
#[derive(Debug, Clone, Copy)]
pub enum AssignmentScope {
    Worker(i64),
    Job(i64),
    Recruiter(i64),
}

pub async fn list(opts: &GlobalOptions, scope: AssignmentScope) -> Result<()> {
    let ctx = AppContext::new(opts).await?;
    ctx.require_user().await?;

    let response = match scope {
        AssignmentScope::Worker(id) => ctx.client.assignments_for_worker(id).await?,
        AssignmentScope::Job(id) => ctx.client.assignments_for_job(id).await?,
        AssignmentScope::Recruiter(id) => ctx.client.assignments_for_recruiter(id).await?,
    };
    print_list::<_, AssignmentDisplay>(response.into_data(), ctx.format)
}

pub async fn set_status(opts: &GlobalOptions, id: i64, status: AssignmentStatus) -> Result<()> {
    let ctx = AppContext::new(opts).await?;
    ctx.require_user().await?;
    let assignment = ctx
        .client
        .update_assignment_status(id, status)
        .await?
        .into_data();

    println!(
        "{} Assignment {} is now {}",
        "✓".green(),
        assignment.id,
        assignment.status.to_string().bold()
    );
    Ok(())
}

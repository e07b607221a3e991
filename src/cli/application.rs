//! Job application commands

use colored::Colorize;

use crate::cli::{AppContext, GlobalOptions};
use crate::client::ApplicationsApi;
use crate::client::models::{ApplicationStatus, CreateApplicationRequest};
use crate::error::Result;
use crate::models::ApplicationDisplay;
use crate::output::{print_item, print_list};
use crate::validation::schemas;

/// Apply to a job as the signed-in worker
pub async fn apply(opts: &GlobalOptions, job_id: i64, cover_letter: Option<String>) -> Result<()> {
    let ctx = AppContext::new(opts).await?;
    ctx.require_user().await?;

    let request = CreateApplicationRequest {
        job_id,
        cover_letter,
    };
    schemas::application().ensure_dto(&request)?;

    let application = ctx.client.create_application(&request).await?.into_data();
    print_item::<_, ApplicationDisplay>(application, ctx.format)
}

pub async fn mine(opts: &GlobalOptions) -> Result<()> {
    let ctx = AppContext::new(opts).await?;
    ctx.require_user().await?;
    let applications = ctx.client.my_applications().await?.into_data();
    print_list::<_, ApplicationDisplay>(applications, ctx.format)
}

pub async fn set_status(opts: &GlobalOptions, id: i64, status: ApplicationStatus) -> Result<()> {
    let ctx = AppContext::new(opts).await?;
    ctx.require_user().await?;
    let application = ctx
        .client
        .update_application_status(id, status)
        .await?
        .into_data();

    println!(
        "{} Application {} is now {}",
        "✓".green(),
        application.id,
        application.status.to_string().bold()
    );
    Ok(())
}

//! Job posting commands

use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};
use log::debug;

use crate::cli::{AppContext, GlobalOptions, PaginationArgs};
use crate::client::JobsApi;
use crate::client::models::{CreateJobRequest, JobQuery, UpdateJobRequest};
use crate::error::Result;
use crate::models::JobDisplay;
use crate::output::{print_item, print_list};
use crate::validation::schemas;

/// Filters accepted by `job list`
#[derive(Debug, Default, Clone)]
pub struct JobFilters {
    pub search: Option<String>,
    pub category: Option<i64>,
    pub location: Option<String>,
    pub active: Option<bool>,
}

impl JobFilters {
    /// Build the list query sent to the server.
    pub fn to_query(&self, pagination: &PaginationArgs) -> JobQuery {
        JobQuery {
            search: self.search.clone(),
            category_id: self.category,
            location: self.location.clone(),
            is_active: self.active,
            page: pagination.page,
            limit: pagination.limit,
        }
    }
}

pub async fn list(
    opts: &GlobalOptions,
    filters: &JobFilters,
    pagination: &PaginationArgs,
) -> Result<()> {
    let ctx = AppContext::new(opts).await?;
    let query = filters.to_query(pagination);
    debug!("Listing jobs with {:?}", query);

    let jobs = ctx.client.list_jobs(&query).await?.into_data();
    print_list::<_, JobDisplay>(jobs, ctx.format)
}

/// Jobs posted by the signed-in recruiter
pub async fn mine(opts: &GlobalOptions) -> Result<()> {
    let ctx = AppContext::new(opts).await?;
    ctx.require_user().await?;
    let jobs = ctx.client.my_jobs().await?.into_data();
    print_list::<_, JobDisplay>(jobs, ctx.format)
}

pub async fn get(opts: &GlobalOptions, id: i64) -> Result<()> {
    let ctx = AppContext::new(opts).await?;
    let job = ctx.client.get_job(id).await?.into_data();
    print_item::<_, JobDisplay>(job, ctx.format)
}

pub async fn create(opts: &GlobalOptions, request: CreateJobRequest) -> Result<()> {
    let ctx = AppContext::new(opts).await?;
    ctx.require_user().await?;
    schemas::job().ensure_dto(&request)?;

    let job = ctx.client.create_job(&request).await?.into_data();
    print_item::<_, JobDisplay>(job, ctx.format)
}

/// Send only the fields given; the same rules apply to each of them.
pub async fn update(opts: &GlobalOptions, id: i64, request: UpdateJobRequest) -> Result<()> {
    let ctx = AppContext::new(opts).await?;
    ctx.require_user().await?;
    schemas::job().partial().ensure_dto(&request)?;

    let job = ctx.client.update_job(id, &request).await?.into_data();
    print_item::<_, JobDisplay>(job, ctx.format)
}

pub async fn toggle_active(opts: &GlobalOptions, id: i64) -> Result<()> {
    let ctx = AppContext::new(opts).await?;
    ctx.require_user().await?;
    let job = ctx.client.toggle_job_active(id).await?.into_data();

    let state = if job.is_active {
        "open".green()
    } else {
        "closed".yellow()
    };
    println!("{} Job {} is now {}", "✓".green(), job.title.bold(), state);
    Ok(())
}

pub async fn delete(opts: &GlobalOptions, id: i64, yes: bool) -> Result<()> {
    let ctx = AppContext::new(opts).await?;
    ctx.require_user().await?;

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Delete job {}?", id))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    ctx.client.delete_job(id).await?;
    println!("{} Deleted job {}", "✓".green(), id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_to_query() {
        let filters = JobFilters {
            search: Some("roofer".to_string()),
            category: Some(3),
            location: None,
            active: Some(true),
        };
        let pagination = PaginationArgs {
            limit: Some(20),
            page: Some(2),
        };

        let query = filters.to_query(&pagination);

        assert_eq!(query.search.as_deref(), Some("roofer"));
        assert_eq!(query.category_id, Some(3));
        assert_eq!(query.is_active, Some(true));
        assert_eq!(query.page, Some(2));
        assert_eq!(query.limit, Some(20));
        assert!(query.location.is_none());
    }
}

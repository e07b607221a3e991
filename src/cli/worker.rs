//! Worker profile commands

use std::path::Path;

use colored::Colorize;
use log::debug;

use crate::cli::{AppContext, GlobalOptions, WorkerProfileArgs};
use crate::client::WorkersApi;
use crate::client::models::{CreateWorkerRequest, ProfilePhoto, UpdateWorkerRequest, Worker};
use crate::error::Result;
use crate::models::WorkerDisplay;
use crate::output::{print_item, print_list};
use crate::store::selectors;

/// List worker profiles, optionally only the available ones
pub async fn list(opts: &GlobalOptions, available_only: bool) -> Result<()> {
    let ctx = AppContext::new(opts).await?;
    ctx.store.fetch_workers().await?;

    let state = ctx.store.state().await;
    let workers: Vec<&Worker> = if available_only {
        selectors::available_workers(&state)
    } else {
        selectors::workers(&state).iter().collect()
    };
    debug!("Showing {} workers", workers.len());

    print_list::<_, WorkerDisplay>(workers, ctx.format)
}

pub async fn get(opts: &GlobalOptions, id: i64) -> Result<()> {
    let ctx = AppContext::new(opts).await?;
    let worker = ctx.client.get_worker(id).await?.into_data();
    print_item::<_, WorkerDisplay>(worker, ctx.format)
}

/// Show the signed-in worker's own profile
pub async fn me(opts: &GlobalOptions) -> Result<()> {
    let ctx = AppContext::new(opts).await?;
    ctx.require_user().await?;
    let worker = ctx.client.my_worker_profile().await?.into_data();
    print_item::<_, WorkerDisplay>(worker, ctx.format)
}

pub async fn toggle_availability(opts: &GlobalOptions) -> Result<()> {
    let ctx = AppContext::new(opts).await?;
    ctx.require_user().await?;
    let worker = ctx.store.toggle_availability().await?;

    if worker.is_available {
        println!("{} You are now {}", "✓".green(), "available".green());
    } else {
        println!("{} You are now {}", "✓".green(), "unavailable".yellow());
    }
    Ok(())
}

impl WorkerProfileArgs {
    /// Missing names are sent blank so validation reports them as required.
    pub fn to_create_request(&self) -> CreateWorkerRequest {
        CreateWorkerRequest {
            first_name: self.first_name.clone().unwrap_or_default(),
            last_name: self.last_name.clone().unwrap_or_default(),
            phone: self.phone.clone(),
            location: self.location.clone(),
            profession: self.profession.clone(),
            skills: self.skills.clone().unwrap_or_default(),
            experience_years: self.experience,
            bio: self.bio.clone(),
        }
    }

    pub fn to_update_request(&self) -> UpdateWorkerRequest {
        UpdateWorkerRequest {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone: self.phone.clone(),
            location: self.location.clone(),
            profession: self.profession.clone(),
            skills: self.skills.clone(),
            experience_years: self.experience,
            bio: self.bio.clone(),
        }
    }
}

pub async fn create(
    opts: &GlobalOptions,
    profile: &WorkerProfileArgs,
    photo: Option<&Path>,
) -> Result<()> {
    let ctx = AppContext::new(opts).await?;
    ctx.require_user().await?;

    let photo = photo.map(ProfilePhoto::from_path).transpose()?;
    if let Some(photo) = &photo {
        debug!("Attaching {} ({} bytes)", photo.file_name, photo.bytes.len());
    }

    let worker = ctx
        .store
        .create_worker_profile(&profile.to_create_request(), photo)
        .await?;
    print_item::<_, WorkerDisplay>(worker, ctx.format)
}

pub async fn update(opts: &GlobalOptions, profile: &WorkerProfileArgs) -> Result<()> {
    let ctx = AppContext::new(opts).await?;
    ctx.require_user().await?;
    let worker = ctx
        .store
        .update_worker_profile(&profile.to_update_request())
        .await?;
    print_item::<_, WorkerDisplay>(worker, ctx.format)
}

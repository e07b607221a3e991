//! Job category commands

use crate::cli::{AppContext, GlobalOptions};
use crate::client::CategoriesApi;
use crate::client::models::CreateJobCategoryRequest;
use crate::error::Result;
use crate::models::CategoryDisplay;
use crate::output::{print_item, print_list};
use crate::validation::schemas;

pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = AppContext::new(opts).await?;
    let categories = ctx.client.list_categories().await?.into_data();
    print_list::<_, CategoryDisplay>(categories, ctx.format)
}

pub async fn create(opts: &GlobalOptions, name: String, description: Option<String>) -> Result<()> {
    let ctx = AppContext::new(opts).await?;
    ctx.require_user().await?;

    let request = CreateJobCategoryRequest { name, description };
    schemas::job_category().ensure_dto(&request)?;

    let category = ctx.client.create_category(&request).await?.into_data();
    print_item::<_, CategoryDisplay>(category, ctx.format)
}

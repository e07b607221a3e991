//! Job category API trait

use async_trait::async_trait;
use serde_json::Value;

use crate::client::ApiResponse;
use crate::client::models::{CreateJobCategoryRequest, JobCategory, UpdateJobCategoryRequest};
use crate::error::Result;

/// Job category operations (`/job-categories`)
#[async_trait]
pub trait CategoriesApi: Send + Sync {
    async fn create_category(
        &self,
        request: &CreateJobCategoryRequest,
    ) -> Result<ApiResponse<JobCategory>>;

    async fn list_categories(&self) -> Result<ApiResponse<Vec<JobCategory>>>;

    async fn get_category(&self, id: i64) -> Result<ApiResponse<JobCategory>>;

    async fn update_category(
        &self,
        id: i64,
        request: &UpdateJobCategoryRequest,
    ) -> Result<ApiResponse<JobCategory>>;

    async fn delete_category(&self, id: i64) -> Result<ApiResponse<Value>>;
}

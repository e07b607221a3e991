//! Job API trait

use async_trait::async_trait;
use serde_json::Value;

use crate::client::ApiResponse;
use crate::client::models::{CreateJobRequest, Job, JobQuery, UpdateJobRequest};
use crate::error::Result;

/// Job posting operations (`/jobs`)
#[async_trait]
pub trait JobsApi: Send + Sync {
    /// `POST /jobs`
    async fn create_job(&self, request: &CreateJobRequest) -> Result<ApiResponse<Job>>;

    /// `GET /jobs` with optional filters as query parameters
    async fn list_jobs(&self, query: &JobQuery) -> Result<ApiResponse<Vec<Job>>>;

    /// `GET /jobs/myjobs`: postings owned by the caller
    async fn my_jobs(&self) -> Result<ApiResponse<Vec<Job>>>;

    /// `GET /jobs/:id`
    async fn get_job(&self, id: i64) -> Result<ApiResponse<Job>>;

    /// `PATCH /jobs/:id`
    async fn update_job(&self, id: i64, request: &UpdateJobRequest) -> Result<ApiResponse<Job>>;

    /// `DELETE /jobs/:id`
    async fn delete_job(&self, id: i64) -> Result<ApiResponse<Value>>;

    /// `PATCH /jobs/:id/toggle-active`
    async fn toggle_job_active(&self, id: i64) -> Result<ApiResponse<Job>>;
}

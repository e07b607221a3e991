//! Application API trait

use async_trait::async_trait;
use serde_json::Value;

use crate::client::ApiResponse;
use crate::client::models::{
    Application, ApplicationStatus, CreateApplicationRequest, UpdateApplicationRequest,
};
use crate::error::Result;

/// Job application operations (`/applications`)
#[async_trait]
pub trait ApplicationsApi: Send + Sync {
    async fn create_application(
        &self,
        request: &CreateApplicationRequest,
    ) -> Result<ApiResponse<Application>>;

    async fn list_applications(&self) -> Result<ApiResponse<Vec<Application>>>;

    /// `GET /applications/myapplications`: applications submitted by the caller
    async fn my_applications(&self) -> Result<ApiResponse<Vec<Application>>>;

    async fn get_application(&self, id: i64) -> Result<ApiResponse<Application>>;

    async fn update_application(
        &self,
        id: i64,
        request: &UpdateApplicationRequest,
    ) -> Result<ApiResponse<Application>>;

    async fn delete_application(&self, id: i64) -> Result<ApiResponse<Value>>;

    /// `PATCH /applications/:id/status?status=<STATUS>`
    async fn update_application_status(
        &self,
        id: i64,
        status: ApplicationStatus,
    ) -> Result<ApiResponse<Application>>;
}

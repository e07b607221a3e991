//! Worker API trait

use async_trait::async_trait;
use serde_json::Value;

use crate::client::ApiResponse;
use crate::client::models::{CreateWorkerRequest, ProfilePhoto, UpdateWorkerRequest, Worker};
use crate::error::Result;

/// Worker profile operations (`/worker`)
#[async_trait]
pub trait WorkersApi: Send + Sync {
    /// `POST /worker` as JSON
    async fn create_worker(&self, request: &CreateWorkerRequest) -> Result<ApiResponse<Worker>>;

    /// `POST /worker` as a multipart form carrying a profile photo
    async fn create_worker_with_photo(
        &self,
        request: &CreateWorkerRequest,
        photo: ProfilePhoto,
    ) -> Result<ApiResponse<Worker>>;

    async fn list_workers(&self) -> Result<ApiResponse<Vec<Worker>>>;

    /// `GET /worker/me`
    async fn my_worker_profile(&self) -> Result<ApiResponse<Worker>>;

    /// `PATCH /worker/me`
    async fn update_my_worker_profile(
        &self,
        request: &UpdateWorkerRequest,
    ) -> Result<ApiResponse<Worker>>;

    async fn get_worker(&self, id: i64) -> Result<ApiResponse<Worker>>;

    async fn update_worker(
        &self,
        id: i64,
        request: &UpdateWorkerRequest,
    ) -> Result<ApiResponse<Worker>>;

    async fn delete_worker(&self, id: i64) -> Result<ApiResponse<Value>>;

    /// `PATCH /worker/me/toggle-availability`
    async fn toggle_availability(&self) -> Result<ApiResponse<Worker>>;
}

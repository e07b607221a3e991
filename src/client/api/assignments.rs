//! Work assignment API trait

use async_trait::async_trait;
use serde_json::Value;

use crate::client::ApiResponse;
use crate::client::models::{
    AssignmentStatus, CreateAssignmentRequest, UpdateAssignmentRequest, WorkAssignment,
};
use crate::error::Result;

/// Work assignment operations (`/work-assignments`)
#[async_trait]
pub trait AssignmentsApi: Send + Sync {
    async fn create_assignment(
        &self,
        request: &CreateAssignmentRequest,
    ) -> Result<ApiResponse<WorkAssignment>>;

    async fn list_assignments(&self) -> Result<ApiResponse<Vec<WorkAssignment>>>;

    async fn get_assignment(&self, id: i64) -> Result<ApiResponse<WorkAssignment>>;

    async fn update_assignment(
        &self,
        id: i64,
        request: &UpdateAssignmentRequest,
    ) -> Result<ApiResponse<WorkAssignment>>;

    async fn delete_assignment(&self, id: i64) -> Result<ApiResponse<Value>>;

    /// `GET /work-assignments/worker/:id`
    async fn assignments_for_worker(
        &self,
        worker_id: i64,
    ) -> Result<ApiResponse<Vec<WorkAssignment>>>;

    /// `GET /work-assignments/job/:id`
    async fn assignments_for_job(&self, job_id: i64) -> Result<ApiResponse<Vec<WorkAssignment>>>;

    /// `GET /work-assignments/recruiter/:id`
    async fn assignments_for_recruiter(
        &self,
        recruiter_id: i64,
    ) -> Result<ApiResponse<Vec<WorkAssignment>>>;

    /// `PATCH /work-assignments/:id/status` with `{ "status": ... }`
    async fn update_assignment_status(
        &self,
        id: i64,
        status: AssignmentStatus,
    ) -> Result<ApiResponse<WorkAssignment>>;
}

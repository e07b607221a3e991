//! Connection request API trait

use async_trait::async_trait;

use crate::client::ApiResponse;
use crate::client::models::{ConnectionRequest, ConnectionStatus, CreateConnectionRequest};
use crate::error::Result;

/// Connection request operations (`/connection-requests`)
#[async_trait]
pub trait ConnectionsApi: Send + Sync {
    async fn send_connection_request(
        &self,
        request: &CreateConnectionRequest,
    ) -> Result<ApiResponse<ConnectionRequest>>;

    /// `GET /connection-requests`: requests involving the caller
    async fn list_connection_requests(&self) -> Result<ApiResponse<Vec<ConnectionRequest>>>;

    /// `PUT /connection-requests/:id/status`
    async fn update_connection_status(
        &self,
        id: i64,
        status: ConnectionStatus,
    ) -> Result<ApiResponse<ConnectionRequest>>;
}

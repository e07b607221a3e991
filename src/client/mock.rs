//! Mock Hirelink API client for testing
//!
//! Implements the traits the state store depends on without making real
//! API calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::ApiResponse;
use super::api::{AuthApi, ConnectionsApi, WorkersApi};
use super::models::{
    AuthResponse, ConnectionRequest, ConnectionStatus, CreateConnectionRequest,
    CreateWorkerRequest, LoginRequest, ProfilePhoto, RegisterRequest, UpdateWorkerRequest, Worker,
};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure responses via builder methods, then hand it to a store.
#[derive(Default)]
pub struct MockHirelinkClient {
    /// Token returned from login/register
    token: Arc<Mutex<Option<String>>>,
    /// Workers returned from list_workers
    workers: Arc<Mutex<Vec<Worker>>>,
    /// Connection requests returned from list_connection_requests
    connections: Arc<Mutex<Vec<ConnectionRequest>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub login: usize,
    pub register: usize,
    pub list_workers: usize,
    pub toggle_availability: usize,
    pub create_worker: usize,
    pub update_my_worker_profile: usize,
    pub list_connection_requests: usize,
    pub send_connection_request: usize,
    pub update_connection_status: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.login
            + self.register
            + self.list_workers
            + self.toggle_availability
            + self.create_worker
            + self.update_my_worker_profile
            + self.list_connection_requests
            + self.send_connection_request
            + self.update_connection_status
    }
}

impl MockHirelinkClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the token issued by login/register.
    pub async fn with_token(self, token: impl Into<String>) -> Self {
        *self.token.lock().await = Some(token.into());
        self
    }

    pub async fn with_workers(self, workers: Vec<Worker>) -> Self {
        *self.workers.lock().await = workers;
        self
    }

    pub async fn with_connections(self, connections: Vec<ConnectionRequest>) -> Self {
        *self.connections.lock().await = connections;
        self
    }

    /// Configure an error to return on the next call.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    async fn take_error(&self) -> Result<()> {
        match self.error.lock().await.take() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    async fn issue_token(&self) -> Result<ApiResponse<AuthResponse>> {
        self.take_error().await?;
        let token = self
            .token
            .lock()
            .await
            .clone()
            .ok_or_else(|| ApiError::InvalidResponse("no token configured".to_string()))?;
        Ok(ApiResponse::new(
            201,
            AuthResponse {
                access_token: token,
                user: None,
            },
        ))
    }
}

#[async_trait]
impl AuthApi for MockHirelinkClient {
    async fn login(&self, _request: &LoginRequest) -> Result<ApiResponse<AuthResponse>> {
        self.call_count.lock().await.login += 1;
        self.issue_token().await
    }

    async fn register(&self, _request: &RegisterRequest) -> Result<ApiResponse<AuthResponse>> {
        self.call_count.lock().await.register += 1;
        self.issue_token().await
    }
}

#[async_trait]
impl WorkersApi for MockHirelinkClient {
    async fn create_worker(&self, request: &CreateWorkerRequest) -> Result<ApiResponse<Worker>> {
        self.call_count.lock().await.create_worker += 1;
        self.take_error().await?;
        let mut workers = self.workers.lock().await;
        let worker = Worker {
            id: workers.iter().map(|w| w.id).max().unwrap_or(0) + 1,
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            email: None,
            phone: request.phone.clone(),
            location: request.location.clone(),
            profession: request.profession.clone(),
            skills: request.skills.clone(),
            experience_years: request.experience_years,
            bio: request.bio.clone(),
            is_available: true,
            photo_url: None,
        };
        workers.push(worker.clone());
        Ok(ApiResponse::new(201, worker))
    }

    /// Same as `create_worker`, with a made-up URL for the stored photo.
    async fn create_worker_with_photo(
        &self,
        request: &CreateWorkerRequest,
        photo: ProfilePhoto,
    ) -> Result<ApiResponse<Worker>> {
        let mut response = self.create_worker(request).await?;
        response.data.photo_url = Some(format!("/uploads/{}", photo.file_name));
        Ok(response)
    }

    async fn list_workers(&self) -> Result<ApiResponse<Vec<Worker>>> {
        self.call_count.lock().await.list_workers += 1;
        self.take_error().await?;
        Ok(ApiResponse::new(200, self.workers.lock().await.clone()))
    }

    async fn my_worker_profile(&self) -> Result<ApiResponse<Worker>> {
        Err(ApiError::InvalidRequest("not mocked".to_string()).into())
    }

    /// Applies the changed fields to the first configured worker.
    async fn update_my_worker_profile(
        &self,
        request: &UpdateWorkerRequest,
    ) -> Result<ApiResponse<Worker>> {
        self.call_count.lock().await.update_my_worker_profile += 1;
        self.take_error().await?;
        let mut workers = self.workers.lock().await;
        let me = workers
            .first_mut()
            .ok_or_else(|| ApiError::InvalidResponse("no worker configured".to_string()))?;
        if let Some(first_name) = &request.first_name {
            me.first_name = first_name.clone();
        }
        if let Some(last_name) = &request.last_name {
            me.last_name = last_name.clone();
        }
        if request.phone.is_some() {
            me.phone = request.phone.clone();
        }
        if request.location.is_some() {
            me.location = request.location.clone();
        }
        if request.bio.is_some() {
            me.bio = request.bio.clone();
        }
        if request.profession.is_some() {
            me.profession = request.profession.clone();
        }
        if request.experience_years.is_some() {
            me.experience_years = request.experience_years;
        }
        if let Some(skills) = &request.skills {
            me.skills = skills.clone();
        }
        Ok(ApiResponse::new(200, me.clone()))
    }

    async fn get_worker(&self, id: i64) -> Result<ApiResponse<Worker>> {
        let workers = self.workers.lock().await;
        workers
            .iter()
            .find(|w| w.id == id)
            .cloned()
            .map(|w| ApiResponse::new(200, w))
            .ok_or_else(|| {
                ApiError::Server {
                    status: 404,
                    payload: crate::error::ErrorPayload::Message("Worker not found".to_string()),
                }
                .into()
            })
    }

    async fn update_worker(
        &self,
        _id: i64,
        _request: &UpdateWorkerRequest,
    ) -> Result<ApiResponse<Worker>> {
        Err(ApiError::InvalidRequest("not mocked".to_string()).into())
    }

    async fn delete_worker(&self, _id: i64) -> Result<ApiResponse<serde_json::Value>> {
        Err(ApiError::InvalidRequest("not mocked".to_string()).into())
    }

    /// Flips the first configured worker, standing in for "me".
    async fn toggle_availability(&self) -> Result<ApiResponse<Worker>> {
        self.call_count.lock().await.toggle_availability += 1;
        self.take_error().await?;
        let mut workers = self.workers.lock().await;
        let me = workers
            .first_mut()
            .ok_or_else(|| ApiError::InvalidResponse("no worker configured".to_string()))?;
        me.is_available = !me.is_available;
        Ok(ApiResponse::new(200, me.clone()))
    }
}

#[async_trait]
impl ConnectionsApi for MockHirelinkClient {
    async fn send_connection_request(
        &self,
        request: &CreateConnectionRequest,
    ) -> Result<ApiResponse<ConnectionRequest>> {
        self.call_count.lock().await.send_connection_request += 1;
        self.take_error().await?;
        let mut connections = self.connections.lock().await;
        let created = ConnectionRequest {
            id: connections.len() as i64 + 1,
            sender_id: 1,
            receiver_id: request.receiver_id,
            message: request.message.clone(),
            status: ConnectionStatus::Pending,
            created_at: None,
        };
        connections.push(created.clone());
        Ok(ApiResponse::new(201, created))
    }

    async fn list_connection_requests(&self) -> Result<ApiResponse<Vec<ConnectionRequest>>> {
        self.call_count.lock().await.list_connection_requests += 1;
        self.take_error().await?;
        Ok(ApiResponse::new(200, self.connections.lock().await.clone()))
    }

    async fn update_connection_status(
        &self,
        id: i64,
        status: ConnectionStatus,
    ) -> Result<ApiResponse<ConnectionRequest>> {
        self.call_count.lock().await.update_connection_status += 1;
        self.take_error().await?;
        let mut connections = self.connections.lock().await;
        let request = connections
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ApiError::Server {
                status: 404,
                payload: crate::error::ErrorPayload::Message("Request not found".to_string()),
            })?;
        request.status = status;
        Ok(ApiResponse::new(200, request.clone()))
    }
}

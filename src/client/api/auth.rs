//! Authentication API trait

use async_trait::async_trait;

use crate::client::ApiResponse;
use crate::client::models::{AuthResponse, LoginRequest, RegisterRequest};
use crate::error::Result;

/// Account authentication for the Hirelink API
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /auth/login`
    async fn login(&self, request: &LoginRequest) -> Result<ApiResponse<AuthResponse>>;

    /// `POST /auth/register`
    async fn register(&self, request: &RegisterRequest) -> Result<ApiResponse<AuthResponse>>;
}

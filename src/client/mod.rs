//! Hirelink API client

use serde::Serialize;

pub mod api;
pub mod hirelink;
pub mod interceptor;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use api::{
    ApplicationsApi, AssignmentsApi, AuthApi, CategoriesApi, ConnectionsApi, JobsApi, WorkersApi,
};
pub use hirelink::{HirelinkClient, REQUEST_TIMEOUT};
pub use interceptor::{AuthInterceptor, Interceptor};

/// Every Hirelink API resource
pub trait HirelinkApi:
    AuthApi + JobsApi + ApplicationsApi + AssignmentsApi + WorkersApi + CategoriesApi + ConnectionsApi
{
}

impl<T> HirelinkApi for T where
    T: AuthApi
        + JobsApi
        + ApplicationsApi
        + AssignmentsApi
        + WorkersApi
        + CategoriesApi
        + ConnectionsApi
{
}

/// A successful response: HTTP status plus the parsed body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(status: u16, data: T) -> Self {
        Self { status, data }
    }

    /// Drop the status and keep the body.
    pub fn into_data(self) -> T {
        self.data
    }
}

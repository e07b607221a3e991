//! Hirelink API client implementation

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::multipart::{Form, Part};
use reqwest::{Client as HttpClient, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::api::{
    ApplicationsApi, AssignmentsApi, AuthApi, CategoriesApi, ConnectionsApi, JobsApi, WorkersApi,
};
use super::interceptor::{AuthInterceptor, Interceptor};
use super::models::{
    Application, ApplicationStatus, AssignmentStatus, AuthResponse, ConnectionRequest,
    ConnectionStatus, CreateApplicationRequest, CreateAssignmentRequest, CreateConnectionRequest,
    CreateJobCategoryRequest, CreateJobRequest, CreateWorkerRequest, Job, JobCategory, JobQuery,
    LoginRequest, ProfilePhoto, RegisterRequest, UpdateApplicationRequest,
    UpdateAssignmentRequest, UpdateAssignmentStatusRequest, UpdateConnectionStatusRequest,
    UpdateJobCategoryRequest, UpdateJobRequest, UpdateWorkerRequest, WorkAssignment, Worker,
};
use super::ApiResponse;
use crate::error::{ApiError, ErrorPayload, Result};
use crate::session::TokenStore;
use crate::validation::FormData;

/// Overall timeout applied to every request
pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(15_000);

/// Hirelink API client
///
/// Stateless apart from its configuration: the session token is read from
/// the token store by the interceptor on every request. Failures are
/// reported once and never retried.
pub struct HirelinkClient {
    http: HttpClient,
    base_url: String,
    interceptor: Arc<dyn Interceptor>,
}

impl HirelinkClient {
    /// Create a client that authenticates from the given token store
    pub fn new(base_url: &str, tokens: Arc<dyn TokenStore>) -> Result<Self> {
        Self::with_interceptor(base_url, Arc::new(AuthInterceptor::new(tokens)))
    }

    /// Create a client with a custom interceptor
    pub fn with_interceptor(base_url: &str, interceptor: Arc<dyn Interceptor>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            interceptor,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Run the interceptor, send, and map the response.
    async fn send<T>(&self, builder: RequestBuilder, multipart: bool) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned + Send,
    {
        let mut request = builder
            .build()
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        self.interceptor.on_request(&mut request, multipart);

        debug!("{} {}", request.method(), request.url());

        let response = self.http.execute(request).await.map_err(ApiError::from)?;
        let response = self.interceptor.on_response(response);
        let status = response.status();

        debug!("Response status: {}", status);

        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!("Failed to read error body for {}: {}", status, e);
                    String::new()
                }
            };
            return Err(ApiError::Server {
                status: status.as_u16(),
                payload: ErrorPayload::from_body(&body),
            }
            .into());
        }

        let bytes = response.bytes().await.map_err(ApiError::from)?;
        let parsed = if bytes.iter().all(u8::is_ascii_whitespace) {
            serde_json::from_value(Value::Null)
        } else {
            serde_json::from_slice(&bytes)
        };
        let data = parsed
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        Ok(ApiResponse::new(status.as_u16(), data))
    }

    async fn get<T>(&self, path: &str) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned + Send,
    {
        self.send(self.http.get(self.url(path)), false).await
    }

    async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned + Send,
        Q: Serialize + Sync + ?Sized,
    {
        self.send(self.http.get(self.url(path)).query(query), false)
            .await
    }

    async fn post<T, B>(&self, path: &str, body: &B) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync + ?Sized,
    {
        self.send(self.http.post(self.url(path)).json(body), false)
            .await
    }

    async fn post_multipart<T>(&self, path: &str, form: Form) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned + Send,
    {
        self.send(self.http.post(self.url(path)).multipart(form), true)
            .await
    }

    async fn patch<T, B>(&self, path: &str, body: &B) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync + ?Sized,
    {
        self.send(self.http.patch(self.url(path)).json(body), false)
            .await
    }

    async fn patch_empty<T>(&self, path: &str) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned + Send,
    {
        self.send(self.http.patch(self.url(path)), false).await
    }

    async fn put<T, B>(&self, path: &str, body: &B) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync + ?Sized,
    {
        self.send(self.http.put(self.url(path)).json(body), false)
            .await
    }

    async fn delete<T>(&self, path: &str) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned + Send,
    {
        self.send(self.http.delete(self.url(path)), false).await
    }
}

/// Flatten a worker DTO into multipart text fields plus the photo part.
///
/// Text fields are encoded exactly as [`FormData`] sees them during
/// validation, so lists such as `skills` go out comma-separated.
fn worker_form(request: &CreateWorkerRequest, photo: ProfilePhoto) -> Result<Form> {
    let fields = FormData::from_serialize(request)?;
    let mut form = Form::new();
    for (key, text) in fields.fields() {
        form = form.text(key.to_string(), text.to_string());
    }

    let part = Part::bytes(photo.bytes)
        .file_name(photo.file_name)
        .mime_str(&photo.mime_type)
        .map_err(|e| ApiError::InvalidRequest(format!("Invalid photo type: {}", e)))?;

    Ok(form.part("photo", part))
}

#[async_trait]
impl AuthApi for HirelinkClient {
    async fn login(&self, request: &LoginRequest) -> Result<ApiResponse<AuthResponse>> {
        self.post("/auth/login", request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<ApiResponse<AuthResponse>> {
        self.post("/auth/register", request).await
    }
}

#[async_trait]
impl JobsApi for HirelinkClient {
    async fn create_job(&self, request: &CreateJobRequest) -> Result<ApiResponse<Job>> {
        self.post("/jobs", request).await
    }

    async fn list_jobs(&self, query: &JobQuery) -> Result<ApiResponse<Vec<Job>>> {
        self.get_with_query("/jobs", query).await
    }

    async fn my_jobs(&self) -> Result<ApiResponse<Vec<Job>>> {
        self.get("/jobs/myjobs").await
    }

    async fn get_job(&self, id: i64) -> Result<ApiResponse<Job>> {
        self.get(&format!("/jobs/{}", id)).await
    }

    async fn update_job(&self, id: i64, request: &UpdateJobRequest) -> Result<ApiResponse<Job>> {
        self.patch(&format!("/jobs/{}", id), request).await
    }

    async fn delete_job(&self, id: i64) -> Result<ApiResponse<Value>> {
        self.delete(&format!("/jobs/{}", id)).await
    }

    async fn toggle_job_active(&self, id: i64) -> Result<ApiResponse<Job>> {
        self.patch_empty(&format!("/jobs/{}/toggle-active", id))
            .await
    }
}

#[async_trait]
impl ApplicationsApi for HirelinkClient {
    async fn create_application(
        &self,
        request: &CreateApplicationRequest,
    ) -> Result<ApiResponse<Application>> {
        self.post("/applications", request).await
    }

    async fn list_applications(&self) -> Result<ApiResponse<Vec<Application>>> {
        self.get("/applications").await
    }

    async fn my_applications(&self) -> Result<ApiResponse<Vec<Application>>> {
        self.get("/applications/myapplications").await
    }

    async fn get_application(&self, id: i64) -> Result<ApiResponse<Application>> {
        self.get(&format!("/applications/{}", id)).await
    }

    async fn update_application(
        &self,
        id: i64,
        request: &UpdateApplicationRequest,
    ) -> Result<ApiResponse<Application>> {
        self.patch(&format!("/applications/{}", id), request).await
    }

    async fn delete_application(&self, id: i64) -> Result<ApiResponse<Value>> {
        self.delete(&format!("/applications/{}", id)).await
    }

    async fn update_application_status(
        &self,
        id: i64,
        status: ApplicationStatus,
    ) -> Result<ApiResponse<Application>> {
        let url = self.url(&format!("/applications/{}/status", id));
        self.send(
            self.http.patch(url).query(&[("status", status.as_str())]),
            false,
        )
        .await
    }
}

#[async_trait]
impl AssignmentsApi for HirelinkClient {
    async fn create_assignment(
        &self,
        request: &CreateAssignmentRequest,
    ) -> Result<ApiResponse<WorkAssignment>> {
        self.post("/work-assignments", request).await
    }

    async fn list_assignments(&self) -> Result<ApiResponse<Vec<WorkAssignment>>> {
        self.get("/work-assignments").await
    }

    async fn get_assignment(&self, id: i64) -> Result<ApiResponse<WorkAssignment>> {
        self.get(&format!("/work-assignments/{}", id)).await
    }

    async fn update_assignment(
        &self,
        id: i64,
        request: &UpdateAssignmentRequest,
    ) -> Result<ApiResponse<WorkAssignment>> {
        self.patch(&format!("/work-assignments/{}", id), request)
            .await
    }

    async fn delete_assignment(&self, id: i64) -> Result<ApiResponse<Value>> {
        self.delete(&format!("/work-assignments/{}", id)).await
    }

    async fn assignments_for_worker(
        &self,
        worker_id: i64,
    ) -> Result<ApiResponse<Vec<WorkAssignment>>> {
        self.get(&format!("/work-assignments/worker/{}", worker_id))
            .await
    }

    async fn assignments_for_job(&self, job_id: i64) -> Result<ApiResponse<Vec<WorkAssignment>>> {
        self.get(&format!("/work-assignments/job/{}", job_id)).await
    }

    async fn assignments_for_recruiter(
        &self,
        recruiter_id: i64,
    ) -> Result<ApiResponse<Vec<WorkAssignment>>> {
        self.get(&format!("/work-assignments/recruiter/{}", recruiter_id))
            .await
    }

    async fn update_assignment_status(
        &self,
        id: i64,
        status: AssignmentStatus,
    ) -> Result<ApiResponse<WorkAssignment>> {
        self.patch(
            &format!("/work-assignments/{}/status", id),
            &UpdateAssignmentStatusRequest { status },
        )
        .await
    }
}

#[async_trait]
impl WorkersApi for HirelinkClient {
    async fn create_worker(&self, request: &CreateWorkerRequest) -> Result<ApiResponse<Worker>> {
        self.post("/worker", request).await
    }

    async fn create_worker_with_photo(
        &self,
        request: &CreateWorkerRequest,
        photo: ProfilePhoto,
    ) -> Result<ApiResponse<Worker>> {
        let form = worker_form(request, photo)?;
        self.post_multipart("/worker", form).await
    }

    async fn list_workers(&self) -> Result<ApiResponse<Vec<Worker>>> {
        self.get("/worker").await
    }

    async fn my_worker_profile(&self) -> Result<ApiResponse<Worker>> {
        self.get("/worker/me").await
    }

    async fn update_my_worker_profile(
        &self,
        request: &UpdateWorkerRequest,
    ) -> Result<ApiResponse<Worker>> {
        self.patch("/worker/me", request).await
    }

    async fn get_worker(&self, id: i64) -> Result<ApiResponse<Worker>> {
        self.get(&format!("/worker/{}", id)).await
    }

    async fn update_worker(
        &self,
        id: i64,
        request: &UpdateWorkerRequest,
    ) -> Result<ApiResponse<Worker>> {
        self.patch(&format!("/worker/{}", id), request).await
    }

    async fn delete_worker(&self, id: i64) -> Result<ApiResponse<Value>> {
        self.delete(&format!("/worker/{}", id)).await
    }

    async fn toggle_availability(&self) -> Result<ApiResponse<Worker>> {
        self.patch_empty("/worker/me/toggle-availability").await
    }
}

#[async_trait]
impl CategoriesApi for HirelinkClient {
    async fn create_category(
        &self,
        request: &CreateJobCategoryRequest,
    ) -> Result<ApiResponse<JobCategory>> {
        self.post("/job-categories", request).await
    }

    async fn list_categories(&self) -> Result<ApiResponse<Vec<JobCategory>>> {
        self.get("/job-categories").await
    }

    async fn get_category(&self, id: i64) -> Result<ApiResponse<JobCategory>> {
        self.get(&format!("/job-categories/{}", id)).await
    }

    async fn update_category(
        &self,
        id: i64,
        request: &UpdateJobCategoryRequest,
    ) -> Result<ApiResponse<JobCategory>> {
        self.patch(&format!("/job-categories/{}", id), request).await
    }

    async fn delete_category(&self, id: i64) -> Result<ApiResponse<Value>> {
        self.delete(&format!("/job-categories/{}", id)).await
    }
}

#[async_trait]
impl ConnectionsApi for HirelinkClient {
    async fn send_connection_request(
        &self,
        request: &CreateConnectionRequest,
    ) -> Result<ApiResponse<ConnectionRequest>> {
        self.post("/connection-requests", request).await
    }

    async fn list_connection_requests(&self) -> Result<ApiResponse<Vec<ConnectionRequest>>> {
        self.get("/connection-requests").await
    }

    async fn update_connection_status(
        &self,
        id: i64,
        status: ConnectionStatus,
    ) -> Result<ApiResponse<ConnectionRequest>> {
        self.put(
            &format!("/connection-requests/{}/status", id),
            &UpdateConnectionStatusRequest { status },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryTokenStore;

    fn client(base_url: &str) -> HirelinkClient {
        HirelinkClient::new(base_url, Arc::new(MemoryTokenStore::new())).unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = client("http://localhost:3000");
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = client("http://localhost:3000/api/");
        assert_eq!(client.url("/jobs/5"), "http://localhost:3000/api/jobs/5");
    }

    #[test]
    fn test_timeout_is_fifteen_seconds() {
        assert_eq!(REQUEST_TIMEOUT.as_millis(), 15_000);
    }

    #[test]
    fn test_worker_form_builds_from_dto() {
        let request = CreateWorkerRequest {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            skills: vec!["cobol".to_string()],
            ..Default::default()
        };
        let photo = ProfilePhoto {
            file_name: "me.png".to_string(),
            mime_type: "image/png".to_string(),
            bytes: vec![1, 2, 3],
        };
        let form = worker_form(&request, photo).unwrap();
        assert!(!form.boundary().is_empty());
    }

    #[test]
    fn test_worker_form_rejects_bad_mime() {
        let photo = ProfilePhoto {
            file_name: "me.png".to_string(),
            mime_type: "not a mime".to_string(),
            bytes: vec![],
        };
        assert!(worker_form(&CreateWorkerRequest::default(), photo).is_err());
    }
}

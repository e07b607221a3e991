//! Client state store
//!
//! A [`Store`] owns the [`AppState`], the [`Session`] and the API client.
//! State only changes through [`Store::dispatch`], which runs the pure
//! [`reduce`] function. The async operations ("thunks") below dispatch
//! `Pending`, call the API, then dispatch either a result action or
//! `Rejected` with the normalized error message.

use std::future::Future;
use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::RwLock;

use crate::client::api::{AuthApi, ConnectionsApi, WorkersApi};
use crate::client::models::{
    AuthResponse, ConnectionRequest, ConnectionStatus, CreateConnectionRequest,
    CreateWorkerRequest, LoginRequest, ProfilePhoto, RegisterRequest, UpdateWorkerRequest, User,
    Worker,
};
use crate::error::{Error, Result};
use crate::session::{Session, TokenClaims};
use crate::validation::{FormData, schemas};

pub mod selectors;
mod state;

pub use state::{Action, AppState, AuthState, reduce};

/// API surface the store talks to
pub trait StoreApi: AuthApi + WorkersApi + ConnectionsApi {}

impl<T: AuthApi + WorkersApi + ConnectionsApi> StoreApi for T {}

/// Workers and notifications fetched together
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub workers: Vec<Worker>,
    pub notifications: Vec<ConnectionRequest>,
}

pub struct Store<C: StoreApi> {
    client: Arc<C>,
    session: Session,
    state: RwLock<AppState>,
}

impl<C: StoreApi> Store<C> {
    pub fn new(client: Arc<C>, session: Session) -> Self {
        Self {
            client,
            session,
            state: RwLock::new(AppState::default()),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Snapshot of the current state.
    pub async fn state(&self) -> AppState {
        self.state.read().await.clone()
    }

    /// Run a selector against the current state.
    pub async fn select<T>(&self, selector: impl FnOnce(&AppState) -> T) -> T {
        selector(&*self.state.read().await)
    }

    pub async fn dispatch(&self, action: Action) {
        debug!("dispatch {:?}", action_name(&action));
        let mut state = self.state.write().await;
        let current = std::mem::take(&mut *state);
        *state = reduce(current, action);
    }

    /// Dispatch `Pending`, await `request`, record the outcome, then `Settled`.
    async fn run<T, F>(&self, request: F, on_success: impl FnOnce(&T) -> Action) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        self.dispatch(Action::Pending).await;
        let outcome = match request.await {
            Ok(value) => {
                self.dispatch(on_success(&value)).await;
                Ok(value)
            }
            Err(e) => Err(self.reject(e).await),
        };
        self.dispatch(Action::Settled).await;
        outcome
    }

    async fn reject(&self, err: Error) -> Error {
        let message = err.user_message();
        warn!("Action failed: {}", message);
        if matches!(&err, Error::Api(api) if api.is_unauthorized()) {
            self.dispatch(Action::SessionExpired).await;
        }
        self.dispatch(Action::Rejected(message)).await;
        err
    }

    /// Load the persisted session into state. Returns the restored identity.
    pub async fn restore_session(&self) -> Option<TokenClaims> {
        match self.session.restore() {
            Some(claims) => {
                debug!("Restored session for {}", claims.email);
                self.dispatch(Action::LoggedIn {
                    claims: claims.clone(),
                    account: None,
                })
                .await;
                Some(claims)
            }
            None => {
                self.dispatch(Action::LoggedOut).await;
                None
            }
        }
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<TokenClaims> {
        if let Err(e) = schemas::login().ensure_dto(request) {
            return Err(self.reject(e).await);
        }
        let (claims, _) = self
            .run(
                async { self.open_session(self.client.login(request).await?.into_data()) },
                logged_in,
            )
            .await?;
        info!("Logged in as {}", claims.email);
        Ok(claims)
    }

    /// Create an account and sign in with the token it returns.
    pub async fn register(
        &self,
        request: &RegisterRequest,
        confirm_password: &str,
    ) -> Result<TokenClaims> {
        let validated = FormData::from_serialize(request).and_then(|form| {
            schemas::register()
                .ensure(&form.with("confirmPassword", confirm_password))
                .map_err(Error::from)
        });
        if let Err(e) = validated {
            return Err(self.reject(e).await);
        }
        let (claims, _) = self
            .run(
                async { self.open_session(self.client.register(request).await?.into_data()) },
                logged_in,
            )
            .await?;
        info!("Registered {} as {}", claims.email, claims.role);
        Ok(claims)
    }

    /// Persist the issued token. Nothing is stored if it does not decode.
    fn open_session(&self, auth: AuthResponse) -> Result<(TokenClaims, Option<User>)> {
        let claims = self.session.login(&auth.access_token)?;
        Ok((claims, auth.user))
    }

    /// Clear the session. State is reset even if the storage fails.
    pub async fn logout(&self) -> Result<()> {
        let result = self.session.logout();
        self.dispatch(Action::LoggedOut).await;
        result
    }

    pub async fn fetch_workers(&self) -> Result<Vec<Worker>> {
        self.run(
            async { Ok(self.client.list_workers().await?.into_data()) },
            |workers: &Vec<Worker>| Action::WorkersLoaded(workers.clone()),
        )
        .await
    }

    pub async fn fetch_notifications(&self) -> Result<Vec<ConnectionRequest>> {
        self.run(
            async { Ok(self.client.list_connection_requests().await?.into_data()) },
            |requests: &Vec<ConnectionRequest>| Action::NotificationsLoaded(requests.clone()),
        )
        .await
    }

    /// Fetch workers and notifications concurrently.
    pub async fn fetch_dashboard(&self) -> Result<Dashboard> {
        self.run(
            async {
                let (workers, notifications) = futures::try_join!(
                    self.client.list_workers(),
                    self.client.list_connection_requests()
                )?;
                Ok(Dashboard {
                    workers: workers.into_data(),
                    notifications: notifications.into_data(),
                })
            },
            |dashboard: &Dashboard| Action::DashboardLoaded {
                workers: dashboard.workers.clone(),
                notifications: dashboard.notifications.clone(),
            },
        )
        .await
    }

    pub async fn send_connection_request(
        &self,
        request: &CreateConnectionRequest,
    ) -> Result<ConnectionRequest> {
        if let Err(e) = schemas::connection_request().ensure_dto(request) {
            return Err(self.reject(e).await);
        }
        self.run(
            async {
                Ok(self
                    .client
                    .send_connection_request(request)
                    .await?
                    .into_data())
            },
            |created: &ConnectionRequest| Action::ConnectionSent(created.clone()),
        )
        .await
    }

    /// Accept or reject a received request.
    pub async fn respond_to_connection_request(
        &self,
        id: i64,
        status: ConnectionStatus,
    ) -> Result<ConnectionRequest> {
        self.run(
            async {
                Ok(self
                    .client
                    .update_connection_status(id, status)
                    .await?
                    .into_data())
            },
            |updated: &ConnectionRequest| Action::NotificationUpdated(updated.clone()),
        )
        .await
    }

    pub async fn toggle_availability(&self) -> Result<Worker> {
        self.run(
            async { Ok(self.client.toggle_availability().await?.into_data()) },
            |worker: &Worker| Action::WorkerUpdated(worker.clone()),
        )
        .await
    }

    /// Create the worker profile, uploading it as multipart when a photo
    /// is attached.
    pub async fn create_worker_profile(
        &self,
        request: &CreateWorkerRequest,
        photo: Option<ProfilePhoto>,
    ) -> Result<Worker> {
        if let Err(e) = schemas::worker_profile().ensure_dto(request) {
            return Err(self.reject(e).await);
        }
        self.run(
            async {
                let response = match photo {
                    Some(photo) => self.client.create_worker_with_photo(request, photo).await?,
                    None => self.client.create_worker(request).await?,
                };
                Ok(response.into_data())
            },
            |worker: &Worker| Action::WorkerUpdated(worker.clone()),
        )
        .await
    }

    /// Change some fields of the signed-in worker's profile.
    pub async fn update_worker_profile(&self, request: &UpdateWorkerRequest) -> Result<Worker> {
        if let Err(e) = schemas::worker_profile().partial().ensure_dto(request) {
            return Err(self.reject(e).await);
        }
        self.run(
            async { Ok(self.client.update_my_worker_profile(request).await?.into_data()) },
            |worker: &Worker| Action::WorkerUpdated(worker.clone()),
        )
        .await
    }
}

fn logged_in((claims, account): &(TokenClaims, Option<User>)) -> Action {
    Action::LoggedIn {
        claims: claims.clone(),
        account: account.clone(),
    }
}

fn action_name(action: &Action) -> &'static str {
    match action {
        Action::Pending => "pending",
        Action::Rejected(_) => "rejected",
        Action::LoggedIn { .. } => "logged_in",
        Action::LoggedOut => "logged_out",
        Action::SessionExpired => "session_expired",
        Action::WorkersLoaded(_) => "workers_loaded",
        Action::WorkerUpdated(_) => "worker_updated",
        Action::NotificationsLoaded(_) => "notifications_loaded",
        Action::NotificationUpdated(_) => "notification_updated",
        Action::ConnectionSent(_) => "connection_sent",
        Action::DashboardLoaded { .. } => "dashboard_loaded",
        Action::Settled => "settled",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::MockHirelinkClient;
    use crate::client::models::Role;
    use crate::error::{ApiError, ErrorPayload, FieldError};
    use crate::session::{MemoryTokenStore, testing::token_expiring_at};
    use chrono::Utc;

    fn valid_token() -> String {
        token_expiring_at(Utc::now().timestamp() + 3600)
    }

    fn worker(id: i64, available: bool) -> Worker {
        serde_json::from_value(serde_json::json!({
            "id": id, "firstName": "Sam", "lastName": "Hill", "isAvailable": available,
        }))
        .unwrap()
    }

    fn store(client: MockHirelinkClient) -> Store<MockHirelinkClient> {
        Store::new(Arc::new(client), Session::in_memory())
    }

    fn login_request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_success() {
        let store = store(MockHirelinkClient::new().with_token(valid_token()).await);

        let claims = store
            .login(&login_request("ada@example.com", "secret1"))
            .await
            .unwrap();

        assert_eq!(claims.role, Role::Recruiter);
        let state = store.state().await;
        assert!(selectors::is_authenticated(&state));
        assert!(!selectors::is_loading(&state));
        assert!(state.error.is_none());
        assert!(store.session().is_valid());
    }

    #[tokio::test]
    async fn test_login_validation_never_calls_api() {
        let store = store(MockHirelinkClient::new().with_token(valid_token()).await);

        let err = store
            .login(&login_request("not-an-email", "secret1"))
            .await
            .unwrap_err();

        match err {
            Error::Validation(v) => assert_eq!(
                v.errors,
                vec![FieldError::new("email", "must be a valid email address")]
            ),
            other => panic!("Expected validation error, got {:?}", other),
        }
        assert_eq!(store.client().call_counts().await.total(), 0);
        let state = store.state().await;
        assert!(state.error.as_deref().unwrap().starts_with("Validation failed"));
        assert!(!selectors::is_authenticated(&state));
    }

    #[tokio::test]
    async fn test_login_server_error_is_normalized() {
        let client = MockHirelinkClient::new()
            .with_error(ApiError::Server {
                status: 401,
                payload: ErrorPayload::Message("Invalid credentials".to_string()),
            })
            .await;
        let store = store(client);

        assert!(
            store
                .login(&login_request("ada@example.com", "secret1"))
                .await
                .is_err()
        );

        let state = store.state().await;
        assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
        assert_eq!(state.in_flight, 0);
        assert!(!store.session().is_valid());
    }

    #[tokio::test]
    async fn test_login_with_undecodable_token_stores_nothing() {
        let store = store(MockHirelinkClient::new().with_token("opaque").await);

        assert!(
            store
                .login(&login_request("ada@example.com", "secret1"))
                .await
                .is_err()
        );
        assert!(store.session().token().is_none());
        assert!(store.state().await.error.is_some());
    }

    #[tokio::test]
    async fn test_register_checks_confirmation_first() {
        let store = store(MockHirelinkClient::new().with_token(valid_token()).await);
        let request = RegisterRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "engine123".to_string(),
            role: Role::Recruiter,
        };

        assert!(store.register(&request, "different").await.is_err());
        assert_eq!(store.client().call_counts().await.register, 0);

        let claims = store.register(&request, "engine123").await.unwrap();
        assert_eq!(claims.email, "ada@example.com");
        assert_eq!(store.client().call_counts().await.register, 1);
    }

    #[tokio::test]
    async fn test_restore_and_logout() {
        let session = Session::new(Arc::new(MemoryTokenStore::with_token(valid_token())));
        let store = Store::new(Arc::new(MockHirelinkClient::new()), session);

        assert!(store.restore_session().await.is_some());
        assert!(store.select(selectors::is_authenticated).await);

        store.logout().await.unwrap();
        assert_eq!(store.state().await, AppState::default());
        assert!(store.session().token().is_none());
    }

    #[tokio::test]
    async fn test_restore_expired_session() {
        let expired = token_expiring_at(Utc::now().timestamp() - 60);
        let session = Session::new(Arc::new(MemoryTokenStore::with_token(expired)));
        let store = Store::new(Arc::new(MockHirelinkClient::new()), session);

        assert!(store.restore_session().await.is_none());
        assert!(!store.select(selectors::is_authenticated).await);
    }

    #[tokio::test]
    async fn test_fetch_workers_and_toggle() {
        let client = MockHirelinkClient::new()
            .with_workers(vec![worker(1, true), worker(2, false)])
            .await;
        let store = store(client);

        store.fetch_workers().await.unwrap();
        assert_eq!(store.select(|s| selectors::available_workers(s).len()).await, 1);

        let me = store.toggle_availability().await.unwrap();
        assert!(!me.is_available);
        assert_eq!(store.select(|s| selectors::available_workers(s).len()).await, 0);
    }

    #[tokio::test]
    async fn test_fetch_dashboard_concurrently() {
        let client = MockHirelinkClient::new()
            .with_workers(vec![worker(1, true)])
            .await
            .with_connections(vec![ConnectionRequest {
                id: 1,
                sender_id: 2,
                receiver_id: 7,
                message: None,
                status: ConnectionStatus::Pending,
                created_at: None,
            }])
            .await;
        let store = store(client);

        let dashboard = store.fetch_dashboard().await.unwrap();
        assert_eq!(dashboard.workers.len(), 1);
        assert_eq!(dashboard.notifications.len(), 1);

        let counts = store.client().call_counts().await;
        assert_eq!(counts.list_workers, 1);
        assert_eq!(counts.list_connection_requests, 1);
        assert_eq!(store.state().await.notifications.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_failure_records_generic_network_message() {
        let client = MockHirelinkClient::new()
            .with_error(ApiError::Network("connection refused".to_string()))
            .await;
        let store = store(client);

        assert!(store.fetch_workers().await.is_err());
        let state = store.state().await;
        assert!(
            state
                .error
                .as_deref()
                .unwrap()
                .contains("Unable to reach the server")
        );
        assert!(state.workers.is_empty());
    }

    #[tokio::test]
    async fn test_unauthorized_marks_session_expired() {
        let client = MockHirelinkClient::new()
            .with_token(valid_token())
            .await
            .with_error(ApiError::Server {
                status: 401,
                payload: ErrorPayload::Message("Unauthorized".to_string()),
            })
            .await;
        let store = store(client);
        store.session().login(&valid_token()).unwrap();
        store.restore_session().await;

        assert!(store.fetch_notifications().await.is_err());
        let state = store.state().await;
        assert!(!state.auth.token_valid);
        assert_eq!(state.error.as_deref(), Some("Unauthorized"));
    }

    #[tokio::test]
    async fn test_connection_request_flow() {
        let store = store(MockHirelinkClient::new());

        let invalid = CreateConnectionRequest {
            receiver_id: 0,
            message: None,
        };
        assert!(store.send_connection_request(&invalid).await.is_err());
        assert_eq!(store.client().call_counts().await.send_connection_request, 0);

        let sent = store
            .send_connection_request(&CreateConnectionRequest {
                receiver_id: 3,
                message: Some("Available next week?".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(sent.status, ConnectionStatus::Pending);

        let updated = store
            .respond_to_connection_request(sent.id, ConnectionStatus::Accepted)
            .await
            .unwrap();
        assert_eq!(updated.status, ConnectionStatus::Accepted);

        let state = store.state().await;
        assert_eq!(state.notifications.len(), 1);
        assert_eq!(state.notifications[0].status, ConnectionStatus::Accepted);
    }

    #[tokio::test]
    async fn test_create_worker_profile_validates_before_sending() {
        let store = store(MockHirelinkClient::new());
        let invalid = CreateWorkerRequest {
            first_name: "Sam".to_string(),
            last_name: String::new(),
            phone: Some("call me".to_string()),
            ..Default::default()
        };

        match store.create_worker_profile(&invalid, None).await {
            Err(Error::Validation(v)) => assert_eq!(
                v.errors,
                vec![
                    FieldError::new("lastName", "is required"),
                    FieldError::new("phone", "must be a valid phone number"),
                ]
            ),
            other => panic!("Expected validation error, got {:?}", other),
        }
        assert_eq!(store.client().call_counts().await.create_worker, 0);

        let photo = ProfilePhoto {
            file_name: "sam.jpg".to_string(),
            mime_type: "image/jpeg".to_string(),
            bytes: vec![1, 2, 3],
        };
        let created = store
            .create_worker_profile(
                &CreateWorkerRequest {
                    first_name: "Sam".to_string(),
                    last_name: "Hill".to_string(),
                    skills: vec!["welding".to_string()],
                    ..Default::default()
                },
                Some(photo),
            )
            .await
            .unwrap();
        assert_eq!(created.photo_url.as_deref(), Some("/uploads/sam.jpg"));

        let state = store.state().await;
        assert_eq!(selectors::workers(&state), std::slice::from_ref(&created));
        assert!(!selectors::is_loading(&state));
    }

    #[tokio::test]
    async fn test_update_worker_profile_allows_partial_changes() {
        let store = store(
            MockHirelinkClient::new()
                .with_workers(vec![worker(1, true)])
                .await,
        );

        let too_long = UpdateWorkerRequest {
            bio: Some("x".repeat(1001)),
            ..Default::default()
        };
        assert!(store.update_worker_profile(&too_long).await.is_err());
        assert_eq!(store.client().call_counts().await.update_my_worker_profile, 0);

        let updated = store
            .update_worker_profile(&UpdateWorkerRequest {
                location: Some("Leeds".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(updated.location.as_deref(), Some("Leeds"));
        assert_eq!(updated.first_name, "Sam");
    }

    #[tokio::test]
    async fn test_every_thunk_settles() {
        let client = MockHirelinkClient::new()
            .with_workers(vec![worker(1, true)])
            .await
            .with_error(ApiError::Timeout)
            .await;
        let store = store(client);

        assert!(store.fetch_workers().await.is_err());
        assert_eq!(store.state().await.in_flight, 0);

        let (workers, requests) = tokio::join!(store.fetch_workers(), store.fetch_notifications());
        assert!(workers.is_ok() && requests.is_ok());
        assert_eq!(store.state().await.in_flight, 0);

        store.fetch_dashboard().await.unwrap();
        assert_eq!(store.state().await.in_flight, 0);
    }

    #[tokio::test]
    async fn test_respond_to_missing_request() {
        let store = store(MockHirelinkClient::new());
        assert!(
            store
                .respond_to_connection_request(42, ConnectionStatus::Rejected)
                .await
                .is_err()
        );
        assert_eq!(
            store.select(|s| s.error.clone()).await.as_deref(),
            Some("Request not found")
        );
    }
}

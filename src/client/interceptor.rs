//! Request and response interceptors
//!
//! Every request the client sends passes through an [`Interceptor`] just
//! before it goes on the wire, and every response passes through it on the
//! way back. The default [`AuthInterceptor`] attaches the session token so
//! call sites never deal with credentials.

use std::sync::Arc;

use log::{debug, warn};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Request, Response};

use crate::session::TokenStore;

/// Hook run on every outgoing request and incoming response
pub trait Interceptor: Send + Sync {
    /// Adjust a request before it is sent. Must not fail.
    fn on_request(&self, request: &mut Request, multipart: bool);

    /// Inspect a response before it is handed to the caller.
    fn on_response(&self, response: Response) -> Response {
        response
    }
}

/// Attaches the stored bearer token and a default JSON content type
pub struct AuthInterceptor {
    tokens: Arc<dyn TokenStore>,
}

impl AuthInterceptor {
    pub fn new(tokens: Arc<dyn TokenStore>) -> Self {
        Self { tokens }
    }
}

impl Interceptor for AuthInterceptor {
    fn on_request(&self, request: &mut Request, multipart: bool) {
        let token = match self.tokens.load() {
            Ok(token) => token,
            Err(e) => {
                debug!("Token storage unavailable, sending unauthenticated: {}", e);
                None
            }
        };
        apply_request_headers(request.headers_mut(), token.as_deref(), multipart);
    }
}

/// Set `Authorization` and default `Content-Type` headers.
///
/// `Authorization` is replaced rather than appended, so it appears once.
/// The content type is only filled in for non-multipart bodies that do not
/// already declare one.
pub fn apply_request_headers(headers: &mut HeaderMap, token: Option<&str>, multipart: bool) {
    if let Some(token) = token.filter(|t| !t.is_empty()) {
        match HeaderValue::from_str(&format!("Bearer {}", token)) {
            Ok(value) => {
                headers.insert(AUTHORIZATION, value);
            }
            Err(_) => warn!("Stored token contains invalid header characters; not attached"),
        }
    }

    if !multipart && !headers.contains_key(CONTENT_TYPE) {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }
}

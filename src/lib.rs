//! Hirelink - client library and CLI for the Hirelink recruitment platform
//!
//! The library exposes the pieces the `hirelink` binary is built from:
//! the API client with its auth interceptor, the session, the state store
//! and form validation.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod session;
pub mod store;
pub mod validation;

pub use error::{Error, Result};

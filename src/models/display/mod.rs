//! Display model implementations for table and JSON output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names and serialization.

mod application;
mod common;
mod job;
mod request;
mod worker;

pub use application::{ApplicationDisplay, AssignmentDisplay};
pub use job::{CategoryDisplay, JobDisplay};
pub use request::ConnectionRequestDisplay;
pub use worker::WorkerDisplay;

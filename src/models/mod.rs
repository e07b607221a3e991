//! Display models for CLI output
//!
//! Converts API response types into CLI-friendly table rows.

pub mod display;

pub use display::{
    ApplicationDisplay, AssignmentDisplay, CategoryDisplay, ConnectionRequestDisplay, JobDisplay,
    WorkerDisplay,
};

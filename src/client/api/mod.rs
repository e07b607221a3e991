//! API trait definitions split by resource
//!
//! Each trait maps one REST resource; every method is exactly one HTTP call.
//! The [`HirelinkApi`](super::HirelinkApi) super-trait combines them all.

mod applications;
mod assignments;
mod auth;
mod categories;
mod connections;
mod jobs;
mod workers;

pub use applications::ApplicationsApi;
pub use assignments::AssignmentsApi;
pub use auth::AuthApi;
pub use categories::CategoriesApi;
pub use connections::ConnectionsApi;
pub use jobs::JobsApi;
pub use workers::WorkersApi;

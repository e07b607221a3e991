//! Hirelink API data models
//!
//! Request and response bodies, organized by resource. Types that look alike
//! across resources (the worker profile embedded in a user account versus
//! the worker resource itself) are deliberately separate: each mirrors what
//! its own endpoint returns.

mod application;
mod assignment;
mod connection;
mod job;
mod user;
mod worker;

pub use application::{
    ApplicantWorker, Application, ApplicationJob, ApplicationStatus, CreateApplicationRequest,
    UpdateApplicationRequest,
};
pub use assignment::{
    AssignmentStatus, CreateAssignmentRequest, UpdateAssignmentRequest,
    UpdateAssignmentStatusRequest, WorkAssignment,
};
pub use connection::{
    ConnectionRequest, ConnectionStatus, CreateConnectionRequest, UpdateConnectionStatusRequest,
};
pub use job::{
    CreateJobCategoryRequest, CreateJobRequest, Job, JobCategory, JobQuery,
    UpdateJobCategoryRequest, UpdateJobRequest,
};
pub use user::{
    AuthResponse, LoginRequest, Recruiter, RegisterRequest, Role, User,
    Worker as UserWorkerProfile,
};
pub use worker::{CreateWorkerRequest, ProfilePhoto, UpdateWorkerRequest, Worker};

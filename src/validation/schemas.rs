//! Schemas for each form the client submits
//!
//! Field names are the wire names of the matching request DTO, so a schema
//! can check a DTO directly through [`Schema::ensure_dto`].

use super::{Rule, Schema};

/// Roles a user may pick when signing up
pub const SIGNUP_ROLES: &[&str] = &["worker", "recruiter"];

pub fn login() -> Schema {
    Schema::new()
        .field("email", [Rule::Required, Rule::Email])
        .field("password", [Rule::Required, Rule::MinLength(6)])
}

/// Sign-up form, including the `confirmPassword` field the DTO lacks
pub fn register() -> Schema {
    Schema::new()
        .field("firstName", [Rule::Required, Rule::MaxLength(50)])
        .field("lastName", [Rule::Required, Rule::MaxLength(50)])
        .field("email", [Rule::Required, Rule::Email])
        .field("password", [Rule::Required, Rule::MinLength(8)])
        .field("confirmPassword", [Rule::Required, Rule::Matches("password")])
        .field("role", [Rule::Required, Rule::OneOf(SIGNUP_ROLES)])
}

pub fn job() -> Schema {
    Schema::new()
        .field(
            "title",
            [Rule::Required, Rule::MinLength(3), Rule::MaxLength(100)],
        )
        .field("description", [Rule::Required, Rule::MinLength(10)])
        .field("location", [Rule::MaxLength(100)])
        .field("salary", [Rule::Positive])
        .field("categoryId", [Rule::Required, Rule::Positive])
}

pub fn worker_profile() -> Schema {
    Schema::new()
        .field("firstName", [Rule::Required, Rule::MaxLength(50)])
        .field("lastName", [Rule::Required, Rule::MaxLength(50)])
        .field("phone", [Rule::Phone])
        .field("location", [Rule::MaxLength(100)])
        .field("experienceYears", [Rule::NonNegativeInteger])
        .field("bio", [Rule::MaxLength(1000)])
}

pub fn connection_request() -> Schema {
    Schema::new()
        .field("receiverId", [Rule::Required, Rule::Positive])
        .field("message", [Rule::MaxLength(500)])
}

pub fn application() -> Schema {
    Schema::new()
        .field("jobId", [Rule::Required, Rule::Positive])
        .field("coverLetter", [Rule::MaxLength(2000)])
}

pub fn job_category() -> Schema {
    Schema::new().field(
        "name",
        [Rule::Required, Rule::MinLength(2), Rule::MaxLength(60)],
    )
}

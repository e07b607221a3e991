//! Job and job category models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Job posting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Job ID
    pub id: i64,

    /// Job title
    pub title: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Where the work takes place
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Offered pay
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,

    /// Whether the posting accepts applications
    #[serde(default = "default_true")]
    pub is_active: bool,

    /// Category the job is filed under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<JobCategory>,

    /// ID of the recruiter who posted it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recruiter_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

/// Body of `POST /jobs`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    pub category_id: i64,
}

/// Body of `PATCH /jobs/:id`; only the fields that are set are sent
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}

/// Query parameters accepted by `GET /jobs`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Job category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobCategory {
    /// Category ID
    pub id: i64,

    /// Category name
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of `POST /job-categories`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateJobCategoryRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of `PATCH /job-categories/:id`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateJobCategoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

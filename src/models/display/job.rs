//! Job and category display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{format_date, or_dash, truncate_string, yes_no};
use crate::client::models::{Job, JobCategory};

/// Job posting display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct JobDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "CATEGORY")]
    pub category: String,

    #[tabled(rename = "LOCATION")]
    pub location: String,

    #[tabled(rename = "SALARY")]
    pub salary: String,

    #[tabled(rename = "ACTIVE")]
    pub active: String,

    #[tabled(rename = "POSTED")]
    pub posted: String,
}

impl From<Job> for JobDisplay {
    fn from(job: Job) -> Self {
        Self {
            id: job.id,
            title: truncate_string(&job.title, 40),
            category: or_dash(job.category.as_ref().map(|c| c.name.as_str())),
            location: or_dash(job.location.as_deref()),
            salary: job
                .salary
                .map(|s| format!("{:.2}", s))
                .unwrap_or_else(|| "-".to_string()),
            active: yes_no(job.is_active),
            posted: format_date(job.created_at.as_ref()),
        }
    }
}

/// Job category display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CategoryDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,
}

impl From<JobCategory> for CategoryDisplay {
    fn from(category: JobCategory) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: or_dash(category.description.as_deref()),
        }
    }
}

//! Application and work assignment display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{format_date, or_dash};
use crate::client::models::{Application, WorkAssignment};

/// Application display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ApplicationDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "JOB")]
    pub job: String,

    #[tabled(rename = "APPLICANT")]
    pub applicant: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "APPLIED")]
    pub applied: String,
}

impl From<Application> for ApplicationDisplay {
    fn from(application: Application) -> Self {
        let applicant = application.worker.as_ref().map(|w| {
            [w.first_name.as_deref(), w.last_name.as_deref()]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" ")
        });

        Self {
            id: application.id,
            job: or_dash(application.job.as_ref().map(|j| j.title.as_str())),
            applicant: or_dash(applicant.as_deref()),
            status: application.status.to_string(),
            applied: format_date(application.created_at.as_ref()),
        }
    }
}

/// Work assignment display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct AssignmentDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "JOB ID")]
    pub job_id: i64,

    #[tabled(rename = "WORKER ID")]
    pub worker_id: i64,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "START")]
    pub start: String,

    #[tabled(rename = "END")]
    pub end: String,
}

impl From<WorkAssignment> for AssignmentDisplay {
    fn from(assignment: WorkAssignment) -> Self {
        Self {
            id: assignment.id,
            job_id: assignment.job_id,
            worker_id: assignment.worker_id,
            status: assignment.status.to_string(),
            start: format_date(assignment.start_date.as_ref()),
            end: format_date(assignment.end_date.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_display() {
        let application: Application = serde_json::from_value(serde_json::json!({
            "id": 5,
            "status": "ACCEPTED",
            "job": {"id": 9, "title": "Painter"},
            "worker": {"id": 3, "firstName": "Ada", "lastName": "King"}
        }))
        .unwrap();

        let display = ApplicationDisplay::from(application);

        assert_eq!(display.job, "Painter");
        assert_eq!(display.applicant, "Ada King");
        assert_eq!(display.status, "ACCEPTED");
        assert_eq!(display.applied, "-");
    }

    #[test]
    fn test_assignment_display() {
        let assignment: WorkAssignment = serde_json::from_value(serde_json::json!({
            "id": 1,
            "jobId": 9,
            "workerId": 3,
            "status": "IN_PROGRESS",
            "startDate": "2025-02-01T00:00:00Z"
        }))
        .unwrap();

        let display = AssignmentDisplay::from(assignment);

        assert_eq!(display.status, "IN_PROGRESS");
        assert_eq!(display.start, "2025-02-01");
        assert_eq!(display.end, "-");
    }
}

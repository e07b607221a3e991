//! Worker display model

use serde::Serialize;
use tabled::Tabled;

use super::common::{or_dash, truncate_string, yes_no};
use crate::client::models::Worker;

/// Worker profile display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct WorkerDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "PROFESSION")]
    pub profession: String,

    #[tabled(rename = "LOCATION")]
    pub location: String,

    /// Years of experience
    #[tabled(rename = "EXP")]
    pub experience: String,

    #[tabled(rename = "SKILLS")]
    pub skills: String,

    #[tabled(rename = "AVAILABLE")]
    pub available: String,
}

impl From<&Worker> for WorkerDisplay {
    fn from(worker: &Worker) -> Self {
        Self {
            id: worker.id,
            name: worker.full_name(),
            profession: or_dash(worker.profession.as_deref()),
            location: or_dash(worker.location.as_deref()),
            experience: worker
                .experience_years
                .map(|y| y.to_string())
                .unwrap_or_else(|| "-".to_string()),
            skills: if worker.skills.is_empty() {
                "-".to_string()
            } else {
                truncate_string(&worker.skills.join(", "), 40)
            },
            available: yes_no(worker.is_available),
        }
    }
}

impl From<Worker> for WorkerDisplay {
    fn from(worker: Worker) -> Self {
        Self::from(&worker)
    }
}

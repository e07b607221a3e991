//! Connection request display model

use serde::Serialize;
use tabled::Tabled;

use super::common::{format_date, or_dash, truncate_string};
use crate::client::models::ConnectionRequest;

/// Connection request display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ConnectionRequestDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "FROM")]
    pub sender_id: i64,

    #[tabled(rename = "TO")]
    pub receiver_id: i64,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "MESSAGE")]
    pub message: String,

    #[tabled(rename = "SENT")]
    pub sent: String,
}

impl From<&ConnectionRequest> for ConnectionRequestDisplay {
    fn from(request: &ConnectionRequest) -> Self {
        Self {
            id: request.id,
            sender_id: request.sender_id,
            receiver_id: request.receiver_id,
            status: request.status.to_string(),
            message: truncate_string(&or_dash(request.message.as_deref()), 50),
            sent: format_date(request.created_at.as_ref()),
        }
    }
}

impl From<ConnectionRequest> for ConnectionRequestDisplay {
    fn from(request: ConnectionRequest) -> Self {
        Self::from(&request)
    }
}

//! Status-update payload
//!
//! Body of the request a caller sends to the backend's work-order status
//! resource once the workflow engine has approved a transition. The backend
//! re-validates independently and may still refuse it.

use serde::{Deserialize, Serialize};

use super::{Stage, WorkOrderSnapshot};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_order_id: Option<String>,

    pub from: Stage,

    pub to: Stage,

    /// Free-text note shown in the work order's history
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// ISO 8601 timestamp of the request
    pub requested_at: String,
}

impl StatusUpdateRequest {
    /// Build the request for moving `snapshot` to `to`
    pub fn for_transition(snapshot: &WorkOrderSnapshot, to: Stage, note: Option<String>) -> Self {
        StatusUpdateRequest {
            work_order_id: snapshot.id.clone(),
            from: snapshot.current_stage,
            to,
            note: note.filter(|n| !n.trim().is_empty()),
            requested_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

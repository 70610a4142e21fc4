//! Schema types for repairflow
//!
//! JSON shapes follow the backend's work-order API.

mod config;
mod stage;
mod status_update;
mod work_order;

pub use config::{Config, Locale};
pub use stage::Stage;
pub use status_update::StatusUpdateRequest;
pub use work_order::{DiagnosticRecord, WorkOrderSnapshot};

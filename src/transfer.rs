//! Export and import envelope
//!
//! The JSON document shape shared between the export and import tools. A
//! client keeps the envelope opaque and hands it back unchanged to restore
//! a schedule.

use crate::schedule::Schedule;
use chrono::Local;
use serde::{Deserialize, Serialize};

/// Version tag written into every export.
pub const EXPORT_VERSION: &str = "1.0";

/// The JSON document written by export and accepted by import.
///
/// `project` is required on import; the timestamp and version are
/// informational and tolerated when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportEnvelope {
    pub project: Schedule,
    /// RFC 3339 timestamp taken at export time.
    #[serde(default)]
    pub export_time: String,
    #[serde(default)]
    pub version: String,
}

/// Wrap the schedule for export, stamped with the current local time.
pub fn export_envelope(schedule: &Schedule) -> ExportEnvelope {
    ExportEnvelope {
        project: schedule.clone(),
        export_time: Local::now().to_rfc3339(),
        version: EXPORT_VERSION.to_string(),
    }
}

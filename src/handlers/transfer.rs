//! Export and import handlers for the Gantt MCP server

use crate::GanttServerHandler;
use crate::{transfer, validation};
use mcp_attr::{Result as McpResult, bail_public};

impl GanttServerHandler {
    /// Wrap the schedule in the export envelope and serialize it.
    pub async fn handle_export_project(&self) -> McpResult<String> {
        let schedule = self.schedule.lock().unwrap();
        let envelope = transfer::export_envelope(&schedule);
        drop(schedule);

        match serde_json::to_string_pretty(&envelope) {
            Ok(json) => Ok(json),
            Err(e) => bail_public!(_, "Failed to serialize export: {}", e),
        }
    }

    /// Replace the schedule with one restored from exported JSON. The
    /// parser is bypassed entirely; the payload is taken as-is.
    pub async fn handle_import_project(&self, data: String) -> McpResult<String> {
        let envelope = validation::parse_import_payload(&data)?;

        let mut schedule = self.schedule.lock().unwrap();
        *schedule = envelope.project;
        let name = schedule.name.clone();
        let count = schedule.tasks.len();
        drop(schedule);

        tracing::info!(%name, count, "imported project");
        Ok(format!("Imported project '{}' with {} task(s)", name, count))
    }
}

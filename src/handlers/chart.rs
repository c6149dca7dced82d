//! Chart data handler for the Gantt MCP server

use crate::GanttServerHandler;
use crate::chart;
use mcp_attr::{Result as McpResult, bail_public};

impl GanttServerHandler {
    /// Serialize the schedule as chart rows for a timeline renderer.
    pub async fn handle_chart_data(&self) -> McpResult<String> {
        let schedule = self.schedule.lock().unwrap();
        let rows = chart::chart_rows(&schedule);
        drop(schedule);

        match serde_json::to_string_pretty(&rows) {
            Ok(json) => Ok(json),
            Err(e) => bail_public!(_, "Failed to serialize chart data: {}", e),
        }
    }
}

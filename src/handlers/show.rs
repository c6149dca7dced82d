//! Schedule display handler for the Gantt MCP server

use crate::GanttServerHandler;
use crate::formatting;
use mcp_attr::Result as McpResult;

impl GanttServerHandler {
    /// List the current project and its tasks.
    pub async fn handle_show_schedule(&self) -> McpResult<String> {
        let schedule = self.schedule.lock().unwrap();
        Ok(formatting::format_schedule(&schedule))
    }
}

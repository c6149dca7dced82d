//! Sample project handler for the Gantt MCP server

use crate::GanttServerHandler;
use crate::formatting;
use crate::schedule::sample_project;
use mcp_attr::Result as McpResult;

impl GanttServerHandler {
    /// Replace the schedule with the built-in five-phase demo project.
    pub async fn handle_load_sample(&self) -> McpResult<String> {
        let mut schedule = self.schedule.lock().unwrap();
        *schedule = sample_project();
        let listing = formatting::format_schedule(&schedule);
        drop(schedule);

        Ok(format!("Loaded the sample project\n\n{}", listing))
    }
}

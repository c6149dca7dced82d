//! Clear handler for the Gantt MCP server

use crate::GanttServerHandler;
use crate::schedule::Schedule;
use mcp_attr::Result as McpResult;

impl GanttServerHandler {
    /// Reset to an empty schedule with the stock project name.
    pub async fn handle_clear_schedule(&self) -> McpResult<String> {
        let mut schedule = self.schedule.lock().unwrap();
        *schedule = Schedule::default();
        let name = schedule.name.clone();
        drop(schedule);

        Ok(format!("Cleared the schedule. Project reset to empty '{}'", name))
    }
}

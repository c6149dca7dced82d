//! Instruction parsing handler for the Gantt MCP server

use crate::GanttServerHandler;
use crate::schedule::{local_date_today, normalize};
use crate::{formatting, parser, validation};
use mcp_attr::Result as McpResult;

impl GanttServerHandler {
    /// Run one instruction through the classify, synthesize and normalize
    /// pipeline and report what changed.
    pub async fn handle_parse_instruction(&self, instruction: String) -> McpResult<String> {
        let text = validation::validate_instruction(&instruction)?;

        let mut schedule = self.schedule.lock().unwrap();
        let intent = parser::classify(text, &schedule);
        tracing::info!(?intent, "parsing instruction");

        let outcome = parser::apply(intent, text, &mut schedule, local_date_today());
        // Normalization only runs when the schedule actually changed, so a
        // missed edit or delete reports "unchanged" truthfully.
        let conflicts = if outcome.mutated() {
            normalize(&mut schedule, self.policy)
        } else {
            Vec::new()
        };
        drop(schedule);

        if !conflicts.is_empty() {
            tracing::warn!(count = conflicts.len(), "resolved timeline conflicts");
        }
        Ok(format!(
            "{}{}",
            formatting::format_outcome(&outcome),
            formatting::format_conflicts(&conflicts)
        ))
    }
}

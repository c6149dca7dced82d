//! Common test utilities for integration tests

use chrono::NaiveDate;
use gantt_mcp::{GanttServerHandler, GapPolicy};

/// Create a test handler with the default one-day buffer policy
pub fn get_test_handler() -> GanttServerHandler {
    GanttServerHandler::new(GapPolicy::Buffer, false)
}

/// Create a test handler that chains tasks back to back
pub fn get_strict_handler() -> GanttServerHandler {
    GanttServerHandler::new(GapPolicy::Strict, false)
}

/// Build an import payload from (name, start, duration) triples
///
/// Goes through the same JSON envelope import_project accepts, so tests can
/// pin exact dates without relying on the parser.
pub fn fixture_payload(project: &str, tasks: &[(&str, NaiveDate, i64)]) -> String {
    let tasks: Vec<serde_json::Value> = tasks
        .iter()
        .map(|(name, start, duration)| {
            serde_json::json!({
                "name": name,
                "start": start.to_string(),
                "duration": duration,
            })
        })
        .collect();
    serde_json::json!({ "project": { "name": project, "tasks": tasks } }).to_string()
}

/// Parse an export_project / chart_data response into a JSON value
pub fn as_json(response: &str) -> serde_json::Value {
    serde_json::from_str(response).unwrap()
}

//! Chart row projection
//!
//! Flattens the schedule into the row shape timeline-chart renderers
//! expect: one entry per task with plain date strings and a stable id.

use crate::schedule::Schedule;
use serde::{Deserialize, Serialize};

/// One bar of a timeline chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRow {
    /// Stable row id, "Task-" followed by the task's position.
    pub id: String,
    pub name: String,
    /// First day, as YYYY-MM-DD.
    pub start: String,
    /// Exclusive end day, as YYYY-MM-DD.
    pub end: String,
    /// Completion percentage, 0 to 100.
    pub progress: u8,
}

/// Project the schedule into chart rows in schedule order.
pub fn chart_rows(schedule: &Schedule) -> Vec<ChartRow> {
    schedule
        .tasks
        .iter()
        .enumerate()
        .map(|(index, task)| ChartRow {
            id: format!("Task-{index}"),
            name: task.name.clone(),
            start: task.start.to_string(),
            end: task.end().to_string(),
            progress: task.progress,
        })
        .collect()
}

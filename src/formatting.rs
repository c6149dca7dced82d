//! Formatting helper functions for the Gantt MCP server
//!
//! This module contains formatting logic for displaying schedules, parse
//! outcomes and conflict reports as tool responses.

use crate::parser::ParseOutcome;
use crate::schedule::{Conflict, Schedule};

/// Format the schedule as a task listing
///
/// # Arguments
/// * `schedule` - Schedule to display
///
/// # Returns
/// Formatted string representation, one line per task
pub fn format_schedule(schedule: &Schedule) -> String {
    if schedule.tasks.is_empty() {
        return format!("Project '{}' has no tasks yet", schedule.name);
    }

    let mut result = format!(
        "Project '{}' with {} task(s):\n\n",
        schedule.name,
        schedule.tasks.len()
    );
    for task in &schedule.tasks {
        result.push_str(&format!(
            "- {} (start: {}, end: {}, duration: {} day(s), progress: {}%)\n",
            task.name,
            task.start,
            task.end(),
            task.duration,
            task.progress
        ));
    }
    result
}

/// Format a parse outcome as a status line
pub fn format_outcome(outcome: &ParseOutcome) -> String {
    match outcome {
        ParseOutcome::Created {
            name,
            task_count,
            total_days,
        } => format!(
            "Created project '{}' with {} task(s) over {} day(s)",
            name, task_count, total_days
        ),
        ParseOutcome::Added {
            name,
            duration,
            start,
            after,
        } => {
            let mut message = format!(
                "Added task '{}' ({} day(s), starting {})",
                name, duration, start
            );
            if let Some(after) = after {
                message.push_str(&format!(" after '{}'", after));
            }
            message
        }
        ParseOutcome::Edited {
            keyword,
            matched: 0,
            ..
        } => format!("No task matching '{}' found; schedule unchanged", keyword),
        ParseOutcome::Edited {
            keyword,
            matched,
            duration_delta,
            start_shift,
        } => {
            let mut changes = Vec::new();
            if *duration_delta > 0 {
                changes.push(format!("extended by {} day(s)", duration_delta));
            }
            if *duration_delta < 0 {
                changes.push(format!("shortened by {} day(s)", -duration_delta));
            }
            if *start_shift < 0 {
                changes.push(format!("moved {} day(s) earlier", -start_shift));
            }
            if *start_shift > 0 {
                changes.push(format!("moved {} day(s) later", start_shift));
            }
            if changes.is_empty() {
                return format!(
                    "No adjustment recognized for '{}'; schedule unchanged",
                    keyword
                );
            }
            format!(
                "Adjusted {} task(s) matching '{}': {}",
                matched,
                keyword,
                changes.join(", ")
            )
        }
        ParseOutcome::Deleted {
            keyword,
            removed: 0,
        } => format!("No task matching '{}' found; schedule unchanged", keyword),
        ParseOutcome::Deleted { keyword, removed } => {
            format!("Removed {} task(s) matching '{}'", removed, keyword)
        }
    }
}

/// Format resolved timeline conflicts as a trailing note
///
/// Empty input yields an empty string so callers can append the result
/// unconditionally.
pub fn format_conflicts(conflicts: &[Conflict]) -> String {
    if conflicts.is_empty() {
        return String::new();
    }

    let mut result = format!("\nAuto-adjusted {} timeline conflict(s):", conflicts.len());
    for conflict in conflicts {
        result.push_str(&format!(
            "\n- '{}' overlapped '{}' by {} day(s)",
            conflict.second, conflict.first, conflict.overlap_days
        ));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::Task;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    #[test]
    fn test_format_schedule_lists_tasks_with_derived_end() {
        let mut schedule = Schedule::default();
        schedule.push_task(Task::new("需求分析", date(16), 3));
        let output = format_schedule(&schedule);
        assert!(output.contains("Project '我的项目' with 1 task(s)"));
        assert!(output.contains(
            "- 需求分析 (start: 2025-06-16, end: 2025-06-19, duration: 3 day(s), progress: 0%)"
        ));
    }

    #[test]
    fn test_format_empty_schedule() {
        assert_eq!(
            format_schedule(&Schedule::default()),
            "Project '我的项目' has no tasks yet"
        );
    }

    #[test]
    fn test_format_outcome_edit_variants() {
        let missed = ParseOutcome::Edited {
            keyword: "部署".to_string(),
            matched: 0,
            duration_delta: 0,
            start_shift: 0,
        };
        assert_eq!(
            format_outcome(&missed),
            "No task matching '部署' found; schedule unchanged"
        );

        let both = ParseOutcome::Edited {
            keyword: "开发".to_string(),
            matched: 2,
            duration_delta: 3,
            start_shift: -2,
        };
        assert_eq!(
            format_outcome(&both),
            "Adjusted 2 task(s) matching '开发': extended by 3 day(s), moved 2 day(s) earlier"
        );

        let unrecognized = ParseOutcome::Edited {
            keyword: "开发".to_string(),
            matched: 1,
            duration_delta: 0,
            start_shift: 0,
        };
        assert_eq!(
            format_outcome(&unrecognized),
            "No adjustment recognized for '开发'; schedule unchanged"
        );
    }

    #[test]
    fn test_format_outcome_added_mentions_anchor() {
        let outcome = ParseOutcome::Added {
            name: "技术评审".to_string(),
            duration: 3,
            start: date(20),
            after: Some("开发实施".to_string()),
        };
        assert_eq!(
            format_outcome(&outcome),
            "Added task '技术评审' (3 day(s), starting 2025-06-20) after '开发实施'"
        );
    }

    #[test]
    fn test_format_conflicts_empty_and_populated() {
        assert_eq!(format_conflicts(&[]), "");
        let conflicts = vec![Conflict {
            first: "需求分析".to_string(),
            second: "程序开发".to_string(),
            overlap_days: 2,
        }];
        let output = format_conflicts(&conflicts);
        assert!(output.starts_with("\nAuto-adjusted 1 timeline conflict(s):"));
        assert!(output.contains("'程序开发' overlapped '需求分析' by 2 day(s)"));
    }
}

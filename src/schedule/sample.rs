//! Built-in sample project

use crate::schedule::{local_date_today, Schedule, Task};
use chrono::Duration;

/// A five-phase demo project starting today, with phases chained end to
/// start. Useful for trying the tools without composing instructions.
pub fn sample_project() -> Schedule {
    let today = local_date_today();
    let phases: [(&str, i64, i64); 5] = [
        ("需求分析与规划", 0, 3),
        ("UI/UX 设计", 3, 5),
        ("前端开发", 8, 7),
        ("后端开发", 15, 8),
        ("测试与上线", 23, 4),
    ];
    Schedule {
        name: "示例项目".to_string(),
        tasks: phases
            .iter()
            .map(|&(name, offset, duration)| {
                Task::new(name, today + Duration::days(offset), duration)
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_has_five_chained_tasks() {
        let schedule = sample_project();
        assert_eq!(schedule.name, "示例项目");
        assert_eq!(schedule.tasks.len(), 5);
        assert_eq!(schedule.tasks[0].start, local_date_today());
        for pair in schedule.tasks.windows(2) {
            assert_eq!(pair[1].start, pair[0].end());
        }
    }
}

//! Schedule container

use crate::parser::lexicon;
use crate::schedule::Task;
use serde::{Deserialize, Serialize};

/// A named project and its ordered task list.
///
/// The task list is kept in schedule order by the normalizer; mutating
/// operations may leave it temporarily unordered between a parse and the
/// normalization pass that follows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Schedule {
    /// Project display name.
    pub name: String,
    /// Tasks in schedule order.
    pub tasks: Vec<Task>,
}

impl Default for Schedule {
    fn default() -> Self {
        Schedule {
            name: lexicon::DEFAULT_PROJECT_NAME.to_string(),
            tasks: Vec::new(),
        }
    }
}

impl Schedule {
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn push_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Insert a task directly after the task at `index`.
    pub fn insert_after(&mut self, index: usize, task: Task) {
        let at = (index + 1).min(self.tasks.len());
        self.tasks.insert(at, task);
    }

    /// Remove every task whose name contains the keyword and return how
    /// many were removed.
    pub fn remove_matching(&mut self, keyword: &str) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.name.contains(keyword));
        before - self.tasks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::local_date_today;

    fn task(name: &str) -> Task {
        Task::new(name, local_date_today(), 3)
    }

    #[test]
    fn test_default_schedule_is_empty_with_stock_name() {
        let schedule = Schedule::default();
        assert_eq!(schedule.name, "我的项目");
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_insert_after_places_between_neighbors() {
        let mut schedule = Schedule::default();
        schedule.push_task(task("需求分析"));
        schedule.push_task(task("程序开发"));
        schedule.insert_after(0, task("方案设计"));
        let names: Vec<&str> = schedule.tasks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["需求分析", "方案设计", "程序开发"]);
    }

    #[test]
    fn test_insert_after_clamps_to_tail() {
        let mut schedule = Schedule::default();
        schedule.push_task(task("需求分析"));
        schedule.insert_after(10, task("收尾"));
        assert_eq!(schedule.tasks.last().unwrap().name, "收尾");
    }

    #[test]
    fn test_remove_matching_uses_substring() {
        let mut schedule = Schedule::default();
        schedule.push_task(task("测试验收"));
        schedule.push_task(task("程序开发"));
        schedule.push_task(task("集成测试"));
        assert_eq!(schedule.remove_matching("测试"), 2);
        assert_eq!(schedule.tasks.len(), 1);
        assert_eq!(schedule.remove_matching("测试"), 0);
    }
}

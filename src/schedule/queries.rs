//! Read-only lookups over a schedule

use crate::schedule::{Schedule, Task};
use chrono::NaiveDate;

impl Schedule {
    /// Indices of every task whose name contains the keyword.
    pub fn matching_indices(&self, keyword: &str) -> Vec<usize> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.name.contains(keyword))
            .map(|(index, _)| index)
            .collect()
    }

    /// Index of the task the text refers to, for "after X" insertion.
    ///
    /// A task is referenced when the text mentions its full name or the
    /// first two characters of its name. The earliest referenced task
    /// wins.
    pub fn find_insert_anchor(&self, text: &str) -> Option<usize> {
        self.tasks.iter().position(|task| {
            if task.name.is_empty() {
                return false;
            }
            if text.contains(&task.name) {
                return true;
            }
            let prefix: String = task.name.chars().take(2).collect();
            text.contains(&prefix)
        })
    }

    /// End date of the last task in list order.
    pub fn last_end(&self) -> Option<NaiveDate> {
        self.tasks.last().map(Task::end)
    }
}

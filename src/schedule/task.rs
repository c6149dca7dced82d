//! Task type and date helpers

use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Today's date in the server's local timezone.
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Add a day count to a date, pinning at the calendar limits instead of
/// panicking when the result is not representable. Imported payloads can
/// carry arbitrary durations, so every task-date addition goes through here.
pub fn saturating_add_days(date: NaiveDate, days: i64) -> NaiveDate {
    Duration::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or(if days < 0 {
            NaiveDate::MIN
        } else {
            NaiveDate::MAX
        })
}

/// A single scheduled task.
///
/// Dates are calendar days without time of day. The end date is derived,
/// never stored, so duration edits can not leave the pair inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    /// Display name taken from the instruction.
    pub name: String,
    /// First day of work.
    pub start: NaiveDate,
    /// Length in whole days, at least 1.
    pub duration: i64,
    /// Completion percentage for chart rendering, 0 to 100.
    pub progress: u8,
}

impl Default for Task {
    fn default() -> Self {
        Task {
            name: String::new(),
            start: local_date_today(),
            duration: 1,
            progress: 0,
        }
    }
}

impl Task {
    /// Build a task with zero progress, flooring the duration at one day.
    pub fn new(name: impl Into<String>, start: NaiveDate, duration: i64) -> Self {
        Task {
            name: name.into(),
            start,
            duration: duration.max(1),
            progress: 0,
        }
    }

    /// Exclusive end date: the first day after the task finishes. Saturates
    /// at the calendar limits for durations beyond them.
    pub fn end(&self) -> NaiveDate {
        saturating_add_days(self.start, self.duration)
    }
}

//! Timeline normalization
//!
//! After every mutating parse the task list is sorted chronologically and
//! the gap between each adjacent pair is brought up to the configured
//! minimum. Overlaps found in the incoming list are reported as conflicts;
//! shifts introduced by the pass itself are not.

use crate::schedule::task::saturating_add_days;
use crate::schedule::Schedule;

/// Minimum gap kept between consecutive tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GapPolicy {
    /// Each task may start exactly when the previous one ends.
    Strict,
    /// Keep at least one free day between consecutive tasks.
    #[default]
    Buffer,
}

impl GapPolicy {
    fn gap_days(self) -> i64 {
        match self {
            GapPolicy::Strict => 0,
            GapPolicy::Buffer => 1,
        }
    }
}

/// An overlap between two adjacent tasks, resolved by the normalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    /// Name of the earlier task.
    pub first: String,
    /// Name of the later task that overlapped it.
    pub second: String,
    /// How many days the later task started before the earlier one ended.
    pub overlap_days: i64,
}

/// Sort tasks chronologically and enforce the minimum gap.
///
/// Conflicts are measured against the sorted input before any start is
/// moved, so cascading shifts caused by the pass itself are not counted.
/// The sort is stable: tasks sharing a start date keep their relative
/// order. Running the pass twice produces no further change.
pub fn normalize(schedule: &mut Schedule, policy: GapPolicy) -> Vec<Conflict> {
    schedule.tasks.sort_by_key(|task| task.start);

    let mut conflicts = Vec::new();
    for pair in schedule.tasks.windows(2) {
        let overlap = (pair[0].end() - pair[1].start).num_days();
        if overlap > 0 {
            conflicts.push(Conflict {
                first: pair[0].name.clone(),
                second: pair[1].name.clone(),
                overlap_days: overlap,
            });
        }
    }

    let gap_days = policy.gap_days();
    for i in 1..schedule.tasks.len() {
        let prev_end = schedule.tasks[i - 1].end();
        if (schedule.tasks[i].start - prev_end).num_days() < gap_days {
            schedule.tasks[i].start = saturating_add_days(prev_end, gap_days);
        }
    }
    conflicts
}

//! Task synthesis
//!
//! Applies a classified instruction to the schedule: Create replaces it
//! with tasks built from clauses or a percentage template, Add inserts one
//! task, Edit adjusts matching tasks and Delete removes them. Every
//! operation returns a [`ParseOutcome`] describing what happened, for
//! status reporting.

use crate::parser::intent::{self, Intent};
use crate::parser::{extract, lexicon};
use crate::schedule::task::saturating_add_days;
use crate::schedule::{Schedule, Task};
use chrono::NaiveDate;

/// What a parse operation did to the schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The schedule was replaced with a new project.
    Created {
        name: String,
        task_count: usize,
        total_days: i64,
    },
    /// One task was inserted, after the named task when `after` is set.
    Added {
        name: String,
        duration: i64,
        start: NaiveDate,
        after: Option<String>,
    },
    /// Tasks matching the keyword had duration or start adjusted.
    Edited {
        keyword: String,
        matched: usize,
        duration_delta: i64,
        start_shift: i64,
    },
    /// Tasks matching the keyword were removed.
    Deleted { keyword: String, removed: usize },
}

impl ParseOutcome {
    /// Whether the operation changed the schedule. Edits that matched no
    /// task or recognized no adjustment, and deletes that removed nothing,
    /// leave it untouched.
    pub fn mutated(&self) -> bool {
        match self {
            ParseOutcome::Created { .. } | ParseOutcome::Added { .. } => true,
            ParseOutcome::Edited {
                matched,
                duration_delta,
                start_shift,
                ..
            } => *matched > 0 && (*duration_delta != 0 || *start_shift != 0),
            ParseOutcome::Deleted { removed, .. } => *removed > 0,
        }
    }
}

/// Apply a classified instruction to the schedule.
///
/// `today` anchors every relative date so the whole parse is deterministic
/// given its inputs.
pub fn apply(
    intent: Intent,
    text: &str,
    schedule: &mut Schedule,
    today: NaiveDate,
) -> ParseOutcome {
    match intent {
        Intent::Create => create_schedule(text, schedule, today),
        Intent::Add => add_task(text, schedule, today),
        Intent::Edit => edit_tasks(text, schedule),
        Intent::Delete => delete_tasks(text, schedule),
    }
}

/// Replace the schedule with a project synthesized from the instruction.
///
/// Clause extraction runs first; when no clause names a phase, the
/// percentage template for the project name fills the plan instead.
fn create_schedule(text: &str, schedule: &mut Schedule, today: NaiveDate) -> ParseOutcome {
    let name = extract::extract_project_name(text)
        .unwrap_or_else(|| lexicon::DEFAULT_PROJECT_NAME.to_string());
    let total = extract::extract_duration(text).unwrap_or(lexicon::DEFAULT_CREATE_DAYS);
    let start = extract::extract_start_date(text, today);

    let mut tasks = tasks_from_clauses(text, start);
    if tasks.is_empty() {
        tasks = tasks_from_template(&name, total, start);
    }

    let task_count = tasks.len();
    let total_days: i64 = tasks.iter().map(|task| task.duration).sum();
    *schedule = Schedule {
        name: name.clone(),
        tasks,
    };
    ParseOutcome::Created {
        name,
        task_count,
        total_days,
    }
}

/// Build tasks from comma-delimited clauses naming known phases.
///
/// The create-command clause itself is skipped so its verbs never turn
/// into a task. Each task chains off the previous one's end.
fn tasks_from_clauses(text: &str, start: NaiveDate) -> Vec<Task> {
    let mut tasks = Vec::new();
    let mut cursor = start;
    for clause in text.split(['，', ',', '。', '；', ';']) {
        let clause = clause.trim();
        if clause.is_empty() || intent::is_create_clause(clause) {
            continue;
        }
        let Some(phase) = lexicon::CLAUSE_PHASES
            .iter()
            .find(|phase| phase.triggers.iter().any(|trigger| clause.contains(trigger)))
        else {
            continue;
        };
        let duration = extract::extract_duration(clause).unwrap_or(phase.default_days);
        let task = Task::new(phase.name, cursor, duration);
        cursor = task.end();
        tasks.push(task);
    }
    tasks
}

/// Split the total duration across the template phases for the project
/// name. Durations and offsets floor to whole days; phases flooring to
/// zero are dropped. A total so small that every phase drops yields one
/// task carrying the full duration under the largest phase's name.
fn tasks_from_template(project_name: &str, total: i64, start: NaiveDate) -> Vec<Task> {
    let template = lexicon::template_for(project_name);
    let mut tasks = Vec::new();
    let mut cumulative = 0;
    for phase in template {
        let duration = total * phase.percent / 100;
        let offset = total * cumulative / 100;
        cumulative += phase.percent;
        if duration > 0 {
            tasks.push(Task::new(phase.name, saturating_add_days(start, offset), duration));
        }
    }
    if tasks.is_empty()
        && let Some(phase) = template.iter().max_by_key(|phase| phase.percent)
    {
        tasks.push(Task::new(phase.name, start, total));
    }
    tasks
}

/// Insert one task, after the task the text references when it reads
/// "after X", otherwise at the end of the schedule.
fn add_task(text: &str, schedule: &mut Schedule, today: NaiveDate) -> ParseOutcome {
    let name =
        extract::extract_task_name(text).unwrap_or_else(|| lexicon::DEFAULT_TASK_NAME.to_string());
    let duration = extract::extract_duration(text).unwrap_or(lexicon::DEFAULT_ADD_DAYS);

    let anchor = if text.contains('后') {
        schedule.find_insert_anchor(text)
    } else {
        None
    };
    match anchor {
        Some(index) => {
            let start = schedule.tasks[index].end();
            let after = schedule.tasks[index].name.clone();
            schedule.insert_after(index, Task::new(name.clone(), start, duration));
            ParseOutcome::Added {
                name,
                duration,
                start,
                after: Some(after),
            }
        }
        None => {
            let start = schedule.last_end().unwrap_or(today);
            schedule.push_task(Task::new(name.clone(), start, duration));
            ParseOutcome::Added {
                name,
                duration,
                start,
                after: None,
            }
        }
    }
}

/// Adjust every task matching the keyword: duration by the extracted
/// delta (floored at one day) and start by the extracted shift, each
/// applied independently.
fn edit_tasks(text: &str, schedule: &mut Schedule) -> ParseOutcome {
    let keyword = extract::extract_keyword(text).to_string();
    let indices = schedule.matching_indices(&keyword);
    if indices.is_empty() {
        return ParseOutcome::Edited {
            keyword,
            matched: 0,
            duration_delta: 0,
            start_shift: 0,
        };
    }

    let duration_delta = extract::extract_duration_delta(text);
    let start_shift = extract::extract_start_shift(text);
    for &index in &indices {
        let task = &mut schedule.tasks[index];
        if duration_delta != 0 {
            task.duration = task.duration.saturating_add(duration_delta).max(1);
        }
        if start_shift != 0 {
            task.start = saturating_add_days(task.start, start_shift);
        }
    }
    ParseOutcome::Edited {
        keyword,
        matched: indices.len(),
        duration_delta,
        start_shift,
    }
}

/// Remove every task whose name contains the extracted keyword.
fn delete_tasks(text: &str, schedule: &mut Schedule) -> ParseOutcome {
    let keyword = extract::extract_keyword(text).to_string();
    let removed = schedule.remove_matching(&keyword);
    ParseOutcome::Deleted { keyword, removed }
}

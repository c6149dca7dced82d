//! Intent classification for instructions
//!
//! Decides which of the four schedule operations an instruction requests
//! before any extraction happens. Classification is pattern-based and
//! total: every input maps to some intent, so the pipeline never rejects
//! an instruction outright.

use crate::parser::extract;
use crate::schedule::Schedule;
use regex::Regex;
use std::sync::LazyLock;

// Regex patterns (using LazyLock for static initialization)

static CREATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:创建|新建|开始|启动|做个|做一个).*(?:项目|计划)").expect("Invalid regex")
});
static ADD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:添加|新增|增加|加入|插入|补充).*(?:任务|环节|阶段)").expect("Invalid regex")
});
static DELETE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:删除|取消|去掉|移除).*(?:任务|环节|阶段)").expect("Invalid regex")
});
static DELETE_NATURAL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"不要.+了|.+删掉").expect("Invalid regex"));
static EDIT_VERB_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"调整|修改|改变|改为|延长|缩短|加长|增加|减少|提前|推迟|推后|延后").expect("Invalid regex")
});

/// The four operations an instruction can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Replace the schedule with a freshly synthesized project.
    Create,
    /// Insert one task into the existing schedule.
    Add,
    /// Adjust duration or start of tasks matching a keyword.
    Edit,
    /// Remove tasks matching a keyword.
    Delete,
}

/// Decide which operation the instruction requests.
///
/// Precedence: Create beats Add beats Delete beats Edit. An empty schedule
/// always classifies as Create so the first instruction produces a project
/// to work on. Text matching nothing falls back to Add when it carries a
/// duration and Create otherwise.
pub fn classify(text: &str, schedule: &Schedule) -> Intent {
    if schedule.is_empty() || CREATE_PATTERN.is_match(text) {
        return Intent::Create;
    }
    if ADD_PATTERN.is_match(text) {
        return Intent::Add;
    }
    if DELETE_PATTERN.is_match(text) || DELETE_NATURAL_PATTERN.is_match(text) {
        return Intent::Delete;
    }
    if EDIT_VERB_PATTERN.is_match(text) {
        return Intent::Edit;
    }
    if extract::extract_duration(text).is_some() {
        Intent::Add
    } else {
        Intent::Create
    }
}

/// Whether a clause reads as a create command. Used by the synthesizer to
/// keep the command clause of a create instruction out of the task list.
pub(crate) fn is_create_clause(clause: &str) -> bool {
    CREATE_PATTERN.is_match(clause)
}

//! Shared vocabulary tables for the instruction parser
//!
//! All verb lists, keyword vocabularies, numeral mappings and phase templates
//! live here so that the extractors, the classifier and the synthesizer read
//! from a single source instead of duplicating patterns.

/// Domain nouns recognized as task keywords, in match priority order.
///
/// Used both to locate existing tasks (Edit/Delete targeting) and to map
/// instruction clauses onto canonical phases.
pub const KEYWORDS: [&str; 8] = [
    "需求", "设计", "开发", "测试", "分析", "评审", "培训", "验收",
];

/// Fallback token returned when no keyword is present in the text.
pub const FALLBACK_KEYWORD: &str = "任务";

/// Default project name when the instruction names none.
pub const DEFAULT_PROJECT_NAME: &str = "我的项目";

/// Default task name when the instruction names none.
pub const DEFAULT_TASK_NAME: &str = "新任务";

/// Default total duration for Create, in days (three weeks).
pub const DEFAULT_CREATE_DAYS: i64 = 21;

/// Default duration for an added task, in days.
pub const DEFAULT_ADD_DAYS: i64 = 5;

/// Default magnitude for Edit deltas and start shifts, in days.
pub const DEFAULT_EDIT_DELTA: i64 = 2;

/// Upper bound on any extracted day count (ten years). Keeps every
/// downstream date within chrono's representable range.
pub const MAX_SPAN_DAYS: i64 = 3650;

/// Value of a single Chinese numeral character.
///
/// Both 二 and 两 mean 2; 十 alone means 10. Compound numerals are not
/// supported, matching the single-character patterns in the extractors.
pub fn numeral_value(c: char) -> Option<i64> {
    match c {
        '一' => Some(1),
        '二' | '两' => Some(2),
        '三' => Some(3),
        '四' => Some(4),
        '五' => Some(5),
        '六' => Some(6),
        '七' => Some(7),
        '八' => Some(8),
        '九' => Some(9),
        '十' => Some(10),
        _ => None,
    }
}

/// Canonicalize a raw project name extracted from an instruction.
///
/// Returns the polished name for well-known project kinds, or `None` when
/// the raw name should be kept as spoken.
pub fn canonical_project_name(raw: &str) -> Option<&'static str> {
    if raw.contains("网站") || raw.contains("Web") {
        Some("网站开发项目")
    } else if raw.contains("APP") || raw.contains("应用") {
        Some("移动应用开发")
    } else if raw.contains("营销") || raw.contains("推广") {
        Some("营销推广活动")
    } else {
        None
    }
}

/// Canonicalize a raw task name extracted from an instruction.
pub fn canonical_task_name(raw: &str) -> Option<&'static str> {
    if raw.contains("测试") {
        Some("测试验收")
    } else if raw.contains("设计") {
        Some("UI/UX设计")
    } else if raw.contains("开发") {
        Some("程序开发")
    } else if raw.contains("评审") {
        Some("技术评审")
    } else {
        None
    }
}

/// A clause-to-phase mapping entry for the Create clause path.
pub struct ClausePhase {
    /// Words that mark a clause as describing this phase.
    pub triggers: &'static [&'static str],
    /// Canonical phase name substituted for the raw clause.
    pub name: &'static str,
    /// Duration in days when the clause carries no explicit one.
    pub default_days: i64,
}

/// Clause phases in match priority order.
pub const CLAUSE_PHASES: &[ClausePhase] = &[
    ClausePhase {
        triggers: &["需求", "分析"],
        name: "需求分析",
        default_days: 3,
    },
    ClausePhase {
        triggers: &["设计"],
        name: "UI/UX设计",
        default_days: 4,
    },
    ClausePhase {
        triggers: &["开发", "实施", "编码"],
        name: "程序开发",
        default_days: 5,
    },
    ClausePhase {
        triggers: &["测试", "验收"],
        name: "测试验收",
        default_days: 3,
    },
    ClausePhase {
        triggers: &["评审"],
        name: "技术评审",
        default_days: 3,
    },
    ClausePhase {
        triggers: &["培训"],
        name: "培训实施",
        default_days: 3,
    },
];

/// One phase of a percentage template.
pub struct PhaseSpec {
    pub name: &'static str,
    /// Share of the total project duration, in percent.
    pub percent: i64,
}

/// Five-phase template for website projects.
pub const WEB_TEMPLATE: &[PhaseSpec] = &[
    PhaseSpec { name: "需求分析", percent: 15 },
    PhaseSpec { name: "UI/UX设计", percent: 20 },
    PhaseSpec { name: "前端开发", percent: 25 },
    PhaseSpec { name: "后端开发", percent: 25 },
    PhaseSpec { name: "测试与上线", percent: 15 },
];

/// Five-phase template for mobile app projects.
pub const APP_TEMPLATE: &[PhaseSpec] = &[
    PhaseSpec { name: "需求分析", percent: 15 },
    PhaseSpec { name: "UI设计", percent: 20 },
    PhaseSpec { name: "客户端开发", percent: 30 },
    PhaseSpec { name: "接口联调", percent: 20 },
    PhaseSpec { name: "测试发布", percent: 15 },
];

/// Canonical four-phase template used when the project name suggests nothing
/// more specific (20/30/40/10 split).
pub const GENERIC_TEMPLATE: &[PhaseSpec] = &[
    PhaseSpec { name: "需求分析", percent: 20 },
    PhaseSpec { name: "方案设计", percent: 30 },
    PhaseSpec { name: "开发实施", percent: 40 },
    PhaseSpec { name: "测试验收", percent: 10 },
];

/// Select the phase template matching a project name.
pub fn template_for(project_name: &str) -> &'static [PhaseSpec] {
    if project_name.contains("网站") || project_name.contains("Web") {
        WEB_TEMPLATE
    } else if project_name.contains("APP")
        || project_name.contains("应用")
        || project_name.contains("移动")
    {
        APP_TEMPLATE
    } else {
        GENERIC_TEMPLATE
    }
}

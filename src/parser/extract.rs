//! Lexical extractors for the instruction parser
//!
//! Pure functions mapping raw instruction text to scalar values: project
//! name, task name, keyword, duration, duration delta, start shift and start
//! date. Extractors never mutate state and never fail; an absent or
//! ambiguous match degrades to `None` so the caller can apply its own
//! default.

use crate::parser::lexicon;
use chrono::{Datelike, Duration, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

// Regex patterns (using LazyLock for static initialization)

static PROJECT_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:创建|新建|开始)(?:一个)?(.+?)(?:项目|计划)").expect("Invalid regex")
});
static PROJECT_NAME_CASUAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:做个|做一个)(.+?)(?:项目|计划)").expect("Invalid regex")
});
static PROJECT_NAME_LAUNCH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"启动(.+?)项目").expect("Invalid regex"));

static TASK_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:添加|新增|增加|加入|插入)(?:一个)?(.+?)(?:任务|环节|阶段)").expect("Invalid regex")
});
static TASK_NAME_MORE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"还要?加(?:一个)?(.+?)(?:任务|环节)").expect("Invalid regex")
});
static TASK_NAME_INTO_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"再添?加(.+?)进去").expect("Invalid regex"));
static TASK_NAME_SUPPLEMENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"补充(?:一个)?(.+?)阶段").expect("Invalid regex"));

static KEYWORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&lexicon::KEYWORDS.join("|")).expect("Invalid regex"));

// Digit and single-numeral forms in one alternation so the leftmost
// occurrence wins regardless of which form it uses.
static DURATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)([天周])|([一二两三四五六七八九十])([天周])").expect("Invalid regex")
});

// Edit deltas only honor a number directly following the verb. The
// absolute-target phrasing "延长到10天" is left unmatched on purpose and
// falls back to the default delta.
static EXTEND_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:延长|增加|加长|加)(?:了)?(\d+|[一二两三四五六七八九十])([天周])?").expect("Invalid regex")
});
static SHORTEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:缩短|减少)(?:了)?(\d+|[一二两三四五六七八九十])([天周])?").expect("Invalid regex")
});
static ADVANCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"提前(?:了)?(\d+|[一二两三四五六七八九十])([天周])?").expect("Invalid regex")
});
static POSTPONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:推迟|推后|延后)(?:了)?(\d+|[一二两三四五六七八九十])([天周])?").expect("Invalid regex")
});

static ABSOLUTE_DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{4})[年.\-](\d{1,2})[月.\-](\d{1,2})[日号]?").expect("Invalid regex")
});

/// Extract a project name from a create-style instruction.
///
/// Tries the explicit form (创建X项目), the casual form (做个X项目) and the
/// launch form (启动X项目) in that order, then canonicalizes well-known
/// project kinds. Returns `None` when no form matches; the caller supplies
/// the default name.
pub fn extract_project_name(text: &str) -> Option<String> {
    let patterns = [
        &*PROJECT_NAME_PATTERN,
        &*PROJECT_NAME_CASUAL_PATTERN,
        &*PROJECT_NAME_LAUNCH_PATTERN,
    ];
    for pattern in patterns {
        if let Some(caps) = pattern.captures(text) {
            let raw = caps[1].trim();
            if raw.is_empty() {
                continue;
            }
            return Some(match lexicon::canonical_project_name(raw) {
                Some(canonical) => canonical.to_string(),
                None => raw.to_string(),
            });
        }
    }
    None
}

/// Extract a task name from an add-style instruction.
///
/// Matched names containing a known keyword are replaced by their canonical
/// phase label (测试 becomes 测试验收 and so on).
pub fn extract_task_name(text: &str) -> Option<String> {
    let patterns = [
        &*TASK_NAME_PATTERN,
        &*TASK_NAME_MORE_PATTERN,
        &*TASK_NAME_INTO_PATTERN,
        &*TASK_NAME_SUPPLEMENT_PATTERN,
    ];
    for pattern in patterns {
        if let Some(caps) = pattern.captures(text) {
            let raw = caps[1].trim();
            if raw.is_empty() {
                continue;
            }
            return Some(match lexicon::canonical_task_name(raw) {
                Some(canonical) => canonical.to_string(),
                None => raw.to_string(),
            });
        }
    }
    None
}

/// Find the first domain keyword occurring in the text.
///
/// Returns the leftmost occurrence of any vocabulary word, or the generic
/// fallback token when none is present.
pub fn extract_keyword(text: &str) -> &str {
    KEYWORD_PATTERN
        .find(text)
        .map(|m| m.as_str())
        .unwrap_or(lexicon::FALLBACK_KEYWORD)
}

/// Extract a duration in days from the text.
///
/// Accepts digits (5天) and single Chinese numerals (两周). The week unit
/// multiplies by 7; the multiplier applies only to the matched unit, not to
/// 周 appearing elsewhere in the text. Durations clamp to whole days between
/// one and [`lexicon::MAX_SPAN_DAYS`].
pub fn extract_duration(text: &str) -> Option<i64> {
    let caps = DURATION_PATTERN.captures(text)?;
    let (value, unit) = if let Some(digits) = caps.get(1) {
        (digits.as_str().parse::<i64>().ok()?, caps.get(2)?.as_str())
    } else {
        let c = caps.get(3)?.as_str().chars().next()?;
        (lexicon::numeral_value(c)?, caps.get(4)?.as_str())
    };
    let days = if unit == "周" {
        value.saturating_mul(7)
    } else {
        value
    };
    Some(days.clamp(1, lexicon::MAX_SPAN_DAYS))
}

/// Extract a signed duration delta for Edit instructions.
///
/// 延长/增加 give a positive delta, 缩短/减少 a negative one. The magnitude
/// is the number directly following the verb, or the default when absent.
/// Returns 0 when no edit verb occurs.
pub fn extract_duration_delta(text: &str) -> i64 {
    if let Some(caps) = EXTEND_PATTERN.captures(text) {
        return scalar_from(&caps).unwrap_or(lexicon::DEFAULT_EDIT_DELTA);
    }
    if let Some(caps) = SHORTEN_PATTERN.captures(text) {
        return -scalar_from(&caps).unwrap_or(lexicon::DEFAULT_EDIT_DELTA);
    }
    if ["延长", "增加", "加长"].iter().any(|v| text.contains(v)) {
        return lexicon::DEFAULT_EDIT_DELTA;
    }
    if ["缩短", "减少"].iter().any(|v| text.contains(v)) {
        return -lexicon::DEFAULT_EDIT_DELTA;
    }
    0
}

/// Extract a signed start-date shift in days for Edit instructions.
///
/// 提前 shifts earlier (negative), 推迟/推后/延后 shift later (positive),
/// by the number following the verb or the default magnitude. Returns 0
/// when neither verb occurs.
pub fn extract_start_shift(text: &str) -> i64 {
    if text.contains("提前") {
        let n = ADVANCE_PATTERN
            .captures(text)
            .and_then(|caps| scalar_from(&caps))
            .unwrap_or(lexicon::DEFAULT_EDIT_DELTA);
        return -n;
    }
    if ["推迟", "推后", "延后"].iter().any(|v| text.contains(v)) {
        return POSTPONE_PATTERN
            .captures(text)
            .and_then(|caps| scalar_from(&caps))
            .unwrap_or(lexicon::DEFAULT_EDIT_DELTA);
    }
    0
}

/// Resolve the start date referenced by the text, relative to `today`.
///
/// Relative forms win over absolute dates; anything unrecognized defaults
/// to `today`.
pub fn extract_start_date(text: &str, today: NaiveDate) -> NaiveDate {
    if text.contains("明天") {
        return today + Duration::days(1);
    }
    if text.contains("下周一") {
        return next_monday(today);
    }
    if text.contains("下周") {
        return today + Duration::days(7);
    }
    if text.contains("下月") || text.contains("下个月") {
        return first_of_next_month(today).unwrap_or(today);
    }
    if let Some(caps) = ABSOLUTE_DATE_PATTERN.captures(text)
        && let Some(date) = ymd_from(&caps)
    {
        return date;
    }
    today
}

/// Parse the magnitude captured by a delta/shift pattern.
///
/// Group 1 holds digits or a single numeral, group 2 an optional unit.
/// Magnitudes clamp to the same one-day-to-[`lexicon::MAX_SPAN_DAYS`] range
/// as durations.
fn scalar_from(caps: &regex::Captures) -> Option<i64> {
    let raw = caps.get(1)?.as_str();
    let value = match raw.parse::<i64>() {
        Ok(n) => n,
        Err(_) => lexicon::numeral_value(raw.chars().next()?)?,
    };
    let days = match caps.get(2) {
        Some(unit) if unit.as_str() == "周" => value.saturating_mul(7),
        _ => value,
    };
    Some(days.clamp(1, lexicon::MAX_SPAN_DAYS))
}

/// The Monday after `today`. A Sunday advances by one day, any other day
/// jumps past the rest of the week.
fn next_monday(today: NaiveDate) -> NaiveDate {
    let dow = today.weekday().num_days_from_sunday() as i64;
    let add = if dow == 0 { 1 } else { 8 - dow };
    today + Duration::days(add)
}

fn first_of_next_month(today: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = if today.month() == 12 {
        (today.year() + 1, 1)
    } else {
        (today.year(), today.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
}

fn ymd_from(caps: &regex::Captures) -> Option<NaiveDate> {
    let year = caps.get(1)?.as_str().parse::<i32>().ok()?;
    let month = caps.get(2)?.as_str().parse::<u32>().ok()?;
    let day = caps.get(3)?.as_str().parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

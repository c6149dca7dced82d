//! Gantt MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server that turns
//! short Chinese natural-language instructions ("创建网站开发项目，三周时间")
//! into a structured project schedule suitable for Gantt chart rendering.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `GanttServerHandler` - Handles MCP protocol communication
//! - **Parser Layer**: `parser` module - Lexical extraction, intent
//!   classification and task synthesis
//! - **Domain Layer**: `schedule` module - Schedule model, timeline
//!   normalization and the built-in sample project
//!
//! # Example
//!
//! ```no_run
//! use gantt_mcp::{GanttServerHandler, GapPolicy};
//!
//! let handler = GanttServerHandler::new(GapPolicy::default(), false);
//! // Use handler with MCP server...
//! ```

mod chart;
mod formatting;
mod handlers;
mod parser;
mod schedule;
mod transfer;
mod validation;

use mcp_attr::server::{McpServer, mcp_server};
use mcp_attr::Result as McpResult;
use std::sync::Mutex;

// Re-export commonly used types
pub use chart::ChartRow;
pub use parser::{Intent, ParseOutcome};
pub use schedule::{local_date_today, Conflict, GapPolicy, Schedule, Task};
pub use transfer::ExportEnvelope;

/// MCP Server handler for Gantt schedule management
///
/// Provides an MCP interface to the instruction parser and the in-memory
/// schedule it maintains. State lives for the duration of the session;
/// export/import moves it across sessions.
pub struct GanttServerHandler {
    pub(crate) schedule: Mutex<Schedule>,
    pub(crate) policy: GapPolicy,
}

impl GanttServerHandler {
    /// Create a new Gantt server handler
    ///
    /// # Arguments
    /// * `policy` - Minimum gap kept between tasks during normalization
    /// * `sample` - Start with the built-in sample project instead of an
    ///   empty schedule
    pub fn new(policy: GapPolicy, sample: bool) -> Self {
        let schedule = if sample {
            schedule::sample_project()
        } else {
            Schedule::default()
        };
        Self {
            schedule: Mutex::new(schedule),
            policy,
        }
    }
}

/// Gantt scheduling server driven by short Chinese natural-language instructions.
///
/// Send free-text commands to parse_instruction and the server maintains one
/// in-memory project schedule: a name plus an ordered task list with start
/// dates and day durations.
///
/// Key instruction forms:
/// - **Create**: "创建网站开发项目，三周时间" - replaces the schedule with a new project
/// - **Add**: "添加测试任务，需要5天时间" or "在开发后加入代码评审环节" - inserts one task
/// - **Edit**: "把开发时间延长3天", "将测试提前两天开始" - adjusts every matching task
/// - **Delete**: "删除测试任务" - removes every matching task
///
/// The first instruction on an empty schedule always creates a project, so the
/// server never silently no-ops on first use. After every change the timeline
/// is normalized: tasks sorted by start date, overlaps resolved and reported.
/// Use chart_data for rendering and export_project / import_project to carry a
/// schedule across sessions.
#[mcp_server]
impl McpServer for GanttServerHandler {
    /// **Parse**: Interpret one Chinese scheduling instruction and update the schedule.
    /// **Intents**: create (创建/新建/启动…项目), add (添加/加入…任务), edit (延长/缩短/提前/推迟), delete (删除/取消…任务).
    /// **Behavior**: Best-effort and never fatal - missing fields fall back to documented defaults, and the response describes exactly what changed, including any auto-resolved timeline conflicts.
    #[tool]
    async fn parse_instruction(
        &self,
        /// Instruction text, e.g. "创建网站开发项目，三周时间"
        instruction: String,
    ) -> McpResult<String> {
        self.handle_parse_instruction(instruction).await
    }

    /// **Review**: Show the current project and every task with its start,
    /// end, duration and progress.
    #[tool]
    async fn show_schedule(&self) -> McpResult<String> {
        self.handle_show_schedule().await
    }

    /// **Render**: Return the schedule as JSON chart rows, one per task:
    /// {id, name, start, end, progress} with YYYY-MM-DD dates.
    #[tool]
    async fn chart_data(&self) -> McpResult<String> {
        self.handle_chart_data().await
    }

    /// **Export**: Return the schedule wrapped in a JSON envelope
    /// {project, exportTime, version} for saving outside the session.
    #[tool]
    async fn export_project(&self) -> McpResult<String> {
        self.handle_export_project().await
    }

    /// **Import**: Replace the schedule with a previously exported envelope,
    /// bypassing the parser entirely.
    #[tool]
    async fn import_project(
        &self,
        /// JSON envelope produced by export_project
        data: String,
    ) -> McpResult<String> {
        self.handle_import_project(data).await
    }

    /// **Demo**: Replace the schedule with the built-in five-phase sample
    /// project starting today.
    #[tool]
    async fn load_sample(&self) -> McpResult<String> {
        self.handle_load_sample().await
    }

    /// **Reset**: Empty the schedule and restore the default project name.
    #[tool]
    async fn clear_schedule(&self) -> McpResult<String> {
        self.handle_clear_schedule().await
    }
}

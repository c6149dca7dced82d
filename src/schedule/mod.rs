//! Schedule domain model
//!
//! The project record every tool reads and writes: tasks with calendar
//! dates, the normalization pass that keeps them in order, and the
//! built-in sample project.

pub mod normalize;
pub mod project;
pub mod queries;
pub mod sample;
pub mod task;

pub use normalize::{normalize, Conflict, GapPolicy};
pub use project::Schedule;
pub use sample::sample_project;
pub use task::{local_date_today, Task};

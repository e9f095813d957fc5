//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod generate;
mod list;
mod output;
mod preview;

pub use generate::{FailureRow, GenerateOutcome, GenerateReport, PreviewResult, WrittenResult};
pub use list::{ListReport, ListRow, collision_warnings};
pub use output::{Report, TerminalOutput};
pub use preview::PreviewReport;

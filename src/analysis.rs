//! Result analysis over recent chat history.

mod commands;
mod extract;
mod stats;

pub use commands::{analysis_commands, format_analysis};
pub use extract::{RESULT_MARKER, extract_results};
pub use stats::{AnalysisResult, Mode, analyze};

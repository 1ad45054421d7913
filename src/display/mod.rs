//! Human-readable rendering of analysis results.

pub mod report;

pub use report::format_report;

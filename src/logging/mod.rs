//! Structured logging for screening runs.

mod format;

pub use format::{LogEvent, StructuredLogger};

// src/ports/mod.rs
pub mod report;

pub use report::{report, LogSink, MessageSink, Outcome};

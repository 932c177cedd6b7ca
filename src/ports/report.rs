// src/ports/report.rs
use tracing::info;

use crate::constants::{MSG_FAILURE, MSG_NETWORK_ERROR, MSG_SUCCESS};
use crate::domain::{DomainError, TransportError};

/// User-facing category of a finished operation.
///
/// Exactly three categories exist; the mapped messages are fixed and the
/// underlying error is never shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    NetworkFailure,
    Failure,
}

impl Outcome {
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Success => MSG_SUCCESS,
            Outcome::NetworkFailure => MSG_NETWORK_ERROR,
            Outcome::Failure => MSG_FAILURE,
        }
    }

    /// Classify a failed operation.
    ///
    /// Connectivity failures are matched structurally. For errors without
    /// structure the message-substring heuristic applies: a message that
    /// mentions "network" (case-insensitive) counts as a connectivity
    /// failure. Everything else is a generic failure.
    pub fn from_error(error: &DomainError) -> Self {
        match error {
            DomainError::Transport(TransportError::Connectivity(_)) => Outcome::NetworkFailure,
            other if mentions_network(&other.to_string()) => Outcome::NetworkFailure,
            _ => Outcome::Failure,
        }
    }

    pub fn of<T>(result: &Result<T, DomainError>) -> Self {
        match result {
            Ok(_) => Outcome::Success,
            Err(error) => Outcome::from_error(error),
        }
    }
}

fn mentions_network(message: &str) -> bool {
    message.to_lowercase().contains("network")
}

/// Delivery target for outcome messages.
///
/// Classification is pure; where the message ends up (dialog, status bar,
/// log) is decided by the sink the caller injects.
pub trait MessageSink {
    fn deliver(&mut self, message: &str);
}

impl MessageSink for Vec<String> {
    fn deliver(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

/// Sink that routes messages into the log instead of a display surface.
#[derive(Debug, Default)]
pub struct LogSink;

impl MessageSink for LogSink {
    fn deliver(&mut self, message: &str) {
        info!("{message}");
    }
}

/// Classify `result` and deliver the mapped message to `sink`.
pub fn report<T, S: MessageSink>(result: &Result<T, DomainError>, sink: &mut S) -> Outcome {
    let outcome = Outcome::of(result);
    sink.deliver(outcome.message());
    outcome
}

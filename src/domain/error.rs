// src/domain/error.rs
use thiserror::Error;

/// Failure raised at the transport boundary.
///
/// The variants are structural so callers can distinguish connectivity
/// failures from server-side failures without inspecting message text.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The request never completed: DNS, connect or timeout failure.
    #[error("network error: {0}")]
    Connectivity(String),
    /// The request completed but the server answered with an error status.
    #[error("server responded with status {status}")]
    Status { status: u16, body: String },
    #[error("transport failure: {0}")]
    Other(String),
}

#[derive(Error, Debug)]
pub enum DomainError {
    /// Operation requires a saved note but the note has no id yet.
    #[error("note has no id: {0} requires a note that was already saved")]
    MissingId(&'static str),
    /// Operation requires an unsaved note, or the id was assigned twice.
    #[error("note already has id {0}")]
    AlreadyPersisted(String),
    #[error("note id must be a non-empty string")]
    EmptyId,
    #[error(transparent)]
    Transport(#[from] TransportError),
}

// src/application/mod.rs
pub mod account;
pub mod notes;
pub mod transport;

pub use account::AccountService;
pub use notes::NoteService;
pub use transport::{bearer_headers, Response, TransportClient};

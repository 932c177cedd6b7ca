// src/lib.rs
pub mod application;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::Result;
use application::{AccountService, NoteService};
use infrastructure::{Config, HttpTransport};
use tracing::debug;

/// Build a [`NoteService`] bound to the configured server.
pub fn connect(config: &Config) -> Result<NoteService<HttpTransport>> {
    debug!(?config, "Connecting note service");
    let transport = HttpTransport::from_config(config)?;
    Ok(NoteService::with_collection(transport, &config.paths.notes))
}

/// Build an [`AccountService`] bound to the configured server.
pub fn connect_account(config: &Config) -> Result<AccountService<HttpTransport>> {
    debug!(?config, "Connecting account service");
    let transport = HttpTransport::from_config(config)?;
    Ok(AccountService::with_path(transport, &config.paths.account))
}

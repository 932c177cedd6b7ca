// src/application/account.rs
use serde_json::json;
use tracing::{debug, instrument};

use crate::application::transport::{bearer_headers, Response, TransportClient};
use crate::constants::ACCOUNT_PATH;
use crate::domain::DomainError;

/// REST binding of the account sub-resource.
///
/// Same request-shaping contract as the notes collection; both operations
/// require a bearer token.
pub struct AccountService<T: TransportClient> {
    transport: T,
    path: String,
}

impl<T: TransportClient> AccountService<T> {
    pub fn new(transport: T) -> Self {
        Self::with_path(transport, ACCOUNT_PATH)
    }

    pub fn with_path(transport: T, path: impl Into<String>) -> Self {
        Self {
            transport,
            path: path.into(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    #[instrument(level = "debug", skip(self, new_password, token))]
    pub fn change_password(
        &mut self,
        new_password: &str,
        token: &str,
    ) -> Result<Response, DomainError> {
        debug!(path = %self.path, "Changing password");
        let body = json!({ "password": new_password });
        let response = self
            .transport
            .patch(&self.path, &body, &bearer_headers(Some(token)))?;
        Ok(response)
    }

    /// Remove the account server-side.
    #[instrument(level = "debug", skip(self, token))]
    pub fn close(&mut self, token: &str) -> Result<Response, DomainError> {
        debug!(path = %self.path, "Closing account");
        let response = self
            .transport
            .delete(&self.path, &bearer_headers(Some(token)))?;
        Ok(response)
    }
}

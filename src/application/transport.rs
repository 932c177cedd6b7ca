// src/application/transport.rs
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::TransportError;

/// Response to a completed transport call.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    /// Deserialize the response body.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, TransportError> {
        serde_json::from_str(&self.body)
            .map_err(|e| TransportError::Other(format!("invalid response body: {e}")))
    }
}

/// HTTP collaborator the services delegate to.
///
/// Base URL and default headers are configured once when the implementation
/// is constructed; paths passed here are relative to that base. Calls block
/// until the request settles; ordering between calls is the caller's
/// responsibility.
pub trait TransportClient {
    fn get(
        &mut self,
        path: &str,
        headers: &[(String, String)],
        params: &[(String, String)],
    ) -> Result<Response, TransportError>;

    fn post(
        &mut self,
        path: &str,
        body: &Value,
        headers: &[(String, String)],
    ) -> Result<Response, TransportError>;

    fn patch(
        &mut self,
        path: &str,
        body: &Value,
        headers: &[(String, String)],
    ) -> Result<Response, TransportError>;

    fn delete(&mut self, path: &str, headers: &[(String, String)])
        -> Result<Response, TransportError>;
}

/// Authorization header for `token`; no header at all when absent.
pub fn bearer_headers(token: Option<&str>) -> Vec<(String, String)> {
    match token {
        Some(token) => vec![("Authorization".to_string(), format!("Bearer {token}"))],
        None => Vec::new(),
    }
}

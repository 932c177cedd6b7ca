// src/infrastructure/http.rs
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::{Client, RequestBuilder};
use serde_json::Value;
use tracing::{debug, info, instrument};
use url::Url;

use crate::application::transport::{Response, TransportClient};
use crate::constants::DEFAULT_TIMEOUT_SECS;
use crate::domain::TransportError;
use crate::infrastructure::config::Config;

/// HTTP implementation of [`TransportClient`] over a blocking reqwest client.
///
/// Connectivity failures (DNS, connect, timeout) surface as
/// [`TransportError::Connectivity`]; completed requests with an error status
/// surface as [`TransportError::Status`] carrying the body for diagnostics.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid base URL: {base_url}"))?;

        // Url::join drops the last path segment of a base without a
        // trailing slash, so normalize it here once.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        info!(%base_url, "HTTP transport ready");
        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_timeout(
            &config.server.base_url,
            Duration::from_secs(config.server.timeout_secs),
        )
    }

    fn url_for(&self, path: &str) -> Result<Url, TransportError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| TransportError::Other(format!("invalid request path {path}: {e}")))
    }

    fn apply_headers(builder: RequestBuilder, headers: &[(String, String)]) -> RequestBuilder {
        headers
            .iter()
            .fold(builder, |builder, (name, value)| builder.header(name, value))
    }

    fn dispatch(&self, builder: RequestBuilder) -> Result<Response, TransportError> {
        let response = builder.send().map_err(classify_send_error)?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| TransportError::Other(format!("failed to read response body: {e}")))?;
        debug!(status, "Request settled");

        if status >= 400 {
            return Err(TransportError::Status { status, body });
        }
        Ok(Response { status, body })
    }
}

fn classify_send_error(error: reqwest::Error) -> TransportError {
    if error.is_connect() || error.is_timeout() {
        TransportError::Connectivity(error.to_string())
    } else {
        TransportError::Other(error.to_string())
    }
}

impl TransportClient for HttpTransport {
    #[instrument(level = "debug", skip(self, headers))]
    fn get(
        &mut self,
        path: &str,
        headers: &[(String, String)],
        params: &[(String, String)],
    ) -> Result<Response, TransportError> {
        let url = self.url_for(path)?;
        let builder = self.client.get(url).query(params);
        self.dispatch(Self::apply_headers(builder, headers))
    }

    #[instrument(level = "debug", skip(self, body, headers))]
    fn post(
        &mut self,
        path: &str,
        body: &Value,
        headers: &[(String, String)],
    ) -> Result<Response, TransportError> {
        let url = self.url_for(path)?;
        let builder = self.client.post(url).json(body);
        self.dispatch(Self::apply_headers(builder, headers))
    }

    #[instrument(level = "debug", skip(self, body, headers))]
    fn patch(
        &mut self,
        path: &str,
        body: &Value,
        headers: &[(String, String)],
    ) -> Result<Response, TransportError> {
        let url = self.url_for(path)?;
        let builder = self.client.patch(url).json(body);
        self.dispatch(Self::apply_headers(builder, headers))
    }

    #[instrument(level = "debug", skip(self, headers))]
    fn delete(
        &mut self,
        path: &str,
        headers: &[(String, String)],
    ) -> Result<Response, TransportError> {
        let url = self.url_for(path)?;
        self.dispatch(Self::apply_headers(self.client.delete(url), headers))
    }
}

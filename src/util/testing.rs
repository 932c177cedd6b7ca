// src/util/testing.rs

use std::collections::VecDeque;
use std::env;

use anyhow::Result;
use serde_json::Value;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::transport::{Response, TransportClient};
use crate::domain::TransportError;

// Common test environment variables
pub const TEST_ENV_VARS: &[&str] = &["RUST_LOG", "NOTEWIRE_BASE_URL", "NOTEWIRE_TIMEOUT_SECS"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

/// One call made against a [`MockTransport`], as the service issued it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    pub headers: Vec<(String, String)>,
    pub params: Vec<(String, String)>,
}

impl RecordedRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Shared mock transport for testing services that depend on
/// [`TransportClient`].
///
/// Records every request and replays scripted results in order; once the
/// script is exhausted, calls succeed with an empty `200` response. This
/// eliminates the need for each test file to define its own mock.
///
/// # Examples
///
/// ```
/// use notewire::util::testing::MockTransport;
///
/// let mock = MockTransport::builder()
///     .with_ok(201, r#"{"id":"abc"}"#)
///     .build();
/// ```
pub struct MockTransport {
    pub requests: Vec<RecordedRequest>,
    script: VecDeque<Result<Response, TransportError>>,
}

impl MockTransport {
    pub fn builder() -> MockTransportBuilder {
        MockTransportBuilder::new()
    }

    fn dispatch(&mut self, request: RecordedRequest) -> Result<Response, TransportError> {
        self.requests.push(request);
        self.script.pop_front().unwrap_or_else(|| {
            Ok(Response {
                status: 200,
                body: "{}".to_string(),
            })
        })
    }
}

impl TransportClient for MockTransport {
    fn get(
        &mut self,
        path: &str,
        headers: &[(String, String)],
        params: &[(String, String)],
    ) -> Result<Response, TransportError> {
        self.dispatch(RecordedRequest {
            method: Method::Get,
            path: path.to_string(),
            body: None,
            headers: headers.to_vec(),
            params: params.to_vec(),
        })
    }

    fn post(
        &mut self,
        path: &str,
        body: &Value,
        headers: &[(String, String)],
    ) -> Result<Response, TransportError> {
        self.dispatch(RecordedRequest {
            method: Method::Post,
            path: path.to_string(),
            body: Some(body.clone()),
            headers: headers.to_vec(),
            params: Vec::new(),
        })
    }

    fn patch(
        &mut self,
        path: &str,
        body: &Value,
        headers: &[(String, String)],
    ) -> Result<Response, TransportError> {
        self.dispatch(RecordedRequest {
            method: Method::Patch,
            path: path.to_string(),
            body: Some(body.clone()),
            headers: headers.to_vec(),
            params: Vec::new(),
        })
    }

    fn delete(
        &mut self,
        path: &str,
        headers: &[(String, String)],
    ) -> Result<Response, TransportError> {
        self.dispatch(RecordedRequest {
            method: Method::Delete,
            path: path.to_string(),
            body: None,
            headers: headers.to_vec(),
            params: Vec::new(),
        })
    }
}

/// Builder for [`MockTransport`]
///
/// Scripted results are consumed in call order.
pub struct MockTransportBuilder {
    script: VecDeque<Result<Response, TransportError>>,
}

impl MockTransportBuilder {
    pub fn new() -> Self {
        Self {
            script: VecDeque::new(),
        }
    }

    /// Script a successful response for the next call.
    pub fn with_ok(mut self, status: u16, body: &str) -> Self {
        self.script.push_back(Ok(Response {
            status,
            body: body.to_string(),
        }));
        self
    }

    /// Script a transport failure for the next call.
    pub fn with_error(mut self, error: TransportError) -> Self {
        self.script.push_back(Err(error));
        self
    }

    pub fn build(self) -> MockTransport {
        MockTransport {
            requests: Vec::new(),
            script: self.script,
        }
    }
}

impl Default for MockTransportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["reqwest", "hyper", "rustls", "mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

pub fn print_active_env_vars() {
    for var in TEST_ENV_VARS {
        if let Ok(value) = env::var(var) {
            println!("{var}={value}");
        } else {
            println!("{var} is not set");
        }
    }
}

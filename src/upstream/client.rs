//! HTTP client for the upstream dummy employee API.
//!
//! # Responsibilities
//! - Build `api/v1/...` URLs from the configured base
//! - Issue list / get / create / delete calls with timeouts
//! - Unwrap the `{status, data, message}` envelope
//! - Map transport and status failures to `UpstreamError`

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::UpstreamConfig;
use crate::employees::Employee;
use crate::observability::metrics;
use crate::upstream::types::{Envelope, UpstreamError, UpstreamResult};

/// Operations the facade needs from the upstream service.
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    /// Every employee the upstream knows about.
    async fn list_employees(&self) -> UpstreamResult<Vec<Employee>>;

    /// A single employee. `NotFound` when the upstream has no record.
    async fn get_employee(&self, id: &str) -> UpstreamResult<Employee>;

    /// Create an employee and return the upstream's echo of it.
    async fn create_employee(&self, employee: &Employee) -> UpstreamResult<Employee>;

    /// Ask the upstream to delete an employee. Success only means the
    /// upstream accepted the call.
    async fn delete_employee(&self, id: &str) -> UpstreamResult<()>;
}

/// `EmployeeApi` backed by reqwest.
#[derive(Clone)]
pub struct HttpEmployeeApi {
    client: Client,
    base_url: Url,
}

impl HttpEmployeeApi {
    /// Create a client for the configured upstream.
    pub fn new(config: &UpstreamConfig) -> UpstreamResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            UpstreamError::InvalidUrl(format!("'{}': {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(UpstreamError::InvalidUrl(format!(
                "'{}' cannot be used as a base",
                config.base_url
            )));
        }

        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.clone());
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }

        let client = builder
            .build()
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        tracing::info!(
            base_url = %base_url,
            request_timeout_secs = config.request_timeout_secs,
            "Upstream client initialized"
        );

        Ok(Self { client, base_url })
    }

    /// Base URL all endpoints are joined onto.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append path segments to the base URL. Segments are percent-encoded,
    /// so an id can never escape its own segment.
    fn endpoint(&self, segments: &[&str]) -> UpstreamResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| UpstreamError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request, record it, and reject non-success statuses.
    async fn send(&self, operation: &'static str, request: RequestBuilder) -> UpstreamResult<Response> {
        let start = Instant::now();

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                metrics::record_upstream_call(operation, "error", start);
                tracing::warn!(operation, error = %e, "Upstream request failed");
                return Err(e.into());
            }
        };

        let status = response.status();
        metrics::record_upstream_call(operation, status.as_str(), start);
        tracing::debug!(
            operation,
            status = %status,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Upstream call completed"
        );

        if !status.is_success() {
            return Err(UpstreamError::from_status(status));
        }
        Ok(response)
    }

    async fn read_envelope<T: DeserializeOwned>(response: Response) -> UpstreamResult<Envelope<T>> {
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| UpstreamError::Decode(e.to_string()))
    }
}

#[async_trait]
impl EmployeeApi for HttpEmployeeApi {
    async fn list_employees(&self) -> UpstreamResult<Vec<Employee>> {
        let url = self.endpoint(&["api", "v1", "employees"])?;
        let response = self.send("list", self.client.get(url)).await?;

        Self::read_envelope::<Vec<Employee>>(response)
            .await?
            .into_data()
            .ok_or_else(|| UpstreamError::Decode("employee list envelope carried no data".into()))
    }

    async fn get_employee(&self, id: &str) -> UpstreamResult<Employee> {
        let url = self.endpoint(&["api", "v1", "employee", id])?;
        let response = self.send("get", self.client.get(url)).await?;

        Self::read_envelope::<Employee>(response)
            .await?
            .into_data()
            .ok_or(UpstreamError::NotFound)
    }

    async fn create_employee(&self, employee: &Employee) -> UpstreamResult<Employee> {
        let url = self.endpoint(&["api", "v1", "create"])?;
        let response = self
            .send("create", self.client.post(url).json(employee))
            .await?;

        Self::read_envelope::<Employee>(response)
            .await?
            .into_data()
            .ok_or_else(|| UpstreamError::Decode("create envelope carried no data".into()))
    }

    async fn delete_employee(&self, id: &str) -> UpstreamResult<()> {
        let url = self.endpoint(&["api", "v1", "delete", id])?;
        self.send("delete", self.client.delete(url)).await?;
        Ok(())
    }
}

//! HTTP client for the emulator compute REST API.
//!
//! Every operation maps onto one request against
//! `{endpoint}/restapi/compute/{datacenter}[/{name}]`. Responses are kept as
//! untyped JSON; the emulator reports most failures as JSON strings with a
//! non-2xx status, so those bodies are returned to the caller as well.
//!
//! # Example
//!
//! ```rust,no_run
//! use emu_cli::client::ComputeClient;
//!
//! # async fn example() -> Result<(), emu_cli::CliError> {
//! let client = ComputeClient::new("http://127.0.0.1:5001");
//! let status = client.status("dc1", "vnf1").await?;
//! println!("{status}");
//! # Ok(())
//! # }
//! ```

use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::error::CliError;

/// Path prefix of the compute resource.
pub const COMPUTE_PATH: &str = "restapi/compute";

/// Body of a `start` request.
///
/// Optional settings that were not given are left out of the body. The
/// resource limits default to empty strings, which the emulator treats as
/// "use the runtime default".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StartRequest {
    /// Container image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Startup command of the container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// Interface specification, e.g. `(id=input,ip=10.0.10.3/24)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    /// Host environment variable exposed to the VNF.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    /// Volume mapping in docker `-v` syntax.
    pub volume: String,
    /// CPU shares.
    pub cpu_shares: String,
    /// CFS period.
    pub cpu_period: String,
    /// CFS quota.
    pub cpu_quota: String,
    /// Memory limit.
    pub mem_limit: String,
}

/// Body of a `move` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveRequest {
    /// Datacenter the instance is moved to.
    pub destination: String,
}

/// Compute API client.
#[derive(Debug, Clone)]
pub struct ComputeClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ComputeClient {
    /// Create a client for the given endpoint.
    ///
    /// The endpoint is used verbatim as the URL prefix.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// The endpoint this client talks to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build the URL of a datacenter, or of an instance inside it.
    #[must_use]
    pub fn compute_url(&self, datacenter: &str, name: Option<&str>) -> String {
        match name {
            Some(name) => format!("{}/{COMPUTE_PATH}/{datacenter}/{name}", self.endpoint),
            None => format!("{}/{COMPUTE_PATH}/{datacenter}", self.endpoint),
        }
    }

    /// Start a compute instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not JSON.
    pub async fn start(
        &self,
        datacenter: &str,
        name: &str,
        request: &StartRequest,
    ) -> Result<Value, CliError> {
        let url = self.compute_url(datacenter, Some(name));
        let builder = self.http.request(Method::PUT, &url).json(request);
        self.send(builder, url).await
    }

    /// Stop a compute instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not JSON.
    pub async fn stop(&self, datacenter: &str, name: &str) -> Result<Value, CliError> {
        let url = self.compute_url(datacenter, Some(name));
        let builder = self.http.request(Method::DELETE, &url);
        self.send(builder, url).await
    }

    /// Move a compute instance to another datacenter.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not JSON.
    pub async fn move_instance(
        &self,
        datacenter: &str,
        name: &str,
        request: &MoveRequest,
    ) -> Result<Value, CliError> {
        let url = self.compute_url(datacenter, Some(name));
        let builder = self.http.request(Method::PUT, &url).json(request);
        self.send(builder, url).await
    }

    /// Fetch the status of a compute instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not JSON.
    pub async fn status(&self, datacenter: &str, name: &str) -> Result<Value, CliError> {
        let url = self.compute_url(datacenter, Some(name));
        let builder = self.http.request(Method::GET, &url);
        self.send(builder, url).await
    }

    /// List the compute instances of a datacenter.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not JSON.
    pub async fn list(&self, datacenter: &str) -> Result<Value, CliError> {
        let url = self.compute_url(datacenter, None);
        let builder = self.http.request(Method::GET, &url);
        self.send(builder, url).await
    }

    /// Send a request and decode the JSON body.
    async fn send(&self, builder: RequestBuilder, url: String) -> Result<Value, CliError> {
        debug!(url = %url, "Sending compute request");

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        trace!(url = %url, status = %status, bytes = body.len(), "Received response");
        if !status.is_success() {
            warn!(url = %url, status = %status, "Compute API returned an error status");
        }

        serde_json::from_str(&body).map_err(|e| CliError::Decode {
            url,
            reason: e.to_string(),
        })
    }
}

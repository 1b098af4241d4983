//! HTTP status source backed by `GET {base_url}/status`

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use url::Url;
use crate::error::{ClientError, Result};
use super::{JobStatus, StatusSource};

/// Per-request timeout used by [`HttpStatusSource::new`]
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Body returned by the status endpoint
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatusResponse {
    #[serde(default)]
    pub result: Option<Value>,
}

/// Status source that asks the remote job over HTTP
#[derive(Clone, Debug)]
pub struct HttpStatusSource {
    status_url: String,
    http_client: HttpClient,
}

impl HttpStatusSource {
    /// Creates a status source for the job served at `base_url`
    ///
    /// # Example
    ///
    /// ```rust
    /// use translation_status_client::status::HttpStatusSource;
    ///
    /// let source = HttpStatusSource::new("http://127.0.0.1:5000").unwrap();
    /// assert_eq!(source.status_url(), "http://127.0.0.1:5000/status");
    /// ```
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(DEFAULT_REQUEST_TIMEOUT)
            .build()?;
        Self::with_client(base_url, http_client)
    }

    /// Creates a status source with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl AsRef<str>, http_client: HttpClient) -> Result<Self> {
        let base_url = base_url.as_ref().trim_end_matches('/');
        Url::parse(base_url)?;
        Ok(Self {
            status_url: format!("{}/status", base_url),
            http_client,
        })
    }

    /// The full URL queried on every call
    pub fn status_url(&self) -> &str {
        &self.status_url
    }

    async fn fetch(&self) -> Result<JobStatus> {
        let response = self.http_client.get(&self.status_url).send().await?;

        let code = response.status();
        if !code.is_success() {
            return Err(ClientError::UnexpectedStatus(code.as_u16()));
        }

        let body = response.text().await?;
        let parsed: StatusResponse = serde_json::from_str(&body)?;
        let result = parsed
            .result
            .as_ref()
            .and_then(|v| v.as_str())
            .ok_or(ClientError::MissingResult)?;

        let status = JobStatus::from_wire(result);
        if status == JobStatus::Error && result != super::JOB_STATUS_ERROR {
            log::error!("Unrecognized job status {:?}, treating as error", result);
        }
        Ok(status)
    }
}

#[async_trait]
impl StatusSource for HttpStatusSource {
    async fn query(&self) -> JobStatus {
        match self.fetch().await {
            Ok(status) => status,
            Err(e) => {
                log::error!("Error getting status from {}: {}", self.status_url, e);
                JobStatus::Error
            }
        }
    }
}

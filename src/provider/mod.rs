//! Client for the third-party user-data provider (randomuser.me compatible).
//!
//! One `GET {base}/?results={n}&nat={nat}` per login, bounded by a per-attempt
//! timeout and retried with exponential backoff. The provider's profile schema
//! is passed through untouched as JSON.

pub mod error;
pub mod retry;

pub use self::error::ProviderError;

use crate::APP_USER_AGENT;
use anyhow::{Context, Result};
use reqwest::{header::ACCEPT, Client};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, instrument};
use url::Url;

pub const DEFAULT_PROVIDER_URL: &str = "https://randomuser.me/api";
pub const DEFAULT_RESULTS: u32 = 1;
pub const DEFAULT_NATIONALITY: &str = "us";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_RETRY_ATTEMPTS: u32 = 3;
pub const DEFAULT_BACKOFF_MILLIS: u64 = 1000;

#[derive(Clone, Debug)]
pub struct ProviderConfig {
    base_url: String,
    results: u32,
    nationality: String,
    timeout: Duration,
    retry_attempts: u32,
    backoff_base: Duration,
}

impl ProviderConfig {
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            results: DEFAULT_RESULTS,
            nationality: DEFAULT_NATIONALITY.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
            backoff_base: Duration::from_millis(DEFAULT_BACKOFF_MILLIS),
        }
    }

    #[must_use]
    pub fn with_results(mut self, results: u32) -> Self {
        self.results = results;
        self
    }

    #[must_use]
    pub fn with_nationality(mut self, nationality: String) -> Self {
        self.nationality = nationality;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_retry_attempts(mut self, attempts: u32) -> Self {
        self.retry_attempts = attempts;
        self
    }

    #[must_use]
    pub fn with_backoff_base(mut self, base: Duration) -> Self {
        self.backoff_base = base;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub fn retry_attempts(&self) -> u32 {
        self.retry_attempts
    }

    #[must_use]
    pub fn backoff_base(&self) -> Duration {
        self.backoff_base
    }

    /// Build `{base}/?results={n}&nat={nat}`.
    ///
    /// # Errors
    /// Returns an error if the base URL does not parse.
    pub fn endpoint_url(&self) -> Result<Url, ProviderError> {
        let base = self.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/"))?;
        url.query_pairs_mut()
            .append_pair("results", &self.results.to_string())
            .append_pair("nat", &self.nationality);
        Ok(url)
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PROVIDER_URL.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct ProviderResponse {
    #[serde(default)]
    results: Option<Vec<Value>>,
}

#[derive(Debug, Clone)]
pub struct ProviderClient {
    client: Client,
    config: ProviderConfig,
}

impl ProviderClient {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(config.timeout())
            .build()
            .context("Failed to build provider HTTP client")?;

        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Fetch one profile record, retrying transport and status failures.
    ///
    /// # Errors
    /// Returns a [`ProviderError`] when every attempt fails or the provider
    /// returns no results.
    #[instrument(skip(self))]
    pub async fn fetch_profile(&self) -> Result<Value, ProviderError> {
        let url = self.config.endpoint_url()?;

        let response = retry::retry(
            || self.fetch(url.clone()),
            self.config.retry_attempts(),
            self.config.backoff_base(),
        )
        .await?;

        response
            .results
            .and_then(|results| results.into_iter().next())
            .ok_or(ProviderError::EmptyResult)
    }

    async fn fetch(&self, url: Url) -> Result<ProviderResponse, ProviderError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| ProviderError::from_transport(&err))?;

        let status = response.status();
        if !status.is_success() {
            error!("Provider responded with {}", status);
            return Err(ProviderError::Status(status));
        }

        response
            .json::<ProviderResponse>()
            .await
            .map_err(|err| ProviderError::from_transport(&err))
    }
}

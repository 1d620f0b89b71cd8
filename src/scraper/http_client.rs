use crate::config::ScraperConfig;
use crate::scraper::user_agent;
use anyhow::{Context, Result};
use reqwest::header::USER_AGENT;
use std::time::Duration;
use tracing::debug;

pub struct HttpClient {
    inner: reqwest::Client,
    fixed_user_agent: Option<String>,
}

impl HttpClient {
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            inner,
            fixed_user_agent: config.user_agent.clone(),
        })
    }

    /// Fetch a URL as text. One attempt, no retry: transient failures and
    /// HTTP error statuses surface to the caller as-is.
    pub async fn get_text(&self, url: &str) -> Result<String> {
        let ua = match &self.fixed_user_agent {
            Some(ua) => ua.clone(),
            None => user_agent::random_user_agent(),
        };
        debug!("GET {} (UA: {})", url, ua);

        let resp = self
            .inner
            .get(url)
            .header(USER_AGENT, ua)
            .send()
            .await
            .with_context(|| format!("Request failed for {}", url))?;

        let resp = resp
            .error_for_status()
            .with_context(|| format!("HTTP error for {}", url))?;

        resp.text()
            .await
            .with_context(|| format!("Failed to read response body from {}", url))
    }
}

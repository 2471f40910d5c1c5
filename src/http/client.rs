use crate::config::ScraperSettings;
use crate::errors::fetch_context;
use crate::rate_limiter::RateLimiter;
use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use std::time::Duration;

/// HTTP client with built-in rate limiting
pub struct RateLimitedClient {
    client: Client,
    rate_limiter: RateLimiter,
}

impl RateLimitedClient {
    pub fn new(user_agent: &str, timeout_secs: u64, rate_limit_ms: u64) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;
        let rate_limiter = RateLimiter::new(rate_limit_ms);

        Ok(Self {
            client,
            rate_limiter,
        })
    }

    pub fn from_settings(settings: &ScraperSettings) -> Result<Self> {
        Self::new(
            settings.user_agent,
            settings.timeout_secs,
            settings.rate_limit_ms,
        )
    }

    /// GET a page and return its body; non-2xx statuses are errors
    pub async fn get_text(&mut self, url: &str) -> Result<String> {
        self.rate_limiter.wait().await;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| fetch_context(url))?;

        if !response.status().is_success() {
            anyhow::bail!("HTTP error {} for {}", response.status(), url);
        }

        response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {}", url))
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }
}

use crate::config::settings::ClientSettings;
use crate::errors;
use crate::http::Transport;
use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// reqwest-backed transport
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(user_agent: &str, timeout_secs: u64) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;
        Ok(Self { client })
    }

    pub fn from_settings(settings: &ClientSettings) -> Result<Self> {
        Self::new(&settings.user_agent, settings.timeout_secs)
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    async fn send_get_request(&self, url: &str) -> Result<reqwest::Response> {
        self.client
            .get(url)
            .send()
            .await
            .with_context(|| errors::fetch_context(url))
    }
}

impl Transport for HttpTransport {
    async fn get<R>(&self, url: &str) -> Result<R>
    where
        R: DeserializeOwned + Send,
    {
        debug!("GET {}", url);

        let response = self
            .send_get_request(url)
            .await?
            .error_for_status()
            .with_context(|| errors::status_context(url))?;

        response
            .json::<R>()
            .await
            .with_context(|| errors::parse_context(url))
    }
}

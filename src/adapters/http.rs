use crate::domain::ports::{CatalogTransport, ConfigProvider, TransportResponse};
use crate::utils::error::Result;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// `CatalogTransport` over a shared reqwest client. Paths are joined onto the
/// base URL, which always ends in `/` so relative paths nest below it.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: Url,
}

impl ReqwestTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client, base_url })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::new(
            config.base_url(),
            Duration::from_secs(config.timeout_seconds()),
        )
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl CatalogTransport for ReqwestTransport {
    async fn get(&self, path_and_query: &str) -> Result<TransportResponse> {
        let url = self.base_url.join(path_and_query)?;

        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status().as_u16();
        tracing::debug!("API response status: {}", status);

        let body = response.text().await?;
        Ok(TransportResponse { status, body })
    }
}

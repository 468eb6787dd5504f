use std::fmt::Debug;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::error::TransportError;

/// Minimal HTTP seam used by [`WeatherClient`](crate::client::WeatherClient).
///
/// Implementations return the body of whatever response arrived, whatever
/// its status; only a failed exchange is an error.
#[async_trait]
pub trait HttpTransport: Send + Sync + Debug {
    async fn get(&self, url: &Url) -> Result<Vec<u8>, TransportError>;
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }

    /// Use a preconfigured client (proxies, user agent, timeouts).
    pub fn from_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<Vec<u8>, TransportError> {
        let res = self.http.get(url.clone()).send().await?;

        let status = res.status();
        let body = res.bytes().await?;
        debug!(%status, bytes = body.len(), "received WeatherAPI response");

        Ok(body.to_vec())
    }
}

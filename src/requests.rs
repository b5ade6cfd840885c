use std::{future::Future, time::Duration};

use log::debug;
use reqwest::{Client, ClientBuilder};

use crate::errors::FetchError;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Fetches the raw html of a page.
pub trait Fetch {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

pub struct RequestClient {
    client: Client,
}

impl RequestClient {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = ClientBuilder::new()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for RequestClient {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }
        let body = response.text().await?;
        debug!("fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

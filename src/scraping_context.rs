use crate::{config::ScrapingConfig, dispatcher::Dispatcher, requests::RequestClient};

pub struct ScrapingContext {
    pub scraping_config: ScrapingConfig,
    pub dispatcher: Dispatcher<RequestClient>,
}

impl ScrapingContext {
    pub fn new() -> anyhow::Result<Self> {
        let scraping_config = ScrapingConfig::new()?;
        Self::with_config(scraping_config)
    }

    pub fn with_config(scraping_config: ScrapingConfig) -> anyhow::Result<Self> {
        let request_client = RequestClient::new(scraping_config.request_timeout)?;
        let dispatcher = Dispatcher::new(&scraping_config.base_url, request_client);
        Ok(ScrapingContext {
            scraping_config,
            dispatcher,
        })
    }
}

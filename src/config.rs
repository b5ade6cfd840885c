use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, de::DeserializeOwned};

pub const DEFAULT_BASE_URL: &str = "https://quinieleando.com.ar";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// The env vars read at startup. Both are optional.
#[derive(Debug, Deserialize)]
pub struct ScrapingEnv {
    #[serde(default = "default_base_url")]
    lottery_base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    request_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

#[derive(Debug, Clone)]
pub struct ScrapingConfig {
    pub base_url: String,
    pub request_timeout: Duration,
}

impl ScrapingConfig {
    pub fn new() -> anyhow::Result<Self> {
        let scraping_env = ScrapingEnv::load_from_env()?;
        Ok(Self::from(scraping_env))
    }
}

impl From<ScrapingEnv> for ScrapingConfig {
    fn from(env: ScrapingEnv) -> Self {
        Self {
            base_url: env.lottery_base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(env.request_timeout_secs),
        }
    }
}

impl Default for ScrapingConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

// Extension trait.
pub trait LoadFromEnv: DeserializeOwned {
    fn load_from_env() -> anyhow::Result<Self> {
        // Don't throw an error if .env file doesn't exist.
        let _ = dotenv::dotenv();
        let config =
            envy::from_env::<Self>().context("failed to load env variables into config struct")?;
        Ok(config)
    }
}

impl<T: DeserializeOwned> LoadFromEnv for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_vars_fall_back_to_defaults() {
        let env: ScrapingEnv = envy::from_iter(Vec::<(String, String)>::new()).unwrap();
        let config = ScrapingConfig::from(env);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn reads_overrides_and_trims_trailing_slash() {
        let vars = vec![
            ("LOTTERY_BASE_URL".to_string(), "http://localhost:8080/".to_string()),
            ("REQUEST_TIMEOUT_SECS".to_string(), "5".to_string()),
        ];
        let config = ScrapingConfig::from(envy::from_iter::<_, ScrapingEnv>(vars).unwrap());
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn rejects_non_numeric_timeout() {
        let vars = vec![("REQUEST_TIMEOUT_SECS".to_string(), "soon".to_string())];
        assert!(envy::from_iter::<_, ScrapingEnv>(vars).is_err());
    }
}

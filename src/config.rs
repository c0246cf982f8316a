use anyhow::Context;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_STORE_PATH: &str = "rental_store.json";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    /// JSON file standing in for browser local storage
    pub store_path: PathBuf,
    pub listings_file: Option<PathBuf>,
    pub listings_url: Option<String>,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let http_timeout_secs = match env::var("RENTAL_HTTP_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("RENTAL_HTTP_TIMEOUT_SECS must be a whole number of seconds")?,
            Err(_) => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        Ok(Self {
            store_path: env::var("RENTAL_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORE_PATH)),
            listings_file: non_empty_var("RENTAL_LISTINGS_FILE").map(PathBuf::from),
            listings_url: non_empty_var("RENTAL_LISTINGS_URL"),
            http_timeout: Duration::from_secs(http_timeout_secs),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            listings_file: None,
            listings_url: None,
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

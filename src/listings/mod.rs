pub mod file;
pub mod http;
pub mod mock;
pub mod traits;

pub use file::JsonFileListings;
pub use http::HttpListings;
pub use mock::{mock_listings, MockListings};
pub use traits::ListingSource;

use crate::config::Config;
use crate::models::Property;
use anyhow::Result;
use tracing::{info, warn};

/// Pick the configured source: API first, then file, then built-in data
pub fn source_for(config: &Config) -> Result<Box<dyn ListingSource>> {
    if let Some(url) = &config.listings_url {
        return Ok(Box::new(HttpListings::new(url.clone(), config.http_timeout)?));
    }
    if let Some(path) = &config.listings_file {
        return Ok(Box::new(JsonFileListings::new(path.clone())));
    }
    Ok(Box::new(MockListings))
}

/// Load the listing catalog once for this run.
///
/// A failing source falls back to the mock listings so search stays usable.
pub async fn load_catalog(config: &Config) -> Result<Vec<Property>> {
    let source = source_for(config)?;
    info!("Loading listings from {} source", source.source_name());

    match source.load().await {
        Ok(properties) => Ok(properties),
        Err(e) => {
            warn!("Listing source '{}' failed: {:#}", source.source_name(), e);
            info!("Using mock data instead...");
            MockListings.load().await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_mock_source() {
        let source = source_for(&Config::default()).unwrap();
        assert_eq!(source.source_name(), "mock");
    }

    #[test]
    fn url_takes_precedence_over_file() {
        let config = Config {
            listings_url: Some("http://localhost:8000/api/properties/".to_string()),
            listings_file: Some("listings.json".into()),
            ..Config::default()
        };
        assert_eq!(source_for(&config).unwrap().source_name(), "api");
    }

    #[tokio::test]
    async fn broken_file_falls_back_to_mock() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listings.json");
        std::fs::write(&path, "not json").unwrap();

        let config = Config {
            listings_file: Some(path),
            ..Config::default()
        };
        let catalog = load_catalog(&config).await.unwrap();
        assert_eq!(catalog, mock_listings());
    }
}

use crate::listings::traits::ListingSource;
use crate::models::Property;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, info};

/// Listings read from a JSON array on disk
pub struct JsonFileListings {
    path: PathBuf,
}

impl JsonFileListings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ListingSource for JsonFileListings {
    async fn load(&self) -> Result<Vec<Property>> {
        debug!("Reading listings from {}", self.path.display());

        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read listings file {}", self.path.display()))?;

        let properties: Vec<Property> = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid listings JSON in {}", self.path.display()))?;

        info!(count = properties.len(), "Loaded listings from file");
        Ok(properties)
    }

    fn source_name(&self) -> &'static str {
        "file"
    }
}

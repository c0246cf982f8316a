use crate::models::Property;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for every place listings can be loaded from
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Load the full listing set
    async fn load(&self) -> Result<Vec<Property>>;

    /// Get the name of the source
    fn source_name(&self) -> &'static str;
}

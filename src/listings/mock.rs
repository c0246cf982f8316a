use crate::listings::traits::ListingSource;
use crate::models::{Property, PropertyType};
use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

/// Built-in marketplace listings, used when nothing else is configured
#[derive(Debug, Default)]
pub struct MockListings;

#[async_trait]
impl ListingSource for MockListings {
    async fn load(&self) -> Result<Vec<Property>> {
        info!("📋 Using built-in mock listings");
        Ok(mock_listings())
    }

    fn source_name(&self) -> &'static str {
        "mock"
    }
}

fn amenities(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|t| t.to_string()).collect()
}

/// The three sample listings shown on the home page
pub fn mock_listings() -> Vec<Property> {
    vec![
        Property {
            id: 1,
            title: "Modern 3-Bedroom Apartment".to_string(),
            location: "Lekki Phase 1, Lagos".to_string(),
            price: 1_800_000,
            bedrooms: 3,
            bathrooms: 2,
            property_type: PropertyType::Apartment,
            amenities: amenities(&["wifi", "parking", "security", "generator"]),
            verified: true,
            area: 120,
            available: true,
            description: Some(
                "Spacious apartment in a gated estate with constant power and 24/7 security."
                    .to_string(),
            ),
            image: Some("https://images.unsplash.com/photo-1560448204-e02f11c3d0e2".to_string()),
        },
        Property {
            id: 2,
            title: "Cozy 2-Bedroom Flat".to_string(),
            location: "GRA, Ibadan".to_string(),
            price: 850_000,
            bedrooms: 2,
            bathrooms: 1,
            property_type: PropertyType::Apartment,
            amenities: amenities(&["wifi", "parking"]),
            verified: false,
            area: 80,
            available: true,
            description: Some("Quiet flat close to the GRA shopping district.".to_string()),
            image: Some("https://images.unsplash.com/photo-1574362848149-11496d93a7c7".to_string()),
        },
        Property {
            id: 3,
            title: "Luxury 4-Bedroom Duplex".to_string(),
            location: "Victoria Island, Lagos".to_string(),
            price: 3_500_000,
            bedrooms: 4,
            bathrooms: 3,
            property_type: PropertyType::Duplex,
            amenities: amenities(&["wifi", "parking", "security", "generator", "ac", "pool"]),
            verified: true,
            area: 250,
            available: false,
            description: Some("Fully serviced duplex with pool and private parking.".to_string()),
            image: Some("https://images.unsplash.com/photo-1613977257363-707ba9348227".to_string()),
        },
    ]
}

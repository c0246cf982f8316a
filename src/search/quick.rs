use crate::models::Property;
use crate::search::filter::contains_ignore_case;

/// Free-text match over title, location and property type.
///
/// An empty query matches every listing.
pub fn quick_search(properties: &[Property], query: &str) -> Vec<Property> {
    if query.is_empty() {
        return properties.to_vec();
    }

    properties
        .iter()
        .filter(|p| {
            contains_ignore_case(&p.title, query)
                || contains_ignore_case(&p.location, query)
                || contains_ignore_case(p.property_type.as_str(), query)
        })
        .cloned()
        .collect()
}

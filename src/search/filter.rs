use crate::models::Property;
use crate::search::types::SearchCriteria;

/// Check a single listing against every criterion that is set
pub fn matches(property: &Property, criteria: &SearchCriteria) -> bool {
    if let Some(location) = &criteria.location {
        if !contains_ignore_case(&property.location, location) {
            return false;
        }
    }

    if criteria.min_price.is_some_and(|min| property.price < min) {
        return false;
    }
    if criteria.max_price.is_some_and(|max| property.price > max) {
        return false;
    }

    if let Some(type_filter) = &criteria.property_type {
        if !type_filter.matches(property) {
            return false;
        }
    }

    if criteria.min_bedrooms.is_some_and(|n| property.bedrooms < n) {
        return false;
    }
    if criteria.min_bathrooms.is_some_and(|n| property.bathrooms < n) {
        return false;
    }

    if criteria.min_area.is_some_and(|min| property.area < min) {
        return false;
    }
    if criteria.max_area.is_some_and(|max| property.area > max) {
        return false;
    }

    if !criteria.amenities.iter().all(|a| property.has_amenity(a)) {
        return false;
    }

    if criteria.verified_only && !property.verified {
        return false;
    }
    if criteria.available_only && !property.available {
        return false;
    }

    true
}

/// Return the listings satisfying all criteria, in their original order
pub fn apply(properties: &[Property], criteria: &SearchCriteria) -> Vec<Property> {
    properties
        .iter()
        .filter(|p| matches(p, criteria))
        .cloned()
        .collect()
}

pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::mock_listings;
    use crate::models::PropertyType;

    fn ids(properties: &[Property]) -> Vec<u32> {
        properties.iter().map(|p| p.id).collect()
    }

    #[test]
    fn no_criteria_returns_everything() {
        let all = mock_listings();
        assert_eq!(apply(&all, &SearchCriteria::default()), all);
    }

    #[test]
    fn price_range_is_inclusive() {
        let all = mock_listings();
        let criteria = SearchCriteria {
            min_price: Some(850_000),
            max_price: Some(1_800_000),
            ..Default::default()
        };

        let results = apply(&all, &criteria);
        assert_eq!(ids(&results), vec![1, 2]);
        assert!(results
            .iter()
            .all(|p| p.price >= 850_000 && p.price <= 1_800_000));
    }

    #[test]
    fn amenities_must_all_be_present() {
        let all = mock_listings();
        let criteria = SearchCriteria {
            amenities: vec!["security".into(), "generator".into()],
            ..Default::default()
        };
        assert_eq!(ids(&apply(&all, &criteria)), vec![1, 3]);

        let criteria = SearchCriteria {
            amenities: vec!["pool".into(), "wifi".into()],
            ..Default::default()
        };
        assert_eq!(ids(&apply(&all, &criteria)), vec![3]);
    }

    #[test]
    fn location_is_case_insensitive_substring() {
        let all = mock_listings();
        let criteria = SearchCriteria {
            location: Some("LAGOS".into()),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&all, &criteria)), vec![1, 3]);
    }

    #[test]
    fn criteria_combine_with_and() {
        let all = mock_listings();
        let criteria = SearchCriteria {
            location: Some("lagos".into()),
            property_type: Some(PropertyType::Apartment.into()),
            min_bedrooms: Some(3),
            available_only: true,
            verified_only: true,
            ..Default::default()
        };
        assert_eq!(ids(&apply(&all, &criteria)), vec![1]);

        let criteria = SearchCriteria {
            available_only: true,
            min_bathrooms: Some(3),
            ..Default::default()
        };
        assert!(apply(&all, &criteria).is_empty());
    }

    #[test]
    fn area_bounds_are_inclusive() {
        let all = mock_listings();
        let criteria = SearchCriteria {
            min_area: Some(80),
            max_area: Some(120),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&all, &criteria)), vec![1, 2]);
    }
}

use crate::models::{Property, PropertyType};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Property type constraint taken from a search form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum TypeFilter {
    Is(PropertyType),
    /// A tag no listing can carry; matches nothing
    Unknown(String),
}

impl TypeFilter {
    pub fn matches(&self, property: &Property) -> bool {
        match self {
            TypeFilter::Is(t) => property.property_type == *t,
            TypeFilter::Unknown(_) => false,
        }
    }
}

impl From<PropertyType> for TypeFilter {
    fn from(t: PropertyType) -> Self {
        TypeFilter::Is(t)
    }
}

/// Search parameters for filtering listings.
///
/// Every `None`/empty/`false` field is a no-op; set fields are combined with AND.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchCriteria {
    /// Case-insensitive substring of the listing location
    pub location: Option<String>,
    /// Minimum price (NGN, inclusive)
    pub min_price: Option<u64>,
    /// Maximum price (NGN, inclusive)
    pub max_price: Option<u64>,
    pub property_type: Option<TypeFilter>,
    /// Minimum number of bedrooms
    pub min_bedrooms: Option<u32>,
    /// Minimum number of bathrooms
    pub min_bathrooms: Option<u32>,
    /// Minimum area in square meters
    pub min_area: Option<u32>,
    /// Maximum area in square meters
    pub max_area: Option<u32>,
    /// Tags every result must carry
    pub amenities: Vec<String>,
    pub verified_only: bool,
    pub available_only: bool,
}

impl SearchCriteria {
    /// True when no filter would remove anything
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Criteria exactly as typed into the advanced search form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriteriaForm {
    pub location: String,
    pub min_price: String,
    pub max_price: String,
    pub property_type: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub min_area: String,
    pub max_area: String,
    pub amenities: Vec<String>,
    pub verified_only: bool,
    pub available_now: bool,
}

impl CriteriaForm {
    /// Convert raw form input, coercing numbers leniently
    pub fn into_criteria(self) -> SearchCriteria {
        let property_type = match self.property_type.trim() {
            "" => None,
            tag => match tag.parse::<PropertyType>() {
                Ok(t) => Some(TypeFilter::Is(t)),
                Err(e) => {
                    warn!("{}, no listing will match", e);
                    Some(TypeFilter::Unknown(tag.to_string()))
                }
            },
        };

        SearchCriteria {
            location: non_empty(self.location),
            min_price: parse_lenient(&self.min_price),
            max_price: parse_lenient(&self.max_price),
            property_type,
            min_bedrooms: parse_lenient(&self.bedrooms),
            min_bathrooms: parse_lenient(&self.bathrooms),
            min_area: parse_lenient(&self.min_area),
            max_area: parse_lenient(&self.max_area),
            amenities: self.amenities.into_iter().filter(|a| !a.is_empty()).collect(),
            verified_only: self.verified_only,
            available_only: self.available_now,
        }
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Parse the leading integer of a form value.
///
/// Leading whitespace and a sign are accepted and trailing junk is ignored
/// (`"12abc"` is 12). No leading digits means the field is unspecified.
/// Negative numbers clamp to zero.
pub fn parse_lenient<T>(input: &str) -> Option<T>
where
    T: TryFrom<u64> + Bounded,
{
    let s = input.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 {
        return None;
    }
    if negative {
        return T::try_from(0u64).ok();
    }

    // Overlong input saturates rather than being dropped
    let value = rest[..digits_len]
        .bytes()
        .fold(0u64, |acc, b| acc.saturating_mul(10).saturating_add(u64::from(b - b'0')));

    Some(T::try_from(value).unwrap_or_else(|_| T::saturated()))
}

/// Numeric types a form field may be coerced into
pub trait Bounded {
    fn saturated() -> Self;
}

impl Bounded for u32 {
    fn saturated() -> Self {
        u32::MAX
    }
}

impl Bounded for u64 {
    fn saturated() -> Self {
        u64::MAX
    }
}

use crate::models::Property;
use crate::search::types::SearchCriteria;
use crate::search::{filter, quick};
use std::cmp::Reverse;
use std::str::FromStr;
use tracing::debug;

/// Result ordering offered next to the result count
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Newest,
    PriceLowToHigh,
    PriceHighToLow,
    VerifiedFirst,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortOrder::Newest),
            "price-low" => Ok(SortOrder::PriceLowToHigh),
            "price-high" => Ok(SortOrder::PriceHighToLow),
            "verified" => Ok(SortOrder::VerifiedFirst),
            other => Err(format!(
                "unknown sort order '{}' (expected newest, price-low, price-high or verified)",
                other
            )),
        }
    }
}

/// Search state for one page view: the full catalog plus what is shown.
///
/// Filter search and quick search both start from the full catalog, so
/// running one discards whatever the other did.
#[derive(Debug, Clone)]
pub struct SearchSession {
    all: Vec<Property>,
    shown: Vec<Property>,
    query: String,
}

impl SearchSession {
    pub fn new(all: Vec<Property>) -> Self {
        let shown = all.clone();
        Self {
            all,
            shown,
            query: String::new(),
        }
    }

    pub fn search(&mut self, criteria: &SearchCriteria) -> &[Property] {
        self.shown = filter::apply(&self.all, criteria);
        debug!(shown = self.shown.len(), total = self.all.len(), "Applied search filters");
        &self.shown
    }

    pub fn quick_search(&mut self, query: &str) -> &[Property] {
        self.query = query.to_lowercase();
        self.shown = quick::quick_search(&self.all, &self.query);
        debug!(query = %self.query, shown = self.shown.len(), "Applied quick search");
        &self.shown
    }

    pub fn reset(&mut self) -> &[Property] {
        self.query.clear();
        self.shown = self.all.clone();
        &self.shown
    }

    /// Reorder the shown listings; ties keep their current order
    pub fn sort(&mut self, order: SortOrder) -> &[Property] {
        match order {
            SortOrder::Newest => self.shown.sort_by_key(|p| Reverse(p.id)),
            SortOrder::PriceLowToHigh => self.shown.sort_by_key(|p| p.price),
            SortOrder::PriceHighToLow => self.shown.sort_by_key(|p| Reverse(p.price)),
            SortOrder::VerifiedFirst => self.shown.sort_by_key(|p| !p.verified),
        }
        &self.shown
    }

    pub fn shown(&self) -> &[Property] {
        &self.shown
    }

    pub fn total(&self) -> usize {
        self.all.len()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn summary(&self) -> String {
        format!(
            "Showing {} of {} properties",
            self.shown.len(),
            self.total()
        )
    }
}

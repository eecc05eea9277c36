// src/domain/filter.rs
use serde::{Deserialize, Serialize};

use crate::domain::offer::{Offer, OfferField};

/// Exact-match dropdown filters. An empty value means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StructuredFilters {
    pub location: String,
    pub category: String,
    pub contract_until: String,
}

impl StructuredFilters {
    fn accepts(&self, offer: &Offer) -> bool {
        let exact = |wanted: &str, actual: &str| wanted.is_empty() || wanted == actual;

        exact(&self.location, &offer.location)
            && exact(&self.category, &offer.category)
            && exact(&self.contract_until, &offer.contract_until)
    }
}

/// Case-insensitive substring match against every stored field, id and
/// creator included.
pub fn matches_search(offer: &Offer, search: &str) -> bool {
    let needle = search.to_lowercase();
    if needle.is_empty() {
        return true;
    }

    OfferField::ALL
        .iter()
        .any(|f| offer.get(*f).to_lowercase().contains(&needle))
}

/// Offers passing both the free-text search and the dropdown filters,
/// keeping input order.
pub fn filter_offers<'a>(
    offers: &'a [Offer],
    search: &str,
    filters: &StructuredFilters,
) -> Vec<&'a Offer> {
    offers
        .iter()
        .filter(|o| matches_search(o, search) && filters.accepts(o))
        .collect()
}

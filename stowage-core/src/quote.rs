//! Search output: one quote per location, plus run diagnostics.

use std::time::Duration;

use crate::{ListingId, LocationId};

/// The cheapest set of listings found at one location.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationQuote {
    /// Location the listings belong to.
    pub location_id: LocationId,
    /// Listings to rent, in catalog order.
    pub listing_ids: Vec<ListingId>,
    /// Sum of the listing prices in minor currency units.
    pub total_price_in_cents: u64,
}

/// Counters describing how much work a search performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchDiagnostics {
    /// Wall-clock time spent searching.
    pub search_time: Duration,
    /// Locations with at least one listing passing the dimension filter.
    pub locations_considered: u64,
    /// Combinations produced by the enumerator.
    pub combinations_enumerated: u64,
    /// Combinations that reached the feasibility check.
    pub feasibility_checks: u64,
}

impl SearchDiagnostics {
    /// Add another location's counters into this one.
    pub fn absorb(&mut self, other: &Self) {
        self.locations_considered += other.locations_considered;
        self.combinations_enumerated += other.combinations_enumerated;
        self.feasibility_checks += other.feasibility_checks;
    }
}

/// Response from a successful search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResponse {
    /// Quotes sorted by ascending total price.
    pub quotes: Vec<LocationQuote>,
    /// Work counters for the run.
    pub diagnostics: SearchDiagnostics,
}

impl SearchResponse {
    /// Whether no location could hold the requested vehicles.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

//! Test-only, in-memory `ListingCatalog` implementation and builders used by
//! unit and behaviour tests.

use crate::{Listing, ListingCatalog, SearchRequest, VehicleDemand};

/// In-memory `ListingCatalog` implementation used in tests.
#[derive(Default, Debug, Clone)]
pub struct MemoryCatalog {
    listings: Vec<Listing>,
}

impl MemoryCatalog {
    /// Create a catalog containing a single listing.
    #[must_use]
    pub fn with_listing(listing: Listing) -> Self {
        Self::with_listings(std::iter::once(listing))
    }

    /// Create a catalog from a collection of listings.
    pub fn with_listings<I>(listings: I) -> Self
    where
        I: IntoIterator<Item = Listing>,
    {
        Self {
            listings: listings.into_iter().collect(),
        }
    }
}

impl ListingCatalog for MemoryCatalog {
    fn listings(&self) -> Box<dyn Iterator<Item = Listing> + Send + '_> {
        Box::new(self.listings.iter().cloned())
    }
}

/// Construct a listing from bare numbers; ids render as decimal strings.
#[must_use]
pub fn listing(id: u64, location_id: u64, length: u32, width: u32, price_in_cents: u64) -> Listing {
    Listing::new(id, location_id, length, width, price_in_cents)
}

/// Construct a demand without validating it.
#[must_use]
pub const fn vehicle(length: u32, quantity: u32, width: u32) -> VehicleDemand {
    VehicleDemand {
        length,
        quantity,
        width,
    }
}

/// Construct a request from `(length, quantity)` pairs of lane-wide vehicles.
#[must_use]
pub fn request(vehicles: &[(u32, u32)]) -> SearchRequest {
    SearchRequest::new(
        vehicles
            .iter()
            .map(|&(length, quantity)| vehicle(length, quantity, crate::LANE_WIDTH))
            .collect(),
    )
}

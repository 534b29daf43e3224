//! Read access to the listing catalog.
//!
//! The `ListingCatalog` trait is the repository seam between the search
//! engine and wherever listings live. Searches never fetch or cache listings
//! themselves: they take a [`CatalogSnapshot`] at the start of each call.

use std::collections::HashSet;

use thiserror::Error;

use crate::{Listing, ListingId, LocationId};

#[cfg(feature = "store-json")]
mod json;
mod snapshot;

#[cfg(feature = "store-json")]
pub use json::{JsonCatalogError, JsonListingCatalog};
pub use snapshot::CatalogSnapshot;

/// Read-only access to rentable listings.
///
/// # Examples
///
/// ```rust
/// use stowage_core::{Listing, ListingCatalog};
///
/// struct FixedCatalog(Vec<Listing>);
///
/// impl ListingCatalog for FixedCatalog {
///     fn listings(&self) -> Box<dyn Iterator<Item = Listing> + Send + '_> {
///         Box::new(self.0.iter().cloned())
///     }
/// }
///
/// let catalog = FixedCatalog(vec![Listing::new("a", "loc-1", 20, 10, 500)]);
/// let snapshot = catalog.snapshot();
/// assert_eq!(snapshot.len(), 1);
/// ```
pub trait ListingCatalog {
    /// Return every listing, in catalog order.
    fn listings(&self) -> Box<dyn Iterator<Item = Listing> + Send + '_>;

    /// Capture the current listings as an immutable snapshot.
    fn snapshot(&self) -> CatalogSnapshot {
        self.listings().collect()
    }
}

impl<C> ListingCatalog for &C
where
    C: ListingCatalog + ?Sized,
{
    fn listings(&self) -> Box<dyn Iterator<Item = Listing> + Send + '_> {
        (**self).listings()
    }

    fn snapshot(&self) -> CatalogSnapshot {
        (**self).snapshot()
    }
}

/// Catalog contents that would make a search result untrustworthy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogIntegrityError {
    /// A listing reported a zero length or width.
    #[error("listing {id} has a zero {field}")]
    ZeroDimension {
        /// Offending listing.
        id: ListingId,
        /// Name of the zero field.
        field: &'static str,
    },
    /// The same listing id appeared more than once.
    #[error("listing {id} appears more than once in the catalog")]
    DuplicateListing {
        /// Repeated identifier.
        id: ListingId,
    },
    /// Summing listing prices at a location overflowed.
    #[error("total price of listings at location {location_id} overflows")]
    PriceOverflow {
        /// Location whose prices overflowed.
        location_id: LocationId,
    },
}

/// Check the invariants every search relies on.
///
/// Fails on the first listing with a zero dimension or a repeated id, in
/// catalog order.
pub fn check_integrity<'a, I>(listings: I) -> Result<(), CatalogIntegrityError>
where
    I: IntoIterator<Item = &'a Listing>,
{
    let mut seen = HashSet::new();
    for listing in listings {
        if listing.length == 0 {
            return Err(CatalogIntegrityError::ZeroDimension {
                id: listing.id.clone(),
                field: "length",
            });
        }
        if listing.width == 0 {
            return Err(CatalogIntegrityError::ZeroDimension {
                id: listing.id.clone(),
                field: "width",
            });
        }
        if !seen.insert(&listing.id) {
            return Err(CatalogIntegrityError::DuplicateListing {
                id: listing.id.clone(),
            });
        }
    }
    Ok(())
}

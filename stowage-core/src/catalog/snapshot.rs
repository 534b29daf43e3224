//! Owned point-in-time catalog snapshot.

use std::sync::Arc;

use crate::{Listing, ListingCatalog};

/// Immutable, cheaply cloneable view of a catalog at one point in time.
///
/// Searches take a snapshot once and share it across worker threads, so a
/// catalog that reloads in the background never changes underneath a search.
///
/// # Examples
/// ```
/// use stowage_core::{CatalogSnapshot, Listing, ListingCatalog};
///
/// let snapshot = CatalogSnapshot::new(vec![Listing::new("a", "1", 20, 10, 500)]);
/// let shared = snapshot.clone();
/// assert_eq!(shared.listings().count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSnapshot {
    listings: Arc<[Listing]>,
}

impl CatalogSnapshot {
    /// Take ownership of the given listings.
    #[must_use]
    pub fn new(listings: Vec<Listing>) -> Self {
        Self {
            listings: listings.into(),
        }
    }

    /// Borrow the listings in catalog order.
    #[must_use]
    pub fn as_slice(&self) -> &[Listing] {
        &self.listings
    }

    /// Iterate the listings in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Listing> {
        self.listings.iter()
    }

    /// Number of listings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Whether the snapshot holds no listings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

impl FromIterator<Listing> for CatalogSnapshot {
    fn from_iter<T: IntoIterator<Item = Listing>>(iter: T) -> Self {
        Self {
            listings: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CatalogSnapshot {
    type Item = &'a Listing;
    type IntoIter = std::slice::Iter<'a, Listing>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl ListingCatalog for CatalogSnapshot {
    fn listings(&self) -> Box<dyn Iterator<Item = Listing> + Send + '_> {
        Box::new(self.listings.iter().cloned())
    }

    fn snapshot(&self) -> CatalogSnapshot {
        self.clone()
    }
}

//! Rentable storage listings and their identifiers.

use std::fmt;

use crate::LANE_WIDTH;

/// Identifier of a single listing in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ListingId(String);

/// Identifier of the physical location that groups listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LocationId(String);

macro_rules! string_id {
    ($name:ident) => {
        impl $name {
            /// Wrap a raw identifier.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Borrow the raw identifier.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value.to_string())
            }
        }
    };
}

string_id!(ListingId);
string_id!(LocationId);

/// A rentable storage unit at a location.
///
/// Dimensions share the unit used by [`VehicleDemand`](crate::VehicleDemand);
/// prices are in minor currency units.
///
/// # Examples
/// ```
/// use stowage_core::Listing;
///
/// let listing = Listing::new("a", "loc-1", 30, 25, 1_200);
/// assert_eq!(listing.lane_count(), 2);
/// assert_eq!(listing.area(), 750);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Listing {
    /// Unique identifier.
    pub id: ListingId,
    /// Location the listing belongs to.
    pub location_id: LocationId,
    /// Usable length.
    pub length: u32,
    /// Usable width.
    pub width: u32,
    /// Rental price in minor currency units.
    pub price_in_cents: u64,
}

impl Listing {
    /// Construct a listing.
    #[must_use]
    pub fn new(
        id: impl Into<ListingId>,
        location_id: impl Into<LocationId>,
        length: u32,
        width: u32,
        price_in_cents: u64,
    ) -> Self {
        Self {
            id: id.into(),
            location_id: location_id.into(),
            length,
            width,
            price_in_cents,
        }
    }

    /// Floor area of the listing.
    #[must_use]
    pub fn area(&self) -> u128 {
        u128::from(self.length) * u128::from(self.width)
    }

    /// Number of single-vehicle lanes the listing's width provides.
    #[must_use]
    #[expect(
        clippy::integer_division,
        clippy::integer_division_remainder_used,
        reason = "partial lanes cannot hold a vehicle, so the quotient is floored"
    )]
    pub const fn lane_count(&self) -> u32 {
        self.width / LANE_WIDTH
    }
}

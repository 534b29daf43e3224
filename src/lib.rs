//! Facade crate for the Stowage vehicle storage matching engine.
//!
//! This crate re-exports the core domain types together with the exhaustive
//! matcher, and exposes the JSON catalog behind the `store-json` feature.
//!
//! # Examples
//! ```
//! use stowage_engine::{
//!     CatalogSnapshot, ExhaustiveMatcher, Listing, Matcher, SearchRequest, VehicleDemand,
//! };
//!
//! let catalog = CatalogSnapshot::new(vec![Listing::new("a", "1", 20, 20, 800)]);
//! let request = SearchRequest::new(vec![VehicleDemand::new(20, 2)?]);
//! let response = ExhaustiveMatcher::new(catalog).search(&request)?;
//! assert_eq!(response.quotes.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

pub use stowage_core::{
    CatalogIntegrityError, CatalogSnapshot, LANE_WIDTH, Listing, ListingCatalog, ListingId,
    LocationId, LocationQuote, Matcher, SearchDiagnostics, SearchError, SearchRequest,
    SearchRequestValidationError, SearchResponse, VehicleDemand, VehicleDemandError,
};

#[cfg(feature = "store-json")]
pub use stowage_core::{JsonCatalogError, JsonListingCatalog};

pub use stowage_solver::{ExhaustiveMatcher, SearchConfig};

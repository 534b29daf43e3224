//! Core domain types for the Stowage engine.
//!
//! Stowage matches requested vehicle storage against a catalog of rentable
//! listings grouped by location. This crate holds the vocabulary shared by
//! every other crate: demands and listings, the request and response types,
//! the [`ListingCatalog`] repository seam and the [`Matcher`] trait that
//! search engines implement.
//!
//! Constructors and `validate` methods return `Result` to surface invalid
//! input before it reaches a matcher.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
mod listing;
mod matcher;
mod quote;
mod request;
mod vehicle;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

#[cfg(feature = "store-json")]
pub use catalog::{JsonCatalogError, JsonListingCatalog};
pub use catalog::{CatalogIntegrityError, CatalogSnapshot, ListingCatalog, check_integrity};
pub use listing::{Listing, ListingId, LocationId};
pub use matcher::{Matcher, SearchError};
pub use quote::{LocationQuote, SearchDiagnostics, SearchResponse};
pub use request::{SearchRequest, SearchRequestValidationError};
pub use vehicle::{LANE_WIDTH, VehicleDemand, VehicleDemandError};

//! The `Matcher` trait and the errors a search can fail with.

use std::time::Duration;

use thiserror::Error;

use crate::{
    CatalogIntegrityError, LocationId, SearchRequest, SearchRequestValidationError, SearchResponse,
};

/// Errors returned by [`Matcher::search`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Request parameters were invalid, e.g. no vehicles.
    #[error("invalid request: {0}")]
    InvalidRequest(#[source] SearchRequestValidationError),
    /// The catalog contained data the search cannot trust.
    #[error("catalog data integrity violated: {0}")]
    DataIntegrity(#[from] CatalogIntegrityError),
    /// A location had more candidate listings than the configured limit.
    #[error(
        "location {location_id} has {listings} candidate listings; the limit is {limit}"
    )]
    LocationTooLarge {
        /// Offending location.
        location_id: LocationId,
        /// Listings left after the dimension filter.
        listings: usize,
        /// Configured maximum.
        limit: usize,
    },
    /// The search ran past its time limit.
    #[error("search exceeded its time limit of {limit:?}")]
    DeadlineExceeded {
        /// Configured limit.
        limit: Duration,
    },
}

impl From<SearchRequestValidationError> for SearchError {
    fn from(value: SearchRequestValidationError) -> Self {
        Self::InvalidRequest(value)
    }
}

/// Find, per location, the cheapest listings able to hold a request.
///
/// Implementations should return [`SearchError::InvalidRequest`] for invalid
/// parameters rather than panicking. An empty [`SearchResponse`] is a valid
/// outcome when no location fits.
/// Matchers must be `Send + Sync` to operate safely across threads.
pub trait Matcher: Send + Sync {
    /// Run a search, producing ranked quotes or an error.
    fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LocationQuote, VehicleDemand};
    use rstest::rstest;

    struct DummyMatcher;

    impl Matcher for DummyMatcher {
        fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
            request.validate()?;
            Ok(SearchResponse {
                quotes: vec![LocationQuote {
                    location_id: LocationId::new("1"),
                    listing_ids: Vec::new(),
                    total_price_in_cents: 0,
                }],
                ..SearchResponse::default()
            })
        }
    }

    #[rstest]
    fn returns_response_on_valid_request() {
        let request = SearchRequest::new(vec![VehicleDemand::new(20, 1).expect("valid")]);
        let response = DummyMatcher.search(&request).expect("valid request");
        assert_eq!(response.quotes.len(), 1);
    }

    #[rstest]
    fn returns_error_on_empty_request() {
        let err = DummyMatcher
            .search(&SearchRequest::default())
            .expect_err("empty request");
        assert!(matches!(err, SearchError::InvalidRequest(_)));
    }
}

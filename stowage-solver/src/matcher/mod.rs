//! `ExhaustiveMatcher` implementation over a listing catalog.

use std::time::{Duration, Instant};

use log::{info, warn};
use stowage_core::{
    ListingCatalog, Matcher, SearchDiagnostics, SearchError, SearchRequest,
    SearchRequestValidationError, SearchResponse, check_integrity,
};

use crate::feasibility::DemandProfile;
use crate::grouping::{LocationGroup, group_by_location};
use crate::optimizer::{Deadline, LocationOptimizer, LocationOutcome};
use crate::ranking::rank;

/// Configuration for [`ExhaustiveMatcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Largest candidate group a location may have before the search is
    /// refused. Enumeration is exponential in this number. `None` disables
    /// the guard.
    pub max_listings_per_location: Option<usize>,
    /// Wall-clock budget for a whole search. `None` means unbounded.
    pub time_limit: Option<Duration>,
    /// Optimise locations on the rayon pool. Ignored without the `parallel`
    /// feature.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_listings_per_location: Some(24),
            time_limit: None,
            parallel: true,
        }
    }
}

/// Matcher that enumerates every listing combination per location.
///
/// The matcher is generic over the catalog boundary. Each call to
/// [`Matcher::search`] takes a fresh snapshot, so it never observes a
/// catalog that changes mid-search.
///
/// # Examples
/// ```
/// use stowage_core::{CatalogSnapshot, Listing, Matcher, SearchRequest, VehicleDemand};
/// use stowage_solver::ExhaustiveMatcher;
///
/// let catalog = CatalogSnapshot::new(vec![
///     Listing::new("a", "1", 20, 10, 500),
///     Listing::new("b", "1", 20, 10, 300),
/// ]);
/// let matcher = ExhaustiveMatcher::new(catalog);
/// let request = SearchRequest::new(vec![VehicleDemand::new(20, 1)?]);
/// let response = matcher.search(&request)?;
/// assert_eq!(response.quotes.len(), 1);
/// assert_eq!(response.quotes[0].total_price_in_cents, 300);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct ExhaustiveMatcher<C>
where
    C: ListingCatalog,
{
    catalog: C,
    config: SearchConfig,
}

impl<C> ExhaustiveMatcher<C>
where
    C: ListingCatalog,
{
    /// Construct a matcher using default configuration.
    #[must_use]
    pub fn new(catalog: C) -> Self {
        Self::with_config(catalog, SearchConfig::default())
    }

    /// Construct a matcher with explicit configuration.
    #[must_use]
    pub const fn with_config(catalog: C, config: SearchConfig) -> Self {
        Self { catalog, config }
    }

    /// The configuration this matcher searches with.
    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn enforce_group_limit(&self, groups: &[LocationGroup<'_>]) -> Result<(), SearchError> {
        let Some(limit) = self.config.max_listings_per_location else {
            return Ok(());
        };
        match groups.iter().find(|group| group.listings.len() > limit) {
            Some(group) => {
                warn!(
                    "location {} has {} candidate listings, above the limit of {limit}",
                    group.location_id,
                    group.listings.len()
                );
                Err(SearchError::LocationTooLarge {
                    location_id: group.location_id.clone(),
                    listings: group.listings.len(),
                    limit,
                })
            }
            None => Ok(()),
        }
    }

    #[cfg(feature = "parallel")]
    fn optimise_groups(
        &self,
        optimizer: LocationOptimizer<'_>,
        groups: &[LocationGroup<'_>],
    ) -> Result<Vec<LocationOutcome>, SearchError> {
        use rayon::prelude::*;

        if self.config.parallel {
            groups
                .par_iter()
                .map(|group| optimizer.optimise(group))
                .collect()
        } else {
            optimise_sequentially(optimizer, groups)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn optimise_groups(
        &self,
        optimizer: LocationOptimizer<'_>,
        groups: &[LocationGroup<'_>],
    ) -> Result<Vec<LocationOutcome>, SearchError> {
        optimise_sequentially(optimizer, groups)
    }
}

fn optimise_sequentially(
    optimizer: LocationOptimizer<'_>,
    groups: &[LocationGroup<'_>],
) -> Result<Vec<LocationOutcome>, SearchError> {
    groups
        .iter()
        .map(|group| optimizer.optimise(group))
        .collect()
}

impl<C> Matcher for ExhaustiveMatcher<C>
where
    C: ListingCatalog + Send + Sync,
{
    fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        request.validate()?;
        let started_at = Instant::now();
        let deadline = self
            .config
            .time_limit
            .and_then(|limit| Deadline::starting_at(started_at, limit));

        let snapshot = self.catalog.snapshot();
        check_integrity(&snapshot)?;
        let profile = DemandProfile::from_request(request)
            .ok_or(SearchRequestValidationError::EmptyDemand)?;

        let groups = group_by_location(snapshot.as_slice(), profile.min_length());
        self.enforce_group_limit(&groups)?;

        let optimizer =
            LocationOptimizer::new(&profile, request.total_requested_area(), deadline);
        let outcomes = self.optimise_groups(optimizer, &groups)?;

        let mut diagnostics = SearchDiagnostics::default();
        let mut found = Vec::with_capacity(outcomes.len());
        for outcome in outcomes {
            diagnostics.absorb(&outcome.diagnostics);
            found.extend(outcome.quote);
        }
        let quotes = rank(found);
        diagnostics.search_time = started_at.elapsed();

        info!(
            "search over {} listings: {} of {} locations fit, {} combinations, {} checked, {:?}",
            snapshot.len(),
            quotes.len(),
            diagnostics.locations_considered,
            diagnostics.combinations_enumerated,
            diagnostics.feasibility_checks,
            diagnostics.search_time
        );
        Ok(SearchResponse {
            quotes,
            diagnostics,
        })
    }
}

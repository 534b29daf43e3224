//! Cheapest feasible combination per location.

use std::time::{Duration, Instant};

use log::debug;
use stowage_core::{
    CatalogIntegrityError, Listing, LocationQuote, SearchDiagnostics, SearchError,
};

use crate::combinations::CombinationEnumerator;
use crate::feasibility::{DemandProfile, FeasibilityChecker};
use crate::grouping::LocationGroup;

/// Combinations evaluated between two deadline checks.
const DEADLINE_CHECK_INTERVAL: u32 = 1024;

/// Point in time after which a search gives up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    at: Instant,
    limit: Duration,
}

impl Deadline {
    /// A deadline `limit` after `start`, or `None` if the instant overflows.
    #[must_use]
    pub fn starting_at(start: Instant, limit: Duration) -> Option<Self> {
        start.checked_add(limit).map(|at| Self { at, limit })
    }

    /// Fail with [`SearchError::DeadlineExceeded`] once the deadline is reached.
    pub fn check(&self) -> Result<(), SearchError> {
        if Instant::now() >= self.at {
            Err(SearchError::DeadlineExceeded { limit: self.limit })
        } else {
            Ok(())
        }
    }
}

/// What optimising a single location produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocationOutcome {
    /// The cheapest feasible combination, if any.
    pub quote: Option<LocationQuote>,
    /// Work counters for this location.
    pub diagnostics: SearchDiagnostics,
}

/// Searches one location's combinations for the cheapest feasible one.
///
/// The optimizer holds no per-location state, so one instance can serve
/// many locations concurrently.
#[derive(Debug, Clone, Copy)]
pub struct LocationOptimizer<'p> {
    profile: &'p DemandProfile,
    requested_area: u128,
    deadline: Option<Deadline>,
}

impl<'p> LocationOptimizer<'p> {
    /// Create an optimizer for one request.
    ///
    /// `requested_area` is the floor area of every requested vehicle
    /// together; combinations with less area are never checked.
    #[must_use]
    pub const fn new(
        profile: &'p DemandProfile,
        requested_area: u128,
        deadline: Option<Deadline>,
    ) -> Self {
        Self {
            profile,
            requested_area,
            deadline,
        }
    }

    /// Find the cheapest combination of `group` that holds the demand.
    ///
    /// Combinations are skipped without a feasibility check when their area
    /// falls short of the request or their price does not beat the best one
    /// found so far. Among equally cheap feasible combinations the first
    /// enumerated wins.
    ///
    /// The deadline is checked before the first combination and then once
    /// every 1024 combinations.
    pub fn optimise(&self, group: &LocationGroup<'_>) -> Result<LocationOutcome, SearchError> {
        self.check_deadline()?;
        let mut diagnostics = SearchDiagnostics {
            locations_considered: 1,
            ..SearchDiagnostics::default()
        };
        let mut enumerator = CombinationEnumerator::new(group.listings.len());
        let mut checker = FeasibilityChecker::new(self.profile);
        let mut best: Option<(u64, Vec<usize>)> = None;
        let mut until_deadline_check = DEADLINE_CHECK_INTERVAL;

        while let Some(combination) = enumerator.advance() {
            diagnostics.combinations_enumerated += 1;
            until_deadline_check -= 1;
            if until_deadline_check == 0 {
                until_deadline_check = DEADLINE_CHECK_INTERVAL;
                self.check_deadline()?;
            }

            let members = || {
                combination
                    .iter()
                    .filter_map(|&slot| group.listings.get(slot).copied())
            };
            let area: u128 = members().map(Listing::area).sum();
            if area < self.requested_area {
                continue;
            }
            let price = members()
                .try_fold(0_u64, |total, listing| total.checked_add(listing.price_in_cents))
                .ok_or_else(|| CatalogIntegrityError::PriceOverflow {
                    location_id: group.location_id.clone(),
                })?;
            if best.as_ref().is_some_and(|&(best_price, _)| price >= best_price) {
                continue;
            }
            diagnostics.feasibility_checks += 1;
            if checker.check(members()) {
                best = Some((price, combination.to_vec()));
            }
        }

        let quote = best.map(|(total_price_in_cents, slots)| LocationQuote {
            location_id: group.location_id.clone(),
            listing_ids: slots
                .iter()
                .filter_map(|&slot| group.listings.get(slot))
                .map(|listing| listing.id.clone())
                .collect(),
            total_price_in_cents,
        });
        debug!(
            "location {}: {} combinations, {} checked, best price {:?}",
            group.location_id,
            diagnostics.combinations_enumerated,
            diagnostics.feasibility_checks,
            quote.as_ref().map(|found| found.total_price_in_cents)
        );
        Ok(LocationOutcome { quote, diagnostics })
    }

    fn check_deadline(&self) -> Result<(), SearchError> {
        self.deadline.as_ref().map_or(Ok(()), Deadline::check)
    }
}

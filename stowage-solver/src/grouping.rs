//! Partition a catalog into per-location candidate groups.

use std::collections::HashMap;

use stowage_core::{LANE_WIDTH, Listing, LocationId};

/// Listings at one location that could hold at least one requested vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationGroup<'a> {
    /// Location shared by every listing in the group.
    pub location_id: &'a LocationId,
    /// Candidate listings in catalog order.
    pub listings: Vec<&'a Listing>,
}

/// Whether a listing can ever be part of a solution.
///
/// A listing narrower than one lane or shorter than the shortest requested
/// vehicle cannot hold anything.
#[must_use]
pub const fn is_candidate(listing: &Listing, min_vehicle_length: u32) -> bool {
    listing.length >= min_vehicle_length && listing.width >= LANE_WIDTH
}

/// Group candidate listings by location.
///
/// Groups appear in the order their location is first seen in `listings`,
/// which keeps ranking ties deterministic. Locations without a candidate
/// listing produce no group.
///
/// # Examples
/// ```
/// use stowage_core::Listing;
/// use stowage_solver::grouping::group_by_location;
///
/// let listings = vec![
///     Listing::new("a", "north", 20, 10, 500),
///     Listing::new("b", "south", 20, 5, 100),
///     Listing::new("c", "north", 30, 20, 900),
/// ];
/// let groups = group_by_location(&listings, 20);
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].listings.len(), 2);
/// ```
#[must_use]
pub fn group_by_location(listings: &[Listing], min_vehicle_length: u32) -> Vec<LocationGroup<'_>> {
    let mut positions: HashMap<&LocationId, usize> = HashMap::new();
    let mut groups: Vec<LocationGroup<'_>> = Vec::new();
    for listing in listings
        .iter()
        .filter(|listing| is_candidate(listing, min_vehicle_length))
    {
        let next = groups.len();
        let position = *positions.entry(&listing.location_id).or_insert(next);
        if let Some(group) = groups.get_mut(position) {
            group.listings.push(listing);
        } else {
            groups.push(LocationGroup {
                location_id: &listing.location_id,
                listings: vec![listing],
            });
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use stowage_core::test_support::listing;

    #[rstest]
    #[case(listing(1, 1, 20, 10, 0), true)]
    #[case(listing(1, 1, 19, 10, 0), false)]
    #[case(listing(1, 1, 20, 9, 0), false)]
    #[case(listing(1, 1, 50, 40, 0), true)]
    fn filters_on_minimum_dimensions(#[case] candidate: Listing, #[case] expected: bool) {
        assert_eq!(is_candidate(&candidate, 20), expected);
    }

    #[rstest]
    fn groups_keep_first_seen_location_order() {
        let listings = vec![
            listing(1, 7, 20, 10, 100),
            listing(2, 3, 20, 10, 100),
            listing(3, 7, 25, 10, 100),
            listing(4, 3, 25, 10, 100),
        ];
        let groups = group_by_location(&listings, 20);
        let summary: Vec<(&str, Vec<&str>)> = groups
            .iter()
            .map(|group| {
                (
                    group.location_id.as_str(),
                    group.listings.iter().map(|l| l.id.as_str()).collect(),
                )
            })
            .collect();
        assert_eq!(
            summary,
            vec![("7", vec!["1", "3"]), ("3", vec!["2", "4"])]
        );
    }

    #[rstest]
    fn location_without_candidates_is_dropped() {
        let listings = vec![listing(1, 1, 10, 10, 100), listing(2, 2, 30, 10, 100)];
        let groups = group_by_location(&listings, 20);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups.first().map(|g| g.location_id.as_str()), Some("2"));
    }

    #[rstest]
    fn empty_catalog_yields_no_groups() {
        assert!(group_by_location(&[], 10).is_empty());
    }
}

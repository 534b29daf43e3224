//! Greedy largest-first assignment of vehicles to lanes.
//!
//! Each lane is filled with as many of the longest outstanding vehicles as
//! fit, then with shorter ones in descending length order, before moving on
//! to the next lane. The check is a heuristic: a different assignment order
//! can occasionally fit demand that this one rejects, and that behaviour is
//! kept so results stay reproducible.

use std::collections::BTreeMap;

use stowage_core::{Listing, SearchRequest, VehicleDemand};

use crate::lanes::expand_lanes;

/// Requested vehicle counts keyed by length, longest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemandProfile {
    /// `(length, quantity)` pairs in descending length order.
    entries: Vec<(u32, u64)>,
    min_length: u32,
}

impl DemandProfile {
    /// Build a profile from demands, or `None` when there are none.
    ///
    /// When several demands share a length, the last one's quantity is used.
    /// Vehicle width plays no part: every vehicle takes exactly one lane.
    ///
    /// # Examples
    /// ```
    /// use stowage_core::VehicleDemand;
    /// use stowage_solver::feasibility::DemandProfile;
    ///
    /// let profile = DemandProfile::new(&[
    ///     VehicleDemand::new(15, 1)?,
    ///     VehicleDemand::new(20, 2)?,
    ///     VehicleDemand::new(15, 3)?,
    /// ])
    /// .expect("non-empty demand");
    /// assert_eq!(profile.entries(), [(20, 2), (15, 3)]);
    /// assert_eq!(profile.min_length(), 15);
    /// # Ok::<(), stowage_core::VehicleDemandError>(())
    /// ```
    #[must_use]
    pub fn new(vehicles: &[VehicleDemand]) -> Option<Self> {
        let mut by_length: BTreeMap<u32, u64> = BTreeMap::new();
        for vehicle in vehicles {
            by_length.insert(vehicle.length, u64::from(vehicle.quantity));
        }
        let min_length = *by_length.keys().next()?;
        Some(Self {
            entries: by_length.into_iter().rev().collect(),
            min_length,
        })
    }

    /// Build a profile from every vehicle in a request.
    #[must_use]
    pub fn from_request(request: &SearchRequest) -> Option<Self> {
        Self::new(&request.vehicles)
    }

    /// `(length, quantity)` pairs, longest first.
    #[must_use]
    pub fn entries(&self) -> &[(u32, u64)] {
        &self.entries
    }

    /// Shortest requested vehicle length.
    #[must_use]
    pub const fn min_length(&self) -> u32 {
        self.min_length
    }

    /// Whether the lanes hold every requested vehicle.
    ///
    /// `remaining` is scratch space for the outstanding counts; its previous
    /// contents are discarded.
    #[expect(
        clippy::integer_division,
        clippy::integer_division_remainder_used,
        reason = "only whole vehicles fit in a lane"
    )]
    pub fn fits(&self, lanes: &[u32], remaining: &mut Vec<u64>) -> bool {
        remaining.clear();
        remaining.extend(self.entries.iter().map(|&(_, quantity)| quantity));
        let mut outstanding: u64 = remaining.iter().sum();

        for &lane in lanes {
            if outstanding == 0 {
                break;
            }
            if lane < self.min_length {
                continue;
            }
            let mut available = u64::from(lane);
            for (&(vehicle_length, _), left) in self.entries.iter().zip(remaining.iter_mut()) {
                let length = u64::from(vehicle_length);
                if *left == 0 || available < length {
                    continue;
                }
                let used = (*left).min(available / length);
                *left -= used;
                outstanding -= used;
                available -= used * length;
            }
        }
        outstanding == 0
    }
}

/// Reusable feasibility check for one demand profile.
///
/// Holds the lane and counter buffers so that checking many combinations of
/// the same location allocates only once.
#[derive(Debug)]
pub struct FeasibilityChecker<'p> {
    profile: &'p DemandProfile,
    lanes: Vec<u32>,
    remaining: Vec<u64>,
}

impl<'p> FeasibilityChecker<'p> {
    /// Create a checker for the given demand.
    #[must_use]
    pub fn new(profile: &'p DemandProfile) -> Self {
        Self {
            profile,
            lanes: Vec::new(),
            remaining: Vec::with_capacity(profile.entries.len()),
        }
    }

    /// Whether the listings, taken together, hold every requested vehicle.
    ///
    /// # Examples
    /// ```
    /// use stowage_core::{Listing, VehicleDemand};
    /// use stowage_solver::feasibility::{DemandProfile, FeasibilityChecker};
    ///
    /// let profile = DemandProfile::new(&[VehicleDemand::new(20, 2)?]).expect("demand");
    /// let mut checker = FeasibilityChecker::new(&profile);
    /// assert!(checker.check(&[Listing::new("a", "1", 20, 20, 800)]));
    /// assert!(!checker.check(&[Listing::new("b", "1", 20, 10, 500)]));
    /// # Ok::<(), stowage_core::VehicleDemandError>(())
    /// ```
    pub fn check<'a, I>(&mut self, listings: I) -> bool
    where
        I: IntoIterator<Item = &'a Listing>,
    {
        expand_lanes(listings, &mut self.lanes);
        self.profile.fits(&self.lanes, &mut self.remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use stowage_core::test_support::vehicle;

    fn profile(vehicles: &[(u32, u32)]) -> DemandProfile {
        let demands: Vec<_> = vehicles
            .iter()
            .map(|&(length, quantity)| vehicle(length, quantity, 10))
            .collect();
        DemandProfile::new(&demands).expect("non-empty demand")
    }

    #[fixture]
    fn scratch() -> Vec<u64> {
        Vec::new()
    }

    #[rstest]
    fn empty_demand_has_no_profile() {
        assert!(DemandProfile::new(&[]).is_none());
    }

    #[rstest]
    #[case(&[(20, 1)], &[20], true)]
    #[case(&[(20, 2)], &[20, 20], true)]
    #[case(&[(20, 2)], &[40], true)]
    #[case(&[(30, 1)], &[20], false)]
    #[case(&[(20, 3)], &[20, 20], false)]
    #[case(&[(20, 1), (10, 2)], &[40], true)]
    #[case(&[(25, 1), (10, 1)], &[30, 10], true)]
    fn greedy_assignment(
        #[case] vehicles: &[(u32, u32)],
        #[case] lanes: &[u32],
        #[case] expected: bool,
        mut scratch: Vec<u64>,
    ) {
        assert_eq!(profile(vehicles).fits(lanes, &mut scratch), expected);
    }

    #[rstest]
    fn greedy_order_can_miss_a_packing(mut scratch: Vec<u64>) {
        // Seen first, the 40 lane takes the 30 vehicle and strands a 20.
        let demand = profile(&[(30, 1), (20, 2)]);
        assert!(demand.fits(&[30, 40], &mut scratch));
        assert!(!demand.fits(&[40, 30], &mut scratch));
    }

    #[rstest]
    fn repeated_length_keeps_the_last_quantity(mut scratch: Vec<u64>) {
        let demand = profile(&[(20, 1), (20, 2)]);
        assert_eq!(demand.entries(), [(20, 2)]);
        assert!(demand.fits(&[39, 39], &mut scratch));
    }

    #[rstest]
    fn short_lanes_are_skipped(mut scratch: Vec<u64>) {
        let demand = profile(&[(20, 1)]);
        assert!(!demand.fits(&[19, 19, 19], &mut scratch));
    }

    #[rstest]
    fn checker_expands_listing_width_into_lanes() {
        let demand = profile(&[(20, 2)]);
        let mut checker = FeasibilityChecker::new(&demand);
        let wide = Listing::new("a", "1", 20, 20, 800);
        let narrow = Listing::new("b", "1", 20, 10, 500);
        assert!(checker.check([&wide]));
        assert!(!checker.check([&narrow]));
        assert!(checker.check([&narrow, &narrow]));
    }
}

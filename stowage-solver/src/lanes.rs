//! Split listings into lane-wide storage slots.

use stowage_core::Listing;

/// Write the lanes of `listings` into `lanes`, replacing its contents.
///
/// Each listing contributes `width / 10` lanes carrying the listing's full
/// length, in listing order. Lanes of one listing are interchangeable.
///
/// # Examples
/// ```
/// use stowage_core::Listing;
/// use stowage_solver::lanes::expand_lanes;
///
/// let listings = [
///     Listing::new("a", "1", 30, 25, 0),
///     Listing::new("b", "1", 20, 10, 0),
/// ];
/// let mut lanes = Vec::new();
/// expand_lanes(&listings, &mut lanes);
/// assert_eq!(lanes, [30, 30, 20]);
/// ```
pub fn expand_lanes<'a, I>(listings: I, lanes: &mut Vec<u32>)
where
    I: IntoIterator<Item = &'a Listing>,
{
    lanes.clear();
    for listing in listings {
        lanes.extend((0..listing.lane_count()).map(|_| listing.length));
    }
}

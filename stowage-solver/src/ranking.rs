//! Order per-location quotes for presentation.

use stowage_core::LocationQuote;

/// Sort quotes by ascending total price.
///
/// The sort is stable: quotes with equal prices keep the order in which
/// their locations were first seen in the catalog.
///
/// # Examples
/// ```
/// use stowage_core::LocationQuote;
/// use stowage_solver::ranking::rank;
///
/// let quote = |location: &str, price| LocationQuote {
///     location_id: location.into(),
///     listing_ids: Vec::new(),
///     total_price_in_cents: price,
/// };
/// let ranked = rank([quote("a", 900), quote("b", 300), quote("c", 900)]);
/// let order: Vec<_> = ranked.iter().map(|q| q.location_id.as_str()).collect();
/// assert_eq!(order, ["b", "a", "c"]);
/// ```
#[must_use]
pub fn rank<I>(quotes: I) -> Vec<LocationQuote>
where
    I: IntoIterator<Item = LocationQuote>,
{
    let mut ranked: Vec<_> = quotes.into_iter().collect();
    ranked.sort_by_key(|quote| quote.total_price_in_cents);
    ranked
}

//! Exhaustive storage matcher for Stowage.
//!
//! This crate provides [`ExhaustiveMatcher`], the default implementation of
//! the [`Matcher`](stowage_core::Matcher) trait. For every location in a
//! [`ListingCatalog`](stowage_core::ListingCatalog) snapshot it enumerates
//! subsets of the location's listings by increasing size, prunes subsets that
//! lack the floor area or cannot beat the cheapest solution found so far, and
//! tests the survivors with a greedy lane-assignment check. The cheapest
//! feasible subset per location becomes a quote; quotes are ranked by price.
//!
//! The building blocks are public so callers can re-check a quote:
//!
//! - [`grouping`] partitions listings by location,
//! - [`combinations`] enumerates subsets of a group,
//! - [`lanes`] splits listings into lane-wide slots,
//! - [`feasibility`] runs the greedy largest-first assignment,
//! - [`optimizer`] selects the cheapest feasible subset per location,
//! - [`ranking`] orders the resulting quotes.
//!
//! The feasibility check is a heuristic: it can reject a subset that another
//! assignment order would fit. Results are reproducible, not globally optimal.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod combinations;
pub mod feasibility;
pub mod grouping;
pub mod lanes;
mod matcher;
pub mod optimizer;
pub mod ranking;

pub use matcher::{ExhaustiveMatcher, SearchConfig};

//! Search requests and their validation.

use thiserror::Error;

use crate::{SearchError, VehicleDemand, VehicleDemandError};

/// The vehicles a caller wants to store.
///
/// Encoded as a bare JSON array of demands so request bodies look like
/// `[{"length": 20, "quantity": 2}]`.
///
/// # Examples
/// ```rust
/// use stowage_core::{SearchRequest, VehicleDemand};
///
/// let request = SearchRequest::new(vec![
///     VehicleDemand::new(20, 2)?,
///     VehicleDemand::new(15, 1)?,
/// ]);
/// assert_eq!(request.min_vehicle_length(), Some(15));
/// assert_eq!(request.total_requested_area(), 550);
/// # Ok::<(), stowage_core::VehicleDemandError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SearchRequest {
    /// Requested vehicles, in caller order.
    pub vehicles: Vec<VehicleDemand>,
}

/// Detailed validation failures for [`SearchRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchRequestValidationError {
    /// No vehicles were requested.
    #[error("request must contain at least one vehicle")]
    EmptyDemand,
    /// A vehicle entry carried a non-positive field.
    #[error("vehicle {index} is invalid: {source}")]
    InvalidVehicle {
        /// Position of the offending entry in the request.
        index: usize,
        /// What was wrong with it.
        #[source]
        source: VehicleDemandError,
    },
}

impl SearchRequest {
    /// Wrap a list of demands without validating them.
    #[must_use]
    pub const fn new(vehicles: Vec<VehicleDemand>) -> Self {
        Self { vehicles }
    }

    /// Validate the request, reporting the first offending entry.
    pub fn validate_detailed(&self) -> Result<(), SearchRequestValidationError> {
        if self.vehicles.is_empty() {
            return Err(SearchRequestValidationError::EmptyDemand);
        }
        self.vehicles
            .iter()
            .enumerate()
            .try_for_each(|(index, vehicle)| {
                vehicle
                    .validate()
                    .map_err(|source| SearchRequestValidationError::InvalidVehicle { index, source })
            })
    }

    /// Validate the request, mapping failures onto [`SearchError`].
    pub fn validate(&self) -> Result<(), SearchError> {
        self.validate_detailed().map_err(SearchError::InvalidRequest)
    }

    /// Shortest requested vehicle, or `None` for an empty request.
    #[must_use]
    pub fn min_vehicle_length(&self) -> Option<u32> {
        self.vehicles.iter().map(|vehicle| vehicle.length).min()
    }

    /// Floor area needed by every requested vehicle together.
    #[must_use]
    pub fn total_requested_area(&self) -> u128 {
        self.vehicles.iter().map(VehicleDemand::area).sum()
    }
}

//! Vehicle storage demands.
//!
//! A demand describes how many vehicles of one footprint need a slot. Widths
//! default to a single lane so that callers only have to supply lengths and
//! quantities for ordinary cars.

use thiserror::Error;

/// Width of one storage lane, and the default vehicle width.
pub const LANE_WIDTH: u32 = 10;

/// A request to store `quantity` vehicles of the given footprint.
///
/// # Examples
/// ```
/// use stowage_core::VehicleDemand;
///
/// let demand = VehicleDemand::new(20, 2)?;
/// assert_eq!(demand.width, 10);
/// assert_eq!(demand.area(), 400);
/// # Ok::<(), stowage_core::VehicleDemandError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleDemand {
    /// Vehicle length.
    pub length: u32,
    /// Number of vehicles of this footprint.
    pub quantity: u32,
    /// Vehicle width.
    #[cfg_attr(feature = "serde", serde(default = "default_width"))]
    pub width: u32,
}

#[cfg(feature = "serde")]
const fn default_width() -> u32 {
    LANE_WIDTH
}

/// Errors returned by [`VehicleDemand::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VehicleDemandError {
    /// The vehicle length was zero.
    #[error("vehicle length must be a positive integer")]
    ZeroLength,
    /// The requested quantity was zero.
    #[error("vehicle quantity must be a positive integer")]
    ZeroQuantity,
    /// The vehicle width was zero.
    #[error("vehicle width must be a positive integer")]
    ZeroWidth,
}

impl VehicleDemand {
    /// Construct a validated demand with the default lane width.
    pub const fn new(length: u32, quantity: u32) -> Result<Self, VehicleDemandError> {
        Self::with_width(length, quantity, LANE_WIDTH)
    }

    /// Construct a validated demand with an explicit width.
    pub const fn with_width(
        length: u32,
        quantity: u32,
        width: u32,
    ) -> Result<Self, VehicleDemandError> {
        let demand = Self {
            length,
            quantity,
            width,
        };
        match demand.validate() {
            Ok(()) => Ok(demand),
            Err(err) => Err(err),
        }
    }

    /// Check that every dimension and the quantity are strictly positive.
    ///
    /// Decoded values bypass [`VehicleDemand::new`], so request decoders call
    /// this before handing demands to a matcher.
    pub const fn validate(&self) -> Result<(), VehicleDemandError> {
        if self.length == 0 {
            return Err(VehicleDemandError::ZeroLength);
        }
        if self.quantity == 0 {
            return Err(VehicleDemandError::ZeroQuantity);
        }
        if self.width == 0 {
            return Err(VehicleDemandError::ZeroWidth);
        }
        Ok(())
    }

    /// Total floor area needed by all vehicles of this demand.
    #[must_use]
    pub fn area(&self) -> u128 {
        u128::from(self.length) * u128::from(self.quantity) * u128::from(self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1, 10, VehicleDemandError::ZeroLength)]
    #[case(20, 0, 10, VehicleDemandError::ZeroQuantity)]
    #[case(20, 1, 0, VehicleDemandError::ZeroWidth)]
    fn rejects_non_positive_fields(
        #[case] length: u32,
        #[case] quantity: u32,
        #[case] width: u32,
        #[case] expected: VehicleDemandError,
    ) {
        let err = VehicleDemand::with_width(length, quantity, width).expect_err("invalid demand");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn area_does_not_overflow_for_large_inputs() {
        let demand = VehicleDemand::with_width(u32::MAX, u32::MAX, u32::MAX).expect("valid");
        let max = u128::from(u32::MAX);
        assert_eq!(demand.area(), max * max * max);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn width_defaults_to_one_lane_when_decoding() {
        let demand: VehicleDemand =
            serde_json::from_str(r#"{"length": 20, "quantity": 3}"#).expect("decode");
        assert_eq!(demand, VehicleDemand::new(20, 3).expect("valid"));
    }
}

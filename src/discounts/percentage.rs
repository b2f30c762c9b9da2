//! Percentage values

use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{Serialize, Serializer, ser::Error as _};
use thiserror::Error;

/// Errors raised when constructing a percentage.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PercentageError {
    /// The value was outside `0..=100`.
    #[error("Percentage {0} is outside the range 0 to 100")]
    OutOfRange(Decimal),
}

/// A percentage off, between 0 and 100 inclusive.
///
/// Serializes as a JSON number: whole percentages as integers, anything else as a float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Percentage(Decimal);

impl Percentage {
    /// Ten percent off.
    pub const TEN: Self = Self(Decimal::TEN);

    /// One hundred percent off.
    pub const FULL: Self = Self(Decimal::ONE_HUNDRED);

    /// Create a percentage, validating its range.
    ///
    /// # Errors
    ///
    /// Returns a [`PercentageError::OutOfRange`] if `value` is negative or above 100.
    pub fn new(value: Decimal) -> Result<Self, PercentageError> {
        if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
            return Err(PercentageError::OutOfRange(value));
        }

        Ok(Self(value))
    }

    /// The percentage as a decimal in `0..=100`.
    pub fn value(self) -> Decimal {
        self.0
    }
}

impl Serialize for Percentage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = self.0.normalize();

        if let (0, Some(whole)) = (value.scale(), value.to_u64()) {
            return serializer.serialize_u64(whole);
        }

        let float = value
            .to_f64()
            .ok_or_else(|| S::Error::custom(format!("percentage {value} is not representable")))?;

        serializer.serialize_f64(float)
    }
}

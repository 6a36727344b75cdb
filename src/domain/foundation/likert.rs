//! Likert value object (1 to 5 agreement scale).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::ValidationError;

/// A single Likert-scale answer: 1 (strongly disagree) to 5 (strongly agree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LikertValue(u8);

impl LikertValue {
    /// Lowest value on the scale.
    pub const MIN: u8 = 1;

    /// Highest value on the scale.
    pub const MAX: u8 = 5;

    /// Creates a LikertValue, returning error if out of range.
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "likert_value",
                i64::from(Self::MIN),
                i64::from(Self::MAX),
                i64::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Creates a LikertValue from a wider integer (as decoded from JSON).
    pub fn try_from_i64(value: i64) -> Result<Self, ValidationError> {
        u8::try_from(value)
            .map_err(|_| {
                ValidationError::out_of_range(
                    "likert_value",
                    i64::from(Self::MIN),
                    i64::from(Self::MAX),
                    value,
                )
            })
            .and_then(Self::try_from_u8)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns true for agreement (4 or 5).
    pub fn is_positive(&self) -> bool {
        self.0 >= 4
    }

    /// Returns true for the neutral midpoint (3).
    pub fn is_neutral(&self) -> bool {
        self.0 == 3
    }

    /// Returns true for disagreement (1 or 2).
    pub fn is_negative(&self) -> bool {
        self.0 <= 2
    }
}

impl fmt::Display for LikertValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for LikertValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for LikertValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        Self::try_from_i64(raw).map_err(serde::de::Error::custom)
    }
}

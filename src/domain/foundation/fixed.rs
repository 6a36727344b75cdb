//! Two-decimal numeric value object for scores and percentages.

use serde::{Serialize, Serializer};
use std::fmt;

/// A computed number whose final representation has exactly two decimals.
///
/// The raw value is kept for arithmetic; `Display` and serialization always
/// produce the rounded two-decimal string (`45.45`, `100.00`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Fixed2(f64);

impl Fixed2 {
    /// Zero.
    pub const ZERO: Self = Self(0.0);

    /// Wraps a raw value.
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Percentage of `part` over `whole`; zero when `whole` is zero.
    pub fn percent_of(part: f64, whole: f64) -> Self {
        if whole == 0.0 {
            return Self::ZERO;
        }
        Self(part / whole * 100.0)
    }

    /// Returns the unrounded value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Fixed2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Serialize for Fixed2 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed2_displays_two_decimals() {
        assert_eq!(Fixed2::new(72.0 / 22.0).to_string(), "3.27");
        assert_eq!(Fixed2::new(100.0).to_string(), "100.00");
        assert_eq!(Fixed2::ZERO.to_string(), "0.00");
    }

    #[test]
    fn fixed2_percent_of_computes_ratio() {
        assert_eq!(Fixed2::percent_of(10.0, 22.0).to_string(), "45.45");
        assert_eq!(Fixed2::percent_of(1.0, 4.0).to_string(), "25.00");
    }

    #[test]
    fn fixed2_percent_of_zero_whole_is_zero() {
        assert_eq!(Fixed2::percent_of(3.0, 0.0), Fixed2::ZERO);
    }

    #[test]
    fn fixed2_serializes_as_string() {
        let json = serde_json::to_string(&Fixed2::new(65.4545)).unwrap();
        assert_eq!(json, r#""65.45""#);
    }
}

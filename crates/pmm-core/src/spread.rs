//! Precision-safe spread type.
//!
//! Uses `rust_decimal` for exact decimal arithmetic, avoiding
//! floating-point rounding errors critical in spread calculations.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// Fractional bid/ask spread with exact decimal precision.
///
/// A value of `0.01` means 1% distance from the mid price. Wraps
/// `Decimal` to keep spreads from being mixed with prices or sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Spread(pub Decimal);

impl Spread {
    pub const ZERO: Self = Self(Decimal::ZERO);

    #[inline]
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    #[inline]
    pub fn inner(&self) -> Decimal {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Round to the nearest multiple of `step` (ties away from zero).
    ///
    /// Used to quantize volatility deltas into discrete spread increments
    /// so that noise does not trigger an adjustment on every tick.
    #[inline]
    pub fn round_to_step(&self, step: Spread) -> Self {
        if step.is_zero() {
            return *self;
        }
        let steps = (self.0 / step.0)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        Self(steps * step.0)
    }

    /// The larger of two spreads.
    #[inline]
    pub fn max(self, other: Spread) -> Self {
        Self(self.0.max(other.0))
    }
}

impl fmt::Display for Spread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Spread {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<Decimal> for Spread {
    fn from(d: Decimal) -> Self {
        Self(d)
    }
}

impl Add for Spread {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Spread {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

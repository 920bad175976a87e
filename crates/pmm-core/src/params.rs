//! Host-owned market making parameters.

use crate::error::{CoreError, Result};
use crate::spread::Spread;
use serde::{Deserialize, Serialize};

/// The mutable parameter object shared with the host engine.
///
/// The host hands a `&mut PmmParameters` to the tuner on every tick and
/// reads the possibly-mutated spreads back afterwards. Both fields are
/// fractional distances from the mid price (0.008 = 0.8%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PmmParameters {
    /// Distance from mid price for bid quotes.
    pub bid_spread: Spread,
    /// Distance from mid price for ask quotes.
    pub ask_spread: Spread,
}

impl PmmParameters {
    /// Create validated parameters. Negative spreads are rejected.
    pub fn new(bid_spread: Spread, ask_spread: Spread) -> Result<Self> {
        if bid_spread.is_negative() {
            return Err(CoreError::InvalidSpread(format!(
                "bid_spread must be non-negative, got {bid_spread}"
            )));
        }
        if ask_spread.is_negative() {
            return Err(CoreError::InvalidSpread(format!(
                "ask_spread must be non-negative, got {ask_spread}"
            )));
        }
        Ok(Self {
            bid_spread,
            ask_spread,
        })
    }
}

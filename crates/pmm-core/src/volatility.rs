//! Host volatility source contract.
//!
//! The host engine owns the mid-price history and computes the rolling
//! statistics; the tuner only queries them. Volatility here is the relative
//! price change per sampling cycle regardless of direction (a -3% move and
//! a +3% move are both 0.03).

use rust_decimal::Decimal;

/// Rolling volatility statistics exposed by the host engine.
///
/// Both queries sample the mid price every `interval` ticks and aggregate
/// over the last `period` samples. They return `None` until enough samples
/// have accumulated (roughly `interval * period` ticks after start) and a
/// fractional value (0.03 = 3%) thereafter.
pub trait VolatilitySource {
    /// Average relative price change over the last `period` samples.
    ///
    /// Averaging a short window detects recent sudden changes.
    fn avg_price_volatility(&self, interval: u32, period: usize) -> Option<Decimal>;

    /// Median relative price change over the last `period` samples.
    ///
    /// The median over a long window gives the market-norm volatility
    /// without recent spikes dragging the value around.
    fn median_price_volatility(&self, interval: u32, period: usize) -> Option<Decimal>;
}

//! Per-tick script contract between the host engine and a tuning strategy.

use chrono::{DateTime, Utc};

use crate::params::PmmParameters;
use crate::volatility::VolatilitySource;

/// A strategy callback invoked by the host once per exchange-data tick.
///
/// The only output channel is the in-place mutation of `params`; the host
/// reads the spreads back after each call. `now` is passed in rather than
/// read from the wall clock so that time-dependent behavior is testable.
pub trait TickScript {
    /// Process one tick: recompute spreads and write them into `params`.
    fn on_tick(
        &mut self,
        params: &mut PmmParameters,
        volatility: &dyn VolatilitySource,
        now: DateTime<Utc>,
    );

    /// Short human-readable diagnostic string for the host's status view.
    fn status(&self) -> String;
}

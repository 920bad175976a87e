//! Per-tick spread adjustment.
//!
//! `SpreadTuner` compares the short-window average volatility against the
//! long-window median, rounds the difference to the configured step, adds
//! the overnight widening when outside local day hours and writes the
//! resulting spreads back into the host's parameter object. Spreads are
//! never set below the originals captured on the first tick, so quotes do
//! not drift toward the mid price when volatility falls under the norm.

use chrono::{DateTime, Timelike, Utc};
use pmm_core::{PmmParameters, Spread, TickScript, VolatilitySource};
use pmm_persistence::{AdjustmentLog, AdjustmentRecord};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::config::TunerConfig;
use crate::schedule;

fn to_f64(d: Decimal) -> f64 {
    d.to_f64().unwrap_or(0.0)
}

/// Stateful spread tuning strategy.
pub struct SpreadTuner {
    config: TunerConfig,
    /// Spreads captured from the host on the first tick.
    originals: Option<(Spread, Spread)>,
    /// Ticks seen since start, warmup included.
    ticks: u64,
    /// Local hour-of-day at the last adjustment pass.
    hour_of_day: u32,
    log: AdjustmentLog,
}

impl SpreadTuner {
    /// Create a tuner from a validated configuration.
    pub fn new(config: TunerConfig) -> Self {
        let log = AdjustmentLog::new(&config.log_path);
        Self {
            config,
            originals: None,
            ticks: 0,
            hour_of_day: 0,
            log,
        }
    }

    /// Ticks seen since start.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl TickScript for SpreadTuner {
    fn on_tick(
        &mut self,
        params: &mut PmmParameters,
        volatility: &dyn VolatilitySource,
        now: DateTime<Utc>,
    ) {
        // Capture the host's configured spreads exactly once
        let (original_bid, original_ask) = *self
            .originals
            .get_or_insert((params.bid_spread, params.ask_spread));

        let avg_short =
            volatility.avg_price_volatility(self.config.interval, self.config.short_period);
        let median_long =
            volatility.median_price_volatility(self.config.interval, self.config.long_period);
        self.ticks += 1;

        // Until interval * long_period ticks have passed the host has no
        // statistics for us
        let (Some(avg_short), Some(median_long)) = (avg_short, median_long) else {
            return;
        };

        if self.ticks == self.config.warmup_ticks() + 1 {
            info!(ticks = self.ticks, "Finished calculating volatility averages");
            return;
        }

        let delta = Spread::new(avg_short - median_long);
        let spread_adjustment = delta.round_to_step(self.config.spread_step);

        let local_now = now.with_timezone(&self.config.timezone);
        self.hour_of_day = local_now.hour();
        let overnight_adjustment = if schedule::is_overnight(
            self.hour_of_day,
            self.config.day_start_hour,
            self.config.day_end_hour,
        ) {
            self.config.overnight_spread
        } else {
            Spread::ZERO
        };

        let new_bid = original_bid + spread_adjustment + overnight_adjustment;
        let new_ask = original_ask + spread_adjustment + overnight_adjustment;

        // Never quote tighter than the originals
        params.bid_spread = original_bid.max(new_bid);
        params.ask_spread = original_ask.max(new_ask);

        // No adjustment, nothing to log
        if new_bid == original_bid {
            return;
        }

        debug!(
            avg_short = %avg_short,
            median_long = %median_long,
            adjustment = %spread_adjustment,
            overnight = %overnight_adjustment,
            bid = %params.bid_spread,
            ask = %params.ask_spread,
            "Adjusted spreads"
        );

        let record = AdjustmentRecord {
            timestamp: local_now,
            avg_short_vol: to_f64(avg_short),
            median_long_vol: to_f64(median_long),
            spread_adjustment: to_f64(spread_adjustment.inner()),
            overnight_adjustment: to_f64(overnight_adjustment.inner()),
            new_bid_spread: to_f64(new_bid.inner()),
            new_ask_spread: to_f64(new_ask.inner()),
        };
        // The per-tick contract has no error channel; a lost log line is
        // not worth disturbing the host over
        if let Err(e) = self.log.append(&record) {
            warn!(?e, "Failed to append adjustment record");
        }
    }

    fn status(&self) -> String {
        format!(
            "hour of day / ticks since start : {} + {}",
            self.hour_of_day, self.ticks
        )
    }
}

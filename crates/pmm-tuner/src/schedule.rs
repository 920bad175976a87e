//! Day/night scheduling for the overnight widening rule.
//!
//! The check is hour-of-day based in the configured market timezone:
//! liquidity thins out overnight, so spreads get a static widening outside
//! the local day window.

/// Whether `hour` falls outside the inclusive `[day_start_hour, day_end_hour]`
/// day window.
#[must_use]
pub fn is_overnight(hour: u32, day_start_hour: u32, day_end_hour: u32) -> bool {
    hour < day_start_hour || hour > day_end_hour
}

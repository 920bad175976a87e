//! Volatility-adjusted spread tuning for a PMM host engine.
//!
//! Adjusts the host's bid/ask spreads based on short-term versus long-term
//! price volatility, with a static overnight widening rule:
//!
//! ```text
//! Host tick → SpreadTuner.on_tick()
//!              ├─ VolatilitySource: avg short / median long volatility
//!              ├─ delta rounded to spread_step (noise filter)
//!              ├─ overnight widening outside local day hours
//!              └─ PmmParameters: spreads written back (never below originals)
//!                   ↓
//!              AdjustmentLog: one text line per adjustment
//! ```
//!
//! Example: with original spreads at 0.8% and a long-term median volatility
//! of 1.5%, a short-term jump to 2.6% adjusts both spreads to 1.9%
//! (original 0.8% plus the 1.1% delta). When volatility drops back to the
//! norm the spreads return to 0.8%.

pub mod config;
pub mod error;
pub mod schedule;
pub mod tuner;

pub use config::TunerConfig;
pub use error::{TunerError, TunerResult};
pub use tuner::SpreadTuner;

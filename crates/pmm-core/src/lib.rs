//! Core domain types for the PMM spread tuner.
//!
//! This crate provides the types shared between the tuner and its host
//! market-making engine:
//! - `Spread`: precision-safe fractional spread (0.01 = 1%)
//! - `PmmParameters`: the host-owned mutable parameter object
//! - `VolatilitySource`: the host's rolling volatility queries
//! - `TickScript`: the per-tick invocation and status contract

pub mod error;
pub mod params;
pub mod script;
pub mod spread;
pub mod volatility;

pub use error::{CoreError, Result};
pub use params::PmmParameters;
pub use script::TickScript;
pub use spread::Spread;
pub use volatility::VolatilitySource;

//! Append-only adjustment log for the PMM spread tuner.
//!
//! Records one text line per spread adjustment for post-run evaluation.
//! Lines are written in append mode so interrupted runs never truncate
//! earlier data.

pub mod error;
pub mod writer;

pub use error::{PersistenceError, PersistenceResult};
pub use writer::{AdjustmentLog, AdjustmentRecord};

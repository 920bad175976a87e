//! Text-line file writer for spread adjustments.
//!
//! One line per adjustment, append mode:
//! - Partial file corruption only affects individual lines
//! - Can be read even if a write was interrupted
//! - Trivial to grep/plot during evaluation

use crate::error::PersistenceResult;
use chrono::DateTime;
use chrono_tz::Tz;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// One spread adjustment, ready for logging.
///
/// Numeric fields are `f64` at this boundary: the log is for human
/// evaluation, not for further arithmetic.
#[derive(Debug, Clone)]
pub struct AdjustmentRecord {
    /// Wall-clock time in the market's local timezone.
    pub timestamp: DateTime<Tz>,
    /// Short-window average volatility.
    pub avg_short_vol: f64,
    /// Long-window median volatility.
    pub median_long_vol: f64,
    /// Volatility-delta spread adjustment (already step-rounded).
    pub spread_adjustment: f64,
    /// Static overnight widening (zero during day hours).
    pub overnight_adjustment: f64,
    /// New bid spread before clamping.
    pub new_bid_spread: f64,
    /// New ask spread before clamping.
    pub new_ask_spread: f64,
}

impl fmt::Display for AdjustmentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}   avg_short_vol: {:+.5}   median_long_vol: {:+.7}   \
             spread adj: {:+.4}   overnight spread adj: {:+.4}   \
             new bid: {:+.4}   new ask: {:+.4}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.avg_short_vol,
            self.median_long_vol,
            self.spread_adjustment,
            self.overnight_adjustment,
            self.new_bid_spread,
            self.new_ask_spread,
        )
    }
}

/// Append-only text-line writer for adjustment records.
///
/// The file is opened lazily on the first append and kept open for the
/// lifetime of the writer. Every append is flushed to disk immediately;
/// adjustments are rare (step-rounded), so buffering across records would
/// only risk losing lines on a crash.
pub struct AdjustmentLog {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
    records_written: usize,
}

impl AdjustmentLog {
    /// Create a log writer for `path`. The parent directory is created if
    /// it does not exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    warn!(?e, "Failed to create log directory: {}", parent.display());
                }
            }
        }
        Self {
            path,
            writer: None,
            records_written: 0,
        }
    }

    /// Path of the underlying log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of records written by this instance.
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    fn open_writer(&mut self) -> PersistenceResult<()> {
        info!(path = %self.path.display(), "Opening adjustment log (append mode)");

        // Append mode - never truncates existing data
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        self.writer = Some(BufWriter::new(file));
        Ok(())
    }

    /// Append one record as a text line and flush to disk.
    pub fn append(&mut self, record: &AdjustmentRecord) -> PersistenceResult<()> {
        if self.writer.is_none() {
            self.open_writer()?;
        }

        let writer = self.writer.as_mut().expect("writer opened above");
        writeln!(writer, "{record}")?;
        writer.flush()?;
        self.records_written += 1;

        debug!(
            path = %self.path.display(),
            records = self.records_written,
            "Appended adjustment record"
        );
        Ok(())
    }
}

impl Drop for AdjustmentLog {
    fn drop(&mut self) {
        if let Some(writer) = self.writer.as_mut() {
            if let Err(e) = writer.flush() {
                warn!(?e, "Failed to flush adjustment log on drop");
            }
        }
    }
}

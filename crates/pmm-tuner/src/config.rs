//! Spread tuner configuration.

use crate::error::{TunerError, TunerResult};
use chrono_tz::Tz;
use pmm_core::Spread;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Spread tuner configuration.
///
/// The default periods are sized for testing; in production `short_period`
/// and `long_period` should be larger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TunerConfig {
    /// Mid-price sampling interval in ticks.
    #[serde(default = "default_interval")]
    pub interval: u32,

    /// Number of samples in the short (recent-change) volatility window.
    #[serde(default = "default_short_period")]
    pub short_period: usize,

    /// Number of samples in the long (market-norm) volatility window.
    #[serde(default = "default_long_period")]
    pub long_period: usize,

    /// Spread adjustment increment. The volatility delta is rounded to the
    /// nearest multiple of this step so that noise does not move the
    /// spreads on every tick.
    #[serde(default = "default_spread_step")]
    pub spread_step: Spread,

    /// Static widening applied outside local day hours.
    #[serde(default = "default_overnight_spread")]
    pub overnight_spread: Spread,

    /// First local hour-of-day counted as daytime (inclusive).
    #[serde(default = "default_day_start_hour")]
    pub day_start_hour: u32,

    /// Last local hour-of-day counted as daytime (inclusive).
    #[serde(default = "default_day_end_hour")]
    pub day_end_hour: u32,

    /// IANA timezone used for the day/night check and log timestamps.
    #[serde(default = "default_timezone")]
    pub timezone: Tz,

    /// Path of the append-only adjustment log.
    #[serde(default = "default_log_path")]
    pub log_path: PathBuf,
}

impl TunerConfig {
    /// Ticks needed before both volatility windows are fully populated.
    pub fn warmup_ticks(&self) -> u64 {
        self.interval as u64 * self.long_period as u64
    }

    /// Validate numeric ranges.
    pub fn validate(&self) -> TunerResult<()> {
        if self.interval == 0 {
            return Err(TunerError::InvalidConfig(
                "interval must be at least 1".to_string(),
            ));
        }
        if self.short_period == 0 {
            return Err(TunerError::InvalidConfig(
                "short_period must be at least 1".to_string(),
            ));
        }
        if self.long_period < self.short_period {
            return Err(TunerError::InvalidConfig(format!(
                "long_period ({}) must be >= short_period ({})",
                self.long_period, self.short_period
            )));
        }
        if self.spread_step.inner() <= Decimal::ZERO {
            return Err(TunerError::InvalidConfig(
                "spread_step must be positive".to_string(),
            ));
        }
        if self.overnight_spread.is_negative() {
            return Err(TunerError::InvalidConfig(
                "overnight_spread must be non-negative".to_string(),
            ));
        }
        if self.day_end_hour > 23 || self.day_start_hour > self.day_end_hour {
            return Err(TunerError::InvalidConfig(format!(
                "day hours must satisfy day_start_hour <= day_end_hour <= 23, \
                 got [{}, {}]",
                self.day_start_hour, self.day_end_hour
            )));
        }
        Ok(())
    }

    /// Load and validate a configuration from a TOML file.
    pub fn from_file(path: &str) -> TunerResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for TunerConfig {
    fn default() -> Self {
        Self {
            interval: default_interval(),
            short_period: default_short_period(),
            long_period: default_long_period(),
            spread_step: default_spread_step(),
            overnight_spread: default_overnight_spread(),
            day_start_hour: default_day_start_hour(),
            day_end_hour: default_day_end_hour(),
            timezone: default_timezone(),
            log_path: default_log_path(),
        }
    }
}

fn default_interval() -> u32 {
    10
}
fn default_short_period() -> usize {
    5
}
fn default_long_period() -> usize {
    900
}
fn default_spread_step() -> Spread {
    Spread::new(Decimal::new(25, 4)) // 0.0025 = 0.25%
}
fn default_overnight_spread() -> Spread {
    Spread::new(Decimal::new(20, 4)) // 0.0020 = 0.20%
}
fn default_day_start_hour() -> u32 {
    8
}
fn default_day_end_hour() -> u32 {
    21
}
fn default_timezone() -> Tz {
    chrono_tz::Australia::Sydney
}
fn default_log_path() -> PathBuf {
    PathBuf::from("logs/spread_adjustments.log")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_config() {
        let config = TunerConfig::default();
        assert_eq!(config.interval, 10);
        assert_eq!(config.short_period, 5);
        assert_eq!(config.long_period, 900);
        assert_eq!(config.spread_step.inner(), dec!(0.0025));
        assert_eq!(config.overnight_spread.inner(), dec!(0.0020));
        assert_eq!(config.day_start_hour, 8);
        assert_eq!(config.day_end_hour, 21);
        assert_eq!(config.timezone, chrono_tz::Australia::Sydney);
        assert_eq!(config.log_path, PathBuf::from("logs/spread_adjustments.log"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_warmup_ticks() {
        let config = TunerConfig::default();
        assert_eq!(config.warmup_ticks(), 9000);
    }

    #[test]
    fn test_config_serde_defaults() {
        let toml_str = r#"
long_period = 1800
timezone = "Europe/London"
"#;
        let config: TunerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.long_period, 1800);
        assert_eq!(config.timezone, chrono_tz::Europe::London);
        assert_eq!(config.interval, 10);
        assert_eq!(config.spread_step.inner(), dec!(0.0025));
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let config = TunerConfig {
            interval: 0,
            ..TunerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(TunerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_short_longer_than_long() {
        let config = TunerConfig {
            short_period: 10,
            long_period: 5,
            ..TunerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_step() {
        let config = TunerConfig {
            spread_step: Spread::ZERO,
            ..TunerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_day_hours() {
        let config = TunerConfig {
            day_start_hour: 22,
            day_end_hour: 8,
            ..TunerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("tuner.toml");
        std::fs::write(&path, "interval = 20\nshort_period = 3\n").unwrap();

        let config = TunerConfig::from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(config.interval, 20);
        assert_eq!(config.short_period, 3);
        assert_eq!(config.long_period, 900);
    }

    #[test]
    fn test_from_file_missing() {
        assert!(matches!(
            TunerConfig::from_file("does/not/exist.toml"),
            Err(TunerError::Io(_))
        ));
    }

    #[test]
    fn test_from_file_invalid_values_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("tuner.toml");
        std::fs::write(&path, "interval = 0\n").unwrap();

        assert!(matches!(
            TunerConfig::from_file(path.to_str().unwrap()),
            Err(TunerError::InvalidConfig(_))
        ));
    }
}

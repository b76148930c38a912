//! Market configuration: defaults, TOML loading, and validation.
//!
//! Every option has a default matching a US equity session in New York
//! time, so an empty document is a valid configuration:
//!
//! ```toml
//! timezone = "America/New_York"
//! premarket_open = "04:00:00"
//! market_open = "09:30:00"
//! market_close = "16:00:00"
//! orb_short = "5m"
//! orb_long = "15m"
//! rsi_period = 14
//! rsi_overbought = 70.0
//! rsi_oversold = 30.0
//! macd_fast = 12
//! macd_slow = 26
//! macd_signal = 9
//! ```
//!
//! Entrypoints:
//! - Parse + validate from a TOML string: [`load_config_str`]
//! - Parse + validate from a file path: [`load_config_path`]
//! - Path taken from [`CONFIG_ENV_VAR`]: [`load_config_from_env`]

use std::num::NonZeroU32;

use anyhow::Context;
use chrono::NaiveTime;
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::Error;
use crate::models::window::{RangeLength, TimeWindow};
use crate::tz::parse_tz;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "INTRADAY_LEVELS_CONFIG";

/// Session clock and indicator parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarketConfig {
    /// IANA zone every bar timestamp is expressed in.
    #[serde(deserialize_with = "deserialize_tz")]
    pub timezone: Tz,
    /// Start of the pre-market window.
    pub premarket_open: NaiveTime,
    /// Regular session open; end of pre-market and start of both opening ranges.
    pub market_open: NaiveTime,
    /// Regular session close.
    pub market_close: NaiveTime,
    /// Length of the short opening range.
    pub orb_short: RangeLength,
    /// Length of the long opening range.
    pub orb_long: RangeLength,
    pub rsi_period: usize,
    /// RSI strictly above this reads as overbought.
    pub rsi_overbought: f64,
    /// RSI strictly below this reads as oversold.
    pub rsi_oversold: f64,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
}

fn deserialize_tz<'de, D: Deserializer<'de>>(de: D) -> Result<Tz, D::Error> {
    let name = String::deserialize(de)?;
    parse_tz(&name).map_err(serde::de::Error::custom)
}

const fn hm(h: u32, m: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(h, m, 0) {
        Some(t) => t,
        None => panic!("invalid constant time"),
    }
}

const fn nz(n: u32) -> NonZeroU32 {
    match NonZeroU32::new(n) {
        Some(nz) => nz,
        None => panic!("zero constant"),
    }
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::America::New_York,
            premarket_open: hm(4, 0),
            market_open: hm(9, 30),
            market_close: hm(16, 0),
            orb_short: RangeLength::minutes(nz(5)),
            orb_long: RangeLength::minutes(nz(15)),
            rsi_period: 14,
            rsi_overbought: 70.0,
            rsi_oversold: 30.0,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
        }
    }
}

impl MarketConfig {
    /// Check ranges and cross-field consistency.
    ///
    /// Errors:
    /// - [`Error::InvalidPeriod`] for any zero indicator period
    /// - [`Error::Config`] when the session clock is out of order, an opening
    ///   range does not end inside the regular session (or the short range
    ///   outlasts the long one), or the RSI thresholds are inverted or
    ///   outside 0..=100
    pub fn validate(&self) -> Result<(), Error> {
        for (name, value) in [
            ("rsi", self.rsi_period),
            ("macd fast", self.macd_fast),
            ("macd slow", self.macd_slow),
            ("macd signal", self.macd_signal),
        ] {
            if value == 0 {
                return Err(Error::InvalidPeriod { name, value });
            }
        }
        if self.premarket_open > self.market_open {
            return Err(Error::Config(format!(
                "premarket_open {} is after market_open {}",
                self.premarket_open, self.market_open
            )));
        }
        if self.market_open >= self.market_close {
            return Err(Error::Config(format!(
                "market_open {} is not before market_close {}",
                self.market_open, self.market_close
            )));
        }
        let range_end = |len: RangeLength| {
            let (end, wrapped) = self.market_open.overflowing_add_signed(len.duration());
            (wrapped == 0 && end <= self.market_close).then_some(end)
        };
        match (range_end(self.orb_short), range_end(self.orb_long)) {
            (Some(short_end), Some(long_end)) if short_end <= long_end => {}
            _ => {
                return Err(Error::Config(format!(
                    "opening ranges {} / {} must satisfy short <= long and end by market_close {}",
                    self.orb_short, self.orb_long, self.market_close
                )));
            }
        }
        let in_range = |v: f64| (0.0..=100.0).contains(&v);
        if !in_range(self.rsi_oversold)
            || !in_range(self.rsi_overbought)
            || self.rsi_oversold >= self.rsi_overbought
        {
            return Err(Error::Config(format!(
                "rsi thresholds must satisfy 0 <= oversold < overbought <= 100, got {} / {}",
                self.rsi_oversold, self.rsi_overbought
            )));
        }
        Ok(())
    }

    /// Pre-market: `[premarket_open, market_open]`.
    pub fn premarket_window(&self) -> TimeWindow {
        TimeWindow::new(self.premarket_open, self.market_open)
    }

    /// Regular trading hours: `[market_open, market_close]`.
    pub fn regular_session_window(&self) -> TimeWindow {
        TimeWindow::new(self.market_open, self.market_close)
    }

    pub fn orb_short_window(&self) -> TimeWindow {
        TimeWindow::starting_at(self.market_open, self.orb_short)
    }

    pub fn orb_long_window(&self) -> TimeWindow {
        TimeWindow::starting_at(self.market_open, self.orb_long)
    }
}

/// Parse and validate a configuration from TOML text.
pub fn load_config_str(toml_str: &str) -> anyhow::Result<MarketConfig> {
    let cfg: MarketConfig = toml::from_str(toml_str).context("failed to parse config TOML")?;
    cfg.validate().context("invalid market config")?;
    Ok(cfg)
}

/// Read a configuration file from disk, parse, and validate it.
pub fn load_config_path(path: impl AsRef<std::path::Path>) -> anyhow::Result<MarketConfig> {
    let text = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("read config file {}", path.as_ref().display()))?;
    load_config_str(&text)
}

/// Load the file named by [`CONFIG_ENV_VAR`].
pub fn load_config_from_env() -> anyhow::Result<MarketConfig> {
    let path = shared_utils::get_env_path(CONFIG_ENV_VAR)?;
    load_config_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_is_default() {
        let cfg = load_config_str("").unwrap();
        assert_eq!(cfg, MarketConfig::default());
        assert_eq!(cfg.orb_short_window().end, hm(9, 35));
        assert_eq!(cfg.orb_long_window().end, hm(9, 45));
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = load_config_str(
            r#"
            timezone = "Europe/London"
            market_open = "08:00:00"
            market_close = "16:30:00"
            orb_long = "30m"
            rsi_period = 7
            "#,
        )
        .unwrap();
        assert_eq!(cfg.timezone, chrono_tz::Europe::London);
        assert_eq!(cfg.orb_long_window(), TimeWindow::new(hm(8, 0), hm(8, 30)));
        assert_eq!(cfg.orb_short.to_string(), "5m");
        assert_eq!(cfg.rsi_period, 7);
        assert_eq!(cfg.macd_slow, 26);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = load_config_str("ticker = \"TSLA\"").unwrap_err();
        assert!(format!("{err:#}").contains("ticker"));
    }

    #[test]
    fn zero_period_is_rejected() {
        let err = load_config_str("macd_signal = 0").unwrap_err();
        let inner = err.downcast_ref::<Error>().unwrap();
        assert_eq!(
            inner,
            &Error::InvalidPeriod {
                name: "macd signal",
                value: 0
            }
        );
    }

    #[test]
    fn session_clock_must_be_ordered() {
        let err = load_config_str("market_open = \"17:00:00\"").unwrap_err();
        assert!(format!("{err:#}").contains("not before market_close"));

        let err = load_config_str("premarket_open = \"10:00:00\"").unwrap_err();
        assert!(format!("{err:#}").contains("after market_open"));
    }

    #[test]
    fn opening_range_past_midnight_is_rejected() {
        let err = load_config_str(
            r#"
            premarket_open = "20:00:00"
            market_open = "23:00:00"
            market_close = "23:59:00"
            orb_long = "2h"
            "#,
        )
        .unwrap_err();
        let inner = err.downcast_ref::<Error>().unwrap();
        assert!(matches!(inner, Error::Config(msg) if msg.contains("opening ranges")));
    }

    #[test]
    fn opening_range_must_end_by_close() {
        let err = load_config_str("orb_long = \"7h\"").unwrap_err();
        assert!(format!("{err:#}").contains("end by market_close"));

        // Exactly reaching the close is fine.
        let cfg = load_config_str("orb_long = \"390m\"").unwrap();
        assert_eq!(cfg.orb_long_window().end, hm(16, 0));
    }

    #[test]
    fn short_range_longer_than_long_range_is_rejected() {
        let err = load_config_str("orb_short = \"20m\"").unwrap_err();
        assert!(format!("{err:#}").contains("short <= long"));
    }

    #[test]
    fn inverted_rsi_thresholds_are_rejected() {
        let err = load_config_str("rsi_overbought = 20.0").unwrap_err();
        assert!(format!("{err:#}").contains("oversold < overbought"));
    }

    #[test]
    fn bad_timezone_and_length_fail_to_parse() {
        let err = load_config_str("timezone = \"Nowhere/Special\"").unwrap_err();
        assert!(format!("{err:#}").contains("Nowhere/Special"));
        let cfg = load_config_str("timezone = \" Europe/Berlin \"").unwrap();
        assert_eq!(cfg.timezone, chrono_tz::Europe::Berlin);
        assert!(load_config_str("orb_short = \"5x\"").is_err());
    }

    #[test]
    fn loads_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rsi_period = 21").unwrap();
        let cfg = load_config_path(file.path()).unwrap();
        assert_eq!(cfg.rsi_period, 21);

        let err = load_config_path(file.path().with_extension("missing")).unwrap_err();
        assert!(err.to_string().contains("read config file"));
    }

    #[test]
    fn loads_from_env_var() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "macd_fast = 8").unwrap();
        // Only this test touches the variable.
        unsafe { std::env::set_var(CONFIG_ENV_VAR, file.path()) };
        let cfg = load_config_from_env().unwrap();
        assert_eq!(cfg.macd_fast, 8);
    }
}

//! Canonical in-memory representation of a market-local OHLCV bar.

use chrono::{DateTime, NaiveDate, NaiveTime};
use chrono_tz::Tz;
use serde::Serialize;

/// A single time-series bar (OHLCV), timestamped in the market time zone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    /// Bar open instant, expressed in the market time zone.
    pub timestamp: DateTime<Tz>,

    /// Opening price.
    pub open: f64,

    /// Highest price during the bar interval.
    pub high: f64,

    /// Lowest price during the bar interval.
    pub low: f64,

    /// Closing price.
    pub close: f64,

    /// Shares traded during the bar interval.
    pub volume: u64,
}

/// Direction of a single bar, used to colour volume panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BarDirection {
    /// close > open
    Up,
    /// close < open
    Down,
    /// close == open
    Flat,
}

impl Bar {
    pub fn new(
        timestamp: DateTime<Tz>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Calendar date of the bar in market-local time.
    pub fn session_key(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    /// Wall-clock time of day in market-local time.
    pub fn time_of_day(&self) -> NaiveTime {
        self.timestamp.time()
    }

    /// (high + low + close) / 3
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }

    pub fn direction(&self) -> BarDirection {
        if self.close > self.open {
            BarDirection::Up
        } else if self.close < self.open {
            BarDirection::Down
        } else {
            BarDirection::Flat
        }
    }
}

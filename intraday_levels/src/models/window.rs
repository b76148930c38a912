//! Time-of-day windows and the compact lengths used to configure them.
//!
//! A [`RangeLength`] pairs a non-zero amount with a [`RangeUnit`] and reads
//! like `"5m"` or `"1h"`. A [`TimeWindow`] is a pair of market-local wall
//! times that selects bars on any date:
//! ```
//! use chrono::NaiveTime;
//! use intraday_levels::models::window::{RangeLength, TimeWindow};
//!
//! let open = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
//! let orb: RangeLength = "5m".parse().unwrap();
//! let w = TimeWindow::starting_at(open, orb);
//! assert!(w.contains(NaiveTime::from_hms_opt(9, 35, 0).unwrap()));
//! assert!(!w.contains(NaiveTime::from_hms_opt(9, 40, 0).unwrap()));
//! ```

use std::{fmt, num::NonZeroU32, str::FromStr};

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Unit of a [`RangeLength`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeUnit {
    Minute,
    Hour,
}

/// A window length = amount × unit (e.g., 5-Minute, 1-Hour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RangeLength {
    amount: NonZeroU32,
    unit: RangeUnit,
}

impl RangeLength {
    pub const fn new(amount: NonZeroU32, unit: RangeUnit) -> Self {
        Self { amount, unit }
    }

    pub const fn minutes(amount: NonZeroU32) -> Self {
        Self::new(amount, RangeUnit::Minute)
    }

    pub const fn amount(&self) -> NonZeroU32 {
        self.amount
    }

    pub const fn unit(&self) -> RangeUnit {
        self.unit
    }

    pub fn duration(&self) -> Duration {
        let n = i64::from(self.amount.get());
        match self.unit {
            RangeUnit::Minute => Duration::minutes(n),
            RangeUnit::Hour => Duration::hours(n),
        }
    }
}

impl fmt::Display for RangeLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let u = match self.unit {
            RangeUnit::Minute => "m",
            RangeUnit::Hour => "h",
        };
        write!(f, "{}{u}", self.amount)
    }
}

impl FromStr for RangeLength {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = |why: &str| Error::Config(format!("window length {s:?}: {why}"));
        // very small parser: 5m / 15m / 1h
        let s = s.trim();
        if s.len() < 2 || !s.is_char_boundary(s.len() - 1) {
            return Err(bad("expected <amount><unit>"));
        }
        let (digits, unit) = s.split_at(s.len() - 1);
        let amount: u32 = digits.parse().map_err(|_| bad("amount is not a number"))?;
        let amount = NonZeroU32::new(amount).ok_or_else(|| bad("amount must be > 0"))?;
        let unit = match unit {
            "m" => RangeUnit::Minute,
            "h" => RangeUnit::Hour,
            _ => return Err(bad("unit must be m or h")),
        };
        Ok(Self::new(amount, unit))
    }
}

impl TryFrom<String> for RangeLength {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<RangeLength> for String {
    fn from(len: RangeLength) -> Self {
        len.to_string()
    }
}

/// Wall-clock window in market-local time, inclusive at both ends.
///
/// When `start > end` the window wraps past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeWindow {
    pub const fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// `[start, start + len]`
    pub fn starting_at(start: NaiveTime, len: RangeLength) -> Self {
        let (end, _) = start.overflowing_add_signed(len.duration());
        Self { start, end }
    }

    pub fn contains(&self, t: NaiveTime) -> bool {
        if self.start <= self.end {
            self.start <= t && t <= self.end
        } else {
            t >= self.start || t <= self.end
        }
    }
}

//! Calendar-session partitioning of a bar series.
//!
//! "Today" is always derived from the data (the latest session key present),
//! never from the wall clock; callers pass it explicitly to everything that
//! needs it.

use chrono::{DateTime, NaiveDate, NaiveTime};
use chrono_tz::Tz;
use tracing::{debug, warn};

use crate::errors::{Error, Result};
use crate::levels::extract;
use crate::models::{Bar, Extremes, TimeWindow};
use crate::tz::{DstPolicy, from_local_naive_with_policy};

/// Unique session keys present in `bars`, ascending.
pub fn distinct_session_dates(bars: &[Bar]) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = bars.iter().map(Bar::session_key).collect();
    dates.sort_unstable();
    dates.dedup();
    dates
}

/// The most recent session key.
///
/// Errors:
/// - [`Error::EmptySeries`] when `dates` is empty; callers should read this
///   as "no data available".
pub fn latest_session(dates: &[NaiveDate]) -> Result<NaiveDate> {
    dates.last().copied().ok_or(Error::EmptySeries)
}

/// High and low of the nearest session before `today` that traded during
/// regular hours.
///
/// Dates with no bars inside `regular_hours` (weekends, holidays, sessions
/// with only extended-hours prints) are skipped. `None` means no earlier
/// session in the series qualifies, which is expected on the first day of
/// a data window.
pub fn previous_trading_day(
    bars: &[Bar],
    today: NaiveDate,
    regular_hours: TimeWindow,
) -> Option<Extremes> {
    let dates = distinct_session_dates(bars);
    let earlier = dates.iter().rev().filter(|d| **d < today);
    let mut scanned = 0usize;
    for &date in earlier {
        scanned += 1;
        if let Some(ext) = extract(bars, date, regular_hours) {
            debug!(%date, high = ext.high, low = ext.low, "previous trading day found");
            return Some(ext);
        }
        debug!(%date, "no regular-hours bars, skipping");
    }
    warn!(%today, scanned, "no previous trading day with regular-hours data");
    None
}

/// Instant at which `today`'s session view starts (its pre-market open).
pub fn session_start(today: NaiveDate, premarket_open: NaiveTime, tz: Tz) -> Result<DateTime<Tz>> {
    from_local_naive_with_policy(today.and_time(premarket_open), tz, DstPolicy::ShiftForward)
}

/// Bars at or after `today`'s pre-market open.
///
/// Empty when the session has not started yet.
pub fn session_slice(
    bars: &[Bar],
    today: NaiveDate,
    premarket_open: NaiveTime,
    tz: Tz,
) -> Result<&[Bar]> {
    let start = session_start(today, premarket_open, tz)?;
    let from = bars.partition_point(|b| b.timestamp < start);
    Ok(&bars[from..])
}

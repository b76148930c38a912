//! Market time zone helpers.
//!
//! What this module provides:
//! - [`parse_tz`]: Resolve an IANA identifier (e.g., "America/New_York") to a [`Tz`];
//!   the `timezone` config field is deserialized through it.
//! - [`parse_market_ts`]: Parse an RFC-3339 timestamp with an explicit offset and
//!   express it in the market time zone.
//! - [`from_local_naive_with_policy`]: Resolve a naive market-local wall time to an
//!   instant, with a [`DstPolicy`] deciding what happens on DST gaps and overlaps.
//!
//! Notes:
//! - Ambiguous local times happen during “fall back” when a wall time occurs twice.
//! - Nonexistent local times happen during “spring forward” when a wall time is skipped.
//! - Session boundaries are wall times and are resolved with [`DstPolicy::ShiftForward`].
//!
//! Examples
//! - RFC-3339 with offset into New York time:
//!   "2024-03-11T13:30:00Z" -> 2024-03-11 09:30:00 EDT
//! - New York “fall back” ambiguity (2024-11-03 01:30 occurs twice):
//!   PreferEarliest -> 01:30 EDT, PreferLatest -> 01:30 EST.

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

use crate::errors::{Error, LocalTimeIssue, Result};

/// Policy for handling DST edge cases when resolving local naive timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DstPolicy {
    /// Error on ambiguous (fall-back) or nonexistent (spring-forward) local times.
    Strict,
    /// For ambiguous local times, pick the earlier instant.
    PreferEarliest,
    /// For ambiguous local times, pick the later instant.
    PreferLatest,
    /// For nonexistent local times, shift forward in one-minute increments until
    /// the first valid instant is found (capped at 2 hours). Ambiguous times
    /// resolve to the earlier instant.
    ShiftForward,
}

/// Resolve an IANA time zone identifier.
pub fn parse_tz(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| Error::InvalidTimeZone(name.to_string()))
}

/// RFC-3339 with offset -> market time zone.
///
/// The instant is preserved; only its local representation changes.
pub fn parse_market_ts(s: &str, tz: Tz) -> Result<DateTime<Tz>> {
    let dt = DateTime::parse_from_rfc3339(s).map_err(|e| Error::InvalidTimestamp {
        input: s.to_string(),
        reason: e.to_string(),
    })?;
    Ok(dt.with_timezone(&tz))
}

/// Resolve a naive market-local timestamp using a DST policy.
///
/// Errors:
/// - [`Error::LocalTime`] if the time is ambiguous or nonexistent and the
///   policy does not resolve it.
pub fn from_local_naive_with_policy(
    naive: NaiveDateTime,
    tz: Tz,
    policy: DstPolicy,
) -> Result<DateTime<Tz>> {
    use chrono::offset::LocalResult::*;
    let issue = |kind| Error::LocalTime { naive, tz, kind };
    match tz.from_local_datetime(&naive) {
        Single(dt) => Ok(dt),
        Ambiguous(a, b) => match policy {
            DstPolicy::PreferEarliest | DstPolicy::ShiftForward => Ok(a),
            DstPolicy::PreferLatest => Ok(b),
            DstPolicy::Strict => Err(issue(LocalTimeIssue::Ambiguous)),
        },
        None => match policy {
            DstPolicy::ShiftForward => {
                let mut t = naive;
                for _ in 0..120 {
                    t += Duration::minutes(1);
                    if let Single(dt) = tz.from_local_datetime(&t) {
                        return Ok(dt);
                    }
                }
                Err(issue(LocalTimeIssue::Nonexistent))
            }
            _ => Err(issue(LocalTimeIssue::Nonexistent)),
        },
    }
}

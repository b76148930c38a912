use chrono::{DateTime, NaiveDateTime};
use chrono_tz::Tz;
use thiserror::Error;

/// The unified error type for the `intraday_levels` crate.
///
/// Every variant is a broken caller contract. Missing market data (an empty
/// window, a short warm-up, zero volume) is never reported through this type;
/// it surfaces as `None` or an omitted key instead.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// The series holds no bars, so no session can be identified.
    #[error("Series is empty")]
    EmptySeries,

    /// Timestamps are not strictly increasing.
    #[error("Bar {index} at {current} does not follow {previous}")]
    UnorderedSeries {
        index: usize,
        previous: DateTime<Tz>,
        current: DateTime<Tz>,
    },

    /// A timestamp could not be parsed.
    #[error("Invalid timestamp {input:?}: {reason}")]
    InvalidTimestamp { input: String, reason: String },

    /// The time zone identifier is not a known IANA name.
    #[error("Unknown time zone: {0}")]
    InvalidTimeZone(String),

    /// A market-local wall time does not map to exactly one instant.
    #[error("Local time {naive} is {kind} in {tz}")]
    LocalTime {
        naive: NaiveDateTime,
        tz: Tz,
        kind: LocalTimeIssue,
    },

    /// An indicator period of zero was supplied.
    #[error("Invalid {name} period: {value}")]
    InvalidPeriod { name: &'static str, value: usize },

    /// A level name outside the fixed vocabulary.
    #[error("Unknown level name: {0}")]
    UnknownLevelName(String),

    /// A configuration value is out of range or inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Why a local wall time failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalTimeIssue {
    /// Falls in a spring-forward gap.
    Nonexistent,
    /// Occurs twice during a fall-back transition.
    Ambiguous,
}

impl std::fmt::Display for LocalTimeIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocalTimeIssue::Nonexistent => f.write_str("nonexistent"),
            LocalTimeIssue::Ambiguous => f.write_str("ambiguous"),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

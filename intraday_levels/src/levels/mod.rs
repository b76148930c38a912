//! Session-relative price levels.
//!
//! Pre-market and both opening ranges share one filter-then-extract step,
//! driven by the table in [`level_windows`]. Previous-day levels come from
//! [`crate::session::previous_trading_day`].

pub mod merge;

use chrono::NaiveDate;
use tracing::debug;

use crate::config::MarketConfig;
use crate::errors::Result;
use crate::models::{Bar, Extremes, LevelName, LevelSet, TimeWindow};
use crate::session::{distinct_session_dates, latest_session, previous_trading_day};

pub use merge::merge;

/// A time-of-day window and the level names its extremes are stored under.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamedWindow {
    pub window: TimeWindow,
    pub high: LevelName,
    pub low: LevelName,
}

/// The same-day windows: pre-market, short opening range, long opening range.
pub fn level_windows(cfg: &MarketConfig) -> [NamedWindow; 3] {
    [
        NamedWindow {
            window: cfg.premarket_window(),
            high: LevelName::PmHigh,
            low: LevelName::PmLow,
        },
        NamedWindow {
            window: cfg.orb_short_window(),
            high: LevelName::Orb5High,
            low: LevelName::Orb5Low,
        },
        NamedWindow {
            window: cfg.orb_long_window(),
            high: LevelName::Orb15High,
            low: LevelName::Orb15Low,
        },
    ]
}

/// Max high and min low over `bars`, or `None` if there are none.
pub fn extremes<'a>(bars: impl IntoIterator<Item = &'a Bar>) -> Option<Extremes> {
    bars.into_iter().fold(None, |acc, b| match acc {
        None => Some(Extremes {
            high: b.high,
            low: b.low,
        }),
        Some(e) => Some(Extremes {
            high: e.high.max(b.high),
            low: e.low.min(b.low),
        }),
    })
}

/// Extremes of the bars inside `window` on `target_date`.
///
/// Bars are filtered by time of day first and by session key second, so one
/// window definition serves every date in the series.
pub fn extract(bars: &[Bar], target_date: NaiveDate, window: TimeWindow) -> Option<Extremes> {
    extremes(
        bars.iter()
            .filter(|b| window.contains(b.time_of_day()))
            .filter(|b| b.session_key() == target_date),
    )
}

/// All levels for an explicit `today`. Levels that cannot be computed are
/// left out.
///
/// Errors:
/// - any [`MarketConfig::validate`] failure for `cfg`
pub fn calculate_levels_for(
    bars: &[Bar],
    today: NaiveDate,
    cfg: &MarketConfig,
) -> Result<LevelSet> {
    cfg.validate()?;
    let mut levels = LevelSet::new();
    levels.insert_extremes(
        LevelName::Pdh,
        LevelName::Pdl,
        previous_trading_day(bars, today, cfg.regular_session_window()),
    );
    for nw in level_windows(cfg) {
        levels.insert_extremes(nw.high, nw.low, extract(bars, today, nw.window));
    }
    debug!(%today, count = levels.len(), "levels calculated");
    Ok(levels)
}

/// All levels for the latest session in `bars`.
///
/// Errors:
/// - [`crate::Error::EmptySeries`] when there are no bars at all.
/// - any [`MarketConfig::validate`] failure for `cfg`
pub fn calculate_levels(bars: &[Bar], cfg: &MarketConfig) -> Result<LevelSet> {
    let today = latest_session(&distinct_session_dates(bars))?;
    calculate_levels_for(bars, today, cfg)
}

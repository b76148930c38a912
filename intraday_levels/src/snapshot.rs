//! One-call analysis of a bar series: levels, indicators and signals for
//! the latest session.

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use serde::Serialize;
use tracing::info;

use crate::config::MarketConfig;
use crate::errors::Result;
use crate::indicators::{
    IndicatorSet, RsiThresholds, Signals, calculate_indicators, get_indicator_signals,
};
use crate::levels::{calculate_levels_for, merge};
use crate::models::{BarDirection, BarSeries, LevelSet};
use crate::session::{distinct_session_dates, latest_session, session_slice, session_start};
use crate::summary::LevelSummary;

/// Everything the presentation layer needs for the latest session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    /// Latest session key in the series.
    pub today: NaiveDate,
    /// Pre-market open of `today`; indicators start here.
    pub session_start: DateTime<Tz>,
    /// Levels before opening-range merging.
    pub levels: LevelSet,
    /// Levels after opening-range merging.
    pub merged_levels: LevelSet,
    /// Indicators over today's bars from pre-market open.
    pub indicators: IndicatorSet,
    pub signals: Signals,
    /// Close of the last bar in today's slice.
    pub current_price: Option<f64>,
    /// Per-bar direction of today's slice.
    pub directions: Vec<BarDirection>,
}

impl SessionSnapshot {
    /// Number of bars the indicators were computed over.
    pub fn session_len(&self) -> usize {
        self.directions.len()
    }

    /// Text payload of merged levels, once today's session has a price.
    pub fn summary(&self) -> Option<LevelSummary<'_>> {
        self.current_price
            .map(|p| LevelSummary::new(&self.merged_levels, p))
    }
}

/// Analyze the latest session of `series`.
///
/// Errors:
/// - [`crate::Error::EmptySeries`] when `series` has no bars
/// - [`crate::Error::InvalidPeriod`] / [`crate::Error::Config`] when `cfg`
///   fails [`MarketConfig::validate`]
pub fn analyze(series: &BarSeries, cfg: &MarketConfig) -> Result<SessionSnapshot> {
    cfg.validate()?;
    let bars = series.bars();
    let today = latest_session(&distinct_session_dates(bars))?;

    let levels = calculate_levels_for(bars, today, cfg)?;
    let merged_levels = merge(&levels);

    let start = session_start(today, cfg.premarket_open, cfg.timezone)?;
    let today_bars = session_slice(bars, today, cfg.premarket_open, cfg.timezone)?;
    if today_bars.is_empty() {
        info!(%today, "session has no bars from pre-market open yet");
    }

    let indicators = calculate_indicators(today_bars, cfg)?;
    let signals = get_indicator_signals(&indicators, RsiThresholds::from(cfg));

    Ok(SessionSnapshot {
        today,
        session_start: start,
        levels,
        merged_levels,
        indicators,
        signals,
        current_price: today_bars.last().map(|b| b.close),
        directions: today_bars.iter().map(|b| b.direction()).collect(),
    })
}

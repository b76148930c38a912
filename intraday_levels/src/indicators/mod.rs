//! Momentum and trend indicators over a bar slice.
//!
//! Every series is aligned one-to-one with its input. Points that cannot be
//! computed (warm-up, zero volume, zero movement) are `None`, never a
//! sentinel number.

pub mod macd;
pub mod rsi;
pub mod signals;
pub mod vwap;

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::MarketConfig;
use crate::errors::Result;
use crate::models::Bar;

pub use macd::{Macd, ema, macd};
pub use rsi::rsi;
pub use signals::{MacdSignal, RsiSignal, RsiThresholds, Signals, get_indicator_signals};
pub use vwap::vwap;

/// Indicator values aligned with the bars they came from.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct IndicatorSeries(Vec<Option<f64>>);

impl IndicatorSeries {
    pub fn values(&self) -> &[Option<f64>] {
        &self.0
    }

    pub fn get(&self, i: usize) -> Option<f64> {
        self.0.get(i).copied().flatten()
    }

    /// Value at the last position; `None` if empty or undefined there.
    pub fn latest(&self) -> Option<f64> {
        self.0.last().copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Option<f64>>> for IndicatorSeries {
    fn from(v: Vec<Option<f64>>) -> Self {
        Self(v)
    }
}

impl From<Vec<f64>> for IndicatorSeries {
    fn from(v: Vec<f64>) -> Self {
        Self(v.into_iter().map(Some).collect())
    }
}

impl FromIterator<Option<f64>> for IndicatorSeries {
    fn from_iter<I: IntoIterator<Item = Option<f64>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The full indicator payload for one slice of bars.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct IndicatorSet {
    pub rsi: IndicatorSeries,
    pub vwap: IndicatorSeries,
    pub macd: IndicatorSeries,
    pub macd_signal: IndicatorSeries,
    pub macd_histogram: IndicatorSeries,
}

impl IndicatorSet {
    /// Series keyed by their payload names, in presentation order.
    pub fn as_map(&self) -> IndexMap<&'static str, &IndicatorSeries> {
        IndexMap::from([
            ("rsi", &self.rsi),
            ("vwap", &self.vwap),
            ("macd", &self.macd),
            ("macd_signal", &self.macd_signal),
            ("macd_histogram", &self.macd_histogram),
        ])
    }
}

/// RSI, VWAP and MACD over `bars` with the configured periods.
///
/// Errors:
/// - [`crate::Error::InvalidPeriod`] for any zero period.
pub fn calculate_indicators(bars: &[Bar], cfg: &MarketConfig) -> Result<IndicatorSet> {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let Macd {
        line,
        signal,
        histogram,
    } = macd(&closes, cfg.macd_fast, cfg.macd_slow, cfg.macd_signal)?;
    Ok(IndicatorSet {
        rsi: rsi(&closes, cfg.rsi_period)?,
        vwap: vwap(bars),
        macd: line,
        macd_signal: signal,
        macd_histogram: histogram,
    })
}

pub(crate) fn check_period(name: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(crate::Error::InvalidPeriod { name, value });
    }
    Ok(())
}

//! Reduce the latest indicator values to categorical readings.

use std::fmt;

use serde::Serialize;

use crate::config::MarketConfig;
use crate::indicators::IndicatorSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RsiSignal {
    Overbought,
    Oversold,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MacdSignal {
    Bullish,
    Bearish,
    Neutral,
}

impl fmt::Display for RsiSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RsiSignal::Overbought => "Overbought",
            RsiSignal::Oversold => "Oversold",
            RsiSignal::Neutral => "Neutral",
        };
        f.write_str(s)
    }
}

impl fmt::Display for MacdSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MacdSignal::Bullish => "Bullish",
            MacdSignal::Bearish => "Bearish",
            MacdSignal::Neutral => "Neutral",
        };
        f.write_str(s)
    }
}

/// RSI bands; both comparisons are strict.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RsiThresholds {
    pub overbought: f64,
    pub oversold: f64,
}

impl Default for RsiThresholds {
    fn default() -> Self {
        Self {
            overbought: 70.0,
            oversold: 30.0,
        }
    }
}

impl From<&MarketConfig> for RsiThresholds {
    fn from(cfg: &MarketConfig) -> Self {
        Self {
            overbought: cfg.rsi_overbought,
            oversold: cfg.rsi_oversold,
        }
    }
}

impl RsiThresholds {
    pub fn classify(&self, rsi: f64) -> RsiSignal {
        if rsi > self.overbought {
            RsiSignal::Overbought
        } else if rsi < self.oversold {
            RsiSignal::Oversold
        } else {
            RsiSignal::Neutral
        }
    }
}

pub fn classify_macd(histogram: f64) -> MacdSignal {
    if histogram > 0.0 {
        MacdSignal::Bullish
    } else if histogram < 0.0 {
        MacdSignal::Bearish
    } else {
        MacdSignal::Neutral
    }
}

/// Readings derived from the last point of each series.
///
/// A field is `None` (and left out when serialized) when its series has no
/// value at the last position.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Signals {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi_signal: Option<RsiSignal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd_signal: Option<MacdSignal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd_histogram_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vwap_value: Option<f64>,
}

pub fn get_indicator_signals(indicators: &IndicatorSet, thresholds: RsiThresholds) -> Signals {
    let rsi_value = indicators.rsi.latest();
    let macd_histogram_value = indicators.macd_histogram.latest();
    Signals {
        rsi_signal: rsi_value.map(|v| thresholds.classify(v)),
        rsi_value,
        macd_signal: macd_histogram_value.map(classify_macd),
        macd_histogram_value,
        vwap_value: indicators.vwap.latest(),
    }
}

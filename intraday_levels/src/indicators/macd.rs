//! Exponential moving averages and MACD.

use serde::Serialize;

use crate::errors::Result;
use crate::indicators::{IndicatorSeries, check_period};

/// MACD line, its signal line and their difference.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Macd {
    pub line: IndicatorSeries,
    pub signal: IndicatorSeries,
    pub histogram: IndicatorSeries,
}

/// EMA seeded with the first value, `alpha = 2 / (period + 1)`.
///
/// Defined at every index; there is no warm-up gap.
pub fn ema(values: &[f64], period: usize) -> Result<Vec<f64>> {
    check_period("ema", period)?;
    let alpha = 2.0 / (period as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut prev: Option<f64> = None;
    for &x in values {
        let next = match prev {
            None => x,
            Some(p) => alpha * x + (1.0 - alpha) * p,
        };
        out.push(next);
        prev = Some(next);
    }
    Ok(out)
}

/// `ema(fast) - ema(slow)`, smoothed by `ema(signal)`.
pub fn macd(closes: &[f64], fast: usize, slow: usize, signal: usize) -> Result<Macd> {
    check_period("macd fast", fast)?;
    check_period("macd slow", slow)?;
    check_period("macd signal", signal)?;

    let fast = ema(closes, fast)?;
    let slow = ema(closes, slow)?;
    let line: Vec<f64> = fast.iter().zip(&slow).map(|(f, s)| f - s).collect();
    let signal = ema(&line, signal)?;
    let histogram: Vec<f64> = line.iter().zip(&signal).map(|(l, s)| l - s).collect();

    Ok(Macd {
        line: line.into(),
        signal: signal.into(),
        histogram: histogram.into(),
    })
}

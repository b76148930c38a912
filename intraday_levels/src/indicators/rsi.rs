//! Relative Strength Index with simple (rolling mean) averaging.

use crate::errors::Result;
use crate::indicators::{IndicatorSeries, check_period};

/// RSI over `closes`.
///
/// The delta at index 0 is undefined, so the first `period` entries are
/// `None`; entry `i` averages the `period` deltas ending at `i`.
///
/// Flat windows: zero average loss with a positive average gain is 100;
/// zero gain and zero loss is `None`.
pub fn rsi(closes: &[f64], period: usize) -> Result<IndicatorSeries> {
    check_period("rsi", period)?;
    let mut gains = Vec::with_capacity(closes.len());
    let mut losses = Vec::with_capacity(closes.len());
    for w in closes.windows(2) {
        let delta = w[1] - w[0];
        gains.push(delta.max(0.0));
        losses.push((-delta).max(0.0));
    }

    let mut out = vec![None; closes.len()];
    // gains[j] is the delta ending at close j + 1
    for i in period..closes.len() {
        let span = i - period..i;
        let avg_gain = gains[span.clone()].iter().sum::<f64>() / period as f64;
        let avg_loss = losses[span].iter().sum::<f64>() / period as f64;
        out[i] = from_averages(avg_gain, avg_loss);
    }
    Ok(out.into())
}

fn from_averages(avg_gain: f64, avg_loss: f64) -> Option<f64> {
    if avg_loss == 0.0 {
        return (avg_gain > 0.0).then_some(100.0);
    }
    let rs = avg_gain / avg_loss;
    let value = 100.0 - 100.0 / (1.0 + rs);
    value.is_finite().then_some(value)
}

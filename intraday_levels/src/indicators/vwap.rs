//! Cumulative volume-weighted average price.

use crate::indicators::IndicatorSeries;
use crate::models::Bar;

/// VWAP from the first bar onward.
///
/// A point is `None` while cumulative volume is still zero.
pub fn vwap(bars: &[Bar]) -> IndicatorSeries {
    let mut pv = 0.0;
    let mut vol = 0.0;
    bars.iter()
        .map(|b| {
            let v = b.volume as f64;
            pv += b.typical_price() * v;
            vol += v;
            (vol > 0.0).then(|| pv / vol)
        })
        .collect()
}

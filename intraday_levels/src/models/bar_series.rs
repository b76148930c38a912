//! An ordered, validated run of bars for a single instrument.

use std::ops::Deref;

use serde::Serialize;

use crate::errors::{Error, Result};
use crate::models::bar::Bar;

/// Bars in strictly increasing timestamp order.
///
/// Ordering is checked once on construction; every calculation downstream
/// relies on it and never re-sorts. Gaps between bars are allowed.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct BarSeries {
    bars: Vec<Bar>,
}

impl BarSeries {
    /// Validate ordering and take ownership of `bars`.
    ///
    /// Errors:
    /// - [`Error::UnorderedSeries`] on the first bar whose timestamp is not
    ///   strictly after its predecessor (duplicates included).
    pub fn new(bars: Vec<Bar>) -> Result<Self> {
        if let Some(index) = bars
            .windows(2)
            .position(|w| w[1].timestamp <= w[0].timestamp)
        {
            return Err(Error::UnorderedSeries {
                index: index + 1,
                previous: bars[index].timestamp,
                current: bars[index + 1].timestamp,
            });
        }
        Ok(Self { bars })
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn into_bars(self) -> Vec<Bar> {
        self.bars
    }

    /// Close prices in series order.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }
}

impl Deref for BarSeries {
    type Target = [Bar];

    fn deref(&self) -> &Self::Target {
        &self.bars
    }
}

impl TryFrom<Vec<Bar>> for BarSeries {
    type Error = Error;

    fn try_from(bars: Vec<Bar>) -> Result<Self> {
        Self::new(bars)
    }
}

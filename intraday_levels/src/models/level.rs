//! Named price levels and the set they are collected into.

use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// The fixed vocabulary of level names.
///
/// `Orb5*` and `Orb15*` always denote the short and long opening-range
/// windows, whatever lengths are configured for them. Declaration order is
/// the canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LevelName {
    #[serde(rename = "PDH")]
    Pdh,
    #[serde(rename = "PDL")]
    Pdl,
    #[serde(rename = "PM_High")]
    PmHigh,
    #[serde(rename = "PM_Low")]
    PmLow,
    #[serde(rename = "ORB_5_High")]
    Orb5High,
    #[serde(rename = "ORB_5_Low")]
    Orb5Low,
    #[serde(rename = "ORB_15_High")]
    Orb15High,
    #[serde(rename = "ORB_15_Low")]
    Orb15Low,
    #[serde(rename = "ORB_5/15_High")]
    Orb5And15High,
    #[serde(rename = "ORB_5/15_Low")]
    Orb5And15Low,
}

impl LevelName {
    pub const ALL: [LevelName; 10] = [
        LevelName::Pdh,
        LevelName::Pdl,
        LevelName::PmHigh,
        LevelName::PmLow,
        LevelName::Orb5High,
        LevelName::Orb5Low,
        LevelName::Orb15High,
        LevelName::Orb15Low,
        LevelName::Orb5And15High,
        LevelName::Orb5And15Low,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            LevelName::Pdh => "PDH",
            LevelName::Pdl => "PDL",
            LevelName::PmHigh => "PM_High",
            LevelName::PmLow => "PM_Low",
            LevelName::Orb5High => "ORB_5_High",
            LevelName::Orb5Low => "ORB_5_Low",
            LevelName::Orb15High => "ORB_15_High",
            LevelName::Orb15Low => "ORB_15_Low",
            LevelName::Orb5And15High => "ORB_5/15_High",
            LevelName::Orb5And15Low => "ORB_5/15_Low",
        }
    }
}

impl fmt::Display for LevelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LevelName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LevelName::ALL
            .into_iter()
            .find(|n| n.as_str() == s)
            .ok_or_else(|| Error::UnknownLevelName(s.to_string()))
    }
}

/// High and low of one window on one session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extremes {
    pub high: f64,
    pub low: f64,
}

/// One named level with its price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Level {
    pub name: LevelName,
    pub price: f64,
}

/// Level name -> price. A level that could not be computed has no entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelSet {
    levels: BTreeMap<LevelName, f64>,
}

impl LevelSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: LevelName) -> Option<f64> {
        self.levels.get(&name).copied()
    }

    pub fn contains(&self, name: LevelName) -> bool {
        self.levels.contains_key(&name)
    }

    pub fn insert(&mut self, name: LevelName, price: f64) -> Option<f64> {
        self.levels.insert(name, price)
    }

    pub fn remove(&mut self, name: LevelName) -> Option<f64> {
        self.levels.remove(&name)
    }

    /// Record both sides of a window, or nothing when the window was empty.
    pub fn insert_extremes(&mut self, high: LevelName, low: LevelName, ext: Option<Extremes>) {
        if let Some(Extremes { high: h, low: l }) = ext {
            self.levels.insert(high, h);
            self.levels.insert(low, l);
        }
    }

    /// Levels in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Level> + '_ {
        self.levels
            .iter()
            .map(|(&name, &price)| Level { name, price })
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl FromIterator<(LevelName, f64)> for LevelSet {
    fn from_iter<I: IntoIterator<Item = (LevelName, f64)>>(iter: I) -> Self {
        Self {
            levels: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_strings() {
        for name in LevelName::ALL {
            assert_eq!(name.as_str().parse::<LevelName>().unwrap(), name);
        }
        assert_eq!(
            "ORB_30_High".parse::<LevelName>().unwrap_err(),
            Error::UnknownLevelName("ORB_30_High".into())
        );
    }

    #[test]
    fn absent_extremes_add_nothing() {
        let mut set = LevelSet::new();
        set.insert_extremes(LevelName::PmHigh, LevelName::PmLow, None);
        assert!(set.is_empty());

        set.insert_extremes(
            LevelName::PmHigh,
            LevelName::PmLow,
            Some(Extremes {
                high: 2.0,
                low: 1.0
            }),
        );
        assert_eq!(set.get(LevelName::PmHigh), Some(2.0));
        assert_eq!(set.get(LevelName::PmLow), Some(1.0));
    }

    #[test]
    fn iterates_in_canonical_order() {
        let set: LevelSet = [
            (LevelName::Orb15Low, 3.0),
            (LevelName::Pdh, 1.0),
            (LevelName::PmLow, 2.0),
        ]
        .into_iter()
        .collect();
        let names: Vec<_> = set.iter().map(|l| l.name).collect();
        assert_eq!(names, vec![LevelName::Pdh, LevelName::PmLow, LevelName::Orb15Low]);
    }
}

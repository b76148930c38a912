//! Plain-text rendering of levels for downstream summarizers.

use std::fmt;

use crate::models::LevelSet;

/// Current price plus the present, non-zero levels, one per line.
///
/// ```text
/// Current Price: 101.25
///
/// Key Levels:
///   PDH: 105.00
///   PM_High: 102.10
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LevelSummary<'a> {
    pub levels: &'a LevelSet,
    pub current_price: f64,
}

impl<'a> LevelSummary<'a> {
    pub fn new(levels: &'a LevelSet, current_price: f64) -> Self {
        Self {
            levels,
            current_price,
        }
    }
}

impl fmt::Display for LevelSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current Price: {:.2}", self.current_price)?;
        writeln!(f)?;
        write!(f, "Key Levels:")?;
        for level in self.levels.iter().filter(|l| l.price != 0.0) {
            write!(f, "\n  {}: {:.2}", level.name, level.price)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LevelName;

    #[test]
    fn renders_in_canonical_order_skipping_zero() {
        let levels: LevelSet = [
            (LevelName::Orb5And15High, 101.5),
            (LevelName::Pdh, 105.0),
            (LevelName::PmLow, 0.0),
        ]
        .into_iter()
        .collect();
        let text = LevelSummary::new(&levels, 101.254).to_string();
        assert_eq!(
            text,
            "Current Price: 101.25\n\nKey Levels:\n  PDH: 105.00\n  ORB_5/15_High: 101.50"
        );
    }
}

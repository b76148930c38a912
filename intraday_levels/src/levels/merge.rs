//! Collapse opening-range levels that landed on the same price.

use crate::models::{LevelName, LevelSet};

const PAIRS: [(LevelName, LevelName, LevelName); 2] = [
    (
        LevelName::Orb5High,
        LevelName::Orb15High,
        LevelName::Orb5And15High,
    ),
    (
        LevelName::Orb5Low,
        LevelName::Orb15Low,
        LevelName::Orb5And15Low,
    ),
];

/// Replace equal short/long opening-range levels with one combined level.
///
/// Highs and lows are handled independently and equality is exact. The
/// input is left untouched.
pub fn merge(levels: &LevelSet) -> LevelSet {
    let mut out = levels.clone();
    for (short, long, combined) in PAIRS {
        match (out.get(short), out.get(long)) {
            (Some(a), Some(b)) if a == b => {
                out.remove(short);
                out.remove(long);
                out.insert(combined, a);
            }
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn merges_highs_keeps_unequal_lows() {
        let levels: LevelSet = [
            (LevelName::Orb5High, 101.50),
            (LevelName::Orb15High, 101.50),
            (LevelName::Orb5Low, 100.00),
            (LevelName::Orb15Low, 100.25),
        ]
        .into_iter()
        .collect();

        let merged = merge(&levels);
        let want: LevelSet = [
            (LevelName::Orb5And15High, 101.50),
            (LevelName::Orb5Low, 100.00),
            (LevelName::Orb15Low, 100.25),
        ]
        .into_iter()
        .collect();
        assert_eq!(merged, want);
        // the pre-merge set is still intact
        assert_eq!(levels.len(), 4);
    }

    #[test]
    fn one_sided_pair_is_left_alone() {
        let levels: LevelSet = [(LevelName::Orb5Low, 99.0), (LevelName::Pdl, 99.0)]
            .into_iter()
            .collect();
        assert_eq!(merge(&levels), levels);
    }

    fn arb_levels() -> impl Strategy<Value = LevelSet> {
        // small price alphabet so equal pairs actually occur
        proptest::collection::vec(
            (0..LevelName::ALL.len(), prop_oneof![Just(1.0), Just(2.0), Just(2.5)]),
            0..12,
        )
        .prop_map(|entries| {
            entries
                .into_iter()
                .map(|(i, p)| (LevelName::ALL[i], p))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn merge_is_idempotent(levels in arb_levels()) {
            let once = merge(&levels);
            prop_assert_eq!(merge(&once), once);
        }

        #[test]
        fn merge_never_leaves_an_equal_pair(levels in arb_levels()) {
            let merged = merge(&levels);
            for (short, long, _) in PAIRS {
                if let (Some(a), Some(b)) = (merged.get(short), merged.get(long)) {
                    prop_assert!(a != b);
                }
            }
        }
    }
}

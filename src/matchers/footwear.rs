use itertools::Itertools;

use crate::knowledge::{footwear, normalize_phrase};
use crate::matchers::{Verdict, contains_any};

const SLIM_PAIRS: &[&str] = &["loafers", "derbies", "clean sneakers", "chelsea boots"];
const WIDE_PAIRS: &[&str] = &["chunky sneakers", "chelsea boots", "brogues"];

/// Shoes that pair well with each trouser fit.
const TROUSER_SHOE_PAIRS: &[(&str, &[&str])] = &[
    ("slim", SLIM_PAIRS),
    ("tapered", SLIM_PAIRS),
    (
        "regular",
        &["loafers", "brogues", "clean sneakers", "oxford", "derby"],
    ),
    ("wide", WIDE_PAIRS),
    ("relaxed", WIDE_PAIRS),
    ("formal tailored", &["oxford", "derby"]),
];

/// Shoes that break the line of each trouser fit.
const TROUSER_SHOE_FORBIDDEN: &[(&str, &[&str])] =
    &[("formal tailored", &["loafers", "sneakers"])];

fn table_entry(table: &[(&str, &'static [&'static str])], key: &str) -> &'static [&'static str] {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|&(_, v)| v)
        .unwrap_or(&[])
}

/// Shoes that pair well with a trouser fit, empty for an unknown fit.
pub fn shoes_for_trouser_fit(trouser_fit: &str) -> &'static [&'static str] {
    table_entry(TROUSER_SHOE_PAIRS, &normalize_phrase(trouser_fit))
}

pub fn trouser_shoe(trouser_fit: &str, shoe_type: &str) -> Verdict {
    let fit = normalize_phrase(trouser_fit);
    let shoe = normalize_phrase(shoe_type);
    if shoe.is_empty() {
        return Verdict::ok();
    }

    if contains_any(&shoe, table_entry(TROUSER_SHOE_FORBIDDEN, &fit)) {
        return Verdict::flag(format!(
            "'{}' is not appropriate with {} trousers. Recommended: {}.",
            shoe_type,
            trouser_fit,
            shoes_for_trouser_fit(&fit).iter().take(3).join(", ")
        ));
    }
    Verdict::ok()
}

/// Checks a shoe against the occasion's forbidden list. Matching runs both
/// ways so "sneakers" catches "white sneakers" and "dress shoes" catches
/// "shoes".
pub fn footwear_for_occasion(shoe_type: &str, occasion: &str) -> Verdict {
    let shoe = normalize_phrase(shoe_type);
    if shoe.is_empty() {
        return Verdict::ok();
    }
    let Some(rules) = footwear::rules_for(occasion) else {
        return Verdict::ok();
    };

    if rules
        .forbidden
        .iter()
        .any(|f| shoe.contains(f) || f.contains(shoe.as_str()))
    {
        return Verdict::flag(format!(
            "'{}' is not appropriate for {}. Recommended: {}.",
            shoe_type,
            occasion,
            rules.allowed.iter().take(3).join(", ")
        ));
    }
    Verdict::ok()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::knowledge::occasion::OCCASIONS;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_forbidden_shoes_are_flagged(idx in 0usize..OCCASIONS.len()) {
            let occasion = OCCASIONS[idx];
            if let Some(rules) = footwear::rules_for(occasion) {
                for forbidden in rules.forbidden {
                    prop_assert!(footwear_for_occasion(forbidden, occasion).is_flagged());
                }
            }
        }

        #[test]
        fn prop_reason_empty_iff_appropriate(
            fit in "[a-z ]{0,16}",
            shoe in "[a-z ]{0,16}",
            idx in 0usize..OCCASIONS.len(),
        ) {
            for v in [trouser_shoe(&fit, &shoe), footwear_for_occasion(&shoe, OCCASIONS[idx])] {
                prop_assert_eq!(v.appropriate, v.reason.is_empty());
            }
        }
    }
}

use crate::advisor::{RemarkLog, note};
use crate::knowledge::footwear;
use crate::models::{BodyZone, OutfitBreakdown, Remark, RemarkCategory, Score, Severity};

/// Condition and occasion remarks for the shoes. Empty when the feet are not
/// in frame.
pub fn footwear_remarks(breakdown: &OutfitBreakdown) -> Vec<Remark> {
    let fw = &breakdown.footwear_analysis;
    let mut log = RemarkLog::new();
    if !fw.visible {
        return log.into_remarks();
    }

    let assessment = footwear::assess_condition(&fw.condition);
    if let Some(severity) = assessment.severity {
        log.push(
            severity,
            RemarkCategory::Condition,
            BodyZone::Feet,
            note(
                &fw.kind,
                assessment.issue,
                assessment.shoe_care_note,
                "Shoe condition is noticed immediately, it anchors or undermines everything.",
            ),
        );
    }

    if !fw.issue.is_empty() {
        log.push(
            Severity::Moderate,
            RemarkCategory::Footwear,
            BodyZone::Feet,
            note(
                &fw.kind,
                &fw.issue,
                &fw.recommended_instead,
                "Footwear must speak the same style language as the garment.",
            ),
        );
    }

    log.into_remarks()
}

/// Footwear score. Condition outranks the match flags and hidden feet score
/// a neutral 5.
pub fn footwear_score(breakdown: &OutfitBreakdown) -> Score {
    let fw = &breakdown.footwear_analysis;
    if !fw.visible {
        return Score::clamped(5);
    }
    let score = match footwear::normalize_condition(&fw.condition).as_str() {
        "dirty" | "worn out" | "sole peeling" => 2,
        "scuffed" | "yellowed sole" => 5,
        _ => match (fw.occasion_match, fw.outfit_match) {
            (true, true) => 8,
            (true, false) | (false, true) => 6,
            (false, false) => 4,
        },
    };
    Score::clamped(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::breakdown;

    #[test]
    fn test_hidden_feet_give_nothing() {
        let mut b = breakdown();
        b.footwear_analysis.visible = false;
        b.footwear_analysis.condition = "dirty".to_string();
        b.footwear_analysis.issue = "Wrong shoes".to_string();
        assert!(footwear_remarks(&b).is_empty());
        assert_eq!(footwear_score(&b).value(), 5);
    }

    #[test]
    fn test_condition_then_issue() {
        let mut b = breakdown();
        b.footwear_analysis.condition = "sole peeling".to_string();
        b.footwear_analysis.issue = "Derbies read too formal".to_string();
        b.footwear_analysis.recommended_instead = "Clean white sneakers".to_string();

        let remarks = footwear_remarks(&b);
        assert_eq!(remarks.len(), 2);
        assert_eq!(remarks[0].severity, Severity::Critical);
        assert_eq!(remarks[0].category, RemarkCategory::Condition);
        assert_eq!(remarks[0].element, "derby");
        assert_eq!(remarks[1].severity, Severity::Moderate);
        assert_eq!(remarks[1].fix, "Clean white sneakers");
        assert_eq!(remarks[1].priority_order.get(), 2);
        assert!(remarks.iter().all(|r| r.body_zone == BodyZone::Feet));
    }

    #[test]
    fn test_clean_shoes_no_remarks() {
        assert!(footwear_remarks(&breakdown()).is_empty());
    }

    #[test]
    fn test_unknown_condition_is_moderate() {
        let mut b = breakdown();
        b.footwear_analysis.condition = "muddy".to_string();
        let remarks = footwear_remarks(&b);
        assert_eq!(remarks.len(), 1);
        assert_eq!(remarks[0].severity, Severity::Moderate);
    }

    #[test]
    fn test_footwear_score_table() {
        let mut b = breakdown();
        assert_eq!(footwear_score(&b).value(), 8);

        b.footwear_analysis.outfit_match = false;
        assert_eq!(footwear_score(&b).value(), 6);

        b.footwear_analysis.occasion_match = false;
        assert_eq!(footwear_score(&b).value(), 4);

        b.footwear_analysis.condition = "Scuffed".to_string();
        assert_eq!(footwear_score(&b).value(), 5);

        b.footwear_analysis.occasion_match = true;
        b.footwear_analysis.outfit_match = true;
        b.footwear_analysis.condition = "worn out".to_string();
        assert_eq!(footwear_score(&b).value(), 2);
    }

    #[test]
    fn test_separated_conditions_score_and_remark_alike() {
        let mut b = breakdown();
        for condition in ["worn-out", "sole_peeling", "Sole-Peeling"] {
            b.footwear_analysis.condition = condition.to_string();
            assert_eq!(footwear_score(&b).value(), 2, "{condition}");
            let remarks = footwear_remarks(&b);
            assert_eq!(remarks[0].severity, Severity::Critical, "{condition}");
        }

        b.footwear_analysis.condition = "yellowed-sole".to_string();
        assert_eq!(footwear_score(&b).value(), 5);
        assert_eq!(footwear_remarks(&b)[0].severity, Severity::Moderate);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::test_support::breakdown;
    use proptest::prelude::*;

    fn condition_strategy() -> impl Strategy<Value = &'static str> {
        prop_oneof![
            Just("clean"),
            Just("scuffed"),
            Just("dirty"),
            Just("worn out"),
            Just("sole peeling"),
            Just("yellowed sole"),
            Just("muddy"),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_score_in_known_set(
            visible in any::<bool>(),
            condition in condition_strategy(),
            occasion_match in any::<bool>(),
            outfit_match in any::<bool>(),
        ) {
            let mut b = breakdown();
            b.footwear_analysis.visible = visible;
            b.footwear_analysis.condition = condition.to_string();
            b.footwear_analysis.occasion_match = occasion_match;
            b.footwear_analysis.outfit_match = outfit_match;

            let score = footwear_score(&b).value();
            prop_assert!([2, 4, 5, 6, 8].contains(&score));
            if !visible {
                prop_assert_eq!(score, 5);
                prop_assert!(footwear_remarks(&b).is_empty());
            }
        }

        #[test]
        fn prop_priorities_are_sequential(
            condition in condition_strategy(),
            issue in "[a-z ]{0,12}",
        ) {
            let mut b = breakdown();
            b.footwear_analysis.condition = condition.to_string();
            b.footwear_analysis.issue = issue;
            let remarks = footwear_remarks(&b);
            for (i, r) in remarks.iter().enumerate() {
                prop_assert_eq!(r.priority_order.get() as usize, i + 1);
            }
        }
    }
}

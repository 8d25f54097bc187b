use itertools::Itertools;

use crate::advisor::{RemarkLog, note};
use crate::knowledge::{body, color, fabric, normalize_phrase, occasion};
use crate::matchers::{footwear as footwear_match, garment};
use crate::models::{
    BodyZone, GarmentCategory, OutfitBreakdown, Remark, RemarkCategory, Severity, UserProfile,
};

const TOPS: &[GarmentCategory] = &[
    GarmentCategory::Top,
    GarmentCategory::EthnicTop,
    GarmentCategory::FullGarment,
];
const BOTTOMS: &[GarmentCategory] = &[GarmentCategory::Bottom, GarmentCategory::EthnicBottom];
const OUTER_LAYERS: &[GarmentCategory] = &[GarmentCategory::Outerwear, GarmentCategory::Layer];
const BASE_LAYERS: &[GarmentCategory] = &[GarmentCategory::Top, GarmentCategory::Inner];

const COLLAR_WHY: &str =
    "Collar shape frames the face, the wrong choice emphasises unflattering proportions.";

fn has_collar(collar_type: &str) -> bool {
    !matches!(normalize_phrase(collar_type).as_str(), "" | "n/a" | "none")
}

/// Remarks on the garments themselves: colour, occasion, fabric, collars,
/// lengths, layering and the trouser-shoe pairing, in that order.
pub fn outfit_remarks(
    profile: &UserProfile,
    breakdown: &OutfitBreakdown,
    occasion_slug: &str,
) -> Vec<Remark> {
    let mut log = RemarkLog::new();
    let indian = occasion::is_indian_coded(occasion_slug);
    let western = occasion::is_western_coded(occasion_slug);

    if breakdown.color_clash_detected {
        log.push(
            Severity::Critical,
            RemarkCategory::Color,
            BodyZone::FullLook,
            note(
                "colour palette",
                format!("Colour clash detected: {}", breakdown.overall_color_harmony),
                format!(
                    "Switch to colours from your palette: {}",
                    color::palette(profile.skin_undertone).wear.iter().take(4).join(", ")
                ),
                "Clashing colours create visual noise and undermine the overall look.",
            ),
        );
    }

    if !breakdown.occasion_match {
        log.push(
            Severity::Critical,
            RemarkCategory::Occasion,
            BodyZone::FullLook,
            note(
                "outfit",
                format!(
                    "Outfit is dressed for {}, occasion requires {}",
                    breakdown.occasion_detected, occasion_slug
                ),
                "Upgrade garments to match the occasion's formality and dress code.",
                "Occasion mismatch signals a lack of awareness of dress codes.",
            ),
        );
    }

    for item in &breakdown.items {
        let zone = if item.category.is_upper_body() {
            BodyZone::UpperBody
        } else {
            BodyZone::LowerBody
        };

        if !item.occasion_appropriate && !item.issue.is_empty() {
            log.push(
                Severity::Moderate,
                RemarkCategory::Fabric,
                zone,
                note(
                    &item.garment_type,
                    &item.issue,
                    &item.fix,
                    "Each garment must match the occasion's fabric and formality expectations.",
                ),
            );
        }

        if indian && !item.fabric_estimate.trim().is_empty() {
            let verdict = garment::fabric_for_occasion(&item.fabric_estimate, occasion_slug);
            if verdict.is_flagged() {
                log.push(
                    Severity::Moderate,
                    RemarkCategory::Fabric,
                    zone,
                    note(
                        &item.garment_type,
                        verdict.reason,
                        "Upgrade to chanderi, silk-cotton blend, or raw silk for this occasion.",
                        "Fabric weight signals formality in Indian wear as much as the silhouette.",
                    ),
                );
            }
        }

        if !has_collar(&item.collar_type) {
            continue;
        }
        let element = format!("{} collar", item.collar_type);
        if indian {
            let verdict = garment::indian_collar(&item.collar_type, profile.face_shape);
            if verdict.is_flagged() {
                log.push(
                    Severity::Minor,
                    RemarkCategory::Fit,
                    BodyZone::Neck,
                    note(&element, &verdict.reason, &verdict.reason, COLLAR_WHY),
                );
            }
        }
        if western {
            let verdict = garment::western_collar(&item.collar_type, profile.face_shape);
            if verdict.is_flagged() {
                log.push(
                    Severity::Minor,
                    RemarkCategory::Fit,
                    BodyZone::Neck,
                    note(&element, &verdict.reason, &verdict.reason, COLLAR_WHY),
                );
            }
        }
    }

    if indian {
        if let Some(top) = breakdown.first_of(TOPS) {
            let recommended = body::kurta_length(profile.height_estimate, profile.body_shape);
            if normalize_phrase(&top.length).contains("hip")
                && recommended.to_lowercase().contains("mid-thigh")
            {
                log.push(
                    Severity::Moderate,
                    RemarkCategory::Length,
                    BodyZone::UpperBody,
                    note(
                        &top.garment_type,
                        "Hip-length kurta cuts the silhouette at the widest point for your proportions.",
                        recommended,
                        "Kurta length dramatically affects perceived body proportions, a longer hem elongates.",
                    ),
                );
            }
        }
    }

    if western {
        let trouser = breakdown.first_of(BOTTOMS);

        if let Some(trouser) = trouser {
            if garment::trouser_break_for_height(&trouser.length, profile.height_estimate)
                .is_flagged()
            {
                log.push(
                    Severity::Minor,
                    RemarkCategory::Length,
                    BodyZone::LowerBody,
                    note(
                        &trouser.garment_type,
                        "Full trouser break is excessive for your height.",
                        garment::trouser_break_policy(profile.height_estimate),
                        "Trouser break affects the leg line, too much break shortens and puddles.",
                    ),
                );
            }
        }

        if let (Some(outer), Some(base)) = (
            breakdown.first_of(OUTER_LAYERS),
            breakdown.first_of(BASE_LAYERS),
        ) {
            let issues = garment::layering(
                fabric::weight(&base.fabric_estimate),
                fabric::weight(&outer.fabric_estimate),
                &base.fit,
                &outer.fit,
            );
            if let Some(issue) = issues.into_iter().next() {
                log.push(
                    Severity::Minor,
                    RemarkCategory::Layering,
                    BodyZone::UpperBody,
                    note(
                        "layering",
                        issue,
                        "Ensure outer layer is heavier fabric than base; outer fit should be slightly more relaxed.",
                        "Layering should taper inward, base slimmest, outer most relaxed.",
                    ),
                );
            }
        }

        if breakdown.footwear_visible() {
            if let Some(trouser) = trouser {
                let shoe = &breakdown.footwear_analysis.kind;
                let verdict = footwear_match::trouser_shoe(&trouser.fit, shoe);
                if verdict.is_flagged() {
                    log.push(
                        Severity::Minor,
                        RemarkCategory::Footwear,
                        BodyZone::Feet,
                        note(
                            shoe,
                            &verdict.reason,
                            &verdict.reason,
                            "Trouser fit and shoe silhouette must harmonise, the wrong pairing breaks the leg line.",
                        ),
                    );
                }
            }
        }
    }

    log.into_remarks()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{breakdown, garment_item, profile};
    use crate::models::{BodyShape, FaceShape, Height};

    #[test]
    fn test_clean_outfit_has_no_remarks() {
        let remarks = outfit_remarks(&profile(), &breakdown(), "smart_casual");
        assert!(remarks.is_empty());
    }

    #[test]
    fn test_clash_then_occasion_in_discovery_order() {
        let mut b = breakdown();
        b.color_clash_detected = true;
        b.overall_color_harmony = "rust against cool grey".to_string();
        b.occasion_match = false;
        b.occasion_detected = "casual".to_string();

        let remarks = outfit_remarks(&profile(), &b, "party");
        assert_eq!(remarks.len(), 2);
        assert_eq!(remarks[0].category, RemarkCategory::Color);
        assert_eq!(remarks[0].issue, "Colour clash detected: rust against cool grey");
        assert!(remarks[0].fix.starts_with("Switch to colours from your palette: "));
        assert_eq!(remarks[1].category, RemarkCategory::Occasion);
        assert_eq!(remarks[1].issue, "Outfit is dressed for casual, occasion requires party");
        assert_eq!(remarks[1].priority_order.get(), 2);
    }

    #[test]
    fn test_vision_flag_needs_an_issue() {
        let mut b = breakdown();
        b.items[0].occasion_appropriate = false;
        assert!(outfit_remarks(&profile(), &b, "smart_casual").is_empty());

        b.items[0].issue = "Too casual".to_string();
        b.items[0].fix = "Swap for a poplin shirt".to_string();
        let remarks = outfit_remarks(&profile(), &b, "smart_casual");
        assert_eq!(remarks.len(), 1);
        assert_eq!(remarks[0].severity, Severity::Moderate);
        assert_eq!(remarks[0].body_zone, BodyZone::UpperBody);
        assert_eq!(remarks[0].fix, "Swap for a poplin shirt");
    }

    #[test]
    fn test_indian_fabric_and_collar() {
        let mut p = profile();
        p.face_shape = FaceShape::Round;
        let mut b = breakdown();
        b.items = vec![garment_item(GarmentCategory::EthnicTop, "kurta")];
        b.items[0].fabric_estimate = "plain cotton".to_string();
        b.items[0].collar_type = "nehru".to_string();

        let remarks = outfit_remarks(&p, &b, "wedding_guest_indian");
        assert_eq!(remarks.len(), 2);
        assert_eq!(remarks[0].category, RemarkCategory::Fabric);
        assert!(remarks[0].issue.contains("two formality levels below"));
        assert_eq!(remarks[1].category, RemarkCategory::Fit);
        assert_eq!(remarks[1].body_zone, BodyZone::Neck);
        assert_eq!(remarks[1].element, "nehru collar");
        assert_eq!(remarks[1].issue, remarks[1].fix);
    }

    #[test]
    fn test_collar_skipped_when_absent() {
        let mut p = profile();
        p.face_shape = FaceShape::Round;
        let mut b = breakdown();
        b.items[0].collar_type = "N/A".to_string();
        assert!(outfit_remarks(&p, &b, "western_business_formal").is_empty());

        b.items[0].collar_type = "spread collar".to_string();
        let remarks = outfit_remarks(&p, &b, "western_business_formal");
        assert_eq!(remarks.len(), 1);
        assert!(remarks[0].issue.contains("not recommended for round face"));
    }

    #[test]
    fn test_hip_length_kurta_for_tall() {
        let mut p = profile();
        p.height_estimate = Height::Tall;
        p.body_shape = BodyShape::Rectangle;
        let mut b = breakdown();
        b.items = vec![garment_item(GarmentCategory::EthnicTop, "short kurta")];
        b.items[0].length = "hip length".to_string();

        let remarks = outfit_remarks(&p, &b, "indian_casual");
        let length: Vec<_> = remarks
            .iter()
            .filter(|r| r.category == RemarkCategory::Length)
            .collect();
        assert_eq!(length.len(), 1);
        assert_eq!(length[0].element, "short kurta");
        assert_eq!(
            length[0].fix,
            body::kurta_length(Height::Tall, BodyShape::Rectangle)
        );

        // petite frames are already told to stay at the hip
        p.height_estimate = Height::Petite;
        let remarks = outfit_remarks(&p, &b, "indian_casual");
        assert!(remarks.iter().all(|r| r.category != RemarkCategory::Length));
    }

    #[test]
    fn test_western_break_layering_and_shoes() {
        let mut p = profile();
        p.height_estimate = Height::Tall;
        let mut b = breakdown();
        let mut trousers = garment_item(GarmentCategory::Bottom, "suit trousers");
        trousers.length = "full break".to_string();
        trousers.fit = "formal tailored".to_string();
        let mut jacket = garment_item(GarmentCategory::Outerwear, "blazer");
        jacket.fabric_estimate = "linen".to_string();
        jacket.fit = "slim".to_string();
        b.items[0].fabric_estimate = "wool".to_string();
        b.items[0].fit = "regular".to_string();
        b.items.push(trousers);
        b.items.push(jacket);
        b.footwear_analysis.kind = "loafers".to_string();

        let remarks = outfit_remarks(&p, &b, "western_business_formal");
        let categories: Vec<_> = remarks.iter().map(|r| r.category).collect();
        assert_eq!(
            categories,
            vec![
                RemarkCategory::Length,
                RemarkCategory::Layering,
                RemarkCategory::Footwear
            ]
        );
        assert_eq!(remarks[0].fix, garment::trouser_break_policy(Height::Tall));
        assert_eq!(remarks[1].issue, garment::LAYER_WEIGHT_REVERSED);
        assert_eq!(remarks[2].body_zone, BodyZone::Feet);
        assert_eq!(remarks[2].element, "loafers");
    }

    #[test]
    fn test_trouser_shoe_skipped_when_feet_hidden() {
        let mut b = breakdown();
        let mut trousers = garment_item(GarmentCategory::Bottom, "suit trousers");
        trousers.fit = "formal tailored".to_string();
        b.items.push(trousers);
        b.footwear_analysis.kind = "loafers".to_string();
        b.footwear_analysis.visible = false;
        assert!(outfit_remarks(&profile(), &b, "western_business_formal").is_empty());
    }

    #[test]
    fn test_idempotent() {
        let mut b = breakdown();
        b.color_clash_detected = true;
        b.occasion_match = false;
        let first = outfit_remarks(&profile(), &b, "party");
        let second = outfit_remarks(&profile(), &b, "party");
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}

use crate::advisor::footwear::footwear_score;
use crate::advisor::{AnalysisRequest, RuleRemarks};
use crate::knowledge::color;
use crate::models::{BodyZone, GroomingProfile, Remark, StyleRecommendation};

/// Palette entries kept in a rule-based recommendation.
pub const RULE_PALETTE_DO: usize = 8;
pub const RULE_PALETTE_DONT: usize = 6;

pub const OUTFIT_INSTEAD_SUMMARY: &str = "See detailed remarks above for specific garment swaps.";
pub const ACCESSORIES_SUMMARY: &str = "See accessory remarks for specific suggestions.";

/// Stable sort by `priority_order`. Lists are never renumbered across passes.
pub fn sorted(mut remarks: Vec<Remark>) -> Vec<Remark> {
    remarks.sort_by_key(|r| r.priority_order);
    remarks
}

/// Assembles the recommendation from the rule passes alone.
pub fn rule_based(
    request: &AnalysisRequest,
    grooming_profile: GroomingProfile,
    remarks: RuleRemarks,
) -> StyleRecommendation {
    let breakdown = &request.breakdown;
    let undertone = request.profile.skin_undertone;

    let mut palette_do = color::palette_do(undertone);
    palette_do.truncate(RULE_PALETTE_DO);
    let mut palette_dont = color::palette_avoid(undertone);
    palette_dont.truncate(RULE_PALETTE_DONT);

    StyleRecommendation {
        user_profile: request.profile.clone(),
        outfit_breakdown: breakdown.clone(),
        outfit_remarks: sorted(remarks.outfit),
        grooming_remarks: sorted(remarks.grooming),
        accessory_remarks: sorted(remarks.accessory),
        footwear_remarks: sorted(remarks.footwear),
        color_palette_do: palette_do,
        color_palette_dont: palette_dont,
        color_palette_occasion_specific: Vec::new(),
        recommended_outfit_instead: OUTFIT_INSTEAD_SUMMARY.to_string(),
        recommended_grooming_change: grooming_profile.recommended_beard_style.clone(),
        recommended_accessories: ACCESSORIES_SUMMARY.to_string(),
        wardrobe_gaps: Vec::new(),
        shopping_priorities: Vec::new(),
        overall_style_score: breakdown.outfit_score,
        outfit_score: breakdown.outfit_score,
        grooming_score: grooming_profile.grooming_score,
        accessory_score: breakdown.accessory_analysis.overall_score,
        footwear_score: footwear_score(breakdown),
        caricature_image_path: request.caricature_image_path.clone(),
        annotated_output_path: request.annotated_output_path.clone(),
        analysis_json_path: request.analysis_json_path.clone(),
        whats_working: None,
        priority_fix_two: None,
        grooming_profile,
    }
}

/// Drops remarks about body zones that are not in the photo.
pub fn apply_visibility(recommendation: &mut StyleRecommendation) {
    let breakdown = &recommendation.outfit_breakdown;
    let footwear_visible = breakdown.footwear_visible();
    let lower_body_visible = breakdown.lower_body_visible();

    if !footwear_visible {
        recommendation.footwear_remarks.clear();
    }
    for list in [
        &mut recommendation.outfit_remarks,
        &mut recommendation.accessory_remarks,
        &mut recommendation.grooming_remarks,
    ] {
        list.retain(|r| match r.body_zone {
            BodyZone::Feet => footwear_visible,
            BodyZone::LowerBody => lower_body_visible,
            _ => true,
        });
    }
}

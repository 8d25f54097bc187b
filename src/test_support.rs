// Shared fixtures for unit tests.

use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};

use crate::models::{
    AccessoryAnalysis, BodyShape, FaceShape, FootwearAnalysis, GarmentCategory, GarmentItem,
    Height, OutfitBreakdown, Score, SkinUndertone, UserProfile,
};

pub(crate) fn profile() -> UserProfile {
    UserProfile {
        skin_undertone: SkinUndertone::Warm,
        skin_tone_depth: "medium".to_string(),
        skin_texture_visible: "smooth".to_string(),
        body_shape: BodyShape::Rectangle,
        height_estimate: Height::Average,
        build: "athletic".to_string(),
        shoulder_width: "medium".to_string(),
        torso_length: "balanced".to_string(),
        leg_proportion: "balanced".to_string(),
        face_shape: FaceShape::Oval,
        jaw_type: "defined".to_string(),
        forehead: "medium".to_string(),
        hair_color: "black".to_string(),
        hair_texture: "straight".to_string(),
        hair_density: "thick".to_string(),
        current_haircut_style: "short crop".to_string(),
        haircut_length: "short".to_string(),
        hair_visible_condition: "healthy".to_string(),
        beard_style: "stubble".to_string(),
        beard_density: "medium".to_string(),
        beard_color: "black".to_string(),
        mustache_style: "none".to_string(),
        beard_grooming_quality: "well groomed".to_string(),
        confidence_scores: BTreeMap::new(),
        photos_used: 3,
        profile_created_at: Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap(),
        profile_version: 1,
        style_archetype: None,
        seasonal_color_type: None,
        fit_preference_default: None,
        style_comfort_zones: None,
        budget_tier: None,
        age_group: None,
        lifestyle: None,
        style_goals: None,
        preferred_name: None,
        posture: None,
        belly_profile: None,
    }
}

pub(crate) fn garment_item(category: GarmentCategory, garment_type: &str) -> GarmentItem {
    GarmentItem {
        category,
        garment_type: garment_type.to_string(),
        color: "navy".to_string(),
        pattern: "solid".to_string(),
        fabric_estimate: "linen".to_string(),
        fit: "regular".to_string(),
        length: "regular".to_string(),
        collar_type: "n/a".to_string(),
        sleeve_type: "full".to_string(),
        condition: "good".to_string(),
        occasion_appropriate: true,
        issue: String::new(),
        fix: String::new(),
    }
}

/// A clean, occasion-matched outfit: one shirt with a point collar and
/// visible, clean derbies.
pub(crate) fn breakdown() -> OutfitBreakdown {
    let mut shirt = garment_item(GarmentCategory::Top, "shirt");
    shirt.collar_type = "point collar".to_string();

    OutfitBreakdown {
        occasion_detected: "smart casual".to_string(),
        occasion_requested: "smart_casual".to_string(),
        occasion_match: true,
        items: vec![shirt],
        accessory_analysis: AccessoryAnalysis {
            items_detected: Vec::new(),
            missing_accessories: Vec::new(),
            accessories_to_remove: Vec::new(),
            accessory_harmony: "balanced".to_string(),
            overall_score: Score::clamped(7),
        },
        footwear_analysis: FootwearAnalysis {
            visible: true,
            kind: "derby".to_string(),
            color: "brown".to_string(),
            material_estimate: "leather".to_string(),
            condition: "clean".to_string(),
            style_category: "smart".to_string(),
            occasion_match: true,
            outfit_match: true,
            issue: String::new(),
            recommended_instead: String::new(),
            shoe_care_note: String::new(),
        },
        overall_color_harmony: "harmonious".to_string(),
        color_clash_detected: false,
        silhouette_assessment: "clean lines".to_string(),
        proportion_assessment: "balanced".to_string(),
        formality_level: Score::clamped(3),
        outfit_score: Score::clamped(7),
    }
}

use crate::advisor::{RemarkLog, note};
use crate::knowledge::{grooming, normalize_phrase, to_owned_list};
use crate::models::{
    BodyZone, GroomingProfile, Remark, RemarkCategory, Score, Severity, UserProfile,
};

/// Grooming scores at or below this get a haircut remark.
pub const LOW_GROOMING_SCORE: u8 = 4;

/// Rule-based grooming advice for the profile's face shape, hair and beard.
pub fn grooming_profile(profile: &UserProfile) -> GroomingProfile {
    let haircut = grooming::haircut_rules(profile.face_shape);
    let beard = grooming::beard_rules(profile.face_shape);
    let grooming_score = grooming::score_beard_grooming(&profile.beard_grooming_quality);
    let grooming_remarks = grooming_remarks(profile, haircut.recommended, grooming_score);

    let current_haircut_assessment = if haircut.notes.is_empty() {
        profile.current_haircut_style.clone()
    } else {
        format!("{}: {}", profile.current_haircut_style, haircut.notes)
    };
    let current_beard_assessment = if beard.notes.is_empty() {
        profile.beard_style.clone()
    } else {
        format!("{} beard: {}", profile.beard_style, beard.notes)
    };
    let hair_color_recommendation = if profile.hair_color.trim().is_empty() {
        "Maintain natural color".to_string()
    } else {
        format!("Keep {}", profile.hair_color)
    };

    GroomingProfile {
        current_haircut_assessment,
        recommended_haircut: first_or(haircut.recommended, "Standard cut"),
        haircut_to_avoid: first_or(haircut.avoid, "No specific cuts to avoid"),
        styling_product_recommendation: grooming::styling_products(
            &profile.hair_texture,
            &profile.hair_density,
        ),
        hair_color_recommendation,
        current_beard_assessment,
        recommended_beard_style: first_or(beard.recommended, "Maintain current style"),
        beard_grooming_tips: to_owned_list(&beard.recommended[..beard.recommended.len().min(3)]),
        beard_style_to_avoid: first_or(beard.avoid, "No specific styles to avoid"),
        eyebrow_assessment: "Natural".to_string(),
        eyebrow_recommendation: grooming::eyebrow_recommendation(profile.face_shape).to_string(),
        visible_skin_concerns: Vec::new(),
        skincare_categories_needed: vec!["moisturiser".to_string(), "SPF".to_string()],
        grooming_score,
        grooming_remarks,
    }
}

fn first_or(items: &[&str], fallback: &str) -> String {
    items.first().copied().unwrap_or(fallback).to_string()
}

fn grooming_remarks(profile: &UserProfile, haircuts: &[&str], score: Score) -> Vec<Remark> {
    let mut log = RemarkLog::new();

    if normalize_phrase(&profile.beard_grooming_quality) == "unkempt" {
        log.push(
            Severity::Moderate,
            RemarkCategory::GroomingBeard,
            BodyZone::Face,
            note(
                "beard",
                "Beard is unkempt, needs grooming before next public appearance",
                "Trim, shape, and moisturise beard. Use a beard comb.",
                "Grooming quality affects overall perceived effort and professionalism.",
            ),
        );
    }

    if score.value() <= LOW_GROOMING_SCORE {
        log.push(
            Severity::Moderate,
            RemarkCategory::GroomingHair,
            BodyZone::Head,
            note(
                "hair",
                "Hair appears unmaintained, a fresh cut would significantly elevate the look",
                format!(
                    "Book a haircut this week. Ask for: {}",
                    haircuts
                        .first()
                        .copied()
                        .unwrap_or("a style suited to your face shape")
                ),
                "Hair is the most noticed grooming element after the face.",
            ),
        );
    }

    log.into_remarks()
}

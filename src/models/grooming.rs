use serde::{Deserialize, Serialize};

use super::{Remark, Score};

/// Hair, beard, eyebrow and skin advice for one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroomingProfile {
    // Hair
    pub current_haircut_assessment: String,
    pub recommended_haircut: String,
    pub haircut_to_avoid: String,
    pub styling_product_recommendation: Vec<String>,
    pub hair_color_recommendation: String,

    // Beard
    pub current_beard_assessment: String,
    pub recommended_beard_style: String,
    pub beard_grooming_tips: Vec<String>,
    pub beard_style_to_avoid: String,

    // Eyebrows
    pub eyebrow_assessment: String,
    pub eyebrow_recommendation: String,

    // Skin
    pub visible_skin_concerns: Vec<String>,
    pub skincare_categories_needed: Vec<String>,

    pub grooming_score: Score,
    pub grooming_remarks: Vec<Remark>,
}

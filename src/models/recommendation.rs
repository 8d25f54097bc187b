use serde::{Deserialize, Serialize};

use super::{GroomingProfile, OutfitBreakdown, Remark, Score, UserProfile};

/// The terminal aggregate of one analysis. Created once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleRecommendation {
    pub user_profile: UserProfile,
    pub grooming_profile: GroomingProfile,
    pub outfit_breakdown: OutfitBreakdown,

    pub outfit_remarks: Vec<Remark>,
    pub grooming_remarks: Vec<Remark>,
    pub accessory_remarks: Vec<Remark>,
    pub footwear_remarks: Vec<Remark>,

    pub color_palette_do: Vec<String>,
    pub color_palette_dont: Vec<String>,
    pub color_palette_occasion_specific: Vec<String>,

    pub recommended_outfit_instead: String,
    pub recommended_grooming_change: String,
    pub recommended_accessories: String,

    pub wardrobe_gaps: Vec<String>,
    pub shopping_priorities: Vec<String>,

    pub overall_style_score: Score,
    pub outfit_score: Score,
    pub grooming_score: Score,
    pub accessory_score: Score,
    pub footwear_score: Score,

    pub caricature_image_path: String,
    pub annotated_output_path: String,
    pub analysis_json_path: String,

    /// One or two sentences on what already works in the look
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whats_working: Option<String>,
    /// The two most important fixes, one sentence each
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_fix_two: Option<String>,
}

impl StyleRecommendation {
    /// All four remark lists chained in report order.
    pub fn all_remarks(&self) -> impl Iterator<Item = &Remark> {
        self.outfit_remarks
            .iter()
            .chain(self.grooming_remarks.iter())
            .chain(self.accessory_remarks.iter())
            .chain(self.footwear_remarks.iter())
    }

    pub fn scores(&self) -> [Score; 5] {
        [
            self.overall_style_score,
            self.outfit_score,
            self.grooming_score,
            self.accessory_score,
            self.footwear_score,
        ]
    }
}

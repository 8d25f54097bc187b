use serde::{Deserialize, Serialize};

use super::Score;

/// Where a garment sits on the body, as reported by the vision collaborator.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GarmentCategory {
    Top,
    Bottom,
    Outerwear,
    Layer,
    Inner,
    EthnicTop,
    EthnicBottom,
    FullGarment,
}

impl GarmentCategory {
    /// Garments worn on the torso. Everything else counts as lower body.
    pub fn is_upper_body(&self) -> bool {
        matches!(
            self,
            GarmentCategory::Top
                | GarmentCategory::EthnicTop
                | GarmentCategory::Outerwear
                | GarmentCategory::Layer
                | GarmentCategory::Inner
                | GarmentCategory::FullGarment
        )
    }

    /// Garments whose presence proves the lower body is in frame.
    pub fn shows_lower_body(&self) -> bool {
        matches!(
            self,
            GarmentCategory::Bottom | GarmentCategory::EthnicBottom | GarmentCategory::FullGarment
        )
    }
}

/// A single garment detected in the outfit photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GarmentItem {
    pub category: GarmentCategory,
    pub garment_type: String,
    pub color: String,
    pub pattern: String,
    pub fabric_estimate: String,
    pub fit: String,
    pub length: String,
    /// "n/a" when the garment has no collar
    pub collar_type: String,
    pub sleeve_type: String,
    pub condition: String,
    pub occasion_appropriate: bool,
    pub issue: String,
    pub fix: String,
}

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessoryType {
    Watch,
    Ring,
    Bracelet,
    Necklace,
    Chain,
    Pendant,
    Belt,
    Bag,
    Sunglasses,
    Hat,
    Cap,
    Turban,
    Pagdi,
    PocketSquare,
    Tie,
    TiePin,
    Cufflinks,
    Earring,
}

impl AccessoryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessoryType::Watch => "watch",
            AccessoryType::Ring => "ring",
            AccessoryType::Bracelet => "bracelet",
            AccessoryType::Necklace => "necklace",
            AccessoryType::Chain => "chain",
            AccessoryType::Pendant => "pendant",
            AccessoryType::Belt => "belt",
            AccessoryType::Bag => "bag",
            AccessoryType::Sunglasses => "sunglasses",
            AccessoryType::Hat => "hat",
            AccessoryType::Cap => "cap",
            AccessoryType::Turban => "turban",
            AccessoryType::Pagdi => "pagdi",
            AccessoryType::PocketSquare => "pocket_square",
            AccessoryType::Tie => "tie",
            AccessoryType::TiePin => "tie_pin",
            AccessoryType::Cufflinks => "cufflinks",
            AccessoryType::Earring => "earring",
        }
    }
}

impl std::fmt::Display for AccessoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().replace('_', " "))
    }
}

/// A single detected accessory with the vision collaborator's assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccessoryItem {
    #[serde(rename = "type")]
    pub kind: AccessoryType,
    pub color: String,
    pub material_estimate: String,
    /// casual / formal / traditional / statement / sport
    pub style_category: String,
    pub condition: String,
    pub occasion_appropriate: bool,
    pub issue: String,
    pub fix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccessoryAnalysis {
    pub items_detected: Vec<AccessoryItem>,
    pub missing_accessories: Vec<String>,
    pub accessories_to_remove: Vec<String>,
    pub accessory_harmony: String,
    pub overall_score: Score,
}

/// Footwear detection result. When `visible` is false the remaining fields
/// carry no information and nothing about the feet may be critiqued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FootwearAnalysis {
    pub visible: bool,
    #[serde(rename = "type")]
    pub kind: String,
    pub color: String,
    pub material_estimate: String,
    /// clean / scuffed / dirty / worn out / sole peeling / yellowed sole
    pub condition: String,
    pub style_category: String,
    pub occasion_match: bool,
    pub outfit_match: bool,
    pub issue: String,
    pub recommended_instead: String,
    pub shoe_care_note: String,
}

/// Everything the vision collaborator reports about one outfit photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutfitBreakdown {
    pub occasion_detected: String,
    pub occasion_requested: String,
    pub occasion_match: bool,
    pub items: Vec<GarmentItem>,
    pub accessory_analysis: AccessoryAnalysis,
    pub footwear_analysis: FootwearAnalysis,
    pub overall_color_harmony: String,
    pub color_clash_detected: bool,
    pub silhouette_assessment: String,
    pub proportion_assessment: String,
    pub formality_level: Score,
    pub outfit_score: Score,
}

impl OutfitBreakdown {
    /// First garment, in detection order, whose category is one of `categories`.
    pub fn first_of(&self, categories: &[GarmentCategory]) -> Option<&GarmentItem> {
        self.items
            .iter()
            .find(|item| categories.contains(&item.category))
    }

    pub fn footwear_visible(&self) -> bool {
        self.footwear_analysis.visible
    }

    /// The lower body counts as in frame when a lower garment was detected or
    /// the shoes are visible.
    pub fn lower_body_visible(&self) -> bool {
        self.items.iter().any(|item| item.category.shows_lower_body()) || self.footwear_visible()
    }
}

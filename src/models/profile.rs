use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::StylistError;
use crate::knowledge::normalize_key;

/// Skin undertone categories, including the deep and olive variants common in
/// South Asian colouring.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkinUndertone {
    Warm,
    Cool,
    Neutral,
    /// Warm undertone on deep skin
    DeepWarm,
    DeepCool,
    /// Wheatish skin with a warm base
    OliveWarm,
}

impl SkinUndertone {
    pub const ALL: [SkinUndertone; 6] = [
        SkinUndertone::Warm,
        SkinUndertone::Cool,
        SkinUndertone::Neutral,
        SkinUndertone::DeepWarm,
        SkinUndertone::DeepCool,
        SkinUndertone::OliveWarm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkinUndertone::Warm => "warm",
            SkinUndertone::Cool => "cool",
            SkinUndertone::Neutral => "neutral",
            SkinUndertone::DeepWarm => "deep_warm",
            SkinUndertone::DeepCool => "deep_cool",
            SkinUndertone::OliveWarm => "olive_warm",
        }
    }
}

impl std::fmt::Display for SkinUndertone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkinUndertone::Warm => write!(f, "Warm"),
            SkinUndertone::Cool => write!(f, "Cool"),
            SkinUndertone::Neutral => write!(f, "Neutral"),
            SkinUndertone::DeepWarm => write!(f, "Deep Warm"),
            SkinUndertone::DeepCool => write!(f, "Deep Cool"),
            SkinUndertone::OliveWarm => write!(f, "Olive Warm"),
        }
    }
}

impl FromStr for SkinUndertone {
    type Err = StylistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        Self::ALL
            .into_iter()
            .find(|u| u.as_str() == key)
            .ok_or_else(|| StylistError::InvalidUserInput {
                field: "skin_undertone".to_string(),
                reason: format!("unknown undertone '{}'", s),
            })
    }
}

/// Male body shape classifications.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyShape {
    Rectangle,
    Triangle,
    InvertedTriangle,
    Oval,
    Trapezoid,
}

impl BodyShape {
    pub const ALL: [BodyShape; 5] = [
        BodyShape::Rectangle,
        BodyShape::Triangle,
        BodyShape::InvertedTriangle,
        BodyShape::Oval,
        BodyShape::Trapezoid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BodyShape::Rectangle => "rectangle",
            BodyShape::Triangle => "triangle",
            BodyShape::InvertedTriangle => "inverted_triangle",
            BodyShape::Oval => "oval",
            BodyShape::Trapezoid => "trapezoid",
        }
    }
}

impl std::fmt::Display for BodyShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BodyShape::Rectangle => write!(f, "Rectangle"),
            BodyShape::Triangle => write!(f, "Triangle"),
            BodyShape::InvertedTriangle => write!(f, "Inverted Triangle"),
            BodyShape::Oval => write!(f, "Oval"),
            BodyShape::Trapezoid => write!(f, "Trapezoid"),
        }
    }
}

impl FromStr for BodyShape {
    type Err = StylistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        Self::ALL
            .into_iter()
            .find(|b| b.as_str() == key)
            .ok_or_else(|| StylistError::InvalidUserInput {
                field: "body_shape".to_string(),
                reason: format!("unknown body shape '{}'", s),
            })
    }
}

/// Face shape classifications.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaceShape {
    Oval,
    Square,
    Round,
    Oblong,
    Heart,
    Diamond,
}

impl FaceShape {
    pub const ALL: [FaceShape; 6] = [
        FaceShape::Oval,
        FaceShape::Square,
        FaceShape::Round,
        FaceShape::Oblong,
        FaceShape::Heart,
        FaceShape::Diamond,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FaceShape::Oval => "oval",
            FaceShape::Square => "square",
            FaceShape::Round => "round",
            FaceShape::Oblong => "oblong",
            FaceShape::Heart => "heart",
            FaceShape::Diamond => "diamond",
        }
    }
}

impl std::fmt::Display for FaceShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FaceShape {
    type Err = StylistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        Self::ALL
            .into_iter()
            .find(|shape| shape.as_str() == key)
            .ok_or_else(|| StylistError::InvalidUserInput {
                field: "face_shape".to_string(),
                reason: format!("unknown face shape '{}'", s),
            })
    }
}

/// Coarse height estimate.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Height {
    Tall,
    Average,
    Petite,
}

impl Height {
    pub const ALL: [Height; 3] = [Height::Tall, Height::Average, Height::Petite];

    pub fn as_str(&self) -> &'static str {
        match self {
            Height::Tall => "tall",
            Height::Average => "average",
            Height::Petite => "petite",
        }
    }
}

impl std::fmt::Display for Height {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Height {
    type Err = StylistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        Self::ALL
            .into_iter()
            .find(|h| h.as_str() == key)
            .ok_or_else(|| StylistError::InvalidUserInput {
                field: "height_estimate".to_string(),
                reason: format!("unknown height '{}'", s),
            })
    }
}

/// Seasonal colour type, a refinement layered on top of the undertone palette.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Season::Spring => write!(f, "Spring"),
            Season::Summer => write!(f, "Summer"),
            Season::Autumn => write!(f, "Autumn"),
            Season::Winter => write!(f, "Winter"),
        }
    }
}

impl FromStr for Season {
    type Err = StylistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        Self::ALL
            .into_iter()
            .find(|season| season.as_str() == key)
            .ok_or_else(|| StylistError::InvalidUserInput {
                field: "seasonal_color_type".to_string(),
                reason: format!("unknown season '{}'", s),
            })
    }
}

/// Durable physical characteristics of a person, built once from onboarding
/// photos and read (never mutated) by every analysis.
///
/// A refresh produces a new value with `profile_version` incremented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserProfile {
    // Skin
    pub skin_undertone: SkinUndertone,
    /// light / medium / wheatish / tan / deep
    pub skin_tone_depth: String,
    pub skin_texture_visible: String,

    // Body
    pub body_shape: BodyShape,
    pub height_estimate: Height,
    /// slim / lean / athletic / average / broad / stocky
    pub build: String,
    pub shoulder_width: String,
    pub torso_length: String,
    pub leg_proportion: String,

    // Face
    pub face_shape: FaceShape,
    pub jaw_type: String,
    pub forehead: String,

    // Hair
    pub hair_color: String,
    /// straight / wavy / curly / coily
    pub hair_texture: String,
    /// thin / medium / thick
    pub hair_density: String,
    pub current_haircut_style: String,
    pub haircut_length: String,
    pub hair_visible_condition: String,

    // Beard
    pub beard_style: String,
    pub beard_density: String,
    pub beard_color: String,
    pub mustache_style: String,
    /// well groomed / average / unkempt / not applicable
    pub beard_grooming_quality: String,

    // Meta
    pub confidence_scores: BTreeMap<String, f64>,
    pub photos_used: u32,
    pub profile_created_at: DateTime<Utc>,
    pub profile_version: u32,

    // Extended attributes, omitted from the stored file when unknown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_archetype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seasonal_color_type: Option<Season>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fit_preference_default: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_comfort_zones: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_tier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifestyle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_goals: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub belly_profile: Option<String>,
}

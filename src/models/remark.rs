use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// How urgently a remark should be acted on.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Must be fixed before wearing the look again
    Critical,
    /// Meaningfully changes the look
    Moderate,
    /// Polish
    Minor,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Critical => write!(f, "CRITICAL"),
            Severity::Moderate => write!(f, "MODERATE"),
            Severity::Minor => write!(f, "MINOR"),
        }
    }
}

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemarkCategory {
    Color,
    Fit,
    Fabric,
    Occasion,
    Proportion,
    Accessory,
    Footwear,
    GroomingHair,
    GroomingBeard,
    GroomingSkin,
    Layering,
    Pattern,
    Length,
    Condition,
    Posture,
}

impl RemarkCategory {
    pub const ALL: [RemarkCategory; 15] = [
        RemarkCategory::Color,
        RemarkCategory::Fit,
        RemarkCategory::Fabric,
        RemarkCategory::Occasion,
        RemarkCategory::Proportion,
        RemarkCategory::Accessory,
        RemarkCategory::Footwear,
        RemarkCategory::GroomingHair,
        RemarkCategory::GroomingBeard,
        RemarkCategory::GroomingSkin,
        RemarkCategory::Layering,
        RemarkCategory::Pattern,
        RemarkCategory::Length,
        RemarkCategory::Condition,
        RemarkCategory::Posture,
    ];
}

impl std::fmt::Display for RemarkCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemarkCategory::Color => write!(f, "Colour"),
            RemarkCategory::Fit => write!(f, "Fit"),
            RemarkCategory::Fabric => write!(f, "Fabric"),
            RemarkCategory::Occasion => write!(f, "Occasion"),
            RemarkCategory::Proportion => write!(f, "Proportion"),
            RemarkCategory::Accessory => write!(f, "Accessory"),
            RemarkCategory::Footwear => write!(f, "Footwear"),
            RemarkCategory::GroomingHair => write!(f, "Hair"),
            RemarkCategory::GroomingBeard => write!(f, "Beard"),
            RemarkCategory::GroomingSkin => write!(f, "Skin"),
            RemarkCategory::Layering => write!(f, "Layering"),
            RemarkCategory::Pattern => write!(f, "Pattern"),
            RemarkCategory::Length => write!(f, "Length"),
            RemarkCategory::Condition => write!(f, "Condition"),
            RemarkCategory::Posture => write!(f, "Posture"),
        }
    }
}

/// The anatomical region a remark concerns. Drives visibility suppression.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BodyZone {
    Head,
    Face,
    Neck,
    UpperBody,
    LowerBody,
    Feet,
    FullLook,
}

impl std::fmt::Display for BodyZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BodyZone::Head => write!(f, "head"),
            BodyZone::Face => write!(f, "face"),
            BodyZone::Neck => write!(f, "neck"),
            BodyZone::UpperBody => write!(f, "upper-body"),
            BodyZone::LowerBody => write!(f, "lower-body"),
            BodyZone::Feet => write!(f, "feet"),
            BodyZone::FullLook => write!(f, "full-look"),
        }
    }
}

/// One atomic, actionable piece of style advice.
///
/// `priority_order` is assigned in discovery order within the pass that
/// produced the remark and is strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Remark {
    pub severity: Severity,
    pub category: RemarkCategory,
    pub body_zone: BodyZone,
    pub element: String,
    pub issue: String,
    pub fix: String,
    pub why: String,
    pub priority_order: NonZeroU32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_zone_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&BodyZone::UpperBody).unwrap(),
            "\"upper-body\""
        );
        assert_eq!(
            serde_json::to_string(&BodyZone::FullLook).unwrap(),
            "\"full-look\""
        );
    }

    #[test]
    fn test_remark_rejects_zero_priority_and_unknown_fields() {
        let zero = r#"{"severity":"minor","category":"fit","body_zone":"neck","element":"collar",
            "issue":"i","fix":"f","why":"w","priority_order":0}"#;
        assert!(serde_json::from_str::<Remark>(zero).is_err());

        let extra = r#"{"severity":"minor","category":"fit","body_zone":"neck","element":"collar",
            "issue":"i","fix":"f","why":"w","priority_order":1,"mood":"sunny"}"#;
        assert!(serde_json::from_str::<Remark>(extra).is_err());

        let valid = r#"{"severity":"minor","category":"grooming_beard","body_zone":"face",
            "element":"beard","issue":"i","fix":"f","why":"w","priority_order":3}"#;
        let remark: Remark = serde_json::from_str(valid).unwrap();
        assert_eq!(remark.category, RemarkCategory::GroomingBeard);
        assert_eq!(remark.priority_order.get(), 3);
    }
}

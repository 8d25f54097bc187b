use crate::knowledge::occasion;
use crate::models::{AccessoryType, FaceShape};

pub const DEFAULT_FORMALITY: u8 = 3;

/// Occasion formality, 1 (most casual) to 5 (most formal). Keys are spaced
/// table slugs.
const FORMALITY_LEVELS: &[(&str, u8)] = &[
    ("gym", 1),
    ("beach", 1),
    ("casual", 2),
    ("streetwear", 2),
    ("travel", 2),
    ("indian casual", 2),
    ("festival", 2),
    ("lounge", 2),
    ("smart casual", 3),
    ("party", 3),
    ("ethnic fusion", 3),
    ("business casual", 4),
    ("western formal", 5),
    ("indian formal", 5),
    ("wedding guest indian", 5),
];

/// Spaced table form of an occasion, e.g. `"western_business_formal"` becomes
/// `"western formal"`.
pub fn occasion_key(occasion_slug: &str) -> String {
    occasion::table_slug(occasion_slug).replace('_', " ")
}

pub fn formality_level(occasion_slug: &str) -> u8 {
    let key = occasion_key(occasion_slug);
    FORMALITY_LEVELS
        .iter()
        .find(|(occ, _)| *occ == key)
        .map(|&(_, level)| level)
        .unwrap_or(DEFAULT_FORMALITY)
}

pub fn is_formal(occasion_slug: &str) -> bool {
    formality_level(occasion_slug) >= 4
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameAdvice {
    pub recommended: &'static [&'static str],
    pub avoid: &'static [&'static str],
}

pub fn sunglasses_frames(face_shape: FaceShape) -> FrameAdvice {
    match face_shape {
        FaceShape::Round => FrameAdvice {
            recommended: &[
                "angular frames",
                "wayfarer",
                "square frames",
                "rectangular frames",
            ],
            avoid: &["round frames", "oval frames"],
        },
        FaceShape::Square => FrameAdvice {
            recommended: &["round frames", "oval frames", "soft curves"],
            avoid: &[
                "angular square frames",
                "rectangular frames that mirror the jaw",
            ],
        },
        FaceShape::Oval => FrameAdvice {
            recommended: &[
                "most frames work",
                "wayfarer",
                "aviator",
                "cat-eye",
                "square",
            ],
            avoid: &["frames that are too wide for the face"],
        },
        FaceShape::Oblong => FrameAdvice {
            recommended: &[
                "oversized frames",
                "round or square",
                "frames with decorative temples",
            ],
            avoid: &["narrow frames", "small frames that elongate further"],
        },
        FaceShape::Heart => FrameAdvice {
            recommended: &["bottom-heavy frames", "round", "aviator", "rimless"],
            avoid: &["cat-eye", "heavily decorated top rim"],
        },
        FaceShape::Diamond => FrameAdvice {
            recommended: &[
                "oval frames",
                "rimless",
                "frames that are as wide as cheekbones",
            ],
            avoid: &["narrow rectangular", "very small frames"],
        },
    }
}

/// Accessories commonly missing for an occasion, given what was detected.
pub fn suggest_missing_accessories(occasion_slug: &str, detected: &[AccessoryType]) -> Vec<String> {
    let occ = occasion::spaced(occasion_slug);
    let has = |kind: AccessoryType| detected.contains(&kind);
    let mut suggestions = Vec::new();

    if occ.contains("western formal") || occ.contains("business") {
        if !has(AccessoryType::PocketSquare) {
            suggestions.push("Pocket square, adds intentionality to a formal jacket".to_string());
        }
        if !has(AccessoryType::Watch) {
            suggestions.push("Dress watch with leather strap, anchors the formal look".to_string());
        }
    }

    if (occ.contains("indian formal") || occ.contains("wedding")) && !has(AccessoryType::Watch) {
        suggestions.push("Simple metal bracelet or dress watch on tan leather strap".to_string());
    }

    if (occ.contains("party") || occ.contains("smart casual")) && !has(AccessoryType::Watch) {
        suggestions.push("Watch, even a minimal piece elevates smart casual".to_string());
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formality_levels() {
        assert_eq!(formality_level("gym"), 1);
        assert_eq!(formality_level("indian_casual"), 2);
        assert_eq!(formality_level("ethnic fusion"), 3);
        assert_eq!(formality_level("western_business_casual"), 4);
        assert_eq!(formality_level("western_business_formal"), 5);
        assert_eq!(formality_level("wedding_guest_indian"), 5);
        assert_eq!(formality_level("picnic"), DEFAULT_FORMALITY);
        assert!(is_formal("indian_formal"));
        assert!(!is_formal("party"));
    }

    #[test]
    fn test_every_face_shape_has_frames() {
        for face in FaceShape::ALL {
            let advice = sunglasses_frames(face);
            assert!(!advice.recommended.is_empty());
            assert!(!advice.avoid.is_empty());
        }
    }

    #[test]
    fn test_suggest_missing_for_formal() {
        let missing = suggest_missing_accessories("western_business_formal", &[]);
        assert_eq!(missing.len(), 2);
        assert!(missing[0].starts_with("Pocket square"));

        let missing = suggest_missing_accessories(
            "western_business_formal",
            &[AccessoryType::PocketSquare, AccessoryType::Watch],
        );
        assert!(missing.is_empty());
    }

    #[test]
    fn test_suggest_missing_other_occasions() {
        assert_eq!(
            suggest_missing_accessories("wedding_guest_indian", &[AccessoryType::Ring]),
            vec!["Simple metal bracelet or dress watch on tan leather strap"]
        );
        assert_eq!(
            suggest_missing_accessories("party", &[]),
            vec!["Watch, even a minimal piece elevates smart casual"]
        );
        assert!(suggest_missing_accessories("gym", &[]).is_empty());
    }
}

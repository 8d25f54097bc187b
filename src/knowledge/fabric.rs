use crate::knowledge::{normalize_phrase, occasion};

/// Formality and handling characteristics of one fabric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FabricProfile {
    pub name: &'static str,
    /// 1 (casual) to 5 (formal)
    pub formality: u8,
    /// light / medium / heavy
    pub weight: &'static str,
    pub seasons: &'static [&'static str],
    pub occasions: &'static [&'static str],
    pub care_note: &'static str,
    /// smooth / textured / sheer
    pub texture: &'static str,
    /// fluid / medium / stiff / structured
    pub drape: &'static str,
}

pub const DEFAULT_FORMALITY: u8 = 3;
pub const DEFAULT_WEIGHT: &str = "medium";

const INDIAN_FORMAL: &[&str] = &["indian_formal", "wedding_guest_indian", "party"];

const FABRICS: &[FabricProfile] = &[
    FabricProfile {
        name: "cotton",
        formality: 2,
        weight: "light",
        seasons: &["summer", "all-season"],
        occasions: &["casual", "indian_casual", "travel", "festival", "lounge"],
        care_note: "Machine washable. Iron on medium heat.",
        texture: "smooth",
        drape: "medium",
    },
    FabricProfile {
        name: "linen",
        formality: 2,
        weight: "light",
        seasons: &["summer"],
        occasions: &["casual", "indian_casual", "travel", "beach"],
        care_note: "Hand wash or gentle machine. Wrinkles easily, steam before wearing.",
        texture: "textured",
        drape: "medium",
    },
    FabricProfile {
        name: "chanderi",
        formality: 5,
        weight: "light",
        seasons: &["all-season"],
        occasions: INDIAN_FORMAL,
        care_note: "Dry clean recommended. Handle with care, the weave is delicate.",
        texture: "sheer",
        drape: "fluid",
    },
    FabricProfile {
        name: "raw silk",
        formality: 4,
        weight: "medium",
        seasons: &["all-season"],
        occasions: INDIAN_FORMAL,
        care_note: "Dry clean only. Avoid direct sunlight, it fades.",
        texture: "textured",
        drape: "medium",
    },
    FabricProfile {
        name: "silk",
        formality: 5,
        weight: "medium",
        seasons: &["all-season"],
        occasions: INDIAN_FORMAL,
        care_note: "Dry clean only. Store away from light.",
        texture: "smooth",
        drape: "fluid",
    },
    FabricProfile {
        name: "brocade",
        formality: 5,
        weight: "heavy",
        seasons: &["winter", "all-season"],
        occasions: &["indian_formal", "wedding_guest_indian"],
        care_note: "Dry clean only. Heavy, layer sparingly.",
        texture: "textured",
        drape: "stiff",
    },
    FabricProfile {
        name: "silk-cotton blend",
        formality: 4,
        weight: "medium",
        seasons: &["all-season"],
        occasions: &["indian_formal", "wedding_guest_indian", "business_casual"],
        care_note: "Dry clean or gentle hand wash in cold water.",
        texture: "smooth",
        drape: "medium",
    },
    FabricProfile {
        name: "linen-cotton blend",
        formality: 3,
        weight: "light",
        seasons: &["summer", "all-season"],
        occasions: &["business_casual", "smart_casual", "indian_casual"],
        care_note: "Machine washable. Light iron.",
        texture: "textured",
        drape: "medium",
    },
    FabricProfile {
        name: "wool",
        formality: 5,
        weight: "heavy",
        seasons: &["winter"],
        occasions: &["western_formal", "business_casual", "smart_casual"],
        care_note: "Dry clean or hand wash cold. Steam to remove wrinkles.",
        texture: "textured",
        drape: "structured",
    },
    FabricProfile {
        name: "wool blend",
        formality: 4,
        weight: "medium",
        seasons: &["winter", "all-season"],
        occasions: &["western_formal", "business_casual"],
        care_note: "Dry clean recommended.",
        texture: "smooth",
        drape: "structured",
    },
    FabricProfile {
        name: "denim",
        formality: 2,
        weight: "heavy",
        seasons: &["all-season"],
        occasions: &["casual", "streetwear", "indian_casual"],
        care_note: "Wash inside out. Cold wash to prevent fading.",
        texture: "textured",
        drape: "stiff",
    },
    FabricProfile {
        name: "cotton poplin",
        formality: 3,
        weight: "light",
        seasons: &["all-season"],
        occasions: &["western_formal", "business_casual", "smart_casual"],
        care_note: "Machine washable. Iron on medium heat, a sharp collar matters.",
        texture: "smooth",
        drape: "medium",
    },
    FabricProfile {
        name: "oxford cloth",
        formality: 3,
        weight: "medium",
        seasons: &["all-season"],
        occasions: &["business_casual", "smart_casual", "casual"],
        care_note: "Machine washable.",
        texture: "textured",
        drape: "medium",
    },
    FabricProfile {
        name: "velvet",
        formality: 5,
        weight: "heavy",
        seasons: &["winter"],
        occasions: &["party", "indian_formal", "wedding_guest_indian"],
        care_note: "Dry clean only. Store on a hanger, folding crushes the pile.",
        texture: "smooth",
        drape: "structured",
    },
    FabricProfile {
        name: "jersey",
        formality: 1,
        weight: "light",
        seasons: &["all-season"],
        occasions: &["casual", "gym", "streetwear", "lounge"],
        care_note: "Machine washable.",
        texture: "smooth",
        drape: "fluid",
    },
];

pub fn all() -> &'static [FabricProfile] {
    FABRICS
}

pub fn get(name: &str) -> Option<&'static FabricProfile> {
    let name = normalize_phrase(name);
    FABRICS.iter().find(|f| f.name == name)
}

/// Formality 1-5; unknown fabrics sit in the middle.
pub fn formality(name: &str) -> u8 {
    get(name).map(|f| f.formality).unwrap_or(DEFAULT_FORMALITY)
}

/// light / medium / heavy; unknown fabrics are treated as medium.
pub fn weight(name: &str) -> &'static str {
    get(name).map(|f| f.weight).unwrap_or(DEFAULT_WEIGHT)
}

pub fn fabrics_for_occasion(occasion_slug: &str) -> Vec<&'static str> {
    let key = occasion::table_slug(occasion_slug);
    FABRICS
        .iter()
        .filter(|f| f.occasions.contains(&key.as_str()))
        .map(|f| f.name)
        .collect()
}

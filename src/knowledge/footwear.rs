use crate::knowledge::{normalize_phrase, occasion};
use crate::models::Severity;

/// Allowed and forbidden footwear for one occasion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FootwearRules {
    pub occasion: &'static str,
    pub allowed: &'static [&'static str],
    pub forbidden: &'static [&'static str],
    pub notes: &'static str,
}

const INDIAN_FORMAL_ALLOWED: &[&str] = &[
    "mojaris",
    "juttis",
    "kolhapuris formal",
    "leather oxfords plain neutral",
];
const INDIAN_FORMAL_FORBIDDEN: &[&str] = &[
    "sneakers",
    "sports sandals",
    "rubber chappals",
    "sport shoes",
    "trainers",
];

const FOOTWEAR_RULES: &[FootwearRules] = &[
    FootwearRules {
        occasion: "indian_formal",
        allowed: INDIAN_FORMAL_ALLOWED,
        forbidden: INDIAN_FORMAL_FORBIDDEN,
        notes: "Footwear must speak the same style language as the sherwani or bandhgala.",
    },
    FootwearRules {
        occasion: "wedding_guest_indian",
        allowed: INDIAN_FORMAL_ALLOWED,
        forbidden: INDIAN_FORMAL_FORBIDDEN,
        notes: "Same as Indian formal, a wedding demands ethnic footwear.",
    },
    FootwearRules {
        occasion: "indian_casual",
        allowed: &["kolhapuris", "loafers", "clean white sneakers", "leather sandals"],
        forbidden: &["formal black oxfords", "sports shoes"],
        notes: "Casual but coordinated. Clean white sneakers are fine with an everyday kurta.",
    },
    FootwearRules {
        occasion: "western_formal",
        allowed: &["oxford", "derby", "monk strap"],
        forbidden: &["loafers", "sneakers", "suede shoes", "sport shoes", "chappals"],
        notes: "Must be black or dark brown, polished. Suede is not formal.",
    },
    FootwearRules {
        occasion: "business_casual",
        allowed: &["loafers", "clean leather sneakers", "chelsea boots", "derby"],
        forbidden: &["sports shoes", "rubber sandals", "flip flops"],
        notes: "Business casual allows loafers and clean leather sneakers.",
    },
    FootwearRules {
        occasion: "smart_casual",
        allowed: &[
            "loafers",
            "clean leather sneakers",
            "chelsea boots",
            "derby",
            "brogues",
        ],
        forbidden: &["sports shoes", "rubber sandals"],
        notes: "",
    },
    FootwearRules {
        occasion: "streetwear",
        allowed: &["sneakers", "chunky trainers", "clean low-tops"],
        forbidden: &["formal oxfords", "mojaris", "dress shoes"],
        notes: "Condition is critical, dirty sneakers undermine the entire look.",
    },
    FootwearRules {
        occasion: "party",
        allowed: &[
            "loafers",
            "chelsea boots",
            "clean leather sneakers",
            "dress shoes",
        ],
        forbidden: &["sports shoes", "rubber sandals", "old worn sneakers"],
        notes: "",
    },
    FootwearRules {
        occasion: "casual",
        allowed: &["sneakers", "loafers", "sandals", "kolhapuris", "chappals"],
        forbidden: &[],
        notes: "Most footwear works casually, condition still matters.",
    },
    FootwearRules {
        occasion: "travel",
        allowed: &["sneakers", "loafers", "comfortable sandals", "chelsea boots"],
        forbidden: &["formal dress shoes for long-haul"],
        notes: "",
    },
    FootwearRules {
        occasion: "gym",
        allowed: &["sport shoes", "trainers", "running shoes"],
        forbidden: &["loafers", "dress shoes", "sandals", "mojaris"],
        notes: "",
    },
    FootwearRules {
        occasion: "beach",
        allowed: &["sandals", "flip flops", "bare feet"],
        forbidden: &["dress shoes", "boots", "sneakers for beach"],
        notes: "",
    },
    FootwearRules {
        occasion: "festival",
        allowed: &["kolhapuris", "juttis", "sneakers", "sandals"],
        forbidden: &[],
        notes: "Festivals are flexible, colour and print matter more.",
    },
    FootwearRules {
        occasion: "lounge",
        allowed: &["slippers", "sandals", "socks and slides", "loafers"],
        forbidden: &["formal dress shoes"],
        notes: "",
    },
    FootwearRules {
        occasion: "ethnic_fusion",
        allowed: &["loafers", "kolhapuris", "clean sneakers", "leather sandals"],
        forbidden: &["formal black oxfords", "sports shoes", "rubber chappals"],
        notes: "",
    },
];

pub fn all() -> &'static [FootwearRules] {
    FOOTWEAR_RULES
}

/// Rules for an occasion, accepting both vocabulary slugs and table keys.
pub fn rules_for(occasion_slug: &str) -> Option<&'static FootwearRules> {
    let key = occasion::table_slug(occasion_slug);
    FOOTWEAR_RULES.iter().find(|r| r.occasion == key)
}

/// Severity and care advice for a detected shoe condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionAssessment {
    pub condition: String,
    /// `None` when the shoes need no attention
    pub severity: Option<Severity>,
    pub issue: String,
    pub shoe_care_note: String,
}

/// Canonical shoe condition: `"Worn-Out"` and `"worn_out"` both become `"worn out"`.
pub fn normalize_condition(condition: &str) -> String {
    normalize_phrase(condition)
        .split(['-', '_', ' '])
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn assess_condition(condition: &str) -> ConditionAssessment {
    let key = normalize_condition(condition);
    let known = |severity: Option<Severity>, issue: &str, care: &str| ConditionAssessment {
        condition: key.clone(),
        severity,
        issue: issue.to_string(),
        shoe_care_note: care.to_string(),
    };

    match key.as_str() {
        "clean" => known(None, "", ""),
        "scuffed" => known(
            Some(Severity::Moderate),
            "Visibly scuffed leather reduces the quality signal of the entire outfit.",
            "Polish before next wear, or take to a cobbler this week.",
        ),
        "dirty" => known(
            Some(Severity::Critical),
            "Dirty shoes undermine the entire look regardless of how good the outfit is.",
            "Clean thoroughly before wearing again, this is a critical fix.",
        ),
        "worn out" => known(
            Some(Severity::Critical),
            "Worn-out shoes signal a lack of investment in the overall look.",
            "Replace this pair, they are past the point of repair.",
        ),
        "sole peeling" => known(
            Some(Severity::Critical),
            "A peeling sole is immediately visible and damages the overall impression.",
            "Replace immediately, cobbler repair may not be viable at this stage.",
        ),
        "yellowed sole" => known(
            Some(Severity::Moderate),
            "A yellowed sole reads as old and unmaintained.",
            "Use sole whitener or replace if yellowing is severe.",
        ),
        _ => ConditionAssessment {
            condition: condition.to_string(),
            severity: Some(Severity::Moderate),
            issue: format!(
                "Condition '{}' is unclear, inspect footwear before wearing.",
                condition
            ),
            shoe_care_note: "Inspect and clean or repair as needed.".to_string(),
        },
    }
}

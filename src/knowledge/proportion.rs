use std::str::FromStr;

use crate::knowledge::normalize_phrase;
use crate::models::{BodyShape, Height};

/// How much the trouser hem rests on the shoe.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum TrouserBreak {
    None,
    Slight,
    Half,
}

impl std::fmt::Display for TrouserBreak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrouserBreak::None => write!(f, "none"),
            TrouserBreak::Slight => write!(f, "slight"),
            TrouserBreak::Half => write!(f, "half"),
        }
    }
}

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum BeltUse {
    Emphasise,
    Avoid,
    Optional,
}

impl std::fmt::Display for BeltUse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BeltUse::Emphasise => write!(f, "emphasise"),
            BeltUse::Avoid => write!(f, "avoid"),
            BeltUse::Optional => write!(f, "optional"),
        }
    }
}

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum PrintScale {
    Small,
    Medium,
    Large,
}

impl std::fmt::Display for PrintScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrintScale::Small => write!(f, "small_print"),
            PrintScale::Medium => write!(f, "medium_print"),
            PrintScale::Large => write!(f, "large_print"),
        }
    }
}

/// Proportion guidance for one height and body shape combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProportionRules {
    pub height: Height,
    pub body_shape: BodyShape,
    /// The single most important silhouette objective
    pub visual_goal: &'static str,
    pub recommended: &'static [&'static str],
    pub avoid: &'static [&'static str],
    pub trouser_break: TrouserBreak,
    pub kurta_length: &'static str,
    pub jacket_length: &'static str,
    pub belt_use: BeltUse,
    pub layer_strategy: &'static str,
}

/// The full Height x BodyShape matrix. Petite entries always use no break.
pub fn rules(height: Height, body_shape: BodyShape) -> ProportionRules {
    use BodyShape::*;
    use Height::*;

    let base = ProportionRules {
        height,
        body_shape,
        visual_goal: "",
        recommended: &[],
        avoid: &[],
        trouser_break: TrouserBreak::Half,
        kurta_length: "",
        jacket_length: "",
        belt_use: BeltUse::Optional,
        layer_strategy: "",
    };

    match (height, body_shape) {
        (Tall, Rectangle) => ProportionRules {
            visual_goal: "Add width definition and waist interest to a long, straight frame",
            recommended: &[
                "Contrast top and bottom to create a visual break",
                "Belted silhouettes that nip the waist and suggest shape",
                "Structured shoulders to add breadth",
                "Horizontal detailing at chest or hip level",
                "Bold patterns, the height carries them without feeling overwhelming",
            ],
            avoid: &[
                "Boxy all-over with no definition, it elongates without adding shape",
                "Monochrome top-to-toe with no contrast, it flattens the silhouette",
                "Overly long hemlines that emphasise the vertical line",
            ],
            trouser_break: TrouserBreak::Slight,
            kurta_length: "mid-thigh",
            jacket_length: "hip-length",
            belt_use: BeltUse::Emphasise,
            layer_strategy: "Add a structured outer layer at hip length to create width contrast. \
                Open front works well and frames without closing the silhouette.",
            ..base
        },
        (Tall, Triangle) => ProportionRules {
            visual_goal: "Build shoulder presence and draw the eye upward away from wider hips",
            recommended: &[
                "Structured shoulders with padding or a strong shoulder seam",
                "Bold top details: patterns, textures, interesting necklines",
                "Dark bottoms to visually narrow the hip zone",
                "Contrast in favour of the top half",
                "V-necks and open collars to broaden the upper chest",
            ],
            avoid: &[
                "Tight bottoms with a tight top, hip width is maximised",
                "Horizontal patterns at hip level",
                "Light or bright bottoms paired with dark tops",
                "Dropped shoulder tops that shrink an already narrow shoulder line",
            ],
            trouser_break: TrouserBreak::Slight,
            kurta_length: "hip",
            jacket_length: "hip-length to mid-thigh",
            belt_use: BeltUse::Avoid,
            layer_strategy: "Layer structurally at the top. A blazer or structured shirt over a base \
                layer adds shoulder mass. Keep bottoms clean and untextured.",
            ..base
        },
        (Tall, InvertedTriangle) => ProportionRules {
            visual_goal: "Balance wide shoulders by drawing volume and interest downward",
            recommended: &[
                "Longer hemlines: mid-thigh to below-knee kurtas, longer jackets",
                "V-necks and vertical top lines to minimise chest breadth",
                "A-line or tapered bottoms for visual balance",
                "Muted, darker tones on top with more interesting textures below",
                "Straight-leg trousers wide enough to balance the upper body",
            ],
            avoid: &[
                "Shoulder pads or epaulettes",
                "Boat necks and wide horizontal collar lines",
                "Cropped tops or jackets that maximise the shoulder-to-hip gap",
                "Puffed sleeves or heavily textured upper arms",
                "Narrow, tapered trousers with a bulky top",
            ],
            trouser_break: TrouserBreak::None,
            kurta_length: "mid-thigh to below-knee",
            jacket_length: "mid-thigh or longer",
            belt_use: BeltUse::Optional,
            layer_strategy: "Keep layers minimal on top. A long open layer such as a longline \
                cardigan or open bandhgala elongates the torso and draws the eye down.",
            ..base
        },
        (Tall, Oval) => ProportionRules {
            visual_goal: "Create vertical length through the midsection and define the silhouette",
            recommended: &[
                "Vertical lines: pinstripes, long open layering, vertical seam details",
                "Open necklines such as a V-neck, open collar or unbuttoned mandarin",
                "Straight, unconstructed cuts that skim without clinging",
                "Longer hemlines that extend the vertical line past the midsection",
                "Monochrome dressing for maximum elongation",
            ],
            avoid: &[
                "Horizontal waist bands or belts",
                "Cropped tops that cut the eye at the widest point",
                "Un-tucked shirts without structure",
                "Hip-level horizontal patterns",
                "Boxy silhouettes all over",
            ],
            trouser_break: TrouserBreak::None,
            kurta_length: "mid-thigh to below-knee",
            jacket_length: "mid-thigh or longer",
            belt_use: BeltUse::Avoid,
            layer_strategy: "Single long vertical layer such as a longline blazer or kurta. \
                Avoid short outer layers that break the line.",
            ..base
        },
        (Tall, Trapezoid) => ProportionRules {
            visual_goal: "Maintain proportional balance, the frame is naturally balanced and height does the rest",
            recommended: &[
                "Most silhouettes work, focus on proportional balance",
                "Slightly tapered bottoms to keep the shape clean at height",
                "Structured outerwear to maintain presence",
            ],
            avoid: &[
                "Excessive volume everywhere at once",
                "Overly cropped tops, they look unbalanced at height",
            ],
            trouser_break: TrouserBreak::Slight,
            kurta_length: "mid-thigh",
            jacket_length: "hip to mid-thigh",
            belt_use: BeltUse::Optional,
            layer_strategy: "Experiment freely, these proportions support most combinations. \
                Watch that outer layers do not add unnecessary bulk.",
            ..base
        },
        (Average, Rectangle) => ProportionRules {
            visual_goal: "Add shape definition to a straight frame without adding unwanted height",
            recommended: &[
                "Belted or waist-defining cuts",
                "Contrast between top and bottom colour",
                "Structured shoulders with a slightly defined waist",
                "Mid-weight patterns that do not overwhelm at average height",
                "Half-break trousers as the safe default for a clean silhouette",
            ],
            avoid: &[
                "Boxy cuts with no waist interest",
                "Very long hemlines that cut visual leg length",
            ],
            trouser_break: TrouserBreak::Half,
            kurta_length: "hip to mid-thigh",
            jacket_length: "hip-length",
            belt_use: BeltUse::Emphasise,
            layer_strategy: "A structured jacket or bandhgala at hip length adds shape. \
                Keep the inner layer fitted.",
            ..base
        },
        (Average, Triangle) => ProportionRules {
            visual_goal: "Broaden the upper body and narrow the visual hip width",
            recommended: &[
                "Wide or structured lapels to build the shoulder frame",
                "Top details such as patterns, textures or chest pockets",
                "Darker, plain bottoms",
                "A half break on trousers to keep the leg clean",
            ],
            avoid: &[
                "Narrow collars that reduce the shoulder line",
                "Light or textured bottoms that draw attention to the hips",
                "Horizontal patterns below the waist",
            ],
            trouser_break: TrouserBreak::Half,
            kurta_length: "hip",
            jacket_length: "hip-length",
            belt_use: BeltUse::Avoid,
            layer_strategy: "A structured jacket or blazer is the most effective tool and builds \
                shoulder mass immediately. Keep the base slim.",
            ..base
        },
        (Average, InvertedTriangle) => ProportionRules {
            visual_goal: "Soften broad shoulders and balance the lower half",
            recommended: &[
                "Mid-thigh kurtas that elongate and balance at average height",
                "Vertical lines and V-neck openings",
                "Slightly wider trousers to balance upper body width",
                "A half break, clean without shortening the leg",
            ],
            avoid: &[
                "Boat necks, wide collars and shoulder emphasis",
                "Cropped jackets or short tops",
            ],
            trouser_break: TrouserBreak::Half,
            kurta_length: "mid-thigh",
            jacket_length: "mid-thigh",
            belt_use: BeltUse::Optional,
            layer_strategy: "A longline outer layer at mid-thigh draws the eye down and balances \
                the wide shoulder. Avoid short bomber-style jackets.",
            ..base
        },
        (Average, Oval) => ProportionRules {
            visual_goal: "Create vertical elongation through the midsection at average height",
            recommended: &[
                "Long vertical layers such as a longline jacket or structured kurta",
                "Open necklines: V, mandarin or no collar",
                "Mid-thigh to below-knee hemlines to extend the vertical",
                "Monochrome dressing in dark or neutral tones",
            ],
            avoid: &[
                "Waist bands, belts, anything that marks the widest zone",
                "Cropped tops",
                "Horizontal waist-level details",
                "Clingy fabrics",
            ],
            trouser_break: TrouserBreak::None,
            kurta_length: "mid-thigh to below-knee",
            jacket_length: "mid-thigh",
            belt_use: BeltUse::Avoid,
            layer_strategy: "One clean vertical outer layer. Avoid multiple short layers that \
                break the line and add horizontal interest.",
            ..base
        },
        (Average, Trapezoid) => ProportionRules {
            visual_goal: "Maintain the natural balance, standard proportional rules apply",
            recommended: &[
                "Most silhouettes work, concentrate on fit quality",
                "Half-break trousers are the safe default",
                "Slight waist definition in structured pieces",
            ],
            avoid: &["Excessive volume in both top and bottom at once"],
            trouser_break: TrouserBreak::Half,
            kurta_length: "hip to mid-thigh",
            jacket_length: "hip-length",
            belt_use: BeltUse::Optional,
            layer_strategy: "Standard layering: heavier fabric outside, base slim.",
            ..base
        },
        (Petite, Rectangle) => ProportionRules {
            visual_goal: "Add length to the frame while creating shape definition",
            recommended: &[
                "No trouser break, any break shortens the leg further",
                "Monochrome or tonal dressing to add visual height",
                "Slim-fit cuts, excess volume overwhelms a petite frame",
                "Ankle-length or cropped trousers that show the shoe",
                "Subtle vertical details to elongate",
            ],
            avoid: &[
                "Large prints that overwhelm the frame",
                "Mid-calf hemlines that chop the leg",
                "Heavy layering",
                "Wide-leg trousers without height",
            ],
            trouser_break: TrouserBreak::None,
            kurta_length: "hip",
            jacket_length: "hip-length (never longer, shortens further)",
            belt_use: BeltUse::Emphasise,
            layer_strategy: "Keep outer layers short, hip-length at most. Long layers are the \
                fastest way to shorten a petite frame.",
            ..base
        },
        (Petite, Triangle) => ProportionRules {
            visual_goal: "Build shoulder presence without adding height-reducing volume",
            recommended: &[
                "Structured shoulders to broaden and lift the eye upward",
                "No trouser break",
                "Short jackets, hip-length only, so the frame is not cut",
                "Ankle-length trousers to maximise leg length",
            ],
            avoid: &[
                "Mid-calf or longer hemlines",
                "Very wide-leg trousers, disproportionate at petite height",
                "Dropped shoulders",
            ],
            trouser_break: TrouserBreak::None,
            kurta_length: "hip",
            jacket_length: "hip-length only",
            belt_use: BeltUse::Avoid,
            layer_strategy: "A structured blazer or bandhgala at hip length is ideal, it adds \
                shoulder and stops at the right point.",
            ..base
        },
        (Petite, InvertedTriangle) => ProportionRules {
            visual_goal: "Balance wide shoulders without losing frame height",
            recommended: &[
                "No trouser break for maximum leg length",
                "V-neck to reduce chest breadth visually",
                "Slightly tapered trousers that show the ankle",
                "Hip-length kurtas, any longer and height is lost",
                "Darker tones on top to reduce emphasis",
            ],
            avoid: &[
                "Long kurtas or jackets, counter-productive at petite height",
                "Wide-leg trousers that shorten the leg",
                "Shoulder padding or epaulettes",
            ],
            trouser_break: TrouserBreak::None,
            kurta_length: "hip",
            jacket_length: "hip-length only",
            belt_use: BeltUse::Optional,
            layer_strategy: "Avoid extra layers on top. If layering is needed keep it short and \
                slim, a nehru jacket at hip length at most.",
            ..base
        },
        (Petite, Oval) => ProportionRules {
            visual_goal: "Elongate the silhouette vertically while managing midsection volume",
            recommended: &[
                "No trouser break, this is critical",
                "Head-to-toe monochrome in dark or neutral tones",
                "Vertical lines wherever possible: placket, seam, stripe",
                "A longline open jacket, provided it ends no lower than the knee",
                "Slim-leg trousers, not wide-leg",
            ],
            avoid: &[
                "Any waist marking: belts, waist bands, cinching",
                "Cropped tops",
                "Large prints that visually expand",
                "Mid-calf hemlines that cut the leg at its widest",
            ],
            trouser_break: TrouserBreak::None,
            kurta_length: "hip to mid-thigh (never below knee, shortens)",
            jacket_length: "hip-length maximum",
            belt_use: BeltUse::Avoid,
            layer_strategy: "One vertical layer in the same tonal family. Nothing that breaks \
                the line at the midsection.",
            ..base
        },
        (Petite, Trapezoid) => ProportionRules {
            visual_goal: "Use height-extending techniques on a naturally balanced frame",
            recommended: &[
                "No trouser break, every millimetre of leg counts",
                "Monochrome or tonal dressing to add visual height",
                "Well-fitted cuts, petite height needs precision rather than volume",
                "Ankle-length trousers with a slim shoe",
            ],
            avoid: &[
                "Mid-calf hemlines",
                "Heavy layering that adds bulk",
                "Oversized silhouettes",
            ],
            trouser_break: TrouserBreak::None,
            kurta_length: "hip",
            jacket_length: "hip-length",
            belt_use: BeltUse::Optional,
            layer_strategy: "Short, fitted outer layer only. Any long layer costs visual leg length.",
            ..base
        },
    }
}

/// String-keyed lookup. Unknown heights resolve to average and unknown shapes
/// to trapezoid, so the lookup never fails.
pub fn rules_for(height: &str, body_shape: &str) -> ProportionRules {
    let height = Height::from_str(height).unwrap_or(Height::Average);
    let shape = BodyShape::from_str(body_shape).unwrap_or(BodyShape::Trapezoid);
    rules(height, shape)
}

pub fn context_string(height: Height, body_shape: BodyShape) -> String {
    let r = rules(height, body_shape);
    let bullets = |items: &[&str]| {
        items
            .iter()
            .map(|item| format!("    · {}", item))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "Goal: {}\n  Do:\n{}\n  Avoid:\n{}\n  Trouser break  : {}\n  Kurta length   : {}\n  Jacket length  : {}\n  Belt use       : {}\n  Layer strategy : {}",
        r.visual_goal,
        bullets(r.recommended),
        bullets(r.avoid),
        r.trouser_break,
        r.kurta_length,
        r.jacket_length,
        r.belt_use,
        r.layer_strategy
    )
}

pub fn pattern_scale(build: &str, height: Height) -> PrintScale {
    let build = normalize_phrase(build);
    if height == Height::Petite || matches!(build.as_str(), "slim" | "lean") {
        return PrintScale::Small;
    }
    if height == Height::Tall && matches!(build.as_str(), "broad" | "stocky" | "athletic") {
        return PrintScale::Large;
    }
    PrintScale::Medium
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureAdvice {
    pub recommended_texture: &'static str,
    pub avoid_texture: &'static str,
    pub why: &'static str,
}

pub fn fabric_texture(body_shape: Option<BodyShape>) -> TextureAdvice {
    match body_shape {
        Some(BodyShape::Rectangle) => TextureAdvice {
            recommended_texture: "structured matte or subtle texture",
            avoid_texture: "very shiny or reflective fabrics",
            why: "Textured and structured fabrics add visual interest and apparent definition to \
                a straight frame. Shine adds width and can erase the shape being built.",
        },
        Some(BodyShape::Triangle) => TextureAdvice {
            recommended_texture: "structured matte on top, plain matte below",
            avoid_texture: "heavily textured or patterned bottoms",
            why: "Texture and pattern on the upper body build visual mass at the shoulders. \
                Plain, matte bottoms reduce hip emphasis.",
        },
        Some(BodyShape::InvertedTriangle) => TextureAdvice {
            recommended_texture: "matte top, soft texture or subtle pattern below",
            avoid_texture: "heavy texture or embellishment on the shoulders and chest",
            why: "Textured or embellished uppers add mass to an already wide shoulder. Softer \
                texture below creates balance.",
        },
        Some(BodyShape::Oval) => TextureAdvice {
            recommended_texture: "matte, structured fabrics with drape",
            avoid_texture: "clingy, shiny, or heavily textured fabrics",
            why: "Matte structured fabrics skim and drape without reflecting light onto the \
                midsection. Clingy or shiny fabrics emphasise volume.",
        },
        Some(BodyShape::Trapezoid) => TextureAdvice {
            recommended_texture: "most textures work, choose for occasion",
            avoid_texture: "excessive texture in both top and bottom simultaneously",
            why: "A balanced frame handles texture well. Doubling up heavy texture everywhere \
                adds bulk without purpose.",
        },
        None => TextureAdvice {
            recommended_texture: "structured matte",
            avoid_texture: "clingy or overly shiny fabrics",
            why: "Matte structured fabrics are the safest default across body types.",
        },
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn shape_strategy() -> impl Strategy<Value = BodyShape> {
        prop_oneof![
            Just(BodyShape::Rectangle),
            Just(BodyShape::Triangle),
            Just(BodyShape::InvertedTriangle),
            Just(BodyShape::Oval),
            Just(BodyShape::Trapezoid),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_petite_never_breaks(shape in shape_strategy()) {
            prop_assert_eq!(rules(Height::Petite, shape).trouser_break, TrouserBreak::None);
        }

        #[test]
        fn prop_string_lookup_is_total(height in "[a-z ]{0,10}", shape in "[a-z_ ]{0,18}") {
            let r = rules_for(&height, &shape);
            prop_assert!(!r.visual_goal.is_empty());
        }
    }
}

use crate::models::{BodyShape, Height};

/// Silhouette guidance for one body shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyTypeRules {
    pub shape: BodyShape,
    pub recommended: &'static [&'static str],
    pub avoid: &'static [&'static str],
    pub notes: &'static str,
}

pub fn rules(shape: BodyShape) -> BodyTypeRules {
    match shape {
        BodyShape::Rectangle => BodyTypeRules {
            shape,
            recommended: &[
                "structured shoulders",
                "belted silhouettes",
                "contrast top/bottom",
                "double-breasted jackets",
                "layering to add visual depth",
                "horizontal stripe on top to add perceived width",
            ],
            avoid: &[
                "boxy all-over with no definition",
                "single-colour head-to-toe without any waist emphasis",
            ],
            notes: "Goal: create the illusion of a defined waist.",
        },
        BodyShape::Triangle => BodyTypeRules {
            shape,
            recommended: &[
                "structured shoulders",
                "top details (lapels, pockets, patterns on chest)",
                "darker bottoms",
                "wider-collar shirts",
                "horizontal stripes or bold prints on top",
                "lighter colours on top",
            ],
            avoid: &[
                "tight bottom + tight top together",
                "hip-level horizontal patterns",
                "cargo or wide-leg trousers without structure on top",
            ],
            notes: "Goal: balance narrower shoulders against wider hips by drawing attention upward.",
        },
        BodyShape::InvertedTriangle => BodyTypeRules {
            shape,
            recommended: &[
                "longer hemlines",
                "V-necks and open necklines (draw eye inward and down)",
                "vertical top lines",
                "A-line or tapered bottoms",
                "mid-thigh or longer kurtas",
                "solid or small-pattern tops",
            ],
            avoid: &[
                "shoulder padding",
                "chest horizontal stripes",
                "puffed sleeves",
                "epaulettes or wide lapels",
                "bold top patterns that amplify shoulder width",
            ],
            notes: "Goal: minimise perceived shoulder width and elongate downward.",
        },
        BodyShape::Oval => BodyTypeRules {
            shape,
            recommended: &[
                "vertical lines and pinstripes",
                "open necklines (V-neck, open collar)",
                "straight cuts",
                "longer lengths",
                "dark monochromatic palette",
                "structured outer layer",
            ],
            avoid: &[
                "horizontal waist bands",
                "cropped tops",
                "un-tucked shirts without structure",
                "clingy fabrics",
                "bold horizontal patterns at the midsection",
            ],
            notes: "Goal: create a vertical, elongating line through the silhouette.",
        },
        BodyShape::Trapezoid => BodyTypeRules {
            shape,
            recommended: &[
                "most silhouettes work",
                "maintain proportional balance between top and bottom",
                "fitted garments that follow the natural taper",
                "both casual and formal cuts",
            ],
            avoid: &[
                "excessive bulk everywhere",
                "oversized top + oversized bottom simultaneously",
            ],
            notes: "Trapezoid is the most versatile male body shape.",
        },
    }
}

/// Recommended kurta length.
///
/// Height is checked before shape: petite always wins, then an inverted
/// triangle, then tall, then a rectangle on an average frame.
pub fn kurta_length(height: Height, shape: BodyShape) -> &'static str {
    if height == Height::Petite {
        return "at or just above hip, never lower (shortens the frame further)";
    }
    if shape == BodyShape::InvertedTriangle {
        return "mid-thigh or longer, balances broad shoulders by drawing the eye down";
    }
    if height == Height::Tall {
        return "mid-thigh or below";
    }
    if shape == BodyShape::Rectangle {
        return "hip to mid-thigh";
    }
    "mid-thigh is the safest choice for most occasions"
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn height_strategy() -> impl Strategy<Value = Height> {
        prop_oneof![Just(Height::Tall), Just(Height::Average), Just(Height::Petite)]
    }

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
        fn prop_petite_kurta_never_mentions_mid_thigh(shape in shape_strategy()) {
            prop_assert!(!kurta_length(Height::Petite, shape).contains("mid-thigh"));
        }

        #[test]
        fn prop_kurta_length_is_never_empty(height in height_strategy(), shape in shape_strategy()) {
            prop_assert!(!kurta_length(height, shape).is_empty());
        }
    }
}

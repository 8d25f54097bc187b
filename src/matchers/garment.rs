use itertools::Itertools;

use crate::knowledge::{normalize_key, normalize_phrase, title_case};
use crate::matchers::Verdict;
use crate::models::{FaceShape, Height};

const ALL_FACES: &[FaceShape] = &FaceShape::ALL;

/// Indian collar styles and the face shapes they flatter.
const INDIAN_COLLARS: &[(&str, &[FaceShape])] = &[
    (
        "bandhgala",
        &[FaceShape::Square, FaceShape::Oval, FaceShape::Oblong],
    ),
    (
        "nehru",
        &[FaceShape::Oval, FaceShape::Heart, FaceShape::Diamond],
    ),
    ("mandarin", ALL_FACES),
    ("angrakha", &[FaceShape::Oval, FaceShape::Heart]),
];

/// Western shirt collars and the face shapes they flatter.
const WESTERN_COLLARS: &[(&str, &[FaceShape])] = &[
    (
        "spread collar",
        &[FaceShape::Square, FaceShape::Oval, FaceShape::Oblong],
    ),
    (
        "button-down",
        &[FaceShape::Oval, FaceShape::Heart, FaceShape::Oblong],
    ),
    ("band collar", &[FaceShape::Oval, FaceShape::Oblong]),
    ("point collar", ALL_FACES),
    ("cutaway collar", &[FaceShape::Square, FaceShape::Oval]),
    ("club collar", &[FaceShape::Oval, FaceShape::Heart]),
];

/// Pairings ruled out before the compatibility table is consulted.
const WESTERN_COLLAR_AVOID: &[(&str, FaceShape)] = &[("spread collar", FaceShape::Round)];

const FORMAL_INDIAN_FABRICS: &[&str] = &["chanderi", "silk-cotton blend", "raw silk", "brocade"];
const SMART_FABRICS: &[&str] = &["cotton-silk blend", "linen-cotton", "structured cotton"];
const CASUAL_FABRICS: &[&str] = &["plain cotton", "block print", "linen"];

/// Suitable fabrics per occasion key. `None` means any fabric works.
const FABRIC_OCCASIONS: &[(&str, Option<&[&str]>)] = &[
    ("wedding_guest_indian", Some(FORMAL_INDIAN_FABRICS)),
    ("indian_formal", Some(FORMAL_INDIAN_FABRICS)),
    ("business_casual", Some(SMART_FABRICS)),
    ("smart_casual", Some(SMART_FABRICS)),
    ("indian_casual", Some(CASUAL_FABRICS)),
    ("casual", Some(CASUAL_FABRICS)),
    ("festival", None),
    (
        "ethnic_fusion",
        Some(&["cotton-silk blend", "structured cotton", "linen-cotton"]),
    ),
    ("party", Some(&["silk", "raw silk", "chanderi", "velvet"])),
];

/// Occasions where a plain cotton garment is two formality levels short.
const COTTON_SENSITIVE_OCCASIONS: &[&str] = &["wedding_guest_indian", "indian_formal", "party"];

const VALID_FUSIONS: &[(&str, &str)] = &[
    ("kurta", "tailored trousers"),
    ("kurta", "dark slim jeans"),
    ("kurta", "dark jeans"),
    ("bandhgala jacket", "western trousers"),
    ("nehru jacket", "shirt"),
];

const INVALID_FUSIONS: &[(&str, &str)] = &[
    ("sherwani", "jeans"),
    ("ethnic top", "track pants"),
    ("ethnic top", "gym bottoms"),
    ("formal kurta", "cargo shorts"),
    ("mojaris", "western formal suit"),
];

const NO_BELT_CASES: &[(&str, &str)] = &[
    ("denim", "untucked"),
    ("jeans", "untucked"),
    ("chinos", "untucked"),
    ("suit", "suspenders"),
    ("tailored suit", "suspenders"),
];

pub const LAYER_WEIGHT_REVERSED: &str = "Outer layer is lighter than base layer, reverse the order. \
     Heavier fabrics always go on the outside.";
pub const LAYER_FIT_REVERSED: &str = "Outer layer is slimmer than base layer, layering should taper inward. \
     Base layer slimmest, outer layer most relaxed.";

fn lookup<'a>(
    table: &'a [(&'static str, &'static [FaceShape])],
    collar: &str,
) -> Option<&'a [FaceShape]> {
    table
        .iter()
        .find(|(name, _)| *name == collar)
        .map(|&(_, shapes)| shapes)
}

pub fn indian_collar(collar_type: &str, face_shape: FaceShape) -> Verdict {
    let collar = normalize_phrase(collar_type);
    let Some(shapes) = lookup(INDIAN_COLLARS, &collar) else {
        return Verdict::ok();
    };
    if shapes.contains(&face_shape) {
        return Verdict::ok();
    }

    let better = INDIAN_COLLARS
        .iter()
        .filter(|(_, shapes)| shapes.contains(&face_shape))
        .map(|(name, _)| *name)
        .join(", ");
    Verdict::flag(format!(
        "{} collar is not ideal for {} face. Better collar choices for {} face: {}",
        title_case(&collar),
        face_shape,
        face_shape,
        better
    ))
}

pub fn western_collar(collar_type: &str, face_shape: FaceShape) -> Verdict {
    let collar = normalize_phrase(collar_type);

    if WESTERN_COLLAR_AVOID
        .iter()
        .any(|&(name, face)| name == collar && face == face_shape)
    {
        return Verdict::flag(format!(
            "'{}' collar is not recommended for {} face, it adds width at the collar which \
             amplifies the face's roundness. Try button-down or point collar instead.",
            collar_type, face_shape
        ));
    }

    let Some(shapes) = lookup(WESTERN_COLLARS, &collar) else {
        return Verdict::ok();
    };
    if shapes.contains(&face_shape) {
        return Verdict::ok();
    }

    let better = WESTERN_COLLARS
        .iter()
        .filter(|(name, shapes)| shapes.contains(&face_shape) && *name != collar)
        .map(|(name, _)| *name)
        .take(3)
        .join(", ");
    Verdict::flag(format!(
        "'{}' is not ideal for {} face. Better collars for {}: {}",
        collar_type, face_shape, face_shape, better
    ))
}

/// Whether a fabric suits an occasion. Occasions outside the table get no
/// ruling and festivals accept anything.
pub fn fabric_for_occasion(fabric: &str, occasion: &str) -> Verdict {
    let occ = normalize_key(occasion);
    let Some(&(_, suitable)) = FABRIC_OCCASIONS.iter().find(|(key, _)| *key == occ) else {
        return Verdict::ok();
    };
    let Some(suitable) = suitable else {
        return Verdict::ok();
    };

    let fab = normalize_phrase(fabric);
    if suitable
        .iter()
        .any(|s| s.contains(fab.as_str()) || fab.contains(s))
    {
        return Verdict::ok();
    }

    let occ_spaced = occ.replace('_', " ");
    if COTTON_SENSITIVE_OCCASIONS.contains(&occ.as_str())
        && fab.contains("cotton")
        && !fab.contains("silk")
    {
        return Verdict::flag(format!(
            "'{}' reads two formality levels below what {} requires. Upgrade to: {}.",
            fabric,
            occ_spaced,
            suitable.iter().take(2).join(", ")
        ));
    }

    Verdict::flag(format!(
        "'{}' is not ideal for {}. Recommended fabrics: {}.",
        fabric,
        occ_spaced,
        suitable.iter().take(3).join(", ")
    ))
}

/// Ethnic fusion check. Known-bad pairs are checked before known-good ones
/// and anything unlisted is neutral.
pub fn fusion(top_garment: &str, bottom_garment: &str) -> Verdict {
    let top = normalize_phrase(top_garment);
    let bottom = normalize_phrase(bottom_garment);

    if INVALID_FUSIONS
        .iter()
        .any(|(t, b)| top.contains(t) && bottom.contains(b))
    {
        return Verdict::flag(format!(
            "'{}' + '{}' is an invalid ethnic fusion, this combination undermines both garments.",
            top_garment, bottom_garment
        ));
    }
    Verdict::ok()
}

/// True when the pair is one of the known-good fusions.
pub fn is_recognised_fusion(top_garment: &str, bottom_garment: &str) -> bool {
    let top = normalize_phrase(top_garment);
    let bottom = normalize_phrase(bottom_garment);
    fusion(top_garment, bottom_garment).appropriate
        && VALID_FUSIONS
            .iter()
            .any(|(t, b)| top.contains(t) && bottom.contains(b))
}

pub fn trouser_break_policy(height: Height) -> &'static str {
    match height {
        Height::Tall => "no break or slight break, full break puddles and shortens the leg line",
        Height::Petite => "no break always, consider ankle-length trousers for maximum leg length",
        Height::Average => "half break is the safe default for average height",
    }
}

pub fn trouser_break_for_height(length: &str, height: Height) -> Verdict {
    if normalize_phrase(length).contains("full break") {
        return Verdict::flag(trouser_break_policy(height));
    }
    Verdict::ok()
}

fn weight_rank(weight: &str) -> u8 {
    match normalize_phrase(weight).as_str() {
        "light" => 1,
        "medium" => 2,
        "heavy" => 3,
        _ => 2,
    }
}

fn fit_rank(fit: &str) -> u8 {
    match normalize_phrase(fit).as_str() {
        "slim" | "fitted" => 1,
        "regular" => 2,
        "relaxed" => 3,
        "oversized" => 4,
        _ => 2,
    }
}

/// Layering issues, weight first. Heavier fabric belongs outside and fit
/// should relax from base to outer layer.
pub fn layering(base_weight: &str, outer_weight: &str, base_fit: &str, outer_fit: &str) -> Vec<String> {
    let mut issues = Vec::new();
    if weight_rank(outer_weight) < weight_rank(base_weight) {
        issues.push(LAYER_WEIGHT_REVERSED.to_string());
    }
    if fit_rank(outer_fit) < fit_rank(base_fit) {
        issues.push(LAYER_FIT_REVERSED.to_string());
    }
    issues
}

/// True when a belt is unnecessary for the bottom garment in this styling.
pub fn no_belt_needed(garment_type: &str, style: &str) -> bool {
    let garment = normalize_phrase(garment_type);
    let style = normalize_phrase(style);
    NO_BELT_CASES
        .iter()
        .any(|(g, s)| garment.contains(g) && style.contains(s))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn face_strategy() -> impl Strategy<Value = FaceShape> {
        prop_oneof![
            Just(FaceShape::Oval),
            Just(FaceShape::Square),
            Just(FaceShape::Round),
            Just(FaceShape::Oblong),
            Just(FaceShape::Heart),
            Just(FaceShape::Diamond),
        ]
    }

    fn weight_strategy() -> impl Strategy<Value = &'static str> {
        prop_oneof![Just("light"), Just("medium"), Just("heavy"), Just("unknown")]
    }

    fn fit_strategy() -> impl Strategy<Value = &'static str> {
        prop_oneof![
            Just("slim"),
            Just("fitted"),
            Just("regular"),
            Just("relaxed"),
            Just("oversized"),
            Just("baggy"),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_collar_reason_empty_iff_appropriate(
            collar in "[a-z -]{0,16}",
            face in face_strategy(),
        ) {
            for v in [indian_collar(&collar, face), western_collar(&collar, face)] {
                prop_assert_eq!(v.appropriate, v.reason.is_empty());
            }
        }

        #[test]
        fn prop_point_and_mandarin_suit_every_face(face in face_strategy()) {
            prop_assert!(western_collar("point collar", face).appropriate);
            prop_assert!(indian_collar("mandarin", face).appropriate);
        }

        #[test]
        fn prop_layering_same_layer_never_flags(
            weight in weight_strategy(),
            fit in fit_strategy(),
        ) {
            prop_assert!(layering(weight, weight, fit, fit).is_empty());
        }

        #[test]
        fn prop_layering_at_most_two_issues(
            bw in weight_strategy(),
            ow in weight_strategy(),
            bf in fit_strategy(),
            of in fit_strategy(),
        ) {
            prop_assert!(layering(bw, ow, bf, of).len() <= 2);
        }
    }
}

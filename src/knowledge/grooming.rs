use crate::knowledge::normalize_phrase;
use crate::models::{FaceShape, Score};

/// Recommended and avoided styles for one face shape. Shared by haircut and
/// beard rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleRules {
    pub face_shape: FaceShape,
    pub recommended: &'static [&'static str],
    pub avoid: &'static [&'static str],
    pub notes: &'static str,
}

pub fn haircut_rules(face_shape: FaceShape) -> StyleRules {
    match face_shape {
        FaceShape::Oval => StyleRules {
            face_shape,
            recommended: &[
                "most cuts work",
                "classic taper fade",
                "side part",
                "quiff",
                "textured crop",
                "slicked back",
            ],
            avoid: &[
                "excessive height that further elongates the face",
                "very tall quiff without side volume",
            ],
            notes: "Oval is the most versatile face shape for haircuts.",
        },
        FaceShape::Square => StyleRules {
            face_shape,
            recommended: &[
                "textured crops",
                "side parts",
                "tapered sides with texture on top",
                "fades with soft top styling",
                "modern quiff with movement",
            ],
            avoid: &[
                "boxy cuts",
                "bowl cuts",
                "blunt fringes that emphasise the jaw width",
                "all-one-length cuts with no fade",
            ],
            notes: "Soften the angular jaw, avoid anything that adds squareness.",
        },
        FaceShape::Round => StyleRules {
            face_shape,
            recommended: &[
                "height on top (pompadour, quiff, faux hawk)",
                "tight sides (high fade, undercut)",
                "angular or geometric styling on top",
                "textured crop with height",
            ],
            avoid: &[
                "bowl cuts",
                "unstyled curtains",
                "side sweeps without any height",
                "full volume on sides",
            ],
            notes: "Add height to elongate and keep the sides tight to reduce perceived width.",
        },
        FaceShape::Oblong => StyleRules {
            face_shape,
            recommended: &[
                "side sweeps",
                "volume on sides",
                "medium-length styles with width",
                "curtains or fringe",
                "tousled texture at the sides",
            ],
            avoid: &[
                "height, which elongates the face further",
                "very short sides with tall top",
                "slicked-back styles with no side volume",
            ],
            notes: "Add width, never height. The face is already long.",
        },
        FaceShape::Heart => StyleRules {
            face_shape,
            recommended: &[
                "medium length with soft fringe",
                "side parts that break forehead width",
                "styles with volume at the jaw level",
                "textured mid-length",
            ],
            avoid: &[
                "heavy top-heavy volume",
                "very short sides that emphasise the wide forehead",
                "high fades with no top coverage",
            ],
            notes: "Balance wide forehead with volume lower down.",
        },
        FaceShape::Diamond => StyleRules {
            face_shape,
            recommended: &[
                "styles that maintain width at forehead and jaw",
                "short to medium length",
                "textured fringe",
                "soft side parts",
            ],
            avoid: &[
                "narrow side profiles",
                "very slicked-back styles",
                "styles that taper at both forehead and jaw simultaneously",
            ],
            notes: "Keep width visible at forehead and jaw to soften narrow cheekbones.",
        },
    }
}

pub fn beard_rules(face_shape: FaceShape) -> StyleRules {
    match face_shape {
        FaceShape::Oval => StyleRules {
            face_shape,
            recommended: &[
                "any style",
                "classic full beard recommended",
                "short stubble",
                "groomed medium beard",
            ],
            avoid: &[],
            notes: "Oval suits all beard styles.",
        },
        FaceShape::Square => StyleRules {
            face_shape,
            recommended: &[
                "longer on chin to soften jaw",
                "cheeks and sides trimmed shorter",
                "chin-extended goatee",
                "rounded full beard with longer chin",
            ],
            avoid: &[
                "wide full cheek coverage that adds jaw width",
                "square-cut beard that mirrors the jaw shape",
            ],
            notes: "Soften the jaw: length on chin, shorter on sides.",
        },
        FaceShape::Round => StyleRules {
            face_shape,
            recommended: &[
                "extended chin beard to elongate",
                "sides kept tight or clean",
                "short goatee",
                "chin strap with chin extension",
            ],
            avoid: &[
                "full round beard that adds width",
                "mutton chops",
                "heavy cheek coverage",
            ],
            notes: "Elongate the face: length at chin is critical, tight sides.",
        },
        FaceShape::Oblong => StyleRules {
            face_shape,
            recommended: &[
                "full and wide to add width",
                "boxed beard",
                "mutton chops or extended sideburns",
            ],
            avoid: &[
                "long chin extension (elongates further)",
                "narrow chin-only styles",
            ],
            notes: "Add width, not length. A full beard adds needed width to the face.",
        },
        FaceShape::Heart => StyleRules {
            face_shape,
            recommended: &[
                "fuller chin to balance narrower jaw",
                "light cheek coverage",
                "rounded full beard",
                "extended chin with kept sides",
            ],
            avoid: &[
                "bare chin with heavy sideburns",
                "styles that widen the already-wide forehead area",
            ],
            notes: "Balance wide forehead with chin fullness.",
        },
        FaceShape::Diamond => StyleRules {
            face_shape,
            recommended: &[
                "full at jaw",
                "cheeks clean (avoids width at cheekbones)",
                "chin-focused full beard",
            ],
            avoid: &[
                "heavy cheek coverage (widens cheekbones)",
                "narrow chin-only styles",
            ],
            notes: "Full jaw and clean cheeks balance the narrow forehead and chin.",
        },
    }
}

pub fn eyebrow_recommendation(face_shape: FaceShape) -> &'static str {
    match face_shape {
        FaceShape::Oval => "Well-groomed natural arch. Slight angle complements balance.",
        FaceShape::Square => "Soft arch to counterbalance the angular jaw. Avoid flat brows.",
        FaceShape::Round => "High arch to add vertical length. Avoid flat or round brows.",
        FaceShape::Oblong => "Flat to slightly arched, avoids adding more perceived length.",
        FaceShape::Heart => "Soft natural arch. Avoid overly thin or heavily shaped brows.",
        FaceShape::Diamond => "Curved arch to balance the angular cheekbones.",
    }
}

pub fn score_beard_grooming(quality: &str) -> Score {
    let score = match normalize_phrase(quality).as_str() {
        "well groomed" => 9,
        "average" => 6,
        "unkempt" => 3,
        "not applicable" => 8,
        _ => 5,
    };
    Score::clamped(score)
}

/// Styling products keyed on hair texture, then density for straight hair.
pub fn styling_products(hair_texture: &str, hair_density: &str) -> Vec<String> {
    let texture = normalize_phrase(hair_texture);
    let density = normalize_phrase(hair_density);

    let mut products = Vec::new();
    if texture.contains("straight") {
        products.push(if density.contains("thick") {
            "matte clay"
        } else {
            "light pomade"
        });
    } else if texture.contains("wavy") {
        products.push("curl-enhancing cream");
    } else if texture.contains("curly") || texture.contains("coily") {
        products.extend(["curl cream", "leave-in conditioner"]);
    }
    products.push("SPF moisturiser for scalp");
    products.into_iter().map(String::from).collect()
}

use crate::knowledge::{normalize_phrase, to_owned_list};
use crate::models::SkinUndertone;

/// Colours to wear and colours to avoid for one undertone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub wear: &'static [&'static str],
    pub avoid: &'static [&'static str],
}

pub fn palette(undertone: SkinUndertone) -> Palette {
    match undertone {
        SkinUndertone::Warm => Palette {
            wear: &[
                "rust",
                "terracotta",
                "camel",
                "warm beige",
                "mustard",
                "peach",
                "coral",
                "warm red",
                "burnt orange",
                "olive green",
                "warm brown",
                "cream",
                "gold",
            ],
            avoid: &[
                "cool grey",
                "icy white",
                "lavender",
                "cobalt blue",
                "cool pink",
                "silver",
            ],
        },
        SkinUndertone::Cool => Palette {
            wear: &[
                "navy",
                "burgundy",
                "cool grey",
                "emerald",
                "cobalt",
                "cool white",
                "rose",
                "mauve",
                "icy blue",
                "charcoal",
                "silver",
                "cool teal",
            ],
            avoid: &["warm yellows", "orange", "rust", "warm beige", "gold"],
        },
        SkinUndertone::Neutral => Palette {
            wear: &[
                "muted rust",
                "muted navy",
                "soft grey",
                "dusty rose",
                "warm taupe",
                "desaturated teal",
                "soft burgundy",
                "stone",
                "sage",
                "blush",
            ],
            avoid: &["neon yellow", "neon orange", "electric blue", "hot pink"],
        },
        SkinUndertone::DeepWarm => Palette {
            wear: &[
                "sapphire",
                "emerald",
                "deep burgundy",
                "royal purple",
                "warm earth tones",
                "gold",
                "rust",
                "deep teal",
                "forest green",
                "rich burgundy",
            ],
            avoid: &[
                "pastel pink",
                "pastel yellow",
                "pastel blue",
                "pastel lavender",
                "neon",
                "very light neutrals",
                "cream",
            ],
        },
        SkinUndertone::DeepCool => Palette {
            wear: &[
                "jewel tones",
                "cobalt blue",
                "fuchsia",
                "royal purple",
                "silver",
                "cool emerald",
                "icy white",
                "deep teal",
                "charcoal",
            ],
            avoid: &[
                "rust",
                "warm earth tones",
                "gold",
                "warm orange",
                "camel",
            ],
        },
        SkinUndertone::OliveWarm => Palette {
            wear: &[
                "warm earth tones",
                "muted greens",
                "warm tans",
                "terracotta",
                "deep blues",
                "mustard",
                "rust",
                "forest green",
                "warm navy",
            ],
            avoid: &["nude beige", "cool pastels", "stark white", "icy pink"],
        },
    }
}

pub fn palette_do(undertone: SkinUndertone) -> Vec<String> {
    to_owned_list(palette(undertone).wear)
}

pub fn palette_avoid(undertone: SkinUndertone) -> Vec<String> {
    to_owned_list(palette(undertone).avoid)
}

/// Unordered pairs that clash regardless of which side appears first.
const CLASH_PAIRS: &[(&str, &str)] = &[
    ("rust", "cool grey"),
    ("terracotta", "cobalt blue"),
    ("mustard", "lavender"),
    ("orange", "pink"),
    ("red", "green"),
    ("yellow", "purple"),
    ("icy white", "warm beige"),
    ("neon yellow", "neon pink"),
    ("royal purple", "warm orange"),
];

/// Tonal families. Two colours from the same family read as monochrome and
/// never clash.
const MONO_FAMILIES: &[&[&str]] = &[
    &["navy", "cobalt", "icy blue", "denim blue", "deep blue"],
    &["rust", "terracotta", "burnt orange", "warm orange", "coral"],
    &["burgundy", "deep burgundy", "wine", "maroon"],
    &["emerald", "forest green", "olive green", "sage"],
    &["charcoal", "cool grey", "slate", "silver"],
    &["camel", "warm beige", "warm tan", "sand"],
    &["ivory", "cream", "warm cream", "off-white"],
];

pub fn same_family(a: &str, b: &str) -> bool {
    let a = normalize_phrase(a);
    let b = normalize_phrase(b);
    MONO_FAMILIES
        .iter()
        .any(|family| family.contains(&a.as_str()) && family.contains(&b.as_str()))
}

/// True when the two colours form a known clashing pair. Symmetric.
pub fn is_clash(a: &str, b: &str) -> bool {
    let a = normalize_phrase(a);
    let b = normalize_phrase(b);
    if a == b || same_family(&a, &b) {
        return false;
    }
    CLASH_PAIRS
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

/// Every clashing pair among `colors`, in input order, normalized.
pub fn detect_clashes(colors: &[String]) -> Vec<(String, String)> {
    let normalized: Vec<String> = colors.iter().map(|c| normalize_phrase(c)).collect();
    let mut clashes = Vec::new();
    for (i, a) in normalized.iter().enumerate() {
        for b in &normalized[i + 1..] {
            if is_clash(a, b) {
                clashes.push((a.clone(), b.clone()));
            }
        }
    }
    clashes
}

pub fn is_undertone_color_appropriate(color: &str, undertone: SkinUndertone) -> bool {
    let color = normalize_phrase(color);
    palette(undertone).wear.contains(&color.as_str())
}

pub fn recommended_print_scale(build: &str) -> &'static str {
    match normalize_phrase(build).as_str() {
        "slim" | "lean" | "petite" => "small-scale prints only, large patterns overwhelm the frame",
        "broad" | "stocky" | "athletic" => {
            "medium to large prints work well, avoid micro-prints that read as texture"
        }
        _ => "medium-scale prints are safest, most proportions work",
    }
}

/// Celebration palette for Indian occasions, grouped by depth of colouring.
pub fn south_asian_palette(undertone: SkinUndertone) -> Vec<String> {
    let colors: &[&str] = match undertone {
        SkinUndertone::DeepWarm => &[
            "jewel tones",
            "gold",
            "warm burgundy",
            "deep orange",
            "forest green",
        ],
        SkinUndertone::OliveWarm | SkinUndertone::Warm => &[
            "mustard",
            "rust",
            "deep teal",
            "warm navy",
            "ivory",
            "earthy browns",
        ],
        _ => &[
            "wide range, avoid nude too close to skin tone",
            "terracotta",
            "warm navy",
            "rust",
            "olive green",
        ],
    };
    to_owned_list(colors)
}

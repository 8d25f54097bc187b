use std::str::FromStr;

use crate::knowledge::{capitalize, normalize_phrase};
use crate::models::{Season, SkinUndertone};

/// One seasonal colour type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonalType {
    pub season: Season,
    pub description: &'static str,
    pub characteristics: &'static str,
    pub intensity: &'static str,
    pub palette_do: &'static [&'static str],
    pub palette_avoid: &'static [&'static str],
    pub fabric_finishes: &'static [&'static str],
}

pub fn seasonal_type(season: Season) -> SeasonalType {
    match season {
        Season::Spring => SeasonalType {
            season,
            description: "Warm, clear, light",
            characteristics: "Warm or neutral undertone with light to medium skin depth. \
                Hair typically medium to light brown, golden, or warm black.",
            intensity: "light and clear",
            palette_do: &[
                "peach",
                "coral",
                "warm ivory",
                "golden yellow",
                "warm turquoise",
                "bright coral red",
                "camel",
                "warm salmon",
                "light warm brown",
                "golden tan",
                "grass green",
                "warm sky blue",
                "clear orange",
            ],
            palette_avoid: &[
                "cool grey",
                "muted navy",
                "dark burgundy",
                "cool white",
                "black",
                "mauve",
                "dusty rose",
                "forest green",
                "icy lavender",
            ],
            fabric_finishes: &["soft sheen", "clear", "lightweight matte"],
        },
        Season::Summer => SeasonalType {
            season,
            description: "Cool, muted, light",
            characteristics: "Cool or neutral undertone with light to medium skin depth. \
                Hair often light to medium ash or cool brown.",
            intensity: "cool and soft",
            palette_do: &[
                "dusty rose",
                "mauve",
                "powder blue",
                "soft lavender",
                "cool grey",
                "slate blue",
                "dusty teal",
                "soft white",
                "muted pink",
                "periwinkle",
                "cool taupe",
                "light sage",
                "cool beige",
            ],
            palette_avoid: &[
                "warm orange",
                "rust",
                "camel",
                "warm gold",
                "bright coral",
                "warm brown",
                "mustard",
                "tomato red",
                "warm olive",
            ],
            fabric_finishes: &["matte", "soft sheen", "jersey"],
        },
        Season::Autumn => SeasonalType {
            season,
            description: "Warm, muted, deep",
            characteristics: "Warm undertone (warm, deep warm or olive warm) with medium to deep \
                skin. Hair dark brown, warm black, or deep auburn. Common in South Asian colouring.",
            intensity: "deep and muted",
            palette_do: &[
                "rust",
                "terracotta",
                "burnt orange",
                "deep olive",
                "warm brown",
                "camel",
                "mustard",
                "warm khaki",
                "forest green",
                "warm teal",
                "brick red",
                "warm burgundy",
                "cognac",
                "dark chocolate",
                "gold",
                "deep peach",
            ],
            palette_avoid: &[
                "icy white",
                "cool grey",
                "pastel blue",
                "cool pink",
                "lavender",
                "bright cobalt",
                "cool silver",
                "stark black",
            ],
            fabric_finishes: &["matte", "textured matte", "soft nap"],
        },
        Season::Winter => SeasonalType {
            season,
            description: "Cool, clear, deep",
            characteristics: "Cool undertone (cool or deep cool) with medium to deep skin. \
                Hair dark, often jet black or very dark brown. High contrast overall.",
            intensity: "deep and rich",
            palette_do: &[
                "true black",
                "bright white",
                "navy",
                "royal blue",
                "emerald",
                "deep burgundy",
                "fuchsia",
                "sapphire",
                "cool red",
                "charcoal",
                "icy pink",
                "cobalt",
                "deep purple",
                "cool magenta",
            ],
            palette_avoid: &[
                "warm orange",
                "camel",
                "rust",
                "warm beige",
                "warm gold",
                "muted earth tones",
                "warm olive",
                "peach",
            ],
            fabric_finishes: &["jewel sheen", "clear", "structured matte"],
        },
    }
}

const LIGHT_HAIR_KEYWORDS: &[&str] = &["blonde", "light", "golden", "auburn", "red", "brown"];

/// Derives the seasonal type from undertone, skin depth and hair colour.
///
/// Deep and olive undertones decide on their own. Plain warm needs a light
/// depth and a light hair keyword to reach spring; cool and neutral split on
/// depth alone.
pub fn derive_seasonal_type(undertone: SkinUndertone, skin_tone_depth: &str, hair_color: &str) -> Season {
    let depth = normalize_phrase(skin_tone_depth);
    let light_depth = matches!(depth.as_str(), "light" | "medium");
    let hair = normalize_phrase(hair_color);
    let light_hair = LIGHT_HAIR_KEYWORDS.iter().any(|kw| hair.contains(kw));

    match undertone {
        SkinUndertone::DeepWarm | SkinUndertone::OliveWarm => Season::Autumn,
        SkinUndertone::DeepCool => Season::Winter,
        SkinUndertone::Warm if light_depth && light_hair => Season::Spring,
        SkinUndertone::Warm => Season::Autumn,
        SkinUndertone::Cool if light_depth => Season::Summer,
        SkinUndertone::Cool => Season::Winter,
        SkinUndertone::Neutral if light_depth => Season::Summer,
        SkinUndertone::Neutral => Season::Autumn,
    }
}

/// Prompt block describing a season's palette. Unknown or empty names give "".
pub fn context_string(season: &str) -> String {
    let Ok(season) = Season::from_str(season) else {
        return String::new();
    };
    let st = seasonal_type(season);
    let join = |items: &[&str], n: usize| {
        items
            .iter()
            .take(n)
            .map(|c| capitalize(c))
            .collect::<Vec<_>>()
            .join("  ·  ")
    };

    format!(
        "Seasonal type: {} ({})\n  Wear : {}\n  Avoid: {}\n  Fabric finish: {}",
        st.season,
        st.description,
        join(st.palette_do, 8),
        join(st.palette_avoid, 6),
        st.fabric_finishes.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_season_is_populated() {
        for season in Season::ALL {
            let st = seasonal_type(season);
            assert_eq!(st.season, season);
            assert!(st.palette_do.len() >= 8);
            assert!(st.palette_avoid.len() >= 6);
            assert_eq!(st.fabric_finishes.len(), 3);
        }
    }

    #[test]
    fn test_derivation_matrix() {
        assert_eq!(derive_seasonal_type(SkinUndertone::DeepWarm, "light", "blonde"), Season::Autumn);
        assert_eq!(derive_seasonal_type(SkinUndertone::OliveWarm, "wheatish", "black"), Season::Autumn);
        assert_eq!(derive_seasonal_type(SkinUndertone::DeepCool, "light", ""), Season::Winter);
        assert_eq!(derive_seasonal_type(SkinUndertone::Warm, "Medium", "golden brown"), Season::Spring);
        assert_eq!(derive_seasonal_type(SkinUndertone::Warm, "medium", "black"), Season::Autumn);
        assert_eq!(derive_seasonal_type(SkinUndertone::Warm, "tan", "blonde"), Season::Autumn);
        assert_eq!(derive_seasonal_type(SkinUndertone::Cool, "light", "black"), Season::Summer);
        assert_eq!(derive_seasonal_type(SkinUndertone::Cool, "deep", "black"), Season::Winter);
        assert_eq!(derive_seasonal_type(SkinUndertone::Neutral, "medium", "black"), Season::Summer);
        assert_eq!(derive_seasonal_type(SkinUndertone::Neutral, "tan", "black"), Season::Autumn);
    }

    #[test]
    fn test_context_string() {
        let ctx = context_string("autumn");
        assert!(ctx.starts_with("Seasonal type: Autumn (Warm, muted, deep)\n"));
        assert!(ctx.contains("  Wear : Rust  ·  Terracotta"));
        assert!(ctx.ends_with("  Fabric finish: matte, textured matte, soft nap"));

        assert_eq!(context_string(""), "");
        assert_eq!(context_string("monsoon"), "");
    }
}

// Static fashion-domain lookup tables.
//
// Every lookup is total: a key outside the table resolves to a documented
// neutral default instead of an error.

pub mod accessory;
pub mod archetype;
pub mod body;
pub mod color;
pub mod fabric;
pub mod footwear;
pub mod grooming;
pub mod occasion;
pub mod proportion;
pub mod seasonal;

/// Canonical form for slug-like keys: trimmed, lower-case, spaces as underscores.
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace(' ', "_")
}

/// Canonical form for keys that naturally contain spaces, such as fabric
/// names or footwear conditions.
pub fn normalize_phrase(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Upper-cases the first character and leaves the rest untouched.
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Title-cases an underscore slug: `"smart_casual"` becomes `"Smart Casual"`.
pub(crate) fn title_case(slug: &str) -> String {
    slug.split(['_', ' '])
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("  Wedding Guest Indian "), "wedding_guest_indian");
        assert_eq!(normalize_key("GYM"), "gym");
        assert_eq!(normalize_key(""), "");
    }

    #[test]
    fn test_normalize_phrase_keeps_spaces() {
        assert_eq!(normalize_phrase(" Sole Peeling"), "sole peeling");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("ethnic_traditional"), "Ethnic Traditional");
        assert_eq!(title_case("classic"), "Classic");
        assert_eq!(capitalize("navy"), "Navy");
        assert_eq!(capitalize(""), "");
    }
}

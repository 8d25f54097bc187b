use crate::knowledge::normalize_key;

/// The occasion vocabulary accepted by the CLI and the advisor.
pub const OCCASIONS: [&str; 14] = [
    "indian_formal",
    "indian_casual",
    "ethnic_fusion",
    "western_business_formal",
    "western_business_casual",
    "western_streetwear",
    "smart_casual",
    "party",
    "wedding_guest_indian",
    "festival",
    "travel",
    "gym",
    "beach",
    "lounge",
];

const INDIAN_MARKERS: &[&str] = &["indian", "ethnic", "fusion", "wedding_guest", "festival"];

const WESTERN_MARKERS: &[&str] = &[
    "western",
    "business",
    "streetwear",
    "smart_casual",
    "party",
    "office",
    "gym",
    "travel",
    "beach",
    "lounge",
];

pub fn is_known(occasion: &str) -> bool {
    OCCASIONS.contains(&normalize_key(occasion).as_str())
}

/// Occasions whose garments follow Indian-wear rules (collars, fabrics, kurta length).
pub fn is_indian_coded(occasion: &str) -> bool {
    let key = normalize_key(occasion);
    INDIAN_MARKERS.iter().any(|m| key.contains(m))
}

/// Occasions whose garments follow Western tailoring rules.
///
/// Not exclusive with [`is_indian_coded`].
pub fn is_western_coded(occasion: &str) -> bool {
    let key = normalize_key(occasion);
    WESTERN_MARKERS.iter().any(|m| key.contains(m))
}

/// Maps a vocabulary slug onto the key used by the footwear and fabric tables,
/// which group the Western business occasions under shorter names.
pub fn table_slug(occasion: &str) -> String {
    let key = normalize_key(occasion);
    match key.as_str() {
        "western_business_formal" => "western_formal".to_string(),
        "western_business_casual" => "business_casual".to_string(),
        "western_streetwear" => "streetwear".to_string(),
        _ => key,
    }
}

/// Human form of a slug, used in remark text: `"indian_formal"` becomes `"indian formal"`.
pub fn spaced(occasion: &str) -> String {
    normalize_key(occasion).replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_is_normalized() {
        for occ in OCCASIONS {
            assert_eq!(normalize_key(occ), occ);
            assert!(is_known(occ));
        }
        assert!(is_known("Smart Casual"));
        assert!(!is_known("moon landing"));
    }

    #[test]
    fn test_coding() {
        assert!(is_indian_coded("wedding_guest_indian"));
        assert!(is_indian_coded("Ethnic Fusion"));
        assert!(!is_indian_coded("gym"));

        assert!(is_western_coded("western_business_formal"));
        assert!(is_western_coded("party"));
        assert!(!is_western_coded("indian_formal"));
        assert!(!is_western_coded("festival"));
    }

    #[test]
    fn test_table_slug_aliases() {
        assert_eq!(table_slug("western_business_formal"), "western_formal");
        assert_eq!(table_slug("Western Business Casual"), "business_casual");
        assert_eq!(table_slug("western_streetwear"), "streetwear");
        assert_eq!(table_slug("party"), "party");
        assert_eq!(spaced("wedding_guest_indian"), "wedding guest indian");
    }
}

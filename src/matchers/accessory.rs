use crate::knowledge::{accessory, color, normalize_phrase};
use crate::matchers::{Verdict, contains_any};

const PLASTIC_WATCHES: &[&str] = &["plastic", "plastic case", "casio plastic"];
const RUBBER_STRAPS: &[&str] = &["rubber", "silicone", "sport strap", "rubber strap"];

const BLACK_FAMILY: &[&str] = &["black", "dark black", "charcoal"];
const BROWN_FAMILY: &[&str] = &[
    "brown",
    "tan",
    "cognac",
    "dark brown",
    "light brown",
    "caramel",
    "chestnut",
];

/// Garments with self-closing silhouettes that never take a belt.
const NO_BELT_GARMENTS: &[&str] = &["sherwani", "bandhgala", "formal kurta", "achkan", "angrakha"];

pub const MAX_RINGS: u32 = 2;

const BACKPACK_OCCASIONS: &[&str] = &[
    "casual",
    "travel",
    "streetwear",
    "business casual",
    "gym",
    "beach",
];
const JHOLA_OCCASIONS: &[&str] = &["indian casual", "casual", "festival", "ethnic fusion"];

const HEAVY_FABRICS: &[&str] = &["brocade", "silk", "velvet", "raw silk", "chanderi"];
const LIGHT_FABRICS: &[&str] = &["cotton", "linen", "muslin"];

/// Plastic cases and rubber straps read as casual. Only checked at formality 4 and above.
pub fn watch_strap(strap_material: &str, occasion: &str) -> Verdict {
    if !accessory::is_formal(occasion) {
        return Verdict::ok();
    }
    let strap = normalize_phrase(strap_material);

    if contains_any(&strap, PLASTIC_WATCHES) {
        return Verdict::flag(
            "Plastic or Casio-style watch is never appropriate for formal occasions",
        );
    }
    if contains_any(&strap, RUBBER_STRAPS) {
        return Verdict::flag(format!(
            "Rubber/sport strap signals casual energy, swap to leather strap \
             (tan, black, or dark brown) or simple metal bracelet for {}",
            accessory::occasion_key(occasion)
        ));
    }
    Verdict::ok()
}

/// Black belts go with black shoes, brown-family belts with any brown-family
/// shoe. Other belt colours carry no rule.
pub fn belt_shoe(belt_color: &str, shoe_color: &str) -> Verdict {
    let belt = normalize_phrase(belt_color);
    let shoe = normalize_phrase(shoe_color);

    if contains_any(&belt, BLACK_FAMILY) {
        if !contains_any(&shoe, BLACK_FAMILY) {
            return Verdict::flag(format!(
                "Black belt should pair with black shoes, detected {}",
                shoe_color
            ));
        }
    } else if contains_any(&belt, BROWN_FAMILY) && !contains_any(&shoe, BROWN_FAMILY) {
        return Verdict::flag(format!(
            "Brown-family belt ({}) should pair with brown/tan/cognac shoes, detected {}",
            belt_color, shoe_color
        ));
    }
    Verdict::ok()
}

pub fn belt_with_garment(garment_type: &str) -> Verdict {
    let garment = normalize_phrase(garment_type);
    if contains_any(&garment, NO_BELT_GARMENTS) {
        return Verdict::flag(format!(
            "Never wear a belt with {}, these garments have self-closing silhouettes \
             and belts disrupt the drape",
            garment_type
        ));
    }
    Verdict::ok()
}

pub fn ring_count(count: u32, occasion: &str) -> Verdict {
    if count > MAX_RINGS {
        return Verdict::flag(format!(
            "More than {} rings visible across both hands, reduces visual intentionality. \
             Edit to maximum {} for {}.",
            MAX_RINGS, MAX_RINGS, occasion
        ));
    }
    Verdict::ok()
}

/// Backpacks are flagged at formal occasions that are not backpack-friendly.
/// Jholas and cloth bags only suit casual ethnic occasions.
pub fn bag(bag_type: &str, occasion: &str) -> Verdict {
    let bag = normalize_phrase(bag_type);
    let occ = accessory::occasion_key(occasion);

    if bag.contains("backpack") {
        if !BACKPACK_OCCASIONS.contains(&occ.as_str()) && accessory::formality_level(occasion) >= 4
        {
            return Verdict::flag(
                "Backpack is casual/travel only, never with formal or ethnic formal. \
                 Swap to structured tote or clutch.",
            );
        }
    } else if (bag.contains("jhola") || bag.contains("cloth bag"))
        && !JHOLA_OCCASIONS.contains(&occ.as_str())
    {
        return Verdict::flag(format!(
            "Jhola/cloth bag suits casual ethnic only, not appropriate for {}",
            occ
        ));
    }
    Verdict::ok()
}

/// Colour and fabric-weight issues for a turban or pagdi, in discovery order.
pub fn turban(
    turban_color: &str,
    outfit_colors: &[String],
    _occasion: &str,
    turban_fabric: &str,
    outfit_fabric: &str,
) -> Vec<String> {
    let mut issues: Vec<String> = outfit_colors
        .iter()
        .filter(|oc| color::is_clash(turban_color, oc))
        .map(|oc| {
            format!(
                "Turban color '{}' clashes with '{}' in the outfit, choose a complementary \
                 or tonal match",
                turban_color, oc
            )
        })
        .collect();

    let turban_f = normalize_phrase(turban_fabric);
    let outfit_f = normalize_phrase(outfit_fabric);
    let turban_heavy = contains_any(&turban_f, HEAVY_FABRICS);
    let turban_light = contains_any(&turban_f, LIGHT_FABRICS);
    let outfit_heavy = contains_any(&outfit_f, HEAVY_FABRICS);

    if turban_heavy && !outfit_heavy {
        issues.push(
            "Turban fabric weight is heavier than the outfit, creates imbalance. \
             Match fabric formality levels."
                .to_string(),
        );
    } else if turban_light && outfit_heavy {
        issues.push(
            "Turban fabric is too light for a formal/heavy outfit, upgrade to silk or \
             brocade pagdi."
                .to_string(),
        );
    }
    issues
}

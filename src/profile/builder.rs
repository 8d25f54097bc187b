use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::Utc;
use itertools::Itertools;
use log::{debug, info};
use serde_json::Value;

use crate::errors::StylistError;
use crate::knowledge::seasonal::derive_seasonal_type;
use crate::models::{BodyShape, FaceShape, Height, SkinUndertone, UserProfile};
use crate::profile::Observation;

/// Fewest photo observations a profile can be built from.
pub const MIN_OBSERVATIONS: usize = 3;

/// Confidence recorded when the winning reading is not a known value.
const FALLBACK_CONFIDENCE: f64 = 0.4;

const UNKNOWN: &str = "unknown";

const HAIR_KEYS: [&str; 6] = [
    "hair_color",
    "hair_texture",
    "hair_density",
    "current_haircut_style",
    "haircut_length",
    "hair_visible_condition",
];

/// Style vocabulary seen in outfit photos, mapped to an archetype name.
const ARCHETYPE_MAP: &[(&str, &str)] = &[
    ("indian_traditional", "ethnic_traditional"),
    ("western_casual", "smart_casual"),
    ("western_formal", "classic"),
    ("ethnic_fusion", "eclectic"),
    ("streetwear", "streetwear"),
    ("smart_casual", "smart_casual"),
    ("athletic", "athletic"),
];

/// Self-reported details that do not come from photos.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileExtras {
    pub preferred_name: Option<String>,
    pub lifestyle: Option<String>,
    pub age_group: Option<String>,
    pub budget_tier: Option<String>,
}

/// Most frequent value and its share of the total, rounded to two places.
/// Ties go to the value seen first.
pub fn majority_vote<S: AsRef<str>>(values: &[S]) -> (String, f64) {
    if values.is_empty() {
        return (UNKNOWN.to_string(), 0.0);
    }

    let counts = values.iter().map(AsRef::as_ref).counts();
    let mut best: Option<(&str, usize)> = None;
    for value in values.iter().map(AsRef::as_ref).unique() {
        let freq = counts.get(value).copied().unwrap_or(0);
        if best.is_none_or(|(_, best_freq)| freq > best_freq) {
            best = Some((value, freq));
        }
    }

    match best {
        Some((winner, freq)) => {
            let confidence = (freq as f64 / values.len() as f64 * 100.0).round() / 100.0;
            (winner.to_string(), confidence)
        }
        None => (UNKNOWN.to_string(), 0.0),
    }
}

/// Text form of a reading. Null, empty and "unknown" readings are `None`.
fn reading(value: &Value) -> Option<String> {
    let text = match value {
        Value::Null => return None,
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    if text.is_empty() || text == UNKNOWN {
        None
    } else {
        Some(text)
    }
}

struct Votes<'a> {
    observations: &'a [Observation],
    confidence: BTreeMap<String, f64>,
}

impl<'a> Votes<'a> {
    fn new(observations: &'a [Observation]) -> Self {
        Self {
            observations,
            confidence: BTreeMap::new(),
        }
    }

    fn vote(&mut self, key: &str) -> String {
        let values: Vec<String> = self
            .observations
            .iter()
            .filter_map(|o| o.get(key).and_then(reading))
            .collect();
        let (winner, confidence) = majority_vote(&values);
        self.confidence.insert(key.to_string(), confidence);
        winner
    }

    fn vote_or(&mut self, key: &str, fallback: &str) -> String {
        or_default(self.vote(key), fallback)
    }

    /// Votes and parses into a closed vocabulary, falling back with a low
    /// confidence when the winner is not recognised.
    fn vote_parsed<T: FromStr>(&mut self, key: &str, fallback: T) -> T {
        let winner = self.vote(key);
        match winner.parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                debug!("Unrecognised {} reading '{}', using default", key, winner);
                self.confidence.insert(key.to_string(), FALLBACK_CONFIDENCE);
                fallback
            }
        }
    }
}

fn or_default(value: String, fallback: &str) -> String {
    if value.is_empty() || value == UNKNOWN {
        fallback.to_string()
    } else {
        value
    }
}

/// Hair readings from the last observation with a populated nested
/// `hair_visible` object, else from the last one carrying flat hair keys.
fn hair_data(observations: &[Observation]) -> BTreeMap<String, String> {
    let nested = observations.iter().rev().find_map(|o| {
        let hair = o.get("hair_visible")?.as_object()?;
        let readings: BTreeMap<String, String> = hair
            .iter()
            .filter_map(|(k, v)| reading(v).map(|text| (k.clone(), text)))
            .collect();
        (!readings.is_empty()).then_some(readings)
    });
    if let Some(readings) = nested {
        return readings;
    }

    observations
        .iter()
        .rev()
        .find(|o| o.contains_key("hair_color"))
        .map(|o| {
            HAIR_KEYS
                .iter()
                .map(|&k| {
                    let text = o.get(k).and_then(reading).unwrap_or_default();
                    (k.to_string(), text)
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Saturates instead of wrapping for absurdly large batches.
fn observation_count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

/// Merges per-photo readings into a profile by majority vote.
pub fn build_profile(
    observations: &[Observation],
    photos_used: Option<u32>,
) -> Result<UserProfile, StylistError> {
    if observations.len() < MIN_OBSERVATIONS {
        return Err(StylistError::InsufficientInput {
            required: MIN_OBSERVATIONS,
            provided: observations.len(),
        });
    }

    let mut votes = Votes::new(observations);

    let skin_undertone = votes.vote_parsed("skin_undertone", SkinUndertone::Neutral);
    let skin_tone_depth = votes.vote_or("skin_tone_depth", "medium");
    let skin_texture_visible = votes.vote_or("skin_texture_visible", "smooth");

    let body_shape = votes.vote_parsed("body_shape", BodyShape::Rectangle);
    let height_estimate = votes.vote_parsed("height_estimate", Height::Average);
    let build = votes.vote_or("build", "average");
    let shoulder_width = votes.vote_or("shoulder_width", "average");
    let torso_length = votes.vote_or("torso_length", "average");
    let leg_proportion = votes.vote_or("leg_proportion", "average");

    let face_shape = votes.vote_parsed("face_shape", FaceShape::Oval);
    let jaw_type = votes.vote_or("jaw_type", "soft");
    let forehead = votes.vote_or("forehead", "average");

    let beard_style = votes.vote_or("beard_style", "stubble");
    let beard_density = votes.vote_or("beard_density", "medium");
    let beard_color = votes.vote_or("beard_color", "black");
    let mustache_style = votes.vote_or("mustache_style", "none");
    let beard_grooming_quality = votes.vote_or("beard_grooming_quality", "average");

    let hair = hair_data(observations);
    let hair_field = |key: &str, fallback: &str| {
        or_default(hair.get(key).cloned().unwrap_or_default(), fallback)
    };

    let photos_used = photos_used.unwrap_or_else(|| observation_count(observations.len()));
    debug!("Built profile from {} observations", observations.len());

    Ok(UserProfile {
        skin_undertone,
        skin_tone_depth,
        skin_texture_visible,
        body_shape,
        height_estimate,
        build,
        shoulder_width,
        torso_length,
        leg_proportion,
        face_shape,
        jaw_type,
        forehead,
        hair_color: hair_field("hair_color", "black"),
        hair_texture: hair_field("hair_texture", "straight"),
        hair_density: hair_field("hair_density", "medium"),
        current_haircut_style: hair_field("current_haircut_style", "standard"),
        haircut_length: hair_field("haircut_length", "short"),
        hair_visible_condition: hair_field("hair_visible_condition", "healthy"),
        beard_style,
        beard_density,
        beard_color,
        mustache_style,
        beard_grooming_quality,
        confidence_scores: votes.confidence,
        photos_used,
        profile_created_at: Utc::now(),
        profile_version: 1,
        style_archetype: None,
        seasonal_color_type: None,
        fit_preference_default: None,
        style_comfort_zones: None,
        budget_tier: None,
        age_group: None,
        lifestyle: None,
        style_goals: None,
        preferred_name: None,
        posture: None,
        belly_profile: None,
    })
}

fn non_empty_readings(observations: &[Observation], key: &str) -> Vec<String> {
    observations
        .iter()
        .filter_map(|o| o.get(key).and_then(reading))
        .collect()
}

fn vote_present(observations: &[Observation], key: &str) -> Option<String> {
    let values = non_empty_readings(observations, key);
    (!values.is_empty()).then(|| majority_vote(&values).0)
}

fn archetype_for(vocabulary: &str) -> String {
    let key = vocabulary.to_lowercase();
    ARCHETYPE_MAP
        .iter()
        .find(|(vocab, _)| *vocab == key)
        .map(|(_, archetype)| archetype.to_string())
        .unwrap_or_else(|| vocabulary.to_string())
}

fn filled(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Adds the derived and self-reported attributes to a built profile.
///
/// Style vocabulary and fit preference are read from observations that carry
/// them (outfit photos); posture and belly profile likewise (side photos).
pub fn enrich_profile(
    mut profile: UserProfile,
    observations: &[Observation],
    extras: ProfileExtras,
) -> UserProfile {
    let vocabulary = non_empty_readings(observations, "style_vocabulary");
    if !vocabulary.is_empty() {
        profile.style_comfort_zones = Some(vocabulary.iter().unique().cloned().collect());
        let (most_common, _) = majority_vote(&vocabulary);
        profile.style_archetype = Some(archetype_for(&most_common));
        profile.fit_preference_default = vote_present(observations, "fit_preference");
    }

    profile.posture = vote_present(observations, "posture");
    profile.belly_profile = vote_present(observations, "belly_profile");
    profile.seasonal_color_type = Some(derive_seasonal_type(
        profile.skin_undertone,
        &profile.skin_tone_depth,
        &profile.hair_color,
    ));

    profile.preferred_name = filled(extras.preferred_name);
    profile.lifestyle = filled(extras.lifestyle);
    profile.age_group = filled(extras.age_group);
    profile.budget_tier = filled(extras.budget_tier);

    info!(
        "Profile enriched: archetype={}, seasonal={}",
        profile.style_archetype.as_deref().unwrap_or(UNKNOWN),
        profile
            .seasonal_color_type
            .map(|s| s.as_str())
            .unwrap_or(UNKNOWN)
    );
    profile
}

/// Rebuilds a profile from fresh observations, one version after `previous`.
pub fn refresh(
    observations: &[Observation],
    previous: &UserProfile,
) -> Result<UserProfile, StylistError> {
    let mut profile = build_profile(observations, None)?;
    profile.profile_version = previous.profile_version.saturating_add(1);
    Ok(profile)
}

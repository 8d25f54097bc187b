// Builds a UserProfile from per-photo vision observations.

mod builder;

pub use builder::{
    MIN_OBSERVATIONS, ProfileExtras, build_profile, enrich_profile, majority_vote, refresh,
};

/// One photo's worth of vision output: a flat JSON object of attribute readings.
pub type Observation = serde_json::Map<String, serde_json::Value>;

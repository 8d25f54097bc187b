// Library interface for stylist
// The binary and the integration tests go through these modules

pub mod advisor;
pub mod config;
pub mod errors;
pub mod knowledge;
pub mod matchers;
pub mod models;
pub mod profile;
pub mod report;
pub mod storage;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use advisor::{Advisor, AnalysisRequest, Enricher};
pub use errors::StylistError;
pub use models::{OutfitBreakdown, StyleRecommendation, UserProfile};

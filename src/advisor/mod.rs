use std::num::NonZeroU32;

use log::{debug, warn};

use crate::errors::StylistError;
use crate::models::{
    BodyZone, OutfitBreakdown, Remark, RemarkCategory, Severity, StyleRecommendation, UserProfile,
};

pub mod accessory;
pub mod aggregate;
pub mod enrichment;
pub mod footwear;
pub mod grooming;
pub mod outfit;
pub mod prompt;

/// The free-text part of a remark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub element: String,
    pub issue: String,
    pub fix: String,
    pub why: String,
}

pub fn note(
    element: impl Into<String>,
    issue: impl Into<String>,
    fix: impl Into<String>,
    why: impl Into<String>,
) -> Note {
    Note {
        element: element.into(),
        issue: issue.into(),
        fix: fix.into(),
        why: why.into(),
    }
}

/// Collects the remarks of one pass and numbers them in discovery order,
/// starting at 1.
#[derive(Debug, Default)]
pub struct RemarkLog {
    remarks: Vec<Remark>,
}

impl RemarkLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        severity: Severity,
        category: RemarkCategory,
        body_zone: BodyZone,
        note: Note,
    ) {
        let priority_order = NonZeroU32::MIN.saturating_add(self.remarks.len() as u32);
        self.remarks.push(Remark {
            severity,
            category,
            body_zone,
            element: note.element,
            issue: note.issue,
            fix: note.fix,
            why: note.why,
            priority_order,
        });
    }

    pub fn len(&self) -> usize {
        self.remarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remarks.is_empty()
    }

    pub fn into_remarks(self) -> Vec<Remark> {
        self.remarks
    }
}

/// Text-generation collaborator that can turn the advisor's prompt into a
/// richer recommendation. Implementations own their transport, timeouts and
/// retries.
pub trait Enricher {
    fn enrich(&self, prompt: &str) -> Result<String, StylistError>;
}

/// Everything needed to produce one recommendation.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub profile: UserProfile,
    pub breakdown: OutfitBreakdown,
    /// Occasion slug, e.g. `"wedding_guest_indian"`
    pub occasion: String,
    pub caricature_image_path: String,
    pub annotated_output_path: String,
    pub analysis_json_path: String,
    pub use_enrichment: bool,
}

impl AnalysisRequest {
    pub fn new(profile: UserProfile, breakdown: OutfitBreakdown, occasion: &str) -> Self {
        Self {
            profile,
            breakdown,
            occasion: occasion.to_string(),
            caricature_image_path: String::new(),
            annotated_output_path: String::new(),
            analysis_json_path: String::new(),
            use_enrichment: false,
        }
    }
}

/// The rule-based remarks of all four passes, before aggregation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleRemarks {
    pub outfit: Vec<Remark>,
    pub grooming: Vec<Remark>,
    pub accessory: Vec<Remark>,
    pub footwear: Vec<Remark>,
}

/// Runs the remark passes and aggregates them into a [`StyleRecommendation`],
/// optionally consulting an [`Enricher`].
#[derive(Default)]
pub struct Advisor {
    enricher: Option<Box<dyn Enricher>>,
}

impl Advisor {
    pub fn new() -> Self {
        Self { enricher: None }
    }

    pub fn with_enricher(enricher: Box<dyn Enricher>) -> Self {
        Self {
            enricher: Some(enricher),
        }
    }

    pub fn has_enricher(&self) -> bool {
        self.enricher.is_some()
    }

    /// Produces a recommendation. Never fails: enrichment problems fall back
    /// to the rule-based result.
    pub fn recommend(&self, request: &AnalysisRequest) -> StyleRecommendation {
        let grooming_profile = grooming::grooming_profile(&request.profile);
        let remarks = RuleRemarks {
            outfit: outfit::outfit_remarks(&request.profile, &request.breakdown, &request.occasion),
            grooming: grooming_profile.grooming_remarks.clone(),
            accessory: accessory::accessory_remarks(&request.breakdown, &request.occasion),
            footwear: footwear::footwear_remarks(&request.breakdown),
        };
        debug!(
            "Rule passes for {}: {} outfit, {} grooming, {} accessory, {} footwear remarks",
            request.occasion,
            remarks.outfit.len(),
            remarks.grooming.len(),
            remarks.accessory.len(),
            remarks.footwear.len()
        );

        let rule_based = aggregate::rule_based(request, grooming_profile, remarks);

        let mut recommendation = match (&self.enricher, request.use_enrichment) {
            (Some(enricher), true) => {
                match enrichment::enrich(enricher.as_ref(), request, &rule_based) {
                    Ok(enriched) => enriched,
                    Err(e) => {
                        warn!("Enrichment failed, using rule-based recommendation: {}", e);
                        rule_based
                    }
                }
            }
            _ => rule_based,
        };

        aggregate::apply_visibility(&mut recommendation);
        recommendation
    }
}

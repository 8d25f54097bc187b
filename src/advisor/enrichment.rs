use std::num::NonZeroU32;
use std::panic::{self, AssertUnwindSafe};

use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::advisor::aggregate::sorted;
use crate::advisor::prompt::{PromptContext, build_prompt};
use crate::advisor::{AnalysisRequest, Enricher};
use crate::errors::StylistError;
use crate::knowledge::color;
use crate::models::{BodyZone, Remark, RemarkCategory, Score, Severity, StyleRecommendation};

/// Palette entries kept when the reply omits its own palette.
pub const ENRICHED_PALETTE_DO: usize = 6;
pub const ENRICHED_PALETTE_DONT: usize = 4;

/// Priority given to a reply remark that does not state one.
const DEFAULT_PRIORITY: i64 = 99;

/// Extracts the JSON object from a reply. Markdown fences are stripped first;
/// failing that, the text between the first `{` and the last `}` is tried.
pub fn parse_json_response(text: &str) -> Result<Value, StylistError> {
    let mut cleaned = text.trim();
    if cleaned.starts_with("```") {
        let lines: Vec<&str> = cleaned.lines().collect();
        let end = match lines.last() {
            Some(last) if lines.len() > 1 && last.trim() == "```" => lines.len() - 1,
            _ => lines.len(),
        };
        let start_offset = lines.first().map(|l| l.len()).unwrap_or(0);
        let inner = &cleaned[start_offset..];
        let inner = if end < lines.len() {
            inner.trim_end().trim_end_matches("```")
        } else {
            inner
        };
        cleaned = inner.trim();
    }

    match serde_json::from_str(cleaned) {
        Ok(value) => Ok(value),
        Err(e) => {
            let (Some(start), Some(end)) = (cleaned.find('{'), cleaned.rfind('}')) else {
                return Err(StylistError::MalformedEnrichment { source: e });
            };
            if end <= start {
                return Err(StylistError::MalformedEnrichment { source: e });
            }
            serde_json::from_str(&cleaned[start..=end])
                .map_err(|e| StylistError::MalformedEnrichment { source: e })
        }
    }
}

fn default_severity() -> Severity {
    Severity::Minor
}

fn default_category() -> RemarkCategory {
    RemarkCategory::Occasion
}

fn default_body_zone() -> BodyZone {
    BodyZone::FullLook
}

fn default_element() -> String {
    "outfit".to_string()
}

fn default_priority() -> i64 {
    DEFAULT_PRIORITY
}

/// A remark as the collaborator writes it. Missing fields take defaults;
/// unknown vocabulary or a non-positive priority rejects the entry.
#[derive(Debug, Deserialize)]
struct RawRemark {
    #[serde(default = "default_severity")]
    severity: Severity,
    #[serde(default = "default_category")]
    category: RemarkCategory,
    #[serde(default = "default_body_zone")]
    body_zone: BodyZone,
    #[serde(default = "default_element")]
    element: String,
    #[serde(default)]
    issue: String,
    #[serde(default)]
    fix: String,
    #[serde(default)]
    why: String,
    #[serde(default = "default_priority")]
    priority_order: i64,
}

impl RawRemark {
    fn into_remark(self) -> Option<Remark> {
        let priority = u32::try_from(self.priority_order).ok()?;
        Some(Remark {
            severity: self.severity,
            category: self.category,
            body_zone: self.body_zone,
            element: self.element,
            issue: self.issue,
            fix: self.fix,
            why: self.why,
            priority_order: NonZeroU32::new(priority)?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EnrichmentPayload {
    outfit_remarks: Vec<Value>,
    grooming_remarks: Vec<Value>,
    accessory_remarks: Vec<Value>,
    footwear_remarks: Vec<Value>,
    color_palette_do: Option<Vec<String>>,
    color_palette_dont: Option<Vec<String>>,
    color_palette_occasion_specific: Vec<String>,
    recommended_outfit_instead: String,
    recommended_grooming_change: String,
    recommended_accessories: String,
    wardrobe_gaps: Vec<String>,
    shopping_priorities: Vec<String>,
    overall_style_score: Option<f64>,
    outfit_score: Option<f64>,
    grooming_score: Option<f64>,
    accessory_score: Option<f64>,
    whats_working: Option<String>,
    priority_fix_two: Option<String>,
}

/// Valid remarks from the reply, sorted. An empty result means the rule list
/// is kept.
fn parse_remarks(raw: Vec<Value>, fallback: &[Remark]) -> Vec<Remark> {
    let total = raw.len();
    let parsed: Vec<Remark> = raw
        .into_iter()
        .filter_map(|v| serde_json::from_value::<RawRemark>(v).ok())
        .filter_map(RawRemark::into_remark)
        .collect();
    if parsed.len() < total {
        debug!("Dropped {} invalid remarks from enrichment reply", total - parsed.len());
    }
    if parsed.is_empty() {
        fallback.to_vec()
    } else {
        sorted(parsed)
    }
}

fn score_or(value: Option<f64>, fallback: Score) -> Score {
    match value {
        Some(v) if v.is_finite() => Score::clamped(v.round() as i64),
        _ => fallback,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Calls the enricher, turning a panic into an ordinary failure.
fn call_guarded(enricher: &dyn Enricher, prompt: &str) -> Result<String, StylistError> {
    panic::catch_unwind(AssertUnwindSafe(|| enricher.enrich(prompt))).unwrap_or_else(|_| {
        Err(StylistError::EnrichmentFailed {
            reason: "enricher panicked".to_string(),
        })
    })
}

/// Merges a parsed reply over the rule-based recommendation.
fn merge(payload: EnrichmentPayload, rule_based: &StyleRecommendation) -> StyleRecommendation {
    let undertone = rule_based.user_profile.skin_undertone;
    let palette_do = payload.color_palette_do.unwrap_or_else(|| {
        let mut p = color::palette_do(undertone);
        p.truncate(ENRICHED_PALETTE_DO);
        p
    });
    let palette_dont = payload.color_palette_dont.unwrap_or_else(|| {
        let mut p = color::palette_avoid(undertone);
        p.truncate(ENRICHED_PALETTE_DONT);
        p
    });

    StyleRecommendation {
        user_profile: rule_based.user_profile.clone(),
        grooming_profile: rule_based.grooming_profile.clone(),
        outfit_breakdown: rule_based.outfit_breakdown.clone(),
        outfit_remarks: parse_remarks(payload.outfit_remarks, &rule_based.outfit_remarks),
        grooming_remarks: parse_remarks(payload.grooming_remarks, &rule_based.grooming_remarks),
        accessory_remarks: parse_remarks(
            payload.accessory_remarks,
            &rule_based.accessory_remarks,
        ),
        footwear_remarks: parse_remarks(payload.footwear_remarks, &rule_based.footwear_remarks),
        color_palette_do: palette_do,
        color_palette_dont: palette_dont,
        color_palette_occasion_specific: payload.color_palette_occasion_specific,
        recommended_outfit_instead: payload.recommended_outfit_instead,
        recommended_grooming_change: payload.recommended_grooming_change,
        recommended_accessories: payload.recommended_accessories,
        wardrobe_gaps: payload.wardrobe_gaps,
        shopping_priorities: payload.shopping_priorities,
        overall_style_score: score_or(payload.overall_style_score, rule_based.overall_style_score),
        outfit_score: score_or(payload.outfit_score, rule_based.outfit_score),
        grooming_score: score_or(payload.grooming_score, rule_based.grooming_score),
        accessory_score: score_or(payload.accessory_score, rule_based.accessory_score),
        // the reply never sees the shoes' condition table, so this stays rule-based
        footwear_score: rule_based.footwear_score,
        caricature_image_path: rule_based.caricature_image_path.clone(),
        annotated_output_path: rule_based.annotated_output_path.clone(),
        analysis_json_path: rule_based.analysis_json_path.clone(),
        whats_working: non_empty(payload.whats_working),
        priority_fix_two: non_empty(payload.priority_fix_two),
    }
}

/// Asks the enricher for a richer recommendation. Every failure is returned
/// to the caller, which falls back to `rule_based`.
pub fn enrich(
    enricher: &dyn Enricher,
    request: &AnalysisRequest,
    rule_based: &StyleRecommendation,
) -> Result<StyleRecommendation, StylistError> {
    let prompt = build_prompt(&PromptContext::from_request(request)?);
    let reply = call_guarded(enricher, &prompt)?;
    let value = parse_json_response(&reply)?;
    let payload: EnrichmentPayload = serde_json::from_value(value)
        .map_err(|e| StylistError::MalformedEnrichment { source: e })?;
    debug!("Enrichment reply parsed for {}", request.occasion);
    Ok(merge(payload, rule_based))
}

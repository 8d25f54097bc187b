// End-to-end tests for the advisor: fixture JSON in, recommendation out.
//
// Covers the rule-based path, visibility suppression, and every way the
// enrichment step can succeed or fall back.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use stylist::advisor::{Advisor, AnalysisRequest, Enricher};
use stylist::errors::StylistError;
use stylist::models::{
    BodyShape, BodyZone, GarmentCategory, OutfitBreakdown, RemarkCategory, Severity,
    SkinUndertone, StyleRecommendation, UserProfile,
};
use stylist::report;

const OCCASION: &str = "wedding_guest_indian";

fn profile() -> UserProfile {
    serde_json::from_str(include_str!("fixtures/profile.json")).expect("profile fixture")
}

fn outfit() -> OutfitBreakdown {
    serde_json::from_str(include_str!("fixtures/outfit_wedding.json")).expect("outfit fixture")
}

fn request() -> AnalysisRequest {
    AnalysisRequest::new(profile(), outfit(), OCCASION)
}

fn enriched_request() -> AnalysisRequest {
    let mut request = request();
    request.use_enrichment = true;
    request
}

fn assert_sorted(rec: &StyleRecommendation) {
    for list in [
        &rec.outfit_remarks,
        &rec.grooming_remarks,
        &rec.accessory_remarks,
        &rec.footwear_remarks,
    ] {
        assert!(list.windows(2).all(|w| w[0].priority_order <= w[1].priority_order));
    }
}

/// Replies with a fixed string and counts how often it was asked.
struct Canned {
    reply: String,
    calls: Arc<AtomicUsize>,
}

impl Canned {
    fn new(reply: &str) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                reply: reply.to_string(),
                calls: calls.clone(),
            },
            calls,
        )
    }
}

impl Enricher for Canned {
    fn enrich(&self, _prompt: &str) -> Result<String, StylistError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.reply.clone())
    }
}

struct Unreachable;

impl Enricher for Unreachable {
    fn enrich(&self, _prompt: &str) -> Result<String, StylistError> {
        Err(StylistError::EnrichmentFailed {
            reason: "connection refused".to_string(),
        })
    }
}

struct Panics;

impl Enricher for Panics {
    fn enrich(&self, _prompt: &str) -> Result<String, StylistError> {
        panic!("enricher blew up");
    }
}

#[test]
fn test_rule_based_wedding_analysis() {
    let rec = Advisor::new().recommend(&request());

    assert_eq!(rec.outfit_remarks[0].severity, Severity::Critical);
    assert_eq!(rec.outfit_remarks[0].element, "colour palette");
    assert_eq!(rec.outfit_remarks[1].severity, Severity::Critical);
    assert!(rec.outfit_remarks[1].issue.contains("wedding_guest_indian"));
    assert!(rec.outfit_remarks.iter().any(|r| r.element == "kurta"));

    // unkempt beard: beard remark then haircut remark
    assert_eq!(rec.grooming_remarks.len(), 2);
    assert_eq!(rec.grooming_score.value(), 3);

    assert_eq!(rec.footwear_remarks.len(), 2);
    assert_eq!(rec.footwear_remarks[0].severity, Severity::Moderate);
    assert_eq!(rec.footwear_score.value(), 5);

    assert_eq!(rec.accessory_remarks.len(), 1);
    assert_eq!(rec.accessory_score.value(), 4);
    assert_eq!(rec.overall_style_score.value(), 4);

    assert_eq!(rec.color_palette_do.len(), 8);
    assert!(rec.whats_working.is_none());
    assert!(rec.all_remarks().all(|r| r.priority_order.get() >= 1));
    assert_sorted(&rec);
}

#[test]
fn test_hidden_feet_suppress_footwear() {
    let mut outfit = outfit();
    outfit.footwear_analysis.visible = false;
    let rec = Advisor::new().recommend(&AnalysisRequest::new(profile(), outfit, OCCASION));

    assert!(rec.footwear_remarks.is_empty());
    assert!(rec.all_remarks().all(|r| r.body_zone != BodyZone::Feet));
    assert_eq!(rec.footwear_score.value(), 5);
    // the churidar keeps the lower body in frame
    assert!(rec.outfit_breakdown.lower_body_visible());
}

#[test]
fn test_upper_body_only_photo() {
    let mut outfit = outfit();
    outfit.footwear_analysis.visible = false;
    outfit
        .items
        .retain(|item| item.category != GarmentCategory::EthnicBottom);
    let rec = Advisor::new().recommend(&AnalysisRequest::new(profile(), outfit, OCCASION));

    assert!(rec.outfit_remarks.iter().all(|r| {
        r.body_zone != BodyZone::LowerBody && r.body_zone != BodyZone::Feet
    }));
}

#[test]
fn test_analysis_is_deterministic() {
    let advisor = Advisor::new();
    assert_eq!(advisor.recommend(&request()), advisor.recommend(&request()));
}

#[test]
fn test_enrichment_reply_is_merged() {
    let reply = r#"```json
{
  "outfit_remarks": [
    {"severity": "moderate", "category": "fabric", "body_zone": "upper-body",
     "element": "kurta", "issue": "Polyester sheen", "fix": "Raw silk", "why": "Texture", "priority_order": 2},
    {"severity": "critical", "category": "color", "body_zone": "full-look",
     "element": "palette", "issue": "Washed out", "fix": "Deep maroon", "why": "Warm undertone", "priority_order": 1},
    {"severity": "apocalyptic", "issue": "dropped"}
  ],
  "footwear_remarks": [
    {"severity": "minor", "category": "footwear", "body_zone": "feet",
     "element": "sneakers", "issue": "Too casual", "fix": "Mojaris", "why": "Formality", "priority_order": 1}
  ],
  "color_palette_do": ["maroon", "mustard"],
  "wardrobe_gaps": ["raw silk kurta"],
  "overall_style_score": 42,
  "outfit_score": 0,
  "footwear_score": 10,
  "whats_working": "The cream churidar is well proportioned."
}
```"#;
    let (enricher, calls) = Canned::new(reply);
    let rule = Advisor::new().recommend(&request());
    let rec = Advisor::with_enricher(Box::new(enricher)).recommend(&enriched_request());

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(rec.outfit_remarks.len(), 2);
    assert_eq!(rec.outfit_remarks[0].issue, "Washed out");
    assert_eq!(rec.footwear_remarks[0].fix, "Mojaris");
    // lists the reply left out keep their rule-based remarks
    assert_eq!(rec.grooming_remarks, rule.grooming_remarks);
    assert_eq!(rec.color_palette_do, vec!["maroon", "mustard"]);
    assert_eq!(rec.color_palette_dont.len(), 4);
    assert_eq!(rec.wardrobe_gaps, vec!["raw silk kurta"]);
    assert_eq!(rec.overall_style_score.value(), 10);
    assert_eq!(rec.outfit_score.value(), 1);
    assert_eq!(rec.footwear_score, rule.footwear_score);
    assert_eq!(rec.grooming_score, rule.grooming_score);
    assert_eq!(
        rec.whats_working.as_deref(),
        Some("The cream churidar is well proportioned.")
    );
    assert_sorted(&rec);
}

#[test]
fn test_enriched_feet_remarks_still_suppressed() {
    let reply = r#"{"footwear_remarks": [{"body_zone": "feet", "issue": "Shoes", "priority_order": 1}],
                    "outfit_remarks": [{"body_zone": "feet", "issue": "Hem on shoes", "priority_order": 1},
                                       {"body_zone": "neck", "issue": "Collar", "priority_order": 2}]}"#;
    let (enricher, _) = Canned::new(reply);
    let mut request = enriched_request();
    request.breakdown.footwear_analysis.visible = false;
    let rec = Advisor::with_enricher(Box::new(enricher)).recommend(&request);

    assert!(rec.footwear_remarks.is_empty());
    assert_eq!(rec.outfit_remarks.len(), 1);
    assert_eq!(rec.outfit_remarks[0].issue, "Collar");
}

#[test]
fn test_enriched_remarks_on_hidden_zones_dropped_from_every_list() {
    let reply = r#"{"grooming_remarks": [{"body_zone": "feet", "issue": "Shoes unpolished", "priority_order": 1},
                                         {"body_zone": "face", "issue": "Beard line", "priority_order": 2}],
                    "accessory_remarks": [{"body_zone": "lower-body", "issue": "Belt too wide", "priority_order": 1}]}"#;
    let (enricher, _) = Canned::new(reply);
    let mut request = enriched_request();
    request.breakdown.footwear_analysis.visible = false;
    request
        .breakdown
        .items
        .retain(|item| item.category != GarmentCategory::EthnicBottom);
    let rec = Advisor::with_enricher(Box::new(enricher)).recommend(&request);

    assert!(rec.all_remarks().all(|r| r.body_zone != BodyZone::Feet));
    assert!(rec.all_remarks().all(|r| r.body_zone != BodyZone::LowerBody));
    assert_eq!(rec.grooming_remarks.len(), 1);
    assert_eq!(rec.grooming_remarks[0].issue, "Beard line");
}

/// Deep warm, inverted triangle, plain cotton hip-length kurta at a wedding.
fn deep_warm_wedding(clash: bool) -> StyleRecommendation {
    let mut profile = profile();
    profile.skin_undertone = SkinUndertone::DeepWarm;
    profile.body_shape = BodyShape::InvertedTriangle;

    let mut outfit = outfit();
    outfit.occasion_match = true;
    outfit.color_clash_detected = clash;
    let kurta = &mut outfit.items[0];
    kurta.fabric_estimate = "plain cotton".to_string();
    kurta.length = "hip length".to_string();
    kurta.occasion_appropriate = true;
    kurta.issue.clear();

    Advisor::new().recommend(&AnalysisRequest::new(profile, outfit, OCCASION))
}

#[test]
fn test_deep_warm_plain_cotton_kurta_at_wedding() {
    for clash in [true, false] {
        let rec = deep_warm_wedding(clash);

        assert!(
            rec.outfit_remarks.iter().any(|r| r.category == RemarkCategory::Fabric
                && r.severity == Severity::Moderate
                && r.element == "kurta"),
            "clash={clash}"
        );
        let critical_colour = rec
            .outfit_remarks
            .iter()
            .any(|r| r.category == RemarkCategory::Color && r.severity == Severity::Critical);
        assert_eq!(critical_colour, clash);

        assert!(rec.color_palette_do.iter().any(|c| c == "rust"));
        assert!(rec.color_palette_dont.iter().all(|c| c != "rust"));
        assert_sorted(&rec);
    }
}

#[test]
fn test_enrichment_failures_fall_back() {
    let rule = Advisor::new().recommend(&request());

    let failing = Advisor::with_enricher(Box::new(Unreachable));
    assert_eq!(failing.recommend(&enriched_request()), rule);

    let (garbage, _) = Canned::new("Sorry, I can't help with that.");
    let garbled = Advisor::with_enricher(Box::new(garbage));
    assert_eq!(garbled.recommend(&enriched_request()), rule);

    let (wrong_shape, _) = Canned::new(r#"{"outfit_score": "very good"}"#);
    let mistyped = Advisor::with_enricher(Box::new(wrong_shape));
    assert_eq!(mistyped.recommend(&enriched_request()), rule);

    let panicking = Advisor::with_enricher(Box::new(Panics));
    assert_eq!(panicking.recommend(&enriched_request()), rule);
}

#[test]
fn test_enricher_not_called_unless_requested() {
    let (enricher, calls) = Canned::new("{}");
    let advisor = Advisor::with_enricher(Box::new(enricher));
    let rec = advisor.recommend(&request());

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(rec, Advisor::new().recommend(&request()));
}

#[test]
fn test_report_lists_remarks_in_priority_order() {
    let rec = Advisor::new().recommend(&request());
    let text = report::render(&rec);

    assert!(text.contains("STYLE ANALYSIS  |  Wedding Guest Indian"));
    assert!(text.contains("[1] CRITICAL"));
    let total = rec.all_remarks().count();
    assert!(text.contains(&format!("[{}] ", total)));
    assert!(!text.contains(&format!("[{}] ", total + 1)));
}

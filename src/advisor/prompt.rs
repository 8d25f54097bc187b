use itertools::Itertools;

use crate::advisor::AnalysisRequest;
use crate::errors::StylistError;
use crate::knowledge::{archetype, body, capitalize, color, grooming, proportion, seasonal};
use crate::models::UserProfile;

/// Everything the prompt is rendered from, already flattened to text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromptContext {
    pub profile_json: String,
    pub breakdown_json: String,
    pub occasion: String,
    pub color_do: Vec<String>,
    pub color_dont: Vec<String>,
    pub body_rules: String,
    pub grooming_rules: String,
    pub footwear_visible: bool,
    pub lower_body_visible: bool,
    pub seasonal_type: String,
    pub seasonal_do: Vec<String>,
    pub seasonal_avoid: Vec<String>,
    pub archetype_context: String,
    pub proportion_rules: String,
    pub preferred_name: String,
    pub style_goals: Vec<String>,
    pub lifestyle: String,
}

impl PromptContext {
    pub fn from_request(request: &AnalysisRequest) -> Result<Self, StylistError> {
        let profile = &request.profile;
        let breakdown = &request.breakdown;

        let profile_json = serde_json::to_string(profile)
            .map_err(|e| StylistError::SerializeError { source: e })?;
        let breakdown_json = serde_json::to_string(breakdown)
            .map_err(|e| StylistError::SerializeError { source: e })?;

        let (seasonal_type, seasonal_do, seasonal_avoid) = match profile.seasonal_color_type {
            Some(season) => {
                let st = seasonal::seasonal_type(season);
                (
                    season.to_string(),
                    st.palette_do.iter().map(|c| c.to_string()).collect(),
                    st.palette_avoid.iter().map(|c| c.to_string()).collect(),
                )
            }
            None => (String::new(), Vec::new(), Vec::new()),
        };

        Ok(Self {
            profile_json,
            breakdown_json,
            occasion: request.occasion.clone(),
            color_do: color::palette_do(profile.skin_undertone),
            color_dont: color::palette_avoid(profile.skin_undertone),
            body_rules: body_rules(profile),
            grooming_rules: grooming_rules(profile),
            footwear_visible: breakdown.footwear_visible(),
            lower_body_visible: breakdown.lower_body_visible(),
            seasonal_type,
            seasonal_do,
            seasonal_avoid,
            archetype_context: archetype::context_string(
                profile.style_archetype.as_deref().unwrap_or_default(),
            ),
            proportion_rules: proportion::context_string(
                profile.height_estimate,
                profile.body_shape,
            ),
            preferred_name: profile.preferred_name.clone().unwrap_or_default(),
            style_goals: profile.style_goals.clone().unwrap_or_default(),
            lifestyle: profile.lifestyle.clone().unwrap_or_default(),
        })
    }
}

pub fn body_rules(profile: &UserProfile) -> String {
    let rules = body::rules(profile.body_shape);
    format!(
        "Body shape: {}, Height: {}, Build: {}\nDo: {}\nAvoid: {}",
        profile.body_shape,
        profile.height_estimate,
        profile.build,
        rules.recommended.iter().take(4).join(", "),
        rules.avoid.iter().take(3).join(", ")
    )
}

pub fn grooming_rules(profile: &UserProfile) -> String {
    let haircut = grooming::haircut_rules(profile.face_shape);
    let beard = grooming::beard_rules(profile.face_shape);
    format!(
        "Face shape: {}\nHaircut recommended: {}\nHaircut avoid: {}\nBeard recommended: {}\nBeard avoid: {}\nEyebrows: {}",
        profile.face_shape,
        haircut.recommended.iter().take(2).join(", "),
        haircut.avoid.iter().take(2).join(", "),
        beard.recommended.iter().take(2).join(", "),
        beard.avoid.iter().take(2).join(", "),
        grooming::eyebrow_recommendation(profile.face_shape)
    )
}

fn visibility_note(ctx: &PromptContext) -> &'static str {
    match (ctx.footwear_visible, ctx.lower_body_visible) {
        (false, false) => {
            "\nVISIBILITY: Only the head and upper body are in frame. Do not write footwear_remarks \
             or lower-body outfit_remarks.\n"
        }
        (false, true) => {
            "\nVISIBILITY: Footwear is not in frame. Do not write footwear_remarks and set \
             footwear_score to 5.\n"
        }
        (true, false) => {
            "\nVISIBILITY: The lower body is not in frame. Do not write lower-body outfit_remarks.\n"
        }
        (true, true) => "",
    }
}

const REPLY_SCHEMA: &str = r#"{
  "outfit_remarks": [
    {
      "severity": "critical | moderate | minor",
      "category": "color | fit | fabric | occasion | proportion | accessory | footwear | grooming_hair | grooming_beard | grooming_skin | layering | pattern | length | condition | posture",
      "body_zone": "head | face | neck | upper-body | lower-body | feet | full-look",
      "element": "the exact garment or accessory",
      "issue": "the exact problem",
      "fix": "the exact swap or adjustment",
      "why": "reasoning tied to body shape, undertone or proportion",
      "priority_order": 1
    }
  ],
  "grooming_remarks": [],
  "accessory_remarks": [],
  "footwear_remarks": [],
  "color_palette_do": [],
  "color_palette_dont": [],
  "color_palette_occasion_specific": [],
  "recommended_outfit_instead": "",
  "recommended_grooming_change": "",
  "recommended_accessories": "",
  "wardrobe_gaps": [],
  "shopping_priorities": [],
  "overall_style_score": 1,
  "outfit_score": 1,
  "grooming_score": 1,
  "accessory_score": 1,
  "footwear_score": 1,
  "whats_working": "",
  "priority_fix_two": ""
}"#;

/// Renders the enrichment prompt. Optional sections are left out when empty.
pub fn build_prompt(ctx: &PromptContext) -> String {
    let mut out = String::new();

    out.push_str(
        "You are a senior personal stylist fluent in both Indian menswear and Western tailoring. \
         Review the outfit below against the client's profile and give direct, specific advice.\n",
    );
    out.push_str(visibility_note(ctx));

    out.push_str("\nVOICE:\n");
    if !ctx.preferred_name.is_empty() {
        out.push_str(&format!("- Address the client as {}.\n", ctx.preferred_name));
    }
    out.push_str(
        "- Lead with the most important observation.\n\
         - Name the exact garment, colour and proportion in every remark.\n\
         - whats_working: one genuine positive, one sentence.\n\
         - priority_fix_two: the two most critical fixes, one sentence each.\n\
         - Reference the client's body shape, undertone, face shape and height wherever they apply.\n",
    );

    out.push_str(&format!("\nUSER PROFILE:\n{}\n", ctx.profile_json));
    out.push_str(&format!("\nOUTFIT BREAKDOWN:\n{}\n", ctx.breakdown_json));
    out.push_str(&format!("\nOCCASION: {}\n", ctx.occasion));

    if !ctx.lifestyle.is_empty() {
        out.push_str(&format!("Lifestyle: {}\n", ctx.lifestyle));
    }
    if !ctx.style_goals.is_empty() {
        out.push_str(&format!("Style goals: {}\n", ctx.style_goals.join("; ")));
    }

    out.push_str(&format!(
        "\nCOLOUR PALETTE:\n  Wear : {}\n  Avoid: {}\n",
        ctx.color_do.join(", "),
        ctx.color_dont.join(", ")
    ));
    if !ctx.seasonal_type.is_empty() && !(ctx.seasonal_do.is_empty() && ctx.seasonal_avoid.is_empty())
    {
        out.push_str(&format!(
            "\nSEASONAL REFINEMENT ({}):\n  Also wear : {}\n  Also avoid: {}\n",
            capitalize(&ctx.seasonal_type),
            ctx.seasonal_do.join(", "),
            ctx.seasonal_avoid.join(", ")
        ));
    }

    out.push_str(&format!("\nBODY TYPE RULES:\n{}\n", ctx.body_rules));
    if !ctx.proportion_rules.is_empty() {
        out.push_str(&format!(
            "\nPROPORTION RULES (authoritative for this height and shape):\n{}\n",
            ctx.proportion_rules
        ));
    }
    out.push_str(&format!("\nGROOMING RULES:\n{}\n", ctx.grooming_rules));
    if !ctx.archetype_context.is_empty() {
        out.push_str(&format!("\nSTYLE ARCHETYPE:\n{}\n", ctx.archetype_context));
    }

    out.push_str("\nReply with ONLY this JSON object, no markdown:\n");
    out.push_str(REPLY_SCHEMA);
    out.push_str(
        "\n\nRULES:\n\
         - Order each remark list by priority_order, most critical first.\n\
         - critical: fix before wearing again. moderate: meaningfully changes the look. minor: polish.\n\
         - Scores are integers from 1 to 10.\n\
         - Return ONLY the JSON object.\n",
    );
    out
}

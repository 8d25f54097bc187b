use std::fmt::Write;
use std::fs;
use std::path::Path;

use itertools::Itertools;
use log::info;

use crate::errors::StylistError;
use crate::knowledge::{capitalize, title_case};
use crate::models::{Score, StyleRecommendation};

const WIDTH: usize = 70;
const TEXT_WIDTH: usize = 66;
const BAR_WIDTH: usize = 20;
const PALETTE_PER_LINE: usize = 4;

/// Greedy word wrap. Words longer than `width` get a line of their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

struct Report {
    out: String,
}

impl Report {
    fn new() -> Self {
        Self { out: String::new() }
    }

    fn line(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn divider(&mut self) {
        self.line(&"═".repeat(WIDTH));
    }

    fn section(&mut self, title: &str) {
        let thin = "─".repeat(WIDTH);
        self.blank();
        self.line(&thin);
        self.line(title);
        self.line(&thin);
    }

    /// `  Label : text` with continuation lines aligned under the text.
    fn labeled(&mut self, label: &str, text: &str, label_width: usize) {
        let prefix = format!("  {:<label_width$} : ", label);
        let indent = " ".repeat(prefix.chars().count());
        let available = TEXT_WIDTH.saturating_sub(prefix.chars().count()).max(20);
        let lines = wrap(text, available);
        if lines.is_empty() {
            self.line(&format!("{}-", prefix));
            return;
        }
        for (i, l) in lines.iter().enumerate() {
            let lead = if i == 0 { &prefix } else { &indent };
            self.line(&format!("{}{}", lead, l));
        }
    }

    fn paragraph(&mut self, text: &str, first: &str, rest: &str) {
        for (i, l) in wrap(text, TEXT_WIDTH - first.len()).iter().enumerate() {
            let lead = if i == 0 { first } else { rest };
            self.line(&format!("{}{}", lead, l));
        }
    }

    fn score_bar(&mut self, label: &str, score: Score) {
        let filled = (score.value() as usize * BAR_WIDTH / 10).min(BAR_WIDTH);
        self.line(&format!(
            "  {:<10}  [{}{}]  {}/10",
            label,
            "█".repeat(filled),
            "░".repeat(BAR_WIDTH - filled),
            score
        ));
    }

    fn palette(&mut self, label: &str, colors: &[String]) {
        if colors.is_empty() {
            return;
        }
        self.line(label);
        for chunk in &colors.iter().chunks(PALETTE_PER_LINE) {
            self.line(&format!(
                "             {}",
                chunk.map(|c| capitalize(c)).join("  ·  ")
            ));
        }
    }

    fn numbered(&mut self, items: &[String]) {
        for (i, item) in items.iter().enumerate() {
            self.paragraph(&format!("{}. {}", i + 1, item), "   ", "      ");
        }
    }
}

/// Renders the terminal report for a recommendation.
pub fn render(rec: &StyleRecommendation) -> String {
    let up = &rec.user_profile;
    let gp = &rec.grooming_profile;
    let ob = &rec.outfit_breakdown;
    let mut r = Report::new();

    r.divider();
    r.line(&format!(
        "  STYLE ANALYSIS  |  {}",
        title_case(&ob.occasion_requested)
    ));
    r.line(&format!("  Overall Score   : {} / 10", rec.overall_style_score));
    r.divider();

    r.blank();
    r.score_bar("Outfit", rec.outfit_score);
    r.score_bar("Grooming", rec.grooming_score);
    r.score_bar("Accessory", rec.accessory_score);
    if ob.footwear_visible() {
        r.score_bar("Footwear", rec.footwear_score);
    }

    r.section("YOUR PROFILE");
    r.line(&format!("  Undertone   : {}", up.skin_undertone));
    r.line(&format!("  Skin depth  : {}", capitalize(&up.skin_tone_depth)));
    r.line(&format!("  Body Shape  : {}", up.body_shape));
    r.line(&format!(
        "  Build       : {}, {} shoulders",
        capitalize(&up.build),
        up.shoulder_width
    ));
    r.line(&format!("  Height      : {}", capitalize(up.height_estimate.as_str())));
    r.line(&format!("  Face Shape  : {}", up.face_shape));
    r.line(&format!(
        "  Hair        : {} {}, {}, {} density",
        capitalize(&up.haircut_length),
        up.current_haircut_style,
        up.hair_texture,
        up.hair_density
    ));
    r.line(&format!(
        "  Beard       : {} beard, {}",
        capitalize(&up.beard_style),
        up.beard_grooming_quality
    ));
    if let Some(season) = up.seasonal_color_type {
        r.line(&format!("  Season      : {}", season));
    }
    if let Some(archetype) = &up.style_archetype {
        r.line(&format!("  Archetype   : {}", title_case(archetype)));
    }

    r.section("OUTFIT BREAKDOWN");
    for item in &ob.items {
        r.line(&format!(
            "  {:<14}: {} {}, {} fit, {} length",
            capitalize(&item.garment_type.replace('_', " ")),
            capitalize(&item.color),
            item.fabric_estimate,
            item.fit,
            item.length
        ));
    }
    for acc in &ob.accessory_analysis.items_detected {
        r.line(&format!(
            "  {:<14}: {}, {}",
            capitalize(acc.kind.as_str()),
            capitalize(&acc.color),
            acc.style_category
        ));
    }
    let fw = &ob.footwear_analysis;
    if fw.visible {
        r.line(&format!(
            "  {:<14}: {}, {}, {}",
            "Footwear",
            capitalize(&fw.kind),
            fw.color,
            fw.condition
        ));
    } else {
        r.line(&format!("  {:<14}: Not visible in frame", "Footwear"));
    }
    r.blank();
    r.labeled("Color Harmony", &ob.overall_color_harmony, 13);
    r.labeled("Silhouette", &ob.silhouette_assessment, 13);
    r.line(&format!("  Formality      : {} / 10", ob.formality_level));
    r.line(&format!(
        "  Occasion match : {}",
        if ob.occasion_match { "✓" } else { "✗" }
    ));

    if let Some(text) = &rec.whats_working {
        r.section("WHAT'S WORKING");
        r.paragraph(text, "  ", "    ");
    }
    if let Some(text) = &rec.priority_fix_two {
        r.section("FIX THESE TWO THINGS FIRST");
        r.paragraph(text, "  ", "    ");
    }

    let remarks = rec
        .outfit_remarks
        .iter()
        .chain(&rec.footwear_remarks)
        .chain(&rec.accessory_remarks)
        .chain(&rec.grooming_remarks)
        .sorted_by_key(|remark| remark.priority_order)
        .collect_vec();
    if !remarks.is_empty() {
        r.section("REMARKS  (fix in this order)");
        for (idx, remark) in remarks.iter().enumerate() {
            r.blank();
            r.line(&format!(
                "  [{}] {}  |  {}  |  {}",
                idx + 1,
                remark.severity,
                remark.category.to_string().to_uppercase(),
                remark.body_zone.to_string().to_uppercase().replace('-', " ")
            ));
            r.blank();
            r.labeled("Issue", &remark.issue, 5);
            r.labeled("Fix", &remark.fix, 5);
            r.labeled("Why", &remark.why, 5);
        }
    }

    r.section("YOUR COLOR PALETTE");
    r.palette("  ✓  Wear  :", &rec.color_palette_do);
    r.palette("  ✗  Avoid :", &rec.color_palette_dont);
    r.palette("  ★  For this occasion :", &rec.color_palette_occasion_specific);

    if !rec.recommended_outfit_instead.is_empty() {
        r.section("WEAR THIS INSTEAD");
        r.paragraph(&rec.recommended_outfit_instead, "  ", "    ");
    }
    if !rec.recommended_accessories.is_empty() {
        r.blank();
        r.line("  ACCESSORIES");
        r.paragraph(&rec.recommended_accessories, "  ", "    ");
    }

    r.section("GROOMING");
    r.labeled("Hair", &gp.recommended_haircut, 5);
    r.labeled("Beard", &gp.recommended_beard_style, 5);
    if !gp.beard_grooming_tips.is_empty() {
        r.line("  Beard tips:");
        for tip in &gp.beard_grooming_tips {
            r.paragraph(tip, "    • ", "      ");
        }
    }
    r.labeled("Brows", &gp.eyebrow_recommendation, 5);
    if !gp.skincare_categories_needed.is_empty() {
        r.line(&format!(
            "  Skin care needed  : {}",
            gp.skincare_categories_needed.join("  ·  ")
        ));
    }

    if !rec.wardrobe_gaps.is_empty() {
        r.section("WARDROBE GAPS  (ranked by impact)");
        r.numbered(&rec.wardrobe_gaps);
    }
    if !rec.shopping_priorities.is_empty() {
        r.section("SHOPPING PRIORITIES");
        r.numbered(&rec.shopping_priorities);
    }

    let paths = [
        ("Caricature", &rec.caricature_image_path),
        ("Annotated", &rec.annotated_output_path),
        ("JSON", &rec.analysis_json_path),
    ];
    if paths.iter().any(|(_, p)| !p.is_empty()) {
        r.blank();
        for (label, path) in paths.iter().filter(|(_, p)| !p.is_empty()) {
            let _ = writeln!(r.out, "  {:<11} →  {}", label, path);
        }
    }
    r.divider();
    r.out
}

/// Writes the recommendation as pretty-printed JSON, creating parent
/// directories as needed.
pub fn export_json(rec: &StyleRecommendation, path: &Path) -> Result<(), StylistError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| StylistError::StorageIOError { source: e })?;
    }
    let content =
        serde_json::to_string_pretty(rec).map_err(|e| StylistError::SerializeError { source: e })?;
    fs::write(path, content).map_err(|e| StylistError::StorageIOError { source: e })?;
    info!("Analysis JSON saved: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::advisor::{Advisor, AnalysisRequest};
    use crate::test_support::{breakdown, profile};

    fn recommendation() -> StyleRecommendation {
        let mut b = breakdown();
        b.occasion_requested = "wedding_guest_indian".to_string();
        Advisor::new().recommend(&AnalysisRequest::new(profile(), b, "wedding_guest_indian"))
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("a bb ccc", 4), vec!["a bb", "ccc"]);
        assert!(wrap("   ", 10).is_empty());
        assert_eq!(wrap("unbreakable", 3), vec!["unbreakable"]);
    }

    #[test]
    fn test_render_sections() {
        let rec = recommendation();
        let text = render(&rec);
        assert!(text.contains("STYLE ANALYSIS  |  Wedding Guest Indian"));
        assert!(text.contains("Footwear    ["));
        assert!(text.contains("YOUR PROFILE"));
        assert!(text.contains("YOUR COLOR PALETTE"));
        assert!(text.contains("WEAR THIS INSTEAD"));
        assert!(!text.contains("WHAT'S WORKING"));
        assert!(text.contains("REMARKS  (fix in this order)"));
        assert!(text.lines().all(|l| !l.ends_with(' ')));
    }

    #[test]
    fn test_hidden_footwear_has_no_bar() {
        let mut rec = recommendation();
        rec.outfit_breakdown.footwear_analysis.visible = false;
        let text = render(&rec);
        assert!(!text.contains("Footwear    ["));
        assert!(text.contains("Not visible in frame"));
    }

    #[test]
    fn test_export_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join("analysis.json");
        let rec = recommendation();
        export_json(&rec, &path).unwrap();
        let back: StyleRecommendation =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, rec);
    }
}

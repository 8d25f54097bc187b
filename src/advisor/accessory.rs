use crate::advisor::{RemarkLog, note};
use crate::knowledge::accessory;
use crate::models::{AccessoryType, BodyZone, OutfitBreakdown, Remark, RemarkCategory, Severity};

/// Most missing-accessory suggestions reported per look.
pub const MAX_MISSING_REMARKS: usize = 2;

pub fn accessory_remarks(breakdown: &OutfitBreakdown, occasion_slug: &str) -> Vec<Remark> {
    let analysis = &breakdown.accessory_analysis;
    let mut log = RemarkLog::new();

    for item in &analysis.items_detected {
        if !item.occasion_appropriate && !item.issue.is_empty() {
            log.push(
                Severity::Moderate,
                RemarkCategory::Accessory,
                BodyZone::UpperBody,
                note(
                    item.kind.as_str(),
                    &item.issue,
                    &item.fix,
                    "Accessories signal the formality level of an entire look.",
                ),
            );
        }
    }

    let detected: Vec<AccessoryType> = analysis.items_detected.iter().map(|i| i.kind).collect();
    for suggestion in accessory::suggest_missing_accessories(occasion_slug, &detected)
        .into_iter()
        .take(MAX_MISSING_REMARKS)
    {
        log.push(
            Severity::Minor,
            RemarkCategory::Accessory,
            BodyZone::FullLook,
            note(
                "missing accessory",
                "Key accessory absent for this occasion",
                suggestion,
                "The right accessory elevates a good outfit to a complete look.",
            ),
        );
    }

    log.into_remarks()
}

// Storage round trips against a temporary data directory

use std::fs;

use tempfile::TempDir;

use stylist::advisor::{Advisor, AnalysisRequest};
use stylist::errors::StylistError;
use stylist::models::{OutfitBreakdown, UserProfile};
use stylist::report;
use stylist::storage::{FileProfileStore, HistoryLog, ProfileStore};

fn profile() -> UserProfile {
    serde_json::from_str(include_str!("fixtures/profile.json")).expect("profile fixture")
}

fn outfit() -> OutfitBreakdown {
    serde_json::from_str(include_str!("fixtures/outfit_wedding.json")).expect("outfit fixture")
}

#[test]
fn test_profile_store_lifecycle() {
    let dir = TempDir::new().unwrap();
    let mut store = FileProfileStore::new(dir.path().to_path_buf());

    assert!(matches!(
        store.load(),
        Err(StylistError::ProfileNotFound { .. })
    ));

    store.save(&profile(), false).unwrap();
    let loaded = store.load().unwrap();
    assert_eq!(loaded, profile());
    assert_eq!(loaded.preferred_name.as_deref(), Some("Kabir"));

    // unset optional fields stay out of the file
    let raw = fs::read_to_string(store.profile_path()).unwrap();
    assert!(!raw.contains("lifestyle"));
    assert!(raw.contains("\"preferred_name\""));

    let mut refreshed = profile();
    refreshed.profile_version += 1;
    assert!(matches!(
        store.save(&refreshed, false),
        Err(StylistError::ProfileAlreadyExists { .. })
    ));
    store.save(&refreshed, true).unwrap();
    assert_eq!(store.load().unwrap().profile_version, 3);

    store.delete().unwrap();
    assert!(!store.exists());
    store.delete().unwrap();
}

#[test]
fn test_profile_with_unknown_field_is_corrupted() {
    let dir = TempDir::new().unwrap();
    let mut store = FileProfileStore::new(dir.path().to_path_buf());
    store.save(&profile(), false).unwrap();

    let raw = fs::read_to_string(store.profile_path()).unwrap();
    let tampered = raw.replacen('{', "{\"favourite_colour\": \"teal\",", 1);
    fs::write(store.profile_path(), tampered).unwrap();

    assert!(matches!(
        store.load(),
        Err(StylistError::CorruptedProfile { .. })
    ));
}

#[test]
fn test_history_records_each_analysis() {
    let dir = TempDir::new().unwrap();
    let history = HistoryLog::new(dir.path().join("data"));
    let advisor = Advisor::new();

    let mut recs = Vec::new();
    for occasion in ["wedding_guest_indian", "party", "indian_formal"] {
        let mut breakdown = outfit();
        breakdown.occasion_requested = occasion.to_string();
        let rec = advisor.recommend(&AnalysisRequest::new(profile(), breakdown, occasion));
        history
            .append(&rec, &format!("outputs/{}.json", occasion))
            .unwrap();
        recs.push(rec);
    }

    let all = history.load(0).unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(history.count().unwrap(), 3);
    assert!(all.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));

    let first = &all[0];
    assert_eq!(first.occasion, "wedding_guest_indian");
    assert_eq!(first.json_path, "outputs/wedding_guest_indian.json");
    assert_eq!(first.remark_count, recs[0].all_remarks().count());
    assert_eq!(first.critical_count, 2);
    assert_eq!(first.footwear_score, recs[0].footwear_score);

    let newest: Vec<_> = history
        .load(2)
        .unwrap()
        .into_iter()
        .map(|e| e.occasion)
        .collect();
    assert_eq!(newest, vec!["party", "indian_formal"]);

    history.clear().unwrap();
    assert!(history.load(0).unwrap().is_empty());
}

#[test]
fn test_exported_json_reloads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("outputs").join("analysis.json");

    let mut request = AnalysisRequest::new(profile(), outfit(), "wedding_guest_indian");
    request.analysis_json_path = path.display().to_string();
    let rec = Advisor::new().recommend(&request);
    report::export_json(&rec, &path).unwrap();

    let reloaded: stylist::StyleRecommendation =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(reloaded, rec);
    assert_eq!(reloaded.analysis_json_path, path.display().to_string());
}

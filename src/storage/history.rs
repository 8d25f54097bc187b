use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::errors::StylistError;
use crate::models::{Score, Severity, StyleRecommendation};
use crate::storage::default_data_dir;

const HISTORY_FILE_NAME: &str = "history.jsonl";

/// One line of the history log, summarising a finished analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub occasion: String,
    pub overall_style_score: Score,
    pub outfit_score: Score,
    pub grooming_score: Score,
    pub accessory_score: Score,
    pub footwear_score: Score,
    pub json_path: String,
    pub caricature_path: String,
    pub annotated_path: String,
    pub remark_count: usize,
    pub critical_count: usize,
    pub wardrobe_gaps: Vec<String>,
    pub shopping_priorities: Vec<String>,
}

impl HistoryEntry {
    pub fn new(
        recommendation: &StyleRecommendation,
        json_path: &str,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let remark_count = recommendation.all_remarks().count();
        let critical_count = recommendation
            .all_remarks()
            .filter(|r| r.severity == Severity::Critical)
            .count();

        Self {
            timestamp,
            occasion: recommendation.outfit_breakdown.occasion_requested.clone(),
            overall_style_score: recommendation.overall_style_score,
            outfit_score: recommendation.outfit_score,
            grooming_score: recommendation.grooming_score,
            accessory_score: recommendation.accessory_score,
            footwear_score: recommendation.footwear_score,
            json_path: json_path.to_string(),
            caricature_path: recommendation.caricature_image_path.clone(),
            annotated_path: recommendation.annotated_output_path.clone(),
            remark_count,
            critical_count,
            wardrobe_gaps: recommendation.wardrobe_gaps.clone(),
            shopping_priorities: recommendation.shopping_priorities.clone(),
        }
    }
}

/// Append-only JSON Lines log of analyses, oldest first.
pub struct HistoryLog {
    path: PathBuf,
}

impl HistoryLog {
    pub fn new(storage_path: PathBuf) -> Self {
        Self {
            path: storage_path.join(HISTORY_FILE_NAME),
        }
    }

    pub fn new_default() -> Result<Self, StylistError> {
        Ok(Self::new(default_data_dir()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(
        &self,
        recommendation: &StyleRecommendation,
        json_path: &str,
    ) -> Result<HistoryEntry, StylistError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StylistError::HistoryIOError { source: e })?;
        }

        let entry = HistoryEntry::new(recommendation, json_path, Utc::now());
        serde_jsonlines::append_json_lines(&self.path, [&entry])
            .map_err(|e| StylistError::HistoryIOError { source: e })?;

        info!("History updated: {}", self.path.display());
        Ok(entry)
    }

    /// The newest `last_n` entries in insertion order, or all of them when
    /// `last_n` is 0. Lines that do not parse are skipped.
    pub fn load(&self, last_n: usize) -> Result<Vec<HistoryEntry>, StylistError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let lines = serde_jsonlines::json_lines::<HistoryEntry, _>(&self.path)
            .map_err(|e| StylistError::HistoryIOError { source: e })?;

        let mut entries = Vec::new();
        for (line_no, line) in lines.enumerate() {
            match line {
                Ok(entry) => entries.push(entry),
                Err(e) if matches!(e.kind(), ErrorKind::InvalidData | ErrorKind::UnexpectedEof) => {
                    warn!("Skipping malformed history line {}: {}", line_no + 1, e);
                }
                Err(e) => return Err(StylistError::HistoryIOError { source: e }),
            }
        }

        if last_n > 0 && entries.len() > last_n {
            entries.drain(..entries.len() - last_n);
        }
        Ok(entries)
    }

    pub fn count(&self) -> Result<usize, StylistError> {
        Ok(self.load(0)?.len())
    }

    /// Deletes the log. Does nothing when there is none.
    pub fn clear(&self) -> Result<(), StylistError> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| StylistError::HistoryIOError { source: e })?;
            info!("History cleared: {}", self.path.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::TempDir;

    use super::*;
    use crate::advisor::{AnalysisRequest, Advisor};
    use crate::test_support::{breakdown, profile};

    fn recommendation(occasion: &str) -> StyleRecommendation {
        let mut b = breakdown();
        b.occasion_requested = occasion.to_string();
        Advisor::new().recommend(&AnalysisRequest::new(profile(), b, occasion))
    }

    #[test]
    fn test_append_and_load() {
        let dir = TempDir::new().unwrap();
        let log = HistoryLog::new(dir.path().join("data"));
        assert!(log.load(0).unwrap().is_empty());

        let entry = log.append(&recommendation("party"), "out/a.json").unwrap();
        assert_eq!(entry.occasion, "party");
        assert_eq!(entry.json_path, "out/a.json");
        log.append(&recommendation("gym"), "").unwrap();
        log.append(&recommendation("wedding_guest_indian"), "").unwrap();

        assert_eq!(log.count().unwrap(), 3);
        let last_two: Vec<String> = log
            .load(2)
            .unwrap()
            .into_iter()
            .map(|e| e.occasion)
            .collect();
        assert_eq!(last_two, vec!["gym", "wedding_guest_indian"]);
        assert_eq!(log.load(10).unwrap().len(), 3);
    }

    #[test]
    fn test_counts_remarks() {
        let rec = recommendation("party");
        let entry = HistoryEntry::new(&rec, "", Utc::now());
        assert_eq!(entry.remark_count, rec.all_remarks().count());
        assert_eq!(entry.footwear_score, rec.footwear_score);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let dir = TempDir::new().unwrap();
        let log = HistoryLog::new(dir.path().to_path_buf());
        log.append(&recommendation("party"), "").unwrap();
        {
            let mut file = fs::OpenOptions::new().append(true).open(log.path()).unwrap();
            writeln!(file, "not json").unwrap();
            writeln!(file, "{{\"timestamp\": ").unwrap();
        }
        log.append(&recommendation("gym"), "").unwrap();
        assert_eq!(log.count().unwrap(), 2);
    }

    #[test]
    fn test_clear() {
        let dir = TempDir::new().unwrap();
        let log = HistoryLog::new(dir.path().to_path_buf());
        log.clear().unwrap();
        log.append(&recommendation("party"), "").unwrap();
        log.clear().unwrap();
        assert_eq!(log.count().unwrap(), 0);
    }
}

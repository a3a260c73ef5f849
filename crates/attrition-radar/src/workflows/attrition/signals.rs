//! Heuristic profile-signal extraction from exported profile text.
//!
//! This is keyword and year counting only. Its output is advisory; the
//! scoring engine depends solely on the shape of [`ProfileSignals`].

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::OnceLock;

use chrono::{Datelike, Local};
use regex::Regex;
use tracing::debug;

use super::domain::{EmployeeRecord, ProfileSignals};
use super::scoring::ScoringConfig;

const ACTIVITY_KEYWORDS: &[&str] = &[
    "open to work",
    "#opentowork",
    "actively looking",
    "seeking new opportunities",
    "looking for new opportunities",
    "available for new roles",
    "aberto a oportunidades",
];

const POSITION_KEYWORDS: &[&str] = &[
    "joined",
    "started as",
    "promoted to",
    "hired as",
    "new position",
    "new role",
];

const CERTIFICATION_KEYWORDS: &[&str] = &["certification", "certified", "certificate", "certificado"];

const FREQUENT_CHANGE_WINDOW: i32 = 5;
const FREQUENT_CHANGE_STARTS: usize = 3;
const FREQUENT_CHANGE_POSITIONS: usize = 4;
const CERTIFICATION_WINDOW: i32 = 2;

#[derive(Debug, thiserror::Error)]
pub enum SignalError {
    #[error("profile document contains no readable text")]
    EmptyDocument,
    #[error("unsupported profile document format '{0}' (expected .txt or .md)")]
    UnsupportedFormat(String),
    #[error("failed to read profile document: {0}")]
    Io(#[from] std::io::Error),
}

fn year_pattern() -> &'static Regex {
    static YEAR: OnceLock<Regex> = OnceLock::new();
    YEAR.get_or_init(|| Regex::new(r"\b(19[5-9]\d|20\d{2})\b").expect("year pattern compiles"))
}

fn range_pattern() -> &'static Regex {
    static RANGE: OnceLock<Regex> = OnceLock::new();
    RANGE.get_or_init(|| {
        Regex::new(r"(?i)\b(19[5-9]\d|20\d{2})\s*(?:-|–|to|até|a)\s*(?:19[5-9]\d|20\d{2}|present|current|now|atual|hoje)\b")
            .expect("range pattern compiles")
    })
}

fn years_in(text: &str) -> impl Iterator<Item = i32> + '_ {
    year_pattern()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .filter_map(|year| year.as_str().parse().ok())
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Year used as "now" when dating profile entries.
pub fn current_reference_year() -> i32 {
    Local::now().year()
}

pub fn extract_signals(text: &str, reference_year: i32) -> Result<ProfileSignals, SignalError> {
    if text.trim().is_empty() {
        return Err(SignalError::EmptyDocument);
    }

    let lowered = text.to_lowercase();
    let is_recent = |year: i32, window: i32| year <= reference_year && reference_year - year < window;

    let current_year_mentions = years_in(&lowered)
        .filter(|year| *year == reference_year)
        .count();
    let recently_active = contains_any(&lowered, ACTIVITY_KEYWORDS) || current_year_mentions >= 2;

    let recent_starts: BTreeSet<i32> = range_pattern()
        .captures_iter(&lowered)
        .filter_map(|caps| caps.get(1))
        .filter_map(|year| year.as_str().parse().ok())
        .filter(|year| is_recent(*year, FREQUENT_CHANGE_WINDOW))
        .collect();
    let recent_positions = lowered
        .lines()
        .filter(|line| contains_any(line, POSITION_KEYWORDS))
        .filter(|line| years_in(line).any(|year| is_recent(year, FREQUENT_CHANGE_WINDOW)))
        .count();
    let frequent_changes = recent_starts.len() >= FREQUENT_CHANGE_STARTS
        || recent_positions >= FREQUENT_CHANGE_POSITIONS;

    let recent_certifications = lowered
        .lines()
        .filter(|line| contains_any(line, CERTIFICATION_KEYWORDS))
        .any(|line| years_in(line).any(|year| is_recent(year, CERTIFICATION_WINDOW)));

    let signals = ProfileSignals {
        recently_active,
        frequent_changes,
        recent_certifications,
    };
    debug!(
        ?signals,
        recent_starts = recent_starts.len(),
        recent_positions,
        "extracted profile signals"
    );
    Ok(signals)
}

/// Read a plain-text profile export.
pub fn read_profile_document<P: AsRef<Path>>(path: P) -> Result<String, SignalError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "txt" | "md" => Ok(std::fs::read_to_string(path)?),
        other => Err(SignalError::UnsupportedFormat(other.to_string())),
    }
}

/// Extract signals and attach them. On failure the record, including its
/// score, is left unchanged.
pub fn apply_profile_document(
    record: &mut EmployeeRecord,
    text: &str,
    reference_year: i32,
    config: &ScoringConfig,
) -> Result<ProfileSignals, SignalError> {
    let signals = extract_signals(text, reference_year)?;
    record.attach_signals(signals, config);
    Ok(signals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::attrition::domain::{Employee, EmployeeAttributes};

    const YEAR: i32 = 2025;

    fn record() -> EmployeeRecord {
        let employee = Employee::new(EmployeeAttributes {
            name: "Carla Dias".to_string(),
            department: "Engineering".to_string(),
            title: "Developer".to_string(),
            tenure_years: 3.0,
            participated_in_development_plan: true,
            training_count: 3,
            absence_count: 0,
        })
        .expect("valid employee");
        EmployeeRecord::new(employee, &ScoringConfig::default())
    }

    #[test]
    fn detects_open_to_work_keyword() {
        let signals = extract_signals("Senior developer. #OpenToWork", YEAR).expect("extracts");
        assert!(signals.recently_active);
        assert!(!signals.frequent_changes);
    }

    #[test]
    fn counts_recent_experience_ranges() {
        let text = "Experience\n\
Acme Corp, Developer, 2024 - present\n\
Globex, Developer, 2023 - 2024\n\
Initech, Intern, 2021 - 2023\n\
Umbrella, Intern, 2012 - 2014\n";
        let signals = extract_signals(text, YEAR).expect("extracts");
        assert!(signals.frequent_changes);
    }

    #[test]
    fn old_ranges_do_not_count_as_frequent_changes() {
        let text = "A, 2005 - 2008\nB, 2008 - 2012\nC, 2012 - 2019\n";
        let signals = extract_signals(text, YEAR).expect("extracts");
        assert!(!signals.frequent_changes);
    }

    #[test]
    fn certification_must_be_dated_recently() {
        let recent = extract_signals("AWS Certified Solutions Architect (2024)", YEAR)
            .expect("extracts");
        assert!(recent.recent_certifications);

        let stale = extract_signals("PMP certification, 2016", YEAR).expect("extracts");
        assert!(!stale.recent_certifications);
    }

    #[test]
    fn blank_document_fails_without_touching_the_record() {
        let config = ScoringConfig::default();
        let mut subject = record();
        let before = subject.clone();

        let error = apply_profile_document(&mut subject, "   \n", YEAR, &config)
            .expect_err("blank text is rejected");

        assert!(matches!(error, SignalError::EmptyDocument));
        assert_eq!(subject, before);
    }

    #[test]
    fn applying_a_document_rescores_the_record() {
        let config = ScoringConfig::default();
        let mut subject = record();
        let before = subject.score();

        let signals = apply_profile_document(&mut subject, "Open to work since 2025", YEAR, &config)
            .expect("applies");

        assert!(signals.recently_active);
        assert_eq!(subject.signals(), Some(&signals));
        assert!(subject.score() > before);
    }

    #[test]
    fn rejects_unsupported_document_types() {
        let error = read_profile_document("profile.pdf").expect_err("pdf unsupported");
        assert!(matches!(error, SignalError::UnsupportedFormat(ext) if ext == "pdf"));
    }
}

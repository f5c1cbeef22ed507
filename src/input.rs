//! CSV ingestion and input validation for the calculator.
//!
//! Subjects arrive as `subject,marks,credit_hours` rows. Cumulative input is
//! either a directory of `term=<label>.csv` subject files or a single CSV of
//! precomputed `term,gpa,total_credits` rows.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use tracing::warn;

/// Credit hours accepted without a warning.
const PRACTICAL_CREDIT_RANGE: (f64, f64) = (1.0, 5.0);

/// A subject row as entered: name, percentage mark, credit hours.
#[derive(Debug, Clone, Deserialize)]
pub struct SubjectRow {
    pub subject: String,
    pub marks: f64,
    pub credit_hours: f64,
}

/// A precomputed term row: label, term GPA, term credit total.
#[derive(Debug, Clone, Deserialize)]
pub struct TermRow {
    pub term: String,
    pub gpa: f64,
    pub total_credits: f64,
}

/// Decodes subject rows from CSV bytes, validating each row's bounds.
///
/// # Errors
///
/// Returns an error if the bytes are not valid CSV for subject rows, if a
/// mark lies outside 0–100, or if credit hours are negative or not finite.
pub fn parse_subjects(bytes: &[u8]) -> Result<Vec<SubjectRow>> {
    let mut rdr = csv::Reader::from_reader(bytes);
    let mut rows = Vec::new();

    for result in rdr.deserialize() {
        let row: SubjectRow = result?;
        validate_subject(&row)?;
        rows.push(row);
    }

    Ok(rows)
}

/// Reads and validates subject rows from a CSV file.
pub fn load_subjects(path: &str) -> Result<Vec<SubjectRow>> {
    let bytes = fs::read(path).with_context(|| format!("reading subjects from {path}"))?;
    parse_subjects(&bytes)
}

/// Decodes precomputed term rows from CSV bytes, validating each row.
///
/// # Errors
///
/// Returns an error on malformed CSV, a GPA outside 0–4, or a negative or
/// non-finite credit total.
pub fn parse_terms(bytes: &[u8]) -> Result<Vec<TermRow>> {
    let mut rdr = csv::Reader::from_reader(bytes);
    let mut rows = Vec::new();

    for result in rdr.deserialize() {
        let row: TermRow = result?;
        validate_term(&row)?;
        rows.push(row);
    }

    Ok(rows)
}

/// Reads and validates precomputed term rows from a CSV file.
pub fn load_terms(path: &str) -> Result<Vec<TermRow>> {
    let bytes = fs::read(path).with_context(|| format!("reading terms from {path}"))?;
    parse_terms(&bytes)
}

/// Scans a directory for `term=<label>.csv` subject files, sorted by label.
///
/// Files without the `term=` prefix or a `.csv` extension are skipped.
pub fn load_term_files(dir: &str) -> Result<Vec<(String, Vec<SubjectRow>)>> {
    let mut terms = Vec::new();

    for entry in fs::read_dir(dir).with_context(|| format!("reading term files from {dir}"))? {
        let entry = entry?;
        let path = entry.path();

        if path.extension().and_then(|e| e.to_str()) != Some("csv") {
            continue;
        }

        let Some(label) = path
            .file_stem()
            .and_then(|s| s.to_str())
            .and_then(|s| s.strip_prefix("term="))
        else {
            continue;
        };

        let bytes = fs::read(&path)
            .with_context(|| format!("reading subjects from {}", path.display()))?;
        let rows = parse_subjects(&bytes)
            .with_context(|| format!("parsing {}", path.display()))?;

        terms.push((label.to_string(), rows));
    }

    terms.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(terms)
}

fn validate_subject(row: &SubjectRow) -> Result<()> {
    if !row.marks.is_finite() || !(0.0..=100.0).contains(&row.marks) {
        bail!(
            "subject '{}': marks {} outside the 0-100 range",
            row.subject,
            row.marks
        );
    }

    if !row.credit_hours.is_finite() || row.credit_hours < 0.0 {
        bail!(
            "subject '{}': invalid credit hours {}",
            row.subject,
            row.credit_hours
        );
    }

    let (low, high) = PRACTICAL_CREDIT_RANGE;
    if row.credit_hours < low || row.credit_hours > high {
        warn!(
            subject = %row.subject,
            credit_hours = row.credit_hours,
            "Credit hours outside the usual 1-5 range"
        );
    }

    Ok(())
}

fn validate_term(row: &TermRow) -> Result<()> {
    if !row.gpa.is_finite() || !(0.0..=4.0).contains(&row.gpa) {
        bail!("term '{}': GPA {} outside the 0-4 range", row.term, row.gpa);
    }

    if !row.total_credits.is_finite() || row.total_credits < 0.0 {
        bail!(
            "term '{}': invalid credit total {}",
            row.term,
            row.total_credits
        );
    }

    Ok(())
}

//! Result records assembled from graded subjects and term outcomes.
//!
//! A term report carries the per-subject table plus the aggregated GPA; a
//! cumulative report carries per-term summaries plus the overall CGPA. All
//! records are recomputed fresh per calculation and serialized for display.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::grading::aggregate::weighted_average;
use crate::grading::classify::{approx_percentage, classify_cumulative, classify_term};
use crate::grading::scale::{GradingScale, LetterGrade, grade_point};
use crate::grading::utility::mean;
use crate::input::{SubjectRow, TermRow};

/// One graded subject, as displayed in the results table.
#[derive(Debug, Serialize)]
pub struct SubjectRecord {
    pub subject: String,
    pub marks: f64,
    pub credit_hours: f64,
    pub grade: LetterGrade,
    pub grade_points: f64,
    pub description: &'static str,
}

impl SubjectRecord {
    pub fn from_row(row: &SubjectRow, scale: GradingScale) -> Self {
        let (grade_points, grade) = grade_point(row.marks, scale);

        SubjectRecord {
            subject: row.subject.clone(),
            marks: row.marks,
            credit_hours: row.credit_hours,
            grade,
            grade_points,
            description: grade.description(),
        }
    }
}

/// Credit-weighted outcome of a single term.
#[derive(Debug, Serialize)]
pub struct TermResult {
    pub gpa: f64,
    pub total_credits: f64,
    pub subject_count: usize,
}

/// Full single-term report: graded subjects plus the aggregated result.
#[derive(Debug, Serialize)]
pub struct TermReport {
    pub generated_at: DateTime<Utc>,
    pub scale: GradingScale,
    pub subjects: Vec<SubjectRecord>,
    pub result: TermResult,
    pub band: String,
}

impl TermReport {
    /// Grades every subject and folds the grade points into a term GPA.
    pub fn from_subjects(rows: &[SubjectRow], scale: GradingScale) -> Self {
        let subjects: Vec<SubjectRecord> = rows
            .iter()
            .map(|row| SubjectRecord::from_row(row, scale))
            .collect();

        let points: Vec<f64> = subjects.iter().map(|s| s.grade_points).collect();
        let credits: Vec<f64> = subjects.iter().map(|s| s.credit_hours).collect();
        let (gpa, total_credits) = weighted_average(&points, &credits);

        TermReport {
            generated_at: Utc::now(),
            scale,
            subjects,
            result: TermResult {
                gpa,
                total_credits,
                subject_count: rows.len(),
            },
            band: classify_term(gpa).label().to_string(),
        }
    }
}

/// Per-term line of the cumulative summary.
///
/// `subjects` is unknown for terms ingested as precomputed GPA rows.
#[derive(Debug, Serialize)]
pub struct TermSummary {
    pub term: String,
    pub gpa: f64,
    pub total_credits: f64,
    pub subjects: Option<usize>,
}

impl TermSummary {
    pub fn from_report(term: &str, report: &TermReport) -> Self {
        TermSummary {
            term: term.to_string(),
            gpa: report.result.gpa,
            total_credits: report.result.total_credits,
            subjects: Some(report.result.subject_count),
        }
    }

    pub fn from_row(row: &TermRow) -> Self {
        TermSummary {
            term: row.term.clone(),
            gpa: row.gpa,
            total_credits: row.total_credits,
            subjects: None,
        }
    }
}

/// Credit-weighted outcome across every term.
#[derive(Debug, Serialize)]
pub struct OverallResult {
    pub cgpa: f64,
    pub total_credits: f64,
    pub mean_gpa: f64,
}

/// Full cumulative report: term summaries plus the overall result.
#[derive(Debug, Serialize)]
pub struct CgpaReport {
    pub generated_at: DateTime<Utc>,
    pub scale: GradingScale,
    pub terms: Vec<TermSummary>,
    pub overall: OverallResult,
    pub band: String,
    pub approx_percentage: f64,
}

impl CgpaReport {
    /// Weights each term's GPA by its credit total to produce the CGPA.
    pub fn from_terms(terms: Vec<TermSummary>, scale: GradingScale) -> Self {
        let gpas: Vec<f64> = terms.iter().map(|t| t.gpa).collect();
        let credits: Vec<f64> = terms.iter().map(|t| t.total_credits).collect();
        let (cgpa, total_credits) = weighted_average(&gpas, &credits);

        CgpaReport {
            generated_at: Utc::now(),
            scale,
            terms,
            overall: OverallResult {
                cgpa,
                total_credits,
                mean_gpa: mean(&gpas),
            },
            band: classify_cumulative(cgpa).label().to_string(),
            approx_percentage: approx_percentage(cgpa),
        }
    }
}

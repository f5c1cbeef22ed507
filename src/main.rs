//! CLI entry point for the GPA & CGPA calculator.
//!
//! Provides subcommands for printing the grading scale, computing a single
//! term's GPA from subject marks, and computing a cumulative GPA across terms.

use anyhow::Result;
use clap::{Parser, Subcommand};
use gpa_calculator::grading::scale::{GradingScale, scale_table};
use gpa_calculator::input;
use gpa_calculator::output::{print_json, write_table};
use gpa_calculator::report::{CgpaReport, TermReport, TermSummary};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "gpa_calculator")]
#[command(about = "A tool to calculate GPA and CGPA from percentage marks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the grading scale as a table of mark bands
    Scale {
        /// Grading scale to display
        #[arg(short, long, value_enum, default_value_t = GradingScale::Standard)]
        scale: GradingScale,
    },
    /// Calculate a single term's GPA from a subjects CSV
    Gpa {
        /// CSV file with subject,marks,credit_hours rows
        #[arg(value_name = "SUBJECTS_CSV")]
        subjects: String,

        /// Grading scale to apply
        #[arg(short, long, value_enum, default_value_t = GradingScale::Standard)]
        scale: GradingScale,

        /// CSV file to write the graded subject table to
        #[arg(short, long)]
        output: Option<String>,

        /// Print the full report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Calculate a cumulative GPA across multiple terms
    Cgpa {
        /// Directory of term=<label>.csv subject files, or a CSV with
        /// term,gpa,total_credits rows
        #[arg(value_name = "DIR_OR_CSV")]
        source: String,

        /// Grading scale to apply
        #[arg(short, long, value_enum, default_value_t = GradingScale::Standard)]
        scale: GradingScale,

        /// CSV file to write the term summary table to
        #[arg(short, long)]
        output: Option<String>,

        /// Print the full report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/gpa_calculator.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("gpa_calculator.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scale { scale } => {
            let table = scale_table(scale);

            for row in &table {
                info!(
                    marks = row.marks,
                    grade = %row.grade,
                    grade_points = row.grade_points,
                    description = row.description,
                    "Grade band"
                );
            }

            info!(bands = table.len(), "Grading scale summary");
        }
        Commands::Gpa {
            subjects,
            scale,
            output,
            json,
        } => {
            let rows = input::load_subjects(&subjects)?;
            let report = TermReport::from_subjects(&rows, scale);

            for record in &report.subjects {
                info!(
                    subject = %record.subject,
                    marks = record.marks,
                    credit_hours = record.credit_hours,
                    grade = %record.grade,
                    grade_points = record.grade_points,
                    description = record.description,
                    "Subject graded"
                );
            }

            info!(
                gpa = format!("{:.2}", report.result.gpa),
                total_credits = report.result.total_credits,
                subject_count = report.result.subject_count,
                band = %report.band,
                "Term GPA computed"
            );

            if let Some(path) = output {
                write_table(&path, &report.subjects)?;
                info!(path, "Subject table written");
            }

            if json {
                print_json(&report)?;
            }
        }
        Commands::Cgpa {
            source,
            scale,
            output,
            json,
        } => {
            let terms = load_term_summaries(&source, scale)?;
            let report = CgpaReport::from_terms(terms, scale);

            for term in &report.terms {
                info!(
                    term = %term.term,
                    gpa = format!("{:.2}", term.gpa),
                    total_credits = term.total_credits,
                    subjects = term.subjects,
                    "Term summary"
                );
            }

            info!(
                cgpa = format!("{:.2}", report.overall.cgpa),
                total_credits = report.overall.total_credits,
                mean_gpa = format!("{:.2}", report.overall.mean_gpa),
                band = %report.band,
                approx_percentage = format!("{:.1}", report.approx_percentage),
                "CGPA computed"
            );

            if let Some(path) = output {
                write_table(&path, &report.terms)?;
                info!(path, "Term summary table written");
            }

            if json {
                print_json(&report)?;
            }
        }
    }

    Ok(())
}

/// Loads term summaries from a directory of per-term subject CSVs or from a
/// single CSV of precomputed term results.
#[tracing::instrument(skip(scale), fields(source = %source))]
fn load_term_summaries(source: &str, scale: GradingScale) -> Result<Vec<TermSummary>> {
    if Path::new(source).is_dir() {
        let mut summaries = Vec::new();

        for (label, rows) in input::load_term_files(source)? {
            let report = TermReport::from_subjects(&rows, scale);
            info!(
                term = %label,
                gpa = format!("{:.2}", report.result.gpa),
                subjects = rows.len(),
                "Term graded"
            );
            summaries.push(TermSummary::from_report(&label, &report));
        }

        Ok(summaries)
    } else {
        Ok(input::load_terms(source)?
            .iter()
            .map(TermSummary::from_row)
            .collect())
    }
}

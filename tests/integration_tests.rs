use gpa_calculator::grading::scale::GradingScale;
use gpa_calculator::input::parse_subjects;
use gpa_calculator::report::{CgpaReport, TermReport, TermSummary};

#[test]
fn test_full_term_pipeline() {
    let bytes = include_bytes!("fixtures/sample_term.csv");
    let rows = parse_subjects(bytes).expect("Failed to parse subjects");
    let report = TermReport::from_subjects(&rows, GradingScale::Standard);

    assert_eq!(report.result.subject_count, 5);
    assert_eq!(report.result.total_credits, 14.0);

    // 88->4.0, 72->3.0, 65->2.7, 91->4.0, 78->3.3 weighted by credits
    let expected = (4.0 * 4.0 + 3.0 * 3.0 + 2.7 * 3.0 + 4.0 * 2.0 + 3.3 * 2.0) / 14.0;
    assert!((report.result.gpa - expected).abs() < 1e-9);
    assert_eq!(report.band, "Very Good! First Class");
}

#[test]
fn test_full_cumulative_pipeline() {
    let bytes = include_bytes!("fixtures/sample_term.csv");
    let rows = parse_subjects(bytes).expect("Failed to parse subjects");

    let first = TermReport::from_subjects(&rows, GradingScale::Standard);
    let second = TermReport::from_subjects(&rows[..3], GradingScale::Standard);

    let terms = vec![
        TermSummary::from_report("1", &first),
        TermSummary::from_report("2", &second),
    ];
    let report = CgpaReport::from_terms(terms, GradingScale::Standard);

    assert_eq!(report.terms.len(), 2);
    assert_eq!(
        report.overall.total_credits,
        first.result.total_credits + second.result.total_credits
    );
    assert!(report.overall.cgpa > 0.0 && report.overall.cgpa <= 4.0);
    assert!(!report.band.is_empty());
}

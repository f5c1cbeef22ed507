//! Mark-to-grade conversion under the built-in 4.0 grading scale.

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// Which grading scale to apply when converting marks.
///
/// Both variants currently resolve to the same 4.0 ladder; the selector is
/// threaded through every caller so the tables can diverge independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
pub enum GradingScale {
    /// Standard 4.0 university scale.
    Standard,
    /// Direct percentage scale.
    Percentage,
}

/// Letter grade, paired one-to-one with a grade-point band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LetterGrade {
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    C,
    #[serde(rename = "C-")]
    CMinus,
    D,
    F,
}

impl LetterGrade {
    pub fn as_str(&self) -> &'static str {
        match self {
            LetterGrade::A => "A",
            LetterGrade::AMinus => "A-",
            LetterGrade::BPlus => "B+",
            LetterGrade::B => "B",
            LetterGrade::BMinus => "B-",
            LetterGrade::CPlus => "C+",
            LetterGrade::C => "C",
            LetterGrade::CMinus => "C-",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        }
    }

    /// Fixed human-readable label for the grade.
    pub fn description(&self) -> &'static str {
        match self {
            LetterGrade::A => "Excellent",
            LetterGrade::AMinus => "Very Good",
            LetterGrade::BPlus => "Good Plus",
            LetterGrade::B => "Good",
            LetterGrade::BMinus => "Satisfactory Plus",
            LetterGrade::CPlus => "Satisfactory",
            LetterGrade::C => "Acceptable",
            LetterGrade::CMinus => "Acceptable Minus",
            LetterGrade::D => "Pass",
            LetterGrade::F => "Fail",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts a percentage mark (0–100) into a grade point and letter grade.
///
/// | Mark    | Points | Grade |
/// |---------|--------|-------|
/// | >= 85   | 4.0    | A     |
/// | >= 80   | 3.7    | A-    |
/// | >= 75   | 3.3    | B+    |
/// | >= 70   | 3.0    | B     |
/// | >= 65   | 2.7    | B-    |
/// | >= 61   | 2.3    | C+    |
/// | >= 58   | 2.0    | C     |
/// | >= 55   | 1.7    | C-    |
/// | >= 50   | 1.0    | D     |
/// | < 50    | 0.0    | F     |
///
/// The top and bottom bands are open-ended, so any real input maps to a band.
pub fn grade_point(mark: f64, scale: GradingScale) -> (f64, LetterGrade) {
    match scale {
        // Both built-in scales currently share the 4.0 ladder.
        GradingScale::Standard | GradingScale::Percentage => ladder(mark),
    }
}

fn ladder(mark: f64) -> (f64, LetterGrade) {
    match mark {
        m if m >= 85.0 => (4.0, LetterGrade::A),
        m if m >= 80.0 => (3.7, LetterGrade::AMinus),
        m if m >= 75.0 => (3.3, LetterGrade::BPlus),
        m if m >= 70.0 => (3.0, LetterGrade::B),
        m if m >= 65.0 => (2.7, LetterGrade::BMinus),
        m if m >= 61.0 => (2.3, LetterGrade::CPlus),
        m if m >= 58.0 => (2.0, LetterGrade::C),
        m if m >= 55.0 => (1.7, LetterGrade::CMinus),
        m if m >= 50.0 => (1.0, LetterGrade::D),
        _ => (0.0, LetterGrade::F),
    }
}

/// One display row of the grading-system table.
#[derive(Debug, Serialize)]
pub struct ScaleRow {
    pub marks: &'static str,
    pub grade: LetterGrade,
    pub grade_points: f64,
    pub description: &'static str,
}

/// The full grading-system table for a scale, highest band first.
pub fn scale_table(scale: GradingScale) -> [ScaleRow; 10] {
    match scale {
        GradingScale::Standard | GradingScale::Percentage => bands(),
    }
}

fn bands() -> [ScaleRow; 10] {
    let row = |marks, grade: LetterGrade, grade_points| ScaleRow {
        marks,
        grade,
        grade_points,
        description: grade.description(),
    };

    [
        row("85-100", LetterGrade::A, 4.0),
        row("80-84", LetterGrade::AMinus, 3.7),
        row("75-79", LetterGrade::BPlus, 3.3),
        row("70-74", LetterGrade::B, 3.0),
        row("65-69", LetterGrade::BMinus, 2.7),
        row("61-64", LetterGrade::CPlus, 2.3),
        row("58-60", LetterGrade::C, 2.0),
        row("55-57", LetterGrade::CMinus, 1.7),
        row("50-54", LetterGrade::D, 1.0),
        row("Below 50", LetterGrade::F, 0.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_point_boundaries() {
        let scale = GradingScale::Standard;

        assert_eq!(grade_point(100.0, scale), (4.0, LetterGrade::A));
        assert_eq!(grade_point(85.0, scale), (4.0, LetterGrade::A));
        assert_eq!(grade_point(84.999, scale), (3.7, LetterGrade::AMinus));
        assert_eq!(grade_point(80.0, scale), (3.7, LetterGrade::AMinus));
        assert_eq!(grade_point(79.5, scale), (3.3, LetterGrade::BPlus));
        assert_eq!(grade_point(75.0, scale), (3.3, LetterGrade::BPlus));
        assert_eq!(grade_point(70.0, scale), (3.0, LetterGrade::B));
        assert_eq!(grade_point(65.0, scale), (2.7, LetterGrade::BMinus));
        assert_eq!(grade_point(61.0, scale), (2.3, LetterGrade::CPlus));
        assert_eq!(grade_point(58.0, scale), (2.0, LetterGrade::C));
        assert_eq!(grade_point(55.0, scale), (1.7, LetterGrade::CMinus));
        assert_eq!(grade_point(50.0, scale), (1.0, LetterGrade::D));
        assert_eq!(grade_point(49.999, scale), (0.0, LetterGrade::F));
        assert_eq!(grade_point(0.0, scale), (0.0, LetterGrade::F));
    }

    #[test]
    fn test_grade_point_open_ended_bands() {
        // Out-of-contract marks still land in the nearest band
        assert_eq!(grade_point(120.0, GradingScale::Standard), (4.0, LetterGrade::A));
        assert_eq!(grade_point(-5.0, GradingScale::Standard), (0.0, LetterGrade::F));
    }

    #[test]
    fn test_grade_point_monotonic_and_from_fixed_set() {
        let allowed = [0.0, 1.0, 1.7, 2.0, 2.3, 2.7, 3.0, 3.3, 3.7, 4.0];
        let mut previous = 0.0;

        for step in 0..=400 {
            let mark = step as f64 * 0.25;
            let (points, _) = grade_point(mark, GradingScale::Standard);

            assert!(allowed.contains(&points), "unexpected grade point {points} for mark {mark}");
            assert!(points >= previous, "grade points decreased at mark {mark}");
            previous = points;
        }
    }

    #[test]
    fn test_both_scales_agree() {
        for step in 0..=200 {
            let mark = step as f64 * 0.5;
            assert_eq!(
                grade_point(mark, GradingScale::Standard),
                grade_point(mark, GradingScale::Percentage),
            );
        }
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(LetterGrade::A.description(), "Excellent");
        assert_eq!(LetterGrade::AMinus.description(), "Very Good");
        assert_eq!(LetterGrade::BMinus.description(), "Satisfactory Plus");
        assert_eq!(LetterGrade::CMinus.description(), "Acceptable Minus");
        assert_eq!(LetterGrade::D.description(), "Pass");
        assert_eq!(LetterGrade::F.description(), "Fail");
    }

    #[test]
    fn test_scale_table_matches_ladder() {
        let table = scale_table(GradingScale::Standard);

        assert_eq!(table.len(), 10);
        assert_eq!(table[0].grade, LetterGrade::A);
        assert_eq!(table[9].grade, LetterGrade::F);

        for row in &table {
            assert_eq!(row.description, row.grade.description());
        }
    }
}

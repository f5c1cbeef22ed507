//! Qualitative classification bands for term and cumulative averages.
//!
//! The two ladders share breakpoints but not labels, and are kept as two
//! distinct types so the label sets cannot drift into each other.

/// Classification band for a single term's GPA.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermBand {
    Distinction,
    FirstClass,
    SecondUpper,
    SecondLower,
    ThirdClass,
    Pass,
    Fail,
}

impl TermBand {
    pub fn label(&self) -> &'static str {
        match self {
            TermBand::Distinction => "Excellent! First Class with Distinction",
            TermBand::FirstClass => "Very Good! First Class",
            TermBand::SecondUpper => "Good! Second Class Upper",
            TermBand::SecondLower => "Satisfactory! Second Class Lower",
            TermBand::ThirdClass => "Acceptable! Third Class",
            TermBand::Pass => "Pass",
            TermBand::Fail => "Fail - Needs Improvement",
        }
    }
}

/// Classification band for a cumulative GPA.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CumulativeBand {
    Distinction,
    FirstClass,
    SecondUpper,
    SecondLower,
    ThirdClass,
    Pass,
    Fail,
}

impl CumulativeBand {
    pub fn label(&self) -> &'static str {
        match self {
            CumulativeBand::Distinction => "Outstanding! First Class with Distinction",
            CumulativeBand::FirstClass => "Excellent! First Class",
            CumulativeBand::SecondUpper => "Very Good! Second Class Upper",
            CumulativeBand::SecondLower => "Good! Second Class Lower",
            CumulativeBand::ThirdClass => "Satisfactory! Third Class",
            CumulativeBand::Pass => "Pass",
            CumulativeBand::Fail => "Overall Fail - Serious Improvement Needed",
        }
    }
}

/// Classifies a term GPA, scanning the bands from the top down.
///
/// | GPA     | Band        |
/// |---------|-------------|
/// | >= 3.7  | Distinction |
/// | >= 3.3  | FirstClass  |
/// | >= 3.0  | SecondUpper |
/// | >= 2.5  | SecondLower |
/// | >= 2.0  | ThirdClass  |
/// | >= 1.0  | Pass        |
/// | < 1.0   | Fail        |
pub fn classify_term(gpa: f64) -> TermBand {
    match gpa {
        g if g >= 3.7 => TermBand::Distinction,
        g if g >= 3.3 => TermBand::FirstClass,
        g if g >= 3.0 => TermBand::SecondUpper,
        g if g >= 2.5 => TermBand::SecondLower,
        g if g >= 2.0 => TermBand::ThirdClass,
        g if g >= 1.0 => TermBand::Pass,
        _ => TermBand::Fail,
    }
}

/// Classifies a cumulative GPA over the same breakpoints as [`classify_term`].
pub fn classify_cumulative(cgpa: f64) -> CumulativeBand {
    match cgpa {
        g if g >= 3.7 => CumulativeBand::Distinction,
        g if g >= 3.3 => CumulativeBand::FirstClass,
        g if g >= 3.0 => CumulativeBand::SecondUpper,
        g if g >= 2.5 => CumulativeBand::SecondLower,
        g if g >= 2.0 => CumulativeBand::ThirdClass,
        g if g >= 1.0 => CumulativeBand::Pass,
        _ => CumulativeBand::Fail,
    }
}

/// Approximate percentage equivalent of a 4.0-scale CGPA. Display only.
pub fn approx_percentage(cgpa: f64) -> f64 {
    (cgpa / 4.0) * 100.0
}

use serde::Serialize;
use std::fmt;

/// Divisor for the percentage: three subjects out of 100 each.
/// Stays fixed even if per-subject maxima change.
pub const MAX_TOTAL_SCORE: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn as_str(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lower bounds, checked top to bottom with `>=`. Anything below the last
/// bound (including negatives and NaN) is an F.
const GRADE_THRESHOLDS: [(f64, Grade); 4] = [
    (90.0, Grade::A),
    (75.0, Grade::B),
    (60.0, Grade::C),
    (40.0, Grade::D),
];

pub fn grade_for_percentage(percentage: f64) -> Grade {
    GRADE_THRESHOLDS
        .iter()
        .find(|(min, _)| percentage >= *min)
        .map(|(_, g)| *g)
        .unwrap_or(Grade::F)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeSummary {
    pub total_score: f64,
    pub percentage: f64,
    pub grade: Grade,
}

pub fn summarize_scores(math: f64, science: f64, english: f64) -> GradeSummary {
    let total_score = math + science + english;
    let percentage = (total_score / MAX_TOTAL_SCORE) * 100.0;
    GradeSummary {
        total_score,
        percentage,
        grade: grade_for_percentage(percentage),
    }
}

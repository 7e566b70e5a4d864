//! Value scales used by the worksheet
//!
//! - [`EvaluationLevel`]: checklist answers and aggregate grades
//! - [`PriorityLevel`]: qualitative priorities, totally ordered
//! - [`Granularity`]: which hierarchy level a concept is scored at
//! - [`Concept`]: the two design alternatives

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Checklist value
///
/// `Excellent`..`Poor` are aggregate grades (strategy and sub-strategy
/// entries); `Yes`/`Partially`/`No` are guideline answers. `N/A` is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EvaluationLevel {
    /// Aggregate grade, score 4
    Excellent,
    /// Aggregate grade, score 3
    Good,
    /// Aggregate grade, score 2
    Mediocre,
    /// Aggregate grade, score 1
    Poor,
    /// Guideline answer, score 4
    Yes,
    /// Guideline answer, score 2.5
    Partially,
    /// Guideline answer, score 1
    No,
    /// Not applicable or not answered, score 0
    #[default]
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl EvaluationLevel {
    /// All aggregate grades, best first
    pub const GRADES: [Self; 5] = [
        Self::Excellent,
        Self::Good,
        Self::Mediocre,
        Self::Poor,
        Self::NotApplicable,
    ];

    /// All guideline answers
    pub const ANSWERS: [Self; 4] = [Self::Yes, Self::Partially, Self::No, Self::NotApplicable];

    /// Numeric score on the 0..=4 scale
    #[inline]
    #[must_use]
    pub fn score(self) -> f64 {
        match self {
            Self::Excellent | Self::Yes => 4.0,
            Self::Good => 3.0,
            Self::Partially => 2.5,
            Self::Mediocre => 2.0,
            Self::Poor | Self::No => 1.0,
            Self::NotApplicable => 0.0,
        }
    }

    /// Bucket a mean score into an aggregate grade
    ///
    /// `>= 3.5` Excellent, `>= 2.5` Good, `>= 1.5` Mediocre, else Poor.
    #[must_use]
    pub fn from_mean(mean: f64) -> Self {
        if mean >= 3.5 {
            Self::Excellent
        } else if mean >= 2.5 {
            Self::Good
        } else if mean >= 1.5 {
            Self::Mediocre
        } else {
            Self::Poor
        }
    }

    /// Check whether the value counts as answered
    #[inline]
    #[must_use]
    pub fn is_applicable(self) -> bool {
        self != Self::NotApplicable
    }

    /// Display string, matching the serialized form
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Mediocre => "Mediocre",
            Self::Poor => "Poor",
            Self::Yes => "Yes",
            Self::Partially => "Partially",
            Self::No => "No",
            Self::NotApplicable => "N/A",
        }
    }
}

impl Display for EvaluationLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative priority, ordered `None < Low < Mid < High`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum PriorityLevel {
    /// Not prioritised
    #[default]
    None,
    /// Low priority
    Low,
    /// Medium priority
    Mid,
    /// High priority
    High,
}

impl Display for PriorityLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::None => "None",
            Self::Low => "Low",
            Self::Mid => "Mid",
            Self::High => "High",
        };
        f.write_str(s)
    }
}

/// Hierarchy level a concept is scored at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Granularity {
    /// Strategy values entered directly
    #[default]
    Simplified,
    /// Sub-strategy values entered, strategies derived
    Normal,
    /// Guideline answers entered, everything above derived
    Detailed,
}

impl Display for Granularity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Simplified => "Simplified",
            Self::Normal => "Normal",
            Self::Detailed => "Detailed",
        };
        f.write_str(s)
    }
}

/// Design concept being evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Concept {
    /// First concept
    #[default]
    A,
    /// Second concept
    B,
}

impl Concept {
    /// Both concepts in display order
    pub const ALL: [Self; 2] = [Self::A, Self::B];
}

impl Display for Concept {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => f.write_str("A"),
            Self::B => f.write_str("B"),
        }
    }
}

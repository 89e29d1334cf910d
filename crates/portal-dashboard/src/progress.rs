//! Subject progress
//!
//! Per-subject grade/attendance/completion percentages and the weighted
//! overall score shown in the progress widget.

use serde::{Deserialize, Serialize};

/// One subject's progress percentages (each 0-100)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectProgress {
    pub subject: String,
    pub grade: u32,
    pub attendance: u32,
    pub completion: u32,
}

impl SubjectProgress {
    pub fn new(subject: impl Into<String>, grade: u32, attendance: u32, completion: u32) -> Self {
        Self {
            subject: subject.into(),
            grade,
            attendance,
            completion,
        }
    }

    /// Weighted overall score: grade 60%, attendance 20%, completion 20%
    pub fn overall_score(&self) -> u32 {
        let score = self.grade as f64 * 0.6
            + self.attendance as f64 * 0.2
            + self.completion as f64 * 0.2;
        score.round() as u32
    }

    pub fn band(&self) -> GradeBand {
        GradeBand::for_score(self.overall_score())
    }
}

/// Color band for an overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradeBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl GradeBand {
    pub fn for_score(score: u32) -> Self {
        if score >= 90 {
            GradeBand::Excellent
        } else if score >= 80 {
            GradeBand::Good
        } else if score >= 70 {
            GradeBand::Fair
        } else {
            GradeBand::Poor
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            GradeBand::Excellent => "bg-success",
            GradeBand::Good => "bg-primary",
            GradeBand::Fair => "bg-warning",
            GradeBand::Poor => "bg-danger",
        }
    }
}

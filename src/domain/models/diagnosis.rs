#[cfg(test)]
#[path = "diagnosis_test.rs"]
mod tests;

use std::fmt;

use serde_derive::Deserialize;
use serde_derive::Serialize;

/// Per-condition confidence scores (0-100, scored independently) in the
/// order the classifier returned them. Never re-sorted: ties resolve to the
/// first entry.
pub type LabelScores = Vec<(String, f64)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Low => return write!(f, "low"),
            Severity::Medium => return write!(f, "medium"),
            Severity::High => return write!(f, "high"),
        }
    }
}

/// Confidence thresholds for one condition. A score above `high` maps to
/// `Severity::High`, above `medium` to `Severity::Medium`, anything else to
/// `Severity::Low`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeverityBands {
    pub medium: f64,
    pub high: f64,
}

impl Default for SeverityBands {
    fn default() -> SeverityBands {
        return SeverityBands {
            medium: 50.0,
            high: 80.0,
        };
    }
}

impl SeverityBands {
    pub fn classify(&self, confidence: f64) -> Severity {
        if confidence > self.high {
            return Severity::High;
        }
        if confidence > self.medium {
            return Severity::Medium;
        }
        return Severity::Low;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PrimaryDiagnosis {
    pub label: String,
    pub display_name: String,
    pub confidence: f64,
    pub description: String,
    pub recommendation: String,
    pub severity: Severity,
}

/// Result payload for an X-ray session: the selected primary diagnosis plus
/// the full score mapping, retained unchanged for display.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageDiagnosis {
    pub primary: PrimaryDiagnosis,
    pub all_scores: LabelScores,
}

/// Wire shape shared by the cough classifier service and the built-in mock.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoughAssessment {
    pub label: String,
    pub confidence: f64,
    pub characteristics: Vec<String>,
    pub recommendation: String,
}

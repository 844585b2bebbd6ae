#[cfg(test)]
#[path = "triage_test.rs"]
mod tests;

use std::collections::HashMap;

use crate::domain::models::AnalysisError;
use crate::domain::models::ImageDiagnosis;
use crate::domain::models::LabelScores;
use crate::domain::models::PrimaryDiagnosis;
use crate::domain::models::SeverityBands;

struct Condition {
    display_name: String,
    description: String,
    bands: SeverityBands,
}

/// Maps classifier scores to the primary diagnosis shown to the user.
/// Thresholds are configurable per condition; the defaults reproduce the
/// classifier service's 50/80 bands for every known label. Labels the
/// policy does not know fall back to the default bands and a generic
/// description.
pub struct TriagePolicy {
    conditions: HashMap<String, Condition>,
    default_bands: SeverityBands,
}

impl Default for TriagePolicy {
    fn default() -> TriagePolicy {
        let mut policy = TriagePolicy {
            conditions: HashMap::new(),
            default_bands: SeverityBands::default(),
        };

        policy.define(
            "TB",
            "Tuberculosis",
            "Possible signs of tuberculosis. Further clinical evaluation is advised.",
            SeverityBands::default(),
        );
        policy.define(
            "COVID",
            "COVID",
            "COVID-19 indicators detected in the lungs. Follow-up RT-PCR test is recommended.",
            SeverityBands::default(),
        );
        policy.define(
            "PNEUMONIA",
            "Pneumonia",
            "Signs of pneumonia detected. Suggested further chest examination.",
            SeverityBands::default(),
        );

        return policy;
    }
}

impl TriagePolicy {
    /// Adds or replaces the policy entry for one condition label.
    pub fn define(
        &mut self,
        label: &str,
        display_name: &str,
        description: &str,
        bands: SeverityBands,
    ) {
        self.conditions.insert(
            label.to_string(),
            Condition {
                display_name: display_name.to_string(),
                description: description.to_string(),
                bands,
            },
        );
    }

    /// Builds the session result from a classifier score mapping: the
    /// highest-scoring label becomes the primary diagnosis and the full
    /// mapping is retained unchanged for display.
    pub fn evaluate(&self, scores: LabelScores) -> Result<ImageDiagnosis, AnalysisError> {
        let (label, confidence) = match select_primary(&scores) {
            Some(primary) => primary,
            None => {
                return Err(AnalysisError::BackendMalformed(
                    "classifier returned no scores".to_string(),
                ))
            }
        };
        let label = label.to_string();

        let condition = self.conditions.get(&label);
        let display_name = match condition {
            Some(condition) => condition.display_name.to_string(),
            None => label.to_string(),
        };
        let description = match condition {
            Some(condition) => condition.description.to_string(),
            None => {
                "No description is available for this condition. Consult a healthcare professional."
                    .to_string()
            }
        };
        let bands = match condition {
            Some(condition) => condition.bands,
            None => self.default_bands,
        };
        let recommendation = if label.eq_ignore_ascii_case("normal") {
            "Continue regular health checkups.".to_string()
        } else {
            "Please consult a healthcare professional for further testing.".to_string()
        };

        return Ok(ImageDiagnosis {
            primary: PrimaryDiagnosis {
                severity: bands.classify(confidence),
                label,
                display_name,
                confidence,
                description,
                recommendation,
            },
            all_scores: scores,
        });
    }
}

/// Strictly-greater scan, so equal top scores resolve to the
/// first-encountered entry deterministically.
pub fn select_primary(scores: &LabelScores) -> Option<(&str, f64)> {
    let mut top: Option<(&str, f64)> = None;

    for (label, score) in scores.iter() {
        let replace = match top {
            None => true,
            Some((_, best)) => *score > best,
        };
        if replace {
            top = Some((label.as_str(), *score));
        }
    }

    return top;
}

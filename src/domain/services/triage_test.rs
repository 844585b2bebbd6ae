use super::select_primary;
use super::TriagePolicy;
use crate::domain::models::AnalysisError;
use crate::domain::models::LabelScores;
use crate::domain::models::Severity;
use crate::domain::models::SeverityBands;

fn scores() -> LabelScores {
    return vec![
        ("TB".to_string(), 87.0),
        ("COVID".to_string(), 12.0),
        ("PNEUMONIA".to_string(), 30.0),
    ];
}

#[test]
fn it_selects_the_highest_score() {
    let diagnosis = TriagePolicy::default().evaluate(scores()).unwrap();

    assert_eq!(diagnosis.primary.label, "TB");
    assert_eq!(diagnosis.primary.display_name, "Tuberculosis");
    assert_eq!(diagnosis.primary.confidence, 87.0);
    assert_eq!(diagnosis.primary.severity, Severity::High);
    assert_eq!(diagnosis.all_scores, scores());
}

#[test]
fn it_breaks_ties_on_the_first_entry() {
    let tied = vec![("TB".to_string(), 80.0), ("COVID".to_string(), 80.0)];
    let diagnosis = TriagePolicy::default().evaluate(tied).unwrap();
    assert_eq!(diagnosis.primary.label, "TB");

    let reversed = vec![("COVID".to_string(), 80.0), ("TB".to_string(), 80.0)];
    let diagnosis = TriagePolicy::default().evaluate(reversed).unwrap();
    assert_eq!(diagnosis.primary.label, "COVID");
}

#[test]
fn it_falls_back_for_unknown_labels() {
    let diagnosis = TriagePolicy::default()
        .evaluate(vec![("RSV".to_string(), 66.0)])
        .unwrap();

    assert_eq!(diagnosis.primary.label, "RSV");
    assert_eq!(diagnosis.primary.display_name, "RSV");
    assert_eq!(diagnosis.primary.severity, Severity::Medium);
    assert!(!diagnosis.primary.description.is_empty());
}

#[test]
fn it_rejects_an_empty_mapping() {
    let res = TriagePolicy::default().evaluate(vec![]);

    assert!(matches!(res, Err(AnalysisError::BackendMalformed(_))));
}

#[test]
fn it_honors_custom_bands_per_condition() {
    let mut policy = TriagePolicy::default();
    policy.define(
        "TB",
        "Tuberculosis",
        "Possible signs of tuberculosis. Further clinical evaluation is advised.",
        SeverityBands {
            medium: 90.0,
            high: 95.0,
        },
    );

    let diagnosis = policy.evaluate(scores()).unwrap();
    assert_eq!(diagnosis.primary.severity, Severity::Low);
}

#[test]
fn it_recommends_checkups_for_normal_results() {
    let mut policy = TriagePolicy::default();
    policy.define(
        "NORMAL",
        "Normal",
        "No abnormality detected.",
        SeverityBands::default(),
    );

    let diagnosis = policy
        .evaluate(vec![("NORMAL".to_string(), 95.0)])
        .unwrap();
    assert_eq!(
        diagnosis.primary.recommendation,
        "Continue regular health checkups."
    );
}

#[test]
fn it_scans_without_reordering() {
    let scores = scores();
    let primary = select_primary(&scores).unwrap();

    assert_eq!(primary, ("TB", 87.0));
    assert!(select_primary(&vec![]).is_none());
}

/// Raw classifier response used across the X-ray adapter and triage tests.
/// Key order matters: the first entry wins ties, so fixtures keep the order
/// the service returned them in.
pub fn scores_fixture() -> &'static str {
    return r#"{"TB": 87, "COVID": 12, "PNEUMONIA": 30}"#;
}

pub fn tied_scores_fixture() -> &'static str {
    return r#"{"TB": 80, "COVID": 80}"#;
}

pub fn assessment_fixture() -> &'static str {
    return r#"{
  "label": "Productive Cough (Pneumonia)",
  "confidence": 87,
  "characteristics": ["Wet/Productive", "Low frequency", "Extended duration"],
  "recommendation": "Consult a healthcare provider for possible bacterial infection treatment."
}"#;
}

pub fn generate_content_fixture() -> &'static str {
    return r#"{
  "candidates": [
    {
      "content": {
        "role": "model",
        "parts": [
          {"text": "**Possible Diseases**\nViral fever.\n"},
          {"text": "**Doctor Advice**\nRest and hydrate."}
        ]
      }
    }
  ]
}"#;
}

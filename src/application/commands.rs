use std::io::Write;
use std::path;

use anyhow::Result;
use tokio::io::AsyncBufReadExt;
use tokio::io::BufReader;
use yansi::Paint;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::AnalysisError;
use crate::domain::models::AudioBackendName;
use crate::domain::models::CaptureName;
use crate::domain::models::CoughAssessment;
use crate::domain::models::ImageDiagnosis;
use crate::domain::models::InputPayload;
use crate::domain::models::LogEntry;
use crate::domain::models::MediaPayload;
use crate::domain::models::Role;
use crate::domain::models::Severity;
use crate::domain::models::SpeechName;
use crate::domain::services::markup;
use crate::domain::services::ConversationController;
use crate::domain::services::InteractionController;
use crate::domain::services::TriagePolicy;
use crate::infrastructure::backends::BackendManager;
use crate::infrastructure::inputs::file::FilePicker;
use crate::infrastructure::inputs::recorder::format_elapsed;
use crate::infrastructure::inputs::recorder::Recorder;
use crate::infrastructure::inputs::text::TextInput;
use crate::infrastructure::inputs::CaptureManager;
use crate::infrastructure::inputs::SpeechManager;

fn paint_severity(severity: Severity) -> String {
    match severity {
        Severity::Low => return Paint::green(severity).to_string(),
        Severity::Medium => return Paint::yellow(severity).to_string(),
        Severity::High => return Paint::red(severity).to_string(),
    }
}

fn print_health_warning(err: &anyhow::Error) {
    println!(
        "{}",
        Paint::yellow(format!("Heads up: {err}. Attempting the analysis anyway."))
    );
}

fn print_diagnosis(diagnosis: &ImageDiagnosis) {
    let primary = &diagnosis.primary;

    println!();
    println!(
        "{}: {} ({:.0}% confidence, {} severity)",
        Paint::new("Diagnosis").bold(),
        primary.display_name,
        primary.confidence,
        paint_severity(primary.severity),
    );
    println!("{}", primary.description);
    println!(
        "{}: {}",
        Paint::new("Recommendation").bold(),
        primary.recommendation
    );

    println!();
    println!("{}", Paint::new("All confidence scores").bold());
    for (label, score) in &diagnosis.all_scores {
        println!("  {label}: {score:.0}%");
    }
}

fn print_assessment(assessment: &CoughAssessment) {
    println!();
    println!(
        "{}: {} ({:.0}% confidence)",
        Paint::new("Classification").bold(),
        assessment.label,
        assessment.confidence,
    );

    println!("{}", Paint::new("Characteristics detected").bold());
    for characteristic in &assessment.characteristics {
        println!("  - {characteristic}");
    }

    println!(
        "{}: {}",
        Paint::new("Recommendation").bold(),
        assessment.recommendation
    );
}

pub async fn xray(file: &path::Path) -> Result<()> {
    let backend = BackendManager::image();
    if let Err(err) = backend.health_check().await {
        print_health_warning(&err);
    }

    let payload = match FilePicker::pick(file).await {
        Some(payload) => payload,
        None => {
            println!(
                "No readable image at {}. Nothing to analyze.",
                file.display()
            );
            return Ok(());
        }
    };

    let mut controller = InteractionController::<ImageDiagnosis>::new();
    controller.set_input(InputPayload::Media(payload));

    println!("Analyzing X-ray image...");

    let policy = TriagePolicy::default();
    let backend_ref = &backend;
    let policy_ref = &policy;
    controller
        .submit(|payload| async move {
            let media = match payload {
                InputPayload::Media(media) => media,
                InputPayload::Text(_) => return Err(AnalysisError::InputMissing),
            };
            let scores = backend_ref.classify(&media).await?;
            return policy_ref.evaluate(scores);
        })
        .await?;

    if let Some(diagnosis) = controller.result() {
        print_diagnosis(diagnosis);
        return Ok(());
    }
    if let Some(error) = controller.error() {
        println!("{}", Paint::red(&error.message));
    }

    return Ok(());
}

async fn analyze_cough(payload: MediaPayload) -> Result<()> {
    let backend_name = match AudioBackendName::parse(Config::get(ConfigKey::CoughBackend)) {
        Some(name) => name,
        None => AudioBackendName::Mock,
    };
    let backend = BackendManager::audio(backend_name)?;
    if let Err(err) = backend.health_check().await {
        print_health_warning(&err);
    }

    let mut controller = InteractionController::<CoughAssessment>::new();
    controller.set_input(InputPayload::Media(payload));

    println!("Analyzing audio patterns...");

    let backend_ref = &backend;
    controller
        .submit(|payload| async move {
            let media = match payload {
                InputPayload::Media(media) => media,
                InputPayload::Text(_) => return Err(AnalysisError::InputMissing),
            };
            return backend_ref.analyze(&media).await;
        })
        .await?;

    if let Some(assessment) = controller.result() {
        print_assessment(assessment);
        return Ok(());
    }
    if let Some(error) = controller.error() {
        println!("{}", Paint::red(&error.message));
    }

    return Ok(());
}

pub async fn cough_file(file: &path::Path) -> Result<()> {
    let payload = match FilePicker::pick(file).await {
        Some(payload) => payload,
        None => {
            println!(
                "No readable audio at {}. Nothing to analyze.",
                file.display()
            );
            return Ok(());
        }
    };

    return analyze_cough(payload).await;
}

pub async fn cough_record() -> Result<()> {
    let capture_name = match CaptureName::parse(Config::get(ConfigKey::Capture)) {
        Some(name) => name,
        None => CaptureName::None,
    };
    let device = CaptureManager::get(capture_name)?;
    let mut recorder = Recorder::new(device);

    if let Err(err) = recorder.start() {
        println!("{}", Paint::red(err.user_message()));
        return Ok(());
    }

    println!("Recording... press Enter to stop.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let _ = lines.next_line().await?;

    let elapsed = recorder.elapsed().unwrap_or_default();
    let payload = match recorder.stop() {
        Some(payload) => payload,
        None => {
            println!("No audio was captured. Nothing to analyze.");
            return Ok(());
        }
    };
    println!("Recorded {} of audio.", format_elapsed(elapsed));

    return analyze_cough(payload).await;
}

fn render_assistant_entries(entries: &[LogEntry]) {
    for entry in entries {
        if entry.role != Role::Assistant {
            continue;
        }

        println!(
            "{}: {}",
            Paint::magenta("DiagnoX").bold(),
            markup::normalize(&entry.text)
        );
    }
}

pub async fn chat(voice: bool) -> Result<()> {
    let backend = BackendManager::assistant();
    if let Err(err) = backend.health_check().await {
        println!(
            "{}",
            Paint::yellow(format!(
                "Heads up: {err}. Replies may fail until this is fixed."
            ))
        );
    }

    let mut conversation = ConversationController::new();
    render_assistant_entries(conversation.log().entries());

    let mut pending: Option<String> = None;
    if voice {
        let speech_name = match SpeechName::parse(Config::get(ConfigKey::Speech)) {
            Some(name) => name,
            None => SpeechName::None,
        };
        match SpeechManager::get(speech_name)?.recognize_once().await {
            Ok(transcript) => {
                pending = TextInput::normalize(&transcript);
            }
            Err(err) => {
                println!("{}", Paint::yellow(err.user_message()));
            }
        }
    }

    let username = Config::get(ConfigKey::Username);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let text = match pending.take() {
            Some(text) => {
                println!("{}: {text}", Paint::blue(&username).bold());
                text
            }
            None => {
                print!("{username}> ");
                std::io::stdout().flush()?;
                match lines.next_line().await? {
                    Some(line) => line,
                    None => break,
                }
            }
        };

        if text.trim() == "/quit" || text.trim() == "/q" {
            break;
        }
        if !conversation.set_input(&text) {
            continue;
        }

        let rendered = conversation.log().len();
        let backend_ref = &backend;
        conversation
            .send(|prompt| async move {
                return backend_ref.advise(prompt).await;
            })
            .await?;

        render_assistant_entries(&conversation.log().entries()[rendered..]);
        if let Some(error) = conversation.error() {
            println!("{}", Paint::red(&error.message));
        }
    }

    return Ok(());
}

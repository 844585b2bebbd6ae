pub mod file;
pub mod none;
pub mod recorder;
pub mod text;

use anyhow::bail;
use anyhow::Result;

use crate::domain::models::CaptureDeviceBox;
use crate::domain::models::CaptureName;
use crate::domain::models::SpeechName;
use crate::domain::models::SpeechRecognizerBox;

pub struct CaptureManager {}

impl CaptureManager {
    pub fn get(name: CaptureName) -> Result<CaptureDeviceBox> {
        if name == CaptureName::None {
            return Ok(Box::<none::NoneCapture>::default());
        }

        bail!(format!("No capture device implemented for {name}"))
    }
}

pub struct SpeechManager {}

impl SpeechManager {
    pub fn get(name: SpeechName) -> Result<SpeechRecognizerBox> {
        if name == SpeechName::None {
            return Ok(Box::<none::NoneSpeech>::default());
        }

        bail!(format!("No speech recognizer implemented for {name}"))
    }
}

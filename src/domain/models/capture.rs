use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

use super::AnalysisError;

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum CaptureName {
    None,
}

impl CaptureName {
    pub fn parse(text: String) -> Option<CaptureName> {
        return CaptureName::iter().find(|e| return e.to_string() == text);
    }
}

/// Live handle on the audio-capture device, exclusively owned between start
/// and stop. Implementations must make `release` idempotent: the recorder
/// releases on drop as well, so an abandoned recording never leaks the
/// device.
pub trait CaptureStream: Send + std::fmt::Debug {
    /// Takes whatever audio has been captured so far.
    fn drain(&mut self) -> Vec<u8>;

    fn release(&mut self);
}

pub trait CaptureDevice: Send + Sync {
    fn name(&self) -> CaptureName;

    fn acquire(&self) -> Result<Box<dyn CaptureStream>, AnalysisError>;
}

pub type CaptureDeviceBox = Box<dyn CaptureDevice>;

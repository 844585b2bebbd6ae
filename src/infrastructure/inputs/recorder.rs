#[cfg(test)]
#[path = "recorder_test.rs"]
mod tests;

use std::time::Duration;
use std::time::Instant;

use crate::domain::models::AnalysisError;
use crate::domain::models::CaptureDeviceBox;
use crate::domain::models::CaptureStream;
use crate::domain::models::MediaPayload;

/// Scoped handle on an in-progress recording. Dropping it releases the
/// capture device, so a session abandoned mid-recording cannot leak the
/// microphone.
struct ActiveRecording {
    stream: Box<dyn CaptureStream>,
    started: Instant,
}

impl Drop for ActiveRecording {
    fn drop(&mut self) {
        self.stream.release();
    }
}

/// Recorder input source: explicit start/stop around an exclusively owned
/// capture stream, with elapsed time tracked for display. There is no
/// maximum-duration cap.
pub struct Recorder {
    device: CaptureDeviceBox,
    active: Option<ActiveRecording>,
}

impl Recorder {
    pub fn new(device: CaptureDeviceBox) -> Recorder {
        return Recorder {
            device,
            active: None,
        };
    }

    /// Acquires the capture device. Starting while already recording is a
    /// no-op.
    pub fn start(&mut self) -> Result<(), AnalysisError> {
        if self.active.is_some() {
            return Ok(());
        }

        let stream = self.device.acquire()?;
        self.active = Some(ActiveRecording {
            stream,
            started: Instant::now(),
        });

        return Ok(());
    }

    pub fn is_recording(&self) -> bool {
        return self.active.is_some();
    }

    pub fn elapsed(&self) -> Option<Duration> {
        return self
            .active
            .as_ref()
            .map(|active| return active.started.elapsed());
    }

    /// Releases the device and finalizes the payload. Stopping before any
    /// audio arrived still releases the device and yields no payload, so an
    /// empty recording is never submitted.
    pub fn stop(&mut self) -> Option<MediaPayload> {
        let mut active = self.active.take()?;
        let data = active.stream.drain();
        drop(active);

        if data.is_empty() {
            tracing::warn!("recording stopped before any audio arrived");
            return None;
        }

        return Some(MediaPayload {
            data,
            file_name: "cough-recording.wav".to_string(),
            mime: "audio/wav".to_string(),
        });
    }
}

/// Formats elapsed time the way the recording indicator shows it, `m:ss`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let mins = total / 60;
    let secs = total % 60;

    return format!("{mins}:{secs:02}");
}

use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use super::format_elapsed;
use super::Recorder;
use crate::domain::models::AnalysisError;
use crate::domain::models::CaptureDevice;
use crate::domain::models::CaptureName;
use crate::domain::models::CaptureStream;
use crate::infrastructure::inputs::none::NoneCapture;

#[derive(Debug)]
struct FakeStream {
    data: Vec<u8>,
    released: Arc<AtomicBool>,
}

impl CaptureStream for FakeStream {
    fn drain(&mut self) -> Vec<u8> {
        return std::mem::take(&mut self.data);
    }

    fn release(&mut self) {
        self.released.store(true, Ordering::SeqCst);
    }
}

struct FakeDevice {
    data: Vec<u8>,
    released: Arc<AtomicBool>,
}

impl FakeDevice {
    fn boxed(data: Vec<u8>) -> (Box<FakeDevice>, Arc<AtomicBool>) {
        let released = Arc::new(AtomicBool::new(false));
        let device = Box::new(FakeDevice {
            data,
            released: released.clone(),
        });

        return (device, released);
    }
}

impl CaptureDevice for FakeDevice {
    fn name(&self) -> CaptureName {
        return CaptureName::None;
    }

    fn acquire(&self) -> Result<Box<dyn CaptureStream>, AnalysisError> {
        return Ok(Box::new(FakeStream {
            data: self.data.clone(),
            released: self.released.clone(),
        }));
    }
}

#[test]
fn it_finalizes_a_payload_and_releases() {
    let (device, released) = FakeDevice::boxed(vec![1, 2, 3]);
    let mut recorder = Recorder::new(device);

    recorder.start().unwrap();
    assert!(recorder.is_recording());
    assert!(recorder.elapsed().is_some());

    let payload = recorder.stop().unwrap();
    assert_eq!(payload.data, vec![1, 2, 3]);
    assert_eq!(payload.file_name, "cough-recording.wav");
    assert_eq!(payload.mime, "audio/wav");
    assert!(!recorder.is_recording());
    assert!(released.load(Ordering::SeqCst));
}

#[test]
fn it_releases_when_no_audio_arrived() {
    let (device, released) = FakeDevice::boxed(vec![]);
    let mut recorder = Recorder::new(device);

    recorder.start().unwrap();
    assert!(recorder.stop().is_none());
    assert!(released.load(Ordering::SeqCst));
}

#[test]
fn it_releases_when_abandoned_mid_recording() {
    let (device, released) = FakeDevice::boxed(vec![1, 2, 3]);
    let mut recorder = Recorder::new(device);

    recorder.start().unwrap();
    drop(recorder);

    assert!(released.load(Ordering::SeqCst));
}

#[test]
fn it_ignores_a_second_start() {
    let (device, _released) = FakeDevice::boxed(vec![1]);
    let mut recorder = Recorder::new(device);

    recorder.start().unwrap();
    recorder.start().unwrap();

    assert!(recorder.is_recording());
}

#[test]
fn it_ignores_stop_without_start() {
    let (device, released) = FakeDevice::boxed(vec![1]);
    let mut recorder = Recorder::new(device);

    assert!(recorder.stop().is_none());
    assert!(!released.load(Ordering::SeqCst));
}

#[test]
fn it_surfaces_unsupported_devices() {
    let mut recorder = Recorder::new(Box::<NoneCapture>::default());
    let err = recorder.start().unwrap_err();

    assert!(matches!(err, AnalysisError::UnsupportedEnvironment(_)));
    assert!(!recorder.is_recording());
}

#[test]
fn it_formats_elapsed_time() {
    assert_eq!(format_elapsed(Duration::from_secs(0)), "0:00");
    assert_eq!(format_elapsed(Duration::from_secs(75)), "1:15");
    assert_eq!(format_elapsed(Duration::from_secs(600)), "10:00");
}

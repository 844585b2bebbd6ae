use std::path;

use super::mime_for;
use super::FilePicker;

#[tokio::test]
async fn it_reads_image_files() {
    let payload = FilePicker::pick(path::Path::new("./test/fixtures/xray.png"))
        .await
        .unwrap();

    assert_eq!(payload.file_name, "xray.png");
    assert_eq!(payload.mime, "image/png");
    assert!(!payload.data.is_empty());
}

#[tokio::test]
async fn it_reads_audio_files() {
    let payload = FilePicker::pick(path::Path::new("./test/fixtures/cough.wav"))
        .await
        .unwrap();

    assert_eq!(payload.mime, "audio/wav");
}

#[tokio::test]
async fn it_ignores_missing_files() {
    let payload = FilePicker::pick(path::Path::new("./test/fixtures/missing.png")).await;

    assert!(payload.is_none());
}

#[tokio::test]
async fn it_ignores_empty_files() {
    let payload = FilePicker::pick(path::Path::new("./test/fixtures/empty.bin")).await;

    assert!(payload.is_none());
}

#[test]
fn it_maps_extensions_to_mimes() {
    assert_eq!(mime_for(path::Path::new("scan.JPG")), "image/jpeg");
    assert_eq!(mime_for(path::Path::new("clip.m4a")), "audio/mp4");
    assert_eq!(
        mime_for(path::Path::new("unknown.xyz")),
        "application/octet-stream"
    );
    assert_eq!(
        mime_for(path::Path::new("no-extension")),
        "application/octet-stream"
    );
}

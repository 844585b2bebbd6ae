#[cfg(test)]
#[path = "file_test.rs"]
mod tests;

use std::path;

use tokio::fs;

use crate::domain::models::MediaPayload;

fn mime_for(file_path: &path::Path) -> String {
    let ext = file_path
        .extension()
        .and_then(|ext| return ext.to_str())
        .unwrap_or("")
        .to_lowercase();

    let mime = match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "wav" => "audio/wav",
        "mp3" => "audio/mpeg",
        "m4a" => "audio/mp4",
        _ => "application/octet-stream",
    };

    return mime.to_string();
}

pub struct FilePicker {}

impl FilePicker {
    /// Reads the chosen file into the payload shape backends expect. A
    /// missing, unreadable, or empty file yields no payload, which leaves
    /// the session untouched.
    pub async fn pick(file_path: &path::Path) -> Option<MediaPayload> {
        let data = match fs::read(file_path).await {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!(error = ?err, path = ?file_path, "unable to read input file");
                return None;
            }
        };

        if data.is_empty() {
            tracing::warn!(path = ?file_path, "ignoring empty input file");
            return None;
        }

        let file_name = file_path
            .file_name()
            .and_then(|name| return name.to_str())
            .unwrap_or("upload.bin")
            .to_string();

        return Some(MediaPayload {
            mime: mime_for(file_path),
            file_name,
            data,
        });
    }
}

/// Raw bytes produced by the file picker or the recorder, tagged with the
/// metadata multipart uploads need.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaPayload {
    pub data: Vec<u8>,
    pub file_name: String,
    pub mime: String,
}

/// Input handed to a session by one of the input source adapters. Owned
/// exclusively by the session until a submission hands it to a backend
/// adapter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputPayload {
    Media(MediaPayload),
    Text(String),
}

impl InputPayload {
    pub fn is_empty(&self) -> bool {
        match self {
            InputPayload::Media(media) => return media.data.is_empty(),
            InputPayload::Text(text) => return text.trim().is_empty(),
        }
    }
}

#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;

use chrono::Local;
use chrono::SecondsFormat;
use serde_derive::Deserialize;
use serde_derive::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub role: Role,
    pub text: String,
    pub sent_at: String,
}

/// Ordered, append-only record of a chat session. Grows monotonically for
/// the lifetime of the session and is never persisted across runs.
#[derive(Default)]
pub struct ConversationLog {
    entries: Vec<LogEntry>,
}

impl ConversationLog {
    pub fn new() -> ConversationLog {
        return ConversationLog::default();
    }

    pub fn append(&mut self, role: Role, text: &str) {
        self.entries.push(LogEntry {
            role,
            text: text.to_string().replace('\t', "  "),
            sent_at: Local::now().to_rfc3339_opts(SecondsFormat::Secs, false),
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        return &self.entries;
    }

    pub fn len(&self) -> usize {
        return self.entries.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.entries.is_empty();
    }
}

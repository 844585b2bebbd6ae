#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;

use std::future::Future;

use super::InteractionController;
use crate::domain::models::AnalysisError;
use crate::domain::models::ConversationLog;
use crate::domain::models::InputPayload;
use crate::domain::models::Role;
use crate::domain::models::SessionError;
use crate::domain::models::SessionStatus;
use crate::domain::models::Submission;
use crate::domain::models::SubmitRejected;
use crate::domain::models::SymptomPrompt;

const GREETING: &str = "Hello! I'm the DiagnoX health assistant. I can help you with health questions, interpret symptoms, and provide medical guidance. How can I assist you today?";

/// Chat specialization of the interaction controller. A successful turn is
/// appended to the conversation log as a user/assistant pair instead of
/// replacing a single result field; a failed turn leaves the log untouched
/// and keeps the input so the user can retry.
pub struct ConversationController {
    controller: InteractionController<String>,
    log: ConversationLog,
}

impl Default for ConversationController {
    fn default() -> ConversationController {
        return ConversationController::new();
    }
}

impl ConversationController {
    pub fn new() -> ConversationController {
        let mut log = ConversationLog::new();
        log.append(Role::Assistant, GREETING);

        return ConversationController {
            controller: InteractionController::new(),
            log,
        };
    }

    /// Trimmed text becomes the session input; whitespace-only text is
    /// treated as absent and ignored.
    pub fn set_input(&mut self, text: &str) -> bool {
        return self
            .controller
            .set_input(InputPayload::Text(text.trim().to_string()));
    }

    /// Sends the armed input through the conversational backend, wrapped in
    /// the fixed symptom-prompt template.
    pub async fn send<F, Fut>(&mut self, call: F) -> Result<(), SubmitRejected>
    where
        F: FnOnce(SymptomPrompt) -> Fut,
        Fut: Future<Output = Result<String, AnalysisError>>,
    {
        let Submission { ticket, payload } = self.controller.begin_submit()?;
        let text = match payload {
            InputPayload::Text(text) => text,
            InputPayload::Media(_) => {
                self.controller
                    .complete_failure(ticket, AnalysisError::InputMissing);
                return Ok(());
            }
        };

        match call(SymptomPrompt::new(&text)).await {
            Ok(reply) => {
                if self.controller.complete_success(ticket, reply.clone()) {
                    self.log.append(Role::User, &text);
                    self.log.append(Role::Assistant, &reply);
                }
            }
            Err(err) => {
                self.controller.complete_failure(ticket, err);
            }
        }

        return Ok(());
    }

    pub fn status(&self) -> SessionStatus {
        return self.controller.status();
    }

    pub fn error(&self) -> Option<&SessionError> {
        return self.controller.error();
    }

    pub fn log(&self) -> &ConversationLog {
        return &self.log;
    }

    pub fn reset(&mut self) {
        self.controller.reset();
    }
}

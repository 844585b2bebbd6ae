#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;

use std::future::Future;

use crate::domain::models::AnalysisError;
use crate::domain::models::InputPayload;
use crate::domain::models::InteractionSession;
use crate::domain::models::SessionError;
use crate::domain::models::SessionStatus;
use crate::domain::models::Submission;
use crate::domain::models::SubmitRejected;
use crate::domain::models::SubmitTicket;

/// Owns one [`InteractionSession`] and mediates between the input source,
/// the analysis backend and the renderer. One analysis is in flight at a
/// time; overlapping submissions are rejected, never queued.
///
/// Transitions: `Idle -> InputReady -> Submitting -> Succeeded | Failed`,
/// with `reset` as an edge from any state back to `Idle`, and new input as
/// a direct edge from `Succeeded`/`Failed` to `InputReady`.
pub struct InteractionController<T> {
    session: InteractionSession<T>,
}

impl<T> Default for InteractionController<T> {
    fn default() -> InteractionController<T> {
        return InteractionController::new();
    }
}

impl<T> InteractionController<T> {
    pub fn new() -> InteractionController<T> {
        return InteractionController {
            session: InteractionSession::default(),
        };
    }

    pub fn status(&self) -> SessionStatus {
        return self.session.status;
    }

    pub fn input(&self) -> Option<&InputPayload> {
        return self.session.input();
    }

    pub fn result(&self) -> Option<&T> {
        return self.session.result();
    }

    pub fn error(&self) -> Option<&SessionError> {
        return self.session.error();
    }

    /// Stores raw input and arms the session. An empty payload is ignored
    /// without a transition. Any prior result or error is cleared, and a
    /// finished session moves straight to `InputReady` with no intermediate
    /// `Idle` render. Late input while a submission is in flight is
    /// dropped; the trigger is expected to be disabled then.
    pub fn set_input(&mut self, payload: InputPayload) -> bool {
        if payload.is_empty() {
            tracing::debug!("ignoring empty input payload");
            return false;
        }
        if self.session.status == SessionStatus::Submitting {
            tracing::debug!("ignoring input while a submission is in flight");
            return false;
        }

        self.session.input = Some(payload);
        self.session.result = None;
        self.session.error = None;
        self.session.status = SessionStatus::InputReady;
        return true;
    }

    /// Returns the session to `Idle` from any state. The generation bump
    /// makes any in-flight completion miss its ticket check, so a stale
    /// response cannot clobber newer session state.
    pub fn reset(&mut self) {
        self.session.status = SessionStatus::Idle;
        self.session.input = None;
        self.session.result = None;
        self.session.error = None;
        self.session.generation += 1;
    }

    /// Accepts a submission when input is ready. The backend adapter is
    /// invoked exactly once per accepted submission, and completion goes
    /// through [`InteractionController::complete_success`] or
    /// [`InteractionController::complete_failure`] with the returned
    /// ticket.
    pub fn begin_submit(&mut self) -> Result<Submission, SubmitRejected> {
        if self.session.status != SessionStatus::InputReady {
            return Err(SubmitRejected {
                status: self.session.status,
            });
        }
        let payload = match self.session.input.clone() {
            Some(payload) => payload,
            None => {
                return Err(SubmitRejected {
                    status: self.session.status,
                })
            }
        };

        self.session.generation += 1;
        self.session.status = SessionStatus::Submitting;
        self.session.result = None;
        self.session.error = None;

        return Ok(Submission {
            ticket: SubmitTicket {
                generation: self.session.generation,
            },
            payload,
        });
    }

    /// Applies a successful backend response. Returns false when the ticket
    /// is stale and the response was discarded.
    pub fn complete_success(&mut self, ticket: SubmitTicket, result: T) -> bool {
        if !self.ticket_is_current(ticket) {
            tracing::debug!("discarding stale analysis response");
            return false;
        }

        self.session.status = SessionStatus::Succeeded;
        self.session.result = Some(result);
        self.session.error = None;
        return true;
    }

    /// Applies a failed backend response. The input payload is left
    /// untouched so the same input can be resubmitted. Returns false when
    /// the ticket is stale and the failure was discarded.
    pub fn complete_failure(&mut self, ticket: SubmitTicket, cause: AnalysisError) -> bool {
        if !self.ticket_is_current(ticket) {
            tracing::debug!(cause = %cause, "discarding stale analysis failure");
            return false;
        }

        tracing::error!(cause = %cause, "analysis failed");
        self.session.status = SessionStatus::Failed;
        self.session.error = Some(SessionError::new(cause));
        self.session.result = None;
        return true;
    }

    /// Drives one full submission against a backend call. The call receives
    /// its own copy of the payload; the session keeps the original.
    pub async fn submit<F, Fut>(&mut self, call: F) -> Result<(), SubmitRejected>
    where
        F: FnOnce(InputPayload) -> Fut,
        Fut: Future<Output = Result<T, AnalysisError>>,
    {
        let Submission { ticket, payload } = self.begin_submit()?;

        match call(payload).await {
            Ok(result) => {
                self.complete_success(ticket, result);
            }
            Err(err) => {
                self.complete_failure(ticket, err);
            }
        }

        return Ok(());
    }

    fn ticket_is_current(&self, ticket: SubmitTicket) -> bool {
        return self.session.status == SessionStatus::Submitting
            && ticket.generation == self.session.generation;
    }
}

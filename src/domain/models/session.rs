use thiserror::Error;

use super::AnalysisError;
use super::InputPayload;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Idle,
    InputReady,
    Submitting,
    Succeeded,
    Failed,
}

/// User-facing failure stored on a session, with the normalized cause kept
/// for diagnostics.
#[derive(Debug)]
pub struct SessionError {
    pub message: String,
    pub cause: AnalysisError,
}

impl SessionError {
    pub fn new(cause: AnalysisError) -> SessionError {
        return SessionError {
            message: cause.user_message(),
            cause,
        };
    }
}

/// Handle for one accepted submission. A completion whose ticket comes from
/// a generation that has since been reset is discarded instead of
/// clobbering newer session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitTicket {
    pub(crate) generation: u64,
}

#[derive(Debug, PartialEq, Eq, Error)]
#[error("submission is only valid while input is ready")]
pub struct SubmitRejected {
    pub status: SessionStatus,
}

/// One accepted submission: the ticket to complete it with, and the payload
/// to hand to the backend adapter. The session keeps its own copy so the
/// same input can be resubmitted after a failure.
#[derive(Debug)]
pub struct Submission {
    pub ticket: SubmitTicket,
    pub payload: InputPayload,
}

/// Per-attempt state for one upload/record -> analyze -> result cycle.
/// `result` and `error` are mutually exclusive, and both are unset while
/// the status is `Idle` or `Submitting`. All transitions go through the
/// interaction controller.
pub struct InteractionSession<T> {
    pub(crate) status: SessionStatus,
    pub(crate) input: Option<InputPayload>,
    pub(crate) result: Option<T>,
    pub(crate) error: Option<SessionError>,
    pub(crate) generation: u64,
}

impl<T> Default for InteractionSession<T> {
    fn default() -> InteractionSession<T> {
        return InteractionSession {
            status: SessionStatus::Idle,
            input: None,
            result: None,
            error: None,
            generation: 0,
        };
    }
}

impl<T> InteractionSession<T> {
    pub fn status(&self) -> SessionStatus {
        return self.status;
    }

    pub fn input(&self) -> Option<&InputPayload> {
        return self.input.as_ref();
    }

    pub fn result(&self) -> Option<&T> {
        return self.result.as_ref();
    }

    pub fn error(&self) -> Option<&SessionError> {
        return self.error.as_ref();
    }
}

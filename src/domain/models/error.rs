use thiserror::Error;

/// Failures normalized at the adapter boundary. Adapters never panic and
/// never retry on their own; every variant carries enough detail for the
/// debug log while [`AnalysisError::user_message`] keeps the rendered text
/// short and non-technical.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// No usable input was provided. Treated as a silent no-op and never
    /// surfaced to the user.
    #[error("no input provided")]
    InputMissing,

    #[error("failed to reach the analysis service: {0}")]
    BackendUnreachable(String),

    #[error("the analysis service rejected the request with status {status}: {message}")]
    BackendRejected { status: u16, message: String },

    #[error("the analysis service returned an unexpected response: {0}")]
    BackendMalformed(String),

    #[error("{0} is not available in this environment")]
    UnsupportedEnvironment(String),
}

impl AnalysisError {
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::InputMissing => {
                return "Nothing to analyze yet. Choose an input first.".to_string();
            }
            AnalysisError::BackendUnreachable(_) => {
                return "The analysis service could not be reached. Check your connection and try again.".to_string();
            }
            AnalysisError::BackendRejected { message, .. } => {
                // Raw backend text is the fallback when the server said
                // anything at all.
                if message.is_empty() {
                    return "The analysis service could not process this input. Try again with a different file.".to_string();
                }
                return message.to_string();
            }
            AnalysisError::BackendMalformed(_) => {
                return "The analysis service sent back something unexpected. Please try again later.".to_string();
            }
            AnalysisError::UnsupportedEnvironment(capability) => {
                return format!("{capability} is not supported on this system.");
            }
        }
    }
}

impl From<reqwest::Error> for AnalysisError {
    fn from(err: reqwest::Error) -> AnalysisError {
        if err.is_decode() {
            return AnalysisError::BackendMalformed(err.to_string());
        }
        return AnalysisError::BackendUnreachable(err.to_string());
    }
}

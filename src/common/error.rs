// src/common/error.rs

use thiserror::Error;

// Every failure the client can hit, from the wire up to the forms.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Invalid username or password")]
    InvalidCredentials,

    // 401 from the backend, or no token stored at all.
    #[error("Session expired or missing")]
    Unauthorized,

    #[error("The backend did not accept the order")]
    OrderRejected,

    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    // Connection failures, timeouts and body decoding done by reqwest.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Local storage error: {0}")]
    Storage(#[from] std::io::Error),
}

/// What a view does with an error. There are only three options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorOutcome {
    /// Log it and keep showing the current (possibly stale) state.
    Logged,
    /// The token is gone; go back to the login screen.
    RedirectToLogin,
    /// Block the user with a message; nothing changed.
    Alert(String),
}

impl AppError {
    pub fn outcome(&self) -> ErrorOutcome {
        match self {
            AppError::Unauthorized => ErrorOutcome::RedirectToLogin,
            AppError::ValidationError(errors) => {
                let mut messages: Vec<String> = errors
                    .field_errors()
                    .values()
                    .flat_map(|field_errors| field_errors.iter())
                    .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                    .collect();
                messages.sort();
                messages.dedup();
                if messages.is_empty() {
                    ErrorOutcome::Alert("Please fill in all fields.".to_string())
                } else {
                    ErrorOutcome::Alert(messages.join(" "))
                }
            }
            AppError::InvalidCredentials => ErrorOutcome::Alert(self.to_string()),
            AppError::OrderRejected => {
                ErrorOutcome::Alert("Something went wrong, please try again.".to_string())
            }
            _ => ErrorOutcome::Logged,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Unauthorized)
    }

    /// Logs the error and hands back its outcome, so views can do both in one go.
    pub fn report(&self, context: &str) -> ErrorOutcome {
        let outcome = self.outcome();
        match &outcome {
            ErrorOutcome::Logged => tracing::error!("{}: {}", context, self),
            ErrorOutcome::RedirectToLogin => tracing::warn!("{}: {}", context, self),
            ErrorOutcome::Alert(message) => tracing::info!("{}: {}", context, message),
        }
        outcome
    }
}

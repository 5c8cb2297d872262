use thiserror::Error;

use crate::signup::messages::{ACCOUNT_CREATION_FALLBACK, TEAM_ID_CHECK_FAILED};

/// Local form validation failures. `Display` is the banner text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please enter a Team ID")]
    MissingTeamId,

    #[error("Team ID must be at least {min} characters long")]
    TeamIdTooShort { min: usize },

    #[error("Password must be at least {min} characters long")]
    PasswordTooShort { min: usize },

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("You must agree to the terms and conditions")]
    TermsNotAccepted,
}

/// Failures reported by the remote service facade
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("Network error: {message}")]
    Transport { message: String },

    #[error("Request rejected: {code}")]
    Rejected {
        code: String,
        message: Option<String>,
    },

    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },
}

impl BackendError {
    pub fn transport(message: impl Into<String>) -> Self {
        BackendError::Transport {
            message: message.into(),
        }
    }

    /// Human-readable message safe to show in the banner, if the service supplied one
    pub fn user_message(&self) -> Option<&str> {
        match self {
            BackendError::Rejected {
                message: Some(message),
                ..
            } if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, BackendError::Transport { .. })
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(error: reqwest::Error) -> Self {
        BackendError::Transport {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(error: serde_json::Error) -> Self {
        BackendError::InvalidResponse {
            message: error.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Team ID availability check failed: {0}")]
    AvailabilityCheck(#[source] BackendError),

    #[error("Account creation failed: {0}")]
    AccountCreation(#[source] BackendError),
}

pub type SignupResult<T> = Result<T, SignupError>;

impl SignupError {
    /// The single message shown in the error banner
    pub fn banner_message(&self) -> String {
        match self {
            SignupError::Validation(error) => error.to_string(),
            SignupError::AvailabilityCheck(_) => TEAM_ID_CHECK_FAILED.to_string(),
            SignupError::AccountCreation(error) => error
                .user_message()
                .unwrap_or(ACCOUNT_CREATION_FALLBACK)
                .to_string(),
        }
    }

    /// Whether the user can simply try the same operation again
    pub fn is_retryable(&self) -> bool {
        match self {
            SignupError::Validation(_) => false,
            SignupError::AvailabilityCheck(_) => true,
            SignupError::AccountCreation(error) => error.is_retryable(),
        }
    }
}

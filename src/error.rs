use thiserror::Error;

/// Errors raised while selecting an action.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PolicyError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("State has no entry in the Q-table")]
    KeyNotFound,

    #[error("Action-value row has {found} entries, expected {expected}")]
    ShapeMismatch { expected: usize, found: usize },

    #[error("Q-table lock poisoned by a panicked writer")]
    Poisoned,
}

impl PolicyError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PolicyError>;

//! Error type for loading and booking calendar slots.

use thiserror::Error;

/// Failures surfaced by the calendar pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// The availability endpoint answered with a non-success status
    #[error("Risposta non valida dal server ({status} {reason})")]
    Network { status: u16, reason: String },

    /// The request could not be sent or its body could not be read
    #[error("Request failed: {0}")]
    Transport(String),

    /// Neither the raw nor the entity-decoded text parsed as JSON
    #[error("Formato dati non valido: impossibile effettuare il parse.")]
    PayloadFormat,

    /// The browser refused to open the login popup
    #[error("Popup blocked")]
    PopupBlocked,
}

impl CalendarError {
    pub fn network(status: u16, reason: impl Into<String>) -> Self {
        CalendarError::Network {
            status,
            reason: reason.into(),
        }
    }

    pub fn transport(message: impl std::fmt::Display) -> Self {
        CalendarError::Transport(message.to_string())
    }
}

pub type CalendarResult<T> = Result<T, CalendarError>;

//! Error taxonomy shared by every enumeration client.
//!
//! * [`AcquisitionError`]: the uplink could not produce a message root.
//! * [`StateError`]: an operation was invoked in a session state that does not allow it.
//! * [`ClientError`]: what `initialize` can fail with, the union of both.

use thiserror::Error;

use crate::target::Target;

/// Raised by an uplink while acquiring a message root.
///
/// The clients propagate it unchanged and never retry on their own.
#[derive(Debug, Error)]
pub enum AcquisitionError {
    #[error("uplink to {target} refused the session: {reason}")]
    Refused { target: Target, reason: String },

    #[error("uplink to {target} gave up after {attempts} attempts")]
    Exhausted { target: Target, attempts: u32 },
}

/// Raised when a client operation does not fit the current session state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("{target} session is not initialized")]
    NotInitialized { target: Target },

    #[error("{target} session is already initialized")]
    AlreadyInitialized { target: Target },

    #[error("{target} session failed to initialize: {reason}")]
    SessionFailed { target: Target, reason: String },
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Acquisition(#[from] AcquisitionError),

    #[error(transparent)]
    State(#[from] StateError),
}

impl ClientError {
    /// True when the client was misused, as opposed to the uplink failing.
    pub fn is_state_error(&self) -> bool {
        matches!(self, Self::State(_))
    }
}

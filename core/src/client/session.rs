use breach_common::error::StateError;
use breach_common::schema::MessageRoot;

/// Observable state of a client session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    Initialized,
    Failed,
}

/// Session state together with whatever it owns.
///
/// The acquired root lives only in `Initialized`, so it can never be read from
/// a session that did not acquire it.
#[derive(Debug)]
pub(crate) enum Session<R> {
    Uninitialized,
    Initialized(R),
    Failed { reason: String },
}

impl<R: MessageRoot> Session<R> {
    pub(crate) fn state(&self) -> SessionState {
        match self {
            Session::Uninitialized => SessionState::Uninitialized,
            Session::Initialized(_) => SessionState::Initialized,
            Session::Failed { .. } => SessionState::Failed,
        }
    }

    /// Rejects a second acquisition once a root is held. Failed sessions may retry.
    pub(crate) fn ensure_acquirable(&self) -> Result<(), StateError> {
        match self {
            Session::Initialized(_) => Err(StateError::AlreadyInitialized { target: R::TARGET }),
            Session::Uninitialized | Session::Failed { .. } => Ok(()),
        }
    }

    pub(crate) fn root(&self) -> Result<&R, StateError> {
        match self {
            Session::Initialized(root) => Ok(root),
            Session::Uninitialized => Err(StateError::NotInitialized { target: R::TARGET }),
            Session::Failed { reason } => Err(StateError::SessionFailed {
                target: R::TARGET,
                reason: reason.clone(),
            }),
        }
    }
}

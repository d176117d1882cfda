//! The central **abstraction** for enumeration clients.
//!
//! [`IceBreaker`] implements the Initialize / process list / memory mapping lifecycle
//! once, against the [`MessageRoot`] contract. Every target reuses it unchanged:
//! either directly, by naming the (Root, Entry) pair, or through one of the
//! [`dedicated`] clients that pin the pair down at the type level.
//!
//! Only `initialize` suspends. The two retrievals are pure projections over the
//! root held by the session.

use std::fmt;
use std::marker::PhantomData;

use async_trait::async_trait;
use breach_common::config::Config;
use breach_common::error::{ClientError, StateError};
use breach_common::schema::{MessageRoot, ProcessEntry};
use breach_common::target::Target;
use breach_common::{success, warn};
use breach_schemas::Synthesize;
use tracing::{Instrument, debug, info_span};

use crate::uplink::{ReplayUplink, SimulatedUplink, Uplink};

mod dedicated;
mod session;

pub use dedicated::{ArasakaIceBreaker, BiotechnicaIceBreaker, MilitechIceBreaker};
pub use session::SessionState;

use session::Session;

/// Entry type produced by an [`Enumerator`].
pub type EntryOf<C> = <<C as Enumerator>::Root as MessageRoot>::Entry;

/// The surface shared by every enumeration client, generic or dedicated.
#[async_trait]
pub trait Enumerator: Send {
    type Root: MessageRoot;

    fn target(&self) -> Target {
        <Self::Root as MessageRoot>::TARGET
    }

    fn state(&self) -> SessionState;

    /// Acquires the target's message root and stores it in the session.
    async fn initialize(&mut self) -> Result<(), ClientError>;

    /// Returns the process entries of the stored root.
    fn process_list(&self) -> Result<Vec<EntryOf<Self>>, StateError>;

    /// Returns a fresh traversal over the memory mapping of the stored root.
    fn memory_mapping(&self) -> Result<impl Iterator<Item = String> + '_, StateError>;
}

/// Generic enumeration client over a (Root, Entry) pair.
///
/// The pair must agree (`R::Entry == E`), so a mismatched instantiation does not compile:
///
/// ```compile_fail
/// use breach_core::IceBreaker;
/// use breach_schemas::{ArasakaMessageRoot, BiotechnicaProcessList};
///
/// let _ = IceBreaker::<ArasakaMessageRoot, BiotechnicaProcessList>::replay(
///     ArasakaMessageRoot::new("ars"),
/// );
/// ```
pub struct IceBreaker<R, E>
where
    R: MessageRoot<Entry = E>,
    E: ProcessEntry,
{
    uplink: Box<dyn Uplink<R>>,
    session: Session<R>,
    _entry: PhantomData<fn() -> E>,
}

impl<R, E> IceBreaker<R, E>
where
    R: MessageRoot<Entry = E>,
    E: ProcessEntry,
{
    pub fn new<U>(uplink: U) -> Self
    where
        U: Uplink<R> + 'static,
    {
        Self {
            uplink: Box::new(uplink),
            session: Session::Uninitialized,
            _entry: PhantomData,
        }
    }

    /// Client whose uplink hands back `root` on every acquisition.
    pub fn replay(root: R) -> Self {
        Self::new(ReplayUplink::new(root))
    }

    pub fn simulated(cfg: &Config) -> Self
    where
        R: Synthesize,
    {
        Self::new(SimulatedUplink::from(cfg))
    }

    pub fn target(&self) -> Target {
        R::TARGET
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    /// Acquires the root through the uplink and moves the session to `Initialized`.
    ///
    /// A second call on an initialized client is rejected and the held root is kept.
    /// A failed acquisition leaves the session `Failed`, from which `initialize`
    /// may be called again. Acquisition errors are propagated unchanged.
    ///
    /// If the returned future is dropped before completion the session is left as it was.
    pub async fn initialize(&mut self) -> Result<(), ClientError> {
        let target = R::TARGET;
        self.session.ensure_acquirable()?;

        let span = info_span!("initialize", network = %target);
        match self.uplink.acquire(target).instrument(span).await {
            Ok(root) => {
                success!("{target} session established");
                self.session = Session::Initialized(root);
                Ok(())
            }
            Err(err) => {
                warn!("{target} session failed: {err}");
                self.session = Session::Failed {
                    reason: err.to_string(),
                };
                Err(err.into())
            }
        }
    }

    pub fn process_list(&self) -> Result<Vec<E>, StateError> {
        let processes = self.session.root()?.process_list();
        debug!(network = R::TARGET.name(), count = processes.len(), "derived process list");
        Ok(processes)
    }

    pub fn memory_mapping(&self) -> Result<impl Iterator<Item = String> + '_, StateError> {
        Ok(self.session.root()?.memory_mapping())
    }
}

impl<R, E> Default for IceBreaker<R, E>
where
    R: MessageRoot<Entry = E> + Synthesize,
    E: ProcessEntry,
{
    fn default() -> Self {
        Self::simulated(&Config::default())
    }
}

impl<R, E> fmt::Debug for IceBreaker<R, E>
where
    R: MessageRoot<Entry = E>,
    E: ProcessEntry,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IceBreaker")
            .field("target", &R::TARGET)
            .field("state", &self.session.state())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<R, E> Enumerator for IceBreaker<R, E>
where
    R: MessageRoot<Entry = E>,
    E: ProcessEntry,
{
    type Root = R;

    fn state(&self) -> SessionState {
        IceBreaker::state(self)
    }

    async fn initialize(&mut self) -> Result<(), ClientError> {
        IceBreaker::initialize(self).await
    }

    fn process_list(&self) -> Result<Vec<E>, StateError> {
        IceBreaker::process_list(self)
    }

    fn memory_mapping(&self) -> Result<impl Iterator<Item = String> + '_, StateError> {
        IceBreaker::memory_mapping(self)
    }
}

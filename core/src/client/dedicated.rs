//! Dedicated clients: one per target, each bound to its schema.
//!
//! These are not generic. Holding an [`ArasakaIceBreaker`] means holding a client
//! that can only ever see Arasaka payloads, which is what callers restricted to a
//! single network get handed. Each one is a newtype over the matching
//! [`IceBreaker`] instantiation and carries no logic of its own.
//!
//! ```
//! use breach_core::BiotechnicaIceBreaker;
//! use breach_schemas::BiotechnicaMessageRoot;
//!
//! let client = BiotechnicaIceBreaker::replay(BiotechnicaMessageRoot::new("lab-7"));
//! assert!(client.process_list().is_err());
//! ```
//!
//! Another target's root is a type error:
//!
//! ```compile_fail
//! use breach_core::BiotechnicaIceBreaker;
//! use breach_schemas::ArasakaMessageRoot;
//!
//! let _ = BiotechnicaIceBreaker::replay(ArasakaMessageRoot::new("ars"));
//! ```

use async_trait::async_trait;
use breach_common::config::Config;
use breach_common::error::{ClientError, StateError};
use breach_common::target::Target;
use breach_schemas::{
    ArasakaMessageProcessList, ArasakaMessageRoot, BiotechnicaMessageRoot, BiotechnicaProcessList,
    MilitechIceProcessList, MilitechMessageRoot,
};

use super::{Enumerator, IceBreaker, SessionState};
use crate::uplink::Uplink;

macro_rules! dedicated_client {
    ($(#[$meta:meta])* $name:ident => $root:ty, $entry:ty) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name(IceBreaker<$root, $entry>);

        impl $name {
            pub fn new<U>(uplink: U) -> Self
            where
                U: Uplink<$root> + 'static,
            {
                Self(IceBreaker::new(uplink))
            }

            pub fn replay(root: $root) -> Self {
                Self(IceBreaker::replay(root))
            }

            pub fn simulated(cfg: &Config) -> Self {
                Self(IceBreaker::simulated(cfg))
            }

            pub fn target(&self) -> Target {
                self.0.target()
            }

            pub fn state(&self) -> SessionState {
                self.0.state()
            }

            pub async fn initialize(&mut self) -> Result<(), ClientError> {
                self.0.initialize().await
            }

            pub fn process_list(&self) -> Result<Vec<$entry>, StateError> {
                self.0.process_list()
            }

            pub fn memory_mapping(
                &self,
            ) -> Result<impl Iterator<Item = String> + '_, StateError> {
                self.0.memory_mapping()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self(IceBreaker::default())
            }
        }

        #[async_trait]
        impl Enumerator for $name {
            type Root = $root;

            fn state(&self) -> SessionState {
                self.0.state()
            }

            async fn initialize(&mut self) -> Result<(), ClientError> {
                self.0.initialize().await
            }

            fn process_list(&self) -> Result<Vec<$entry>, StateError> {
                self.0.process_list()
            }

            fn memory_mapping(
                &self,
            ) -> Result<impl Iterator<Item = String> + '_, StateError> {
                self.0.memory_mapping()
            }
        }
    };
}

dedicated_client! {
    /// Enumeration client restricted to Arasaka resources.
    ArasakaIceBreaker => ArasakaMessageRoot, ArasakaMessageProcessList
}

dedicated_client! {
    /// Enumeration client restricted to Militech resources.
    MilitechIceBreaker => MilitechMessageRoot, MilitechIceProcessList
}

dedicated_client! {
    /// Enumeration client restricted to Biotechnica resources.
    BiotechnicaIceBreaker => BiotechnicaMessageRoot, BiotechnicaProcessList
}

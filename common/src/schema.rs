//! # Schema Capability Contract
//!
//! What any (Root, Entry) pair must support for the generic client to operate on it.
//!
//! Both projections are pure: they read the already acquired root and never
//! perform I/O. Acquisition happens once, during `initialize`, and produces the root.

use std::fmt::Debug;

use crate::target::Target;

/// One record of a target's process list.
///
/// The fields are the target's own business; the pipeline only needs enough
/// to summarise an entry without knowing which schema it came from.
pub trait ProcessEntry: Clone + Debug + PartialEq + Send + Sync + 'static {
    fn pid(&self) -> u32;
    fn image_name(&self) -> &str;
}

/// The top-level payload acquired from one target.
pub trait MessageRoot: Clone + Debug + PartialEq + Send + Sync + 'static {
    type Entry: ProcessEntry;

    /// The network this schema belongs to.
    const TARGET: Target;

    /// Projects the root onto its process entries, in schema order.
    fn process_list(&self) -> Vec<Self::Entry>;

    /// Describes the memory regions held by the root, one line per region.
    ///
    /// The iterator borrows the root, so every call starts a fresh traversal
    /// and yields the same lines in the same order.
    fn memory_mapping(&self) -> impl Iterator<Item = String> + '_;
}

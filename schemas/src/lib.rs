//! # Target Schemas
//!
//! One module per corporate network. Each holds the network's message root and
//! process-list entry types and nothing else: the lifecycle lives in `breach-core`
//! and is shared by all of them.
//!
//! The schemas are structurally unrelated on purpose. The only thing they have
//! in common is the [`MessageRoot`](breach_common::schema::MessageRoot) contract.

use rand::Rng;

pub mod arasaka;
pub mod biotechnica;
pub mod militech;

pub use arasaka::{ArasakaMessageProcessList, ArasakaMessageRoot};
pub use biotechnica::{BiotechnicaMessageRoot, BiotechnicaProcessList};
pub use militech::{MilitechIceProcessList, MilitechMessageRoot};

/// Builds a plausible root out of a random source.
///
/// Used by the simulated uplink. The same RNG state always yields the same root.
pub trait Synthesize: Sized {
    fn synthesize<G: Rng>(rng: &mut G) -> Self;
}

fn pick<'a, G: Rng>(rng: &mut G, pool: &[&'a str]) -> &'a str {
    pool[rng.random_range(0..pool.len())]
}

/// Rounds `addr` down to a page boundary.
fn page_align(addr: u64) -> u64 {
    addr & !0xfff
}

//! # Breach Core
//!
//! One enumeration pipeline, many payload schemas.
//!
//! * [`client`]: the generic [`IceBreaker`](client::IceBreaker), its session state and
//!   the dedicated per-target clients built on top of it.
//! * [`uplink`]: the acquisition port `initialize` goes through, plus the simulated
//!   and replay adapters.
//! * [`campaign`]: runs every target through both client flavours and compares them.

pub mod campaign;
pub mod client;
pub mod uplink;

pub use client::{
    ArasakaIceBreaker, BiotechnicaIceBreaker, Enumerator, IceBreaker, MilitechIceBreaker,
    SessionState,
};
pub use uplink::{ReplayUplink, SimulatedUplink, Uplink};

//! # Acquisition Port
//!
//! The boundary `initialize` crosses to obtain a target's message root.
//! How the session is negotiated is the uplink's business; clients only see a
//! root or an [`AcquisitionError`], and never retry on their own.
//!
//! * [`simulated::SimulatedUplink`]: synthesises roots from a seeded RNG, with
//!   configurable latency, refusals and retries.
//! * [`replay::ReplayUplink`]: hands back a fixed root.

use async_trait::async_trait;
use breach_common::error::AcquisitionError;
use breach_common::schema::MessageRoot;
use breach_common::target::Target;

mod replay;
mod simulated;

pub use replay::ReplayUplink;
pub use simulated::SimulatedUplink;

#[async_trait]
pub trait Uplink<R: MessageRoot>: Send + Sync {
    async fn acquire(&self, target: Target) -> Result<R, AcquisitionError>;
}

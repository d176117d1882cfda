use async_trait::async_trait;
use breach_common::error::AcquisitionError;
use breach_common::schema::MessageRoot;
use breach_common::target::Target;
use tracing::debug;

use super::Uplink;

/// Uplink that answers every acquisition with a clone of the same root.
#[derive(Debug, Clone)]
pub struct ReplayUplink<R> {
    root: R,
}

impl<R: MessageRoot> ReplayUplink<R> {
    pub fn new(root: R) -> Self {
        Self { root }
    }
}

#[async_trait]
impl<R: MessageRoot> Uplink<R> for ReplayUplink<R> {
    async fn acquire(&self, target: Target) -> Result<R, AcquisitionError> {
        debug!("replaying captured {target} root");
        Ok(self.root.clone())
    }
}

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use breach_common::config::{Config, DEFAULT_LATENCY, DEFAULT_RETRIES};
use breach_common::error::AcquisitionError;
use breach_common::schema::MessageRoot;
use breach_common::target::Target;
use breach_schemas::Synthesize;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::Uplink;

/// Mixed into the seed of the refusal stream so it never mirrors the payload stream.
const REFUSAL_SALT: u64 = 0x5eed_0f1c_e000_0000;
/// Spreads consecutive session numbers across the refusal seed space.
const SESSION_STRIDE: u64 = 0x9e37_79b9_7f4a_7c15;

/// Uplink backed by synthesised payloads.
///
/// Roots are built from an RNG seeded by `(seed, target)`, so two uplinks with the
/// same seed produce equal roots for the same target no matter how many attempts
/// were refused along the way. Refusals are drawn per session: every call to
/// `acquire` advances a session counter, so a refused session may be followed by
/// an accepted one.
#[derive(Debug)]
pub struct SimulatedUplink {
    seed: u64,
    latency: Duration,
    failure_rate: f64,
    retries: u32,
    blocked: BTreeSet<Target>,
    outage: u64,
    sessions: AtomicU64,
}

impl SimulatedUplink {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            latency: DEFAULT_LATENCY,
            failure_rate: 0.0,
            retries: DEFAULT_RETRIES,
            blocked: BTreeSet::new(),
            outage: 0,
            sessions: AtomicU64::new(0),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Probability that a single attempt is refused. Clamped to `[0.0, 1.0]`.
    pub fn with_failure_rate(mut self, failure_rate: f64) -> Self {
        self.failure_rate = if failure_rate.is_nan() {
            0.0
        } else {
            failure_rate.clamp(0.0, 1.0)
        };
        self
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Refuses every session with `target` outright, without retrying.
    pub fn with_blocked(mut self, target: Target) -> Self {
        self.blocked.insert(target);
        self
    }

    /// Refuses the first `sessions` calls to `acquire`, whatever the target.
    pub fn with_outage(mut self, sessions: u64) -> Self {
        self.outage = sessions;
        self
    }

    fn payload_rng(&self, target: Target) -> StdRng {
        StdRng::seed_from_u64(self.seed ^ target.salt())
    }

    fn refusal_rng(&self, target: Target, session: u64) -> StdRng {
        let mixed = session.wrapping_mul(SESSION_STRIDE);
        StdRng::seed_from_u64(self.seed ^ target.salt() ^ REFUSAL_SALT ^ mixed)
    }
}

impl From<&Config> for SimulatedUplink {
    fn from(cfg: &Config) -> Self {
        SimulatedUplink::new(cfg.seed)
            .with_latency(cfg.latency)
            .with_failure_rate(cfg.failure_rate)
            .with_retries(cfg.retries)
    }
}

#[async_trait]
impl<R> Uplink<R> for SimulatedUplink
where
    R: MessageRoot + Synthesize,
{
    async fn acquire(&self, target: Target) -> Result<R, AcquisitionError> {
        if self.blocked.contains(&target) {
            return Err(AcquisitionError::Refused {
                target,
                reason: String::from("target is blocked on this uplink"),
            });
        }

        let session = self.sessions.fetch_add(1, Ordering::Relaxed);
        if session < self.outage {
            return Err(AcquisitionError::Refused {
                target,
                reason: format!("uplink is down (session {})", session + 1),
            });
        }

        let attempts = self.retries.saturating_add(1);
        let mut refusals = self.refusal_rng(target, session);

        for attempt in 1..=attempts {
            tokio::time::sleep(self.latency).await;
            if refusals.random_bool(self.failure_rate) {
                debug!("{target} refused attempt {attempt}/{attempts}");
                continue;
            }
            debug!("{target} accepted attempt {attempt}/{attempts}");
            return Ok(R::synthesize(&mut self.payload_rng(target)));
        }

        Err(AcquisitionError::Exhausted { target, attempts })
    }
}

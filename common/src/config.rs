use std::time::Duration;

pub const DEFAULT_SEED: u64 = 2077;
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(150);
pub const DEFAULT_RETRIES: u32 = 2;

#[derive(Debug, Clone)]
pub struct Config {
    /// Seed for the simulated uplink.
    ///
    /// Two uplinks built from the same seed hand out equal roots for the same target.
    pub seed: u64,
    /// Time spent negotiating each acquisition attempt.
    pub latency: Duration,
    /// Probability in `[0.0, 1.0]` that a single acquisition attempt is refused.
    pub failure_rate: f64,
    /// Extra attempts the uplink makes after a refusal.
    pub retries: u32,
    /// 0 prints everything, 1 prints summaries only, 2 prints nothing but warnings.
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            latency: DEFAULT_LATENCY,
            failure_rate: 0.0,
            retries: DEFAULT_RETRIES,
            quiet: 0,
        }
    }
}

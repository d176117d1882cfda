use std::time::Duration;

use breach_common::config::Config;
use breach_common::error::StateError;
use breach_core::client::EntryOf;
use breach_core::{Enumerator, SessionState};
use breach_schemas::Synthesize;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub fn quick_config(seed: u64) -> Config {
    Config {
        seed,
        latency: Duration::ZERO,
        ..Config::default()
    }
}

pub fn synthesized<R: Synthesize>(seed: u64) -> R {
    R::synthesize(&mut StdRng::seed_from_u64(seed))
}

/// Everything a client returns once initialized.
pub async fn enumerate<C: Enumerator>(client: &mut C) -> (Vec<EntryOf<C>>, Vec<String>) {
    client.initialize().await.expect("initialize failed");
    let processes = client.process_list().expect("process list");
    let mapping = client.memory_mapping().expect("memory mapping").collect();
    (processes, mapping)
}

pub fn assert_not_initialized<C: Enumerator>(client: &C) {
    let expected = StateError::NotInitialized {
        target: client.target(),
    };
    assert_eq!(client.state(), SessionState::Uninitialized);
    assert_eq!(client.process_list().err(), Some(expected.clone()));
    assert_eq!(client.memory_mapping().err(), Some(expected));
}

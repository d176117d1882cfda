use breach_common::error::{ClientError, StateError};
use breach_common::schema::MessageRoot;
use breach_common::target::Target;
use breach_core::{
    ArasakaIceBreaker, BiotechnicaIceBreaker, IceBreaker, MilitechIceBreaker, SessionState,
    SimulatedUplink,
};
use breach_schemas::arasaka::ArasakaMessageProcessList;
use breach_schemas::biotechnica::BiotechnicaCulture;
use breach_schemas::{
    ArasakaMessageRoot, BiotechnicaMessageRoot, BiotechnicaProcessList, MilitechIceProcessList,
    MilitechMessageRoot,
};

use super::util::{self, assert_not_initialized, quick_config};

#[test]
fn every_client_refuses_retrieval_before_initialize() {
    let cfg = quick_config(1);

    assert_not_initialized(&ArasakaIceBreaker::simulated(&cfg));
    assert_not_initialized(&MilitechIceBreaker::simulated(&cfg));
    assert_not_initialized(&BiotechnicaIceBreaker::simulated(&cfg));
    assert_not_initialized(&IceBreaker::<ArasakaMessageRoot, ArasakaMessageProcessList>::simulated(&cfg));
    assert_not_initialized(&IceBreaker::<MilitechMessageRoot, MilitechIceProcessList>::simulated(&cfg));
    assert_not_initialized(&IceBreaker::<BiotechnicaMessageRoot, BiotechnicaProcessList>::simulated(&cfg));
}

#[tokio::test]
async fn biotechnica_dedicated_client_returns_entries_in_order() {
    let root = BiotechnicaMessageRoot::new("night-city-02").with_culture(
        BiotechnicaCulture::new("cn-2077")
            .with_process(BiotechnicaProcessList::new(301, "proc-a"))
            .with_process(BiotechnicaProcessList::new(302, "proc-b").with_parent(301)),
    );
    let mut client = BiotechnicaIceBreaker::replay(root);

    client.initialize().await.unwrap();
    let processes = client.process_list().unwrap();

    let names: Vec<&str> = processes.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["proc-a", "proc-b"]);
}

#[tokio::test]
async fn memory_mapping_restarts_on_every_call() {
    let mut client = MilitechIceBreaker::simulated(&quick_config(5));
    client.initialize().await.unwrap();

    let first: Vec<String> = client.memory_mapping().unwrap().collect();
    let second: Vec<String> = client.memory_mapping().unwrap().collect();

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[tokio::test]
async fn partially_consumed_mapping_does_not_affect_the_next_one() {
    let mut client = ArasakaIceBreaker::simulated(&quick_config(6));
    client.initialize().await.unwrap();

    let head = client.memory_mapping().unwrap().next();
    let full: Vec<String> = client.memory_mapping().unwrap().collect();

    assert_eq!(head.as_ref(), full.first());
}

#[tokio::test]
async fn acquisition_errors_propagate_unchanged() {
    let uplink = SimulatedUplink::from(&quick_config(2))
        .with_failure_rate(1.0)
        .with_retries(3);
    let mut client = BiotechnicaIceBreaker::new(uplink);

    match client.initialize().await {
        Err(ClientError::Acquisition(err)) => {
            assert_eq!(
                err.to_string(),
                "uplink to Biotechnica gave up after 4 attempts"
            );
        }
        other => panic!("expected an acquisition error, got {other:?}"),
    }
    assert_eq!(client.state(), SessionState::Failed);
}

#[tokio::test]
async fn failed_client_may_retry_initialize() {
    // The retry goes back to the uplink instead of being rejected as a state error.
    let uplink = SimulatedUplink::from(&quick_config(2)).with_blocked(Target::Militech);
    let mut client = MilitechIceBreaker::new(uplink);

    assert!(client.initialize().await.is_err());
    let second = client.initialize().await.unwrap_err();

    assert!(matches!(second, ClientError::Acquisition(_)));
    assert_eq!(client.state(), SessionState::Failed);
}

#[tokio::test]
async fn failed_client_recovers_once_the_uplink_accepts() {
    let uplink = SimulatedUplink::from(&quick_config(0)).with_outage(1);
    let mut client = MilitechIceBreaker::new(uplink);

    assert!(client.initialize().await.is_err());
    assert_eq!(client.state(), SessionState::Failed);

    client.initialize().await.unwrap();

    assert_eq!(client.state(), SessionState::Initialized);
    let mut steady = MilitechIceBreaker::simulated(&quick_config(0));
    steady.initialize().await.unwrap();
    assert_eq!(client.process_list().unwrap(), steady.process_list().unwrap());
}

#[tokio::test]
async fn flaky_uplink_eventually_initializes() {
    let uplink = SimulatedUplink::from(&quick_config(0))
        .with_failure_rate(0.5)
        .with_retries(0);
    let mut client = MilitechIceBreaker::new(uplink);

    let mut refused = 0;
    while client.initialize().await.is_err() {
        refused += 1;
        assert!(refused < 64, "uplink refused {refused} sessions in a row");
    }

    assert_eq!(client.state(), SessionState::Initialized);
}

#[tokio::test]
async fn second_initialize_is_rejected() {
    let mut client = IceBreaker::<MilitechMessageRoot, MilitechIceProcessList>::simulated(&quick_config(8));
    client.initialize().await.unwrap();

    let err = client.initialize().await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::State(StateError::AlreadyInitialized {
            target: Target::Militech
        })
    ));
    assert_eq!(client.state(), SessionState::Initialized);
}

#[test]
fn derivations_are_pure() {
    let root: ArasakaMessageRoot = util::synthesized(77);
    let twin = root.clone();

    assert_eq!(root.process_list(), twin.process_list());
    assert_eq!(root.process_list(), root.process_list());
    assert!(root.memory_mapping().eq(twin.memory_mapping()));
}

#[tokio::test]
async fn distinct_clients_run_concurrently() {
    let cfg = quick_config(13);
    let mut arasaka = ArasakaIceBreaker::simulated(&cfg);
    let mut militech = IceBreaker::<MilitechMessageRoot, MilitechIceProcessList>::simulated(&cfg);
    let mut biotechnica = BiotechnicaIceBreaker::simulated(&cfg);

    let (a, m, b) = tokio::join!(
        arasaka.initialize(),
        militech.initialize(),
        biotechnica.initialize()
    );

    assert!(a.is_ok() && m.is_ok() && b.is_ok());
    assert_eq!(arasaka.state(), SessionState::Initialized);
    assert_eq!(militech.state(), SessionState::Initialized);
    assert_eq!(biotechnica.state(), SessionState::Initialized);
}

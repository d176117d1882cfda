use breach_common::schema::MessageRoot;
use breach_common::target::Target;
use breach_core::campaign::{self, ClientKind};
use breach_core::{ArasakaIceBreaker, BiotechnicaIceBreaker, Enumerator, IceBreaker, MilitechIceBreaker};
use breach_schemas::militech::Clearance;
use breach_schemas::{
    ArasakaMessageProcessList, ArasakaMessageRoot, BiotechnicaMessageRoot, BiotechnicaProcessList,
    MilitechIceProcessList, MilitechMessageRoot,
};

use super::util::{self, enumerate, quick_config};

async fn assert_equivalent<D, R>(mut dedicated: D, mut generic: IceBreaker<R, R::Entry>)
where
    D: Enumerator<Root = R>,
    R: MessageRoot,
{
    let from_dedicated = enumerate(&mut dedicated).await;
    let from_generic = enumerate(&mut generic).await;
    assert_eq!(from_dedicated, from_generic);
}

#[tokio::test]
async fn replayed_roots_give_identical_results() {
    let arasaka: ArasakaMessageRoot = util::synthesized(1);
    let militech: MilitechMessageRoot = util::synthesized(2);
    let biotechnica: BiotechnicaMessageRoot = util::synthesized(3);

    assert_equivalent(
        ArasakaIceBreaker::replay(arasaka.clone()),
        IceBreaker::<ArasakaMessageRoot, ArasakaMessageProcessList>::replay(arasaka),
    )
    .await;
    assert_equivalent(
        MilitechIceBreaker::replay(militech.clone()),
        IceBreaker::<MilitechMessageRoot, MilitechIceProcessList>::replay(militech),
    )
    .await;
    assert_equivalent(
        BiotechnicaIceBreaker::replay(biotechnica.clone()),
        IceBreaker::<BiotechnicaMessageRoot, BiotechnicaProcessList>::replay(biotechnica),
    )
    .await;
}

#[tokio::test]
async fn simulated_uplinks_with_one_seed_give_identical_results() {
    let cfg = quick_config(2077);

    assert_equivalent(
        ArasakaIceBreaker::simulated(&cfg),
        IceBreaker::<ArasakaMessageRoot, ArasakaMessageProcessList>::simulated(&cfg),
    )
    .await;
    assert_equivalent(
        MilitechIceBreaker::simulated(&cfg),
        IceBreaker::<MilitechMessageRoot, MilitechIceProcessList>::simulated(&cfg),
    )
    .await;
    assert_equivalent(
        BiotechnicaIceBreaker::simulated(&cfg),
        IceBreaker::<BiotechnicaMessageRoot, BiotechnicaProcessList>::simulated(&cfg),
    )
    .await;
}

#[tokio::test]
async fn generic_militech_client_matches_dedicated_one() {
    let root = MilitechMessageRoot::new(5)
        .with_process(MilitechIceProcessList::new(4, "crusher-fw"))
        .with_process(MilitechIceProcessList::new(8, "sentinel-iff").with_clearance(Clearance::Black));

    let mut generic = IceBreaker::<MilitechMessageRoot, MilitechIceProcessList>::replay(root.clone());
    let mut dedicated = MilitechIceBreaker::replay(root.clone());
    generic.initialize().await.unwrap();
    dedicated.initialize().await.unwrap();

    assert_eq!(generic.process_list().unwrap(), dedicated.process_list().unwrap());
    assert_eq!(generic.process_list().unwrap(), root.process_list());
}

#[tokio::test]
async fn campaign_pairs_agree_for_every_target() {
    let campaign = campaign::run_campaign(&quick_config(404)).await;

    assert!(campaign.is_success());
    assert!(campaign.divergent.is_empty());
    for target in Target::ALL {
        let dedicated = campaign.report(target, ClientKind::Dedicated).unwrap();
        let generic = campaign.report(target, ClientKind::Generic).unwrap();
        assert_eq!(dedicated.processes, generic.processes);
        assert_eq!(dedicated.memory_mapping, generic.memory_mapping);
    }
}

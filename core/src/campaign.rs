//! # Enumeration Campaign
//!
//! Implements the "run every scenario" use case.
//!
//! Each target is enumerated twice, once through its dedicated client and once
//! through the generic client instantiated with the same schema. All six scenarios
//! run concurrently on independent client instances. Once they finish, the two
//! reports of each target are compared: both flavours share the same pipeline, so
//! any difference is a failure.

use std::fmt;

use breach_common::config::Config;
use breach_common::error::ClientError;
use breach_common::schema::{MessageRoot, ProcessEntry};
use breach_common::target::Target;
use breach_common::{error, info};
use breach_schemas::{
    ArasakaMessageProcessList, ArasakaMessageRoot, BiotechnicaMessageRoot, BiotechnicaProcessList,
    MilitechIceProcessList, MilitechMessageRoot,
};
use tokio::task::JoinSet;

use crate::client::{
    ArasakaIceBreaker, BiotechnicaIceBreaker, Enumerator, IceBreaker, MilitechIceBreaker,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClientKind {
    Dedicated,
    Generic,
}

impl fmt::Display for ClientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientKind::Dedicated => f.write_str("dedicated"),
            ClientKind::Generic => f.write_str("generic"),
        }
    }
}

/// Schema-independent view of one process entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSummary {
    pub pid: u32,
    pub image: String,
}

impl ProcessSummary {
    pub fn of<E: ProcessEntry>(entry: &E) -> Self {
        Self {
            pid: entry.pid(),
            image: entry.image_name().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioReport {
    pub target: Target,
    pub kind: ClientKind,
    pub processes: Vec<ProcessSummary>,
    /// Every field of every process entry, one `Debug` rendering per entry.
    pub records: Vec<String>,
    pub memory_mapping: Vec<String>,
}

impl ScenarioReport {
    /// True when both reports saw the same process entries and the same mapping.
    pub fn agrees_with(&self, other: &ScenarioReport) -> bool {
        self.target == other.target
            && self.records == other.records
            && self.memory_mapping == other.memory_mapping
    }
}

#[derive(Debug)]
pub struct ScenarioOutcome {
    pub target: Target,
    pub kind: ClientKind,
    pub result: Result<ScenarioReport, ClientError>,
}

#[derive(Debug, Default)]
pub struct Campaign {
    /// Outcomes sorted by target, then client kind.
    pub outcomes: Vec<ScenarioOutcome>,
    /// Targets whose dedicated and generic reports disagree.
    pub divergent: Vec<Target>,
    /// Scenario tasks that panicked and produced no outcome.
    pub lost: usize,
}

impl Campaign {
    pub fn failures(&self) -> usize {
        let failed = self.outcomes.iter().filter(|o| o.result.is_err()).count();
        failed + self.divergent.len() + self.lost
    }

    pub fn is_success(&self) -> bool {
        self.failures() == 0
    }

    pub fn report(&self, target: Target, kind: ClientKind) -> Option<&ScenarioReport> {
        self.outcomes
            .iter()
            .find(|o| o.target == target && o.kind == kind)
            .and_then(|o| o.result.as_ref().ok())
    }
}

/// Drives one client through Initialize, process list and memory mapping, in that order.
pub async fn run_scenario<C: Enumerator>(mut client: C, kind: ClientKind) -> ScenarioOutcome {
    let target = client.target();
    let result = enumerate(&mut client, kind).await;

    match &result {
        Ok(report) => info!(
            "{target} ({kind}): {} processes, {} mapped regions",
            report.processes.len(),
            report.memory_mapping.len()
        ),
        Err(err) => error!("{target} ({kind}) failed: {err}"),
    }

    ScenarioOutcome {
        target,
        kind,
        result,
    }
}

async fn enumerate<C: Enumerator>(
    client: &mut C,
    kind: ClientKind,
) -> Result<ScenarioReport, ClientError> {
    client.initialize().await?;
    let entries = client.process_list()?;
    let memory_mapping = client.memory_mapping()?.collect();

    Ok(ScenarioReport {
        target: client.target(),
        kind,
        processes: entries.iter().map(ProcessSummary::of).collect(),
        records: entries.iter().map(|entry| format!("{entry:?}")).collect(),
        memory_mapping,
    })
}

/// Runs every target through its dedicated and its generic client.
pub async fn run_campaign(cfg: &Config) -> Campaign {
    let mut set: JoinSet<ScenarioOutcome> = JoinSet::new();

    spawn_pair(
        &mut set,
        ArasakaIceBreaker::simulated(cfg),
        IceBreaker::<ArasakaMessageRoot, ArasakaMessageProcessList>::simulated(cfg),
    );
    spawn_pair(
        &mut set,
        MilitechIceBreaker::simulated(cfg),
        IceBreaker::<MilitechMessageRoot, MilitechIceProcessList>::simulated(cfg),
    );
    spawn_pair(
        &mut set,
        BiotechnicaIceBreaker::simulated(cfg),
        IceBreaker::<BiotechnicaMessageRoot, BiotechnicaProcessList>::simulated(cfg),
    );

    let mut campaign = Campaign::default();
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok(outcome) => campaign.outcomes.push(outcome),
            Err(e) => {
                error!("Scenario task aborted: {e}");
                campaign.lost += 1;
            }
        }
    }

    campaign.outcomes.sort_by_key(|o| (o.target, o.kind));
    campaign.divergent = find_divergent(&campaign);
    campaign
}

fn spawn_pair<D, R>(
    set: &mut JoinSet<ScenarioOutcome>,
    dedicated: D,
    generic: IceBreaker<R, R::Entry>,
) where
    D: Enumerator<Root = R> + 'static,
    R: MessageRoot,
{
    set.spawn(run_scenario(dedicated, ClientKind::Dedicated));
    set.spawn(run_scenario(generic, ClientKind::Generic));
}

fn find_divergent(campaign: &Campaign) -> Vec<Target> {
    Target::ALL
        .into_iter()
        .filter(|&target| {
            match (
                campaign.report(target, ClientKind::Dedicated),
                campaign.report(target, ClientKind::Generic),
            ) {
                (Some(dedicated), Some(generic)) => !dedicated.agrees_with(generic),
                _ => false,
            }
        })
        .inspect(|target| error!("{target}: dedicated and generic clients disagree"))
        .collect()
}

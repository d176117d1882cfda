use breach_core::campaign::{ScenarioOutcome, ScenarioReport};
use colored::*;

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

/// How many entries of each list are shown before eliding the rest.
const PREVIEW_LEN: usize = 4;

pub fn outcome_title(outcome: &ScenarioOutcome) -> String {
    format!("{} · {} client", outcome.target, outcome.kind)
}

pub fn outcome_to_details(outcome: &ScenarioOutcome) -> Vec<Detail> {
    match &outcome.result {
        Ok(report) => report_to_details(report),
        Err(err) => {
            let session = if err.is_state_error() {
                "rejected"
            } else {
                "failed"
            };
            vec![
                (String::from("Session"), session.red().bold()),
                (String::from("Error"), err.to_string().red()),
            ]
        }
    }
}

fn report_to_details(report: &ScenarioReport) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![(String::from("Session"), "initialized".green().bold())];

    details.push((
        String::from("Procs"),
        format!("{}", report.processes.len()).bold(),
    ));
    for process in report.processes.iter().take(PREVIEW_LEN) {
        details.push((
            format!("{}", process.pid),
            process.image.color(colors::PRIMARY),
        ));
    }
    if let Some(rest) = elided(report.processes.len()) {
        details.push((String::from("…"), rest));
    }

    details.push((
        String::from("Mapped"),
        format!("{}", report.memory_mapping.len()).bold(),
    ));
    for line in report.memory_mapping.iter().take(PREVIEW_LEN) {
        details.push((String::from("region"), line.color(colors::MAPPING)));
    }
    if let Some(rest) = elided(report.memory_mapping.len()) {
        details.push((String::from("…"), rest));
    }

    details
}

fn elided(len: usize) -> Option<ColoredString> {
    (len > PREVIEW_LEN).then(|| format!("{} more", len - PREVIEW_LEN).dimmed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use breach_common::error::{AcquisitionError, ClientError, StateError};
    use breach_common::target::Target;
    use breach_core::campaign::{ClientKind, ProcessSummary};

    fn report(processes: usize) -> ScenarioReport {
        ScenarioReport {
            target: Target::Arasaka,
            kind: ClientKind::Dedicated,
            processes: (0..processes)
                .map(|pid| ProcessSummary {
                    pid: pid as u32,
                    image: format!("proc-{pid}"),
                })
                .collect(),
            records: Vec::new(),
            memory_mapping: vec![String::from("0x1000-0x2000 r-x")],
        }
    }

    #[test]
    fn long_lists_are_elided() {
        let details = report_to_details(&report(6));
        let keys: Vec<&str> = details.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            ["Session", "Procs", "0", "1", "2", "3", "…", "Mapped", "region"]
        );
    }

    #[test]
    fn short_lists_are_shown_whole() {
        let details = report_to_details(&report(2));
        assert!(details.iter().all(|(k, _)| k != "…"));
    }

    fn failed(err: ClientError) -> Vec<Detail> {
        colored::control::set_override(false);
        outcome_to_details(&ScenarioOutcome {
            target: Target::Militech,
            kind: ClientKind::Generic,
            result: Err(err),
        })
    }

    #[test]
    fn uplink_failures_and_misuse_are_told_apart() {
        let refused = failed(
            AcquisitionError::Refused {
                target: Target::Militech,
                reason: String::from("down"),
            }
            .into(),
        );
        let misuse = failed(
            StateError::NotInitialized {
                target: Target::Militech,
            }
            .into(),
        );

        assert_eq!(refused[0].1.to_string(), "failed");
        assert_eq!(misuse[0].1.to_string(), "rejected");
    }
}

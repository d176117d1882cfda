use std::time::{Duration, Instant};

use breach_common::config::Config;
use breach_common::{success, warn};
use breach_core::campaign::{self, Campaign};
use colored::*;
use tracing::{Instrument, info_span};

use crate::mprint;
use crate::terminal::{format, print};

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let span = info_span!("campaign", seed = cfg.seed);

    let start_time: Instant = Instant::now();
    let campaign: Campaign = campaign::run_campaign(cfg).instrument(span).await;

    campaign_ends(&campaign, start_time.elapsed(), cfg);

    if !campaign.is_success() {
        anyhow::bail!(
            "{} of {} scenarios failed",
            campaign.failures(),
            campaign.outcomes.len() + campaign.lost
        );
    }
    Ok(())
}

fn campaign_ends(campaign: &Campaign, total_time: Duration, cfg: &Config) {
    print::header("Enumeration Results", cfg.quiet);
    if cfg.quiet == 0 {
        print_outcomes(campaign);
    }
    print_summary(campaign, total_time);
}

fn print_outcomes(campaign: &Campaign) {
    for (idx, outcome) in campaign.outcomes.iter().enumerate() {
        print::entry_head(idx, &format::outcome_title(outcome));
        print::detail_tree(&format::outcome_to_details(outcome));
        if idx + 1 != campaign.outcomes.len() {
            mprint!();
        }
    }
}

fn print_summary(campaign: &Campaign, total_time: Duration) {
    let total = campaign.outcomes.len() + campaign.lost;
    let passed = campaign.outcomes.iter().filter(|o| o.result.is_ok()).count();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();

    mprint!();
    if campaign.is_success() {
        let passed = format!("{passed}/{total} scenarios").bold().green();
        success!("Campaign complete: {passed} succeeded in {total_time}");
    } else {
        let passed = format!("{passed}/{total} scenarios").bold().red();
        let diverged = campaign.divergent.len();
        warn!("Campaign complete: {passed} succeeded, {diverged} targets diverged, in {total_time}");
    }
}

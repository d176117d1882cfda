use std::fmt;

use breach_common::log::SUCCESS_TARGET;
use colored::*;
use indicatif::ProgressStyle;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::terminal::print::PRINT_TARGET;

const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// Installs the global subscriber: env filter, spinners for open spans and [`BreachFormatter`].
pub fn init_logging(quiet: u8) {
    let default_level = if quiet > 1 { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let indicatif_layer = IndicatifLayer::new().with_progress_style(spinner_style());
    let fmt_layer = tracing_subscriber::fmt::layer()
        .event_format(BreachFormatter)
        .with_writer(indicatif_layer.get_stderr_writer());

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(indicatif_layer)
        .init();
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} {span_name} {span_fields} {wide_msg}")
        .map(|style| style.tick_strings(TICKS))
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

pub struct BreachFormatter;

impl<S, N> FormatEvent<S, N> for BreachFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();

        if meta.target() == PRINT_TARGET {
            let mut raw = RawMessage::default();
            event.record(&mut raw);
            if let Some(msg) = raw.0 {
                return writeln!(writer, "{msg}");
            }
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) =
            match *meta.level() {
                Level::INFO if meta.target() == SUCCESS_TARGET => ("[+]", |s| s.green().bold()),
                Level::TRACE => ("[ ]", |s| s.dimmed()),
                Level::DEBUG => ("[?]", |s| s.blue()),
                Level::INFO => ("[*]", |s| s.cyan().bold()),
                Level::WARN => ("[!]", |s| s.yellow().bold()),
                Level::ERROR => ("[-]", |s| s.red().bold()),
            };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Pulls the `raw_msg` field out of a print event.
#[derive(Default)]
struct RawMessage(Option<String>);

impl Visit for RawMessage {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "raw_msg" {
            self.0 = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "raw_msg" && self.0.is_none() {
            self.0 = Some(format!("{value:?}"));
        }
    }
}

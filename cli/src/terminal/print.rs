use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;
use crate::terminal::format::Detail;

pub const TOTAL_WIDTH: usize = 64;
pub const PRINT_TARGET: &str = "breach::print";
/// Column at which detail values start, counted in terminal cells.
const KEY_WIDTH: usize = 8;

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn banner(q_level: u8) {
    if q_level > 0 {
        return;
    }
    print(&ruled(&format!("⟦ BREACH v{} ⟧ ", env!("CARGO_PKG_VERSION")), "═"));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }
    print(&ruled(&format!("⟦ {} ⟧", msg.to_uppercase()), "─"));
}

/// Centres `title` on a rule of `fill` spanning the full width.
fn ruled(title: &str, fill: &str) -> String {
    let spare = TOTAL_WIDTH.saturating_sub(title.width());
    let left = spare / 2;
    format!(
        "{}{}{}",
        fill.repeat(left).bright_black(),
        title.bright_green().bold(),
        fill.repeat(spare - left).bright_black()
    )
}

pub fn entry_head(idx: usize, title: &str) {
    let index = format!("[{}]", idx.to_string().color(colors::ACCENT));
    print(&format!(
        "{} {}",
        index.color(colors::SEPARATOR),
        title.color(colors::PRIMARY)
    ));
}

pub fn detail_tree(details: &[Detail]) {
    let Some(last) = details.len().checked_sub(1) else {
        return;
    };
    for (i, (key, value)) in details.iter().enumerate() {
        let branch = if i == last { "└─" } else { "├─" };
        let dots = ".".repeat(key_padding(key));
        print(&format!(
            " {} {}{}{} {}",
            branch.bright_black(),
            key.color(colors::TEXT_DEFAULT),
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}

/// Dots needed after `key` so every value lines up, whatever the key's glyphs.
fn key_padding(key: &str) -> usize {
    KEY_WIDTH.saturating_sub(key.width())
}

use std::fmt::Display;

use colored::*;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

pub fn header(msg: &str) {
    let formatted = format!("⟦ {} ⟧", msg);
    let msg_width = UnicodeWidthStr::width(formatted.as_str());

    let dash_count = TOTAL_WIDTH.saturating_sub(msg_width);
    let left = dash_count / 2;
    let right = dash_count - left;

    let line = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    println!("{line}");
}

pub fn fat_separator() {
    println!("{}", "═".repeat(TOTAL_WIDTH).bright_black());
}

pub fn tree_head(idx: usize, name: &str) {
    println!(
        "{} {}",
        format!("[{idx}]").bright_black(),
        name.bright_cyan()
    );
}

pub fn tree_leaf<V: Display>(key: &str, value: V) {
    println!("    {} {}: {}", "└".bright_black(), key.bright_black(), value);
}

pub fn no_results() {
    println!("{}", "No subdomains discovered for this target.".dimmed());
}

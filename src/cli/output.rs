//! Output formatting and progress bars for CLI

use anyhow::{Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};

use crate::{search::Score, tictactoe::Board};

/// Create a progress bar for verification runs
pub fn create_verify_progress(total_positions: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total_positions);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} positions ({msg})")
            .map_err(|e| anyhow!("invalid progress bar template: {e}"))?
            .progress_chars("=>-"),
    );
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Render a board on one line as "XX. / OO. / ..."
pub fn format_board(board: &Board) -> String {
    let encoded = board.encode();
    [&encoded[0..3], &encoded[3..6], &encoded[6..9]].join(" / ")
}

/// Describe a score from the maximizing player's perspective
pub fn describe_score(score: Score) -> &'static str {
    match score {
        s if s > 0 => "maximizer wins",
        0 => "draw",
        _ => "minimizer wins",
    }
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print statistics table
pub fn print_stats_table(stats: &[(&str, String)]) {
    for (key, value) in stats {
        print_kv(key, value);
    }
}

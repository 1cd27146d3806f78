use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::entry::types::CatchRecord;
use crate::scoring::LeaderboardEntry;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format the scored result of a single catch, as printed by `creel add`.
pub fn format_catch_result(record: &CatchRecord, use_colors: bool) -> String {
    if use_colors {
        format!(
            "{} | {} | {}\" | base {} + bonus {} = {}",
            record.angler.bold(),
            record.species.cyan(),
            record.length.display(),
            record.base,
            record.bonus,
            record.total.bold()
        )
    } else {
        format!(
            "{} | {} | {}\" | base {} + bonus {} = {}",
            record.angler,
            record.species,
            record.length.display(),
            record.base,
            record.bonus,
            record.total
        )
    }
}

/// Format catch records as a table with columns:
/// Index, Angler, Species, Length, Base, Bonus, Total.
/// Index is 1-based and is the position used by `creel remove` when the
/// table is filtered to one angler.
pub fn format_entry_table(records: &[&CatchRecord], use_colors: bool) -> String {
    if records.is_empty() {
        return "No catches logged.".to_string();
    }

    let term_width = get_terminal_width();
    let species_width = match term_width {
        // Index(3) + angler(10) + length(8) + three point columns(18) + separators
        Some(w) if w > 60 => w - 50,
        Some(_) => 12,
        None => 24,
    };

    records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let index_str = format!("{:>2}.", idx + 1);
            let species = truncate_name(&record.species, species_width);
            let line = format!(
                "{} {:<10} {:<width$} {:>6}\" {:>5} {:>5} {:>5}",
                index_str,
                record.angler,
                species,
                record.length.display(),
                record.base,
                record.bonus,
                record.total,
                width = species_width
            );
            if use_colors {
                format!(
                    "{} {:<10} {:<width$} {:>6}\" {:>5} {:>5} {:>5}",
                    index_str.dimmed(),
                    record.angler.bold(),
                    species.cyan(),
                    record.length.display(),
                    record.base,
                    record.bonus,
                    record.total.to_string().bold(),
                    width = species_width
                )
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the leaderboard with columns: Rank, Angler, Score.
/// Entries arrive already ranked (descending score, roster-order ties).
pub fn format_leaderboard(entries: &[LeaderboardEntry], use_colors: bool) -> String {
    if entries.is_empty() {
        return "No anglers on the roster.".to_string();
    }

    entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let rank_str = format!("{:>2}.", idx + 1);
            if use_colors {
                format!(
                    "{} {:<12} {:>6}",
                    rank_str.dimmed(),
                    entry.angler.bold(),
                    entry.score.to_string().bold()
                )
            } else {
                format!("{} {:<12} {:>6}", rank_str, entry.angler, entry.score)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the leaderboard as tab-separated values for scripting.
/// Columns: rank, angler, score (no headers, no colors).
pub fn format_leaderboard_tsv(entries: &[LeaderboardEntry]) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| format!("{}\t{}\t{}", idx + 1, entry.angler, entry.score))
        .collect::<Vec<_>>()
        .join("\n")
}

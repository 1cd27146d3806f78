mod formatter;

pub use formatter::{
    format_catch_result, format_entry_table, format_leaderboard, format_leaderboard_tsv,
    should_use_colors,
};

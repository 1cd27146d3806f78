use clap::{Parser, Subcommand};
use std::path::PathBuf;

const EXIT_SUCCESS: i32 = 0;
const EXIT_USAGE: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Log a catch and print its score
    Add {
        /// Angler name (must be on the roster)
        angler: String,
        /// Fish species (unknown species score a base of 0)
        species: String,
        /// Length in inches (non-numeric input scores a bonus of 0)
        length: String,
    },
    /// Print the catch log, optionally for one angler
    List {
        /// Show only this angler's catches
        angler: Option<String>,
    },
    /// Print the leaderboard
    Board {
        /// Tab-separated output for scripting
        #[arg(long)]
        tsv: bool,
    },
    /// Remove a catch by its position in an angler's table
    Remove {
        /// Angler whose table the position refers to
        angler: String,
        /// Row number as shown by `list <angler>` (1-based)
        position: usize,
    },
    /// Create a config file interactively
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "creel")]
#[command(about = "Fishing tournament scorekeeper", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/creel/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Path to the entry log (defaults to ~/.config/creel/entries.json)
    #[arg(short, long, global = true)]
    entries: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();

    // Init needs no existing config
    if let Some(Commands::Init) = cli.command {
        let path = cli.config.map(PathBuf::from);
        if let Err(e) = creel::config::run_init_wizard(path) {
            eprintln!("Init error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
        std::process::exit(EXIT_SUCCESS);
    }

    // Load config (built-in defaults when no file exists)
    let config_path = cli.config.map(PathBuf::from);
    let config = match creel::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate roster and scoring rules at startup
    let mut config_errors = Vec::new();
    if let Err(errors) = creel::scoring::validate_roster(&config.roster) {
        config_errors.extend(errors);
    }
    let scoring = config.effective_scoring();
    if let Err(errors) = creel::scoring::validate_scoring(&scoring) {
        config_errors.extend(errors);
    }
    if !config_errors.is_empty() {
        eprintln!("Config errors:");
        for error in config_errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let entries_path = cli
        .entries
        .map(PathBuf::from)
        .unwrap_or_else(creel::entry::get_entries_path);
    let entries = creel::entry::load_entries(&entries_path);

    if cli.verbose {
        eprintln!("Roster: {} anglers", config.roster.len());
        eprintln!("Species table: {} entries", scoring.species.len());
        eprintln!(
            "Loaded {} catches from {}",
            entries.len(),
            entries_path.display()
        );
    }

    match cli.command {
        None => {
            let app = creel::tui::App::new(config, entries, entries_path);
            if let Err(e) = creel::tui::run_tui(app) {
                eprintln!("TUI error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Add {
            angler,
            species,
            length,
        }) => {
            // Roster membership is an input constraint, not an engine rule
            if !config.roster.contains(&angler) {
                eprintln!(
                    "'{}' is not on the roster ({})",
                    angler,
                    config.roster.join(", ")
                );
                std::process::exit(EXIT_USAGE);
            }

            let length_field = creel::entry::LengthField::from_input(&length);
            let score = creel::scoring::score(&species, length_field.parsed(), &scoring);
            let record = creel::entry::CatchRecord::new(angler, species, length_field, score);

            let mut entries = entries;
            entries.append(record.clone());
            if let Err(e) = creel::entry::save_entries(&entries_path, &entries) {
                eprintln!("Failed to save entries: {}", e);
                std::process::exit(1);
            }

            let use_colors = creel::output::should_use_colors();
            println!("{}", creel::output::format_catch_result(&record, use_colors));
        }
        Some(Commands::List { angler }) => {
            let use_colors = creel::output::should_use_colors();
            let records = match &angler {
                Some(name) => entries.records_for(name),
                None => entries.records().iter().collect(),
            };
            println!("{}", creel::output::format_entry_table(&records, use_colors));
        }
        Some(Commands::Board { tsv }) => {
            let board = creel::scoring::leaderboard(&config.roster, entries.records());
            if tsv {
                println!("{}", creel::output::format_leaderboard_tsv(&board));
            } else {
                let use_colors = creel::output::should_use_colors();
                println!("{}", creel::output::format_leaderboard(&board, use_colors));
            }
        }
        Some(Commands::Remove { angler, position }) => {
            // Positions are 1-based, as printed by `list <angler>`
            let mut entries = entries;
            let removed = position
                .checked_sub(1)
                .and_then(|idx| entries.remove_for_angler(&angler, idx));

            let removed = match removed {
                Some(record) => record,
                None => {
                    let count = entries.records_for(&angler).len();
                    eprintln!(
                        "No catch at position {} for {} ({} logged)",
                        position, angler, count
                    );
                    std::process::exit(EXIT_USAGE);
                }
            };

            if let Err(e) = creel::entry::save_entries(&entries_path, &entries) {
                eprintln!("Failed to save entries: {}", e);
                std::process::exit(1);
            }

            println!(
                "Removed {} ({} points) from {}'s log",
                removed.species, removed.total, removed.angler
            );
        }
        Some(Commands::Init) => unreachable!("handled above"),
    }

    std::process::exit(EXIT_SUCCESS);
}

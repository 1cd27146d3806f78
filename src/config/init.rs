use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::{get_config_path, Config};
use crate::scoring::{BonusTier, ScoringConfig, SpeciesPoints};

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
fn prompt_with_default(message: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}]: ", message, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    let input = input.to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

/// Print text with a typewriter effect, one character at a time.
fn typewriter(text: &str) {
    use std::thread;
    use std::time::Duration;
    for c in text.chars() {
        print!("{}", c);
        std::io::stdout().flush().ok();
        thread::sleep(Duration::from_millis(18));
    }
    println!();
}

/// Run the interactive init wizard to create a config file.
///
/// If `default_path` is Some, uses that as the config file path.
/// Otherwise, prompts the user with the default config path.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    println!();
    typewriter("Creel Tournament Setup");
    println!("======================");
    println!();

    // 1. Roster (at least one angler required)
    typewriter("First, the roster. Every angler you list here gets a leaderboard row, whether they catch anything or not.");
    typewriter("Enter names one at a time; leave a name blank when you're done.");
    println!();

    let defaults = Config::default();
    let mut roster: Vec<String> = Vec::new();
    loop {
        let name = prompt(&format!("Angler {}: ", roster.len() + 1))?;
        if name.is_empty() {
            if roster.is_empty() {
                let keep_defaults = prompt_yes_no(
                    &format!("No anglers entered. Use the default roster ({})?",
                        defaults.roster.join(", ")),
                    true,
                )?;
                if keep_defaults {
                    roster = defaults.roster.clone();
                    break;
                }
                continue;
            }
            break;
        }
        if roster.contains(&name) {
            println!("  '{}' is already on the roster.", name);
            continue;
        }
        roster.push(name);
    }

    // 2. Scoring rules
    println!();
    typewriter("Each catch scores its species' base points plus a bonus for length.");
    typewriter("The standing rules: Musky=300 down to Rock Bass=5, with length bonuses from 5 points at 6\" up to 100 points at 35\".");
    let configure_scoring = prompt_yes_no("Customize the scoring rules? (n accepts the standing rules)", false)?;

    let scoring = if configure_scoring {
        println!();
        typewriter("Species table. Enter species one at a time; blank name when done.");
        let mut species: Vec<SpeciesPoints> = Vec::new();
        loop {
            let name = prompt("  Species name: ")?;
            if name.is_empty() {
                break;
            }
            let points: i64 = loop {
                let p = prompt_with_default("  Base points", "10")?;
                match p.parse::<i64>() {
                    Ok(v) if v >= 0 => break v,
                    _ => println!("  Invalid: must be a non-negative integer. Try again."),
                }
            };
            species.push(SpeciesPoints::new(name, points));
        }

        println!();
        typewriter("Bonus tiers. Enter thresholds from longest to shortest; a catch earns the first tier it meets.");
        typewriter("Leave the threshold blank when done.");
        let mut bonus_tiers: Vec<BonusTier> = Vec::new();
        loop {
            let threshold = prompt("  Minimum length in inches: ")?;
            if threshold.is_empty() {
                break;
            }
            let min_length: f64 = match threshold.parse::<f64>() {
                Ok(v) if v.is_finite() => v,
                _ => {
                    println!("  Invalid: must be a number. Try again.");
                    continue;
                }
            };
            if let Some(last) = bonus_tiers.last() {
                if min_length >= last.min_length {
                    println!(
                        "  Invalid: must be shorter than the previous tier ({}). Try again.",
                        last.min_length
                    );
                    continue;
                }
            }
            let points: i64 = loop {
                let p = prompt_with_default("  Bonus points", "10")?;
                match p.parse::<i64>() {
                    Ok(v) if v >= 0 => break v,
                    _ => println!("  Invalid: must be a non-negative integer. Try again."),
                }
            };
            bonus_tiers.push(BonusTier::new(min_length, points));
        }

        if species.is_empty() && bonus_tiers.is_empty() {
            None
        } else {
            Some(ScoringConfig {
                species,
                bonus_tiers,
            })
        }
    } else {
        None
    };

    // 3. Config path
    let default_config_path = default_path.unwrap_or_else(get_config_path);
    println!();
    let path_str = prompt_with_default(
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    if config_path.exists() {
        let overwrite = prompt_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    // 4. Write config
    let config = Config { roster, scoring };

    let yaml = serde_saphyr::to_string(&config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(&config_path, &yaml)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!();
    println!("Config written to {}", config_path.display());
    typewriter("Edit the file any time to adjust the roster or the point tables. Catches already logged keep the scores they were given.");
    println!("Run `creel` to start logging catches.");

    Ok(())
}

mod init;
mod schema;

pub use init::run_init_wizard;
pub use schema::Config;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the config directory path (~/.config/creel/)
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("creel")
}

/// Get the default config file path (~/.config/creel/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Load configuration from a YAML file.
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   (~/.config/creel/config.yaml)
///
/// A missing file at the default path is not an error: the tournament runs
/// on the built-in roster and rules. An explicitly passed path must exist.
/// Unreadable or invalid YAML is an error either way.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let (config_path, explicit) = match path {
        Some(p) => (p, true),
        None => (get_config_path(), false),
    };

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!(
            "Failed to parse config: invalid YAML in {}",
            config_path.display()
        )
    })?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_load_explicit_missing_path_errors() {
        let temp_path = env::temp_dir().join("creel_test_no_such_config.yaml");
        let _ = std::fs::remove_file(&temp_path);
        assert!(load_config(Some(temp_path)).is_err());
    }

    #[test]
    fn test_load_valid_config_file() {
        let temp_path = env::temp_dir().join("creel_test_config.yaml");
        std::fs::write(&temp_path, "roster: [Ann, Bert]\n").unwrap();

        let config = load_config(Some(temp_path.clone())).unwrap();
        assert_eq!(config.roster, vec!["Ann".to_string(), "Bert".to_string()]);

        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn test_load_invalid_yaml_errors() {
        let temp_path = env::temp_dir().join("creel_test_bad_config.yaml");
        std::fs::write(&temp_path, "roster: [unclosed\n").unwrap();

        assert!(load_config(Some(temp_path.clone())).is_err());

        let _ = std::fs::remove_file(&temp_path);
    }
}

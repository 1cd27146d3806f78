use super::types::EntryLog;
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::path::{Path, PathBuf};

/// Get the default entry log path (~/.config/creel/entries.json)
pub fn get_entries_path() -> PathBuf {
    crate::config::get_config_dir().join("entries.json")
}

/// Load the entry log from a JSON file.
///
/// A missing file is a fresh tournament and loads as an empty log. Content
/// that fails to parse also loads as an empty log, with a warning; data entry
/// is never blocked on a bad file. There is no schema version to check.
pub fn load_entries(path: &Path) -> EntryLog {
    if !path.exists() {
        return EntryLog::new();
    }

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            crate::buffered_eprintln!(
                "Warning: could not read {}: {}. Starting with no entries.",
                path.display(),
                e
            );
            return EntryLog::new();
        }
    };

    match serde_json::from_str(&content) {
        Ok(log) => log,
        Err(e) => {
            crate::buffered_eprintln!(
                "Warning: {} is not a valid entry list ({}). Starting with no entries.",
                path.display(),
                e
            );
            EntryLog::new()
        }
    }
}

/// Save the entry log to a JSON file atomically.
///
/// Uses atomic-write-file so the log is never left half-written. Creates the
/// config directory if it doesn't exist. The full list is rewritten after
/// every append or remove.
pub fn save_entries(path: &Path, log: &EntryLog) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, log).context("Failed to serialize entry log")?;

    file.commit().context("Failed to save entry log")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::types::{CatchRecord, LengthField};
    use crate::scoring::{score, ScoringConfig};
    use std::env;

    fn record(angler: &str, species: &str, length: f64) -> CatchRecord {
        let config = ScoringConfig::default();
        CatchRecord::new(
            angler.to_string(),
            species.to_string(),
            LengthField::Number(length),
            score(species, Some(length), &config),
        )
    }

    #[test]
    fn test_load_missing_file_returns_empty() {
        let temp_path = env::temp_dir().join("creel_test_missing.json");
        let _ = std::fs::remove_file(&temp_path);

        let log = load_entries(&temp_path);
        assert!(log.is_empty());
    }

    #[test]
    fn test_load_malformed_file_returns_empty() {
        let temp_path = env::temp_dir().join("creel_test_malformed.json");
        std::fs::write(&temp_path, "{ not json at all").unwrap();

        let log = load_entries(&temp_path);
        assert!(log.is_empty());

        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_path = env::temp_dir().join("creel_test_roundtrip.json");
        let _ = std::fs::remove_file(&temp_path);

        let mut log = EntryLog::new();
        log.append(record("Bo", "Musky", 36.0));
        log.append(record("Sam", "Perch", 8.0));

        save_entries(&temp_path, &log).unwrap();
        let loaded = load_entries(&temp_path);

        assert_eq!(loaded, log);
        assert_eq!(loaded.records()[0].total, 400);

        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn test_load_tolerates_string_lengths() {
        // Entries written by hand or by older tooling may store the length
        // as a string; the reader accepts either shape.
        let temp_path = env::temp_dir().join("creel_test_string_length.json");
        std::fs::write(
            &temp_path,
            r#"[{"angler":"Bo","species":"Walleye","length":"22","base":140,"bonus":30,"total":170}]"#,
        )
        .unwrap();

        let log = load_entries(&temp_path);
        assert_eq!(log.len(), 1);
        assert_eq!(log.records()[0].length.parsed(), Some(22.0));
        assert_eq!(log.records()[0].total, 170);

        let _ = std::fs::remove_file(&temp_path);
    }
}

use crate::config::Config;
use crate::entry::types::{CatchRecord, EntryLog, LengthField};
use crate::scoring::{self, LeaderboardEntry, ScoringConfig};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Entry,
    Leaderboard,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal,
    Help,
}

pub struct App {
    pub config: Config,
    pub scoring: ScoringConfig,
    pub entries: EntryLog,
    pub entries_path: PathBuf,
    pub current_view: View,
    pub input_mode: InputMode,
    pub angler_idx: usize,
    pub species_idx: usize,
    pub length_input: String,
    pub table_state: ratatui::widgets::TableState,
    pub flash_message: Option<(String, Instant)>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, entries: EntryLog, entries_path: PathBuf) -> Self {
        let scoring = config.effective_scoring();
        let mut app = Self {
            config,
            scoring,
            entries,
            entries_path,
            current_view: View::Entry,
            input_mode: InputMode::Normal,
            angler_idx: 0,
            species_idx: 0,
            length_input: String::new(),
            table_state: ratatui::widgets::TableState::default(),
            flash_message: None,
            should_quit: false,
        };
        app.reset_selection();
        app
    }

    pub fn current_angler(&self) -> &str {
        self.config
            .roster
            .get(self.angler_idx)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn current_species(&self) -> &str {
        self.scoring
            .species
            .get(self.species_idx)
            .map(|s| s.name.as_str())
            .unwrap_or("")
    }

    /// The current angler's records, in log order. Row N of the entry table
    /// is element N here; deletion maps through the same ordering.
    pub fn visible_records(&self) -> Vec<&CatchRecord> {
        self.entries.records_for(self.current_angler())
    }

    /// Running total for the current angler, recomputed from the log.
    pub fn angler_total(&self) -> i64 {
        scoring::total_for(self.current_angler(), self.entries.records())
    }

    /// The ranked leaderboard for the full roster.
    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        scoring::leaderboard(&self.config.roster, self.entries.records())
    }

    pub fn next_angler(&mut self) {
        if self.config.roster.is_empty() {
            return;
        }
        self.angler_idx = (self.angler_idx + 1) % self.config.roster.len();
        self.reset_selection();
    }

    pub fn previous_angler(&mut self) {
        if self.config.roster.is_empty() {
            return;
        }
        self.angler_idx = (self.angler_idx + self.config.roster.len() - 1) % self.config.roster.len();
        self.reset_selection();
    }

    pub fn next_species(&mut self) {
        if self.scoring.species.is_empty() {
            return;
        }
        self.species_idx = (self.species_idx + 1) % self.scoring.species.len();
    }

    pub fn previous_species(&mut self) {
        if self.scoring.species.is_empty() {
            return;
        }
        self.species_idx =
            (self.species_idx + self.scoring.species.len() - 1) % self.scoring.species.len();
    }

    pub fn push_length_char(&mut self, c: char) {
        if c.is_ascii_digit() || c == '.' {
            self.length_input.push(c);
        }
    }

    pub fn pop_length_char(&mut self) {
        self.length_input.pop();
    }

    pub fn next_row(&mut self) {
        let len = self.visible_records().len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn previous_row(&mut self) {
        let len = self.visible_records().len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    /// Score the entered catch, append it, and persist.
    ///
    /// Never refuses the entry: an unknown species scores base 0 and a
    /// non-numeric length scores bonus 0. A persistence failure keeps the
    /// in-memory entry and surfaces as a flash message.
    pub fn add_catch(&mut self) {
        let angler = self.current_angler().to_string();
        if angler.is_empty() {
            self.show_flash("No angler selected".to_string());
            return;
        }

        let species = self.current_species().to_string();
        let length = LengthField::from_input(&self.length_input);
        let score = scoring::score(&species, length.parsed(), &self.scoring);
        let record = CatchRecord::new(angler, species.clone(), length, score);

        self.entries.append(record);
        self.length_input.clear();

        // Select the row just added
        let count = self.visible_records().len();
        self.table_state.select(Some(count.saturating_sub(1)));

        if let Err(e) = crate::entry::save_entries(&self.entries_path, &self.entries) {
            self.show_flash(format!("Failed to save entries: {}", e));
            return;
        }

        self.show_flash(format!("Logged: {} for {} points", species, score.total));
    }

    /// Delete the selected row of the current angler's table.
    /// The row index is mapped back to the underlying record by the log.
    pub fn delete_selected(&mut self) {
        let view_index = match self.table_state.selected() {
            Some(i) => i,
            None => return,
        };

        let angler = self.current_angler().to_string();
        let removed = match self.entries.remove_for_angler(&angler, view_index) {
            Some(record) => record,
            None => return,
        };

        // Fix table selection to stay valid
        let remaining = self.visible_records().len();
        if remaining == 0 {
            self.table_state.select(None);
        } else if view_index >= remaining {
            self.table_state.select(Some(remaining - 1));
        }

        if let Err(e) = crate::entry::save_entries(&self.entries_path, &self.entries) {
            self.show_flash(format!("Failed to save entries: {}", e));
            return;
        }

        self.show_flash(format!("Deleted: {} ({} points)", removed.species, removed.total));
    }

    /// Toggle between Entry and Leaderboard views
    pub fn toggle_view(&mut self) {
        self.current_view = match self.current_view {
            View::Entry => View::Leaderboard,
            View::Leaderboard => View::Entry,
        };
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn dismiss_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn show_flash(&mut self, msg: String) {
        self.flash_message = Some((msg, Instant::now()));
    }

    pub fn update_flash(&mut self) {
        if let Some((_, timestamp)) = self.flash_message {
            if timestamp.elapsed().as_secs() >= 3 {
                self.flash_message = None;
            }
        }
    }

    fn reset_selection(&mut self) {
        let count = self.visible_records().len();
        if count == 0 {
            self.table_state.select(None);
        } else {
            self.table_state.select(Some(0));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn test_app(name: &str) -> App {
        let path = env::temp_dir().join(format!("creel_test_app_{}.json", name));
        let _ = std::fs::remove_file(&path);
        App::new(Config::default(), EntryLog::new(), path)
    }

    #[test]
    fn test_add_catch_scores_and_appends() {
        let mut app = test_app("add");
        app.length_input = "36".to_string(); // Musky is species 0
        app.add_catch();

        assert_eq!(app.entries.len(), 1);
        let record = &app.entries.records()[0];
        assert_eq!(record.angler, "Austin");
        assert_eq!(record.species, "Musky");
        assert_eq!(record.total, 400);
        assert!(app.length_input.is_empty());
        assert_eq!(app.table_state.selected(), Some(0));

        let _ = std::fs::remove_file(&app.entries_path);
    }

    #[test]
    fn test_add_catch_with_empty_length() {
        let mut app = test_app("empty_length");
        app.add_catch();

        let record = &app.entries.records()[0];
        assert_eq!(record.base, 300);
        assert_eq!(record.bonus, 0);
        assert_eq!(record.total, 300);

        let _ = std::fs::remove_file(&app.entries_path);
    }

    #[test]
    fn test_delete_selected_targets_filtered_row() {
        let mut app = test_app("delete");
        app.length_input = "36".to_string();
        app.add_catch(); // Austin / Musky
        app.next_angler(); // Bo
        app.length_input = "8".to_string();
        app.next_species(); // Lake Sturgeon
        app.add_catch(); // Bo / Lake Sturgeon

        // Bo's table has one row; delete it
        assert_eq!(app.visible_records().len(), 1);
        app.delete_selected();

        assert_eq!(app.entries.len(), 1);
        assert_eq!(app.entries.records()[0].angler, "Austin");
        assert_eq!(app.table_state.selected(), None);

        let _ = std::fs::remove_file(&app.entries_path);
    }

    #[test]
    fn test_angler_cycling_wraps() {
        let mut app = test_app("cycle");
        assert_eq!(app.current_angler(), "Austin");
        app.previous_angler();
        assert_eq!(app.current_angler(), "Sam");
        app.next_angler();
        assert_eq!(app.current_angler(), "Austin");
    }

    #[test]
    fn test_length_input_accepts_digits_only() {
        let mut app = test_app("input");
        for c in "1a2.b5".chars() {
            app.push_length_char(c);
        }
        assert_eq!(app.length_input, "12.5");
        app.pop_length_char();
        assert_eq!(app.length_input, "12.");
    }

    #[test]
    fn test_leaderboard_reflects_entries() {
        let mut app = test_app("board");
        app.next_angler(); // Bo
        app.length_input = "36".to_string();
        app.add_catch();

        let board = app.leaderboard();
        assert_eq!(board.len(), 8);
        assert_eq!(board[0].angler, "Bo");
        assert_eq!(board[0].score, 400);

        let _ = std::fs::remove_file(&app.entries_path);
    }

    #[test]
    fn test_toggle_view() {
        let mut app = test_app("toggle");
        assert_eq!(app.current_view, View::Entry);
        app.toggle_view();
        assert_eq!(app.current_view, View::Leaderboard);
        app.toggle_view();
        assert_eq!(app.current_view, View::Entry);
    }
}

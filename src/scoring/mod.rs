pub mod config;
pub mod engine;
pub mod validation;

pub use config::{BonusTier, ScoringConfig, SpeciesPoints};
pub use engine::{base_value, bonus_value, leaderboard, score, total_for};
pub use engine::{CatchScore, LeaderboardEntry};
pub use validation::{validate_roster, validate_scoring};

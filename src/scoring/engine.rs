use super::config::ScoringConfig;
use crate::entry::types::CatchRecord;

/// Scored breakdown of a single catch, frozen into the record at entry time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatchScore {
    pub base: i64,
    pub bonus: i64,
    pub total: i64,
}

/// One leaderboard row: an angler and their summed total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub angler: String,
    pub score: i64,
}

/// Look up the base point value for a species.
///
/// Exact, case-sensitive match against the configured table. Any unmatched
/// input (including the empty string) scores 0; unknown species are a valid
/// zero-value case, not an error.
pub fn base_value(species: &str, config: &ScoringConfig) -> i64 {
    config
        .species
        .iter()
        .find(|s| s.name == species)
        .map(|s| s.points)
        .unwrap_or(0)
}

/// Look up the length bonus for a catch.
///
/// Tiers are evaluated in configured order; the first tier whose threshold
/// the length meets or exceeds wins. `None` means no numeric length was
/// parsed from the input and scores 0, as do NaN and lengths below every
/// threshold.
pub fn bonus_value(length: Option<f64>, config: &ScoringConfig) -> i64 {
    let length = match length {
        Some(l) if !l.is_nan() => l,
        _ => return 0,
    };

    config
        .bonus_tiers
        .iter()
        .find(|tier| length >= tier.min_length)
        .map(|tier| tier.points)
        .unwrap_or(0)
}

/// Score a catch: base from species, bonus from length, total is their sum.
/// Pure and deterministic; no input combination is an error.
pub fn score(species: &str, length: Option<f64>, config: &ScoringConfig) -> CatchScore {
    let base = base_value(species, config);
    let bonus = bonus_value(length, config);
    CatchScore {
        base,
        bonus,
        total: base + bonus,
    }
}

/// Sum the snapshotted totals of all records belonging to an angler.
/// Anglers with no records score 0.
pub fn total_for(angler: &str, records: &[CatchRecord]) -> i64 {
    records
        .iter()
        .filter(|r| r.angler == angler)
        .map(|r| r.total)
        .sum()
}

/// Build the leaderboard: one entry per roster angler (zero-catch anglers
/// included), sorted by descending score. The sort is stable, so anglers
/// with equal scores keep their roster order.
pub fn leaderboard(roster: &[String], records: &[CatchRecord]) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = roster
        .iter()
        .map(|angler| LeaderboardEntry {
            angler: angler.clone(),
            score: total_for(angler, records),
        })
        .collect();

    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::types::LengthField;

    fn record(angler: &str, species: &str, length: f64) -> CatchRecord {
        let config = ScoringConfig::default();
        CatchRecord::new(
            angler.to_string(),
            species.to_string(),
            LengthField::Number(length),
            score(species, Some(length), &config),
        )
    }

    fn roster(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_base_value_all_configured_species() {
        let config = ScoringConfig::default();
        let expected = [
            ("Musky", 300),
            ("Lake Sturgeon", 250),
            ("Brown Trout", 180),
            ("Walleye", 140),
            ("Northern Pike", 120),
            ("Small/Largemouth", 60),
            ("Crappie", 30),
            ("Perch", 20),
            ("Bluegill/Sunfish", 10),
            ("Rock Bass", 5),
            ("Other", 5),
        ];
        for (name, points) in expected {
            assert_eq!(base_value(name, &config), points, "species {}", name);
        }
    }

    #[test]
    fn test_base_value_unknown_species_is_zero() {
        let config = ScoringConfig::default();
        assert_eq!(base_value("Unknown Fish", &config), 0);
        assert_eq!(base_value("", &config), 0);
    }

    #[test]
    fn test_base_value_is_case_sensitive() {
        let config = ScoringConfig::default();
        assert_eq!(base_value("musky", &config), 0);
        assert_eq!(base_value("MUSKY", &config), 0);
    }

    #[test]
    fn test_bonus_value_exact_breakpoints() {
        let config = ScoringConfig::default();
        // Threshold values belong to the higher tier (>=, not >)
        assert_eq!(bonus_value(Some(5.99), &config), 0);
        assert_eq!(bonus_value(Some(6.0), &config), 5);
        assert_eq!(bonus_value(Some(10.0), &config), 10);
        assert_eq!(bonus_value(Some(15.0), &config), 20);
        assert_eq!(bonus_value(Some(20.0), &config), 30);
        assert_eq!(bonus_value(Some(25.0), &config), 50);
        assert_eq!(bonus_value(Some(30.0), &config), 75);
        assert_eq!(bonus_value(Some(34.99), &config), 75);
        assert_eq!(bonus_value(Some(35.0), &config), 100);
    }

    #[test]
    fn test_bonus_value_monotonic() {
        let config = ScoringConfig::default();
        let mut previous = 0;
        let mut l = 0.0;
        while l <= 40.0 {
            let bonus = bonus_value(Some(l), &config);
            assert!(bonus >= previous, "bonus dropped at length {}", l);
            previous = bonus;
            l += 0.25;
        }
    }

    #[test]
    fn test_bonus_value_missing_or_invalid_is_zero() {
        let config = ScoringConfig::default();
        assert_eq!(bonus_value(None, &config), 0);
        assert_eq!(bonus_value(Some(f64::NAN), &config), 0);
    }

    #[test]
    fn test_bonus_value_negative_length_is_zero() {
        let config = ScoringConfig::default();
        assert_eq!(bonus_value(Some(-3.0), &config), 0);
    }

    #[test]
    fn test_score_musky() {
        let config = ScoringConfig::default();
        let result = score("Musky", Some(36.0), &config);
        assert_eq!(result.base, 300);
        assert_eq!(result.bonus, 100);
        assert_eq!(result.total, 400);
    }

    #[test]
    fn test_score_bluegill() {
        let config = ScoringConfig::default();
        let result = score("Bluegill/Sunfish", Some(12.0), &config);
        assert_eq!(result.base, 10);
        assert_eq!(result.bonus, 10);
        assert_eq!(result.total, 20);
    }

    #[test]
    fn test_score_unknown_species_still_earns_bonus() {
        let config = ScoringConfig::default();
        let result = score("Unknown Fish", Some(40.0), &config);
        assert_eq!(result.base, 0);
        assert_eq!(result.bonus, 100);
        assert_eq!(result.total, 100);
    }

    #[test]
    fn test_total_for_sums_matching_records() {
        let records = vec![
            record("Bo", "Musky", 36.0),       // 400
            record("Sam", "Walleye", 22.0),    // 170
            record("Bo", "Perch", 8.0),        // 25
        ];
        assert_eq!(total_for("Bo", &records), 425);
        assert_eq!(total_for("Sam", &records), 170);
    }

    #[test]
    fn test_total_for_no_records_is_zero() {
        let records = vec![record("Bo", "Musky", 36.0)];
        assert_eq!(total_for("Kevin", &records), 0);
        assert_eq!(total_for("Kevin", &[]), 0);
    }

    #[test]
    fn test_total_for_exact_name_match() {
        let records = vec![record("Bo", "Musky", 36.0)];
        assert_eq!(total_for("bo", &records), 0);
    }

    #[test]
    fn test_leaderboard_one_entry_per_roster_angler() {
        let roster = roster(&["Austin", "Bo", "Buzz"]);
        let records = vec![record("Bo", "Walleye", 22.0)];

        let board = leaderboard(&roster, &records);
        assert_eq!(board.len(), 3);
        assert_eq!(board[0].angler, "Bo");
        assert_eq!(board[0].score, 170);
        // Zero-catch anglers still appear
        assert_eq!(board[1].score, 0);
        assert_eq!(board[2].score, 0);
    }

    #[test]
    fn test_leaderboard_sorted_descending() {
        let roster = roster(&["Austin", "Bo", "Buzz"]);
        let records = vec![
            record("Austin", "Perch", 8.0),   // 25
            record("Bo", "Musky", 36.0),      // 400
            record("Buzz", "Walleye", 22.0),  // 170
        ];

        let board = leaderboard(&roster, &records);
        let scores: Vec<i64> = board.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![400, 170, 25]);
    }

    #[test]
    fn test_leaderboard_ties_keep_roster_order() {
        let roster = roster(&["Matt", "Nick", "Sam"]);
        let records = vec![
            record("Sam", "Rock Bass", 7.0),  // 10
            record("Matt", "Rock Bass", 7.0), // 10
        ];

        let board = leaderboard(&roster, &records);
        // Matt and Sam tie at 10; roster order decides
        assert_eq!(board[0].angler, "Matt");
        assert_eq!(board[1].angler, "Sam");
        assert_eq!(board[2].angler, "Nick");
    }

    #[test]
    fn test_leaderboard_empty_roster() {
        let board = leaderboard(&[], &[record("Bo", "Musky", 36.0)]);
        assert!(board.is_empty());
    }

    #[test]
    fn test_score_uses_configured_tables() {
        let config = ScoringConfig {
            species: vec![crate::scoring::SpeciesPoints::new("Carp", 40)],
            bonus_tiers: vec![crate::scoring::BonusTier::new(12.0, 15)],
        };
        let result = score("Carp", Some(13.0), &config);
        assert_eq!(result.base, 40);
        assert_eq!(result.bonus, 15);
        assert_eq!(result.total, 55);

        // Musky is not in this custom table
        assert_eq!(score("Musky", Some(40.0), &config).base, 0);
    }
}

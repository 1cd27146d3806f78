use super::config::ScoringConfig;
use std::collections::HashSet;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let mut seen_species = HashSet::new();
    for (i, species) in config.species.iter().enumerate() {
        if species.name.trim().is_empty() {
            errors.push(format!("scoring.species[{}].name: must not be blank", i));
        }
        if !seen_species.insert(species.name.as_str()) {
            errors.push(format!(
                "scoring.species[{}].name: duplicate species '{}'",
                i, species.name
            ));
        }
        if species.points < 0 {
            errors.push(format!(
                "scoring.species[{}].points: must be non-negative, got {}",
                i, species.points
            ));
        }
    }

    for (i, tier) in config.bonus_tiers.iter().enumerate() {
        if !tier.min_length.is_finite() {
            errors.push(format!(
                "scoring.bonus_tiers[{}].min_length: must be a finite number",
                i
            ));
        }
        if tier.points < 0 {
            errors.push(format!(
                "scoring.bonus_tiers[{}].points: must be non-negative, got {}",
                i, tier.points
            ));
        }
        // First-match-wins evaluation requires strictly descending thresholds
        if i > 0 {
            let previous = config.bonus_tiers[i - 1].min_length;
            if tier.min_length >= previous {
                errors.push(format!(
                    "scoring.bonus_tiers[{}].min_length: thresholds must strictly descend ({} follows {})",
                    i, tier.min_length, previous
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate the angler roster at startup.
pub fn validate_roster(roster: &[String]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if roster.is_empty() {
        errors.push("roster: must list at least one angler".to_string());
    }

    let mut seen = HashSet::new();
    for (i, name) in roster.iter().enumerate() {
        if name.trim().is_empty() {
            errors.push(format!("roster[{}]: angler name must not be blank", i));
        }
        if !seen.insert(name.as_str()) {
            errors.push(format!("roster[{}]: duplicate angler '{}'", i, name));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{BonusTier, SpeciesPoints};

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_scoring(&ScoringConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = ScoringConfig {
            species: vec![],
            bonus_tiers: vec![],
        };
        assert!(validate_scoring(&config).is_ok());
    }

    #[test]
    fn test_blank_species_name() {
        let config = ScoringConfig {
            species: vec![SpeciesPoints::new("  ", 10)],
            bonus_tiers: vec![],
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("species[0].name"));
    }

    #[test]
    fn test_duplicate_species() {
        let config = ScoringConfig {
            species: vec![
                SpeciesPoints::new("Perch", 20),
                SpeciesPoints::new("Perch", 30),
            ],
            bonus_tiers: vec![],
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("duplicate species 'Perch'"));
    }

    #[test]
    fn test_negative_species_points() {
        let config = ScoringConfig {
            species: vec![SpeciesPoints::new("Perch", -5)],
            bonus_tiers: vec![],
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("species[0].points"));
    }

    #[test]
    fn test_tiers_must_descend() {
        let config = ScoringConfig {
            species: vec![],
            bonus_tiers: vec![BonusTier::new(10.0, 5), BonusTier::new(20.0, 30)],
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("bonus_tiers[1].min_length"));
    }

    #[test]
    fn test_equal_thresholds_rejected() {
        let config = ScoringConfig {
            species: vec![],
            bonus_tiers: vec![BonusTier::new(10.0, 10), BonusTier::new(10.0, 5)],
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_non_finite_threshold() {
        let config = ScoringConfig {
            species: vec![],
            bonus_tiers: vec![BonusTier::new(f64::NAN, 10)],
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("finite"));
    }

    #[test]
    fn test_collects_all_errors() {
        let config = ScoringConfig {
            species: vec![SpeciesPoints::new("", -1)], // blank name + negative points
            bonus_tiers: vec![BonusTier::new(5.0, 5), BonusTier::new(8.0, 10)], // ascending
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_valid_roster() {
        let roster = vec!["Austin".to_string(), "Bo".to_string()];
        assert!(validate_roster(&roster).is_ok());
    }

    #[test]
    fn test_empty_roster() {
        let errors = validate_roster(&[]).unwrap_err();
        assert!(errors[0].contains("at least one"));
    }

    #[test]
    fn test_duplicate_angler() {
        let roster = vec!["Bo".to_string(), "Bo".to_string()];
        let errors = validate_roster(&roster).unwrap_err();
        assert!(errors[0].contains("duplicate angler 'Bo'"));
    }

    #[test]
    fn test_blank_angler() {
        let roster = vec!["".to_string()];
        let errors = validate_roster(&roster).unwrap_err();
        assert!(errors[0].contains("blank"));
    }
}

use serde::{Deserialize, Serialize};

/// Tournament scoring rules.
///
/// Defines how each catch is scored: a flat point value per species plus a
/// length-based bonus tier. Both tables are configurable; the defaults are
/// the tournament's standing rules.
///
/// Example YAML:
/// ```yaml
/// species:
///   - { name: Musky, points: 300 }
///   - { name: Walleye, points: 140 }
/// bonus_tiers:
///   - { min_length: 35, points: 100 }
///   - { min_length: 25, points: 50 }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Species point table, listed in display order. Lookup is exact and
    /// case-sensitive; species not in the table score a base of 0.
    #[serde(default)]
    pub species: Vec<SpeciesPoints>,

    /// Length bonus tiers, listed in descending threshold order. The first
    /// tier whose `min_length` the catch meets or exceeds wins.
    #[serde(default)]
    pub bonus_tiers: Vec<BonusTier>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            species: vec![
                SpeciesPoints::new("Musky", 300),
                SpeciesPoints::new("Lake Sturgeon", 250),
                SpeciesPoints::new("Brown Trout", 180),
                SpeciesPoints::new("Walleye", 140),
                SpeciesPoints::new("Northern Pike", 120),
                SpeciesPoints::new("Small/Largemouth", 60),
                SpeciesPoints::new("Crappie", 30),
                SpeciesPoints::new("Perch", 20),
                SpeciesPoints::new("Bluegill/Sunfish", 10),
                SpeciesPoints::new("Rock Bass", 5),
                SpeciesPoints::new("Other", 5),
            ],
            bonus_tiers: vec![
                BonusTier::new(35.0, 100),
                BonusTier::new(30.0, 75),
                BonusTier::new(25.0, 50),
                BonusTier::new(20.0, 30),
                BonusTier::new(15.0, 20),
                BonusTier::new(10.0, 10),
                BonusTier::new(6.0, 5),
            ],
        }
    }
}

/// One row of the species point table.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SpeciesPoints {
    /// Species name as shown in the selector (e.g. "Northern Pike")
    pub name: String,

    /// Points awarded for catching this species, regardless of size
    pub points: i64,
}

impl SpeciesPoints {
    pub fn new(name: impl Into<String>, points: i64) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}

/// One length bonus tier.
///
/// A catch of `min_length` inches or longer earns `points`, unless a higher
/// tier already matched.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BonusTier {
    /// Inclusive length threshold in inches
    pub min_length: f64,

    /// Bonus points for meeting the threshold
    pub points: i64,
}

impl BonusTier {
    pub fn new(min_length: f64, points: i64) -> Self {
        Self { min_length, points }
    }
}

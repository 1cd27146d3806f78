use crate::scoring::CatchScore;
use serde::{Deserialize, Serialize};

/// Length as the user entered it.
///
/// Stored entries may carry the length as a JSON number or as raw text; both
/// are preserved verbatim so re-saving never rewrites what was entered.
/// Scoring goes through [`LengthField::parsed`], which makes "no numeric
/// value" explicit instead of leaning on NaN comparison semantics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum LengthField {
    Number(f64),
    Text(String),
}

impl LengthField {
    /// Parse user text into a length field, keeping the raw text when it
    /// isn't numeric.
    pub fn from_input(input: &str) -> Self {
        match input.trim().parse::<f64>() {
            Ok(v) if !v.is_nan() => LengthField::Number(v),
            _ => LengthField::Text(input.to_string()),
        }
    }

    /// The numeric length, or `None` when nothing numeric was entered.
    pub fn parsed(&self) -> Option<f64> {
        match self {
            LengthField::Number(v) if !v.is_nan() => Some(*v),
            LengthField::Number(_) => None,
            LengthField::Text(s) => s.trim().parse::<f64>().ok().filter(|v| !v.is_nan()),
        }
    }

    /// Display form: the number, or the raw text as entered.
    pub fn display(&self) -> String {
        match self {
            LengthField::Number(v) => format!("{}", v),
            LengthField::Text(s) => s.clone(),
        }
    }
}

/// A single logged catch. Immutable once created: base, bonus and total are
/// snapshotted from the scoring rules in force at entry time and never
/// recomputed, so later rule changes don't rewrite history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatchRecord {
    pub angler: String,
    pub species: String,
    pub length: LengthField,
    pub base: i64,
    pub bonus: i64,
    pub total: i64,
}

impl CatchRecord {
    pub fn new(angler: String, species: String, length: LengthField, score: CatchScore) -> Self {
        Self {
            angler,
            species,
            length,
            base: score.base,
            bonus: score.bonus,
            total: score.total,
        }
    }
}

/// The ordered entry collection. Insertion order is significant only in that
/// it defines stable positions for removal; the leaderboard re-sorts
/// independently.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct EntryLog {
    records: Vec<CatchRecord>,
}

impl EntryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[CatchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a scored record to the end of the log.
    pub fn append(&mut self, record: CatchRecord) {
        self.records.push(record);
    }

    /// Remove the record at an underlying-collection position.
    /// Returns the removed record, or `None` if the position is out of range.
    pub fn remove(&mut self, index: usize) -> Option<CatchRecord> {
        if index < self.records.len() {
            Some(self.records.remove(index))
        } else {
            None
        }
    }

    /// The given angler's records, in log order.
    pub fn records_for(&self, angler: &str) -> Vec<&CatchRecord> {
        self.records.iter().filter(|r| r.angler == angler).collect()
    }

    /// Underlying positions of the given angler's records, in log order.
    /// Position `i` of this list is row `i` of the angler's displayed table.
    pub fn indices_for(&self, angler: &str) -> Vec<usize> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.angler == angler)
            .map(|(i, _)| i)
            .collect()
    }

    /// Remove a record by its position in the angler-filtered view.
    ///
    /// The view index must come from the same angler-filtered ordering shown
    /// at delete time; it is mapped back to the underlying record here so
    /// callers never remove the Nth item of the raw log by mistake.
    pub fn remove_for_angler(&mut self, angler: &str, view_index: usize) -> Option<CatchRecord> {
        let index = self.indices_for(angler).get(view_index).copied()?;
        self.remove(index)
    }
}

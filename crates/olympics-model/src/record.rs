//! The normalized athlete table.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{Medal, MedalCounts, Season, Sex};

/// One athlete's participation in one event at one edition of the Games.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteRecord {
    /// Source row identifier (`ID` column); repeated for the same athlete.
    pub id: Option<u64>,
    pub name: String,
    pub sex: Sex,
    pub age: Option<u32>,
    /// Centimeters.
    pub height: Option<f64>,
    /// Kilograms.
    pub weight: Option<f64>,
    pub team: String,
    /// National Olympic Committee code, e.g. `"USA"`.
    pub noc: String,
    /// Region resolved from the NOC code; `None` for unmapped codes.
    pub region: Option<String>,
    /// Games label, e.g. `"1992 Summer"`.
    pub games: String,
    pub year: i32,
    pub season: Season,
    pub city: String,
    pub sport: String,
    pub event: String,
    pub medal: Option<Medal>,
    /// Indicator columns derived from `medal`.
    pub medals: MedalCounts,
}

impl AthleteRecord {
    pub fn has_medal(&self) -> bool {
        self.medal.is_some()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

/// The immutable, normalized dataset every query runs against.
///
/// Cloning is cheap (shared slice). The dataset is built once and never
/// mutated, so it can be handed to any number of threads.
#[derive(Debug, Clone, Default)]
pub struct NormalizedDataset {
    records: Arc<[AthleteRecord]>,
}

impl NormalizedDataset {
    /// Build a dataset from already-typed records.
    ///
    /// Indicator columns are recomputed from each record's `medal` so they can
    /// never disagree with it.
    pub fn from_records(records: Vec<AthleteRecord>) -> Self {
        let records: Vec<AthleteRecord> = records
            .into_iter()
            .map(|mut record| {
                record.medals = MedalCounts::indicator(record.medal);
                record
            })
            .collect();
        Self {
            records: records.into(),
        }
    }

    pub fn records(&self) -> &[AthleteRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AthleteRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a NormalizedDataset {
    type Item = &'a AthleteRecord;
    type IntoIter = std::slice::Iter<'a, AthleteRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

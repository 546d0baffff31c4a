//! Result tables returned by the aggregation engine.
//!
//! Each query returns freshly allocated rows; nothing here borrows from the
//! dataset.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Medal, MedalCounts, Sex};

/// One row of the medal tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedalTallyRow {
    pub region: String,
    /// `None` when the tally is aggregated across all years.
    pub year: Option<i32>,
    pub gold: u64,
    pub silver: u64,
    pub bronze: u64,
    pub total: u64,
}

impl MedalTallyRow {
    pub fn new(region: impl Into<String>, year: Option<i32>, medals: MedalCounts) -> Self {
        Self {
            region: region.into(),
            year,
            gold: medals.gold,
            silver: medals.silver,
            bronze: medals.bronze,
            total: medals.total(),
        }
    }

    pub fn medals(&self) -> MedalCounts {
        MedalCounts::new(self.gold, self.silver, self.bronze)
    }
}

/// Distinct count of some dimension for one edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditionCount {
    pub edition: i32,
    pub count: usize,
}

/// Medal-bearing record count for one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCount {
    pub year: i32,
    pub medal_count: usize,
}

/// Medal count for one athlete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AthleteMedals {
    pub athlete: String,
    pub medal_count: usize,
}

/// Per-athlete row for height/weight scatter plots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnthropometricRow {
    pub name: String,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub medal: Option<Medal>,
    pub sex: Sex,
}

/// Male and female athlete counts for one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SexParticipationRow {
    pub year: i32,
    pub male_count: usize,
    pub female_count: usize,
}

impl SexParticipationRow {
    pub fn count(&self, sex: Sex) -> usize {
        match sex {
            Sex::Male => self.male_count,
            Sex::Female => self.female_count,
        }
    }
}

/// Headline counts for the whole dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewStats {
    pub editions: usize,
    pub host_cities: usize,
    pub sports: usize,
    pub events: usize,
    pub nations: usize,
    pub athletes: usize,
}

/// Ages of distinct athletes, overall and split by the medal they carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeDistributions {
    pub overall: Vec<u32>,
    pub gold: Vec<u32>,
    pub silver: Vec<u32>,
    pub bronze: Vec<u32>,
}

impl AgeDistributions {
    pub fn for_medal(&self, medal: Medal) -> &[u32] {
        match medal {
            Medal::Gold => &self.gold,
            Medal::Silver => &self.silver,
            Medal::Bronze => &self.bronze,
        }
    }

    /// Median of an ascending age list; the two middle values are averaged
    /// for even lengths.
    pub fn median(ages: &[u32]) -> Option<f64> {
        let mid = ages.len() / 2;
        match ages.len() {
            0 => None,
            len if len % 2 == 1 => ages.get(mid).map(|&age| f64::from(age)),
            _ => Some((f64::from(ages[mid - 1]) + f64::from(ages[mid])) / 2.0),
        }
    }
}

/// A dense cross-tabulation: one row per label, one column per year.
///
/// Rows and columns only include keys that occur in the input; every other
/// cell is zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heatmap {
    pub rows: Vec<String>,
    pub columns: Vec<i32>,
    pub cells: Vec<Vec<u64>>,
}

impl Heatmap {
    /// Build a heatmap from sparse `(row, column) -> count` entries.
    pub fn from_counts(counts: &BTreeMap<(String, i32), u64>) -> Self {
        let rows: Vec<String> = {
            let mut rows: Vec<String> = counts.keys().map(|(row, _)| row.clone()).collect();
            rows.dedup();
            rows
        };
        let columns: Vec<i32> = {
            let mut columns: Vec<i32> = counts.keys().map(|(_, column)| *column).collect();
            columns.sort_unstable();
            columns.dedup();
            columns
        };
        let cells = rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|column| {
                        counts
                            .get(&(row.clone(), *column))
                            .copied()
                            .unwrap_or(0)
                    })
                    .collect()
            })
            .collect();
        Self {
            rows,
            columns,
            cells,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell value by label; zero for labels that are not present.
    pub fn get(&self, row: &str, column: i32) -> u64 {
        let Some(row_idx) = self.rows.iter().position(|r| r == row) else {
            return 0;
        };
        let Ok(col_idx) = self.columns.binary_search(&column) else {
            return 0;
        };
        self.cells
            .get(row_idx)
            .and_then(|cells| cells.get(col_idx))
            .copied()
            .unwrap_or(0)
    }

    pub fn row_total(&self, row: &str) -> u64 {
        self.rows
            .iter()
            .position(|r| r == row)
            .and_then(|idx| self.cells.get(idx))
            .map(|cells| cells.iter().sum())
            .unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.cells.iter().flatten().sum()
    }
}

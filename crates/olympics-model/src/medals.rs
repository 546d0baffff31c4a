//! Gold/Silver/Bronze counters.

use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::Medal;

/// Per-medal counts.
///
/// A single record carries one of these as its indicator columns (exactly one
/// field set to 1 when the record won a medal); aggregations sum them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MedalCounts {
    pub gold: u64,
    pub silver: u64,
    pub bronze: u64,
}

impl MedalCounts {
    pub const ZERO: MedalCounts = MedalCounts {
        gold: 0,
        silver: 0,
        bronze: 0,
    };

    pub fn new(gold: u64, silver: u64, bronze: u64) -> Self {
        Self {
            gold,
            silver,
            bronze,
        }
    }

    /// Indicator triple for a medal outcome.
    pub fn indicator(medal: Option<Medal>) -> Self {
        match medal {
            Some(Medal::Gold) => Self::new(1, 0, 0),
            Some(Medal::Silver) => Self::new(0, 1, 0),
            Some(Medal::Bronze) => Self::new(0, 0, 1),
            None => Self::ZERO,
        }
    }

    pub fn total(&self) -> u64 {
        self.gold + self.silver + self.bronze
    }

    pub fn is_zero(&self) -> bool {
        self.total() == 0
    }

    pub fn get(&self, medal: Medal) -> u64 {
        match medal {
            Medal::Gold => self.gold,
            Medal::Silver => self.silver,
            Medal::Bronze => self.bronze,
        }
    }
}

impl Add for MedalCounts {
    type Output = MedalCounts;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.gold + rhs.gold,
            self.silver + rhs.silver,
            self.bronze + rhs.bronze,
        )
    }
}

impl AddAssign for MedalCounts {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

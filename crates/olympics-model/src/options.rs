//! Configuration options for normalization and queries.

use serde::{Deserialize, Serialize};

use crate::Season;

/// Options controlling how the raw athlete table is normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeOptions {
    /// Season to retain; `None` keeps every season.
    ///
    /// The dashboard analyses Summer Games only, so that is the default.
    pub season: Option<Season>,

    /// Collapse rows that are identical in every column to their first
    /// occurrence.
    pub drop_duplicate_rows: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            season: Some(Season::Summer),
            drop_duplicate_rows: true,
        }
    }
}

impl NormalizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_season(mut self, season: Option<Season>) -> Self {
        self.season = season;
        self
    }

    pub fn with_drop_duplicate_rows(mut self, enable: bool) -> Self {
        self.drop_duplicate_rows = enable;
        self
    }
}

/// Row limits for the ranked athlete lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryLimits {
    /// Rows returned by the sport-scoped most-successful-athletes list.
    pub sport_top_athletes: usize,
    /// Rows returned by the country-scoped most-successful-athletes list.
    pub country_top_athletes: usize,
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self {
            sport_top_athletes: 15,
            country_top_athletes: 10,
        }
    }
}

//! Edition-level participation counts and headline statistics.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use olympics_model::{AthleteRecord, EditionCount, Heatmap, NormalizedDataset, OverviewStats};

use crate::dedupe::dedupe_by;

/// Column whose distinct values are counted per edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticipationDimension {
    /// Participating nations (records without a region are not counted).
    Region,
    Event,
    /// Athletes, by name.
    Athlete,
}

impl ParticipationDimension {
    pub const ALL: [ParticipationDimension; 3] = [
        ParticipationDimension::Region,
        ParticipationDimension::Event,
        ParticipationDimension::Athlete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ParticipationDimension::Region => "region",
            ParticipationDimension::Event => "event",
            ParticipationDimension::Athlete => "athlete",
        }
    }

    fn value<'a>(&self, record: &'a AthleteRecord) -> Option<&'a str> {
        match self {
            ParticipationDimension::Region => record.region(),
            ParticipationDimension::Event => Some(&record.event),
            ParticipationDimension::Athlete => Some(&record.name),
        }
    }
}

impl fmt::Display for ParticipationDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ParticipationDimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "region" | "nation" | "nations" | "country" => Ok(ParticipationDimension::Region),
            "event" | "events" => Ok(ParticipationDimension::Event),
            "athlete" | "athletes" | "name" => Ok(ParticipationDimension::Athlete),
            _ => Err(format!("unknown participation dimension: {s}")),
        }
    }
}

/// Distinct values of `dimension` per edition, editions ascending.
///
/// Repeated appearances of a value within the same year count once.
pub fn participation_over_time(
    dataset: &NormalizedDataset,
    dimension: ParticipationDimension,
) -> Vec<EditionCount> {
    let mut per_year: BTreeMap<i32, HashSet<&str>> = BTreeMap::new();
    for record in dataset {
        if let Some(value) = dimension.value(record) {
            per_year.entry(record.year).or_default().insert(value);
        }
    }
    let rows: Vec<EditionCount> = per_year
        .into_iter()
        .map(|(edition, values)| EditionCount {
            edition,
            count: values.len(),
        })
        .collect();
    debug!(%dimension, editions = rows.len(), "participation over time computed");
    rows
}

/// Number of distinct events per sport and edition.
pub fn events_per_sport_heatmap(dataset: &NormalizedDataset) -> Heatmap {
    let events = dedupe_by(dataset, |record| {
        (record.year, record.sport.as_str(), record.event.as_str())
    });
    let mut counts: BTreeMap<(String, i32), u64> = BTreeMap::new();
    for record in events {
        *counts.entry((record.sport.clone(), record.year)).or_default() += 1;
    }
    let heatmap = Heatmap::from_counts(&counts);
    debug!(
        sports = heatmap.rows.len(),
        editions = heatmap.columns.len(),
        "events per sport computed"
    );
    heatmap
}

/// Headline counts: editions, host cities, sports, events, nations, athletes.
///
/// Nations counts distinct regions; records without a region are ignored.
pub fn overview_stats(dataset: &NormalizedDataset) -> OverviewStats {
    let mut editions = HashSet::new();
    let mut cities = HashSet::new();
    let mut sports = HashSet::new();
    let mut events = HashSet::new();
    let mut nations = HashSet::new();
    let mut athletes = HashSet::new();
    for record in dataset {
        editions.insert(record.year);
        cities.insert(record.city.as_str());
        sports.insert(record.sport.as_str());
        events.insert(record.event.as_str());
        if let Some(region) = record.region() {
            nations.insert(region);
        }
        athletes.insert(record.name.as_str());
    }
    let stats = OverviewStats {
        editions: editions.len(),
        host_cities: cities.len(),
        sports: sports.len(),
        events: events.len(),
        nations: nations.len(),
        athletes: athletes.len(),
    };
    debug!(?stats, "overview computed");
    stats
}

//! Per-country medal history.
//!
//! These queries count medal-bearing records as they appear in the dataset,
//! without the team-medal deduplication used by the medal tally: a team gold
//! counts once per team member here.

use std::collections::BTreeMap;

use tracing::debug;

use olympics_model::{Heatmap, NormalizedDataset, Selection, YearCount};

use crate::filter::RecordFilter;

fn country_medalists(country: &str) -> RecordFilter<'_> {
    RecordFilter::new()
        .medalists_only()
        .region(Selection::Only(country))
}

/// Medal-bearing records of `country` per year, years ascending.
pub fn yearwise_medal_count(dataset: &NormalizedDataset, country: &str) -> Vec<YearCount> {
    let filter = country_medalists(country);
    let mut per_year: BTreeMap<i32, usize> = BTreeMap::new();
    for record in filter.select(dataset) {
        *per_year.entry(record.year).or_default() += 1;
    }
    let rows: Vec<YearCount> = per_year
        .into_iter()
        .map(|(year, medal_count)| YearCount { year, medal_count })
        .collect();
    debug!(country, years = rows.len(), "yearwise medal count computed");
    rows
}

/// Medal-bearing records of `country` cross-tabulated by sport and year.
pub fn country_sport_heatmap(dataset: &NormalizedDataset, country: &str) -> Heatmap {
    let filter = country_medalists(country);
    let mut counts: BTreeMap<(String, i32), u64> = BTreeMap::new();
    for record in filter.select(dataset) {
        *counts.entry((record.sport.clone(), record.year)).or_default() += 1;
    }
    let heatmap = Heatmap::from_counts(&counts);
    debug!(
        country,
        sports = heatmap.rows.len(),
        years = heatmap.columns.len(),
        "country sport heatmap computed"
    );
    heatmap
}

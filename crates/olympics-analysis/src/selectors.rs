//! Filter choice lists for the sidebar selectors.
//!
//! Each list starts with [`Selection::Overall`] followed by the distinct
//! values present in the dataset, ascending.

use std::collections::BTreeSet;

use tracing::debug;

use olympics_model::{NormalizedDataset, Selection};

fn with_sentinel<T>(values: BTreeSet<T>) -> Vec<Selection<T>> {
    std::iter::once(Selection::Overall)
        .chain(values.into_iter().map(Selection::Only))
        .collect()
}

/// `["Overall", year, ...]`, years ascending.
pub fn list_years(dataset: &NormalizedDataset) -> Vec<Selection<i32>> {
    let years: BTreeSet<i32> = dataset.iter().map(|record| record.year).collect();
    debug!(years = years.len(), "year selector built");
    with_sentinel(years)
}

/// `["Overall", region, ...]`, regions ascending; unmapped records are skipped.
pub fn list_countries(dataset: &NormalizedDataset) -> Vec<Selection<String>> {
    let countries: BTreeSet<String> = dataset
        .iter()
        .filter_map(|record| record.region.clone())
        .collect();
    debug!(countries = countries.len(), "country selector built");
    with_sentinel(countries)
}

/// `["Overall", sport, ...]`, sports ascending.
pub fn list_sports(dataset: &NormalizedDataset) -> Vec<Selection<String>> {
    let sports: BTreeSet<String> = dataset.iter().map(|record| record.sport.clone()).collect();
    debug!(sports = sports.len(), "sport selector built");
    with_sentinel(sports)
}

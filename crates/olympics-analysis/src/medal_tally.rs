//! Medal tally per region.

use std::collections::BTreeMap;

use tracing::debug;

use olympics_model::{MedalCounts, MedalTallyRow, NormalizedDataset, Selection};

use crate::dedupe::dedupe_team_medals;
use crate::filter::RecordFilter;

/// Gold/Silver/Bronze/Total per region, filtered by year and country.
///
/// Team medals are counted once per team ([`crate::TeamMedalKey`]). Records
/// without a region are excluded. Rows are grouped by region when both
/// selections are "Overall" (`year` is `None`), otherwise by (region, year).
///
/// Rows are sorted by total, descending. The sort is stable: ties keep the
/// group order, region ascending then year ascending. Only regions with at
/// least one medal produce a row; a selection that matches nothing yields an
/// empty table.
pub fn medal_tally(
    dataset: &NormalizedDataset,
    year: Selection<i32>,
    country: Selection<&str>,
) -> Vec<MedalTallyRow> {
    let across_years = year.is_overall() && country.is_overall();
    let filter = RecordFilter::new()
        .medalists_only()
        .year(year)
        .region(country);

    let medal_rows = dedupe_team_medals(
        dataset
            .iter()
            .filter(|record| record.region.is_some() && filter.matches(record)),
    );

    let mut groups: BTreeMap<(&str, Option<i32>), MedalCounts> = BTreeMap::new();
    for record in medal_rows {
        let Some(region) = record.region() else {
            continue;
        };
        let year = (!across_years).then_some(record.year);
        *groups.entry((region, year)).or_default() += record.medals;
    }

    let mut rows: Vec<MedalTallyRow> = groups
        .into_iter()
        .map(|((region, year), medals)| MedalTallyRow::new(region, year, medals))
        .collect();
    rows.sort_by(|a, b| b.total.cmp(&a.total));

    debug!(
        year = %year,
        country = %country,
        rows = rows.len(),
        "medal tally computed"
    );
    rows
}

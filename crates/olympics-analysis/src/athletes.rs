//! Athlete-level queries: rankings and demographics.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use olympics_model::{
    AgeDistributions, AnthropometricRow, AthleteMedals, Medal, NormalizedDataset, QueryLimits,
    Selection, Sex, SexParticipationRow,
};

use crate::dedupe::{AthleteKey, dedupe_athletes, dedupe_by};
use crate::filter::RecordFilter;

/// Athletes with the most medal-bearing records, optionally restricted by
/// sport and region.
///
/// Counts are per athlete name. Rows are sorted by count, descending; ties
/// keep the order in which athletes first appear in the dataset. At most
/// `limit` rows are returned and athletes without a medal never appear.
pub fn top_athletes(
    dataset: &NormalizedDataset,
    sport: Selection<&str>,
    country: Selection<&str>,
    limit: usize,
) -> Vec<AthleteMedals> {
    let filter = RecordFilter::new()
        .medalists_only()
        .sport(sport)
        .region(country);

    let mut order: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for record in filter.select(dataset) {
        let name = record.name.as_str();
        let pos = *index.entry(name).or_insert_with(|| {
            order.push((name, 0));
            order.len() - 1
        });
        order[pos].1 += 1;
    }
    order.sort_by(|a, b| b.1.cmp(&a.1));
    order.truncate(limit);

    debug!(
        sport = %sport,
        country = %country,
        limit,
        rows = order.len(),
        "top athletes computed"
    );
    order
        .into_iter()
        .map(|(athlete, medal_count)| AthleteMedals {
            athlete: athlete.to_string(),
            medal_count,
        })
        .collect()
}

/// Most successful athletes of one sport (or overall), sized by
/// [`QueryLimits::sport_top_athletes`].
pub fn most_successful(
    dataset: &NormalizedDataset,
    sport: Selection<&str>,
    limits: &QueryLimits,
) -> Vec<AthleteMedals> {
    top_athletes(dataset, sport, Selection::Overall, limits.sport_top_athletes)
}

/// Most successful athletes of one country, sized by
/// [`QueryLimits::country_top_athletes`].
pub fn most_successful_in_country(
    dataset: &NormalizedDataset,
    country: &str,
    limits: &QueryLimits,
) -> Vec<AthleteMedals> {
    top_athletes(
        dataset,
        Selection::Overall,
        Selection::Only(country),
        limits.country_top_athletes,
    )
}

/// Height, weight, medal and sex of each distinct athlete.
///
/// Athletes are deduplicated on (name, region) across the whole dataset
/// first, keeping their first record; the sport restriction applies to that
/// record.
pub fn anthropometrics(
    dataset: &NormalizedDataset,
    sport: Selection<&str>,
) -> Vec<AnthropometricRow> {
    let filter = RecordFilter::new().sport(sport);
    let rows: Vec<AnthropometricRow> = dedupe_athletes(dataset)
        .into_iter()
        .filter(|record| filter.matches(record))
        .map(|record| AnthropometricRow {
            name: record.name.clone(),
            height: record.height,
            weight: record.weight,
            medal: record.medal,
            sex: record.sex,
        })
        .collect();
    debug!(sport = %sport, rows = rows.len(), "anthropometrics computed");
    rows
}

/// Male and female athlete counts per year, years ascending.
///
/// An athlete is a distinct (name, region) pair within a year. Every year
/// present in the dataset gets a row; a sex absent from a year counts 0.
pub fn sex_participation_over_time(dataset: &NormalizedDataset) -> Vec<SexParticipationRow> {
    let athletes = dedupe_by(dataset, |record| (record.year, AthleteKey::of(record)));
    let mut per_year: BTreeMap<i32, SexParticipationRow> = BTreeMap::new();
    for record in athletes {
        let row = per_year
            .entry(record.year)
            .or_insert_with(|| SexParticipationRow {
                year: record.year,
                male_count: 0,
                female_count: 0,
            });
        match record.sex {
            Sex::Male => row.male_count += 1,
            Sex::Female => row.female_count += 1,
        }
    }
    let rows: Vec<SexParticipationRow> = per_year.into_values().collect();
    debug!(years = rows.len(), "sex participation computed");
    rows
}

/// Ages of distinct athletes, overall and by medal, each list ascending.
///
/// Athletes are deduplicated on (name, region); the medal is that of the
/// athlete's first record. Missing ages are skipped.
pub fn age_distributions(dataset: &NormalizedDataset) -> AgeDistributions {
    let mut distributions = AgeDistributions::default();
    for record in dedupe_athletes(dataset) {
        let Some(age) = record.age else {
            continue;
        };
        distributions.overall.push(age);
        match record.medal {
            Some(Medal::Gold) => distributions.gold.push(age),
            Some(Medal::Silver) => distributions.silver.push(age),
            Some(Medal::Bronze) => distributions.bronze.push(age),
            None => {}
        }
    }
    for ages in [
        &mut distributions.overall,
        &mut distributions.gold,
        &mut distributions.silver,
        &mut distributions.bronze,
    ] {
        ages.sort_unstable();
    }
    debug!(athletes = distributions.overall.len(), "age distributions computed");
    distributions
}

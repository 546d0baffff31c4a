//! Invariants that must hold for any dataset.

mod common;

use std::collections::{BTreeMap, BTreeSet, HashSet};

use common::{Rec, dataset};
use olympics_analysis::{
    AthleteKey, ParticipationDimension, TeamMedalKey, dedupe_team_medals, list_countries,
    list_years, medal_tally, participation_over_time, sex_participation_over_time, top_athletes,
};
use olympics_model::{Medal, NormalizedDataset, Selection, Sex};
use proptest::prelude::*;
use proptest::sample::select;

const NAMES: &[&str] = &["Ada", "Bea", "Cy", "Dov", "Eli", "Fay"];
const REGIONS: &[&str] = &["Australia", "France", "Kenya", "USA"];
const YEARS: &[i32] = &[1996, 2000, 2004];
const SPORTS: &[&str] = &["Athletics", "Rowing", "Swimming"];
const EVENTS: &[&str] = &["Sprint", "Relay", "Final"];

prop_compose! {
    fn arb_record()(
        name in select(NAMES),
        region in proptest::option::weighted(0.9, select(REGIONS)),
        year in select(YEARS),
        sport in select(SPORTS),
        event in select(EVENTS),
        medal in proptest::option::of(select(Medal::ALL.to_vec())),
        female in any::<bool>(),
    ) -> Rec {
        let rec = Rec::new(name)
            .region(region)
            .year(year)
            .sport(sport)
            .event(event)
            .sex(if female { Sex::Female } else { Sex::Male });
        match medal {
            Some(medal) => rec.medal(medal),
            None => rec,
        }
    }
}

fn arb_dataset() -> impl Strategy<Value = NormalizedDataset> {
    prop::collection::vec(arb_record(), 0..40).prop_map(dataset)
}

proptest! {
    #[test]
    fn selectors_start_with_overall_then_sorted_distinct(ds in arb_dataset()) {
        let years = list_years(&ds);
        prop_assert_eq!(years.first(), Some(&Selection::Overall));
        prop_assert!(years[1..].iter().all(|year| !year.is_overall()));
        prop_assert!(years[1..].windows(2).all(|pair| pair[0] < pair[1]));

        let countries = list_countries(&ds);
        prop_assert_eq!(countries.first(), Some(&Selection::Overall));
        prop_assert!(countries[1..].windows(2).all(|pair| pair[0] < pair[1]));
        let regions: BTreeSet<&str> = ds.iter().filter_map(|record| record.region()).collect();
        prop_assert_eq!(countries.len(), regions.len() + 1);
    }

    #[test]
    fn tally_is_sorted_and_covers_every_medal_region(ds in arb_dataset()) {
        let rows = medal_tally(&ds, Selection::Overall, Selection::Overall);

        prop_assert!(rows.windows(2).all(|pair| pair[0].total >= pair[1].total));
        prop_assert!(rows.iter().all(|row| row.total == row.gold + row.silver + row.bronze));
        prop_assert!(rows.iter().all(|row| row.year.is_none()));

        let medal_regions: HashSet<&str> = ds
            .iter()
            .filter(|record| record.has_medal())
            .filter_map(|record| record.region())
            .collect();
        prop_assert_eq!(rows.len(), medal_regions.len());
    }

    #[test]
    fn tally_total_counts_team_medals_once(ds in arb_dataset()) {
        let rows = medal_tally(&ds, Selection::Overall, Selection::Overall);
        let total: u64 = rows.iter().map(|row| row.total).sum();

        let keys: HashSet<TeamMedalKey<'_>> = ds
            .iter()
            .filter(|record| record.has_medal() && record.region.is_some())
            .map(TeamMedalKey::of)
            .collect();
        prop_assert_eq!(total, keys.len() as u64);
    }

    #[test]
    fn team_dedup_is_idempotent(ds in arb_dataset()) {
        let once = dedupe_team_medals(&ds);
        let twice = dedupe_team_medals(once.iter().copied());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn nation_participation_counts_distinct_regions(ds in arb_dataset()) {
        let mut expected: BTreeMap<i32, HashSet<&str>> = BTreeMap::new();
        for record in &ds {
            if let Some(region) = record.region() {
                expected.entry(record.year).or_default().insert(region);
            }
        }

        let rows = participation_over_time(&ds, ParticipationDimension::Region);
        let actual: Vec<(i32, usize)> = rows.iter().map(|row| (row.edition, row.count)).collect();
        let expected: Vec<(i32, usize)> = expected
            .into_iter()
            .map(|(year, regions)| (year, regions.len()))
            .collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn sex_counts_sum_to_distinct_athletes(ds in arb_dataset()) {
        let mut athletes: BTreeMap<i32, HashSet<AthleteKey<'_>>> = BTreeMap::new();
        for record in &ds {
            athletes.entry(record.year).or_default().insert(AthleteKey::of(record));
        }

        let rows = sex_participation_over_time(&ds);
        prop_assert_eq!(rows.len(), athletes.len());
        for row in rows {
            let distinct = athletes.get(&row.year).map_or(0, HashSet::len);
            prop_assert_eq!(row.male_count + row.female_count, distinct);
        }
    }

    #[test]
    fn top_athletes_respects_limit_and_order(ds in arb_dataset(), limit in 0usize..8) {
        let rows = top_athletes(&ds, Selection::Overall, Selection::Overall, limit);

        prop_assert!(rows.len() <= limit);
        prop_assert!(rows.iter().all(|row| row.medal_count > 0));
        prop_assert!(rows.windows(2).all(|pair| pair[0].medal_count >= pair[1].medal_count));
    }
}

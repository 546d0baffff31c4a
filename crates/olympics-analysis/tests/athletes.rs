//! Tests for athlete-level queries.

mod common;

use common::{Rec, dataset};
use olympics_analysis::{
    age_distributions, anthropometrics, most_successful, most_successful_in_country,
    sex_participation_over_time, top_athletes,
};
use olympics_model::{Medal, NormalizedDataset, QueryLimits, Selection, Sex, SexParticipationRow};

fn ranking_fixture() -> NormalizedDataset {
    dataset(vec![
        Rec::new("Phelps").medal(Medal::Gold),
        Rec::new("Phelps").event("200m").medal(Medal::Gold),
        Rec::new("Phelps").event("400m").medal(Medal::Silver),
        Rec::new("Thorpe")
            .region(Some("Australia"))
            .medal(Medal::Gold),
        Rec::new("Thorpe")
            .region(Some("Australia"))
            .event("200m")
            .medal(Medal::Bronze),
        Rec::new("Bolt")
            .region(Some("Jamaica"))
            .sport("Athletics")
            .medal(Medal::Gold),
        Rec::new("Lewis")
            .sport("Athletics")
            .medal(Medal::Gold),
        Rec::new("Nobody"),
    ])
}

fn ranking(rows: &[olympics_model::AthleteMedals]) -> Vec<(&str, usize)> {
    rows.iter()
        .map(|row| (row.athlete.as_str(), row.medal_count))
        .collect()
}

#[test]
fn ranks_by_medal_count() {
    let rows = top_athletes(&ranking_fixture(), Selection::Overall, Selection::Overall, 15);
    // Bolt and Lewis tie; Bolt appears first in the dataset
    assert_eq!(
        ranking(&rows),
        vec![("Phelps", 3), ("Thorpe", 2), ("Bolt", 1), ("Lewis", 1)]
    );
}

#[test]
fn limit_truncates() {
    let rows = top_athletes(&ranking_fixture(), Selection::Overall, Selection::Overall, 2);
    assert_eq!(ranking(&rows), vec![("Phelps", 3), ("Thorpe", 2)]);
    assert!(top_athletes(&ranking_fixture(), Selection::Overall, Selection::Overall, 0).is_empty());
}

#[test]
fn restricts_by_sport_and_country() {
    let ds = ranking_fixture();

    let athletics = top_athletes(&ds, Selection::Only("Athletics"), Selection::Overall, 15);
    assert_eq!(ranking(&athletics), vec![("Bolt", 1), ("Lewis", 1)]);

    let usa = top_athletes(&ds, Selection::Overall, Selection::Only("USA"), 15);
    assert_eq!(ranking(&usa), vec![("Phelps", 3), ("Lewis", 1)]);

    let both = top_athletes(&ds, Selection::Only("Athletics"), Selection::Only("Jamaica"), 15);
    assert_eq!(ranking(&both), vec![("Bolt", 1)]);
}

#[test]
fn medal_less_athletes_never_rank() {
    let rows = top_athletes(&ranking_fixture(), Selection::Overall, Selection::Overall, 100);
    assert!(rows.iter().all(|row| row.athlete != "Nobody"));
    assert!(rows.iter().all(|row| row.medal_count > 0));
}

#[test]
fn configured_limits_apply() {
    let ds = dataset(
        (0..20)
            .map(|idx| {
                Rec::new(&format!("Athlete {idx:02}"))
                    .event(&format!("Event {idx}"))
                    .medal(Medal::Bronze)
            })
            .collect(),
    );
    let limits = QueryLimits::default();

    assert_eq!(most_successful(&ds, Selection::Overall, &limits).len(), 15);
    assert_eq!(most_successful_in_country(&ds, "USA", &limits).len(), 10);
    assert!(most_successful_in_country(&ds, "France", &limits).is_empty());
}

#[test]
fn anthropometrics_dedupes_before_sport_filter() {
    let ds = dataset(vec![
        Rec::new("Versatile").sport("Swimming").body(190.0, 85.0),
        Rec::new("Versatile").sport("Water Polo").body(190.0, 85.0),
        Rec::new("Polo Player")
            .sport("Water Polo")
            .sex(Sex::Female)
            .body(175.0, 70.0)
            .medal(Medal::Silver),
        Rec::new("Versatile").region(Some("Canada")).sport("Water Polo"),
    ]);

    let all = anthropometrics(&ds, Selection::Overall);
    assert_eq!(all.len(), 3);

    let polo = anthropometrics(&ds, Selection::Only("Water Polo"));
    let names: Vec<&str> = polo.iter().map(|row| row.name.as_str()).collect();
    // the USA "Versatile" is kept by its first (Swimming) record only
    assert_eq!(names, vec!["Polo Player", "Versatile"]);
    assert_eq!(polo[0].medal, Some(Medal::Silver));
    assert_eq!(polo[0].sex, Sex::Female);
    assert_eq!(polo[0].height, Some(175.0));
    assert_eq!(polo[1].height, None);
}

#[test]
fn sex_participation_fills_missing_sex_with_zero() {
    let ds = dataset(vec![
        Rec::new("Pioneer").year(1896),
        Rec::new("Pioneer").year(1896).event("Other"),
        Rec::new("Charlotte Cooper").year(1900).sex(Sex::Female),
        Rec::new("Pioneer").year(1900),
        Rec::new("Pioneer").region(Some("France")).year(1900),
        Rec::new("Solo Female").year(1904).sex(Sex::Female),
    ]);

    let rows = sex_participation_over_time(&ds);

    assert_eq!(
        rows,
        vec![
            SexParticipationRow {
                year: 1896,
                male_count: 1,
                female_count: 0
            },
            SexParticipationRow {
                year: 1900,
                male_count: 2,
                female_count: 1
            },
            SexParticipationRow {
                year: 1904,
                male_count: 0,
                female_count: 1
            },
        ]
    );
}

#[test]
fn age_distributions_use_distinct_athletes() {
    let ds = dataset(vec![
        Rec::new("Young").age(18).medal(Medal::Gold),
        Rec::new("Young").age(22).year(2004).medal(Medal::Silver),
        Rec::new("Veteran").age(35).medal(Medal::Bronze),
        Rec::new("Unknown Age").medal(Medal::Gold),
        Rec::new("Finalist").age(25),
    ]);

    let ages = age_distributions(&ds);

    assert_eq!(ages.overall, vec![18, 25, 35]);
    assert_eq!(ages.for_medal(Medal::Gold), &[18]);
    assert!(ages.silver.is_empty());
    assert_eq!(ages.bronze, vec![35]);
}

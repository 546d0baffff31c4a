//! Report assembly: one aggregation call per table.
//!
//! Every report is a plain serializable struct so the same value can be
//! rendered as terminal tables or printed as JSON.

use serde::Serialize;
use tracing::warn;

use olympics_analysis::{
    ParticipationDimension, age_distributions, anthropometrics, country_sport_heatmap,
    events_per_sport_heatmap, list_countries, list_sports, list_years, medal_tally,
    most_successful, most_successful_in_country, overview_stats, participation_over_time,
    sex_participation_over_time, yearwise_medal_count,
};
use olympics_model::{
    AgeDistributions, AnthropometricRow, AthleteMedals, EditionCount, Heatmap, MedalTallyRow,
    NormalizedDataset, OverviewStats, QueryLimits, Selection, SexParticipationRow, YearCount,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TallyReport {
    pub year: Selection<i32>,
    pub country: Selection<String>,
    pub rows: Vec<MedalTallyRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewReport {
    pub stats: OverviewStats,
    pub nations_over_time: Vec<EditionCount>,
    pub events_over_time: Vec<EditionCount>,
    pub athletes_over_time: Vec<EditionCount>,
    pub events_per_sport: Heatmap,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryReport {
    pub country: String,
    pub medals_per_year: Vec<YearCount>,
    pub sport_heatmap: Heatmap,
    pub top_athletes: Vec<AthleteMedals>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AthletesReport {
    pub sport: Selection<String>,
    pub top_athletes: Vec<AthleteMedals>,
    pub anthropometrics: Vec<AnthropometricRow>,
    pub sex_participation: Vec<SexParticipationRow>,
    pub ages: AgeDistributions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectorsReport {
    pub years: Vec<Selection<i32>>,
    pub countries: Vec<Selection<String>>,
    pub sports: Vec<Selection<String>>,
}

pub fn tally_report(
    dataset: &NormalizedDataset,
    year: Selection<i32>,
    country: Selection<String>,
) -> TallyReport {
    let rows = medal_tally(dataset, year, country.as_deref());
    TallyReport {
        year,
        country,
        rows,
    }
}

pub fn overview_report(dataset: &NormalizedDataset) -> OverviewReport {
    let over_time = |dimension| participation_over_time(dataset, dimension);
    OverviewReport {
        stats: overview_stats(dataset),
        nations_over_time: over_time(ParticipationDimension::Region),
        events_over_time: over_time(ParticipationDimension::Event),
        athletes_over_time: over_time(ParticipationDimension::Athlete),
        events_per_sport: events_per_sport_heatmap(dataset),
    }
}

/// Medal history of one country. An unknown country yields empty tables.
pub fn country_report(
    dataset: &NormalizedDataset,
    country: &str,
    limits: &QueryLimits,
) -> CountryReport {
    if !dataset.iter().any(|record| record.region() == Some(country)) {
        warn!(country, "country not present in the dataset");
    }
    CountryReport {
        country: country.to_string(),
        medals_per_year: yearwise_medal_count(dataset, country),
        sport_heatmap: country_sport_heatmap(dataset, country),
        top_athletes: most_successful_in_country(dataset, country, limits),
    }
}

pub fn athletes_report(
    dataset: &NormalizedDataset,
    sport: Selection<String>,
    limits: &QueryLimits,
) -> AthletesReport {
    let sport_ref = sport.as_deref();
    AthletesReport {
        top_athletes: most_successful(dataset, sport_ref, limits),
        anthropometrics: anthropometrics(dataset, sport_ref),
        sex_participation: sex_participation_over_time(dataset),
        ages: age_distributions(dataset),
        sport,
    }
}

pub fn selectors_report(dataset: &NormalizedDataset) -> SelectorsReport {
    SelectorsReport {
        years: list_years(dataset),
        countries: list_countries(dataset),
        sports: list_sports(dataset),
    }
}

//! Aggregation engine over the normalized Olympic Games dataset.
//!
//! Every query is a pure function of a [`olympics_model::NormalizedDataset`]
//! and explicit filter values. Queries never fail: a selection that matches
//! nothing yields an empty table.
//!
//! - **selectors**: year/country/sport choice lists with the "Overall" sentinel
//! - **medal_tally**: Gold/Silver/Bronze/Total per region
//! - **participation**: distinct nations/events/athletes per edition, overview stats
//! - **country**: per-country medal history
//! - **athletes**: rankings, anthropometrics, sex participation, ages
//! - **filter** / **dedupe**: the predicate combinator and deduplication keys

pub mod athletes;
pub mod country;
pub mod dedupe;
pub mod filter;
pub mod medal_tally;
pub mod participation;
pub mod selectors;

pub use athletes::{
    age_distributions, anthropometrics, most_successful, most_successful_in_country,
    sex_participation_over_time, top_athletes,
};
pub use country::{country_sport_heatmap, yearwise_medal_count};
pub use dedupe::{AthleteKey, TeamMedalKey, dedupe_athletes, dedupe_by, dedupe_team_medals};
pub use filter::RecordFilter;
pub use medal_tally::medal_tally;
pub use participation::{
    ParticipationDimension, events_per_sport_heatmap, overview_stats, participation_over_time,
};
pub use selectors::{list_countries, list_sports, list_years};

//! Deduplication keys.
//!
//! Team events award one medal per team, but the dataset has one row per
//! team member. Medal tallies collapse rows on [`TeamMedalKey`] before summing;
//! athlete-level demographics collapse on [`AthleteKey`].

use std::collections::HashSet;
use std::hash::Hash;

use olympics_model::{AthleteRecord, Medal};

/// (Team, NOC, Games, Year, City, Sport, Event, Medal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TeamMedalKey<'a> {
    pub team: &'a str,
    pub noc: &'a str,
    pub games: &'a str,
    pub year: i32,
    pub city: &'a str,
    pub sport: &'a str,
    pub event: &'a str,
    pub medal: Option<Medal>,
}

impl<'a> TeamMedalKey<'a> {
    pub fn of(record: &'a AthleteRecord) -> Self {
        Self {
            team: &record.team,
            noc: &record.noc,
            games: &record.games,
            year: record.year,
            city: &record.city,
            sport: &record.sport,
            event: &record.event,
            medal: record.medal,
        }
    }
}

/// (Name, region): one athlete, however many events or editions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AthleteKey<'a> {
    pub name: &'a str,
    pub region: Option<&'a str>,
}

impl<'a> AthleteKey<'a> {
    pub fn of(record: &'a AthleteRecord) -> Self {
        Self {
            name: &record.name,
            region: record.region(),
        }
    }
}

/// Keep the first record for each key, preserving input order.
pub fn dedupe_by<'a, I, K, F>(records: I, key: F) -> Vec<&'a AthleteRecord>
where
    I: IntoIterator<Item = &'a AthleteRecord>,
    K: Eq + Hash,
    F: Fn(&'a AthleteRecord) -> K,
{
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| seen.insert(key(*record)))
        .collect()
}

/// Collapse team members sharing a [`TeamMedalKey`].
pub fn dedupe_team_medals<'a, I>(records: I) -> Vec<&'a AthleteRecord>
where
    I: IntoIterator<Item = &'a AthleteRecord>,
{
    dedupe_by(records, TeamMedalKey::of)
}

/// One record per [`AthleteKey`].
pub fn dedupe_athletes<'a, I>(records: I) -> Vec<&'a AthleteRecord>
where
    I: IntoIterator<Item = &'a AthleteRecord>,
{
    dedupe_by(records, AthleteKey::of)
}

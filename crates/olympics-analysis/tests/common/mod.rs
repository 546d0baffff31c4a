//! Synthetic dataset builders shared by the integration tests.

#![allow(dead_code)]

use olympics_model::{AthleteRecord, Medal, MedalCounts, NormalizedDataset, Season, Sex};

/// Builder for one athlete-event row with sensible defaults.
#[derive(Debug, Clone)]
pub struct Rec(AthleteRecord);

impl Rec {
    pub fn new(name: &str) -> Self {
        Self(AthleteRecord {
            id: None,
            name: name.to_string(),
            sex: Sex::Male,
            age: None,
            height: None,
            weight: None,
            team: "USA".to_string(),
            noc: "USA".to_string(),
            region: Some("USA".to_string()),
            games: "2000 Summer".to_string(),
            year: 2000,
            season: Season::Summer,
            city: "Sydney".to_string(),
            sport: "Swimming".to_string(),
            event: "Swimming Men's 100 metres Freestyle".to_string(),
            medal: None,
            medals: MedalCounts::ZERO,
        })
    }

    /// Sets region, team and a NOC code derived from the region name.
    pub fn region(mut self, region: Option<&str>) -> Self {
        match region {
            Some(region) => {
                self.0.noc = region.chars().take(3).collect::<String>().to_uppercase();
                self.0.team = region.to_string();
                self.0.region = Some(region.to_string());
            }
            None => {
                self.0.noc = "UNK".to_string();
                self.0.team = "Unknown".to_string();
                self.0.region = None;
            }
        }
        self
    }

    pub fn team(mut self, team: &str) -> Self {
        self.0.team = team.to_string();
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.0.year = year;
        self.0.games = format!("{year} Summer");
        self
    }

    pub fn sex(mut self, sex: Sex) -> Self {
        self.0.sex = sex;
        self
    }

    pub fn sport(mut self, sport: &str) -> Self {
        self.0.sport = sport.to_string();
        self
    }

    pub fn event(mut self, event: &str) -> Self {
        self.0.event = event.to_string();
        self
    }

    pub fn medal(mut self, medal: Medal) -> Self {
        self.0.medal = Some(medal);
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.0.age = Some(age);
        self
    }

    pub fn body(mut self, height: f64, weight: f64) -> Self {
        self.0.height = Some(height);
        self.0.weight = Some(weight);
        self
    }

    pub fn build(self) -> AthleteRecord {
        self.0
    }
}

pub fn dataset(records: Vec<Rec>) -> NormalizedDataset {
    NormalizedDataset::from_records(records.into_iter().map(Rec::build).collect())
}

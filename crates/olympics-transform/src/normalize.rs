//! Dataset normalization.
//!
//! Turns the raw, text-typed athlete table into the immutable
//! [`NormalizedDataset`]: schema enforcement, season filtering, region
//! resolution, medal indicator columns and exact-duplicate removal.

use std::collections::{BTreeSet, HashSet};

use polars::prelude::DataFrame;
use tracing::{info, info_span, warn};

use olympics_ingest::{parse_f64, parse_i64};
use olympics_model::{
    AthleteRecord, Medal, MedalCounts, NormalizeOptions, NormalizedDataset, Season, Sex,
};

use crate::columns::{
    AGE, ATHLETE_EVENTS, CITY, EVENT, GAMES, HEIGHT, ID, MEDAL, NAME, NOC, REQUIRED_EVENT_COLUMNS,
    SEASON, SEX, SPORT, TEAM, TextColumn, WEIGHT, YEAR,
};
use crate::error::{DataIntegrityError, Result};
use crate::regions::RegionLookup;

/// Counters reported after normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    pub rows_read: usize,
    pub season_dropped: usize,
    pub duplicates_dropped: usize,
    pub unmapped_nocs: usize,
    pub rows_kept: usize,
}

/// Columns of the athlete table bound once per normalization.
struct EventColumns<'a> {
    id: TextColumn<'a>,
    name: TextColumn<'a>,
    sex: TextColumn<'a>,
    age: TextColumn<'a>,
    height: TextColumn<'a>,
    weight: TextColumn<'a>,
    team: TextColumn<'a>,
    noc: TextColumn<'a>,
    games: TextColumn<'a>,
    year: TextColumn<'a>,
    season: TextColumn<'a>,
    city: TextColumn<'a>,
    sport: TextColumn<'a>,
    event: TextColumn<'a>,
    medal: TextColumn<'a>,
}

impl<'a> EventColumns<'a> {
    fn bind(df: &'a DataFrame) -> Result<Self> {
        for column in REQUIRED_EVENT_COLUMNS {
            if df.column(column).is_err() {
                return Err(DataIntegrityError::MissingColumn {
                    table: ATHLETE_EVENTS,
                    column,
                });
            }
        }
        let required = |name: &'static str| TextColumn::required(df, ATHLETE_EVENTS, name);
        Ok(Self {
            id: TextColumn::optional(df, ID),
            name: required(NAME)?,
            sex: required(SEX)?,
            age: TextColumn::optional(df, AGE),
            height: TextColumn::optional(df, HEIGHT),
            weight: TextColumn::optional(df, WEIGHT),
            team: required(TEAM)?,
            noc: required(NOC)?,
            games: required(GAMES)?,
            year: required(YEAR)?,
            season: TextColumn::optional(df, SEASON),
            city: required(CITY)?,
            sport: required(SPORT)?,
            event: required(EVENT)?,
            medal: required(MEDAL)?,
        })
    }

    /// Season from the `Season` column, split out of the games label when the
    /// column is absent or empty.
    fn season(&self, idx: usize, games: &str) -> Result<Season> {
        if let Some(raw) = self.season.text(idx) {
            return raw.parse().map_err(|_| DataIntegrityError::InvalidValue {
                column: SEASON,
                row: idx + 1,
                value: raw,
            });
        }
        Season::from_games_label(games).ok_or_else(|| DataIntegrityError::InvalidValue {
            column: GAMES,
            row: idx + 1,
            value: games.to_string(),
        })
    }

    /// Parse one row. Region is resolved later.
    fn record(&self, idx: usize) -> Result<AthleteRecord> {
        let invalid = |column: &'static str, value: String| DataIntegrityError::InvalidValue {
            column,
            row: idx + 1,
            value,
        };

        let sex_raw = self.sex.require(idx)?;
        let sex: Sex = sex_raw.parse().map_err(|_| invalid(SEX, sex_raw.clone()))?;
        let year_raw = self.year.require(idx)?;
        let year = parse_i64(&year_raw)
            .and_then(|v| i32::try_from(v).ok())
            .ok_or_else(|| invalid(YEAR, year_raw.clone()))?;
        let games = self.games.require(idx)?;
        let season = self.season(idx, &games)?;
        let medal = self.medal.parse_optional(idx, |raw| raw.parse::<Medal>().ok())?;

        Ok(AthleteRecord {
            id: self
                .id
                .parse_optional(idx, |raw| parse_i64(raw).and_then(|v| u64::try_from(v).ok()))?,
            name: self.name.require(idx)?,
            sex,
            age: self
                .age
                .parse_optional(idx, |raw| parse_i64(raw).and_then(|v| u32::try_from(v).ok()))?,
            height: self.height.parse_optional(idx, parse_f64)?,
            weight: self.weight.parse_optional(idx, parse_f64)?,
            team: self.team.require(idx)?,
            noc: self.noc.require(idx)?,
            region: None,
            games,
            year,
            season,
            city: self.city.require(idx)?,
            sport: self.sport.require(idx)?,
            event: self.event.require(idx)?,
            medal,
            medals: MedalCounts::indicator(medal),
        })
    }
}

/// Normalize the raw athlete table against the region lookup.
///
/// Records whose NOC code has no region keep `region = None`; they are still
/// part of the dataset for sport and event level queries.
///
/// # Errors
///
/// Returns [`DataIntegrityError`] when a required column is absent, a required
/// cell is empty, or a typed cell does not parse.
pub fn normalize(
    raw: &DataFrame,
    regions: &RegionLookup,
    options: &NormalizeOptions,
) -> Result<NormalizedDataset> {
    normalize_with_stats(raw, regions, options).map(|(dataset, _)| dataset)
}

/// [`normalize`], also returning the counters it logs.
pub fn normalize_with_stats(
    raw: &DataFrame,
    regions: &RegionLookup,
    options: &NormalizeOptions,
) -> Result<(NormalizedDataset, NormalizeStats)> {
    let span = info_span!("normalize", rows = raw.height(), season = ?options.season);
    let _guard = span.enter();

    let columns = EventColumns::bind(raw)?;
    if !columns.season.is_present() {
        info!("no Season column, deriving season from the games label");
    }

    let mut stats = NormalizeStats {
        rows_read: raw.height(),
        ..NormalizeStats::default()
    };
    let mut unmapped: BTreeSet<String> = BTreeSet::new();
    let mut records = Vec::with_capacity(raw.height());

    for idx in 0..raw.height() {
        let mut record = columns.record(idx)?;
        if options.season.is_some_and(|season| season != record.season) {
            stats.season_dropped += 1;
            continue;
        }
        record.region = regions.resolve(&record.noc).map(str::to_string);
        if !regions.contains(&record.noc) {
            unmapped.insert(record.noc.clone());
        }
        records.push(record);
    }

    if options.drop_duplicate_rows {
        let before = records.len();
        records = drop_duplicate_rows(records);
        stats.duplicates_dropped = before - records.len();
    }

    stats.unmapped_nocs = unmapped.len();
    stats.rows_kept = records.len();
    if !unmapped.is_empty() {
        warn!(
            count = unmapped.len(),
            codes = ?unmapped,
            "NOC codes without a region mapping"
        );
    }
    info!(
        rows_read = stats.rows_read,
        rows_kept = stats.rows_kept,
        season_dropped = stats.season_dropped,
        duplicates_dropped = stats.duplicates_dropped,
        "normalization complete"
    );

    Ok((NormalizedDataset::from_records(records), stats))
}

type RowIdentity<'a> = (
    (Option<u64>, &'a str, Sex, Option<u32>, Option<u64>, Option<u64>),
    (&'a str, &'a str, &'a str, i32, Season, &'a str),
    (&'a str, &'a str, Option<Medal>),
);

/// Every source column of a record. Region is derived from the NOC code and
/// adds nothing.
fn row_identity(record: &AthleteRecord) -> RowIdentity<'_> {
    (
        (
            record.id,
            record.name.as_str(),
            record.sex,
            record.age,
            record.height.map(f64::to_bits),
            record.weight.map(f64::to_bits),
        ),
        (
            record.team.as_str(),
            record.noc.as_str(),
            record.games.as_str(),
            record.year,
            record.season,
            record.city.as_str(),
        ),
        (record.sport.as_str(), record.event.as_str(), record.medal),
    )
}

/// Keep the first occurrence of each fully identical row.
fn drop_duplicate_rows(records: Vec<AthleteRecord>) -> Vec<AthleteRecord> {
    let keep: Vec<bool> = {
        let mut seen = HashSet::with_capacity(records.len());
        records
            .iter()
            .map(|record| seen.insert(row_identity(record)))
            .collect()
    };
    records
        .into_iter()
        .zip(keep)
        .filter_map(|(record, keep)| keep.then_some(record))
        .collect()
}

//! Column names of the two input files and text access to their cells.

use polars::prelude::{AnyValue, Column, DataFrame};

use olympics_ingest::any_to_string_non_empty;

use crate::error::{DataIntegrityError, Result};

pub const ID: &str = "ID";
pub const NAME: &str = "Name";
pub const SEX: &str = "Sex";
pub const AGE: &str = "Age";
pub const HEIGHT: &str = "Height";
pub const WEIGHT: &str = "Weight";
pub const TEAM: &str = "Team";
pub const NOC: &str = "NOC";
pub const GAMES: &str = "Games";
pub const YEAR: &str = "Year";
pub const SEASON: &str = "Season";
pub const CITY: &str = "City";
pub const SPORT: &str = "Sport";
pub const EVENT: &str = "Event";
pub const MEDAL: &str = "Medal";

pub const REGION: &str = "region";
pub const NOTES: &str = "notes";

/// Columns the athlete table must carry. `Season` is derived from `Games`
/// when absent; `ID`, `Age`, `Height` and `Weight` may be absent.
pub const REQUIRED_EVENT_COLUMNS: [&str; 10] =
    [NAME, SEX, TEAM, NOC, GAMES, YEAR, CITY, SPORT, EVENT, MEDAL];

pub const ATHLETE_EVENTS: &str = "athlete events";
pub const NOC_REGIONS: &str = "region lookup";

/// A column read as trimmed text, absent columns reading as all-missing.
pub(crate) struct TextColumn<'a> {
    pub name: &'static str,
    column: Option<&'a Column>,
}

impl<'a> TextColumn<'a> {
    /// Bind a required column, failing when it is absent.
    pub fn required(df: &'a DataFrame, table: &'static str, name: &'static str) -> Result<Self> {
        let column = df
            .column(name)
            .map_err(|_| DataIntegrityError::MissingColumn {
                table,
                column: name,
            })?;
        Ok(Self {
            name,
            column: Some(column),
        })
    }

    /// Bind an optional column.
    pub fn optional(df: &'a DataFrame, name: &'static str) -> Self {
        Self {
            name,
            column: df.column(name).ok(),
        }
    }

    pub fn is_present(&self) -> bool {
        self.column.is_some()
    }

    /// Cell text at `idx`, `None` for null, empty or `NA`.
    pub fn text(&self, idx: usize) -> Option<String> {
        let value = self.column?.get(idx).unwrap_or(AnyValue::Null);
        any_to_string_non_empty(value)
    }

    /// Cell text at `idx`, failing when missing. `row` is 1-based for messages.
    pub fn require(&self, idx: usize) -> Result<String> {
        self.text(idx).ok_or(DataIntegrityError::MissingValue {
            column: self.name,
            row: idx + 1,
        })
    }

    /// Parse an optional cell with `parse`, failing on unparsable text.
    pub fn parse_optional<T>(
        &self,
        idx: usize,
        parse: impl FnOnce(&str) -> Option<T>,
    ) -> Result<Option<T>> {
        match self.text(idx) {
            None => Ok(None),
            Some(raw) => parse(&raw)
                .map(Some)
                .ok_or_else(|| DataIntegrityError::InvalidValue {
                    column: self.name,
                    row: idx + 1,
                    value: raw,
                }),
        }
    }
}

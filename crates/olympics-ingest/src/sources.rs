//! Loaders for the two static input files.

use std::path::Path;

use polars::prelude::DataFrame;
use tracing::{info, info_span};

use crate::csv::{check_file_size, read_csv_table, validate_dataframe_shape, validate_encoding};
use crate::error::Result;

/// Default file name of the athlete events table.
pub const ATHLETE_EVENTS_FILE: &str = "athlete_events.csv";

/// Default file name of the NOC region lookup.
pub const NOC_REGIONS_FILE: &str = "noc_regions.csv";

/// Load a CSV input after size, encoding and shape checks.
pub fn load_csv_source(path: &Path, kind: &str) -> Result<DataFrame> {
    let span = info_span!("load_source", kind, path = %path.display());
    let _guard = span.enter();

    check_file_size(path)?;
    validate_encoding(path)?;
    let df = read_csv_table(path)?;
    validate_dataframe_shape(&df, path)?;

    info!(rows = df.height(), columns = df.width(), "source loaded");
    Ok(df)
}

/// Load the athlete events table (`ID, Name, Sex, ..., Medal`).
pub fn load_athlete_events(path: &Path) -> Result<DataFrame> {
    load_csv_source(path, "athlete_events")
}

/// Load the NOC → region lookup (`NOC, region, notes`).
pub fn load_noc_regions(path: &Path) -> Result<DataFrame> {
    load_csv_source(path, "noc_regions")
}

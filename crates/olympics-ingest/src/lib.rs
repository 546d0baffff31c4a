//! Dataset ingestion for the Olympic Games analytics.
//!
//! This crate reads the two static CSV inputs (athlete events and the NOC
//! region lookup) into Polars DataFrames. Every column is loaded as text;
//! typing and schema enforcement belong to the normalizer.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use olympics_ingest::{load_athlete_events, load_noc_regions};
//!
//! let events = load_athlete_events(Path::new("athlete_events.csv"))?;
//! let regions = load_noc_regions(Path::new("noc_regions.csv"))?;
//! ```

mod csv;
mod error;
pub mod polars_utils;
mod sources;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{
    MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit, read_csv_table,
    validate_dataframe_shape, validate_encoding,
};

// === Source Files ===
pub use sources::{
    ATHLETE_EVENTS_FILE, NOC_REGIONS_FILE, load_athlete_events, load_csv_source, load_noc_regions,
};

// === Value Helpers ===
pub use polars_utils::{
    any_to_string, any_to_string_non_empty, format_numeric, is_missing_token, parse_f64, parse_i64,
};

//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use olympics_ingest::{ATHLETE_EVENTS_FILE, NOC_REGIONS_FILE};
use olympics_model::{NormalizeOptions, QueryLimits, Season, Selection};

#[derive(Parser)]
#[command(
    name = "olympics",
    version,
    about = "Olympic Games analytics - medal tallies, participation trends and athlete statistics",
    long_about = "Analyse 120 years of Olympic Games results.\n\n\
                  Reads athlete_events.csv and noc_regions.csv, normalizes them and\n\
                  prints medal tallies, participation trends and athlete statistics."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub data: DataArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

/// Input files, normalization and output options shared by every subcommand.
#[derive(Args)]
pub struct DataArgs {
    /// Athlete events table.
    #[arg(long, value_name = "PATH", default_value = ATHLETE_EVENTS_FILE, global = true)]
    pub athletes: PathBuf,

    /// NOC to region lookup table.
    #[arg(long, value_name = "PATH", default_value = NOC_REGIONS_FILE, global = true)]
    pub regions: PathBuf,

    /// Games season to analyse.
    #[arg(long, value_enum, default_value = "summer", global = true)]
    pub season: SeasonArg,

    /// Keep rows that are identical in every column.
    #[arg(long = "keep-duplicate-rows", global = true)]
    pub keep_duplicate_rows: bool,

    /// Row limit for ranked athlete lists (default 15 per sport, 10 per country).
    #[arg(long, value_name = "N", global = true)]
    pub limit: Option<usize>,

    /// Output format.
    #[arg(long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormatArg,
}

impl DataArgs {
    pub fn normalize_options(&self) -> NormalizeOptions {
        let season = match self.season {
            SeasonArg::Summer => Some(Season::Summer),
            SeasonArg::Winter => Some(Season::Winter),
            SeasonArg::All => None,
        };
        NormalizeOptions::new()
            .with_season(season)
            .with_drop_duplicate_rows(!self.keep_duplicate_rows)
    }

    pub fn query_limits(&self) -> QueryLimits {
        match self.limit {
            Some(limit) => QueryLimits {
                sport_top_athletes: limit,
                country_top_athletes: limit,
            },
            None => QueryLimits::default(),
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Medal tally per country.
    Tally {
        /// Edition year, or "Overall".
        #[arg(long, default_value = "Overall")]
        year: Selection<i32>,
        /// Country, or "Overall".
        #[arg(long, default_value = "Overall")]
        country: Selection<String>,
    },

    /// Headline statistics and participation over time.
    Overview,

    /// Medal history and top athletes of one country.
    Country {
        #[arg(value_name = "COUNTRY")]
        country: String,
    },

    /// Top athletes, body measurements, sex participation and ages.
    Athletes {
        /// Sport, or "Overall".
        #[arg(long, default_value = "Overall")]
        sport: Selection<String>,
    },

    /// Year, country and sport choice lists.
    Selectors,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SeasonArg {
    Summer,
    Winter,
    All,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

//! Typed schema for the Olympic Games athlete dataset.
//!
//! - **record**: the normalized [`AthleteRecord`] and the shared [`NormalizedDataset`]
//! - **enums**: [`Sex`], [`Season`], [`Medal`]
//! - **medals**: [`MedalCounts`] indicator/tally triple
//! - **selection**: [`Selection`] filter values with the "Overall" sentinel
//! - **options**: normalization and query configuration
//! - **results**: result tables returned by the aggregation engine

pub mod enums;
pub mod error;
pub mod medals;
pub mod options;
pub mod record;
pub mod results;
pub mod selection;

pub use enums::{Medal, Season, Sex};
pub use error::{ParseEnumError, ParseSelectionError};
pub use medals::MedalCounts;
pub use options::{NormalizeOptions, QueryLimits};
pub use record::{AthleteRecord, NormalizedDataset};
pub use results::{
    AgeDistributions, AnthropometricRow, AthleteMedals, EditionCount, Heatmap, MedalTallyRow,
    OverviewStats, SexParticipationRow, YearCount,
};
pub use selection::{OVERALL, Selection};

//! Normalization of the raw Olympic Games inputs.
//!
//! - **regions**: the NOC → region [`RegionLookup`]
//! - **normalize**: raw athlete table → [`olympics_model::NormalizedDataset`]
//! - **error**: [`DataIntegrityError`] for schema violations

pub mod columns;
pub mod error;
pub mod normalize;
pub mod regions;

pub use error::{DataIntegrityError, Result};
pub use normalize::{NormalizeStats, normalize, normalize_with_stats};
pub use regions::{RegionEntry, RegionLookup};

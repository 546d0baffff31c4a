//! Dataset loading pipeline.
//!
//! 1. **Ingest**: read the athlete events and NOC region CSV files
//! 2. **Regions**: build the NOC → region lookup
//! 3. **Normalize**: type, filter and join into a [`NormalizedDataset`]

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use olympics_ingest::{ATHLETE_EVENTS_FILE, NOC_REGIONS_FILE, load_athlete_events, load_noc_regions};
use olympics_model::{NormalizeOptions, NormalizedDataset};
use olympics_transform::{NormalizeStats, RegionLookup, normalize_with_stats};

/// Locations of the two input files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSources {
    pub athletes: PathBuf,
    pub regions: PathBuf,
}

impl DataSources {
    /// Both files inside `dir`, under their default names.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            athletes: dir.join(ATHLETE_EVENTS_FILE),
            regions: dir.join(NOC_REGIONS_FILE),
        }
    }
}

/// A loaded dataset with its normalization counters.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub dataset: NormalizedDataset,
    pub stats: NormalizeStats,
    pub regions: usize,
}

/// Read, join and normalize both inputs.
pub fn load_dataset(sources: &DataSources, options: &NormalizeOptions) -> Result<LoadedDataset> {
    let span = info_span!("load_dataset");
    let _guard = span.enter();
    let start = Instant::now();

    let raw = load_athlete_events(&sources.athletes)
        .with_context(|| format!("load athlete events from {}", sources.athletes.display()))?;
    let region_frame = load_noc_regions(&sources.regions)
        .with_context(|| format!("load NOC regions from {}", sources.regions.display()))?;

    let regions = RegionLookup::from_frame(&region_frame).context("build region lookup")?;
    let (dataset, stats) =
        normalize_with_stats(&raw, &regions, options).context("normalize athlete events")?;

    info!(
        records = dataset.len(),
        regions = regions.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "dataset ready"
    );
    Ok(LoadedDataset {
        dataset,
        stats,
        regions: regions.len(),
    })
}

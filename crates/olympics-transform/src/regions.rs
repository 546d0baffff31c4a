//! NOC code → region lookup.

use std::collections::HashMap;

use polars::prelude::DataFrame;
use tracing::debug;

use crate::columns::{NOC, NOC_REGIONS, NOTES, REGION, TextColumn};
use crate::error::{DataIntegrityError, Result};

/// One entry of the lookup. `region` is empty for committees that do not map
/// to a country (e.g. the Refugee Olympic Team).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionEntry {
    pub region: Option<String>,
    pub notes: Option<String>,
}

/// Mapping from NOC code to region. Keys are unique.
#[derive(Debug, Clone, Default)]
pub struct RegionLookup {
    entries: HashMap<String, RegionEntry>,
}

impl RegionLookup {
    /// Build the lookup from the `NOC, region, notes` table.
    ///
    /// `notes` is optional. A repeated NOC code is rejected.
    pub fn from_frame(df: &DataFrame) -> Result<Self> {
        let noc = TextColumn::required(df, NOC_REGIONS, NOC)?;
        let region = TextColumn::required(df, NOC_REGIONS, REGION)?;
        let notes = TextColumn::optional(df, NOTES);

        let mut lookup = Self::default();
        for idx in 0..df.height() {
            let code = noc.require(idx)?;
            lookup.insert(code, region.text(idx), notes.text(idx))?;
        }
        debug!(entries = lookup.len(), "region lookup built");
        Ok(lookup)
    }

    /// Add one mapping, rejecting a code that is already present.
    pub fn insert(
        &mut self,
        noc: impl Into<String>,
        region: Option<String>,
        notes: Option<String>,
    ) -> Result<()> {
        let noc = noc.into();
        if self.entries.contains_key(&noc) {
            return Err(DataIntegrityError::DuplicateRegion { noc });
        }
        self.entries.insert(noc, RegionEntry { region, notes });
        Ok(())
    }

    /// Build a lookup from `(noc, region)` pairs, rejecting a repeated code.
    pub fn try_from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let mut lookup = Self::default();
        for (noc, region) in pairs {
            lookup.insert(noc, Some(region.into()), None)?;
        }
        Ok(lookup)
    }

    pub fn get(&self, noc: &str) -> Option<&RegionEntry> {
        self.entries.get(noc)
    }

    /// Region name for a code; `None` when unmapped or mapped to no region.
    pub fn resolve(&self, noc: &str) -> Option<&str> {
        self.get(noc).and_then(|entry| entry.region.as_deref())
    }

    pub fn contains(&self, noc: &str) -> bool {
        self.entries.contains_key(noc)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

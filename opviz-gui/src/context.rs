//! Loaded application context: the two input artifacts.
//!
//! The original inputs are produced offline: a CSV of candidates with
//! predicted PCE and a JSON map from SMILES to depiction asset id. They
//! are loaded once per data directory and never mutated.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context as _, Result};
use opviz_core::{Dataset, DepictionIndex};

/// File name of the candidate table inside the data directory.
pub const TABLE_FILE: &str = "predicted_pce1.csv";
/// File name of the SMILES lookup map inside the data directory.
pub const LOOKUP_FILE: &str = "lookup_table.json";

/// The immutable artifacts every view is derived from.
pub struct AppContext {
    /// Candidate table.
    pub dataset: Dataset,
    /// SMILES → depiction asset mapping.
    pub depictions: DepictionIndex,
    /// Directory the artifacts (and image folders) live under.
    pub data_dir: PathBuf,
}

impl AppContext {
    /// Load both artifacts from `data_dir`. Nothing is retained on failure.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let start = Instant::now();

        let table_path = data_dir.join(TABLE_FILE);
        let dataset = Dataset::from_path(&table_path)
            .with_context(|| format!("loading candidate table {}", table_path.display()))?;

        let lookup_path = data_dir.join(LOOKUP_FILE);
        let depictions = DepictionIndex::from_path(&lookup_path, data_dir)
            .with_context(|| format!("loading lookup table {}", lookup_path.display()))?;

        log::info!(
            "loaded {} candidates and {} depiction keys from {} in {:.2}s",
            dataset.len(),
            depictions.len(),
            data_dir.display(),
            start.elapsed().as_secs_f64()
        );

        Ok(Self {
            dataset,
            depictions,
            data_dir: data_dir.to_path_buf(),
        })
    }
}

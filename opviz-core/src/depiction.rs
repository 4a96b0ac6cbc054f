//! SMILES → depiction asset lookup.
//!
//! Depictions are rendered offline and named by an opaque asset id; this
//! module only maps SMILES keys to on-disk paths. Side chain 2 assets live
//! in a different directory with a filename prefix; the other four fields
//! share one template. The asymmetry is part of the asset layout and is
//! preserved as-is.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::record::{self, StructuralField};

/// Immutable mapping from SMILES string to depiction asset id, rooted at
/// the data directory the image folders live under.
#[derive(Debug, Clone, Default)]
pub struct DepictionIndex {
    assets: HashMap<String, String>,
    base_dir: PathBuf,
}

impl DepictionIndex {
    /// Wrap an already-deserialized map.
    #[must_use]
    pub fn new(assets: HashMap<String, String>, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets,
            base_dir: base_dir.into(),
        }
    }

    /// Load the map from a JSON object of strings.
    pub fn from_path(path: &Path, base_dir: impl Into<PathBuf>) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), base_dir)
    }

    /// Load the map from any JSON reader.
    pub fn from_reader<R: Read>(reader: R, base_dir: impl Into<PathBuf>) -> Result<Self> {
        let assets = serde_json::from_reader(reader)?;
        Ok(Self::new(assets, base_dir))
    }

    /// Number of SMILES keys in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Whether the map has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// The asset id for `smiles`, or `MissingAsset` when the key is absent.
    pub fn asset_id(&self, smiles: &str) -> Result<&str> {
        self.assets
            .get(smiles)
            .map(String::as_str)
            .ok_or_else(|| Error::MissingAsset {
                smiles: smiles.to_string(),
            })
    }

    /// Resolve a structural field's SMILES to an image path.
    ///
    /// Returns `None` when `smiles` is the sentinel (no lookup attempted),
    /// otherwise the resolved path or the `MissingAsset` failure.
    pub fn image_path(&self, field: StructuralField, smiles: &str) -> Option<Result<PathBuf>> {
        if record::is_sentinel(smiles) {
            return None;
        }
        Some(self.asset_id(smiles).map(|id| self.asset_path(field, id)))
    }

    fn asset_path(&self, field: StructuralField, id: &str) -> PathBuf {
        match field {
            StructuralField::Chain2 => self.base_dir.join("img").join(format!("chain2_{id}.png")),
            _ => self.base_dir.join("img1").join(format!("{id}.png")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::SENTINEL;

    fn index() -> DepictionIndex {
        let assets = HashMap::from([
            ("c1ccsc1".to_string(), "mol_0007".to_string()),
            ("CCCCCC".to_string(), "mol_0042".to_string()),
        ]);
        DepictionIndex::new(assets, "/data")
    }

    #[test]
    fn test_shared_template_for_non_chain2_fields() {
        let idx = index();
        for field in [
            StructuralField::TinReagent,
            StructuralField::RingB1,
            StructuralField::RingB2,
            StructuralField::Chain1,
        ] {
            let path = idx.image_path(field, "c1ccsc1").unwrap().unwrap();
            assert_eq!(path, PathBuf::from("/data/img1/mol_0007.png"));
        }
    }

    #[test]
    fn test_chain2_uses_prefixed_template() {
        let idx = index();
        let path = idx
            .image_path(StructuralField::Chain2, "CCCCCC")
            .unwrap()
            .unwrap();
        assert_eq!(path, PathBuf::from("/data/img/chain2_mol_0042.png"));
    }

    #[test]
    fn test_sentinel_skips_lookup() {
        // The sentinel resolves to None even though it is not a map key;
        // no MissingAsset error may be produced for it.
        let idx = index();
        assert!(idx.image_path(StructuralField::Chain1, SENTINEL).is_none());
        assert!(idx.image_path(StructuralField::Chain2, SENTINEL).is_none());
    }

    #[test]
    fn test_missing_key_is_missing_asset() {
        let idx = index();
        let err = idx
            .image_path(StructuralField::RingB1, "c1ccncc1")
            .unwrap()
            .unwrap_err();
        assert!(matches!(err, Error::MissingAsset { smiles } if smiles == "c1ccncc1"));
    }

    #[test]
    fn test_every_field_yields_path_error_or_sentinel() {
        let idx = index();
        let values = ["c1ccsc1", "CCCCCC", SENTINEL, "unknown"];
        for field in StructuralField::ALL {
            for value in values {
                match idx.image_path(field, value) {
                    None => assert!(record::is_sentinel(value)),
                    Some(Ok(path)) => assert!(path.to_string_lossy().ends_with(".png")),
                    Some(Err(Error::MissingAsset { smiles })) => assert_eq!(smiles, "unknown"),
                    Some(Err(other)) => panic!("unexpected error: {other}"),
                }
            }
        }
    }
}

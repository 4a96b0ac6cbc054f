//! opviz-core: data model and view logic for the OPV candidate viewer.
//!
//! This crate owns the two input artifacts — the candidate table and the
//! SMILES → depiction-asset lookup — and the derived views over them:
//! filtered/sorted table views and the fixed-bin PCE histogram. It has no
//! GUI dependencies; `opviz-gui` renders what this crate derives.

pub mod dataset;
pub mod depiction;
pub mod error;
pub mod record;
pub mod stats;

pub use dataset::{Dataset, TableView};
pub use depiction::DepictionIndex;
pub use error::{Error, Result};
pub use record::{FilterColumn, MoleculeRecord, SortOrder, StructuralField, SENTINEL};
pub use stats::{PceHistogram, PCE_BINS};

//! Row and column types for the candidate table.

use serde::Deserialize;

/// Marker meaning "this optional structural field is not present".
pub const SENTINEL: &str = "-";

/// Returns true if `value` is the not-applicable sentinel.
#[must_use]
pub fn is_sentinel(value: &str) -> bool {
    value == SENTINEL
}

/// One row of the candidate table.
///
/// Every structural field holds a SMILES string; the two side chains may
/// instead hold the sentinel. The PCE column is required and numeric for
/// every row — a non-numeric cell fails the whole load.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MoleculeRecord {
    /// Predicted power-conversion efficiency.
    #[serde(rename = "PCE")]
    pub pce: f64,
    /// Acceptor family the candidate was generated for.
    pub acceptor: String,
    /// Tin reagent SMILES.
    pub tin_reagents: String,
    /// First ring SMILES.
    pub ring_b1: String,
    /// Second ring SMILES.
    pub ring_b2: String,
    /// First side chain SMILES, or the sentinel.
    pub chain1: String,
    /// Second side chain SMILES, or the sentinel.
    pub chain2: String,
}

/// The five structural fields of a record, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructuralField {
    TinReagent,
    RingB1,
    RingB2,
    Chain1,
    Chain2,
}

impl StructuralField {
    /// All structural fields in display order.
    pub const ALL: [Self; 5] = [
        Self::TinReagent,
        Self::RingB1,
        Self::RingB2,
        Self::Chain1,
        Self::Chain2,
    ];

    /// Human-readable label for panel headings.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::TinReagent => "Tin Reagent",
            Self::RingB1 => "Ring B1",
            Self::RingB2 => "Ring B2",
            Self::Chain1 => "Side Chain 1",
            Self::Chain2 => "Side Chain 2",
        }
    }

    /// The field's SMILES value (or sentinel) in `record`.
    #[must_use]
    pub fn value(self, record: &MoleculeRecord) -> &str {
        match self {
            Self::TinReagent => &record.tin_reagents,
            Self::RingB1 => &record.ring_b1,
            Self::RingB2 => &record.ring_b2,
            Self::Chain1 => &record.chain1,
            Self::Chain2 => &record.chain2,
        }
    }
}

/// Categorical columns the table view can filter on.
///
/// "All" (no filter) is expressed as `Option::<FilterColumn>::None` rather
/// than a variant, so every variant names a real column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterColumn {
    Acceptor,
    TinReagents,
    RingB1,
    RingB2,
    Chain1,
    Chain2,
}

impl FilterColumn {
    /// All filterable columns in table order.
    pub const ALL: [Self; 6] = [
        Self::Acceptor,
        Self::TinReagents,
        Self::RingB1,
        Self::RingB2,
        Self::Chain1,
        Self::Chain2,
    ];

    /// The column name as it appears in the table header.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Acceptor => "acceptor",
            Self::TinReagents => "tin_reagents",
            Self::RingB1 => "ring_b1",
            Self::RingB2 => "ring_b2",
            Self::Chain1 => "chain1",
            Self::Chain2 => "chain2",
        }
    }

    /// The column's value in `record`.
    #[must_use]
    pub fn value(self, record: &MoleculeRecord) -> &str {
        match self {
            Self::Acceptor => &record.acceptor,
            Self::TinReagents => &record.tin_reagents,
            Self::RingB1 => &record.ring_b1,
            Self::RingB2 => &record.ring_b2,
            Self::Chain1 => &record.chain1,
            Self::Chain2 => &record.chain2,
        }
    }
}

/// Sort direction for the PCE column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Highest predicted PCE first (the default).
    #[default]
    Descending,
    Ascending,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> MoleculeRecord {
        MoleculeRecord {
            pce: 7.5,
            acceptor: "PC61BM".to_string(),
            tin_reagents: "c1ccc(cc1)[Sn]".to_string(),
            ring_b1: "c1ccsc1".to_string(),
            ring_b2: "c1ccoc1".to_string(),
            chain1: "CCCCCC".to_string(),
            chain2: SENTINEL.to_string(),
        }
    }

    #[test]
    fn test_structural_field_accessors() {
        let r = record();
        assert_eq!(StructuralField::TinReagent.value(&r), "c1ccc(cc1)[Sn]");
        assert_eq!(StructuralField::Chain2.value(&r), SENTINEL);
        assert!(is_sentinel(StructuralField::Chain2.value(&r)));
        assert!(!is_sentinel(StructuralField::Chain1.value(&r)));
    }

    #[test]
    fn test_filter_column_labels_match_header() {
        let labels: Vec<&str> = FilterColumn::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            ["acceptor", "tin_reagents", "ring_b1", "ring_b2", "chain1", "chain2"]
        );
    }

    #[test]
    fn test_sort_order_default_is_descending() {
        assert_eq!(SortOrder::default(), SortOrder::Descending);
    }
}

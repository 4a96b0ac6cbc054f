//! Candidate table loading and derived table views.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use crate::record::{FilterColumn, MoleculeRecord, SortOrder};

/// The candidate table, loaded once at startup and immutable thereafter.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<MoleculeRecord>,
}

impl Dataset {
    /// Wrap an already-deserialized set of records.
    #[must_use]
    pub fn new(records: Vec<MoleculeRecord>) -> Self {
        Self { records }
    }

    /// Load the table from a CSV file with a header row.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// Load the table from any CSV reader with a header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::Reader::from_reader(reader);
        let mut records = Vec::new();
        for row in rdr.deserialize() {
            records.push(row?);
        }
        Ok(Self { records })
    }

    /// Number of rows in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All rows, in load order.
    #[must_use]
    pub fn records(&self) -> &[MoleculeRecord] {
        &self.records
    }

    /// The row at `index` in load order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&MoleculeRecord> {
        self.records.get(index)
    }

    /// Distinct values of `column`, in order of first appearance.
    #[must_use]
    pub fn unique_values(&self, column: FilterColumn) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut values = Vec::new();
        for record in &self.records {
            let value = column.value(record);
            if seen.insert(value) {
                values.push(value.to_string());
            }
        }
        values
    }

    /// Distinct acceptor values, in order of first appearance.
    #[must_use]
    pub fn acceptors(&self) -> Vec<String> {
        self.unique_values(FilterColumn::Acceptor)
    }

    /// PCE values of every row, in load order.
    #[must_use]
    pub fn pce_values(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.pce).collect()
    }

    /// PCE values of the rows matching `acceptor`. Empty when none match.
    #[must_use]
    pub fn pce_for_acceptor(&self, acceptor: &str) -> Vec<f64> {
        self.records
            .iter()
            .filter(|r| r.acceptor == acceptor)
            .map(|r| r.pce)
            .collect()
    }

    /// Derive the displayed table: optionally filtered to rows whose
    /// `column` equals `value`, stably sorted by PCE in `order`.
    ///
    /// The returned view always exposes a fresh 0-based ordinal as the
    /// selectable key, regardless of filtering or sort direction.
    #[must_use]
    pub fn view(&self, filter: Option<(FilterColumn, &str)>, order: SortOrder) -> TableView {
        let mut rows: Vec<usize> = match filter {
            Some((column, value)) => self
                .records
                .iter()
                .enumerate()
                .filter(|(_, record)| column.value(record) == value)
                .map(|(index, _)| index)
                .collect(),
            None => (0..self.records.len()).collect(),
        };

        // Stable sort: rows with equal PCE keep load order in both directions.
        rows.sort_by(|&a, &b| {
            let by_pce = self.records[a].pce.total_cmp(&self.records[b].pce);
            match order {
                SortOrder::Ascending => by_pce,
                SortOrder::Descending => by_pce.reverse(),
            }
        });

        TableView { rows }
    }
}

/// An ordered view over the dataset: the ordinal position in `rows` is the
/// user-visible selectable key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    rows: Vec<usize>,
}

impl TableView {
    /// Dataset indices in display order.
    #[must_use]
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Number of displayed rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the view displays no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The record displayed at `ordinal`, resolved against `dataset`.
    #[must_use]
    pub fn record<'a>(&self, dataset: &'a Dataset, ordinal: usize) -> Option<&'a MoleculeRecord> {
        self.rows.get(ordinal).and_then(|&index| dataset.get(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::SENTINEL;

    fn record(pce: f64, acceptor: &str, chain1: &str) -> MoleculeRecord {
        MoleculeRecord {
            pce,
            acceptor: acceptor.to_string(),
            tin_reagents: "c1ccsc1[Sn]".to_string(),
            ring_b1: "c1ccsc1".to_string(),
            ring_b2: "c1ccoc1".to_string(),
            chain1: chain1.to_string(),
            chain2: SENTINEL.to_string(),
        }
    }

    fn dataset() -> Dataset {
        Dataset::new(vec![
            record(5.0, "A", "CC"),
            record(9.0, "B", SENTINEL),
            record(7.0, "A", "CC"),
            record(9.0, "A", "CCCC"),
        ])
    }

    #[test]
    fn test_unfiltered_descending_order() {
        let ds = Dataset::new(vec![record(5.0, "A", "CC"), record(9.0, "B", "CC")]);
        let view = ds.view(None, SortOrder::Descending);
        let pces: Vec<f64> = view
            .rows()
            .iter()
            .map(|&i| ds.get(i).unwrap().pce)
            .collect();
        assert_eq!(pces, [9.0, 5.0]);
    }

    #[test]
    fn test_filter_matches_only_selected_value() {
        let ds = dataset();
        let view = ds.view(Some((FilterColumn::Acceptor, "B")), SortOrder::Descending);
        assert_eq!(view.len(), 1);
        let r = view.record(&ds, 0).unwrap();
        assert_eq!(r.pce, 9.0);
        assert_eq!(r.acceptor, "B");
    }

    #[test]
    fn test_every_filtered_row_matches_for_all_columns() {
        let ds = dataset();
        for column in FilterColumn::ALL {
            for value in ds.unique_values(column) {
                let view = ds.view(Some((column, value.as_str())), SortOrder::Descending);
                for &index in view.rows() {
                    assert_eq!(column.value(ds.get(index).unwrap()), value);
                }
            }
        }
    }

    #[test]
    fn test_sort_inverts_and_is_idempotent() {
        let ds = dataset();
        let desc = ds.view(None, SortOrder::Descending);
        let asc = ds.view(None, SortOrder::Ascending);

        let first_desc = desc.record(&ds, 0).unwrap().pce;
        let last_asc = asc.record(&ds, asc.len() - 1).unwrap().pce;
        assert_eq!(first_desc, last_asc);
        let last_desc = desc.record(&ds, desc.len() - 1).unwrap().pce;
        let first_asc = asc.record(&ds, 0).unwrap().pce;
        assert_eq!(last_desc, first_asc);

        // Re-deriving the same view yields the same ordering.
        assert_eq!(desc, ds.view(None, SortOrder::Descending));
        assert_eq!(asc, ds.view(None, SortOrder::Ascending));
    }

    #[test]
    fn test_equal_pce_rows_keep_load_order() {
        let ds = dataset();
        let view = ds.view(None, SortOrder::Descending);
        // Rows 1 and 3 both have PCE 9.0; the stable sort keeps 1 before 3.
        assert_eq!(&view.rows()[..2], &[1, 3]);
    }

    #[test]
    fn test_ordinal_resolves_to_displayed_record() {
        let ds = dataset();
        let view = ds.view(Some((FilterColumn::Acceptor, "A")), SortOrder::Ascending);
        for ordinal in 0..view.len() {
            let via_ordinal = view.record(&ds, ordinal).unwrap();
            let via_index = ds.get(view.rows()[ordinal]).unwrap();
            assert_eq!(via_ordinal, via_index);
        }
        assert!(view.record(&ds, view.len()).is_none());
    }

    #[test]
    fn test_unique_values_first_appearance_order() {
        let ds = dataset();
        assert_eq!(ds.unique_values(FilterColumn::Acceptor), ["A", "B"]);
        assert_eq!(ds.unique_values(FilterColumn::Chain1), ["CC", SENTINEL, "CCCC"]);
    }

    #[test]
    fn test_pce_for_acceptor_empty_when_no_match() {
        let ds = dataset();
        assert!(ds.pce_for_acceptor("nope").is_empty());
        assert_eq!(ds.pce_for_acceptor("B"), [9.0]);
    }
}

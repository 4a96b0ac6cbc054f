use std::fs;

use opviz_core::{
    Dataset, DepictionIndex, Error, FilterColumn, PceHistogram, SortOrder, StructuralField,
    PCE_BINS,
};

const TABLE: &str = "\
PCE,acceptor,tin_reagents,ring_b1,ring_b2,chain1,chain2
5.0,A,c1ccsc1[Sn],c1ccsc1,c1ccoc1,CC,-
9.0,B,c1ccsc1[Sn],c1ccsc1,c1ccoc1,-,CCCC
7.0,A,c1ccoc1[Sn],c1ccoc1,c1ccsc1,CC,CCCC
";

const LOOKUP: &str = r#"{
  "c1ccsc1[Sn]": "mol_0001",
  "c1ccoc1[Sn]": "mol_0002",
  "c1ccsc1": "mol_0003",
  "c1ccoc1": "mol_0004",
  "CC": "mol_0005",
  "CCCC": "mol_0006"
}"#;

#[test]
fn test_load_and_view_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let table_path = dir.path().join("predicted_pce1.csv");
    let lookup_path = dir.path().join("lookup_table.json");
    fs::write(&table_path, TABLE).unwrap();
    fs::write(&lookup_path, LOOKUP).unwrap();

    let dataset = Dataset::from_path(&table_path).unwrap();
    assert_eq!(dataset.len(), 3);

    let index = DepictionIndex::from_path(&lookup_path, dir.path()).unwrap();
    assert_eq!(index.len(), 6);

    // Default view: descending PCE over the whole table.
    let view = dataset.view(None, SortOrder::Descending);
    let pces: Vec<f64> = (0..view.len())
        .map(|ordinal| view.record(&dataset, ordinal).unwrap().pce)
        .collect();
    assert_eq!(pces, [9.0, 7.0, 5.0]);

    // Every structural field of the top row resolves or is the sentinel.
    let top = view.record(&dataset, 0).unwrap();
    for field in StructuralField::ALL {
        let value = field.value(top);
        match index.image_path(field, value) {
            None => assert_eq!(value, "-"),
            Some(resolved) => {
                let path = resolved.unwrap();
                assert!(path.starts_with(dir.path()));
            }
        }
    }

    // chain2 of the top row uses the prefixed template.
    let chain2 = index
        .image_path(StructuralField::Chain2, &top.chain2)
        .unwrap()
        .unwrap();
    assert!(chain2.ends_with("img/chain2_mol_0006.png"));
}

#[test]
fn test_filtered_statistics_subset() {
    let dataset = Dataset::from_reader(TABLE.as_bytes()).unwrap();

    let a = dataset.pce_for_acceptor("A");
    let hist = PceHistogram::from_values(&a).unwrap();
    assert_eq!(hist.n_bins(), PCE_BINS);
    assert_eq!(hist.total(), 2);
    assert_eq!(hist.min(), 5.0);
    assert_eq!(hist.max(), 7.0);

    // No rows for this acceptor: the caller gets nothing to plot.
    assert!(PceHistogram::from_values(&dataset.pce_for_acceptor("Z")).is_none());
}

#[test]
fn test_filtered_view_matches_column() {
    let dataset = Dataset::from_reader(TABLE.as_bytes()).unwrap();
    let view = dataset.view(Some((FilterColumn::Acceptor, "B")), SortOrder::Descending);
    assert_eq!(view.len(), 1);
    assert_eq!(view.record(&dataset, 0).unwrap().acceptor, "B");
}

#[test]
fn test_missing_table_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("predicted_pce1.csv");
    let err = Dataset::from_path(&missing).unwrap_err();
    assert!(matches!(err, Error::Read { path, .. } if path == missing));
}

#[test]
fn test_missing_lookup_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("lookup_table.json");
    let err = DepictionIndex::from_path(&missing, dir.path()).unwrap_err();
    assert!(matches!(err, Error::Read { path, .. } if path == missing));
}

#[test]
fn test_non_numeric_pce_fails_load() {
    let bad = "\
PCE,acceptor,tin_reagents,ring_b1,ring_b2,chain1,chain2
oops,A,x,y,z,-,-
";
    let err = Dataset::from_reader(bad.as_bytes()).unwrap_err();
    assert!(matches!(err, Error::Csv(_)));
}

#[test]
fn test_malformed_lookup_json_fails_load() {
    let err = DepictionIndex::from_reader("not json".as_bytes(), "/data").unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

//! Integration tests for loading the input files.

use std::fs;

use olympics_ingest::{IngestError, load_athlete_events, load_noc_regions};
use tempfile::TempDir;

const EVENTS: &str = "\
\"ID\",\"Name\",\"Sex\",\"Age\",\"Height\",\"Weight\",\"Team\",\"NOC\",\"Games\",\"Year\",\"Season\",\"City\",\"Sport\",\"Event\",\"Medal\"
\"1\",\"A Dijiang\",\"M\",24,180,80,\"China\",\"CHN\",\"1992 Summer\",1992,\"Summer\",\"Barcelona\",\"Basketball\",\"Basketball Men's Basketball\",NA
\"4\",\"Edgar Lindenau Aabye\",\"M\",34,NA,NA,\"Denmark/Sweden\",\"DEN\",\"1900 Summer\",1900,\"Summer\",\"Paris\",\"Tug-Of-War\",\"Tug-Of-War Men's Tug-Of-War\",\"Gold\"
";

const REGIONS: &str = "NOC,region,notes\nCHN,China,\nDEN,Denmark,\nROT,,Refugee Olympic Team\n";

#[test]
fn loads_athlete_events() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("athlete_events.csv");
    fs::write(&path, EVENTS).expect("write events");

    let df = load_athlete_events(&path).expect("load events");

    assert_eq!(df.height(), 2);
    assert_eq!(df.width(), 15);
    let medal = df.column("Medal").expect("medal column");
    assert_eq!(medal.len(), 2);
}

#[test]
fn loads_noc_regions() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("noc_regions.csv");
    fs::write(&path, REGIONS).expect("write regions");

    let df = load_noc_regions(&path).expect("load regions");

    assert_eq!(df.height(), 3);
    assert!(df.column("notes").is_ok());
}

#[test]
fn missing_file_is_not_found() {
    let dir = TempDir::new().expect("temp dir");
    let err = load_noc_regions(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

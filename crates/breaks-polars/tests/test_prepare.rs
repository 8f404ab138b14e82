//! Tests for joining tables and deriving percentages

mod common;

use approx::assert_relative_eq;
use breaks_polars::{load_table, ChoroplethFrameExt, Error, TableSource};
use common::{areas_df, census_df, lookup_f64};
use polars::prelude::*;
use std::path::PathBuf;

fn temp_csv(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("breaks_polars_{}_{}", std::process::id(), name));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_join_keeps_every_area() {
    let census = census_df().slice(0, 4);
    let joined = areas_df().join_attributes(&census, "code").unwrap();

    assert_eq!(joined.height(), 6);
    assert_eq!(joined.column("group_a").unwrap().null_count(), 2);

    let err = joined.check_complete(&["group_a", "total"]).unwrap_err();
    assert!(matches!(err, Error::MissingValues { ref column, count: 2 } if column == "group_a"));
}

#[test]
fn test_complete_join() {
    let joined = areas_df().join_attributes(&census_df(), "code").unwrap();
    assert_eq!(joined.height(), 6);
    joined.check_complete(&["group_a", "total"]).unwrap();
}

#[test]
fn test_join_on_missing_key() {
    let err = areas_df().join_attributes(&census_df(), "lsoa").unwrap_err();
    assert!(matches!(err, Error::InvalidColumn(ref name) if name == "lsoa"));
}

#[test]
fn test_percentage() {
    let df = census_df()
        .with_percentage("group_a", "total", "pct_a")
        .unwrap();

    assert_eq!(df.column("pct_a").unwrap().dtype(), &DataType::Float64);
    assert_relative_eq!(lookup_f64(&df, "code", "E01", "pct_a").unwrap(), 5.0);
    assert_relative_eq!(lookup_f64(&df, "code", "E03", "pct_a").unwrap(), 25.0);
    assert_relative_eq!(lookup_f64(&df, "code", "E05", "pct_a").unwrap(), 50.0);
}

#[test]
fn test_percentage_with_zero_denominator() {
    let df = df![
        "code" => ["A", "B"],
        "part" => [3.0, 1.0],
        "whole" => [0.0, 4.0],
    ]
    .unwrap();
    let df = df.with_percentage("part", "whole", "pct").unwrap();

    assert_eq!(lookup_f64(&df, "code", "A", "pct"), None);
    assert_relative_eq!(lookup_f64(&df, "code", "B", "pct").unwrap(), 25.0);
}

#[test]
fn test_percentage_needs_numeric_columns() {
    let df = df!["code" => ["A"], "total" => [4i64]].unwrap();
    let err = df.with_percentage("code", "total", "pct").unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { .. }));
}

#[test]
fn test_load_table_from_explicit_path() {
    let path = temp_csv("census.csv", "code;group_a;total\nE01;5;100\nE02;10;100\n");
    let source = TableSource::new(&path).delimiter(';');
    let df = load_table(&source).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(df.height(), 2);
    assert_eq!(df.get_column_names().len(), 3);
    assert!(df.column("group_a").is_ok());
}

#[test]
fn test_load_table_missing_file() {
    let source = TableSource::new("/nonexistent/breaks_polars/census.csv");
    assert!(matches!(load_table(&source), Err(Error::Io(_))));
}

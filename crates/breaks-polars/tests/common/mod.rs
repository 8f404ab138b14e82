//! Common test utilities for breaks-polars tests

#![allow(dead_code)]

use polars::prelude::*;

/// Area frame keyed by code, the geometry side of a join
pub fn areas_df() -> DataFrame {
    df!["code" => ["E01", "E02", "E03", "E04", "E05", "E06"]].unwrap()
}

/// Census counts per area
pub fn census_df() -> DataFrame {
    df![
        "code" => ["E01", "E02", "E03", "E04", "E05", "E06"],
        "group_a" => [5i64, 10, 30, 2, 45, 8],
        "total" => [100i64, 100, 120, 80, 90, 160],
    ]
    .unwrap()
}

/// Helper function to create a test DataFrame with specific values
pub fn create_test_df(values: &[f64]) -> DataFrame {
    df!["values" => values].unwrap()
}

/// Float value of `value_col` in the row whose `key_col` equals `key`
pub fn lookup_f64(df: &DataFrame, key_col: &str, key: &str, value_col: &str) -> Option<f64> {
    let keys = df.column(key_col).unwrap().str().unwrap();
    let values = df.column(value_col).unwrap().f64().unwrap();
    keys.into_iter()
        .zip(values)
        .find(|(k, _)| *k == Some(key))
        .and_then(|(_, v)| v)
}

/// Class indices of a UInt32 column
pub fn extract_classes(df: &DataFrame, col_name: &str) -> Vec<Option<u32>> {
    df.column(col_name)
        .unwrap()
        .u32()
        .unwrap()
        .into_iter()
        .collect()
}

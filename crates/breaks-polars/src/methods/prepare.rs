//! Joining attribute tables and deriving percentage columns

use crate::{Error, Result};
use polars::prelude::*;
use tracing::{debug, warn};

/// Look up a column, mapping a missing name to `InvalidColumn`
pub(crate) fn require_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name)
        .map_err(|_| Error::InvalidColumn(name.to_string()))
}

/// Check that a column holds numbers
pub(crate) fn require_numeric(column: &Column) -> Result<()> {
    match column.dtype() {
        DataType::Float64
        | DataType::Float32
        | DataType::Int64
        | DataType::Int32
        | DataType::Int16
        | DataType::Int8
        | DataType::UInt64
        | DataType::UInt32
        | DataType::UInt16
        | DataType::UInt8 => Ok(()),
        dt => Err(Error::TypeMismatch {
            expected: "numeric".to_string(),
            got: format!("{:?}", dt),
        }),
    }
}

pub(crate) fn join_attributes_impl(
    df: &DataFrame,
    table: &DataFrame,
    key: &str,
) -> Result<DataFrame> {
    require_column(df, key)?;
    require_column(table, key)?;

    let joined = df
        .clone()
        .lazy()
        .join(
            table.clone().lazy(),
            [col(key)],
            [col(key)],
            JoinArgs::new(JoinType::Left),
        )
        .collect()?;

    if joined.height() != df.height() {
        // Duplicate keys in the table fan rows out
        warn!(
            before = df.height(),
            after = joined.height(),
            key,
            "join changed the row count"
        );
    }
    debug!(rows = joined.height(), key, "attributes joined");
    Ok(joined)
}

pub(crate) fn with_percentage_impl(
    df: &DataFrame,
    numerator: &str,
    denominator: &str,
    name: &str,
) -> Result<DataFrame> {
    require_numeric(require_column(df, numerator)?)?;
    require_numeric(require_column(df, denominator)?)?;

    let num = col(numerator).cast(DataType::Float64);
    let den = col(denominator).cast(DataType::Float64);
    let percentage = when(den.clone().eq(lit(0.0)))
        .then(lit(NULL).cast(DataType::Float64))
        .otherwise(num * lit(100.0) / den)
        .alias(name);

    Ok(df.clone().lazy().with_column(percentage).collect()?)
}

pub(crate) fn check_complete_impl(df: &DataFrame, columns: &[&str]) -> Result<()> {
    for &name in columns {
        let count = require_column(df, name)?.null_count();
        if count > 0 {
            return Err(Error::MissingValues {
                column: name.to_string(),
                count,
            });
        }
    }
    Ok(())
}

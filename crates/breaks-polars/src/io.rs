//! Loading attribute tables from delimited files

use crate::{Result, TableSource};
use polars::prelude::*;
use tracing::{debug, instrument};

/// Read a delimited table from the configured path
#[instrument(skip_all, fields(path = %source.path.display()))]
pub fn load_table(source: &TableSource) -> Result<DataFrame> {
    // Missing files are reported as Error::Io
    std::fs::metadata(&source.path)?;

    let parse_options = CsvParseOptions::default().with_separator(source.separator()?);
    let df = CsvReadOptions::default()
        .with_has_header(source.has_header)
        .with_parse_options(parse_options)
        .try_into_reader_with_file_path(Some(source.path.clone()))?
        .finish()?;

    debug!(rows = df.height(), columns = df.width(), "table loaded");
    Ok(df)
}

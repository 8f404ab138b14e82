//! Configuration types for loading and classifying attribute tables

use crate::{Error, Result};
use breaks_classify::{ClassificationStrategy, STYLE_TAGS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_delimiter() -> char {
    ','
}

fn default_has_header() -> bool {
    true
}

fn default_classes() -> usize {
    5
}

/// Location and format of a delimited attribute table
///
/// Paths are used as given; relative paths resolve against
/// [`TableSource::resolve`]'s base directory, never an ambient one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSource {
    pub path: PathBuf,

    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    #[serde(default = "default_has_header")]
    pub has_header: bool,
}

impl TableSource {
    /// Comma-separated table with a header row
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: default_delimiter(),
            has_header: default_has_header(),
        }
    }

    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn has_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Anchor a relative path at `base`
    pub fn resolve(mut self, base: &Path) -> Self {
        if self.path.is_relative() {
            self.path = base.join(&self.path);
        }
        self
    }

    /// Delimiter as the single byte the CSV reader expects
    pub(crate) fn separator(&self) -> Result<u8> {
        if !self.delimiter.is_ascii() {
            return Err(Error::InvalidParameter(format!(
                "delimiter {:?} is not a single ASCII character",
                self.delimiter
            )));
        }
        Ok(self.delimiter as u8)
    }
}

/// How to classify one column of a frame
///
/// # Example
///
/// ```rust
/// use breaks_polars::ClassificationConfig;
///
/// let config = ClassificationConfig::from_json(
///     r#"{"column": "pct_a", "classes": 4, "strategy": {"style": "natural_breaks"}}"#,
/// ).unwrap();
/// assert_eq!(config.output_column(), "pct_a_class");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationConfig {
    /// Column holding the attribute values
    pub column: String,

    /// Requested number of classes
    #[serde(default = "default_classes")]
    pub classes: usize,

    /// Output column; defaults to `{column}_class` or `{column}_position`
    #[serde(default)]
    pub output: Option<String>,

    pub strategy: ClassificationStrategy,
}

impl ClassificationConfig {
    pub fn new(column: impl Into<String>, strategy: ClassificationStrategy) -> Self {
        Self {
            column: column.into(),
            classes: default_classes(),
            output: None,
            strategy,
        }
    }

    pub fn classes(mut self, classes: usize) -> Self {
        self.classes = classes;
        self
    }

    pub fn output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Name of the column `classify` appends
    pub fn output_column(&self) -> String {
        match &self.output {
            Some(name) => name.clone(),
            None if self.strategy.is_continuous() => format!("{}_position", self.column),
            None => format!("{}_class", self.column),
        }
    }

    /// Parse a JSON configuration; an unknown `style` is unsupported
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if let Some(style) = value.pointer("/strategy/style").and_then(|s| s.as_str()) {
            if !STYLE_TAGS.contains(&style) {
                return Err(breaks_core::Error::StrategyUnsupported(style.to_string()).into());
            }
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use breaks_classify::{ClipPolicy, FixedBreaks};

    #[test]
    fn test_table_source_defaults() {
        let source: TableSource = serde_json::from_str(r#"{"path": "census.csv"}"#).unwrap();
        assert_eq!(source, TableSource::new("census.csv"));
        assert_eq!(source.separator().unwrap(), b',');

        let resolved = source.resolve(Path::new("/data"));
        assert_eq!(resolved.path, PathBuf::from("/data/census.csv"));
        assert!(TableSource::new("x").delimiter('§').separator().is_err());
    }

    #[test]
    fn test_config_from_json() {
        let config = ClassificationConfig::from_json(
            r#"{
                "column": "pct",
                "output": "band",
                "strategy": {"style": "fixed", "breaks": [0, 50, 100], "clip": "extend"}
            }"#,
        )
        .unwrap();
        assert_eq!(config.classes, 5);
        assert_eq!(config.output_column(), "band");
        assert_eq!(
            config.strategy,
            ClassificationStrategy::Fixed(
                FixedBreaks::new(vec![0.0, 50.0, 100.0]).clip_policy(ClipPolicy::Extend)
            )
        );
    }

    #[test]
    fn test_unknown_style_is_rejected() {
        let err = ClassificationConfig::from_json(
            r#"{"column": "pct", "strategy": {"style": "kmeans"}}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Breaks(breaks_core::Error::StrategyUnsupported(style)) if style == "kmeans"
        ));
    }
}

//! Classification of DataFrame columns

use super::prepare::{
    check_complete_impl, join_attributes_impl, require_column, require_numeric,
    with_percentage_impl,
};
use crate::{ChoroplethFrameExt, ClassificationConfig, Error, Result};
use breaks_classify::{
    compute_breaks, Breaks, ClassScheme, ClassificationStrategy, ContinuousScale,
};
use polars::prelude::*;
use tracing::{debug, instrument};

/// Column values as Float64, nulls kept in place
fn column_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let column = require_column(df, name)?;
    require_numeric(column)?;
    let column = match column.dtype() {
        DataType::Float64 => column.clone(),
        _ => column.cast(&DataType::Float64)?,
    };
    Ok(column.f64()?.into_iter().collect())
}

/// Non-null values of a column, the sample handed to the strategies
fn column_sample(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let values = column_values(df, name)?;
    let total = values.len();
    let sample: Vec<f64> = values.into_iter().flatten().collect();
    if sample.len() < total {
        debug!(column = name, skipped = total - sample.len(), "null values skipped");
    }
    Ok(sample)
}

fn class_indices(values: &[Option<f64>], breaks: &Breaks) -> Vec<Option<u32>> {
    values
        .iter()
        .map(|v| v.and_then(|v| breaks.class_of(v)).map(|class| class as u32))
        .collect()
}

fn positions(values: &[Option<f64>], scale: &ContinuousScale) -> Vec<Option<f64>> {
    values
        .iter()
        .map(|v| v.filter(|v| v.is_finite()).map(|v| scale.position(v)))
        .collect()
}

impl ChoroplethFrameExt for DataFrame {
    fn join_attributes(&self, table: &DataFrame, key: &str) -> Result<DataFrame> {
        join_attributes_impl(self, table, key)
    }

    fn with_percentage(
        &self,
        numerator: &str,
        denominator: &str,
        name: &str,
    ) -> Result<DataFrame> {
        with_percentage_impl(self, numerator, denominator, name)
    }

    fn check_complete(&self, columns: &[&str]) -> Result<()> {
        check_complete_impl(self, columns)
    }

    #[instrument(level = "debug", skip(self, strategy), fields(style = strategy.name()))]
    fn class_breaks(
        &self,
        column: &str,
        k: usize,
        strategy: &ClassificationStrategy,
    ) -> Result<ClassScheme> {
        let sample = column_sample(self, column)?;
        Ok(compute_breaks(&sample, k, strategy)?)
    }

    fn with_class_column(
        &self,
        column: &str,
        k: usize,
        strategy: &ClassificationStrategy,
        output: &str,
    ) -> Result<DataFrame> {
        if strategy.is_continuous() {
            return Err(Error::InvalidParameter(format!(
                "{strategy} classification has no class indices"
            )));
        }
        let breaks = self.class_breaks(column, k, strategy)?.into_breaks()?;
        let values = column_values(self, column)?;
        let classes = Series::new(output.into(), class_indices(&values, &breaks));

        let mut df = self.clone();
        df.with_column(classes)?;
        Ok(df)
    }

    fn classify(&self, config: &ClassificationConfig) -> Result<DataFrame> {
        let output = config.output_column();
        let scheme = self.class_breaks(&config.column, config.classes, &config.strategy)?;
        let values = column_values(self, &config.column)?;

        let series = match &scheme {
            ClassScheme::Discrete(breaks) => {
                debug!(%breaks, output = %output, "appending class column");
                Series::new(output.as_str().into(), class_indices(&values, breaks))
            }
            ClassScheme::Continuous(scale) => {
                Series::new(output.as_str().into(), positions(&values, scale))
            }
        };

        let mut df = self.clone();
        df.with_column(series)?;
        Ok(df)
    }

    fn legend(&self, column: &str, breaks: &Breaks, precision: usize) -> Result<DataFrame> {
        let sample = column_sample(self, column)?;
        let intervals = breaks.intervals(&sample);

        let class: Vec<u32> = (0..intervals.len() as u32).collect();
        let lower: Vec<f64> = intervals.iter().map(|iv| iv.lower).collect();
        let upper: Vec<f64> = intervals.iter().map(|iv| iv.upper).collect();
        let count: Vec<u32> = intervals.iter().map(|iv| iv.count as u32).collect();
        let label = breaks.labels(precision);

        Ok(DataFrame::new(vec![
            Series::new("class".into(), class).into(),
            Series::new("lower".into(), lower).into(),
            Series::new("upper".into(), upper).into(),
            Series::new("count".into(), count).into(),
            Series::new("label".into(), label).into(),
        ])?)
    }
}

//! Goodness-of-fit diagnostics for a classification

use crate::types::Breaks;
use breaks_core::{utils, Error, Result};

/// Diagnostics that measure how well breaks fit a sample
pub trait ClassificationOps {
    /// Sum of squared deviations from class means (SDCM)
    fn within_class_deviation(&self, sample: &[f64]) -> Result<f64>;

    /// Goodness of variance fit: `1 - SDCM / SDAM`
    ///
    /// SDAM is the squared deviation of the whole sample from its mean.
    /// A perfect fit scores 1. A sample without spread scores 1 as well.
    fn goodness_of_variance_fit(&self, sample: &[f64]) -> Result<f64>;

    /// Per-class means; `None` for empty classes
    fn class_means(&self, sample: &[f64]) -> Result<Vec<Option<f64>>>;
}

impl ClassificationOps for Breaks {
    fn within_class_deviation(&self, sample: &[f64]) -> Result<f64> {
        let groups = group_by_class(self, sample)?;
        Ok(groups.iter().map(|g| utils::sum_squared_deviations(g)).sum())
    }

    fn goodness_of_variance_fit(&self, sample: &[f64]) -> Result<f64> {
        let sdcm = self.within_class_deviation(sample)?;
        let sdam = utils::sum_squared_deviations(sample);
        if sdam == 0.0 {
            return Ok(1.0);
        }
        Ok(1.0 - sdcm / sdam)
    }

    fn class_means(&self, sample: &[f64]) -> Result<Vec<Option<f64>>> {
        let groups = group_by_class(self, sample)?;
        Ok(groups
            .iter()
            .map(|g| (!g.is_empty()).then(|| utils::mean(g)))
            .collect())
    }
}

/// Split a sample by class; every value must be classifiable
fn group_by_class(breaks: &Breaks, sample: &[f64]) -> Result<Vec<Vec<f64>>> {
    utils::validate_sample(sample, "classification diagnostics")?;
    let mut groups = vec![Vec::new(); breaks.num_classes()];
    for &v in sample {
        let class = breaks.class_of(v).ok_or_else(|| {
            Error::InvalidInput(format!("value {v} lies outside the breaks {breaks}"))
        })?;
        groups[class].push(v);
    }
    Ok(groups)
}

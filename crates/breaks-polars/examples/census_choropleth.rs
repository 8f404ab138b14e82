//! Classify a census share per area with every legend style
//!
//! Run with: cargo run -p breaks-polars --example census_choropleth [census.csv]
//!
//! The CSV needs `code`, `group_a` and `total` columns. Without an argument
//! a synthetic table is written to the temp directory and used instead.
//!
//! Environment variables:
//! - `RUST_LOG`: Log filter (default: info)

use anyhow::Context;
use breaks_classify::{ClassificationOps, ClassificationStrategy, HeadTailBreaks};
use breaks_polars::{load_table, ChoroplethFrameExt, ClassificationConfig, TableSource};
use polars::prelude::*;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn synthetic_census() -> anyhow::Result<PathBuf> {
    let mut csv = String::from("code,group_a,total\n");
    for i in 0..400u64 {
        // Right-skewed share with a few high concentrations
        let x = (i * 7919 % 400) as f64 / 400.0;
        let total = 1200 + (i * 37 % 500);
        let group_a = (total as f64 * (0.01 + 0.6 * x.powi(5))).round() as u64;
        csv.push_str(&format!("E{:05},{},{}\n", i, group_a, total));
    }
    let path = std::env::temp_dir().join("breaks_polars_census.csv");
    std::fs::write(&path, csv).context("writing synthetic census table")?;
    Ok(path)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let path = match std::env::args().nth(1) {
        Some(path) => PathBuf::from(path),
        None => synthetic_census()?,
    };
    let census = load_table(&TableSource::new(&path))
        .with_context(|| format!("loading {}", path.display()))?;

    let areas = census.select(["code"])?;
    let joined = areas.join_attributes(&census, "code")?;
    joined.check_complete(&["group_a", "total"])?;
    let df = joined.with_percentage("group_a", "total", "pct_a")?;
    info!(areas = df.height(), "attribute table prepared");

    let styles = [
        ClassificationStrategy::Quantile,
        ClassificationStrategy::fixed(vec![0.0, 10.0, 20.0, 40.0, 60.0, 100.0]),
        ClassificationStrategy::Pretty,
        ClassificationStrategy::NaturalBreaks,
        ClassificationStrategy::HeadTails(HeadTailBreaks::new()),
    ];

    for strategy in styles {
        let scheme = df.class_breaks("pct_a", 5, &strategy)?;
        let breaks = scheme.into_breaks()?;
        // Zero totals leave null percentages
        let sample: Vec<f64> = df.column("pct_a")?.f64()?.into_iter().flatten().collect();
        let gvf = breaks.goodness_of_variance_fit(&sample)?;

        println!("\n{strategy}: {breaks} (GVF {gvf:.3})");
        println!("{}", df.legend("pct_a", &breaks, 1)?);
    }

    let config = ClassificationConfig::new("pct_a", ClassificationStrategy::continuous());
    let continuous = df.classify(&config)?;
    println!("\n{}", continuous.head(Some(5)));

    Ok(())
}

//! Example of logging a short training run with runboard-core.

use anyhow::Result;
use runboard_core::{HistogramOptions, SummaryWriter, WriterConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut writer = SummaryWriter::new(WriterConfig::new().with_comment("_demo"))?;
    if let Some(dir) = writer.log_dir() {
        println!("Writing run to {}", dir.display());
    }

    for step in 0..50u64 {
        let loss = 1.0 / (step as f64 + 1.0);
        writer.add_scalar("train/loss", loss, Some(step), None)?;
        writer.add_scalar("train/lr", 1e-3, Some(step), None)?;
    }

    writer.add_text("notes", "lr schedule held constant", Some(49), None)?;

    let weights: Vec<f64> = (0..1000).map(|i| (i as f64 * 0.01).sin()).collect();
    writer.add_histogram(
        "params/weights",
        &weights,
        Some(49),
        None,
        HistogramOptions::default().with_bins(20),
    )?;

    writer.close()?;
    Ok(())
}

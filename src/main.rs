//! HealthBot evaluator
//!
//! Evaluates one measurement locally, without the API server.
//!
//! ```text
//! healthbot --height 1.65 --weight 65
//! healthbot --height 1.65 --weight 65 --json
//! ```

use anyhow::Context;
use clap::Parser;
use healthbot::bmi::{evaluate, scale_reference, Measurement};
use healthbot::config::Config;

#[derive(Parser)]
#[command(name = "healthbot")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Calculate your Body Mass Index and weight category")]
struct Args {
    /// Height in meters (1.0 - 2.5)
    #[arg(long, default_value_t = 1.65)]
    height: f64,

    /// Weight in kilograms (30 - 200)
    #[arg(long, default_value_t = 65.0)]
    weight: f64,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = Config::load_default();
    config.logging.init();

    tracing::debug!("HealthBot evaluator v{}", env!("CARGO_PKG_VERSION"));

    let measurement = Measurement::validated(args.height, args.weight)
        .context("measurement rejected")?;
    let report = evaluate(&measurement);

    tracing::info!(
        height = measurement.height,
        weight = measurement.weight,
        bmi = report.bmi,
        category = %report.category,
        "Evaluated measurement"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Your BMI: {:.2}", report.bmi);
    println!("Category: {}", report.category.label());
    println!("Suggestion: {}", report.suggestion);
    println!();
    print_scale(report.scale_position);

    Ok(())
}

/// Text rendition of the reference bar with a marker under the user's BMI
fn print_scale(position: f64) {
    const BAND_WIDTH: usize = 16;

    let bands = scale_reference();
    for band in &bands {
        print!("|{:^width$}", band.label, width = BAND_WIDTH - 1);
    }
    println!("|");
    for band in &bands {
        print!("|{:^width$}", band.range, width = BAND_WIDTH - 1);
    }
    println!("|");

    let column = (position.clamp(0.0, 4.0) * BAND_WIDTH as f64).round() as usize;
    println!("{}^ {:.2}", " ".repeat(column), position);
}

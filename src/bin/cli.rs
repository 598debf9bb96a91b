//! HealthBot CLI
//!
//! Command-line client for a running HealthBot API:
//! - Evaluate BMI
//! - Show the reference scale
//! - Inspect the synthetic dataset
//! - Check server status

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "healthbot-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Command-line client for the HealthBot API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:8082", global = true)]
    pub api_url: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate BMI
    Bmi {
        /// Height in meters
        height: f64,
        /// Weight in kilograms
        weight: f64,
    },

    /// Show the BMI reference scale
    Scale,

    /// Summary statistics for a dataset column
    Stats {
        /// Column name (e.g. BMI, heart_rate)
        metric: String,
    },

    /// Correlations between dataset columns
    Correlations {
        /// Number of pairs to show
        #[arg(short, long, default_value = "10")]
        top: usize,
    },

    /// Export the dataset as CSV
    Export {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show server status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Bmi { height, weight } => {
            let body = serde_json::json!({ "height": height, "weight": weight });

            let response = client
                .post(format!("{}/api/v1/bmi", cli.api_url))
                .json(&body)
                .send()
                .await?;

            let data = expect_success(response, "BMI calculation").await?;

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                println!(
                    "Your BMI: {:.2}",
                    data["bmi"].as_f64().unwrap_or_default()
                );
                println!(
                    "Category: {}",
                    data["category_label"].as_str().unwrap_or("-")
                );
                println!(
                    "Suggestion: {}",
                    data["suggestion"].as_str().unwrap_or("-")
                );
                println!(
                    "Scale position: {:.2} / 4",
                    data["scale_position"].as_f64().unwrap_or_default()
                );
            }
        }

        Commands::Scale => {
            let response = client
                .get(format!("{}/api/v1/bmi/scale", cli.api_url))
                .send()
                .await?;

            let data = expect_success(response, "Scale lookup").await?;

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                println!("{:<14} {:<14} {}", "Category", "Range", "Color");
                println!("{}", "-".repeat(38));
                for band in data["bands"].as_array().into_iter().flatten() {
                    println!(
                        "{:<14} {:<14} {}",
                        band["label"].as_str().unwrap_or("-"),
                        band["range"].as_str().unwrap_or("-"),
                        band["color"].as_str().unwrap_or("-")
                    );
                }
            }
        }

        Commands::Stats { metric } => {
            let response = client
                .get(format!("{}/api/v1/dataset/stats/{}", cli.api_url, metric))
                .send()
                .await?;

            let data = expect_success(response, "Stats lookup").await?;

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                println!("{}", data["metric"].as_str().unwrap_or(&metric));
                for key in ["count", "mean", "median", "min", "max"] {
                    let value = data[key]
                        .as_f64()
                        .map(|v| format!("{:.2}", v))
                        .unwrap_or_else(|| "-".to_string());
                    println!("  {:<8} {}", key, value);
                }
            }
        }

        Commands::Correlations { top } => {
            let response = client
                .get(format!("{}/api/v1/dataset/correlations", cli.api_url))
                .send()
                .await?;

            let data = expect_success(response, "Correlation lookup").await?;

            if cli.format == "json" {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                println!(
                    "{:<16} {:<16} {:>8}  {}",
                    "Metric A", "Metric B", "r", "Strength"
                );
                println!("{}", "-".repeat(54));
                for pair in data["pairs"].as_array().into_iter().flatten().take(top) {
                    println!(
                        "{:<16} {:<16} {:>8.3}  {} {}",
                        pair["metric_a"].as_str().unwrap_or("-"),
                        pair["metric_b"].as_str().unwrap_or("-"),
                        pair["coefficient"].as_f64().unwrap_or_default(),
                        pair["strength"].as_str().unwrap_or("-"),
                        pair["direction"].as_str().unwrap_or("")
                    );
                }
            }
        }

        Commands::Export { output } => {
            let response = client
                .get(format!("{}/api/v1/dataset/export", cli.api_url))
                .send()
                .await?;

            if !response.status().is_success() {
                anyhow::bail!("Export failed: {}", response.status());
            }

            let data = response.text().await?;

            match output {
                Some(path) => {
                    std::fs::write(&path, &data)?;
                    println!("Exported to {:?}", path);
                }
                None => {
                    print!("{}", data);
                }
            }
        }

        Commands::Status => {
            let response = client
                .get(format!("{}/health", cli.api_url))
                .send()
                .await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: serde_json::Value = resp.json().await?;

                    println!("HealthBot v{}", env!("CARGO_PKG_VERSION"));
                    println!();
                    println!(
                        "API Status: {}",
                        health["status"].as_str().unwrap_or("unknown")
                    );
                    println!(
                        "Dataset: {} ({} rows)",
                        health["dataset"].as_str().unwrap_or("unknown"),
                        health["dataset_rows"].as_u64().unwrap_or(0)
                    );

                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!();
                        println!("Uptime: {}", format_duration(uptime));
                    }
                }
                Ok(resp) => {
                    anyhow::bail!("API returned error: {}", resp.status());
                }
                Err(e) => {
                    eprintln!("Cannot connect to HealthBot API at {}", cli.api_url);
                    eprintln!();
                    eprintln!("Make sure the HealthBot API server is running:");
                    eprintln!("  cargo run --bin healthbot-api");
                    return Err(e.into());
                }
            }
        }

        Commands::Config { output } => {
            let config = healthbot::config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

/// Parse a JSON body, turning non-2xx responses into errors carrying the
/// server's message
async fn expect_success(
    response: reqwest::Response,
    action: &str,
) -> anyhow::Result<serde_json::Value> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&text)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or(text);

    anyhow::bail!("{} failed ({}): {}", action, status, message)
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}

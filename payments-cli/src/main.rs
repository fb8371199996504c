//! Payments CLI
//!
//! Command-line interface for the payment charge API.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use payments_client::PaymentsClient;
use payments_types::{Currency, SourceType};

#[derive(Parser)]
#[command(name = "payments")]
#[command(author, version, about = "Payment charge API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Payments API
    #[arg(
        long,
        env = "PAYMENTS_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a payment and print the authorize URI
    Create {
        /// Amount in the smallest currency unit (satang)
        #[arg(long)]
        amount: i64,
        #[arg(long, default_value = "thb")]
        currency: String,
        /// Where the payer returns after authorization
        #[arg(long)]
        return_uri: String,
        #[arg(long, default_value = "internet_banking_scb")]
        source_type: String,
    },
    /// Show the stored status of a charge
    Status {
        /// Gateway charge ID (chrg_...)
        charge_id: String,
    },
    /// Post a saved webhook payload to the service
    ReplayEvent {
        /// JSON file containing the event
        file: PathBuf,
    },
    /// Check API health
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = PaymentsClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Create {
            amount,
            currency,
            return_uri,
            source_type,
        } => {
            let result = client
                .create_payment(
                    amount,
                    Currency::from(currency),
                    &return_uri,
                    SourceType::from(source_type),
                )
                .await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        Commands::Status { charge_id } => {
            let status = client.get_payment_status(&charge_id).await?;
            println!("{}", serde_json::to_string_pretty(&status)?);
        }

        Commands::ReplayEvent { file } => {
            let raw = tokio::fs::read_to_string(&file)
                .await
                .with_context(|| format!("reading {}", file.display()))?;
            let event: serde_json::Value = serde_json::from_str(&raw)
                .with_context(|| format!("{} is not valid JSON", file.display()))?;
            client.send_omise_event(&event).await?;
            println!("✓ Event delivered");
        }
    }

    Ok(())
}

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rade_client::config::loader::file_to_config;
use rade_client::observability::metrics::encode_metrics;
use rade_client::services::Birthday;
use rade_client::utils::logging::{self, LogLevel};
use rade_client::{RadeServices, ServiceConfig};
use serde::Serialize;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YAML config; credentials are read from RADE_* variables when omitted
    #[arg(short, long, env = "RADE_CONFIG")]
    config: Option<PathBuf>,
    #[arg(long, env = "LOG_LEVEL" , value_enum)]
    log_level: Option<LogLevel>,
    /// print prometheus metrics after the command
    #[arg(long)]
    metrics: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the IBAN behind a card number
    CardToIban { card_number: String },
    /// Resolve the deposit behind a card number
    CardToDeposit { card_number: String },
    /// Convert a deposit number to an IBAN
    DepositToIban { deposit_number: String, bank_code: String },
    /// List banks supported by deposit-to-iban
    Banks,
    /// Look up the owner and bank of an IBAN
    IbanInquiry { iban: String },
    /// Verify an IBAN against a national code and birth date
    IbanOwnerVerification {
        iban: String,
        national_code: String,
        year: String,
        month: String,
        day: String,
    },
    /// Check that a mobile number belongs to a national code
    Shahkar { mobile: String, national_code: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Load config
    // -------------------------------

    let args = Args::parse();
    let service_config = match &args.config {
        Some(path) => file_to_config(path).await?,
        None => ServiceConfig::from_env(),
    };
    logging::run(&service_config.settings, args.log_level);

    // -------------------------------
    // 2. Build client
    // -------------------------------

    let rade = RadeServices::new(service_config)?;

    // -------------------------------
    // 3. Run command
    // -------------------------------

    match &args.command {
        Command::CardToIban { card_number } => print(&rade.card_to_iban(card_number).await?)?,
        Command::CardToDeposit { card_number } => print(&rade.card_to_deposit(card_number).await?)?,
        Command::DepositToIban { deposit_number, bank_code } => {
            print(&rade.deposit_to_iban(deposit_number, bank_code).await?)?
        }
        Command::Banks => print(&rade.deposit_to_iban_bank_list().await?)?,
        Command::IbanInquiry { iban } => print(&rade.iban_inquiry(iban).await?)?,
        Command::IbanOwnerVerification { iban, national_code, year, month, day } => {
            let birthday = Birthday::new(year, month, day);
            print(&rade.iban_owner_verification(iban, national_code, &birthday).await?)?
        }
        Command::Shahkar { mobile, national_code } => print(&rade.shahkar(mobile, national_code).await?)?,
    }

    // -------------------------------
    // 4. Metrics
    // -------------------------------

    if args.metrics {
        print!("{}", encode_metrics().await?);
    }
    info!("done");
    Ok(())
}

fn print<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

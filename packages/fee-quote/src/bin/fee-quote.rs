//! Fee quote binary.

use clap::{Parser, Subcommand};
use fee_quote::{settings, Quote, ResaleOverrides};
use ticketing_pricing::{Amount, FeeRate};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "fee-quote", about = "Ticket fee breakdowns")]
struct Cli {
    /// Print the quote as JSON instead of a table.
    #[arg(long, global = true)]
    json: bool,

    /// Config file base name or path (defaults to `pricing`).
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fee breakdown for listing a ticket on the resale market.
    Resale {
        #[arg(long)]
        price: Amount,
        #[arg(long)]
        original: Amount,
        #[arg(long)]
        organizer_fee: Option<FeeRate>,
        #[arg(long)]
        platform_fee: Option<FeeRate>,
        /// Quote even when the price is above the markup ceiling.
        #[arg(long)]
        skip_cap: bool,
    },
    /// What the organizer receives per ticket at a tier price.
    Tier {
        #[arg(long)]
        price: Amount,
        #[arg(long)]
        platform_fee: Option<FeeRate>,
    },
    /// Fee and net amount for an organizer withdrawal.
    Withdraw {
        #[arg(long)]
        amount: Amount,
        #[arg(long)]
        available: Amount,
    },
    /// Print the effective pricing configuration.
    Config,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let pricing = match &cli.config {
        Some(file) => settings::load_from(file),
        None => settings::load(),
    }
    .unwrap_or_else(|e| {
        error!(error = %e, "FATAL: Config error, fix env vars or pricing.toml");
        std::process::exit(1);
    });

    let result = match cli.command {
        Command::Config => {
            println!("{}", serde_json::to_string_pretty(&pricing)?);
            return Ok(());
        }
        Command::Resale {
            price,
            original,
            organizer_fee,
            platform_fee,
            skip_cap,
        } => Quote::resale(
            &pricing,
            price,
            original,
            ResaleOverrides {
                organizer_fee,
                platform_fee,
                skip_cap,
            },
        ),
        Command::Tier {
            price,
            platform_fee,
        } => Quote::tier(&pricing, price, platform_fee),
        Command::Withdraw { amount, available } => Quote::withdrawal(&pricing, amount, available),
    };

    match result {
        Ok(quote) => {
            if cli.json {
                println!("{}", quote.to_json()?);
            } else {
                println!("{}", quote.render());
            }
            info!("Quote rendered");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Quote refused");
            std::process::exit(1);
        }
    }
}

//! Orchard Main Entry Point
//!
//! Command-line interface over the farm's tables: applies migrations, prints
//! supplier ledgers, budget comparisons and the dashboard, and records
//! purchases, payments and pick-list values.

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use orchard::bookkeeping::{NewPayment, NewPurchase};
use orchard::commands::{self, OutputFormat};
use orchard::{AppError, Config, Dependencies};
use orchard_store::CancelToken;
use rust_decimal::Decimal;
use std::env;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "orchard")]
#[command(about = "Farm management: supplier ledgers, budgets and dashboard summaries")]
#[command(version)]
struct Cli {
    /// Use in-memory demo data instead of PostgreSQL (writes last for one run)
    #[arg(long, global = true)]
    offline: bool,

    /// Print reports as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,

    /// Print the running ledger and outstanding balance of suppliers
    SupplierLedger {
        /// Supplier id (default: every supplier)
        #[arg(long)]
        supplier: Option<Uuid>,
    },

    /// Compare budgets with expenses for a period
    Budget {
        /// First day of the period (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,

        /// Last day of the period, inclusive (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,
    },

    /// Print finance, harvest, inventory and equipment summaries
    Dashboard {
        /// Reference date (default: today)
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Record a purchase invoice from a supplier
    RecordPurchase {
        #[arg(long)]
        supplier: Uuid,

        #[arg(long)]
        description: String,

        /// Amount before tax
        #[arg(long)]
        subtotal: Decimal,

        #[arg(long, default_value = "0")]
        tax: Decimal,

        /// Invoice date (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Record a payment to a supplier
    RecordPayment {
        #[arg(long)]
        supplier: Uuid,

        #[arg(long)]
        amount: Decimal,

        /// Payment date (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Cash, transfer, cheque...
        #[arg(long)]
        method: Option<String>,

        #[arg(long)]
        reference: Option<String>,
    },

    /// List, add or delete pick-list values
    MasterData {
        #[command(subcommand)]
        action: MasterDataAction,
    },
}

#[derive(Subcommand)]
enum MasterDataAction {
    /// List values
    List {
        /// Only values of this list (e.g. variety, expense_category)
        #[arg(long)]
        kind: Option<String>,
    },

    /// Add a value to a list
    Add {
        #[arg(long)]
        kind: String,

        #[arg(long)]
        value: String,
    },

    /// Delete a value by id
    Delete {
        #[arg(long)]
        id: Uuid,
    },
}

/// Initialize tracing/logging.
///
/// `LOG_FORMAT=json` switches to structured JSON lines; anything else prints
/// pretty console output. Logs go to stderr so reports on stdout stay clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("orchard=info"));

    let json = env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json"));
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    info!(
        service_name = "orchard",
        service_version = env!("CARGO_PKG_VERSION"),
        json,
        "Tracing initialized"
    );
}

/// Cancels `token` on Ctrl-C so in-flight fetches are dropped.
fn cancel_on_interrupt(token: CancelToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling");
            token.cancel();
        }
    });
}

async fn run(cli: Cli) -> Result<String, AppError> {
    let config = Config::from_env()?;
    let today = Local::now().date_naive();
    let format = if cli.json { OutputFormat::Json } else { OutputFormat::Text };

    let deps = if cli.offline {
        Dependencies::offline(&config, today)
    } else {
        Dependencies::connect(&config).await?
    };

    let cancel = CancelToken::new();
    cancel_on_interrupt(cancel.clone());

    match cli.command {
        Commands::Migrate => commands::migrate(&deps).await,
        Commands::SupplierLedger { supplier } => {
            commands::supplier_ledger(&deps, supplier, format, &cancel).await
        }
        Commands::Budget { start, end } => commands::budget(&deps, start, end, format, &cancel).await,
        Commands::Dashboard { today: date } => {
            commands::dashboard(&deps, date.unwrap_or(today), format, &cancel).await
        }
        Commands::RecordPurchase {
            supplier,
            description,
            subtotal,
            tax,
            date,
        } => {
            let purchase = NewPurchase {
                supplier_id: supplier,
                purchased_on: date.unwrap_or(today),
                description,
                subtotal,
                tax,
            };
            commands::record_purchase(&deps, purchase, format, &cancel).await
        }
        Commands::RecordPayment {
            supplier,
            amount,
            date,
            method,
            reference,
        } => {
            let payment = NewPayment {
                supplier_id: supplier,
                paid_on: date.unwrap_or(today),
                amount,
                method,
                reference,
            };
            commands::record_payment(&deps, payment, format, &cancel).await
        }
        Commands::MasterData { action } => match action {
            MasterDataAction::List { kind } => {
                commands::master_data_list(&deps, kind.as_deref(), format, &cancel).await
            }
            MasterDataAction::Add { kind, value } => {
                commands::master_data_add(&deps, &kind, &value, format, &cancel).await
            }
            MasterDataAction::Delete { id } => commands::master_data_delete(&deps, id, format, &cancel).await,
        },
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Load environment variables from .env file
    dotenv().ok();

    init_tracing();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(output) => {
            print!("{output}");
            Ok(())
        }
        Err(e) => {
            if e.is_configuration() {
                error!(error = %e, "Backend not configured; set DATABASE_URL and ORCHARD_USER_ID or pass --offline");
            } else {
                error!(error = %e, "Command failed");
            }
            Err(e)
        }
    }
}

//! Ledgerdesk CLI
//!
//! Receivables, payables, ageing and BNPL exposure from the accounting API.

mod commands;
mod render;

use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ledgerdesk_client::{ApiClient, SyncType};
use ledgerdesk_core::ValidationMode;
use ledgerdesk_core::domain::LedgerSide;
use ledgerdesk_core::rollup::{RollupSortKey, SortDirection};
use ledgerdesk_shared::AppConfig;

#[derive(Parser)]
#[command(name = "ledgerdesk")]
#[command(about = "Receivables, payables and BNPL exposure analytics")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Reference date for ageing and expiry (YYYY-MM-DD); defaults to today
    #[arg(long, global = true)]
    as_of: Option<NaiveDate>,

    /// Reject records with missing amounts or broken invariants
    #[arg(long, global = true)]
    strict: bool,

    /// Accounting API base URL; overrides `LEDGERDESK__API__BASE_URL`
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Customer-wise receivables
    Receivables(RollupArgs),
    /// Vendor-wise payables
    Payables(RollupArgs),
    /// Ageing buckets of open documents
    Ageing {
        /// Only one side of the books
        #[arg(long, value_enum)]
        side: Option<SideArg>,
    },
    /// BNPL limit utilization and expiry
    Limits,
    /// Dashboard summary
    Dashboard {
        /// Build from fetched records instead of the API bundle
        #[arg(long)]
        local: bool,
    },
    /// Trigger a Tally synchronisation
    Sync {
        /// Direction of the sync
        #[arg(value_enum)]
        direction: SyncArg,
    },
}

#[derive(Args)]
struct RollupArgs {
    /// Sort column
    #[arg(long, value_enum, default_value_t = SortArg::TotalDue)]
    sort: SortArg,

    /// Sort ascending (default is descending)
    #[arg(long)]
    asc: bool,

    /// Use the server-side rollup endpoint
    #[arg(long)]
    server: bool,
}

impl RollupArgs {
    const fn direction(&self) -> SortDirection {
        if self.asc {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Name,
    TotalDue,
    LastPayment,
    OldestDue,
    AvgCollection,
}

impl From<SortArg> for RollupSortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Name => Self::Name,
            SortArg::TotalDue => Self::TotalDue,
            SortArg::LastPayment => Self::LastPaymentDate,
            SortArg::OldestDue => Self::OldestDueDate,
            SortArg::AvgCollection => Self::AvgCollectionDays,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SideArg {
    Receivable,
    Payable,
}

impl From<SideArg> for LedgerSide {
    fn from(arg: SideArg) -> Self {
        match arg {
            SideArg::Receivable => Self::Receivable,
            SideArg::Payable => Self::Payable,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SyncArg {
    Push,
    Pull,
}

impl From<SyncArg> for SyncType {
    fn from(arg: SyncArg) -> Self {
        match arg {
            SyncArg::Push => Self::Push,
            SyncArg::Pull => Self::Pull,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so table/JSON output stays clean on stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ledgerdesk=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    if let Some(base_url) = cli.base_url.clone() {
        config.api.base_url = base_url;
    }
    let mode = ValidationMode::from_strict(cli.strict || config.validation.strict);
    let as_of = cli.as_of.unwrap_or_else(|| Local::now().date_naive());

    let api = ApiClient::new(&config.api, mode)?;
    info!(base_url = api.base_url(), ?mode, %as_of, "ledgerdesk starting");

    let ctx = commands::Context {
        api,
        as_of,
        config,
        json: cli.json,
    };
    let output = commands::run(&ctx, cli.command).await.map_err(|e| {
        error!(code = e.error_code(), status = e.status_code(), "{e}");
        e
    })?;

    println!("{output}");
    Ok(())
}

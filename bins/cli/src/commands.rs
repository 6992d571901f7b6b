//! Command handlers.

use chrono::NaiveDate;
use ledgerdesk_client::ApiClient;
use ledgerdesk_core::LedgerSnapshot;
use ledgerdesk_core::dashboard::{DashboardOptions, DashboardService};
use ledgerdesk_core::domain::LedgerSide;
use ledgerdesk_core::rollup::{PartyRow, sort_rows};
use ledgerdesk_shared::{AppConfig, AppError, AppResult};
use serde::Serialize;

use crate::render;
use crate::{Command, RollupArgs};

/// Everything a command needs.
pub struct Context {
    pub api: ApiClient,
    pub as_of: NaiveDate,
    pub config: AppConfig,
    pub json: bool,
}

impl Context {
    fn options(&self) -> DashboardOptions {
        DashboardOptions {
            recent_limit: self.config.display.recent_limit,
            expiry_warning_days: self.config.display.expiry_warning_days,
        }
    }

    fn output<T: Serialize>(&self, value: &T, table: impl FnOnce() -> String) -> AppResult<String> {
        if self.json {
            serde_json::to_string_pretty(value).map_err(|e| AppError::Internal(e.to_string()))
        } else {
            Ok(table())
        }
    }

    async fn snapshot(&self) -> AppResult<LedgerSnapshot> {
        Ok(self.api.fetch_snapshot(self.as_of).await?)
    }
}

/// Runs one command and returns what to print.
pub async fn run(ctx: &Context, command: Command) -> AppResult<String> {
    let currency = ctx.config.display.currency;

    match command {
        Command::Receivables(args) => rollup(ctx, LedgerSide::Receivable, &args).await,
        Command::Payables(args) => rollup(ctx, LedgerSide::Payable, &args).await,
        Command::Ageing { side } => {
            let snapshot = LedgerSnapshot::new(
                ctx.as_of,
                ctx.api.transactions(None).await?,
                Vec::new(),
                Vec::new(),
            );
            let sides = side.map_or_else(
                || vec![LedgerSide::Receivable, LedgerSide::Payable],
                |s| vec![s.into()],
            );
            let summaries: Vec<_> = sides.iter().map(|s| (*s, snapshot.ageing(*s))).collect();

            ctx.output(&summaries, || {
                summaries
                    .iter()
                    .map(|(side, summary)| {
                        render::ageing_table(&format!("{} ageing", side.label()), summary, currency)
                    })
                    .collect::<Vec<_>>()
                    .join("\n\n")
            })
        }
        Command::Limits => {
            let snapshot = ctx.snapshot().await?;
            let limits = snapshot.limit_utilizations(ctx.config.display.expiry_warning_days);
            ctx.output(&limits, || {
                render::limits_table(&limits, |id| snapshot.party_name(id), currency)
            })
        }
        Command::Dashboard { local } => {
            // The bundle carries no party names.
            let (summary, names) = if local {
                let snapshot = ctx.snapshot().await?;
                (DashboardService::summarize(&snapshot, ctx.options()), snapshot)
            } else {
                let (summary, parties) = tokio::try_join!(
                    ctx.api.dashboard(ctx.as_of, ctx.options()),
                    ctx.api.parties(None),
                )?;
                let names = LedgerSnapshot::new(ctx.as_of, Vec::new(), parties, Vec::new());
                (summary, names)
            };
            ctx.output(&summary, || {
                render::dashboard(&summary, |id| names.party_name(id), currency)
            })
        }
        Command::Sync { direction } => {
            let outcome = ctx.api.tally_sync(direction.into()).await?;
            if !outcome.success {
                return Err(AppError::ExternalService(render::sync_outcome(&outcome)));
            }
            ctx.output(&outcome, || render::sync_outcome(&outcome))
        }
    }
}

async fn rollup(ctx: &Context, side: LedgerSide, args: &RollupArgs) -> AppResult<String> {
    let mut rows: Vec<PartyRow> = if args.server {
        match side {
            LedgerSide::Receivable => ctx.api.receivable_customers().await?,
            LedgerSide::Payable => ctx.api.payable_vendors().await?,
        }
    } else {
        ctx.snapshot().await?.party_rows(side, ctx.api.mode())?
    };
    sort_rows(&mut rows, args.sort.into(), args.direction());

    ctx.output(&rows, || {
        render::party_table(&rows, ctx.as_of, ctx.config.display.currency)
    })
}

//! HTTP client for the accounting API.

use std::time::Duration;

use chrono::NaiveDate;
use ledgerdesk_core::dashboard::{DashboardOptions, DashboardService, DashboardSummary};
use ledgerdesk_core::domain::{BnplLimit, Party, PartyType, Transaction, TransactionType};
use ledgerdesk_core::limits::LimitService;
use ledgerdesk_core::rollup::PartyRow;
use ledgerdesk_core::{LedgerSnapshot, ValidationError, ValidationMode};
use ledgerdesk_shared::config::ApiConfig;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info};

use crate::error::{ClientError, ClientResult};
use crate::wire::{
    BnplLimitDto, DashboardDto, PartyDto, PartyRowDto, SyncOutcome, SyncRequest, SyncType,
    TransactionDto, convert_all,
};

/// Client for the accounting REST API.
///
/// Every fetched record passes boundary validation under the client's
/// [`ValidationMode`] before it is returned.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    mode: ValidationMode,
}

impl ApiClient {
    /// Creates a client from the `api` config section.
    pub fn new(config: &ApiConfig, mode: ValidationMode) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            mode,
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Validation mode applied to responses.
    pub const fn mode(&self) -> ValidationMode {
        self.mode
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!(%method, path, "api request");
        self.http
            .request(method, format!("{}{}", self.base_url, path))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        path: &str,
        request: RequestBuilder,
    ) -> ClientResult<T> {
        let response = request.send().await.map_err(|e| {
            error!(path, error = %e, "api request failed");
            ClientError::Network(e)
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            error!(path, "api resource not found");
            return Err(ClientError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("unknown").to_string()
            } else {
                body
            };
            error!(path, status = status.as_u16(), %message, "api returned error status");
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            error!(path, error = %e, "malformed api payload");
            ClientError::Validation(ValidationError::MalformedPayload(format!("{path}: {e}")))
        })
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ClientResult<T> {
        let request = self.request(Method::GET, path).query(query);
        self.send(path, request).await
    }

    /// `GET /api/transactions`, optionally filtered by type.
    pub async fn transactions(
        &self,
        filter: Option<TransactionType>,
    ) -> ClientResult<Vec<Transaction>> {
        let query: Vec<(&str, &str)> = filter.iter().map(|t| ("type", t.as_str())).collect();
        let dtos: Vec<TransactionDto> = self.get("/api/transactions", &query).await?;
        Ok(convert_all(dtos, self.mode, TransactionDto::into_domain)?)
    }

    /// `GET /api/parties`, optionally filtered by type.
    pub async fn parties(&self, filter: Option<PartyType>) -> ClientResult<Vec<Party>> {
        let query: Vec<(&str, &str)> = filter.iter().map(|t| ("type", t.as_str())).collect();
        let dtos: Vec<PartyDto> = self.get("/api/parties", &query).await?;
        Ok(convert_all(dtos, self.mode, PartyDto::into_domain)?)
    }

    /// `GET /api/bnpl-limits`.
    pub async fn bnpl_limits(&self) -> ClientResult<Vec<BnplLimit>> {
        let dtos: Vec<BnplLimitDto> = self.get("/api/bnpl-limits", &[]).await?;
        Ok(convert_all(dtos, self.mode, BnplLimitDto::into_domain)?)
    }

    /// `GET /api/finance/receivables/customers`: server-side customer rollup.
    pub async fn receivable_customers(&self) -> ClientResult<Vec<PartyRow>> {
        self.rollup("/api/finance/receivables/customers").await
    }

    /// `GET /api/finance/payables/vendors`: server-side vendor rollup.
    pub async fn payable_vendors(&self) -> ClientResult<Vec<PartyRow>> {
        self.rollup("/api/finance/payables/vendors").await
    }

    async fn rollup(&self, path: &str) -> ClientResult<Vec<PartyRow>> {
        let dtos: Vec<PartyRowDto> = self.get(path, &[]).await?;
        Ok(convert_all(dtos, self.mode, PartyRowDto::into_domain)?)
    }

    /// `GET /api/dashboard`.
    ///
    /// Limits are re-evaluated as of `as_of`. Bucket counts are `None` since
    /// the bundle only carries amounts.
    pub async fn dashboard(
        &self,
        as_of: NaiveDate,
        options: DashboardOptions,
    ) -> ClientResult<DashboardSummary> {
        let dto: DashboardDto = self.get("/api/dashboard", &[]).await?;
        let limits = convert_all(dto.bnpl_limits, self.mode, BnplLimitDto::into_domain)?;
        let recent = convert_all(dto.recent_transactions, self.mode, TransactionDto::into_domain)?;

        Ok(DashboardSummary {
            as_of,
            receivables: dto.receivables_ageing.into_domain(self.mode, "receivables")?,
            payables: dto.payables_ageing.into_domain(self.mode, "payables")?,
            limits: limits
                .iter()
                .map(|l| LimitService::evaluate(l, as_of, options.expiry_warning_days))
                .collect(),
            recent_transactions: DashboardService::recent(&recent, options.recent_limit),
            pending_sync_count: dto.pending_sync_count,
        })
    }

    /// `POST /api/tally-sync`. Not retried.
    pub async fn tally_sync(&self, sync_type: SyncType) -> ClientResult<SyncOutcome> {
        let path = "/api/tally-sync";
        let request = self
            .request(Method::POST, path)
            .json(&SyncRequest { sync_type });
        let outcome: SyncOutcome = self.send(path, request).await?;

        if outcome.success {
            info!(%sync_type, records = ?outcome.records_synced, "tally sync completed");
        } else {
            error!(%sync_type, message = %outcome.message, "tally sync failed");
        }
        Ok(outcome)
    }

    /// Fetches transactions, parties and limits concurrently.
    ///
    /// The first failure fails the whole fetch.
    pub async fn fetch_snapshot(&self, as_of: NaiveDate) -> ClientResult<LedgerSnapshot> {
        let (transactions, parties, limits) = tokio::try_join!(
            self.transactions(None),
            self.parties(None),
            self.bnpl_limits(),
        )?;
        info!(
            transactions = transactions.len(),
            parties = parties.len(),
            limits = limits.len(),
            %as_of,
            "snapshot fetched"
        );
        Ok(LedgerSnapshot::new(as_of, transactions, parties, limits))
    }
}

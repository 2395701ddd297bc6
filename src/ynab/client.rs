//! Blocking client for the YNAB REST API
//!
//! Only the two read endpoints the forecast needs are covered: the account
//! list and the scheduled transaction list of one budget.

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

use super::token::ApiToken;
use crate::error::{RunwayError, RunwayResult};
use crate::models::{Account, ScheduledTransaction};
use crate::storage::BudgetSnapshot;

#[derive(Debug, Deserialize)]
struct DataResponse<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct AccountsData {
    accounts: Vec<Account>,
}

#[derive(Debug, Deserialize)]
struct ScheduledTransactionsData {
    scheduled_transactions: Vec<ScheduledTransaction>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    detail: Option<String>,
}

/// Read-only YNAB API client
#[derive(Debug)]
pub struct YnabClient {
    http: Client,
    base_url: String,
    token: ApiToken,
}

impl YnabClient {
    pub fn new(token: ApiToken, base_url: &str, timeout: Duration) -> RunwayResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("runway/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> RunwayResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let resp = self
            .http
            .get(&url)
            .bearer_auth(self.token.expose())
            .header(ACCEPT, "application/json")
            .send()?;

        let status = resp.status();
        let body = resp.text()?;
        if !status.is_success() {
            return Err(api_error(status.as_u16(), &body));
        }

        let response: DataResponse<T> = serde_json::from_str(&body)?;
        Ok(response.data)
    }

    /// All accounts of a budget, as returned by the API
    pub fn fetch_accounts(&self, budget_id: &str) -> RunwayResult<Vec<Account>> {
        let data: AccountsData = self.get(&format!("/budgets/{}/accounts", budget_id))?;
        debug!("Fetched {} account(s)", data.accounts.len());
        Ok(data.accounts)
    }

    /// All scheduled transactions of a budget, as returned by the API
    pub fn fetch_scheduled_transactions(
        &self,
        budget_id: &str,
    ) -> RunwayResult<Vec<ScheduledTransaction>> {
        let data: ScheduledTransactionsData =
            self.get(&format!("/budgets/{}/scheduled_transactions", budget_id))?;
        debug!(
            "Fetched {} scheduled transaction(s)",
            data.scheduled_transactions.len()
        );
        Ok(data.scheduled_transactions)
    }

    /// Fetch both lists and drop inactive entries
    pub fn fetch_snapshot(&self, budget_id: &str) -> RunwayResult<BudgetSnapshot> {
        info!("Fetching budget {} from {}", budget_id, self.base_url);
        let accounts = self.fetch_accounts(budget_id)?;
        let schedules = self.fetch_scheduled_transactions(budget_id)?;
        Ok(BudgetSnapshot::new(accounts, schedules).without_inactive())
    }
}

/// Turn a non-success response into an error, preferring the API's own detail
fn api_error(status: u16, body: &str) -> RunwayError {
    let message = match serde_json::from_str::<ErrorResponse>(body) {
        Ok(resp) => resp
            .error
            .detail
            .or(resp.error.name)
            .unwrap_or_else(|| "unknown error".to_string()),
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body.trim().to_string(),
    };
    RunwayError::Api { status, message }
}

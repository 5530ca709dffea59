//! Budgeting-ledger HTTP client (YNAB v1 API).

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use memofill_core::{LedgerService, LedgerTransaction};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};

use crate::config::Config;

const YNAB_API_ENDPOINT: &str = "https://api.youneedabudget.com/v1";

pub struct YnabClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
    budget_id: String,
}

#[derive(Deserialize)]
struct ListResponse {
    data: ListData,
}

#[derive(Deserialize)]
struct ListData {
    transactions: Vec<LedgerTransaction>,
}

#[derive(Serialize)]
struct UpdateRequest<'a> {
    transaction: MemoPatch<'a>,
}

#[derive(Serialize)]
struct MemoPatch<'a> {
    memo: &'a str,
}

impl YnabClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: YNAB_API_ENDPOINT.to_string(),
            token: config.ynab_api_token.clone(),
            budget_id: config.ynab_budget_id.clone(),
        }
    }
}

#[async_trait]
impl LedgerService for YnabClient {
    async fn list_transactions(&self) -> Result<Vec<LedgerTransaction>> {
        let url = format!("{}/budgets/{}/transactions", self.base_url, self.budget_id);
        let resp = self
            .http
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .context("fetching transactions from YNAB")?;

        let status = resp.status();
        if !status.is_success() {
            let txt = resp.text().await.unwrap_or_default();
            bail!("YNAB error: {status} {txt}");
        }

        let out: ListResponse = resp.json().await.context("parse YNAB transactions")?;
        Ok(out.data.transactions)
    }

    async fn set_memo(&self, transaction_id: &str, memo: &str) -> Result<()> {
        let url = format!(
            "{}/budgets/{}/transactions/{}",
            self.base_url, self.budget_id, transaction_id
        );
        let body = UpdateRequest {
            transaction: MemoPatch { memo },
        };
        let resp = self
            .http
            .put(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .json(&body)
            .send()
            .await
            .with_context(|| format!("updating YNAB transaction {transaction_id}"))?;

        let status = resp.status();
        if !status.is_success() {
            let txt = resp.text().await.unwrap_or_default();
            bail!("YNAB error updating {transaction_id}: {status} {txt}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_memo_patch_body_shape() {
        let body = UpdateRequest {
            transaction: MemoPatch {
                memo: "WASTE MGMT WM EZPAY",
            },
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"transaction": {"memo": "WASTE MGMT WM EZPAY"}})
        );
    }

    #[test]
    fn test_list_envelope_decode() {
        let out: ListResponse = serde_json::from_value(json!({
            "data": {
                "transactions": [
                    {
                        "id": "t1",
                        "date": "2024-01-05",
                        "amount": -71880,
                        "payee_name": "Pwp*privacy.com",
                        "memo": null
                    }
                ]
            }
        }))
        .unwrap();
        assert_eq!(out.data.transactions.len(), 1);
        assert_eq!(out.data.transactions[0].id, "t1");
    }
}

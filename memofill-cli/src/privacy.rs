//! Card-issuer HTTP client (Privacy.com v1 API).

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use memofill_core::{DateWindow, IssuerService, IssuerTransaction};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Deserialize;

use crate::config::Config;

const PRIVACY_API_ENDPOINT: &str = "https://api.privacy.com/v1";

pub struct PrivacyClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
    page_size: u32,
}

#[derive(Deserialize)]
struct ListResponse {
    data: Vec<IssuerTransaction>,
}

impl PrivacyClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: PRIVACY_API_ENDPOINT.to_string(),
            token: config.privacy_api_token.clone(),
            page_size: config.privacy_page_size,
        }
    }
}

/// Millisecond-precision timestamp in the shape the transactions query
/// expects: `YYYY-MM-DD HH:MM:SS.mmm`.
fn window_param(t: NaiveDateTime) -> String {
    t.format("%Y-%m-%d %H:%M:%S%.3f").to_string()
}

#[async_trait]
impl IssuerService for PrivacyClient {
    async fn list_transactions(&self, window: &DateWindow) -> Result<Vec<IssuerTransaction>> {
        let url = format!("{}/transactions", self.base_url);
        let resp = self
            .http
            .get(&url)
            .header(AUTHORIZATION, format!("api-key {}", self.token))
            .header(ACCEPT, "application/json")
            .query(&[
                ("begin", window_param(window.begin())),
                ("end", window_param(window.end())),
                ("page", "1".to_string()),
                ("page_size", self.page_size.to_string()),
            ])
            .send()
            .await
            .context("fetching transactions from Privacy.com")?;

        let status = resp.status();
        if !status.is_success() {
            let txt = resp.text().await.unwrap_or_default();
            bail!("Privacy.com error: {status} {txt}");
        }

        let out: ListResponse = resp.json().await.context("parse Privacy.com transactions")?;
        Ok(out.data)
    }
}

//! Process configuration, read once from the environment at startup.

use std::env;

const DEFAULT_PRIVACY_DESCRIPTOR: &str = "Pwp*privacy.com";
const DEFAULT_PAGE_SIZE: u32 = 50;

/// Immutable run configuration. Every key is optional; unset or empty keys
/// fall back to their defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub privacy_api_token: String,
    pub ynab_api_token: String,
    pub ynab_budget_id: String,
    /// Payee-name substring that identifies issuer imports in the ledger.
    pub privacy_descriptor: String,
    /// Transactions fetched from the issuer in the single page per run.
    pub privacy_page_size: u32,
    pub verbose: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            privacy_api_token: env_or("PRIVACY_API_TOKEN", "PRIVACY_API_TOKEN"),
            ynab_api_token: env_or("YNAB_API_TOKEN", "YNAB_API_TOKEN"),
            ynab_budget_id: env_or("YNAB_BUDGET_ID", "YNAB_BUDGET_ID"),
            privacy_descriptor: env_or("PRIVACY_DESCRIPTOR", DEFAULT_PRIVACY_DESCRIPTOR),
            privacy_page_size: parse_page_size(env::var("PRIVACY_PAGE_SIZE").ok()),
            verbose: parse_flag(env::var("DEBUG").ok()),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_page_size(raw: Option<String>) -> u32 {
    raw.and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_PAGE_SIZE)
}

fn parse_flag(raw: Option<String>) -> bool {
    raw.is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
}

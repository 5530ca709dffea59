//! The reconciliation run: pull unresolved ledger transactions, pull the
//! issuer's view of the same date span, pair them up by amount, and push
//! merchant descriptors back into the ledger memos.

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::amounts::milliunits_to_cents;
use crate::matcher::find_and_consume;
use crate::types::{IssuerTransaction, LedgerTransaction};
use crate::window::DateWindow;

/// The budgeting ledger: lists transactions and patches memos.
#[async_trait]
pub trait LedgerService {
    async fn list_transactions(&self) -> Result<Vec<LedgerTransaction>>;
    async fn set_memo(&self, transaction_id: &str, memo: &str) -> Result<()>;
}

/// The card issuer: lists transactions created within a date window.
#[async_trait]
pub trait IssuerService {
    async fn list_transactions(&self, window: &DateWindow) -> Result<Vec<IssuerTransaction>>;
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Payee-name substring that marks a ledger transaction as a
    /// card-issuer import.
    pub payee_marker: String,
    /// Print per-phase diagnostics to stdout.
    pub verbose: bool,
}

/// Outcome counts for one run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Ledger transactions that were imported from the issuer and still
    /// lack a memo.
    pub candidates: usize,
    /// Memos successfully written back.
    pub updated: usize,
    /// Memo updates that failed; their transactions stay unresolved and
    /// are picked up again on the next run.
    pub update_failures: usize,
}

/// Run one full reconciliation pass.
///
/// A fetch failure on either service aborts the run: without the complete
/// ledger set or the complete issuer window, the date window and the
/// matching are unsound. A failure while patching a single memo is
/// reported and the loop moves on.
pub async fn run<L, I>(ledger: &L, issuer: &I, opts: &RunOptions) -> Result<RunSummary>
where
    L: LedgerService,
    I: IssuerService,
{
    // Phase 1: unresolved issuer imports in the ledger.
    let candidates: Vec<LedgerTransaction> = ledger
        .list_transactions()
        .await
        .context("listing ledger transactions")?
        .into_iter()
        .filter(|t| {
            t.payee_name
                .as_deref()
                .is_some_and(|p| p.contains(&opts.payee_marker))
                && t.memo_is_blank()
        })
        .collect();

    if opts.verbose {
        println!("{} unresolved issuer imports in the ledger", candidates.len());
        for t in &candidates {
            println!("  {} {} {}", t.id, t.date, t.amount);
        }
    }

    // Phase 2: covering date window. Nothing unresolved means nothing to do.
    let Some(window) = DateWindow::covering(&candidates) else {
        return Ok(RunSummary::default());
    };

    // Phase 3: issuer pool for the window. Zero-value authorizations are
    // declines and holds, never legitimate matches. Creation order is the
    // tie-break when two purchases share an amount.
    let mut pool: Vec<IssuerTransaction> = issuer
        .list_transactions(&window)
        .await
        .context("listing issuer transactions")?
        .into_iter()
        .filter(|t| t.authorization_amount != Some(0))
        .collect();
    pool.sort_by_key(|t| t.created);

    if opts.verbose {
        println!(
            "{} issuer transactions between {} and {}",
            pool.len(),
            window.first,
            window.last
        );
    }

    // Phase 4: claim a descriptor per candidate and patch the memo.
    let mut summary = RunSummary {
        candidates: candidates.len(),
        ..Default::default()
    };
    for txn in &candidates {
        let cents = milliunits_to_cents(txn.amount);
        let Some(memo) = find_and_consume(cents, &mut pool) else {
            continue;
        };
        match ledger.set_memo(&txn.id, &memo).await {
            Ok(()) => {
                summary.updated += 1;
                if opts.verbose {
                    println!(
                        "Updated transaction {} on {} for amount ${:.2} with memo {}",
                        txn.id,
                        txn.date,
                        cents as f64 / 100.0,
                        memo
                    );
                }
            }
            Err(err) => {
                summary.update_failures += 1;
                println!("Error updating transaction {}: {err:#}", txn.id);
            }
        }
    }

    Ok(summary)
}

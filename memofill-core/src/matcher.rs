//! Greedy amount matching against the in-run issuer pool.

use crate::types::IssuerTransaction;

/// Find the first pool record whose amount equals `target` and whose
/// merchant descriptor is usable text, remove it from the pool, and return
/// the descriptor.
///
/// The scan follows the pool's current order, so whoever sorted the pool
/// decides which of two equal-amount records is claimed first. Records
/// missing an amount, a merchant, or a textual descriptor are skipped in
/// place: they stay in the pool and never match. On no match the pool is
/// left unchanged and `None` is returned.
pub fn find_and_consume(target: u64, pool: &mut Vec<IssuerTransaction>) -> Option<String> {
    let idx = pool
        .iter()
        .position(|txn| txn.amount == Some(target) && txn.descriptor().is_some())?;
    let claimed = pool.remove(idx);
    claimed.descriptor().map(str::to_owned)
}

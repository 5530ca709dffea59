//! Calendar-day window covering a batch of unresolved ledger transactions.

use chrono::{NaiveDate, NaiveDateTime};

use crate::types::LedgerTransaction;

/// Inclusive span of calendar days, first through last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl DateWindow {
    /// Smallest window covering every transaction's date, or `None` for an
    /// empty batch.
    pub fn covering(txns: &[LedgerTransaction]) -> Option<Self> {
        let first = txns.iter().map(|t| t.date).min()?;
        let last = txns.iter().map(|t| t.date).max()?;
        Some(Self { first, last })
    }

    /// Start of the first day.
    pub fn begin(&self) -> NaiveDateTime {
        self.first.and_hms_opt(0, 0, 0).expect("midnight is valid")
    }

    /// Last representable millisecond of the last day. The issuer query is
    /// inclusive, so the end bound reaches 23:59:59.999 rather than stopping
    /// at any individual transaction's timestamp.
    pub fn end(&self) -> NaiveDateTime {
        self.last
            .and_hms_milli_opt(23, 59, 59, 999)
            .expect("23:59:59.999 is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(id: &str, date: &str) -> LedgerTransaction {
        LedgerTransaction {
            id: id.to_string(),
            date: date.parse().unwrap(),
            amount: -1000,
            payee_name: None,
            memo: None,
        }
    }

    #[test]
    fn test_covering_min_and_max() {
        let txns = vec![
            txn("a", "2024-01-07"),
            txn("b", "2024-01-03"),
            txn("c", "2024-01-05"),
        ];
        let w = DateWindow::covering(&txns).unwrap();
        assert_eq!(w.first, NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
        assert_eq!(w.last, NaiveDate::from_ymd_opt(2024, 1, 7).unwrap());
    }

    #[test]
    fn test_same_day_window() {
        let txns = vec![txn("a", "2024-01-05"), txn("b", "2024-01-05")];
        let w = DateWindow::covering(&txns).unwrap();
        assert_eq!(w.first, w.last);
        assert!(w.begin() < w.end());
    }

    #[test]
    fn test_empty_batch_has_no_window() {
        assert_eq!(DateWindow::covering(&[]), None);
    }

    #[test]
    fn test_bounds_span_whole_days() {
        let txns = vec![txn("a", "2024-01-05")];
        let w = DateWindow::covering(&txns).unwrap();
        assert_eq!(w.begin().to_string(), "2024-01-05 00:00:00");
        assert_eq!(w.end().to_string(), "2024-01-05 23:59:59.999");
    }
}

//! Wire-level records for the two reconciliation sources.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

/// A transaction as the budgeting ledger reports it.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LedgerTransaction {
    pub id: String,
    pub date: NaiveDate,
    /// Signed milliunits: 1000 per currency unit, negative = outflow.
    pub amount: i64,
    #[serde(default)]
    pub payee_name: Option<String>,
    #[serde(default)]
    pub memo: Option<String>,
}

impl LedgerTransaction {
    /// True when the memo has never been filled in.
    pub fn memo_is_blank(&self) -> bool {
        self.memo.as_deref().is_none_or(str::is_empty)
    }
}

/// A transaction as the card issuer reports it.
///
/// The issuer feed is noisy: records can arrive without an amount, without
/// a merchant, or with a descriptor that is not text. Every such field is
/// optional so a partial record deserializes instead of failing the run.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct IssuerTransaction {
    /// Unsigned cents: 100 per currency unit.
    #[serde(default)]
    pub amount: Option<u64>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    /// Zero marks a non-monetary event (declined or pending authorization).
    #[serde(default)]
    pub authorization_amount: Option<u64>,
    #[serde(default)]
    pub merchant: Option<Merchant>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Merchant {
    #[serde(default)]
    pub descriptor: Option<serde_json::Value>,
}

impl IssuerTransaction {
    /// Merchant descriptor, only when present and actually text.
    pub fn descriptor(&self) -> Option<&str> {
        self.merchant.as_ref()?.descriptor.as_ref()?.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ledger_decode() {
        let txn: LedgerTransaction = serde_json::from_value(json!({
            "id": "t1",
            "date": "2024-01-05",
            "amount": -71880,
            "payee_name": "Pwp*privacy.com",
            "memo": null
        }))
        .unwrap();
        assert_eq!(txn.id, "t1");
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(txn.amount, -71880);
        assert!(txn.memo_is_blank());
    }

    #[test]
    fn test_memo_blank_covers_null_and_empty() {
        let mut txn: LedgerTransaction = serde_json::from_value(json!({
            "id": "t1", "date": "2024-01-05", "amount": -1000
        }))
        .unwrap();
        assert!(txn.memo_is_blank());
        txn.memo = Some(String::new());
        assert!(txn.memo_is_blank());
        txn.memo = Some("WASTE MGMT WM EZPAY".to_string());
        assert!(!txn.memo_is_blank());
    }

    #[test]
    fn test_issuer_decode_full_record() {
        let txn: IssuerTransaction = serde_json::from_value(json!({
            "amount": 7188,
            "created": "2024-01-05T14:03:00Z",
            "authorization_amount": 7188,
            "merchant": {"descriptor": "WASTE MGMT WM EZPAY"}
        }))
        .unwrap();
        assert_eq!(txn.amount, Some(7188));
        assert_eq!(txn.descriptor(), Some("WASTE MGMT WM EZPAY"));
    }

    #[test]
    fn test_issuer_decode_partial_records() {
        // No amount at all
        let txn: IssuerTransaction = serde_json::from_value(json!({
            "merchant": {"descriptor": "SOMEWHERE"}
        }))
        .unwrap();
        assert_eq!(txn.amount, None);

        // No merchant
        let txn: IssuerTransaction = serde_json::from_value(json!({"amount": 7188})).unwrap();
        assert_eq!(txn.descriptor(), None);

        // Merchant without descriptor
        let txn: IssuerTransaction =
            serde_json::from_value(json!({"amount": 7188, "merchant": {}})).unwrap();
        assert_eq!(txn.descriptor(), None);
    }

    #[test]
    fn test_issuer_non_text_descriptor_is_not_text() {
        let txn: IssuerTransaction = serde_json::from_value(json!({
            "amount": 7188,
            "merchant": {"descriptor": 12345}
        }))
        .unwrap();
        assert_eq!(txn.descriptor(), None);
    }
}

//! Currency re-basing between the two services' fixed-point encodings.

/// Convert a ledger milliunit amount to the issuer's cent encoding.
///
/// The ledger stores three decimal places with sign (an outflow of $71.88
/// is -71880); the issuer stores two decimal places, unsigned. The last
/// digit is truncated, never rounded: 71885 milliunits is still 7188 cents.
pub fn milliunits_to_cents(amount: i64) -> u64 {
    amount.unsigned_abs() / 10
}

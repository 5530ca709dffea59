//! memofill-core: matching and reconciliation between a budgeting ledger
//! and a card issuer's transaction feed.

pub mod amounts;
pub mod matcher;
pub mod pipeline;
pub mod types;
pub mod window;

pub use amounts::milliunits_to_cents;
pub use matcher::find_and_consume;
pub use pipeline::{IssuerService, LedgerService, RunOptions, RunSummary};
pub use types::{IssuerTransaction, LedgerTransaction, Merchant};
pub use window::DateWindow;

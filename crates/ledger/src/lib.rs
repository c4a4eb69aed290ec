//! Ledger aggregation engine.
//!
//! Pure, stateless computation from a project's seats to the three reports:
//! trial balance (4-digit main accounts), T-accounts (6-digit sub-accounts
//! with per-posting detail), and the printable receipt for one seat. Every
//! operation is a total function of its input: no I/O, no shared state, and
//! no errors — malformed amounts were already degraded to zero by the data
//! model, so the only anomaly a report surfaces is its `balanced` flag.
//!
//! All three reports share one grouping primitive ([`group_by_prefix`]); the
//! caller supplies a consistent snapshot of seats and may run reports
//! concurrently, since nothing here reads or writes beyond its arguments.

pub mod group;
pub mod nature;
pub mod receipt;
pub mod t_accounts;
pub mod trial_balance;

pub use group::{AccountGroup, Balance, Granularity, GroupedPostings, Posting, fold_balance, group_by_prefix, postings};
pub use nature::Nature;
pub use receipt::{Receipt, ReceiptGroup, ReceiptLine, ReceiptSubAccount, description_parts, receipt};
pub use t_accounts::{LedgerEntry, TAccount, t_accounts};
pub use trial_balance::{TrialBalance, trial_balance};

//! Audit project data model.
//!
//! Projects own an ordered list of seats (journal entries); each seat carries
//! line items posting debits and credits against hierarchical account codes.
//! Pure data + serde; aggregation lives in `auditbook-ledger`, persistence in
//! `auditbook-infra`.

pub mod account;
pub mod amount;
pub mod project;
pub mod seat;

pub use account::AccountCode;
pub use project::Project;
pub use seat::{LineItem, Seat, SeatTotals};

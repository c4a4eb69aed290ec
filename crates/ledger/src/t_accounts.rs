//! T-accounts: per-sub-account posting detail with a folded closing balance.

use rust_decimal::Decimal;

use auditbook_projects::Seat;

use crate::group::{AccountGroup, Granularity, group_by_prefix, postings};

/// One row of a T-account: a posting with its seat's date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub date: String,
    pub description: String,
    pub debit: Decimal,
    pub credit: Decimal,
}

/// One 6-digit sub-account with chronological detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TAccount {
    pub account: AccountGroup,
    /// Source order: seat order, then line-item order within a seat.
    pub entries: Vec<LedgerEntry>,
}

/// Compute the T-account ledger for a snapshot of seats.
pub fn t_accounts(seats: &[Seat]) -> Vec<TAccount> {
    let accounts: Vec<TAccount> = group_by_prefix(postings(seats), Granularity::Sub)
        .iter()
        .map(|group| TAccount {
            account: AccountGroup::summarize(group),
            entries: group
                .postings
                .iter()
                .map(|posting| LedgerEntry {
                    date: posting.date.to_string(),
                    description: posting.line.description.clone(),
                    debit: posting.line.debit,
                    credit: posting.line.credit,
                })
                .collect(),
        })
        .collect();

    tracing::debug!(accounts = accounts.len(), "t-accounts computed");
    accounts
}

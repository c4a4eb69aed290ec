//! Trial balance: main-account balances and the debit/credit totals check.

use rust_decimal::Decimal;

use auditbook_projects::Seat;

use crate::group::{AccountGroup, Granularity, group_by_prefix, postings};

/// Trial balance over a project's seats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialBalance {
    /// One row per 4-digit main account, first-seen order.
    pub accounts: Vec<AccountGroup>,
    /// Sum of the rows' `final_debit` figures.
    pub total_debit: Decimal,
    /// Sum of the rows' `final_credit` figures.
    pub total_credit: Decimal,
    /// Exact decimal equality of the two totals; an unbalanced book is a
    /// reportable outcome, not an error.
    pub balanced: bool,
}

/// Compute the trial balance for a snapshot of seats.
pub fn trial_balance(seats: &[Seat]) -> TrialBalance {
    let accounts: Vec<AccountGroup> = group_by_prefix(postings(seats), Granularity::Main)
        .iter()
        .map(AccountGroup::summarize)
        .collect();

    let total_debit: Decimal = accounts.iter().map(|a| a.final_debit).sum();
    let total_credit: Decimal = accounts.iter().map(|a| a.final_credit).sum();
    let balanced = total_debit == total_credit;

    tracing::debug!(
        accounts = accounts.len(),
        %total_debit,
        %total_credit,
        balanced,
        "trial balance computed"
    );

    TrialBalance {
        accounts,
        total_debit,
        total_credit,
        balanced,
    }
}

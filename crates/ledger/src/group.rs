//! Prefix grouping and balance folding.
//!
//! The single grouping primitive shared by the trial balance, the T-account
//! ledger, and the receipt (the same aggregation used to be written out three
//! times, once per report).

use std::collections::HashMap;

use rust_decimal::Decimal;

use auditbook_projects::{AccountCode, LineItem, Seat};

use crate::nature::Nature;

/// Report granularity: how much of the code segment keys a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    /// Main account: first 4 characters.
    Main,
    /// Sub-account: first 6 characters.
    Sub,
}

impl Granularity {
    pub fn prefix<'a>(&self, code: &'a AccountCode) -> &'a str {
        match self {
            Granularity::Main => code.main_code(),
            Granularity::Sub => code.sub_code(),
        }
    }
}

/// One posting: a line item paired with its owning seat's date.
#[derive(Debug, Clone, Copy)]
pub struct Posting<'a> {
    pub date: &'a str,
    pub line: &'a LineItem,
}

/// Flatten seats into postings, seat order then line-item order.
pub fn postings(seats: &[Seat]) -> impl Iterator<Item = Posting<'_>> {
    seats.iter().flat_map(|seat| {
        seat.line_items.iter().map(move |line| Posting {
            date: &seat.date,
            line,
        })
    })
}

/// Postings sharing one account-code prefix.
#[derive(Debug, Clone)]
pub struct GroupedPostings<'a> {
    pub code: String,
    pub nature: Nature,
    /// Members in source order (seat order, then line order within a seat).
    pub postings: Vec<Posting<'a>>,
}

/// Group postings by account-code prefix.
///
/// Every posting with a non-blank code segment lands in exactly one group;
/// postings with a blank segment are excluded outright rather than pooled
/// under an empty key. Groups come back in first-seen order with members in
/// source order. Prefixes are taken from the code segment (the part before
/// any `-name` suffix), so short codes group under the whole segment instead
/// of a corrupted slice of the raw string.
pub fn group_by_prefix<'a>(
    postings: impl IntoIterator<Item = Posting<'a>>,
    granularity: Granularity,
) -> Vec<GroupedPostings<'a>> {
    let mut groups: Vec<GroupedPostings<'a>> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for posting in postings {
        if posting.line.account_code.is_blank() {
            continue;
        }

        let key = granularity.prefix(&posting.line.account_code);
        let slot = match index.get(key) {
            Some(&i) => i,
            None => {
                groups.push(GroupedPostings {
                    code: key.to_string(),
                    nature: Nature::classify(key),
                    postings: Vec::new(),
                });
                index.insert(key.to_string(), groups.len() - 1);
                groups.len() - 1
            }
        };
        groups[slot].postings.push(posting);
    }

    groups
}

/// A net balance folded to the nature-appropriate column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Balance {
    pub final_debit: Decimal,
    pub final_credit: Decimal,
}

/// Fold raw totals to the side dictated by the account's nature.
///
/// A debit-natured account nets debits minus credits into `final_debit`; if
/// that goes negative the magnitude moves to `final_credit` instead (and
/// symmetrically for credit-natured accounts). At most one side is ever
/// positive, and `final_debit - final_credit` always equals
/// `total_debit - total_credit`.
pub fn fold_balance(nature: Nature, total_debit: Decimal, total_credit: Decimal) -> Balance {
    match nature {
        Nature::Debit => {
            let net = total_debit - total_credit;
            if net < Decimal::ZERO {
                Balance {
                    final_debit: Decimal::ZERO,
                    final_credit: -net,
                }
            } else {
                Balance {
                    final_debit: net,
                    final_credit: Decimal::ZERO,
                }
            }
        }
        Nature::Credit => {
            let net = total_credit - total_debit;
            if net < Decimal::ZERO {
                Balance {
                    final_debit: -net,
                    final_credit: Decimal::ZERO,
                }
            } else {
                Balance {
                    final_debit: Decimal::ZERO,
                    final_credit: net,
                }
            }
        }
    }
}

/// Account-level summary, recomputed from scratch on every report call and
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountGroup {
    pub code: String,
    pub nature: Nature,
    pub total_debit: Decimal,
    pub total_credit: Decimal,
    pub final_debit: Decimal,
    pub final_credit: Decimal,
}

impl AccountGroup {
    /// Sum a group's raw columns and fold the net to its natural side.
    pub fn summarize(group: &GroupedPostings<'_>) -> Self {
        let mut total_debit = Decimal::ZERO;
        let mut total_credit = Decimal::ZERO;
        for posting in &group.postings {
            total_debit += posting.line.debit;
            total_credit += posting.line.credit;
        }

        let balance = fold_balance(group.nature, total_debit, total_credit);
        Self {
            code: group.code.clone(),
            nature: group.nature,
            total_debit,
            total_credit,
            final_debit: balance.final_debit,
            final_credit: balance.final_credit,
        }
    }
}

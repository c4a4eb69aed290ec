//! Seats (journal entries) and their line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use auditbook_core::{Entity, ProjectId, SeatId};

use crate::account::AccountCode;
use crate::amount;

/// One debit-or-credit posting within a seat.
///
/// `debit` and `credit` are independently non-negative in well-formed data,
/// but nothing here enforces that exactly one is nonzero; the aggregation
/// engine tolerates both populated (summed into both columns) or both zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub account_code: AccountCode,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "amount::lenient")]
    pub debit: Decimal,
    #[serde(default, deserialize_with = "amount::lenient")]
    pub credit: Decimal,
}

impl LineItem {
    pub fn new(account_code: impl Into<AccountCode>, debit: Decimal, credit: Decimal) -> Self {
        Self {
            account_code: account_code.into(),
            description: String::new(),
            debit,
            credit,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// One double-entry journal entry ("seat" in audit parlance).
///
/// Line item order matters for receipt display; aggregation ignores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub id: SeatId,
    pub project_id: ProjectId,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
    // Serialized as `details` for compatibility with exported project files.
    #[serde(default, rename = "details")]
    pub line_items: Vec<LineItem>,
}

impl Seat {
    /// New empty seat attached to a project.
    pub fn new(project_id: ProjectId) -> Self {
        Self {
            id: SeatId::new(),
            project_id,
            date: String::new(),
            description: String::new(),
            line_items: Vec::new(),
        }
    }

    /// Raw debit/credit totals over every line item (blank codes included).
    pub fn totals(&self) -> SeatTotals {
        let mut totals = SeatTotals::default();
        for line in &self.line_items {
            totals.total_debit += line.debit;
            totals.total_credit += line.credit;
        }
        totals
    }
}

impl Entity for Seat {
    type Id = SeatId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Per-seat totals row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeatTotals {
    pub total_debit: Decimal,
    pub total_credit: Decimal,
}

impl SeatTotals {
    /// Exact decimal equality; inputs are decimal-quantized, so no epsilon.
    pub fn balanced(&self) -> bool {
        self.total_debit == self.total_credit
    }
}

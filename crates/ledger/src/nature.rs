//! Account nature: the side on which an account normally carries its balance.

use serde::{Deserialize, Serialize};

use auditbook_core::ValueObject;

/// Natural balance side of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nature {
    Debit,
    Credit,
}

impl Nature {
    /// Classify from the first character of a code segment.
    ///
    /// Codes starting with `1` (assets), `5` (expenses) or `6` (costs) are
    /// debit-natured; everything else is credit-natured. An empty segment
    /// classifies as `Credit` — the fixed fallback for codes with nothing to
    /// inspect.
    pub fn classify(code: &str) -> Self {
        match code.chars().next() {
            Some('1' | '5' | '6') => Nature::Debit,
            _ => Nature::Credit,
        }
    }

    pub fn is_debit(&self) -> bool {
        matches!(self, Nature::Debit)
    }
}

impl ValueObject for Nature {}

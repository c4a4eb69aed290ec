//! Hierarchical account codes.
//!
//! Raw form is `<digits>[-<name>]`, e.g. `1105-Caja`. The digit segment before
//! the first `-` is the code proper; its first 4 characters identify the main
//! account and the first 6 the sub-account.

use serde::{Deserialize, Serialize};

use auditbook_core::ValueObject;

/// Account code value object (raw user-entered string).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountCode(String);

impl AccountCode {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The code segment: everything before the first `-`, trimmed.
    pub fn code(&self) -> &str {
        match self.0.split_once('-') {
            Some((code, _)) => code.trim(),
            None => self.0.trim(),
        }
    }

    /// The display name after the first `-`, trimmed; empty if absent.
    pub fn display_name(&self) -> &str {
        match self.0.split_once('-') {
            Some((_, name)) => name.trim(),
            None => "",
        }
    }

    /// True when the code segment is empty (nothing to group on).
    pub fn is_blank(&self) -> bool {
        self.code().is_empty()
    }

    /// Main-account prefix: first 4 characters of the code segment.
    pub fn main_code(&self) -> &str {
        prefix(self.code(), 4)
    }

    /// Sub-account prefix: first 6 characters of the code segment.
    pub fn sub_code(&self) -> &str {
        prefix(self.code(), 6)
    }
}

impl ValueObject for AccountCode {}

impl From<&str> for AccountCode {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for AccountCode {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for AccountCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// First `n` characters of `s`; the whole string when shorter.
fn prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

//! Audit projects: the unit of work owning seats.

use serde::{Deserialize, Serialize};

use auditbook_core::{Entity, ProjectId, SeatId};

use crate::account::AccountCode;
use crate::seat::Seat;

/// An audit project and its seats.
///
/// Serialized field names (`companyName`, `auditorName`, seats' `details`)
/// match the JSON files produced by project export, so exported projects
/// import back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: String,
    #[serde(default, rename = "companyName")]
    pub company_name: String,
    #[serde(default, rename = "auditorName")]
    pub auditor_name: String,
    #[serde(default)]
    pub seats: Vec<Seat>,
}

impl Project {
    /// New project with a freshly minted id and no seats.
    pub fn new(name: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id: ProjectId::new(),
            name: name.into(),
            description: String::new(),
            date: date.into(),
            company_name: String::new(),
            auditor_name: String::new(),
            seats: Vec::new(),
        }
    }

    pub fn seat(&self, id: SeatId) -> Option<&Seat> {
        self.seats.iter().find(|s| s.id == id)
    }

    /// Distinct account codes used anywhere in this project, first-seen order.
    ///
    /// Feeds the account picker in seat entry; empty raw codes are skipped.
    pub fn used_accounts(&self) -> Vec<&AccountCode> {
        let mut seen: Vec<&AccountCode> = Vec::new();
        for seat in &self.seats {
            for line in &seat.line_items {
                if line.account_code.as_str().is_empty() {
                    continue;
                }
                if !seen.contains(&&line.account_code) {
                    seen.push(&line.account_code);
                }
            }
        }
        seen
    }
}

impl Entity for Project {
    type Id = ProjectId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

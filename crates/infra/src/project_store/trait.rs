use thiserror::Error;

use auditbook_core::ProjectId;
use auditbook_projects::{Project, Seat};

#[derive(Debug, Error)]
pub enum ProjectStoreError {
    #[error("project not found: {0}")]
    NotFound(ProjectId),

    #[error("storage failure: {0}")]
    Storage(String),
}

/// Repository of audit projects.
///
/// Reports never go through this trait: callers fetch a project, hand its
/// seats to the ledger engine, and render the result. Writes happen only from
/// the editing surfaces.
pub trait ProjectStore: Send + Sync {
    /// Fetch one project by id.
    fn get(&self, id: ProjectId) -> Result<Project, ProjectStoreError>;

    /// All projects in insertion order.
    fn list(&self) -> Result<Vec<Project>, ProjectStoreError>;

    /// Upsert: replace the project with the same id in place, else append.
    fn save(&self, project: Project) -> Result<(), ProjectStoreError>;

    /// Remove a project; removing an absent id is a no-op.
    fn delete(&self, id: ProjectId) -> Result<(), ProjectStoreError>;

    /// Replace one project's seat list (the seat editor writes through here).
    fn save_seats(&self, id: ProjectId, seats: Vec<Seat>) -> Result<(), ProjectStoreError>;
}

use std::sync::RwLock;

use auditbook_core::ProjectId;
use auditbook_projects::{Project, Seat};

use super::r#trait::{ProjectStore, ProjectStoreError};

/// In-memory project store.
///
/// Order-preserving, the in-process analogue of the original single
/// key-value blob. Intended for tests/dev and single-user sessions.
#[derive(Debug, Default)]
pub struct InMemoryProjectStore {
    projects: RwLock<Vec<Project>>,
}

impl InMemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store from an existing project list (e.g. an imported file).
    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            projects: RwLock::new(projects),
        }
    }
}

impl ProjectStore for InMemoryProjectStore {
    fn get(&self, id: ProjectId) -> Result<Project, ProjectStoreError> {
        let projects = self
            .projects
            .read()
            .map_err(|_| ProjectStoreError::Storage("lock poisoned".to_string()))?;

        projects
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ProjectStoreError::NotFound(id))
    }

    fn list(&self) -> Result<Vec<Project>, ProjectStoreError> {
        let projects = self
            .projects
            .read()
            .map_err(|_| ProjectStoreError::Storage("lock poisoned".to_string()))?;

        Ok(projects.clone())
    }

    fn save(&self, project: Project) -> Result<(), ProjectStoreError> {
        let mut projects = self
            .projects
            .write()
            .map_err(|_| ProjectStoreError::Storage("lock poisoned".to_string()))?;

        match projects.iter_mut().find(|p| p.id == project.id) {
            Some(existing) => {
                tracing::debug!(project_id = %project.id, "project updated");
                *existing = project;
            }
            None => {
                tracing::debug!(project_id = %project.id, "project created");
                projects.push(project);
            }
        }
        Ok(())
    }

    fn delete(&self, id: ProjectId) -> Result<(), ProjectStoreError> {
        let mut projects = self
            .projects
            .write()
            .map_err(|_| ProjectStoreError::Storage("lock poisoned".to_string()))?;

        projects.retain(|p| p.id != id);
        Ok(())
    }

    fn save_seats(&self, id: ProjectId, seats: Vec<Seat>) -> Result<(), ProjectStoreError> {
        let mut projects = self
            .projects
            .write()
            .map_err(|_| ProjectStoreError::Storage("lock poisoned".to_string()))?;

        let project = projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ProjectStoreError::NotFound(id))?;
        project.seats = seats;
        Ok(())
    }
}

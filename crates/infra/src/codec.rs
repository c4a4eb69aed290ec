//! Project file import/export.
//!
//! One project per file, pretty-printed JSON in the original export shape
//! (`companyName`, `auditorName`, seats' line items under `details`), so
//! files exported elsewhere import here unchanged.

use thiserror::Error;

use auditbook_projects::Project;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("failed to parse project file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Serialize one project to a pretty-printed JSON document.
pub fn export_project(project: &Project) -> Result<String, CodecError> {
    Ok(serde_json::to_string_pretty(project)?)
}

/// Parse one project from a JSON document.
///
/// Malformed files surface as a single [`CodecError`]; debit/credit cells the
/// file got wrong come back as zero rather than failing the whole import.
pub fn import_project(json: &str) -> Result<Project, CodecError> {
    let project = serde_json::from_str(json)?;
    Ok(project)
}

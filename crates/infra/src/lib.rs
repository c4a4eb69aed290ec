//! Infrastructure: project persistence and import/export.
//!
//! The ledger engine never touches this layer; it receives a snapshot of
//! seats from the caller. Stores implement [`ProjectStore`] so the engine and
//! its tests depend on an injected interface rather than shared global state.

pub mod codec;
pub mod project_store;

pub use codec::{CodecError, export_project, import_project};
pub use project_store::{InMemoryProjectStore, ProjectStore, ProjectStoreError};

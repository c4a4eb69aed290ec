//! Project persistence.

mod in_memory;
mod r#trait;

pub use in_memory::InMemoryProjectStore;
pub use r#trait::{ProjectStore, ProjectStoreError};

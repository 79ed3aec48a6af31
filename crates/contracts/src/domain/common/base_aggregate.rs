use super::EntityMetadata;
use serde::{Deserialize, Serialize};

/// Base aggregate with the fields every document record shares
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseAggregate<Id> {
    /// Unique record identifier
    pub id: Id,
    /// Business document code (e.g. "PV-2026-001", "JRN-2026-014")
    pub code: String,
    /// Description / purpose of the record
    pub description: String,
    /// Lifecycle metadata
    pub metadata: EntityMetadata,
}

impl<Id> BaseAggregate<Id> {
    pub fn new(id: Id, code: String, description: String) -> Self {
        Self {
            id,
            code,
            description,
            metadata: EntityMetadata::new(),
        }
    }

    /// Refresh the update timestamp
    pub fn touch(&mut self) {
        self.metadata.touch();
    }
}

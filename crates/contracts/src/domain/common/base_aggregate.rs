use super::entity_metadata::EntityMetadata;
use serde::{Deserialize, Serialize};

/// Fields shared by every aggregate: typed id, human-readable code,
/// display description, free-form comment and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseAggregate<Id> {
    pub id: Id,

    /// Short human-readable code shown in lists ("ORD-007").
    pub code: String,

    pub description: String,

    pub comment: Option<String>,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl<Id> BaseAggregate<Id> {
    pub fn new(id: Id, code: String, description: String) -> Self {
        Self {
            id,
            code,
            description,
            comment: None,
            metadata: EntityMetadata::new(),
        }
    }

    pub fn touch(&mut self) {
        self.metadata.touch();
    }
}
